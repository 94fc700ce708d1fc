//! Command shell over the csillesz conversion, distance and sidereal-time crates.
//!
//! The binary reads one command per line and hands it to
//! [`commands::dispatch`], which parses the arguments, calls into the
//! computational crates with a [`session::Session`] holding the injected city
//! table and calendar configuration, and returns a [`commands::CommandOutput`]
//! for display. Errors come back as [`Error`] and never end the session.

pub mod commands;
pub mod config;
pub mod error;
pub mod parser;
pub mod session;

pub use error::{Error, Result};
