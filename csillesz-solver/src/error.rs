use csillesz_core::AstroError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Astro(#[from] AstroError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the shell should simply ask again.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Parse(_) => true,
            Self::Astro(e) => e.is_recoverable(),
            Self::Config(_) | Self::Io(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
