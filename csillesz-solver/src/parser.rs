//! Argument parsing for shell commands.

use csillesz_coords::MeridianInput;
use csillesz_time::CivilDateTime;

use crate::error::{Error, Result};

/// Parses a decimal number or a sexagesimal `d:m[:s]` value.
///
/// A leading minus sign applies to the whole sexagesimal value, so `-0:30`
/// is -0.5.
pub fn parse_number(what: &str, s: &str) -> Result<f64> {
    let invalid = || Error::Parse(format!("invalid {}: {}", what, s));

    let value = if s.contains(':') {
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };
        let parts: Vec<&str> = body.split(':').collect();
        if parts.len() > 3 {
            return Err(invalid());
        }
        let mut value = 0.0;
        let mut scale = 1.0;
        for (i, part) in parts.iter().enumerate() {
            let v: f64 = part.parse().map_err(|_| invalid())?;
            if v < 0.0 || (i > 0 && v >= 60.0) {
                return Err(invalid());
            }
            value += v / scale;
            scale *= 60.0;
        }
        if negative {
            -value
        } else {
            value
        }
    } else {
        s.parse::<f64>().map_err(|_| invalid())?
    };

    if !value.is_finite() {
        return Err(invalid());
    }
    Ok(value)
}

/// Parses `YYYY-MM-DD`; a leading `-` marks a year BC.
pub fn parse_date(s: &str) -> Result<(i32, u8, u8)> {
    let invalid = || Error::Parse(format!("invalid date '{}', expected YYYY-MM-DD", s));

    let (negative, body) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let mut parts = body.split('-');
    let (Some(y), Some(m), Some(d), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid());
    };

    let year: i32 = y.parse().map_err(|_| invalid())?;
    let month: u8 = m.parse().map_err(|_| invalid())?;
    let day: u8 = d.parse().map_err(|_| invalid())?;
    Ok((if negative { -year } else { year }, month, day))
}

/// Parses a wall-clock `HH:MM`.
pub fn parse_time(s: &str) -> Result<(u8, u8)> {
    let invalid = || Error::Parse(format!("invalid time '{}', expected HH:MM", s));
    let (h, m) = s.split_once(':').ok_or_else(invalid)?;
    let hour: u8 = h.parse().map_err(|_| invalid())?;
    let minute: u8 = m.parse().map_err(|_| invalid())?;
    Ok((hour, minute))
}

/// Parses and validates a `YYYY-MM-DD` / `HH:MM` pair.
pub fn parse_datetime(date: &str, time: &str) -> Result<CivilDateTime> {
    let (year, month, day) = parse_date(date)?;
    let (hour, minute) = parse_time(time)?;
    Ok(CivilDateTime::new(year, month, day, hour, minute)?)
}

/// Pulls `RA <value>` and `HA <value>` keyword pairs out of `args`.
///
/// Returns the remaining positional arguments and the meridian input.
/// Both keywords, or neither, is an invalid argument combination.
pub fn split_meridian<'a>(args: &[&'a str]) -> Result<(Vec<&'a str>, MeridianInput)> {
    let mut positional = Vec::new();
    let mut ra = None;
    let mut ha = None;

    let mut iter = args.iter();
    while let Some(&arg) = iter.next() {
        let slot = if arg.eq_ignore_ascii_case("RA") {
            &mut ra
        } else if arg.eq_ignore_ascii_case("HA") {
            &mut ha
        } else {
            positional.push(arg);
            continue;
        };

        let keyword = arg.to_uppercase();
        let value = iter
            .next()
            .ok_or_else(|| Error::Parse(format!("{} needs a value in hours", keyword)))?;
        if slot.is_some() {
            return Err(Error::Parse(format!("{} given twice", keyword)));
        }
        *slot = Some(parse_number(&keyword, value)?);
    }

    let meridian = MeridianInput::from_options(ra, ha)?;
    Ok((positional, meridian))
}

/// Parses exactly `N` numeric arguments.
pub fn parse_numbers<const N: usize>(
    names: [&str; N],
    args: &[&str],
    usage: &str,
) -> Result<[f64; N]> {
    if args.len() != N {
        return Err(Error::Parse(format!("usage: {}", usage)));
    }
    let mut out = [0.0; N];
    for (i, (name, arg)) in names.iter().zip(args).enumerate() {
        out[i] = parse_number(name, arg)?;
    }
    Ok(out)
}
