//! Wall-clock ↔ minute-of-day conversion.
//!
//! All comparisons elsewhere in the crate happen on integer minute offsets;
//! `HH:MM` strings exist only at the wire boundary.

use thiserror::Error;

/// Minutes in one day.
pub const MINUTES_PER_DAY: u16 = 1440;

/// The last representable minute of a day (23:59).
pub const LAST_MINUTE: u16 = MINUTES_PER_DAY - 1;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{input:?} is not a valid 24-hour HH:MM time")]
pub struct ParseTimeError {
    pub input: String,
}

/// Parses a strict 24-hour `HH:MM` string into a minute-of-day offset in
/// `0..=1439`. Both fields must be exactly two digits; out-of-range hours or
/// minutes are rejected rather than wrapped.
pub fn parse_hhmm(input: &str) -> Result<u16, ParseTimeError> {
    let err = || ParseTimeError {
        input: input.to_string(),
    };

    let (hh, mm) = input.split_once(':').ok_or_else(err)?;
    if hh.len() != 2 || mm.len() != 2 {
        return Err(err());
    }
    if !hh.bytes().chain(mm.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(err());
    }

    let hours: u16 = hh.parse().map_err(|_| err())?;
    let minutes: u16 = mm.parse().map_err(|_| err())?;
    if hours > 23 || minutes > 59 {
        return Err(err());
    }

    Ok(hours * 60 + minutes)
}

/// Formats a minute-of-day offset back into zero-padded `HH:MM`; the inverse
/// of [`parse_hhmm`] for any value in `0..=1439`.
pub fn format_hhmm(minutes: u16) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Derived end of a slot. Widened to `u32` so that unvalidated input can
/// never overflow before the range check runs; a result past [`LAST_MINUTE`]
/// is a validation error, never wrapped around midnight.
pub fn end_minute(start_minute: u16, duration_minutes: u16) -> u32 {
    u32::from(start_minute) + u32::from(duration_minutes)
}
