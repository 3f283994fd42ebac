//! Player identity: name and birthdate validation.
//!
//! Both validators are pure. Retrying on failure is the caller's job; the
//! error's `Display` text is the exact message shown to the player.

use tracing::{debug, instrument};

/// Earliest accepted birth year.
pub const MIN_BIRTH_YEAR: u32 = 1900;

/// Latest accepted birth year.
pub const MAX_BIRTH_YEAR: u32 = 9999;

/// Error raised while validating identity input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum IdentityError {
    /// Name contains something other than letters and spaces.
    #[display("Invalid input. \nYour game name can only contain characters.")]
    InvalidNameFormat,

    /// Birthdate is not exactly eight digits.
    #[display("Invalid format. Please use YYYYMMDD format.")]
    InvalidDateFormat,

    /// Birthdate has a year, month or day outside its accepted range.
    #[display("Invalid date. Please enter a valid date.")]
    InvalidDateRange,
}

/// A validated player name, first character uppercased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{_0}")]
pub struct PlayerName(String);

impl PlayerName {
    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validates a player name.
///
/// Accepts letters and spaces only. Surrounding whitespace is trimmed first and
/// a blank name is rejected. Only the first character is uppercased; the rest
/// of the name is kept as typed.
#[instrument]
pub fn validate_name(raw: &str) -> Result<PlayerName, IdentityError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_alphabetic() || c == ' ') {
        debug!("Rejected player name");
        return Err(IdentityError::InvalidNameFormat);
    }

    let mut chars = trimmed.chars();
    let name: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    Ok(PlayerName(name))
}

/// A validated `YYYYMMDD` birthdate.
///
/// Day 31 is accepted for every month and leap years are not checked; only the
/// component ranges are enforced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{raw}")]
pub struct Birthdate {
    raw: String,
    year: u32,
    month: u32,
    day: u32,
}

impl Birthdate {
    /// Returns the birthdate exactly as entered.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Year component (digits 0-3).
    pub fn year(&self) -> u32 {
        self.year
    }

    /// Month component (digits 4-5).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Day component (digits 6-7).
    pub fn day(&self) -> u32 {
        self.day
    }
}

/// Validates a birthdate in `YYYYMMDD` form.
///
/// The line is checked as read: padding with spaces makes it longer than eight
/// characters and is rejected.
#[instrument]
pub fn validate_birthdate(raw: &str) -> Result<Birthdate, IdentityError> {
    if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        debug!("Birthdate has wrong shape");
        return Err(IdentityError::InvalidDateFormat);
    }

    // All ASCII digits, so byte slicing is safe and parsing cannot fail.
    let component = |range: std::ops::Range<usize>| -> Result<u32, IdentityError> {
        raw[range]
            .parse()
            .map_err(|_| IdentityError::InvalidDateFormat)
    };
    let year = component(0..4)?;
    let month = component(4..6)?;
    let day = component(6..8)?;

    if !(MIN_BIRTH_YEAR..=MAX_BIRTH_YEAR).contains(&year)
        || !(1..=12).contains(&month)
        || !(1..=31).contains(&day)
    {
        debug!(year, month, day, "Birthdate out of range");
        return Err(IdentityError::InvalidDateRange);
    }

    Ok(Birthdate {
        raw: raw.to_string(),
        year,
        month,
        day,
    })
}
