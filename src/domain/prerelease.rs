//! Prerelease channel suffix of a semantic version
//!
//! A prerelease is always a named channel followed by a counter, e.g. `beta.3`
//! or `rc.0`. Bare identifiers such as `alpha` are not accepted because the
//! counter drives channel continuation.

use crate::error::ParseError;
use std::fmt;

/// Prerelease channel and counter
///
/// # Examples
/// - "beta.1" -> Prerelease { prefix: "beta", number: 1 }
/// - "rc.0" -> Prerelease { prefix: "rc", number: 0 }
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Prerelease {
    /// Channel name (never empty)
    pub prefix: String,
    /// Counter within the channel for one base version
    pub number: u32,
}

impl Prerelease {
    /// Create a new prerelease
    ///
    /// # Arguments
    /// * `prefix` - Channel name
    /// * `number` - Counter value
    pub fn new(prefix: impl Into<String>, number: u32) -> Self {
        Prerelease {
            prefix: prefix.into(),
            number,
        }
    }

    /// Parse a prerelease suffix (the part after the first `-`)
    ///
    /// Splits on the first `.` into prefix and number. `raw` is the whole
    /// version string and only used in the error.
    ///
    /// # Returns
    /// * `Ok(Prerelease)` - Parsed prerelease
    /// * `Err(ParseError::MalformedPrerelease)` - Empty prefix, missing or non-numeric number
    pub fn parse(suffix: &str, raw: &str) -> Result<Self, ParseError> {
        let malformed = || ParseError::MalformedPrerelease(raw.to_string());

        let (prefix, number) = suffix.split_once('.').ok_or_else(malformed)?;
        if prefix.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        let number = number.parse::<u32>().map_err(|_| malformed())?;

        Ok(Prerelease::new(prefix, number))
    }

    /// Next counter in the same channel
    ///
    /// Returns `None` when the counter is already `u32::MAX`.
    pub fn increment(&self) -> Option<Self> {
        Some(Prerelease {
            prefix: self.prefix.clone(),
            number: self.number.checked_add(1)?,
        })
    }
}

impl fmt::Display for Prerelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.prefix, self.number)
    }
}
