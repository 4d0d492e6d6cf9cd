//! Package epoch.

use std::cmp::Ordering;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::FieldError;

/// Newtype for a package epoch: a non-empty string of ASCII digits.
///
/// The literal form is preserved (`"01"` stays `"01"`) so that formatting
/// reproduces what was parsed. Ordering is numeric and never overflows,
/// because it works on the digit string rather than a machine integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Epoch(String);

impl Epoch {
    /// Create a validated `Epoch`.
    ///
    /// # Errors
    ///
    /// Returns a [`FieldError`] if `s` is empty or contains anything other
    /// than ASCII digits.
    pub fn new(s: impl Into<String>) -> Result<Self, FieldError> {
        let s = s.into();
        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(s))
        } else {
            Err(FieldError::new("epoch", s))
        }
    }

    /// Parse an epoch that may be absent. An empty string means "no epoch".
    ///
    /// # Errors
    ///
    /// Returns a [`FieldError`] if `s` is non-empty and not all digits.
    pub fn parse_optional(s: &str) -> Result<Option<Self>, FieldError> {
        if s.is_empty() {
            Ok(None)
        } else {
            Self::new(s).map(Some)
        }
    }

    /// The zero epoch, substituted when an epoch must be shown but none is set.
    pub fn zero() -> Self {
        Self("0".to_string())
    }

    /// Get the epoch as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the epoch is numerically zero (`"0"`, `"00"`, ...).
    pub fn is_zero(&self) -> bool {
        self.significant().is_empty()
    }

    /// Compare two epochs as unsigned integers.
    pub fn cmp_numeric(&self, other: &Self) -> Ordering {
        let a = self.significant();
        let b = other.significant();
        a.len().cmp(&b.len()).then_with(|| a.cmp(b))
    }

    fn significant(&self) -> &str {
        self.0.trim_start_matches('0')
    }
}

impl std::fmt::Display for Epoch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Epoch {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<u32> for Epoch {
    fn from(value: u32) -> Self {
        Self(value.to_string())
    }
}

impl std::str::FromStr for Epoch {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<'de> Deserialize<'de> for Epoch {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(serde::de::Error::custom)
    }
}
