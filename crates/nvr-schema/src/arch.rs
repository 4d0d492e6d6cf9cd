//! Package architecture.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::FieldError;

/// Architectures that denote a source package rather than a binary build.
pub const SOURCE_ARCHES: [&str; 2] = ["src", "nosrc"];

/// Package architecture, e.g. `x86_64`, `noarch` or `src`.
///
/// RPM architectures are an open set, so this is a validated string rather
/// than an enum. An arch never contains `-`, `:`, `.`, `/` or whitespace:
/// it is the last dot-separated token of an NVRA.
///
/// # Example
///
/// ```
/// use nvr_schema::Arch;
///
/// let arch = Arch::new("src").unwrap();
/// assert!(arch.is_source());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Arch(String);

impl Arch {
    /// Create a validated architecture.
    ///
    /// # Errors
    ///
    /// Returns a [`FieldError`] if `s` is empty or contains a separator or
    /// whitespace.
    pub fn new(s: impl Into<String>) -> Result<Self, FieldError> {
        let s = s.into();
        let invalid = s.is_empty()
            || s
                .chars()
                .any(|c| c.is_whitespace() || matches!(c, '-' | ':' | '.' | '/'));
        if invalid {
            Err(FieldError::new("arch", s))
        } else {
            Ok(Self(s))
        }
    }

    /// Convert to string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is a source package arch (`src` or `nosrc`).
    pub fn is_source(&self) -> bool {
        SOURCE_ARCHES.contains(&self.0.as_str())
    }
}

impl std::fmt::Display for Arch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl AsRef<str> for Arch {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for Arch {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<'de> Deserialize<'de> for Arch {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(serde::de::Error::custom)
    }
}
