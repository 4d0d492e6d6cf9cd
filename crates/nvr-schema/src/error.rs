//! Error taxonomy for identity parsing and record construction.

/// A record field rejected by validation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {field}: '{value}'")]
pub struct FieldError {
    /// Which field was rejected (`name`, `epoch`, `version`, `release`, `arch`).
    pub field: &'static str,
    /// The offending value.
    pub value: String,
}

impl FieldError {
    /// Create a new field error.
    pub fn new(field: &'static str, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

/// Why an identity string could not be resolved against its grammar.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    /// Not enough dash-delimited tokens for the grammar.
    #[error("at least {expected} required")]
    TooFewFields {
        /// Human readable shape of the grammar, e.g. `name-version-release`.
        expected: &'static str,
    },

    /// More dash-delimited tokens than the grammar allows.
    #[error("too many '-' separated fields, expected {expected}")]
    TooManyFields {
        /// Human readable shape of the grammar.
        expected: &'static str,
    },

    /// The epoch appears in more than one position.
    #[error("epoch given in more than one position")]
    MultipleEpochs,

    /// A colon appears somewhere an epoch may not be placed.
    #[error("epoch must lead the identity, precede the version, or trail the identity")]
    MisplacedEpoch,

    /// The epoch is not a string of ASCII digits.
    #[error("epoch '{0}' is not a non-negative integer")]
    NonNumericEpoch(String),

    /// The NVRA grammar requires a trailing `.arch` on the release.
    #[error("architecture suffix required")]
    MissingArch,

    /// A resolved field failed record validation.
    #[error("{0}")]
    InvalidField(FieldError),
}

/// Errors produced while building identity records.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    /// The input string does not match the identity grammar. There is no
    /// partial result: callers never see a half-populated record.
    #[error("Malformed identity '{input}': {reason}")]
    Malformed {
        /// The string handed to the parser, verbatim.
        input: String,
        /// What went wrong.
        reason: MalformedReason,
    },

    /// A record was constructed directly from invalid fields.
    #[error(transparent)]
    InvalidField(#[from] FieldError),
}

impl IdentityError {
    /// Build a [`IdentityError::Malformed`] for `input`.
    pub fn malformed(input: &str, reason: MalformedReason) -> Self {
        Self::Malformed {
            input: input.to_string(),
            reason,
        }
    }

    /// The grammar failure, if this is a parse error.
    pub fn reason(&self) -> Option<&MalformedReason> {
        match self {
            Self::Malformed { reason, .. } => Some(reason),
            Self::InvalidField(_) => None,
        }
    }

    /// Whether this error came from the parser rather than a constructor.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_message() {
        let err = IdentityError::malformed(
            "net-snmp",
            MalformedReason::TooFewFields {
                expected: "name-version-release",
            },
        );
        assert_eq!(
            err.to_string(),
            "Malformed identity 'net-snmp': at least name-version-release required"
        );
        assert!(err.is_malformed());
    }

    #[test]
    fn test_field_error_is_not_malformed() {
        let err: IdentityError = FieldError::new("version", "1-2").into();
        assert!(!err.is_malformed());
        assert_eq!(err.reason(), None);
        assert_eq!(err.to_string(), "Invalid version: '1-2'");
    }
}
