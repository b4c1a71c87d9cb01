//! Error taxonomy shared by every calculator.

use core::fmt;

/// Result type for calculator operations.
pub type Result<T> = core::result::Result<T, CalcError>;

/// Error type for calculator operations.
///
/// No variant is transient: nothing is retried, and no partial result is ever returned alongside an error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalcError {
    /// User input outside the function's domain (non-finite, negative, zero denominator, too-small integer).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Programmer error such as an unknown unit id or shape tag.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The exact result would exceed a practical or representable bound.
    #[error("Too large: {0}")]
    Overflow(String),

    /// A mathematically undefined operation (division by a zero factor, non-real result).
    #[error("Domain error: {0}")]
    Domain(String),
}

impl CalcError {
    /// Builds a [`CalcError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Builds a [`CalcError::Configuration`].
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Builds a [`CalcError::Overflow`].
    pub fn overflow(msg: impl Into<String>) -> Self {
        Self::Overflow(msg.into())
    }

    /// Builds a [`CalcError::Domain`].
    pub fn domain(msg: impl Into<String>) -> Self {
        Self::Domain(msg.into())
    }

    /// The category of this error, for callers that branch on it.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::Overflow(_) => ErrorKind::Overflow,
            Self::Domain(_) => ErrorKind::Domain,
        }
    }

    /// The message without the category prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(m) | Self::Configuration(m) | Self::Overflow(m) | Self::Domain(m) => m,
        }
    }
}

/// Payload-free discriminant of [`CalcError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ErrorKind {
    /// See [`CalcError::Validation`].
    Validation,
    /// See [`CalcError::Configuration`].
    Configuration,
    /// See [`CalcError::Overflow`].
    Overflow,
    /// See [`CalcError::Domain`].
    Domain,
}

impl From<&CalcError> for ErrorKind {
    fn from(err: &CalcError) -> Self {
        err.kind()
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Validation => "validation",
            Self::Configuration => "configuration",
            Self::Overflow => "overflow",
            Self::Domain => "domain",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_category() {
        let err = CalcError::validation("principal must be positive");
        assert_eq!(err.to_string(), "Validation error: principal must be positive");
        assert_eq!(err.message(), "principal must be positive");
    }

    #[test]
    fn kind_matches_variant() {
        assert_eq!(CalcError::configuration("x").kind(), ErrorKind::Configuration);
        assert_eq!(CalcError::overflow("x").kind(), ErrorKind::Overflow);
        assert_eq!(CalcError::domain("x").kind(), ErrorKind::Domain);
        assert_eq!(ErrorKind::Overflow.to_string(), "overflow");
    }
}
