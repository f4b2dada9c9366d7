//! Error types for parsing and validating engine inputs.
//!
//! The divination operations themselves never fail; these errors only
//! surface at the edges where names and dates come in as text.

use thiserror::Error;

/// Errors from name parsing and optional input validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum LiurenError {
    /// A name did not match any known value of the given kind.
    #[error("unknown {kind}: {value:?}")]
    UnknownName { kind: &'static str, value: String },
    /// A calendar component is outside its valid range.
    #[error("invalid calendar date: {0}")]
    InvalidDate(&'static str),
    /// A birth date string was not of the form YYYY-MM-DD.
    #[error("malformed birth date {0:?}, expected YYYY-MM-DD")]
    MalformedBirthDate(String),
}

impl LiurenError {
    pub(crate) fn unknown(kind: &'static str, value: &str) -> Self {
        Self::UnknownName {
            kind,
            value: value.to_string(),
        }
    }
}
