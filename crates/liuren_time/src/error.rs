//! Error types for clock reads and hour mapping.

use thiserror::Error;

/// Errors from local-time conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Local hour is not in 0..=23.
    #[error("hour {0} out of range 0..=23")]
    HourOutOfRange(u32),
    /// Region names a timezone missing from the IANA database.
    #[error("unknown timezone {0:?}")]
    UnknownTimezone(&'static str),
}
