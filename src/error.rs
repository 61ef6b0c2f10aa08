//! Validation failure types for birth date input.

use serde::Serialize;
use thiserror::Error;

/// Ways a submitted birth date can be rejected.
///
/// All variants are user-input errors and recoverable; the `Display` text is
/// the message shown to the user verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
pub enum ValidationError {
    /// Day, month or year was left unset
    #[error("Please fill in all fields.")]
    MissingField,

    /// The triple does not name a real Gregorian date (Feb 30, Apr 31, ...)
    #[error("Please enter a valid date.")]
    InvalidDate,

    /// Birth date lies after the reference date
    #[error("Birth date cannot be in the future.")]
    FutureDate,

    /// Birth date lies more than 150 years before the reference date
    #[error("Please enter a more recent birth date.")]
    TooFarInPast,
}
