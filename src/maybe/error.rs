//! Error types for the optional-value container.
//!
//! This module provides the errors raised by the two fallible operations on
//! [`Maybe`](crate::maybe::Maybe): claiming presence for an absent payload
//! (`try_of`) and reading a value that is not there (`get`).

/// Represents an attempt to claim presence for an absent payload.
///
/// Raised by [`Maybe::try_of`](crate::maybe::Maybe::try_of) when the payload
/// handed in is `None`. A missing payload must be constructed as empty, not
/// claimed as present.
///
/// # Examples
///
/// ```rust
/// use optfetch::maybe::NullValueError;
///
/// let error = NullValueError;
/// assert_eq!(
///     format!("{}", error),
///     "Maybe::try_of: presence claimed for an absent payload"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NullValueError;

impl std::fmt::Display for NullValueError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "Maybe::try_of: presence claimed for an absent payload"
        )
    }
}

impl std::error::Error for NullValueError {}

/// Represents an unsafe read of a missing value.
///
/// Raised by [`Maybe::get`](crate::maybe::Maybe::get) when the container is
/// empty. Prefer the defaulting combinators (`or_else`, `or_else_get`,
/// `or_else_throw`) over direct reads.
///
/// # Examples
///
/// ```rust
/// use optfetch::maybe::AbsentValueError;
///
/// let error = AbsentValueError;
/// assert_eq!(format!("{}", error), "Maybe::get: no value present");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbsentValueError;

impl std::fmt::Display for AbsentValueError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "Maybe::get: no value present")
    }
}

impl std::error::Error for AbsentValueError {}
