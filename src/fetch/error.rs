//! Error types for the external-call boundary.
//!
//! This module provides the errors that can occur during a fetch: transport
//! failures (connection, timeout, non-success status), decode failures
//! (response payload could not be parsed into the target type) and encode
//! failures (request payload could not be serialized), plus [`FetchError`],
//! the unified type handed to the observability seam.

/// Represents a network or status failure while calling an external resource.
///
/// Carries the URL of the failed request so callers matching on the error can
/// tell which resource was unavailable.
///
/// # Examples
///
/// ```rust
/// use optfetch::fetch::TransportError;
///
/// let error = TransportError::new("http://localhost:8000/items/42", "status 404");
/// assert_eq!(
///     format!("{}", error),
///     "transport failure for http://localhost:8000/items/42: status 404"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError {
    /// The URL of the request that failed.
    pub url: String,
    /// A description of the failure.
    pub reason: String,
}

impl TransportError {
    /// Creates a transport error for the given URL.
    pub fn new(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for TransportError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "transport failure for {}: {}",
            self.url, self.reason
        )
    }
}

impl std::error::Error for TransportError {}

/// Represents a response payload that could not be parsed into the target
/// type.
///
/// # Examples
///
/// ```rust
/// use optfetch::fetch::DecodeError;
///
/// let error = DecodeError::new("missing field `price`");
/// assert_eq!(format!("{}", error), "decode failure: missing field `price`");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeError {
    /// A description of why decoding failed.
    pub reason: String,
}

impl DecodeError {
    /// Creates a decode error with the given reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "decode failure: {}", self.reason)
    }
}

impl std::error::Error for DecodeError {}

/// Represents a request payload that could not be serialized.
///
/// Raised before any network round trip: the request body never left the
/// caller, so the failure direction is the opposite of a [`DecodeError`].
///
/// # Examples
///
/// ```rust
/// use optfetch::fetch::EncodeError;
///
/// let error = EncodeError::new("map key must be a string");
/// assert_eq!(format!("{}", error), "encode failure: map key must be a string");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeError {
    /// A description of why serialization failed.
    pub reason: String,
}

impl EncodeError {
    /// Creates an encode error with the given reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for EncodeError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "encode failure: {}", self.reason)
    }
}

impl std::error::Error for EncodeError {}

/// Represents any failure of one external call.
///
/// This is the unified cause handed to the
/// [`FetchObserver`](crate::fetch::FetchObserver) when an operation converts
/// a failure into absence, and the error surfaced by
/// [`FetchAdapter::fetch_many`](crate::fetch::FetchAdapter::fetch_many).
///
/// # Examples
///
/// ```rust
/// use optfetch::fetch::{FetchError, TransportError};
///
/// let error = FetchError::Transport(TransportError::new("http://example/items/", "timeout"));
/// println!("{}", error);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request never produced a successful response.
    Transport(TransportError),
    /// The response body could not be parsed.
    Decode(DecodeError),
    /// The request body could not be serialized.
    Encode(EncodeError),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(error) => write!(formatter, "{error}"),
            Self::Decode(error) => write!(formatter, "{error}"),
            Self::Encode(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport(error) => Some(error),
            Self::Decode(error) => Some(error),
            Self::Encode(error) => Some(error),
        }
    }
}

impl From<TransportError> for FetchError {
    #[inline]
    fn from(error: TransportError) -> Self {
        Self::Transport(error)
    }
}

impl From<DecodeError> for FetchError {
    #[inline]
    fn from(error: DecodeError) -> Self {
        Self::Decode(error)
    }
}

impl From<EncodeError> for FetchError {
    #[inline]
    fn from(error: EncodeError) -> Self {
        Self::Encode(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_display() {
        let error = TransportError::new("http://example/items/42", "connection refused");
        assert_eq!(
            format!("{error}"),
            "transport failure for http://example/items/42: connection refused"
        );
    }

    #[test]
    fn test_fetch_error_wraps_decode() {
        let error = FetchError::from(DecodeError::new("expected an array"));
        assert_eq!(format!("{error}"), "decode failure: expected an array");
    }

    #[test]
    fn test_fetch_error_wraps_encode() {
        let error = FetchError::from(EncodeError::new("map key must be a string"));
        assert_eq!(format!("{error}"), "encode failure: map key must be a string");
    }
}
