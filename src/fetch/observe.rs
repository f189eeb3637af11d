//! Observability seam.
//!
//! `fetch_one` and `create_one` convert failures into absence. That
//! conversion is silent to the caller by design, but never silent at the
//! operations layer: every swallowed cause is reported through a
//! [`FetchObserver`]. The default observer logs through [`tracing`]; tests
//! substitute a recording one.

use super::error::FetchError;

/// Receives the cause each time a fetch failure is converted into absence.
pub trait FetchObserver {
    /// Records one swallowed failure for the given resource URL.
    fn failure_swallowed(&self, url: &str, cause: &FetchError);
}

/// The default observer: logs swallowed failures at `warn` level.
///
/// # Examples
///
/// ```rust
/// use optfetch::fetch::{FetchObserver, TracingObserver};
/// use optfetch::fetch::{FetchError, TransportError};
///
/// let observer = TracingObserver;
/// let cause = FetchError::Transport(TransportError::new("/items/42", "status 404"));
/// observer.failure_swallowed("/items/42", &cause);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl FetchObserver for TracingObserver {
    fn failure_swallowed(&self, url: &str, cause: &FetchError) {
        tracing::warn!(url, %cause, "fetch failure converted to absence");
    }
}
