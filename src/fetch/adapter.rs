//! `FetchAdapter` - the external-call boundary.
//!
//! One adapter, four operations, one round trip each:
//!
//! - [`FetchAdapter::fetch_one`]: GET, expected misses become absence
//! - [`FetchAdapter::fetch_one_or_throw`]: GET, absence becomes a hard failure
//! - [`FetchAdapter::fetch_many`]: GET of a collection, decoded lazily
//! - [`FetchAdapter::create_one`]: POST, failures become absence
//!
//! # Design Philosophy
//!
//! "Resource not found or unavailable" is an expected miss, so `fetch_one`
//! and `create_one` answer with an empty [`Maybe`] and report the cause to
//! the [`FetchObserver`] instead of raising. A collection or a mandatory
//! fetch cannot silently degrade to "nothing happened", so `fetch_many` and
//! `fetch_one_or_throw` surface their errors. No operation retries, caches,
//! or shares mutable state; cancelling the surrounding task drops the future
//! and abandons the in-flight request.
//!
//! # Examples
//!
//! ```rust,no_run
//! use optfetch::fetch::{json, FetchAdapter, HttpTransport};
//! use serde::Deserialize;
//!
//! #[derive(Debug, Deserialize)]
//! struct Item {
//!     name: String,
//!     price: f64,
//! }
//!
//! # async fn demo() -> Result<(), optfetch::fetch::TransportError> {
//! let adapter = FetchAdapter::new(HttpTransport::new("http://localhost:8000")?);
//!
//! let item = adapter.fetch_one("/items/42", json::<Item>).await;
//! let name = item.map(|i| i.name).or_else("unknown".to_string());
//! # Ok(())
//! # }
//! ```

use std::iter::FusedIterator;
use std::marker::PhantomData;

use serde::Serialize;
use serde_json::value::RawValue;

use crate::maybe::Maybe;

use super::error::{DecodeError, EncodeError, FetchError, TransportError};
use super::observe::{FetchObserver, TracingObserver};
use super::transport::{Request, Transport};

/// Calls one external HTTP resource and exposes the outcome as a [`Maybe`].
///
/// Generic over the transport (`C`) and the observer (`O`) so both can be
/// substituted in tests. Each call is independent: the adapter holds no
/// mutable state and is safe to share across concurrent tasks.
///
/// # Type Parameters
///
/// * `C` - The HTTP client collaborator
/// * `O` - The observability collaborator, defaulting to [`TracingObserver`]
#[derive(Debug, Clone)]
pub struct FetchAdapter<C, O = TracingObserver> {
    transport: C,
    observer: O,
}

impl<C: Transport> FetchAdapter<C> {
    /// Creates an adapter over the given transport, logging swallowed
    /// failures through [`TracingObserver`].
    pub const fn new(transport: C) -> Self {
        Self {
            transport,
            observer: TracingObserver,
        }
    }
}

impl<C: Transport, O: FetchObserver> FetchAdapter<C, O> {
    /// Creates an adapter with an explicit observer.
    pub const fn with_observer(transport: C, observer: O) -> Self {
        Self {
            transport,
            observer,
        }
    }

    /// Fetches one resource, converting any failure into absence.
    ///
    /// Performs a single GET. On a 2xx response whose body decodes, returns
    /// a present [`Maybe`]; on transport failure, non-success status, or
    /// decode failure, returns an empty one. The cause is reported to the
    /// observer, never raised.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use optfetch::fetch::{json, FetchAdapter, HttpTransport};
    /// # async fn demo(adapter: FetchAdapter<HttpTransport>) {
    /// let price = adapter
    ///     .fetch_one("/items/42", json::<f64>)
    ///     .await
    ///     .or_else(0.0);
    /// # }
    /// ```
    pub async fn fetch_one<T, D>(&self, resource_url: &str, decode: D) -> Maybe<T>
    where
        D: FnOnce(&[u8]) -> Result<T, DecodeError>,
    {
        match self.round_trip(Request::get(resource_url)).await {
            Ok(body) => match decode(&body) {
                Ok(value) => Maybe::of(value),
                Err(error) => self.swallow(resource_url, FetchError::Decode(error)),
            },
            Err(error) => self.swallow(resource_url, FetchError::Transport(error)),
        }
    }

    /// Fetches one resource that must exist.
    ///
    /// Composed as `fetch_one(..).or_else_throw(..)`: the same single round
    /// trip, but absence becomes a [`TransportError`] carrying the requested
    /// URL. The error propagates to the caller; nothing is caught here.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the fetch produced no value.
    pub async fn fetch_one_or_throw<T, D>(
        &self,
        resource_url: &str,
        decode: D,
    ) -> Result<T, TransportError>
    where
        D: FnOnce(&[u8]) -> Result<T, DecodeError>,
    {
        self.fetch_one(resource_url, decode)
            .await
            .or_else_throw(|| TransportError::new(resource_url, "required resource unavailable"))
    }

    /// Fetches a collection resource, decoding its elements lazily.
    ///
    /// Performs a single GET expected to return a JSON array. The array is
    /// split without decoding its elements; the returned [`FetchMany`]
    /// decodes one element per iteration step. An empty array yields an
    /// empty sequence, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Transport`] on transport or status failure, and
    /// [`FetchError::Decode`] if the body is not a JSON array. Per-element
    /// decode failures surface during iteration instead.
    pub async fn fetch_many<T, D>(
        &self,
        resource_url: &str,
        decode: D,
    ) -> Result<FetchMany<T, D>, FetchError>
    where
        D: Fn(&[u8]) -> Result<T, DecodeError>,
    {
        let body = self.round_trip(Request::get(resource_url)).await?;
        let elements: Vec<Box<RawValue>> = serde_json::from_slice(&body)
            .map_err(|error| DecodeError::new(error.to_string()))?;
        Ok(FetchMany::new(elements, decode))
    }

    /// Creates one resource, converting any failure into absence.
    ///
    /// Performs a single POST with the JSON-encoded payload. On a 2xx
    /// response whose body decodes, returns the decoded response as a
    /// present [`Maybe`]; on any failure, returns an empty one with the
    /// cause reported to the observer. A payload that cannot be serialized
    /// never reaches the network; its cause is an [`EncodeError`].
    pub async fn create_one<T, P, D>(&self, resource_url: &str, payload: &P, decode: D) -> Maybe<T>
    where
        P: Serialize,
        D: FnOnce(&[u8]) -> Result<T, DecodeError>,
    {
        let encoded = match serde_json::to_vec(payload) {
            Ok(encoded) => encoded,
            Err(error) => {
                let cause = FetchError::Encode(EncodeError::new(error.to_string()));
                return self.swallow(resource_url, cause);
            }
        };

        match self
            .round_trip(Request::post_json(resource_url, encoded))
            .await
        {
            Ok(body) => match decode(&body) {
                Ok(value) => Maybe::of(value),
                Err(error) => self.swallow(resource_url, FetchError::Decode(error)),
            },
            Err(error) => self.swallow(resource_url, FetchError::Transport(error)),
        }
    }

    /// One round trip: delivered 2xx responses yield their body, everything
    /// else is a [`TransportError`].
    async fn round_trip(&self, request: Request) -> Result<Vec<u8>, TransportError> {
        let url = request.url.clone();
        let response = self.transport.request(request).await?;
        if response.is_success() {
            Ok(response.body)
        } else {
            Err(TransportError::new(url, format!("status {}", response.status)))
        }
    }

    fn swallow<T>(&self, resource_url: &str, cause: FetchError) -> Maybe<T> {
        self.observer.failure_swallowed(resource_url, &cause);
        Maybe::empty()
    }
}

/// A lazy, finite, non-restartable sequence of decoded collection elements.
///
/// Produced by [`FetchAdapter::fetch_many`]. Each iteration step decodes one
/// element and yields `Ok(value)`; the first decode failure yields
/// `Err(DecodeError)` once, after which the sequence is exhausted.
///
/// # Examples
///
/// ```rust,no_run
/// # use optfetch::fetch::{json, FetchAdapter, HttpTransport};
/// # async fn demo(adapter: FetchAdapter<HttpTransport>) -> Result<(), optfetch::fetch::FetchError> {
/// let names = adapter.fetch_many("/items/", json::<String>).await?;
/// for name in names {
///     println!("{}", name?);
/// }
/// # Ok(())
/// # }
/// ```
pub struct FetchMany<T, D> {
    elements: std::vec::IntoIter<Box<RawValue>>,
    decode: D,
    aborted: bool,
    _produces: PhantomData<fn() -> T>,
}

impl<T, D> FetchMany<T, D> {
    fn new(elements: Vec<Box<RawValue>>, decode: D) -> Self {
        Self {
            elements: elements.into_iter(),
            decode,
            aborted: false,
            _produces: PhantomData,
        }
    }
}

impl<T, D> Iterator for FetchMany<T, D>
where
    D: Fn(&[u8]) -> Result<T, DecodeError>,
{
    type Item = Result<T, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.aborted {
            return None;
        }
        let raw = self.elements.next()?;
        match (self.decode)(raw.get().as_bytes()) {
            Ok(value) => Some(Ok(value)),
            Err(error) => {
                self.aborted = true;
                Some(Err(error))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.aborted {
            (0, Some(0))
        } else {
            (0, Some(self.elements.len()))
        }
    }
}

impl<T, D> FusedIterator for FetchMany<T, D> where D: Fn(&[u8]) -> Result<T, DecodeError> {}

impl<T, D> std::fmt::Debug for FetchMany<T, D> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FetchMany")
            .field("remaining", &self.elements.len())
            .field("aborted", &self.aborted)
            .finish_non_exhaustive()
    }
}
