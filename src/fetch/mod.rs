//! The external-call boundary.
//!
//! This module provides [`FetchAdapter`], which calls one external HTTP
//! resource, decodes its payload, and surfaces the outcome as a
//! [`Maybe`](crate::maybe::Maybe), plus the three collaborator seams it
//! depends on:
//!
//! - [`Transport`]: perform an HTTP request, return status and raw body
//! - [`json`]: decode a raw body into a typed value
//! - [`FetchObserver`]: record failures that were converted into absence
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
//! let transport = HttpTransport::new("http://localhost:8000")?;
//! let adapter = FetchAdapter::new(transport);
//!
//! // Expected miss: absence, not an error
//! let item = adapter.fetch_one("/items/42", json::<Item>).await;
//! println!("{}", item.map(|i| i.name).or_else("unknown".to_string()));
//!
//! // Mandatory fetch: absence is a hard failure
//! let item: Item = adapter.fetch_one_or_throw("/items/42", json).await?;
//! # Ok(())
//! # }
//! ```

mod adapter;
mod decode;
mod error;
mod observe;
mod transport;

pub use adapter::{FetchAdapter, FetchMany};
pub use decode::json;
pub use error::{DecodeError, EncodeError, FetchError, TransportError};
pub use observe::{FetchObserver, TracingObserver};
pub use transport::{HttpTransport, Method, Request, Response, Transport};
