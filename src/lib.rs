//! # optfetch
//!
//! An explicit optional-value type with a safe HTTP fetch adapter.
//!
//! ## Overview
//!
//! This library consolidates two recurring decisions around "a value that may
//! be missing" into one small, self-contained component:
//!
//! - **`Maybe<T>`**: a tagged optional container with a fixed algebra:
//!   presence tests, eager and lazy defaulting, transformation, filtering,
//!   and side-effect-on-presence. Absence is an explicit variant, never a
//!   sentinel value smuggled through the container.
//! - **`FetchAdapter`**: an external-call boundary that performs a single
//!   HTTP round trip, decodes the payload, and exposes the outcome as a
//!   `Maybe<T>`, converting expected misses into absence while reporting
//!   every swallowed cause to an observability seam.
//!
//! ## Feature Flags
//!
//! - `maybe`: The `Maybe<T>` container and its combinators (no dependencies)
//! - `fetch`: The fetch adapter, transport and decode seams (implies `maybe`)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use optfetch::prelude::*;
//!
//! let greeting = Maybe::of("Hello");
//! let length = greeting.map(str::len).or_else(0);
//! assert_eq!(length, 5);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use optfetch::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "maybe")]
    pub use crate::maybe::*;

    #[cfg(feature = "fetch")]
    pub use crate::fetch::*;
}

#[cfg(feature = "maybe")]
pub mod maybe;

#[cfg(feature = "fetch")]
pub mod fetch;
