//! The optional-value container and its algebra.
//!
//! This module provides [`Maybe`], a container holding at most one value,
//! together with the combinators for consuming it safely:
//!
//! - [`Maybe::of`] / [`Maybe::empty`] / [`Maybe::of_nullable`]: construction
//! - [`Maybe::or_else`] / [`Maybe::or_else_get`] / [`Maybe::or_else_throw`]: defaulting
//! - [`Maybe::map`] / [`Maybe::flat_map`] / [`Maybe::filter`]: transformation
//! - [`Maybe::if_present`]: side effect on presence
//!
//! # Examples
//!
//! ## Defaulting
//!
//! ```rust
//! use optfetch::maybe::Maybe;
//!
//! let present = Maybe::of("Hello");
//! let absent: Maybe<&str> = Maybe::empty();
//!
//! assert_eq!(present.or_else("Default"), "Hello");
//! assert_eq!(absent.or_else("Default"), "Default");
//! ```
//!
//! ## Transformation chaining
//!
//! ```rust
//! use optfetch::maybe::Maybe;
//!
//! let length = Maybe::of("Hello")
//!     .map(str::len)
//!     .filter(|n| *n > 3)
//!     .or_else(0);
//! assert_eq!(length, 5);
//! ```

mod container;
mod error;

pub use container::Maybe;
pub use error::{AbsentValueError, NullValueError};
