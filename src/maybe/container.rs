//! `Maybe` type - a container holding at most one value.
//!
//! This module provides the [`Maybe<T>`] type, an explicit tagged optional
//! value. Absence is represented by its own variant; the container never
//! stands in a sentinel value for "nothing here".
//!
//! # Design Philosophy
//!
//! `Maybe` is fixed at construction: there is no mutation, and every
//! combinator consumes the container and produces a fresh one. A null payload
//! is an error ([`NullValueError`] from [`Maybe::try_of`]); a missing payload
//! is empty. The two are never conflated.
//!
//! # Examples
//!
//! ```rust
//! use optfetch::maybe::Maybe;
//!
//! let value = Maybe::of("Hello");
//! let nothing: Maybe<&str> = Maybe::empty();
//!
//! assert!(value.is_present());
//! assert!(nothing.is_empty());
//!
//! // Pattern matching
//! match value {
//!     Maybe::Present(s) => println!("Got: {}", s),
//!     Maybe::Absent => println!("Nothing"),
//! }
//! ```

use std::fmt;

use super::error::{AbsentValueError, NullValueError};

/// A container holding at most one value of type `T`.
///
/// `Maybe<T>` is either `Present(value)` or `Absent`. The state is fixed at
/// construction; every combinator produces a new `Maybe` rather than mutating
/// the original.
///
/// # Type Parameters
///
/// * `T` - The type of the value that may be held
///
/// # Examples
///
/// ```rust
/// use optfetch::maybe::Maybe;
///
/// let present = Maybe::of(42);
/// let doubled = present.map(|x| x * 2);
/// assert_eq!(doubled.or_else(0), 84);
///
/// let absent: Maybe<i32> = Maybe::empty();
/// assert_eq!(absent.map(|x| x * 2).or_else(0), 0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<T> {
    /// The container holds a value.
    Present(T),
    /// The container holds nothing.
    Absent,
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a `Maybe` holding the given value.
    ///
    /// The value is owned by the caller and therefore always present; a
    /// payload that may be missing goes through [`Maybe::of_nullable`] or
    /// [`Maybe::try_of`] instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optfetch::maybe::Maybe;
    ///
    /// let value = Maybe::of("Hello");
    /// assert!(value.is_present());
    /// ```
    #[inline]
    pub const fn of(value: T) -> Self {
        Self::Present(value)
    }

    /// Creates an empty `Maybe`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optfetch::maybe::Maybe;
    ///
    /// let nothing: Maybe<String> = Maybe::empty();
    /// assert!(nothing.is_empty());
    /// ```
    #[inline]
    pub const fn empty() -> Self {
        Self::Absent
    }

    /// Creates a `Maybe` from a payload that must be present.
    ///
    /// Returns `Ok(Present(value))` for `Some(value)` and fails with
    /// [`NullValueError`] for `None`: presence must never be claimed for an
    /// absent payload. Use [`Maybe::of_nullable`] when absence is expected.
    ///
    /// # Errors
    ///
    /// Returns [`NullValueError`] if `value` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optfetch::maybe::{Maybe, NullValueError};
    ///
    /// assert_eq!(Maybe::try_of(Some(42)), Ok(Maybe::of(42)));
    /// assert_eq!(Maybe::<i32>::try_of(None), Err(NullValueError));
    /// ```
    #[inline]
    pub fn try_of(value: Option<T>) -> Result<Self, NullValueError> {
        match value {
            Some(inner) => Ok(Self::Present(inner)),
            None => Err(NullValueError),
        }
    }

    /// Creates a `Maybe` from a payload that may be missing.
    ///
    /// `Some(value)` becomes `Present(value)`, `None` becomes `Absent`. Never
    /// fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optfetch::maybe::Maybe;
    ///
    /// assert!(Maybe::of_nullable(Some("Hello")).is_present());
    /// assert!(Maybe::<&str>::of_nullable(None).is_empty());
    /// ```
    #[inline]
    pub fn of_nullable(value: Option<T>) -> Self {
        match value {
            Some(inner) => Self::Present(inner),
            None => Self::Absent,
        }
    }

    // =========================================================================
    // Presence Checking
    // =========================================================================

    /// Returns `true` if a value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optfetch::maybe::Maybe;
    ///
    /// assert!(Maybe::of(42).is_present());
    /// assert!(!Maybe::<i32>::empty().is_present());
    /// ```
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if no value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optfetch::maybe::Maybe;
    ///
    /// assert!(Maybe::<i32>::empty().is_empty());
    /// assert!(!Maybe::of(42).is_empty());
    /// ```
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Absent)
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Extracts the value, consuming the container.
    ///
    /// Direct reads are discouraged; prefer [`Maybe::or_else`],
    /// [`Maybe::or_else_get`] or [`Maybe::or_else_throw`], which make the
    /// empty case explicit at the call site.
    ///
    /// # Errors
    ///
    /// Returns [`AbsentValueError`] if the container is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optfetch::maybe::{AbsentValueError, Maybe};
    ///
    /// assert_eq!(Maybe::of(42).get(), Ok(42));
    /// assert_eq!(Maybe::<i32>::empty().get(), Err(AbsentValueError));
    /// ```
    #[inline]
    pub fn get(self) -> Result<T, AbsentValueError> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(AbsentValueError),
        }
    }

    /// Returns the held value, or the given default if empty.
    ///
    /// The default is evaluated eagerly by the caller. Use
    /// [`Maybe::or_else_get`] when computing the default is costly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optfetch::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::of("Hello").or_else("Default"), "Hello");
    /// assert_eq!(Maybe::<&str>::empty().or_else("Default"), "Default");
    /// ```
    #[inline]
    pub fn or_else(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Returns the held value, or the supplier's result if empty.
    ///
    /// The supplier runs only when the container is empty; a present value
    /// never pays for the default computation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optfetch::maybe::Maybe;
    ///
    /// let value = Maybe::<String>::empty().or_else_get(|| "Computed Default".to_string());
    /// assert_eq!(value, "Computed Default");
    /// ```
    #[inline]
    pub fn or_else_get<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => supplier(),
        }
    }

    /// Returns the held value, or raises the factory's error if empty.
    ///
    /// The error propagates to the caller; this operation never catches it
    /// internally.
    ///
    /// # Errors
    ///
    /// Returns the error produced by `error_factory` if the container is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optfetch::maybe::Maybe;
    ///
    /// let present = Maybe::of(42).or_else_throw(|| "value not present");
    /// assert_eq!(present, Ok(42));
    ///
    /// let absent = Maybe::<i32>::empty().or_else_throw(|| "value not present");
    /// assert_eq!(absent, Err("value not present"));
    /// ```
    #[inline]
    pub fn or_else_throw<E, F>(self, error_factory: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(error_factory()),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Transforms the held value, preserving absence.
    ///
    /// If present, applies `transform` and wraps the result; if empty,
    /// returns empty without invoking `transform`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optfetch::maybe::Maybe;
    ///
    /// let length = Maybe::of("Hello").map(str::len);
    /// assert_eq!(length.or_else(0), 5);
    ///
    /// let nothing = Maybe::<&str>::empty().map(str::len);
    /// assert!(nothing.is_empty());
    /// ```
    #[inline]
    pub fn map<U, F>(self, transform: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Maybe::Present(transform(value)),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Transforms the held value with a function that may produce nothing.
    ///
    /// A transform returning `None` yields an empty container, not a present
    /// nothing. If empty, returns empty without invoking `transform`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optfetch::maybe::Maybe;
    ///
    /// let parsed = Maybe::of("42").map_nullable(|s| s.parse::<i32>().ok());
    /// assert_eq!(parsed, Maybe::of(42));
    ///
    /// let unparsable = Maybe::of("nope").map_nullable(|s| s.parse::<i32>().ok());
    /// assert!(unparsable.is_empty());
    /// ```
    #[inline]
    pub fn map_nullable<U, F>(self, transform: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Self::Present(value) => Maybe::of_nullable(transform(value)),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Transforms the held value with a function that returns a `Maybe`,
    /// flattening one level.
    ///
    /// If present, returns `transform(value)` directly, never
    /// `Maybe<Maybe<U>>`. If empty, returns empty without invoking
    /// `transform`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optfetch::maybe::Maybe;
    ///
    /// let nested = Maybe::of(Maybe::of("Nested"));
    /// let flattened = nested.flat_map(|inner| inner);
    /// assert_eq!(flattened, Maybe::of("Nested"));
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, transform: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Present(value) => transform(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Keeps the held value only if the predicate holds.
    ///
    /// If present and `predicate(&value)` is `true`, returns the container
    /// unchanged; otherwise returns empty. If empty, returns empty without
    /// invoking `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optfetch::maybe::Maybe;
    ///
    /// let long = Maybe::of("Hello").filter(|s| s.len() > 3);
    /// assert!(long.is_present());
    ///
    /// let short = Maybe::of("Hi").filter(|s| s.len() > 3);
    /// assert!(short.is_empty());
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) => {
                if predicate(&value) {
                    Self::Present(value)
                } else {
                    Self::Absent
                }
            }
            Self::Absent => Self::Absent,
        }
    }

    // =========================================================================
    // Side Effects
    // =========================================================================

    /// Runs the consumer on the held value, if any.
    ///
    /// Performs no action and does not fail when empty. The consumer executes
    /// on the caller's thread.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optfetch::maybe::Maybe;
    ///
    /// let mut seen = Vec::new();
    /// Maybe::of("Hello").if_present(|s| seen.push(s));
    /// Maybe::<&str>::empty().if_present(|s| seen.push(s));
    /// assert_eq!(seen, vec!["Hello"]);
    /// ```
    #[inline]
    pub fn if_present<F>(self, consumer: F)
    where
        F: FnOnce(T),
    {
        if let Self::Present(value) = self {
            consumer(value);
        }
    }

    // =========================================================================
    // Borrowing
    // =========================================================================

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optfetch::maybe::Maybe;
    ///
    /// let text = Maybe::of("Hello".to_string());
    /// let length = text.as_ref().map(|s| s.len());
    /// assert_eq!(length.or_else(0), 5);
    /// // `text` is still usable
    /// assert!(text.is_present());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Present(value) => Maybe::Present(value),
            Self::Absent => Maybe::Absent,
        }
    }
}

impl<T> Default for Maybe<T> {
    /// Returns an empty container.
    #[inline]
    fn default() -> Self {
        Self::Absent
    }
}

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => formatter.debug_tuple("Present").field(value).finish(),
            Self::Absent => formatter.write_str("Absent"),
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    /// Converts an `Option` to a `Maybe`.
    ///
    /// `Some(value)` becomes `Present(value)`, and `None` becomes `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optfetch::maybe::Maybe;
    ///
    /// let present: Maybe<i32> = Some(42).into();
    /// assert_eq!(present, Maybe::of(42));
    ///
    /// let absent: Maybe<i32> = None.into();
    /// assert!(absent.is_empty());
    /// ```
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::of_nullable(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    /// Converts a `Maybe` to an `Option`.
    ///
    /// `Present(value)` becomes `Some(value)`, and `Absent` becomes `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optfetch::maybe::Maybe;
    ///
    /// let some: Option<i32> = Maybe::of(42).into();
    /// assert_eq!(some, Some(42));
    ///
    /// let none: Option<i32> = Maybe::<i32>::empty().into();
    /// assert_eq!(none, None);
    /// ```
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Present(value) => Some(value),
            Maybe::Absent => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_of_is_present() {
        let value = Maybe::of(42);
        assert!(value.is_present());
        assert!(!value.is_empty());
    }

    #[rstest]
    fn test_empty_is_empty() {
        let value: Maybe<i32> = Maybe::empty();
        assert!(value.is_empty());
        assert!(!value.is_present());
    }

    #[rstest]
    fn test_option_conversion_roundtrip() {
        let some: Option<i32> = Some(42);
        let maybe: Maybe<i32> = some.into();
        let back: Option<i32> = maybe.into();
        assert_eq!(back, Some(42));

        let none: Option<i32> = None;
        let maybe: Maybe<i32> = none.into();
        let back: Option<i32> = maybe.into();
        assert_eq!(back, None);
    }

    #[rstest]
    fn test_debug_formatting() {
        assert_eq!(format!("{:?}", Maybe::of(42)), "Present(42)");
        assert_eq!(format!("{:?}", Maybe::<i32>::empty()), "Absent");
    }
}
