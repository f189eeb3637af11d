//! Unit tests for the Maybe<T> container.
//!
//! Maybe represents a value that may be missing:
//! - `Present(value)`: the container holds a value
//! - `Absent`: the container holds nothing
//!
//! These tests exercise the construction contract, the defaulting
//! operations, and the transformation combinators, including the laziness
//! guarantees (suppliers, transforms and predicates must not run when the
//! container is empty).

#![cfg(feature = "maybe")]

use optfetch::maybe::{AbsentValueError, Maybe, NullValueError};
use rstest::rstest;

// =============================================================================
// Construction and Presence Checking
// =============================================================================

#[rstest]
fn of_holds_the_value() {
    let value = Maybe::of("Hello");
    assert!(value.is_present());
    assert!(!value.is_empty());
    assert_eq!(value.get(), Ok("Hello"));
}

#[rstest]
fn empty_holds_nothing() {
    let value: Maybe<String> = Maybe::empty();
    assert!(value.is_empty());
    assert!(!value.is_present());
}

#[rstest]
fn try_of_rejects_an_absent_payload() {
    assert_eq!(Maybe::<i32>::try_of(None), Err(NullValueError));
}

#[rstest]
fn try_of_accepts_a_present_payload() {
    assert_eq!(Maybe::try_of(Some(42)), Ok(Maybe::of(42)));
}

#[rstest]
fn of_nullable_never_fails() {
    assert!(Maybe::of_nullable(Some("Hello")).is_present());
    assert!(Maybe::<&str>::of_nullable(None).is_empty());
}

// =============================================================================
// Value Extraction
// =============================================================================

#[rstest]
fn get_on_empty_is_an_absent_value_error() {
    let value: Maybe<i32> = Maybe::empty();
    assert_eq!(value.get(), Err(AbsentValueError));
}

#[rstest]
fn or_else_returns_value_when_present() {
    assert_eq!(Maybe::of("Hello").or_else("Default"), "Hello");
}

#[rstest]
fn or_else_returns_default_when_empty() {
    assert_eq!(Maybe::<&str>::empty().or_else("Default"), "Default");
}

#[rstest]
fn or_else_get_invokes_supplier_only_when_empty() {
    let mut invocations = 0;

    let present = Maybe::of("Hello").or_else_get(|| {
        invocations += 1;
        "Computed Default"
    });
    assert_eq!(present, "Hello");
    assert_eq!(invocations, 0);

    let absent = Maybe::<&str>::empty().or_else_get(|| {
        invocations += 1;
        "Computed Default"
    });
    assert_eq!(absent, "Computed Default");
    assert_eq!(invocations, 1);
}

#[rstest]
fn or_else_throw_returns_value_when_present() {
    let result = Maybe::of(42).or_else_throw(|| "value not present");
    assert_eq!(result, Ok(42));
}

#[rstest]
fn or_else_throw_raises_to_the_caller_when_empty() {
    let result = Maybe::<i32>::empty().or_else_throw(|| "value not present");
    assert_eq!(result, Err("value not present"));
}

#[rstest]
fn or_else_throw_does_not_invoke_factory_when_present() {
    let mut invocations = 0;
    let result = Maybe::of(42).or_else_throw(|| {
        invocations += 1;
        "unused"
    });
    assert_eq!(result, Ok(42));
    assert_eq!(invocations, 0);
}

// =============================================================================
// Transformation
// =============================================================================

#[rstest]
fn map_transforms_a_present_value() {
    let length = Maybe::of("Hello").map(str::len);
    assert_eq!(length, Maybe::of(5));
}

#[rstest]
fn map_preserves_absence_without_invoking_the_transform() {
    let mut invocations = 0;
    let result = Maybe::<&str>::empty().map(|s| {
        invocations += 1;
        s.len()
    });
    assert!(result.is_empty());
    assert_eq!(invocations, 0);
}

#[rstest]
fn map_nullable_turns_a_missing_result_into_absence() {
    let parsed = Maybe::of("nope").map_nullable(|s| s.parse::<i32>().ok());
    assert!(parsed.is_empty());

    let parsed = Maybe::of("42").map_nullable(|s| s.parse::<i32>().ok());
    assert_eq!(parsed, Maybe::of(42));
}

#[rstest]
fn flat_map_does_not_double_wrap() {
    let result = Maybe::of(21).flat_map(|x| Maybe::of(x * 2));
    assert_eq!(result.get(), Ok(42));
}

#[rstest]
fn flat_map_flattens_a_nested_container() {
    let nested = Maybe::of(Maybe::of("Nested"));
    let flattened = nested.flat_map(|inner| inner);
    assert_eq!(flattened, Maybe::of("Nested"));
}

#[rstest]
fn flat_map_preserves_absence_without_invoking_the_transform() {
    let mut invocations = 0;
    let result = Maybe::<i32>::empty().flat_map(|x| {
        invocations += 1;
        Maybe::of(x * 2)
    });
    assert!(result.is_empty());
    assert_eq!(invocations, 0);
}

#[rstest]
fn filter_keeps_presence_only_when_the_predicate_holds() {
    assert!(Maybe::of("Hello").filter(|s| s.len() > 3).is_present());
    assert!(Maybe::of("Hi").filter(|s| s.len() > 3).is_empty());
}

#[rstest]
fn filter_preserves_absence_without_invoking_the_predicate() {
    let mut invocations = 0;
    let result = Maybe::<&str>::empty().filter(|_| {
        invocations += 1;
        true
    });
    assert!(result.is_empty());
    assert_eq!(invocations, 0);
}

// =============================================================================
// Side Effects
// =============================================================================

#[rstest]
fn if_present_runs_the_consumer_on_a_present_value() {
    let mut seen = Vec::new();
    Maybe::of("Hello").if_present(|s| seen.push(s));
    assert_eq!(seen, vec!["Hello"]);
}

#[rstest]
fn if_present_does_nothing_when_empty() {
    let mut seen: Vec<&str> = Vec::new();
    Maybe::<&str>::empty().if_present(|s| seen.push(s));
    assert!(seen.is_empty());
}

// =============================================================================
// Borrowing and Conversions
// =============================================================================

#[rstest]
fn as_ref_leaves_the_original_usable() {
    let text = Maybe::of("Hello".to_string());
    let length = text.as_ref().map(|s| s.len());
    assert_eq!(length, Maybe::of(5));
    assert!(text.is_present());
}

#[rstest]
fn default_is_empty() {
    assert!(Maybe::<i32>::default().is_empty());
}

#[rstest]
fn option_conversions_match_presence() {
    let present: Maybe<i32> = Some(42).into();
    assert_eq!(Option::from(present), Some(42));

    let absent: Maybe<i32> = None.into();
    assert_eq!(Option::<i32>::from(absent), None);
}
