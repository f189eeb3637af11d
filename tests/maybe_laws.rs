//! Property-based tests for the Maybe<T> algebra.
//!
//! These properties hold for every container, present or absent:
//!
//! 1. **Defaulting equivalence**: `o.or_else(d)` equals the held value when
//!    present and `d` otherwise.
//! 2. **Identity**: `map` with the identity function and `filter` with an
//!    always-true predicate both leave the container unchanged.
//! 3. **Composition**: `map(f).map(g)` equals `map(g . f)`.
//! 4. **Flattening**: `flat_map` never double-wraps.
//! 5. **Absence preservation**: transforming an empty container yields an
//!    empty container.

#![cfg(feature = "maybe")]

use optfetch::maybe::Maybe;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_or_else_equivalence(value in any::<Option<i32>>(), default in any::<i32>()) {
        let container = Maybe::of_nullable(value);
        let expected = value.unwrap_or(default);
        prop_assert_eq!(container.or_else(default), expected);
    }

    #[test]
    fn prop_or_else_get_equivalence(value in any::<Option<i32>>(), default in any::<i32>()) {
        let container = Maybe::of_nullable(value);
        let expected = value.unwrap_or(default);
        prop_assert_eq!(container.or_else_get(|| default), expected);
    }

    #[test]
    fn prop_map_identity(value in any::<Option<i32>>()) {
        let container = Maybe::of_nullable(value);
        prop_assert_eq!(container.map(|x| x), container);
    }

    #[test]
    fn prop_filter_always_true_is_identity(value in any::<Option<i32>>()) {
        let container = Maybe::of_nullable(value);
        prop_assert_eq!(container.filter(|_| true), container);
    }

    #[test]
    fn prop_filter_always_false_is_empty(value in any::<Option<i32>>()) {
        let container = Maybe::of_nullable(value);
        prop_assert!(container.filter(|_| false).is_empty());
    }

    #[test]
    fn prop_filter_matches_predicate_on_present(value in any::<i32>()) {
        let even = |x: &i32| x % 2 == 0;
        let container = Maybe::of(value);
        prop_assert_eq!(container.filter(even).is_present(), even(&value));
    }

    #[test]
    fn prop_map_composition(value in any::<Option<i16>>()) {
        let container = Maybe::of_nullable(value);
        let chained = container.map(i32::from).map(|x| x.wrapping_mul(2));
        let composed = container.map(|x| i32::from(x).wrapping_mul(2));
        prop_assert_eq!(chained, composed);
    }

    #[test]
    fn prop_flat_map_left_identity(value in any::<i32>()) {
        let double = |x: i32| Maybe::of(x.wrapping_mul(2));
        prop_assert_eq!(Maybe::of(value).flat_map(double), double(value));
    }

    #[test]
    fn prop_flat_map_right_identity(value in any::<Option<i32>>()) {
        let container = Maybe::of_nullable(value);
        prop_assert_eq!(container.flat_map(Maybe::of), container);
    }

    #[test]
    fn prop_flat_map_never_double_wraps(value in any::<i32>()) {
        let result: Maybe<i32> = Maybe::of(value).flat_map(|x| Maybe::of(x.wrapping_add(1)));
        prop_assert_eq!(result.get(), Ok(value.wrapping_add(1)));
    }

    #[test]
    fn prop_presence_mirrors_the_source_option(value in any::<Option<i32>>()) {
        let container = Maybe::of_nullable(value);
        prop_assert_eq!(container.is_present(), value.is_some());
        prop_assert_eq!(container.is_empty(), value.is_none());
    }
}
