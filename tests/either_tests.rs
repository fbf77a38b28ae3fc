//! Unit tests for the Either<L, R> type.
//!
//! Either is a minimal two-case sum: exactly one of `Left(L)` or
//! `Right(R)` is populated, neither side is privileged, and the only
//! consumption primitive is `fold`. These tests cover construction,
//! folding, the Maybe projections, swapping, and the Result adapters.

#![cfg(feature = "control")]

use std::cell::Cell;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use fallibars::control::{Either, Maybe};
use rstest::rstest;

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

// =============================================================================
// Construction and Type Checking
// =============================================================================

#[rstest]
fn left_is_left() {
    let value: Either<i32, String> = Either::Left(42);
    assert!(value.is_left());
    assert!(!value.is_right());
}

#[rstest]
fn right_is_right() {
    let value: Either<i32, String> = Either::Right("hello".to_string());
    assert!(value.is_right());
    assert!(!value.is_left());
}

// =============================================================================
// Fold
// =============================================================================

#[rstest]
fn fold_on_left_runs_the_left_function() {
    let value: Either<i32, String> = Either::Left(42);
    let rendered = value.fold(|n| format!("number {n}"), |s| format!("text {s}"));
    assert_eq!(rendered, "number 42");
}

#[rstest]
fn fold_on_right_runs_the_right_function() {
    let value: Either<i32, String> = Either::Right("hello".to_string());
    let rendered = value.fold(|n| format!("number {n}"), |s| format!("text {s}"));
    assert_eq!(rendered, "text hello");
}

#[rstest]
fn fold_runs_exactly_one_function() {
    let left_calls = Cell::new(0);
    let right_calls = Cell::new(0);

    let value: Either<i32, i32> = Either::Right(1);
    value.fold(
        |_| left_calls.set(left_calls.get() + 1),
        |_| right_calls.set(right_calls.get() + 1),
    );

    assert_eq!(left_calls.get(), 0);
    assert_eq!(right_calls.get(), 1);
}

// =============================================================================
// Maybe Projections
// =============================================================================

#[rstest]
fn get_left_projects_only_the_left_side() {
    let left: Either<i32, String> = Either::Left(42);
    assert_eq!(left.get_left(), Maybe::some(42));

    let right: Either<i32, String> = Either::Right("hello".to_string());
    assert_eq!(right.get_left(), Maybe::none());
}

#[rstest]
fn get_right_projects_only_the_right_side() {
    let right: Either<i32, String> = Either::Right("hello".to_string());
    assert_eq!(right.get_right(), Maybe::some("hello".to_string()));

    let left: Either<i32, String> = Either::Left(42);
    assert_eq!(left.get_right(), Maybe::none());
}

#[rstest]
fn as_ref_projects_without_consuming() {
    let value: Either<i32, String> = Either::Right("hello".to_string());
    assert_eq!(value.as_ref().get_right().map(String::len), Maybe::some(5));
    assert!(value.is_right());
}

// =============================================================================
// Swap
// =============================================================================

#[rstest]
fn swap_exchanges_the_sides() {
    let left: Either<i32, String> = Either::Left(42);
    assert_eq!(left.swap(), Either::Right(42));

    let right: Either<i32, String> = Either::Right("hello".to_string());
    assert_eq!(right.swap(), Either::Left("hello".to_string()));
}

#[rstest]
fn swap_twice_is_identity() {
    let value: Either<i32, String> = Either::Left(42);
    assert_eq!(value.clone().swap().swap(), value);
}

// =============================================================================
// Equality, Ordering, and Hashing
// =============================================================================

#[rstest]
fn equality_distinguishes_sides_and_values() {
    assert_eq!(Either::<i32, i32>::Left(1), Either::Left(1));
    assert_ne!(Either::<i32, i32>::Left(1), Either::Left(2));
    assert_ne!(Either::<i32, i32>::Left(1), Either::Right(1));
}

#[rstest]
fn ordering_puts_left_before_right() {
    assert!(Either::<i32, i32>::Left(i32::MAX) < Either::Right(i32::MIN));
    assert!(Either::<i32, i32>::Left(1) < Either::Left(2));
}

#[rstest]
fn identical_values_hash_identically() {
    assert_eq!(
        hash_of(&Either::<i32, String>::Left(42)),
        hash_of(&Either::<i32, String>::Left(42))
    );
}

// =============================================================================
// Result Adapters
// =============================================================================

#[rstest]
fn ok_converts_to_right() {
    let ok: Result<i32, String> = Ok(42);
    let either: Either<String, i32> = ok.into();
    assert_eq!(either, Either::Right(42));
}

#[rstest]
fn err_converts_to_left() {
    let err: Result<i32, String> = Err("error".to_string());
    let either: Either<String, i32> = err.into();
    assert_eq!(either, Either::Left("error".to_string()));
}

#[rstest]
fn result_conversion_round_trips() {
    let ok: Result<i32, String> = Ok(42);
    let either: Either<String, i32> = ok.into();
    let back: Result<i32, String> = either.into();
    assert_eq!(back, Ok(42));

    let err: Result<i32, String> = Err("error".to_string());
    let either: Either<String, i32> = err.into();
    let back: Result<i32, String> = either.into();
    assert_eq!(back, Err("error".to_string()));
}

#[rstest]
fn question_mark_works_through_the_result_adapter() {
    fn halve(value: i32) -> Result<i32, String> {
        let either: Either<String, i32> = if value % 2 == 0 {
            Either::Right(value / 2)
        } else {
            Either::Left(format!("{value} is odd"))
        };
        let halved: i32 = Result::from(either)?;
        Ok(halved)
    }

    assert_eq!(halve(42), Ok(21));
    assert_eq!(halve(7), Err("7 is odd".to_string()));
}

// =============================================================================
// Debug Formatting
// =============================================================================

#[rstest]
fn debug_formats_both_variants() {
    assert_eq!(format!("{:?}", Either::<i32, String>::Left(42)), "Left(42)");
    assert_eq!(
        format!("{:?}", Either::<i32, String>::Right("hi".to_string())),
        "Right(\"hi\")"
    );
}
