//! Unit tests for the function composition utilities.
//!
//! Covers the [`pipe!`] and [`compose!`] macros, the [`Pipe`] trait for
//! method-position application, and the named combinators `identity`,
//! `constant`, `flip`, and `then`. The two macros are mirror images of
//! each other, so several tests assert their agreement directly.

#![cfg(feature = "compose")]

use std::cell::Cell;

use fallibars::compose::{Pipe, constant, flip, identity, then};
use fallibars::{compose, pipe};
use rstest::rstest;

fn increment(x: i32) -> i32 {
    x + 1
}

fn double(x: i32) -> i32 {
    x * 2
}

fn subtract_three(x: i32) -> i32 {
    x - 3
}

// =============================================================================
// Identity and Constant
// =============================================================================

#[rstest]
fn identity_returns_its_argument() {
    assert_eq!(identity(42), 42);
    assert_eq!(identity("unchanged"), "unchanged");
    assert_eq!(identity(vec![1, 2]), vec![1, 2]);
}

#[rstest]
fn constant_ignores_every_input() {
    let always_answer = constant::<_, &str>(42);
    assert_eq!(always_answer("first"), 42);
    assert_eq!(always_answer("second"), 42);
}

#[rstest]
fn constant_replaces_elements_under_map() {
    let censored: Vec<&str> = vec!["secret", "hidden"]
        .into_iter()
        .map(constant("[redacted]"))
        .collect();
    assert_eq!(censored, vec!["[redacted]", "[redacted]"]);
}

// =============================================================================
// Flip
// =============================================================================

#[rstest]
fn flip_swaps_the_arguments() {
    fn subtract(minuend: i32, subtrahend: i32) -> i32 {
        minuend - subtrahend
    }

    let flipped = flip(subtract);
    assert_eq!(subtract(10, 3), 7);
    assert_eq!(flipped(10, 3), -7);
}

#[rstest]
#[case(10, 3)]
#[case(-4, -4)]
#[case(0, i32::MAX)]
fn double_flip_restores_the_original(#[case] left: i32, #[case] right: i32) {
    fn subtract(minuend: i32, subtrahend: i32) -> i32 {
        minuend.wrapping_sub(subtrahend)
    }

    let flipped_twice = flip(flip(subtract));
    assert_eq!(flipped_twice(left, right), subtract(left, right));
}

// =============================================================================
// Then
// =============================================================================

#[rstest]
fn then_applies_left_to_right() {
    let pipeline = then(str::trim, str::len);
    assert_eq!(pipeline("  four  "), 4);
}

#[rstest]
fn then_builds_pipelines_across_statements() {
    let normalized = then(str::trim, str::to_lowercase);
    let pipeline = then(normalized, |text: String| text.replace(' ', "-"));

    assert_eq!(pipeline("  Data Flow  "), "data-flow");
}

#[rstest]
fn then_identity_is_neutral() {
    assert_eq!(then(identity, double)(8), double(8));
    assert_eq!(then(double, identity)(8), double(8));
}

// =============================================================================
// The pipe! Macro
// =============================================================================

#[rstest]
fn pipe_threads_a_value_in_reading_order() {
    // subtract_three(double(increment(4))) read left to right
    assert_eq!(pipe!(4, increment, double, subtract_three), 7);
}

#[rstest]
fn pipe_carries_type_changes_along_the_chain() {
    let slug = pipe!(
        "  Composable Pipelines  ",
        str::trim,
        str::to_lowercase,
        |text: String| text.replace(' ', "-")
    );

    assert_eq!(slug, "composable-pipelines");
}

#[rstest]
fn pipe_accepts_consuming_closures() {
    let banner = String::from("!");
    let shout = move |text: String| text + &banner;

    assert_eq!(pipe!(String::from("go"), shout), "go!");
}

// =============================================================================
// The compose! Macro
// =============================================================================

#[rstest]
fn compose_applies_right_to_left() {
    // double runs first: subtract_three(double(10))
    let composed = compose!(subtract_three, double);
    assert_eq!(composed(10), 17);
}

#[rstest]
fn compose_produces_a_reusable_function() {
    let normalize = compose!(|text: String| text.replace(' ', "-"), str::to_lowercase, str::trim);

    assert_eq!(normalize("  First Call  "), "first-call");
    assert_eq!(normalize("Second"), "second");
}

#[rstest]
#[case(0)]
#[case(7)]
#[case(-3)]
#[case(100)]
fn composition_is_associative(#[case] input: i32) {
    let grouped_left = compose!(compose!(increment, double), subtract_three);
    let grouped_right = compose!(increment, compose!(double, subtract_three));

    assert_eq!(grouped_left(input), grouped_right(input));
}

#[rstest]
#[case(0)]
#[case(42)]
#[case(-17)]
fn identity_is_neutral_for_composition(#[case] input: i32) {
    assert_eq!(compose!(identity, double)(input), double(input));
    assert_eq!(compose!(double, identity)(input), double(input));
}

// =============================================================================
// Pipe and Compose Agree
// =============================================================================

#[rstest]
#[case(0)]
#[case(10)]
#[case(-25)]
fn pipe_and_compose_are_mirror_images(#[case] input: i32) {
    assert_eq!(
        pipe!(input, increment, double),
        compose!(double, increment)(input)
    );
}

// =============================================================================
// Method-Position Pipelines
// =============================================================================

#[rstest]
fn pipe_method_applies_a_function() {
    assert_eq!(12345.pipe(|x: i32| x.to_string()), "12345");
}

#[rstest]
fn pipe_macro_and_method_agree() {
    let via_macro = pipe!(12345, |x: i32| x.to_string());
    let via_method = 12345.pipe(|x: i32| x.to_string());

    assert_eq!(via_macro, via_method);
}

#[rstest]
fn pipe_method_mixes_with_ordinary_calls() {
    let length = "  MIXED Case  "
        .pipe(str::trim)
        .pipe(str::to_lowercase)
        .len();

    assert_eq!(length, 10);
}

#[rstest]
fn tee_observes_an_intermediate_value() {
    let observed = Cell::new(0);

    let result = 5
        .pipe(double)
        .tee(|midpoint| observed.set(*midpoint))
        .pipe(increment);

    assert_eq!(result, 11);
    assert_eq!(observed.get(), 10);
}
