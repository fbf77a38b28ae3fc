//! Unit tests for the panic-capturing function wrappers.
//!
//! A [`FunctionBuilder`] wraps a plain function and leaves panics alone;
//! attaching guards produces a [`FallibleFunction`] whose invocations
//! report captured panics as [`Fallible`] failures. These tests exercise
//! the wrappers end to end: guard chains in declaration order, payloads
//! that no guard matches, catch-all terminals, and composing invocation
//! results with the rest of the control types.

#![cfg(feature = "function")]

use std::panic::{AssertUnwindSafe, catch_unwind, panic_any};

use fallibars::control::{Fallible, Maybe, Unit};
use fallibars::function::{FallibleFunction, FunctionBuilder};
use rstest::rstest;

/// Stock on hand for the reservation scenarios.
const AVAILABLE: u32 = 10;

#[derive(Debug, PartialEq)]
struct MalformedQuantity(String);

#[derive(Debug, PartialEq)]
struct OutOfStock {
    requested: u32,
    available: u32,
}

#[derive(Debug, PartialEq)]
enum ReserveError {
    Malformed(String),
    Shortage { requested: u32, available: u32 },
}

/// Parses a quantity and reserves it, panicking with a typed payload on
/// either failure. The guard chain folds both payloads into one error.
fn reserve() -> FallibleFunction<&'static str, ReserveError, u32> {
    FunctionBuilder::new(|input: &str| {
        let requested: u32 = match input.parse() {
            Ok(quantity) => quantity,
            Err(_) => panic_any(MalformedQuantity(input.to_string())),
        };
        if requested > AVAILABLE {
            panic_any(OutOfStock {
                requested,
                available: AVAILABLE,
            });
        }
        requested
    })
    .catch::<MalformedQuantity>()
    .map_failure(|MalformedQuantity(text)| ReserveError::Malformed(text))
    .catch::<OutOfStock>(|shortage| ReserveError::Shortage {
        requested: shortage.requested,
        available: shortage.available,
    })
}

// =============================================================================
// Unguarded Invocation
// =============================================================================

#[rstest]
fn an_unguarded_builder_applies_the_function() {
    let add_two = FunctionBuilder::new(|x: i32| x + 2);
    assert_eq!(add_two.invoke(2), 4);
}

#[rstest]
#[should_panic(expected = "no guard attached")]
fn without_a_guard_panics_reach_the_caller() {
    let failing = FunctionBuilder::new(|_: i32| -> i32 { panic!("no guard attached") });
    failing.invoke(0);
}

// =============================================================================
// Single Guard
// =============================================================================

#[rstest]
fn the_first_guard_splits_success_and_failure() {
    let parse = FunctionBuilder::new(|input: &str| match input.parse::<u32>() {
        Ok(quantity) => quantity,
        Err(_) => panic_any(MalformedQuantity(input.to_string())),
    })
    .catch::<MalformedQuantity>();

    assert_eq!(parse.invoke("6"), Fallible::success(6));
    assert_eq!(
        parse.invoke("six"),
        Fallible::failure(MalformedQuantity("six".to_string()))
    );
}

#[rstest]
fn a_guarded_function_is_reusable_across_invocations() {
    let guarded = reserve();

    assert_eq!(guarded.invoke("2"), Fallible::success(2));
    assert!(guarded.invoke("nope").is_failure());
    assert_eq!(guarded.invoke("2"), Fallible::success(2));
}

// =============================================================================
// Guard Chains
// =============================================================================

#[rstest]
#[case("3", Fallible::success(3))]
#[case("many", Fallible::failure(ReserveError::Malformed("many".to_string())))]
#[case("25", Fallible::failure(ReserveError::Shortage { requested: 25, available: AVAILABLE }))]
fn each_guard_captures_its_own_payload(
    #[case] input: &'static str,
    #[case] expected: Fallible<ReserveError, u32>,
) {
    assert_eq!(reserve().invoke(input), expected);
}

#[rstest]
fn a_payload_no_guard_matches_keeps_unwinding() {
    let guarded = FunctionBuilder::new(|_: i32| -> u32 { panic!("disk offline") })
        .catch::<MalformedQuantity>();

    let outcome = catch_unwind(AssertUnwindSafe(|| guarded.invoke(7)));
    let payload = outcome.expect_err("the payload should pass the quantity guard");
    assert_eq!(payload.downcast_ref::<&str>(), Some(&"disk offline"));
}

// =============================================================================
// Catch-All Guards
// =============================================================================

#[rstest]
fn catch_all_makes_the_invocation_total() {
    let audit = FunctionBuilder::new(|entry: u32| {
        assert!(entry < 100, "entry {entry} out of audit range");
        entry + 1
    })
    .catch_all();

    assert_eq!(audit.invoke(41).get_success(), Maybe::some(42));

    let message = audit
        .invoke(600)
        .get_failure()
        .and_then(|panic| panic.message().map(str::to_string));
    assert_eq!(message, Maybe::some("entry 600 out of audit range".to_string()));
}

#[rstest]
fn a_terminal_catch_all_converts_leftover_panics() {
    let guarded = FunctionBuilder::new(|input: &str| -> u32 {
        let quantity: u32 = match input.parse() {
            Ok(quantity) => quantity,
            Err(_) => panic_any(MalformedQuantity(input.to_string())),
        };
        assert!(quantity <= 10_000, "quantity {quantity} exceeds the order cap");
        quantity
    })
    .catch::<MalformedQuantity>()
    .map_failure(|MalformedQuantity(text)| format!("malformed: {text}"))
    .catch_all(|panic| panic.message().value_or("opaque panic").to_string());

    assert_eq!(guarded.invoke("8"), Fallible::success(8));
    assert_eq!(
        guarded.invoke("x"),
        Fallible::failure("malformed: x".to_string())
    );
    assert_eq!(
        guarded.invoke("99999"),
        Fallible::failure("quantity 99999 exceeds the order cap".to_string())
    );
}

// =============================================================================
// Thunks and Actions
// =============================================================================

#[rstest]
fn guarded_thunks_report_their_value_as_success() {
    let ready = FunctionBuilder::from_thunk(|| 42).catch_all();
    assert_eq!(ready.invoke(Unit).get_success(), Maybe::some(42));
}

#[rstest]
fn a_guarded_action_reports_the_panic_as_a_value() {
    let strict = FunctionBuilder::from_action(|| panic!("switch jammed")).catch_all();

    let message = strict
        .invoke(Unit)
        .get_failure()
        .and_then(|panic| panic.message().map(str::to_string));
    assert_eq!(message, Maybe::some("switch jammed".to_string()));
}

// =============================================================================
// Downstream Composition
// =============================================================================

#[rstest]
fn already_fallible_functions_wrap_without_a_guard() {
    let parse = FallibleFunction::new(|input: &str| {
        Fallible::if_none_fail(
            Maybe::from_option(input.parse::<u32>().ok()),
            format!("not a quantity: {input}"),
        )
    });

    assert_eq!(parse.invoke("12"), Fallible::success(12));
    assert_eq!(
        parse.invoke("twelve"),
        Fallible::failure("not a quantity: twelve".to_string())
    );
}

#[rstest]
fn invocation_results_chain_with_fallible_combinators() {
    let receipt = reserve()
        .invoke("4")
        .map(|quantity| quantity * 25)
        .fold(
            |error| format!("rejected: {error:?}"),
            |total| format!("charged {total}"),
        );

    assert_eq!(receipt, "charged 100");
}
