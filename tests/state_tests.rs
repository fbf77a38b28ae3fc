//! Unit tests for the State computation builder.
//!
//! These tests run small stateful programs end to end: counters, a stack
//! machine, guarded withdrawals, and audit logs. The mechanics of each
//! combinator are covered next to the implementation; here the focus is
//! on how the pieces compose and how state threads through a pipeline.

#![cfg(feature = "effect")]

use fallibars::control::{Fallible, Maybe};
use fallibars::effect::State;
use rstest::rstest;

fn push(value: i32) -> State<Vec<i32>, ()> {
    State::new(move |mut stack: Vec<i32>| {
        stack.push(value);
        ((), stack)
    })
}

fn pop() -> State<Vec<i32>, Maybe<i32>> {
    State::new(|mut stack: Vec<i32>| {
        let top = Maybe::from_option(stack.pop());
        (top, stack)
    })
}

fn withdraw(amount: u32) -> State<u32, Fallible<String, u32>> {
    State::new(move |balance: u32| {
        if balance >= amount {
            (Fallible::success(amount), balance - amount)
        } else {
            (
                Fallible::failure(format!("insufficient funds for {amount}")),
                balance,
            )
        }
    })
}

fn record(event: &str) -> State<Vec<String>, usize> {
    let event = event.to_string();
    State::new(move |mut log: Vec<String>| {
        log.push(event.clone());
        (log.len(), log)
    })
}

// =============================================================================
// Counters
// =============================================================================

#[rstest]
fn a_chain_of_increments_threads_the_count() {
    let increment: State<i32, ()> = State::modify(|count: i32| count + 1);
    let program = increment
        .clone()
        .then(increment.clone())
        .then(increment)
        .then(State::get());

    assert_eq!(program.run(0), (3, 3));
}

#[rstest]
fn map2_threads_state_left_to_right() {
    let take_ticket: State<u32, u32> =
        State::get().flat_map(|current: u32| State::put(current + 1).then(State::pure(current)));

    let pair = take_ticket
        .clone()
        .map2(take_ticket, |first, second| (first, second));

    assert_eq!(pair.run(7), ((7, 8), 9));
}

// =============================================================================
// Stack Machine
// =============================================================================

#[rstest]
fn stack_operations_compose_into_programs() {
    let program = push(1).then(push(2)).then(pop());
    assert_eq!(program.run(Vec::new()), (Maybe::some(2), vec![1]));
}

#[rstest]
fn popping_an_empty_stack_reports_absence() {
    assert_eq!(pop().eval(Vec::new()), Maybe::none());
}

#[rstest]
fn pushes_survive_an_overdrawn_pop() {
    let program = pop().then(push(5)).then(pop());
    assert_eq!(program.run(Vec::new()), (Maybe::some(5), vec![]));
}

// =============================================================================
// Guarded Withdrawals
// =============================================================================

#[rstest]
fn withdrawals_update_the_balance_in_order() {
    let program = withdraw(30).then(withdraw(50));
    assert_eq!(program.run(100), (Fallible::success(50), 20));
}

#[rstest]
fn an_overdraft_fails_and_leaves_the_balance_alone() {
    let (outcome, balance) = withdraw(30).then(withdraw(200)).run(100);

    assert_eq!(
        outcome,
        Fallible::failure("insufficient funds for 200".to_string())
    );
    assert_eq!(balance, 70);
}

// =============================================================================
// Audit Logs
// =============================================================================

#[rstest]
fn sequence_preserves_recording_order() {
    let session = State::sequence(vec![record("connect"), record("auth"), record("close")]);
    let (positions, log) = session.run(Vec::new());

    assert_eq!(positions, vec![1, 2, 3]);
    assert_eq!(log, vec!["connect", "auth", "close"]);
}

// =============================================================================
// Rewriting and Reading State
// =============================================================================

#[rstest]
fn modify_rewrites_the_state_in_place() {
    let normalize: State<String, ()> = State::modify(|text: String| text.trim().to_lowercase());
    let program = normalize.then(State::get());

    assert_eq!(program.eval("  MiXeD CaSe  ".to_string()), "mixed case");
}

#[rstest]
fn eval_and_exec_split_the_run_pair() {
    let next_invoice: State<u32, String> = State::get()
        .flat_map(|number: u32| State::put(number + 1).then(State::pure(format!("INV-{number:04}"))));

    assert_eq!(next_invoice.eval(41), "INV-0041");
    assert_eq!(next_invoice.exec(41), 42);
}
