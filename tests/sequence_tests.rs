//! Unit tests for the iterator and collection utilities.
//!
//! The sequence module extends standard iterators with prepending,
//! overlapping pairs, wide zips, lazy taps, and infinite generators, and
//! adds the boundary helpers that bridge collections into
//! [`Maybe`]-based pipelines. These tests drive the adaptors the way a
//! consumer would: chained together and collected at the end.

#![cfg(feature = "sequence")]

use std::cell::Cell;
use std::collections::HashMap;

use fallibars::control::{Fallible, Maybe};
use fallibars::sequence::{
    MapLookupExt, SequenceExt, TupleAppend, none_if_empty, repeat_forever, unfold,
};
use rstest::rstest;

// =============================================================================
// Prepending
// =============================================================================

#[rstest]
fn start_with_puts_the_item_first() {
    let items: Vec<i32> = vec![42, 43, 44].into_iter().start_with(1337).collect();
    assert_eq!(items, vec![1337, 42, 43, 44]);
}

#[rstest]
fn start_with_feeds_further_adaptors() {
    let pairs: Vec<(i32, i32)> = vec![2, 3].into_iter().start_with(1).pairwise().collect();
    assert_eq!(pairs, vec![(1, 2), (2, 3)]);
}

// =============================================================================
// Overlapping Pairs
// =============================================================================

#[rstest]
#[case(vec![], vec![])]
#[case(vec![1], vec![])]
#[case(vec![1, 2], vec![(1, 2)])]
#[case(vec![1, 2, 3, 4, 5], vec![(1, 2), (2, 3), (3, 4), (4, 5)])]
fn pairwise_yields_one_pair_per_step(
    #[case] input: Vec<i32>,
    #[case] expected: Vec<(i32, i32)>,
) {
    let pairs: Vec<(i32, i32)> = input.into_iter().pairwise().collect();
    assert_eq!(pairs, expected);
}

#[rstest]
fn pairwise_detects_adjacent_changes() {
    let readings = vec![10, 10, 12, 9];
    let deltas: Vec<i32> = readings
        .into_iter()
        .pairwise()
        .map(|(previous, current)| current - previous)
        .collect();

    assert_eq!(deltas, vec![0, 2, -3]);
}

// =============================================================================
// Laziness and Draining
// =============================================================================

#[rstest]
fn tap_each_runs_only_when_drained() {
    let sum = Cell::new(0);
    let tapped = vec![1, 2, 3]
        .into_iter()
        .tap_each(|value| sum.set(sum.get() + value));

    assert_eq!(sum.get(), 0);

    tapped.for_each_drain();
    assert_eq!(sum.get(), 6);
}

#[rstest]
fn taps_observe_each_pipeline_stage() {
    let before_filter = Cell::new(0);
    let after_filter = Cell::new(0);

    vec![1, 2, 3, 4]
        .into_iter()
        .tap_each(|_| before_filter.set(before_filter.get() + 1))
        .filter(|value| value % 2 == 0)
        .tap_each(|_| after_filter.set(after_filter.get() + 1))
        .for_each_drain();

    assert_eq!(before_filter.get(), 4);
    assert_eq!(after_filter.get(), 2);
}

// =============================================================================
// First Element
// =============================================================================

#[rstest]
fn first_or_none_on_an_empty_sequence() {
    let nothing: Maybe<i32> = std::iter::empty().first_or_none();
    assert_eq!(nothing, Maybe::none());
}

#[rstest]
fn first_or_none_takes_the_head() {
    assert_eq!("abc".chars().first_or_none(), Maybe::some('a'));
}

#[rstest]
fn first_or_none_after_a_filter() {
    let first_multiple = (1..10).filter(|value| value % 4 == 0).first_or_none();
    assert_eq!(first_multiple, Maybe::some(4));
}

// =============================================================================
// Zipping
// =============================================================================

#[rstest]
fn zip3_stops_at_the_shortest_input() {
    let rows: Vec<(u32, &str, bool)> = vec![1, 2, 3]
        .into_iter()
        .zip3(vec!["ada", "brian"], vec![true, false, true])
        .collect();

    assert_eq!(rows, vec![(1, "ada", true), (2, "brian", false)]);
}

#[rstest]
fn zip4_stops_at_the_shortest_input() {
    let rows: Vec<(i32, &str, bool, i32)> = vec![1, 2, 3]
        .into_iter()
        .zip4(vec!["a", "b"], vec![true, false, true], vec![10, 20, 30])
        .collect();

    assert_eq!(rows, vec![(1, "a", true, 10), (2, "b", false, 20)]);
}

#[rstest]
fn repeat_forever_pads_a_finite_zip() {
    let padded: Vec<(&str, i32, &str)> = vec!["job-a", "job-b"]
        .into_iter()
        .zip3(repeat_forever(0), repeat_forever("pending"))
        .collect();

    assert_eq!(padded, vec![("job-a", 0, "pending"), ("job-b", 0, "pending")]);
}

// =============================================================================
// Infinite Generators
// =============================================================================

#[rstest]
fn unfold_grows_from_the_seed() {
    // Ten percent interest, truncated to whole units each step.
    let balances: Vec<u32> = unfold(100_u32, |balance| balance + balance / 10)
        .take(4)
        .collect();

    assert_eq!(balances, vec![100, 110, 121, 133]);
}

#[rstest]
fn unfold_truncates_with_standard_adaptors() {
    let first_big_power = unfold(2_u64, |value| value * 2)
        .filter(|value| *value > 1000)
        .first_or_none();

    assert_eq!(first_big_power, Maybe::some(1024));
}

#[rstest]
fn join_strings_renders_a_generated_sequence() {
    let countdown = unfold(3_i32, |value| value - 1)
        .take(4)
        .map(|value| value.to_string())
        .join_strings(", ");

    assert_eq!(countdown, "3, 2, 1, 0");
}

// =============================================================================
// Map Lookup
// =============================================================================

#[rstest]
fn lookup_returns_maybe_references() {
    let mut ports = HashMap::new();
    ports.insert("https".to_string(), 443_u16);

    assert_eq!(ports.lookup(&"https".to_string()), Maybe::some(&443));
    assert_eq!(ports.lookup(&"gopher".to_string()), Maybe::none());
}

#[rstest]
fn lookup_misses_lift_into_failures() {
    let mut ports: HashMap<String, u16> = HashMap::new();
    ports.insert("https".to_string(), 443);

    let outcome: Fallible<String, u16> = ports
        .lookup(&"gopher".to_string())
        .map(|port| *port)
        .if_none_fail("scheme not registered".to_string());

    assert_eq!(outcome, Fallible::failure("scheme not registered".to_string()));
}

// =============================================================================
// Text Boundary
// =============================================================================

#[rstest]
fn none_if_empty_reads_blank_input_as_absence() {
    assert_eq!(none_if_empty(""), Maybe::none());
    assert_eq!(none_if_empty("reply"), Maybe::some("reply".to_string()));
}

#[rstest]
fn none_if_empty_guards_the_head_of_a_form() {
    fn display_name(entries: Vec<&str>) -> Maybe<String> {
        entries
            .into_iter()
            .first_or_none()
            .and_then(none_if_empty)
            .map(|name| name.to_uppercase())
    }

    assert_eq!(display_name(vec!["ada", "brian"]), Maybe::some("ADA".to_string()));
    assert_eq!(display_name(vec!["", "brian"]), Maybe::none());
    assert_eq!(display_name(vec![]), Maybe::none());
}

// =============================================================================
// Tuple Growth
// =============================================================================

#[rstest]
fn append_grows_pairs_into_wider_tuples() {
    let pair = ("localhost", 8080_u16);
    let triple = pair.append(true);
    assert_eq!(triple, ("localhost", 8080, true));

    let quadruple = triple.append("http/2");
    assert_eq!(quadruple, ("localhost", 8080, true, "http/2"));
}

#[rstest]
fn append_collects_stepwise_parse_results() {
    let parsed = ("2026", "08")
        .append("25")
        .append("release");

    assert_eq!(parsed, ("2026", "08", "25", "release"));
}
