//! Integration tests for the list operations on native `Vec` values.
//!
//! These exercise `fold_map`, `fold`, `size`, `sequence` and `traverse`
//! through the prelude, the way a caller would.

use foldwise::prelude::*;
use rstest::rstest;

fn safe_parse_int(text: &str) -> Maybe<i32> {
    text.parse().map_or_else(|_| nothing(), just)
}

// =============================================================================
// Foldable
// =============================================================================

#[rstest]
fn fold_map_with_sum() {
    let total = fold_map(Sum, vec![1, 2, 3, 4]);
    assert_eq!(total, Sum::new(10));
    assert_eq!(total.into_inner(), 10);
}

#[rstest]
fn fold_rebuilds_the_list() {
    let rebuilt = fold(
        |element: i32, mut accumulator: Vec<i32>| {
            accumulator.push(element);
            accumulator
        },
        Vec::new(),
        vec![1, 2, 3, 4],
    );
    assert_eq!(rebuilt, vec![1, 2, 3, 4]);
}

#[rstest]
fn size_of_list() {
    assert_eq!(size(&vec![1, 2, 3, 4]), 4);
}

#[rstest]
fn input_is_still_usable_through_a_clone() {
    let values = vec![1, 2, 3];
    let total = fold_map(Sum, values.clone());
    assert_eq!(total, Sum(6));
    assert_eq!(values, vec![1, 2, 3]);
}

// =============================================================================
// Traversable
// =============================================================================

#[rstest]
fn sequence_of_justs() {
    let values = vec![just(1), just(2), just(3)];
    assert_eq!(sequence(MaybeApplicative, values), just(vec![1, 2, 3]));
}

#[rstest]
fn sequence_with_a_nothing() {
    let values = vec![just(1), nothing(), just(3)];
    assert_eq!(sequence(MaybeApplicative, values), nothing());
}

#[rstest]
#[case(vec!["1", "2", "3"], just(vec![1, 2, 3]))]
#[case(vec!["1", "two", "3"], nothing())]
#[case(vec![], just(vec![]))]
fn traverse_with_safe_parse_int(#[case] values: Vec<&str>, #[case] expected: Maybe<Vec<i32>>) {
    assert_eq!(traverse(MaybeApplicative, safe_parse_int, values), expected);
}

#[rstest]
fn traverse_result_into_error() {
    let parsed = traverse(
        ResultApplicative::new(),
        |text: &str| safe_parse_int(text).into_result(),
        vec!["4", "x"],
    );
    let error = parsed.expect_err("the second element does not parse");
    assert_eq!(error.to_string(), "expected Just but found Nothing");
}

#[rstest]
fn fold_map_over_a_traversal_result() {
    let total = traverse(MaybeApplicative, safe_parse_int, vec!["10", "20", "12"])
        .map(|numbers| fold_map(Sum, numbers));
    assert_eq!(total, just(Sum(42)));
}
