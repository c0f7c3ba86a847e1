//! Integration tests for `Maybe` used alongside the standard library.

use std::collections::HashSet;

use foldwise::control::{Maybe, NothingError, just, nothing};
use rstest::rstest;

fn lookup(key: &str) -> Maybe<u32> {
    match key {
        "one" => just(1),
        "two" => just(2),
        _ => nothing(),
    }
}

#[rstest]
fn chained_lookups() {
    let total = lookup("one").zip(lookup("two")).map(|(a, b)| a + b);
    assert_eq!(total, just(3));
    assert_eq!(lookup("one").zip(lookup("three")), nothing());
}

#[rstest]
fn question_mark_through_into_result() -> Result<(), NothingError> {
    let value = lookup("two").into_result()?;
    assert_eq!(value, 2);
    Ok(())
}

#[rstest]
fn nothing_error_propagates_as_boxed_error() {
    fn read(key: &str) -> Result<u32, Box<dyn std::error::Error>> {
        Ok(lookup(key).into_result()?)
    }

    assert_eq!(read("one").ok(), Some(1));
    let error = read("missing").expect_err("missing key");
    assert_eq!(error.to_string(), "expected Just but found Nothing");
}

#[rstest]
fn hashing_and_ordering() {
    let values: HashSet<Maybe<u8>> = [just(1), nothing(), just(1), nothing()].into_iter().collect();
    assert_eq!(values.len(), 2);

    let mut sorted = vec![nothing(), just(3), just(1)];
    sorted.sort();
    assert_eq!(sorted, vec![just(1), just(3), nothing()]);
}

#[rstest]
fn collecting_present_values() {
    let present: Vec<u32> = ["one", "x", "two"].into_iter().flat_map(lookup).collect();
    assert_eq!(present, vec![1, 2]);
}

#[rstest]
fn formatting() {
    assert_eq!(format!("{}", just("a")), "Just(a)");
    assert_eq!(format!("{:?}", just(1)), "Just(1)");
    assert_eq!(format!("{:?}", nothing::<u8>()), "Nothing");
}
