#![cfg(feature = "serde")]

//! Integration tests for serde support in foldwise.

use foldwise::control::{Maybe, just, nothing};
use foldwise::typeclass::{Product, Sum, fold_map};
use rstest::rstest;

// =============================================================================
// Maybe
// =============================================================================

#[rstest]
fn test_maybe_json_roundtrip() {
    let present: Maybe<String> = just("value".to_string());
    let absent: Maybe<String> = nothing();

    let present_json = serde_json::to_string(&present).unwrap();
    let absent_json = serde_json::to_string(&absent).unwrap();

    let restored_present: Maybe<String> = serde_json::from_str(&present_json).unwrap();
    let restored_absent: Maybe<String> = serde_json::from_str(&absent_json).unwrap();

    assert_eq!(present, restored_present);
    assert_eq!(absent, restored_absent);
}

#[rstest]
fn test_maybe_json_shape() {
    assert_eq!(serde_json::to_string(&just(1)).unwrap(), r#"{"Just":1}"#);
    assert_eq!(serde_json::to_string(&nothing::<i32>()).unwrap(), r#""Nothing""#);
}

#[rstest]
fn test_maybe_list_roundtrip() {
    let values = vec![just(1), nothing(), just(3)];
    let json = serde_json::to_string(&values).unwrap();
    let restored: Vec<Maybe<i32>> = serde_json::from_str(&json).unwrap();
    assert_eq!(values, restored);
}

// =============================================================================
// Sum and Product
// =============================================================================

#[rstest]
fn test_wrappers_serialize_as_inner_value() {
    assert_eq!(serde_json::to_string(&fold_map(Sum, vec![1, 2, 3, 4])).unwrap(), "10");
    assert_eq!(serde_json::to_string(&Product(2.5)).unwrap(), "2.5");
}

#[rstest]
fn test_wrappers_json_roundtrip() {
    let sum: Sum<i64> = serde_json::from_str("42").unwrap();
    let product: Product<u8> = serde_json::from_str("7").unwrap();
    assert_eq!(sum, Sum(42));
    assert_eq!(product, Product(7));
}
