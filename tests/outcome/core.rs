use std::cell::Cell;

use parse_rail::ParseOutcome;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
struct Options {
    verbose: bool,
}

#[test]
fn test_fold_success_applies_success_handler() {
    let o: ParseOutcome<i32, &str> = ParseOutcome::success(21);
    assert_eq!(o.fold(|v| v * 2, |_| -1), 42);
}

#[test]
fn test_fold_failure_applies_failure_handler() {
    let o: ParseOutcome<i32, &str> = ParseOutcome::failure_many(["a", "b", "c"]);
    assert_eq!(o.fold(|_| 0, |errors| errors.len()), 3);
}

#[test]
fn test_on_success_fires_exactly_once() {
    let o: ParseOutcome<i32, &str> = ParseOutcome::success(7);
    let calls = Cell::new(0);
    o.on_success(|_| calls.set(calls.get() + 1));
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_on_success_is_inert_on_failure() {
    let o: ParseOutcome<i32, &str> = ParseOutcome::failure("unknown option --x");
    o.on_success(|_| panic!("must not fire for a failure"));
}

#[test]
fn test_on_failure_is_inert_on_success() {
    let o: ParseOutcome<i32, &str> = ParseOutcome::success(7);
    o.on_failure(|_| panic!("must not fire for a success"));
}

#[test]
fn test_handlers_chain_and_return_outcome_unchanged() {
    let o: ParseOutcome<i32, &str> = ParseOutcome::success(7);
    let fired = Cell::new(false);
    let chained = o
        .on_failure(|_| panic!("wrong variant"))
        .on_success(|_| fired.set(true));
    assert!(fired.get());
    assert_eq!(chained, &o);
}

#[test]
fn test_success_value_recorded_by_effect() {
    // Scenario: a success outcome carrying {verbose: true} reaches only the
    // success handler, which observes the field intact.
    let o: ParseOutcome<Options, String> = ParseOutcome::success(Options { verbose: true });
    let mut recorded = None;
    o.on_success(|opts| recorded = Some(opts.clone()))
        .on_failure(|_| panic!("must not fire"));
    assert_eq!(recorded, Some(Options { verbose: true }));
}

#[test]
fn test_failure_fold_observes_error_count() {
    let o: ParseOutcome<Options, &str> = ParseOutcome::failure("unknown option --x");
    assert_eq!(o.fold(|_| 0, |errors| errors.len()), 1);
}

#[test]
fn test_on_failure_sees_errors_in_detection_order() {
    let o: ParseOutcome<(), &str> = ParseOutcome::failure_many(["first", "second", "third"]);
    o.on_failure(|errors| assert_eq!(errors, ["first", "second", "third"]));
}

#[test]
fn test_map_errs_preserves_order() {
    let o: ParseOutcome<(), &str> = ParseOutcome::failure_many(["a", "b"]);
    let mapped = o.map_errs(|e| e.to_uppercase());
    assert_eq!(mapped.errors(), ["A", "B"]);
}

#[test]
fn test_map_failure_passes_through() {
    let o: ParseOutcome<i32, &str> = ParseOutcome::failure("error");
    let mapped = o.map(|v| v * 2);
    assert!(mapped.is_failure());
    assert_eq!(mapped.errors(), ["error"]);
}

#[test]
fn test_value_and_errors_accessors() {
    let ok: ParseOutcome<i32, &str> = ParseOutcome::success(42);
    assert_eq!(ok.value(), Some(&42));
    assert!(ok.errors().is_empty());

    let bad: ParseOutcome<i32, &str> = ParseOutcome::failure("error");
    assert_eq!(bad.value(), None);
    assert_eq!(bad.errors(), ["error"]);
}

#[test]
fn test_to_result_carries_all_errors() {
    let o: ParseOutcome<i32, &str> = ParseOutcome::failure_many(["a", "b"]);
    let errors = o.to_result().unwrap_err();
    assert_eq!(errors.len(), 2);
}

#[test]
fn test_into_value_and_into_errors() {
    let ok: ParseOutcome<i32, &str> = ParseOutcome::success(42);
    assert_eq!(ok.into_value(), Some(42));

    let bad: ParseOutcome<i32, &str> = ParseOutcome::failure("error");
    assert!(bad.into_errors().is_some());
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize, PartialEq, Debug)]
struct TestData {
    id: i32,
}

#[test]
#[cfg(feature = "serde")]
fn test_outcome_serde() {
    let ok = ParseOutcome::<TestData, String>::success(TestData { id: 1 });
    let serialized = serde_json::to_string(&ok).unwrap();
    let deserialized: ParseOutcome<TestData, String> = serde_json::from_str(&serialized).unwrap();
    assert_eq!(ok, deserialized);

    let bad = ParseOutcome::<TestData, String>::failure("error".to_string());
    let serialized_err = serde_json::to_string(&bad).unwrap();
    let deserialized_err: ParseOutcome<TestData, String> =
        serde_json::from_str(&serialized_err).unwrap();
    assert_eq!(bad, deserialized_err);
}
