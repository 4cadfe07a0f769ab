use parse_rail::convert::{outcome_to_result, result_to_outcome};
use parse_rail::{ErrorVec, ParseOutcome};

#[test]
fn test_outcome_to_result_success() {
    let o = ParseOutcome::<i32, &str>::success(42);
    assert_eq!(outcome_to_result(o), Ok(42));
}

#[test]
fn test_outcome_to_result_takes_first_error() {
    let o = ParseOutcome::<i32, &str>::failure_many(["first", "second"]);
    assert_eq!(outcome_to_result(o), Err("first"));
}

#[test]
fn test_result_to_outcome_ok() {
    let o = result_to_outcome(Ok::<_, &str>(42));
    assert_eq!(o.into_value(), Some(42));
}

#[test]
fn test_result_to_outcome_err_is_singleton() {
    let o = result_to_outcome(Err::<i32, _>("bad value"));
    assert_eq!(o.errors(), ["bad value"]);
}

#[test]
fn test_from_result_impl() {
    let o: ParseOutcome<i32, &str> = Err("bad value").into();
    assert!(o.is_failure());
}

#[test]
fn test_into_result_impl_keeps_all_errors() {
    let o = ParseOutcome::<i32, &str>::failure_many(["a", "b"]);
    let result: Result<i32, ErrorVec<&str>> = o.into();
    assert_eq!(result.unwrap_err().len(), 2);
}
