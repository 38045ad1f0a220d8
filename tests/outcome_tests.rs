//! Outcome container behavior, including the filter-rejection distinction.

use std::cell::Cell;

use combars::container::{Outcome, PredicateRejection};
use combars::function::Guarded;
use rstest::rstest;

#[derive(Debug, Clone, PartialEq, Eq)]
enum FetchError {
    Broken,
    Rejected(PredicateRejection),
}

impl From<PredicateRejection> for FetchError {
    fn from(rejection: PredicateRejection) -> Self {
        Self::Rejected(rejection)
    }
}

#[rstest]
fn test_of_captures_both_results() {
    let parsed: Outcome<i32, std::num::ParseIntError> = Outcome::of(|| "10".parse());
    assert_eq!(parsed, Outcome::Success(10));

    let failed: Outcome<i32, std::num::ParseIntError> = Outcome::of(|| "oops".parse());
    assert!(failed.is_failure());
}

#[rstest]
fn test_map_transforms_success() {
    let outcome: Outcome<i32, FetchError> = Outcome::Success(21);
    assert_eq!(outcome.map(|value| value * 2), Outcome::Success(42));
}

#[rstest]
fn test_failure_never_invokes_closures() {
    let invocations = Cell::new(0);
    let failed: Outcome<i32, FetchError> = Outcome::Failure(FetchError::Broken);

    let mapped = failed.map(|value| {
        invocations.set(invocations.get() + 1);
        value
    });
    let chained = mapped.flat_map(|value| {
        invocations.set(invocations.get() + 1);
        Outcome::Success(value)
    });
    let filtered = chained.filter(|_| {
        invocations.set(invocations.get() + 1);
        true
    });
    filtered
        .peek(|_| invocations.set(invocations.get() + 1))
        .for_each(|_| invocations.set(invocations.get() + 1));

    assert_eq!(invocations.get(), 0);
}

#[rstest]
fn test_failure_propagates_unchanged_through_chain() {
    let failed: Outcome<i32, FetchError> = Outcome::Failure(FetchError::Broken);

    let result = failed
        .map(|value| value * 2)
        .flat_map(|value| Outcome::Success(value + 1))
        .filter(|_| true);

    assert_eq!(result, Outcome::Failure(FetchError::Broken));
}

#[rstest]
fn test_filter_rejection_is_distinguishable_from_failure() {
    let rejected: Outcome<i32, FetchError> = Outcome::Success(10).filter(|value| *value > 20);
    assert_eq!(
        rejected,
        Outcome::Failure(FetchError::Rejected(PredicateRejection))
    );

    let broken: Outcome<i32, FetchError> = Outcome::Failure(FetchError::Broken);
    assert_ne!(rejected, broken.clone().filter(|value| *value > 20));
}

#[rstest]
fn test_filter_keeps_accepted_success() {
    let outcome: Outcome<i32, FetchError> = Outcome::Success(30);
    assert_eq!(outcome.filter(|value| *value > 20), Outcome::Success(30));
}

#[rstest]
fn test_collect_rejects_like_filter() {
    let halve_evens = Guarded::new(|value: &i32| value % 2 == 0, |value: i32| value / 2);

    let collected: Outcome<i32, FetchError> = Outcome::Success(10).collect(&halve_evens);
    assert_eq!(collected, Outcome::Success(5));

    let rejected: Outcome<i32, FetchError> = Outcome::Success(7).collect(&halve_evens);
    assert_eq!(
        rejected,
        Outcome::Failure(FetchError::Rejected(PredicateRejection))
    );
}

#[rstest]
fn test_map_failure_touches_only_the_error() {
    let failed: Outcome<i32, FetchError> = Outcome::Failure(FetchError::Broken);
    assert_eq!(
        failed.map_failure(|error| format!("{error:?}")),
        Outcome::Failure("Broken".to_string())
    );

    let success: Outcome<i32, FetchError> = Outcome::Success(10);
    assert_eq!(
        success.map_failure(|error| format!("{error:?}")),
        Outcome::Success(10)
    );
}

#[rstest]
fn test_recover_and_get_or_else() {
    let failed: Outcome<i32, FetchError> = Outcome::Failure(FetchError::Broken);
    assert_eq!(failed.clone().recover(|_| 0), Outcome::Success(0));
    assert_eq!(failed.get_or_else(|_| -1), -1);

    let success: Outcome<i32, FetchError> = Outcome::Success(10);
    assert_eq!(success.clone().recover(|_| 0), Outcome::Success(10));
    assert_eq!(success.get_or_else(|_| -1), 10);
}

#[rstest]
fn test_fold_eliminates_both_variants() {
    let success: Outcome<i32, FetchError> = Outcome::Success(10);
    assert_eq!(
        success.fold(|error| format!("{error:?}"), |value| value.to_string()),
        "10"
    );

    let failed: Outcome<i32, FetchError> = Outcome::Failure(FetchError::Broken);
    assert_eq!(
        failed.fold(|error| format!("{error:?}"), |value| value.to_string()),
        "Broken"
    );
}

#[rstest]
fn test_result_interop() {
    let success: Outcome<i32, String> = Ok(10).into();
    assert_eq!(success, Outcome::Success(10));
    assert_eq!(success.to_result(), Ok(10));

    let failed: Outcome<i32, String> = Err("broken".to_string()).into();
    assert_eq!(failed.to_result(), Err("broken".to_string()));
}

#[rstest]
fn test_peek_observes_success_only() {
    let observed = Cell::new(0);

    let success: Outcome<i32, FetchError> = Outcome::Success(10);
    let unchanged = success.peek(|value| observed.set(*value));
    assert_eq!(observed.get(), 10);
    assert_eq!(unchanged, Outcome::Success(10));
}
