//! Lifting fallible rules into total container-returning functions.

use std::cell::Cell;
use std::rc::Rc;

use combars::container::{Maybe, Outcome};
use combars::function::{Function1, Function2};
use rstest::rstest;

fn checked_divide(dividend: i32, divisor: i32) -> Result<i32, String> {
    dividend
        .checked_div(divisor)
        .ok_or_else(|| "division by zero".to_string())
}

#[rstest]
#[case(8, 2, Maybe::Present(4))]
#[case(9, 3, Maybe::Present(3))]
#[case(1, 0, Maybe::Absent)]
fn test_lift_totalizes_division(
    #[case] dividend: i32,
    #[case] divisor: i32,
    #[case] expected: Maybe<i32>,
) {
    let safe_divide = Function2::lift(checked_divide);
    assert_eq!(safe_divide.apply(dividend, divisor), expected);
}

#[rstest]
fn test_lift_outcome_preserves_error() {
    let safe_divide = Function2::lift_outcome(checked_divide);

    assert_eq!(safe_divide.apply(8, 2), Outcome::Success(4));
    assert_eq!(
        safe_divide.apply(1, 0),
        Outcome::Failure("division by zero".to_string())
    );
}

#[rstest]
fn test_lift1_parse() {
    let safe_parse = Function1::lift(|text: String| text.parse::<i32>());

    assert_eq!(safe_parse.apply("10".to_string()), Maybe::Present(10));
    assert_eq!(safe_parse.apply("oops".to_string()), Maybe::Absent);
}

#[rstest]
fn test_lifted_rule_runs_exactly_once_per_application() {
    let invocations = Rc::new(Cell::new(0));
    let witness = Rc::clone(&invocations);
    let lifted = Function1::lift(move |input: i32| -> Result<i32, String> {
        witness.set(witness.get() + 1);
        Ok(input)
    });

    assert_eq!(invocations.get(), 0);
    let _ = lifted.apply(1);
    assert_eq!(invocations.get(), 1);
    let _ = lifted.apply(2);
    assert_eq!(invocations.get(), 2);
}

#[rstest]
fn test_lifted_function_composes_with_container_ops() {
    let safe_divide = Function2::lift(checked_divide);

    let doubled = safe_divide.apply(8, 2).map(|quotient| quotient * 2);
    assert_eq!(doubled, Maybe::Present(8));

    let propagated = safe_divide.apply(1, 0).map(|quotient| quotient * 2);
    assert_eq!(propagated, Maybe::Absent);
}
