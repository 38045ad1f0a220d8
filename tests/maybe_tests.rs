//! Maybe container behavior, including closure-invocation discipline.

use std::cell::Cell;

use combars::container::Maybe;
use combars::function::Guarded;
use rstest::rstest;

#[rstest]
fn test_map_transforms_present() {
    assert_eq!(
        Maybe::of(10).map(|value| value.to_string()),
        Maybe::Present("10".to_string())
    );
}

#[rstest]
fn test_absent_never_invokes_closures() {
    let invocations = Cell::new(0);
    let nothing: Maybe<i32> = Maybe::absent();

    let mapped = nothing.map(|value| {
        invocations.set(invocations.get() + 1);
        value
    });
    let chained = mapped.flat_map(|value| {
        invocations.set(invocations.get() + 1);
        Maybe::of(value)
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
fn test_flat_map_flattens() {
    let half_if_even = |value: i32| {
        if value % 2 == 0 {
            Maybe::of(value / 2)
        } else {
            Maybe::Absent
        }
    };

    assert_eq!(Maybe::of(10).flat_map(half_if_even), Maybe::Present(5));
    assert_eq!(Maybe::of(7).flat_map(half_if_even), Maybe::Absent);
}

#[rstest]
#[case(10, Maybe::Present(10))]
#[case(3, Maybe::Absent)]
fn test_filter_keeps_accepted_values(#[case] input: i32, #[case] expected: Maybe<i32>) {
    assert_eq!(Maybe::of(input).filter(|value| value % 2 == 0), expected);
}

#[rstest]
fn test_collect_applies_guard_then_mapping() {
    let stringify_small = Guarded::new(|value: &i32| *value < 100, |value: i32| value.to_string());

    assert_eq!(
        Maybe::of(10).collect(&stringify_small),
        Maybe::Present("10".to_string())
    );
    assert_eq!(Maybe::of(500).collect(&stringify_small), Maybe::Absent);
    assert_eq!(Maybe::<i32>::Absent.collect(&stringify_small), Maybe::Absent);
}

#[rstest]
fn test_collect_skips_mapping_when_guard_rejects() {
    let mappings = std::rc::Rc::new(Cell::new(0));
    let witness = std::rc::Rc::clone(&mappings);
    let counting = Guarded::new(
        |value: &i32| *value < 100,
        move |value: i32| {
            witness.set(witness.get() + 1);
            value
        },
    );

    let _ = Maybe::of(500).collect(&counting);
    assert_eq!(mappings.get(), 0);
}

#[rstest]
fn test_peek_observes_and_passes_through() {
    let observed = Cell::new(0);
    let unchanged = Maybe::of(10).peek(|value| observed.set(*value));

    assert_eq!(observed.get(), 10);
    assert_eq!(unchanged, Maybe::Present(10));
}

#[rstest]
fn test_for_each_consumes_present_exactly_once() {
    let invocations = Cell::new(0);
    Maybe::of(10).for_each(|_| invocations.set(invocations.get() + 1));
    assert_eq!(invocations.get(), 1);
}

#[rstest]
fn test_fold_and_get_or_else() {
    assert_eq!(Maybe::of(10).fold(|| 0, |value| value * 2), 20);
    assert_eq!(Maybe::<i32>::Absent.fold(|| 0, |value| value * 2), 0);

    assert_eq!(Maybe::of(10).get_or_else(|| -1), 10);
    assert_eq!(Maybe::<i32>::Absent.get_or_else(|| -1), -1);
}

#[rstest]
fn test_option_interop() {
    assert_eq!(Maybe::from(Some(10)), Maybe::Present(10));
    assert_eq!(Maybe::<i32>::from(None), Maybe::Absent);
    assert_eq!(Option::from(Maybe::of(10)), Some(10));
    assert_eq!(Option::<i32>::from(Maybe::Absent), None);
}
