//! Property-based functor and monad law checks for both containers.

use combars::container::{Maybe, Outcome};
use proptest::prelude::*;

fn arbitrary_maybe() -> impl Strategy<Value = Maybe<i64>> {
    prop_oneof![
        any::<i64>().prop_map(Maybe::Present),
        Just(Maybe::Absent),
    ]
}

fn arbitrary_outcome() -> impl Strategy<Value = Outcome<i64, String>> {
    prop_oneof![
        any::<i64>().prop_map(Outcome::Success),
        ".*".prop_map(Outcome::Failure),
    ]
}

proptest! {
    #[test]
    fn maybe_map_identity(maybe in arbitrary_maybe()) {
        prop_assert_eq!(maybe.map(|value| value), maybe);
    }

    #[test]
    fn maybe_map_composition(maybe in arbitrary_maybe()) {
        let f = |value: i64| value.wrapping_mul(3);
        let g = |value: i64| value.wrapping_sub(7);

        prop_assert_eq!(maybe.map(f).map(g), maybe.map(|value| g(f(value))));
    }

    #[test]
    fn maybe_flat_map_purity(maybe in arbitrary_maybe()) {
        prop_assert_eq!(maybe.flat_map(Maybe::Present), maybe);
    }

    #[test]
    fn maybe_flat_map_associativity(maybe in arbitrary_maybe()) {
        let f = |value: i64| Maybe::Present(value.wrapping_mul(3));
        let g = |value: i64| {
            if value % 2 == 0 {
                Maybe::Present(value)
            } else {
                Maybe::Absent
            }
        };

        prop_assert_eq!(
            maybe.flat_map(f).flat_map(g),
            maybe.flat_map(|value| f(value).flat_map(g))
        );
    }

    #[test]
    fn maybe_filter_implies_predicate(value in any::<i64>()) {
        let filtered = Maybe::of(value).filter(|candidate| candidate % 2 == 0);
        if value % 2 == 0 {
            prop_assert_eq!(filtered, Maybe::Present(value));
        } else {
            prop_assert_eq!(filtered, Maybe::Absent);
        }
    }

    #[test]
    fn outcome_map_identity(outcome in arbitrary_outcome()) {
        prop_assert_eq!(outcome.clone().map(|value| value), outcome);
    }

    #[test]
    fn outcome_map_composition(outcome in arbitrary_outcome()) {
        let f = |value: i64| value.wrapping_mul(3);
        let g = |value: i64| value.wrapping_sub(7);

        prop_assert_eq!(
            outcome.clone().map(f).map(g),
            outcome.map(|value| g(f(value)))
        );
    }

    #[test]
    fn outcome_flat_map_purity(outcome in arbitrary_outcome()) {
        prop_assert_eq!(outcome.clone().flat_map(Outcome::Success), outcome);
    }

    #[test]
    fn outcome_result_roundtrip(outcome in arbitrary_outcome()) {
        let roundtripped = Outcome::from(outcome.clone().to_result());
        prop_assert_eq!(roundtripped, outcome);
    }
}
