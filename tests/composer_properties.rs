//! Property-based tests for the combinators.

use predicate_compose::testing::{counted, CallCount, Counted};
use predicate_compose::*;
use proptest::prelude::*;

fn consts(inputs: &[bool]) -> Vec<Const> {
    inputs.iter().copied().map(constant).collect()
}

fn counted_consts(inputs: &[bool]) -> (Vec<Counted<Const>>, Vec<CallCount>) {
    inputs.iter().copied().map(|b| counted(constant(b))).unzip()
}

fn total_calls(counts: &[CallCount]) -> usize {
    counts.iter().map(CallCount::get).sum()
}

proptest! {
    #[test]
    fn all_of_is_conjunction(inputs in prop::collection::vec(any::<bool>(), 0..12)) {
        prop_assert_eq!(all_of(consts(&inputs)).check(&()), inputs.iter().all(|b| *b));
    }

    #[test]
    fn any_of_is_disjunction(inputs in prop::collection::vec(any::<bool>(), 0..12)) {
        prop_assert_eq!(any_of(consts(&inputs)).check(&()), inputs.iter().any(|b| *b));
    }

    #[test]
    fn xor_of_is_parity(inputs in prop::collection::vec(any::<bool>(), 0..12)) {
        let odd = inputs.iter().filter(|b| **b).count() % 2 == 1;
        prop_assert_eq!(xor_of(consts(&inputs)).check(&()), odd);
    }

    #[test]
    fn any_but_is_some_but_not_all(inputs in prop::collection::vec(any::<bool>(), 0..12)) {
        let some = inputs.iter().any(|b| *b);
        let every = inputs.iter().all(|b| *b);
        prop_assert_eq!(any_but(consts(&inputs)).check(&()), some && !every);
    }

    #[test]
    fn all_of_calls_up_to_first_false(inputs in prop::collection::vec(any::<bool>(), 0..12)) {
        let (predicates, counts) = counted_consts(&inputs);
        all_of(predicates).check(&());

        let expected = inputs
            .iter()
            .position(|b| !*b)
            .map_or(inputs.len(), |first_false| first_false + 1);
        prop_assert_eq!(total_calls(&counts), expected);
        prop_assert!(counts.iter().all(|c| c.get() <= 1));
    }

    #[test]
    fn any_of_calls_every_predicate_once(inputs in prop::collection::vec(any::<bool>(), 0..12)) {
        let (predicates, counts) = counted_consts(&inputs);
        any_of(predicates).check(&());
        prop_assert!(counts.iter().all(|c| c.get() == 1));
        prop_assert_eq!(total_calls(&counts), inputs.len());
    }

    #[test]
    fn xor_of_and_any_but_call_every_predicate_once(
        inputs in prop::collection::vec(any::<bool>(), 0..12)
    ) {
        let (predicates, counts) = counted_consts(&inputs);
        xor_of(predicates.clone()).check(&());
        any_but(predicates).check(&());
        prop_assert!(counts.iter().all(|c| c.get() == 2));
    }

    #[test]
    fn not_negates(x in any::<i64>(), threshold in any::<i64>()) {
        let above = move |n: &i64| *n > threshold;
        prop_assert_eq!(not(above).check(&x), !above.check(&x));
    }

    #[test]
    fn nested_all_of_equals_flat(a in any::<bool>(), b in any::<bool>(), c in any::<bool>()) {
        let nested = all_of![all_of([constant(a), constant(b)]), constant(c)];
        let flat = all_of([constant(a), constant(b), constant(c)]);
        prop_assert_eq!(
            Predicate::<()>::check(&nested, &()),
            flat.check(&())
        );
    }

    #[test]
    fn string_contains_all_is_both_contains(
        haystack in "[a-d]{0,8}",
        x in "[a-d]{0,2}",
        y in "[a-d]{0,2}",
    ) {
        let both = string::contains_all([x.clone(), y.clone()]).check(haystack.as_str());
        let each = string::contains(x).check(haystack.as_str())
            && string::contains(y).check(haystack.as_str());
        prop_assert_eq!(both, each);
    }

    #[test]
    fn collection_contains_all_is_both_contains(
        haystack in prop::collection::vec(0u8..6, 0..8),
        x in 0u8..6,
        y in 0u8..6,
    ) {
        let both = collection::contains_all([x, y]).check(haystack.as_slice());
        let each = collection::contains(x).check(haystack.as_slice())
            && collection::contains(y).check(haystack.as_slice());
        prop_assert_eq!(both, each);
    }
}
