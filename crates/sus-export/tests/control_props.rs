//! Property tests for the control-value domain.

use proptest::prelude::*;

use sus_export::{CONTROL_CEILING, CONTROL_FLOOR, ambulatory_control, authorization_control};
use sus_layout::ValueMap;

fn line(code: u64, quantity: u32) -> ValueMap {
    let mut map = ValueMap::new();
    map.set("procedimento", format!("{code:010}"));
    map.set("quantidade", quantity);
    map
}

fn proc(code: u64, quantity: u32) -> ValueMap {
    let mut map = ValueMap::new();
    map.set("codigo", format!("{code:010}"));
    map.set("quantidade", quantity);
    map
}

proptest! {
    #[test]
    fn ambulatory_control_stays_in_domain(
        codes in proptest::collection::vec((0u64..10_000_000_000, 0u32..100_000), 0..40),
    ) {
        let lines: Vec<ValueMap> = codes
            .iter()
            .map(|(code, quantity)| line(*code, *quantity))
            .collect();
        let control = ambulatory_control(&lines).expect("control");
        prop_assert!((CONTROL_FLOOR..=CONTROL_CEILING).contains(&control));
    }

    #[test]
    fn authorization_control_stays_in_domain(
        codes in proptest::collection::vec((0u64..10_000_000_000, 0u32..100_000), 1..20),
        number in 0u64..10_000_000_000_000,
    ) {
        let procedures: Vec<ValueMap> = codes
            .iter()
            .map(|(code, quantity)| proc(*code, *quantity))
            .collect();
        let control =
            authorization_control(&procedures, &format!("{number:013}")).expect("control");
        prop_assert!((CONTROL_FLOOR..=CONTROL_CEILING).contains(&control));
    }

    #[test]
    fn quantity_increment_shifts_the_sum_by_exactly_k(
        code in 0u64..10_000_000_000,
        quantity in 0u32..1000,
        k in 1u32..1000,
    ) {
        let base = ambulatory_control(&[line(code, quantity)]).expect("control");
        let bumped = ambulatory_control(&[line(code, quantity + k)]).expect("control");
        prop_assert_eq!(
            (i64::from(k)).rem_euclid(1111),
            (bumped - base).rem_euclid(1111)
        );
    }
}
