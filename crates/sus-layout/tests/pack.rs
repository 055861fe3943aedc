//! Property tests for the packing engine.

use proptest::prelude::*;

use sus_layout::{FieldSpec, Pad, RecordLayout, ValueMap, pack};

const LAYOUT: RecordLayout = RecordLayout {
    name: "prop",
    total_length: 64,
    fields: &[
        FieldSpec::required_text("id", 1, 10),
        FieldSpec::text("name", 11, 30),
        FieldSpec::numeric("quantity", 41, 6),
        FieldSpec::optional_numeric("value", 47, 10),
        FieldSpec {
            name: "flag",
            start: 57,
            length: 8,
            required: false,
            default: "0",
            pad: Pad::Zero,
        },
    ],
};

proptest! {
    #[test]
    fn packed_length_always_matches_layout(
        id in "[A-Z0-9]{1,20}",
        name in "[ A-Za-z]{0,40}",
        quantity in 0u32..1_000_000,
        value in proptest::option::of(0i64..100_000_000),
    ) {
        let mut values = ValueMap::new();
        values.set("id", &id);
        values.set("name", &name);
        values.set("quantity", quantity);
        values.set_opt("value", value);

        let record = pack(&LAYOUT, &values).expect("pack");
        prop_assert_eq!(record.chars().count(), LAYOUT.total_length);
    }

    #[test]
    fn zero_padded_fields_are_all_digits_for_numeric_input(
        quantity in 0u32..999_999,
    ) {
        let mut values = ValueMap::new();
        values.set("id", "X");
        values.set("quantity", quantity);

        let record = pack(&LAYOUT, &values).expect("pack");
        let field = &record[40..46];
        prop_assert!(field.chars().all(|ch| ch.is_ascii_digit()));
        prop_assert_eq!(field.parse::<u32>().expect("digits"), quantity);
    }
}

#[test]
fn layout_is_well_formed() {
    LAYOUT.check_well_formed().expect("well-formed layout");
}
