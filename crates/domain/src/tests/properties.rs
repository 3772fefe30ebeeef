// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Property tests for validator ordering and counting.

use proptest::prelude::*;

use crate::{
    AccessoryRequest, INVALID_ACCESSORY, Recognized, RepeatType, ReservationSpec,
    validate_reservation,
};

use super::helpers::create_valid_spec;

fn accessory_strategy() -> impl Strategy<Value = AccessoryRequest> {
    (
        proptest::option::of(-3_i64..10),
        proptest::option::of(-3_i64..10),
    )
        .prop_map(|(id, quantity)| AccessoryRequest::new(id, quantity))
}

fn spec_strategy() -> impl Strategy<Value = ReservationSpec> {
    (
        proptest::option::of(-2_i64..20),
        any::<bool>(),
        any::<bool>(),
        proptest::option::of("[a-z]{0,8}"),
        proptest::collection::vec(accessory_strategy(), 0..8),
    )
        .prop_map(|(resource_id, has_start, has_end, repeat, accessories)| {
            let mut spec: ReservationSpec = create_valid_spec();
            spec.resource_id = resource_id;
            if !has_start {
                spec.start = None;
            }
            if !has_end {
                spec.end = None;
            }
            if let Some(raw) = repeat {
                spec.recurrence.repeat_type = Recognized::<RepeatType>::parse(&raw);
            }
            spec.accessories = accessories;
            spec
        })
}

proptest! {
    #[test]
    fn prop_validation_is_idempotent(spec in spec_strategy()) {
        prop_assert_eq!(validate_reservation(&spec), validate_reservation(&spec));
    }

    #[test]
    fn prop_one_accessory_error_per_invalid_entry(
        accessories in proptest::collection::vec(accessory_strategy(), 0..16)
    ) {
        let mut spec: ReservationSpec = create_valid_spec();
        spec.accessories = accessories;

        let expected: usize = spec
            .accessories
            .iter()
            .filter(|accessory| !accessory.is_valid())
            .count();
        let errors: Vec<String> = validate_reservation(&spec);

        prop_assert_eq!(errors.len(), expected);
        prop_assert!(errors.iter().all(|message| message == INVALID_ACCESSORY));
    }
}
