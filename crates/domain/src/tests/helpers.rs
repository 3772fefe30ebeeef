// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::{DateTime, NaiveDate, TimeZone};
use chrono_tz::Tz;

use crate::{Recognized, RepeatMonthlyType, RepeatType, ReservationSpec};

pub fn instant(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Tz> {
    chrono_tz::America::Chicago
        .with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap()
}

/// A single, fully valid reservation on resource 5.
pub fn create_valid_spec() -> ReservationSpec {
    let mut spec: ReservationSpec = ReservationSpec::new(7);
    spec.resource_id = Some(5);
    spec.start = Some(instant(2024, 1, 1, 9, 0));
    spec.end = Some(instant(2024, 1, 1, 10, 0));
    spec
}

/// A valid recurring reservation of the given type.
pub fn create_recurring_spec(repeat_type: RepeatType) -> ReservationSpec {
    let mut spec: ReservationSpec = create_valid_spec();
    spec.recurrence.repeat_type = Recognized::Known(repeat_type);
    spec.recurrence.interval = Some(1);
    spec.recurrence.termination_date = NaiveDate::from_ymd_opt(2024, 3, 1);
    if repeat_type == RepeatType::Monthly {
        spec.recurrence.monthly_type = Some(Recognized::Known(RepeatMonthlyType::DayOfMonth));
    }
    spec
}
