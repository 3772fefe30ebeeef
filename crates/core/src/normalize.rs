// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Normalization of raw requests into canonical reservation specs.
//!
//! Normalization is best effort and never fails:
//!
//! - Numeric fields accept JSON numbers and numeric strings. Anything else
//!   becomes `None`, never zero, so a real zero stays distinguishable from an
//!   absent value.
//! - Lists that are absent or not JSON arrays become empty lists.
//! - Date/time strings are read in their declared representation (an explicit
//!   UTC offset if present, otherwise the session's wall clock) and converted
//!   to the session timezone. Unreadable values become `None`.
//! - Weekday numbers outside 0..=6 are dropped without error.
//!
//! Reporting on what is missing is left to validation.

use crate::request::RawReservationRequest;
use crate::session::UserSession;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use chrono_tz::Tz;
use rsvp_domain::{
    AccessoryRequest, AttributeRequest, Recognized, RecurrencePattern, RepeatType,
    ReservationSpec,
};
use serde_json::{Map, Value};
use tracing::debug;

/// Formats carrying an explicit UTC offset. `%#z` also accepts `Z` and an
/// offset without minutes.
const OFFSET_FORMATS: [&str; 8] = [
    "%Y-%m-%dT%H:%M:%S%#z",
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M:%S%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%d %H:%M%#z",
    "%Y-%m-%d %H:%M:%S %#z",
    "%Y-%m-%d %H:%M %#z",
];

/// Wall-clock formats interpreted in the session timezone.
const LOCAL_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const WEEKDAY_RANGE: std::ops::RangeInclusive<i64> = 0..=6;

// Bounds of i64 as exact f64 values; the upper bound is exclusive.
const I64_LOWER: f64 = -9_223_372_036_854_775_808.0;
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

/// Builds the canonical spec for a request made in `session`.
#[must_use]
pub fn normalize(request: &RawReservationRequest, session: &UserSession) -> ReservationSpec {
    let timezone: Tz = session.timezone();

    let user_id: i64 = request
        .user_id
        .as_ref()
        .and_then(coerce_int)
        .filter(|id| *id > 0)
        .unwrap_or_else(|| session.user_id());

    let spec: ReservationSpec = ReservationSpec {
        user_id,
        resource_id: request.resource_id.as_ref().and_then(coerce_int),
        additional_resource_ids: int_list(request.resources.as_ref()),
        participant_ids: int_list(request.participants.as_ref()),
        invitee_ids: int_list(request.invitees.as_ref()),
        title: request.title.clone(),
        description: request.description.clone(),
        start: non_blank(request.start_date_time.as_deref())
            .and_then(|raw| resolve_date_time(raw, timezone)),
        end: non_blank(request.end_date_time.as_deref())
            .and_then(|raw| resolve_date_time(raw, timezone)),
        recurrence: recurrence(request, timezone),
        accessories: accessories(request.accessories.as_ref()),
        attributes: attributes(request.attributes.as_ref()),
    };

    debug!(
        "Normalized request for user {} (resource {:?}, repeat {})",
        spec.user_id, spec.resource_id, spec.recurrence.repeat_type
    );

    spec
}

/// Resolves a date/time string into an instant in `timezone`.
///
/// Returns `None` for unreadable input and for wall-clock times that do not
/// exist in `timezone` (skipped by a DST transition). Ambiguous wall-clock
/// times resolve to the earlier instant.
#[must_use]
pub fn resolve_date_time(raw: &str, timezone: Tz) -> Option<DateTime<Tz>> {
    let raw: &str = raw.trim();

    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&timezone));
    }

    for format in OFFSET_FORMATS {
        if let Ok(instant) = DateTime::parse_from_str(raw, format) {
            return Some(instant.with_timezone(&timezone));
        }
    }

    for format in LOCAL_FORMATS {
        if let Ok(local) = NaiveDateTime::parse_from_str(raw, format) {
            return timezone.from_local_datetime(&local).earliest();
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return timezone
            .from_local_datetime(&date.and_time(NaiveTime::MIN))
            .earliest();
    }

    debug!("Could not read date/time '{}'", raw);
    None
}

/// Reads an integer from a JSON number or a numeric string.
///
/// Whole-valued floats (`5.0`, `1e1`, `"5.0"`) are accepted. Fractional
/// values are rejected rather than truncated.
#[must_use]
pub fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().and_then(whole_number)),
        Value::String(text) => {
            let text: &str = text.trim();
            text.parse::<i64>()
                .ok()
                .or_else(|| text.parse::<f64>().ok().and_then(whole_number))
        }
        _ => None,
    }
}

#[allow(clippy::cast_possible_truncation)]
fn whole_number(value: f64) -> Option<i64> {
    let whole: bool = value.is_finite() && value.fract() == 0.0;
    if whole && (I64_LOWER..I64_UPPER).contains(&value) {
        Some(value as i64)
    } else {
        None
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.filter(|value| !value.trim().is_empty())
}

fn array(value: Option<&Value>) -> &[Value] {
    match value {
        Some(Value::Array(items)) => items,
        _ => &[],
    }
}

fn int_list(value: Option<&Value>) -> Vec<i64> {
    array(value).iter().filter_map(coerce_int).collect()
}

fn recurrence(request: &RawReservationRequest, timezone: Tz) -> RecurrencePattern {
    let repeat_type: Recognized<RepeatType> = non_blank(request.repeat_type.as_deref())
        .map_or(Recognized::Known(RepeatType::None), Recognized::parse);

    RecurrencePattern {
        repeat_type,
        interval: request.repeat_interval.as_ref().and_then(coerce_int),
        termination_date: non_blank(request.repeat_termination_date.as_deref())
            .and_then(|raw| resolve_date_time(raw, timezone))
            .map(|instant| instant.date_naive()),
        weekdays: weekdays(request.repeat_weekdays.as_ref()),
        monthly_type: non_blank(request.repeat_monthly_type.as_deref()).map(Recognized::parse),
    }
}

fn weekdays(value: Option<&Value>) -> Vec<u8> {
    array(value)
        .iter()
        .filter_map(coerce_int)
        .filter(|day| WEEKDAY_RANGE.contains(day))
        .filter_map(|day| u8::try_from(day).ok())
        .collect()
}

// A non-object entry still yields an (invalid) accessory so validation can
// report it in position.
fn accessories(value: Option<&Value>) -> Vec<AccessoryRequest> {
    array(value)
        .iter()
        .map(|entry| {
            entry.as_object().map_or_else(AccessoryRequest::default, |fields| {
                AccessoryRequest::new(
                    int_field(fields, "accessoryId"),
                    int_field(fields, "quantityRequested"),
                )
            })
        })
        .collect()
}

fn attributes(value: Option<&Value>) -> Vec<AttributeRequest> {
    array(value)
        .iter()
        .filter_map(Value::as_object)
        .map(|fields| {
            AttributeRequest::new(
                int_field(fields, "attributeId"),
                fields.get("attributeValue").and_then(text_value),
            )
        })
        .collect()
}

fn int_field(fields: &Map<String, Value>, key: &str) -> Option<i64> {
    fields.get(key).and_then(coerce_int)
}

fn text_value(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}
