// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reservation request validation.
//!
//! Validation never stops at the first failure. Every rule runs in a fixed
//! order and appends its messages, so callers receive the full list of
//! problems in one pass. Messages are reported verbatim to API clients and
//! must stay stable.
//!
//! ## Rule order
//!
//! 1. resource id
//! 2. start date/time
//! 3. end date/time
//! 4. repeat type recognition
//! 5. monthly sub-type (whenever the repeat type is `Monthly`)
//! 6. interval and termination date (whenever the series recurs)
//! 7. accessories, one message per offending entry
//!
//! Updates then append the reference number and update scope checks.
//!
//! ## Faulting rules
//!
//! A rule that panics is caught with `catch_unwind` and reported as a single
//! `Could not process request.` message. This relies on `panic = "unwind"`;
//! under `panic = "abort"` the process ends instead. The panic hook still
//! runs, so the panic message also reaches stderr next to the `error!` log.

use crate::types::{Recognized, ReservationSpec, SeriesUpdateScope};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, error};

pub const MISSING_RESOURCE_ID: &str = "Missing or invalid resourceId";
pub const MISSING_START_DATE_TIME: &str = "Missing or invalid startDateTime";
pub const MISSING_END_DATE_TIME: &str = "Missing or invalid endDateTime";
pub const INVALID_REPEAT_TYPE: &str = "Invalid repeat type";
pub const MISSING_REPEAT_MONTHLY_TYPE: &str = "Missing or invalid repeatMonthlyType";
pub const MISSING_REPEAT_INTERVAL: &str = "Missing or invalid repeatInterval";
pub const MISSING_REPEAT_TERMINATION_DATE: &str = "Missing or invalid repeatTerminationDate";
pub const INVALID_ACCESSORY: &str = "Invalid accessory";
pub const MISSING_REFERENCE_NUMBER: &str = "Missing or invalid referenceNumber";
pub const MISSING_UPDATE_SCOPE: &str = "Missing or invalid updateScope";

/// Prefix of the single message reported when a rule faults.
pub const PROCESSING_FAILURE: &str = "Could not process request.";

/// A validation rule appends zero or more messages for the spec it inspects.
pub(crate) type Rule = fn(&ReservationSpec, &mut Vec<String>);

const RESERVATION_RULES: [(&str, Rule); 7] = [
    ("resource_id", check_resource_id),
    ("start_date_time", check_start),
    ("end_date_time", check_end),
    ("repeat_type", check_repeat_type),
    ("repeat_monthly_type", check_repeat_monthly_type),
    ("repeat_parameters", check_repeat_parameters),
    ("accessories", check_accessories),
];

/// Validates a create request.
///
/// Returns every failure in rule order; an empty list means the spec is
/// acceptable. This function is pure and never panics past its boundary.
#[must_use]
pub fn validate_reservation(spec: &ReservationSpec) -> Vec<String> {
    let errors: Vec<String> = run_rules(spec, &RESERVATION_RULES);
    debug!(
        "Reservation validation finished with {} error(s)",
        errors.len()
    );
    errors
}

/// Validates an update request.
///
/// Runs every create rule, then checks the reference number and the
/// resolved update scope. `scope` is expected to come from
/// [`crate::resolve_update_scope`], so an omitted scope is never an error here.
#[must_use]
pub fn validate_update(
    spec: &ReservationSpec,
    reference_number: Option<&str>,
    scope: &Recognized<SeriesUpdateScope>,
) -> Vec<String> {
    let mut errors: Vec<String> = run_rules(spec, &RESERVATION_RULES);

    if reference_number.is_none_or(|value| value.trim().is_empty()) {
        errors.push(String::from(MISSING_REFERENCE_NUMBER));
    }

    if !scope.is_known() {
        errors.push(String::from(MISSING_UPDATE_SCOPE));
    }

    debug!("Update validation finished with {} error(s)", errors.len());
    errors
}

/// Runs the rules in order, converting a faulting rule into one message.
///
/// Messages appended before the fault are kept; rules after it are skipped.
pub(crate) fn run_rules(spec: &ReservationSpec, rules: &[(&'static str, Rule)]) -> Vec<String> {
    let mut errors: Vec<String> = Vec::new();

    for &(name, rule) in rules {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| rule(spec, &mut errors)));
        if let Err(payload) = outcome {
            let detail: String = fault_detail(payload.as_ref());
            error!("Validation rule '{}' faulted: {}", name, detail);
            errors.push(format!("{PROCESSING_FAILURE} {name}: {detail}"));
            break;
        }
    }

    errors
}

fn fault_detail(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        String::from("unknown fault")
    }
}

fn check_resource_id(spec: &ReservationSpec, errors: &mut Vec<String>) {
    if !matches!(spec.resource_id, Some(id) if id > 0) {
        errors.push(String::from(MISSING_RESOURCE_ID));
    }
}

fn check_start(spec: &ReservationSpec, errors: &mut Vec<String>) {
    if spec.start_date().is_none() || spec.start_time().is_none() {
        errors.push(String::from(MISSING_START_DATE_TIME));
    }
}

fn check_end(spec: &ReservationSpec, errors: &mut Vec<String>) {
    if spec.end_date().is_none() || spec.end_time().is_none() {
        errors.push(String::from(MISSING_END_DATE_TIME));
    }
}

fn check_repeat_type(spec: &ReservationSpec, errors: &mut Vec<String>) {
    if !spec.recurrence.repeat_type.is_known() {
        errors.push(String::from(INVALID_REPEAT_TYPE));
    }
}

// Runs whenever the type is Monthly, regardless of any other repeat rule.
fn check_repeat_monthly_type(spec: &ReservationSpec, errors: &mut Vec<String>) {
    let recognized: bool = spec
        .recurrence
        .monthly_type
        .as_ref()
        .is_some_and(Recognized::is_known);

    if spec.recurrence.is_monthly() && !recognized {
        errors.push(String::from(MISSING_REPEAT_MONTHLY_TYPE));
    }
}

fn check_repeat_parameters(spec: &ReservationSpec, errors: &mut Vec<String>) {
    if !spec.recurrence.is_recurring() {
        return;
    }

    if !matches!(spec.recurrence.interval, Some(interval) if interval > 0) {
        errors.push(String::from(MISSING_REPEAT_INTERVAL));
    }

    if spec.recurrence.termination_date.is_none() {
        errors.push(String::from(MISSING_REPEAT_TERMINATION_DATE));
    }
}

fn check_accessories(spec: &ReservationSpec, errors: &mut Vec<String>) {
    for accessory in &spec.accessories {
        if !accessory.is_valid() {
            errors.push(String::from(INVALID_ACCESSORY));
        }
    }
}
