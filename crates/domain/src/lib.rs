// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod scope;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use scope::resolve_update_scope;
pub use types::{
    AccessoryRequest, AttributeRequest, DATE_FORMAT, Recognized, RecurrencePattern,
    RepeatMonthlyType, RepeatType, ReservationSpec, SeriesUpdateScope, TIME_FORMAT,
};
pub use validation::{
    INVALID_ACCESSORY, INVALID_REPEAT_TYPE, MISSING_END_DATE_TIME, MISSING_REFERENCE_NUMBER,
    MISSING_REPEAT_INTERVAL, MISSING_REPEAT_MONTHLY_TYPE, MISSING_REPEAT_TERMINATION_DATE,
    MISSING_RESOURCE_ID, MISSING_START_DATE_TIME, MISSING_UPDATE_SCOPE, PROCESSING_FAILURE,
    validate_reservation, validate_update,
};
