// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use std::cell::{Cell, RefCell};

use rsvp_core::{RawReservationRequest, ReservationChange, UserSession};
use serde_json::{Value, json};

use crate::{HandleOutcome, HandlerError, ReservationHandler, ReservationSaveController};

/// A handler that records every call and replays a canned outcome.
#[derive(Debug, Default)]
pub struct RecordingHandler {
    reference_number: Option<String>,
    post_flight_errors: Vec<String>,
    build_error: Option<HandlerError>,
    built: RefCell<Vec<ReservationChange>>,
    handled: Cell<usize>,
}

impl RecordingHandler {
    pub fn saving(reference_number: &str) -> Self {
        Self {
            reference_number: Some(reference_number.to_string()),
            ..Self::default()
        }
    }

    pub fn rejecting(errors: &[&str]) -> Self {
        Self {
            post_flight_errors: errors.iter().map(ToString::to_string).collect(),
            ..Self::default()
        }
    }

    pub fn saving_with_errors(reference_number: &str, errors: &[&str]) -> Self {
        Self {
            reference_number: Some(reference_number.to_string()),
            post_flight_errors: errors.iter().map(ToString::to_string).collect(),
            ..Self::default()
        }
    }

    pub fn failing_build(error: HandlerError) -> Self {
        Self {
            build_error: Some(error),
            ..Self::default()
        }
    }

    pub fn built(&self) -> Vec<ReservationChange> {
        self.built.borrow().clone()
    }

    pub fn handled(&self) -> usize {
        self.handled.get()
    }
}

impl ReservationHandler for RecordingHandler {
    type Reservation = ReservationChange;

    fn build_reservation(
        &self,
        change: &ReservationChange,
    ) -> Result<Self::Reservation, HandlerError> {
        self.built.borrow_mut().push(change.clone());
        self.build_error
            .clone()
            .map_or_else(|| Ok(change.clone()), Err)
    }

    fn handle_reservation(&self, _reservation: Self::Reservation) -> HandleOutcome {
        self.handled.set(self.handled.get() + 1);
        HandleOutcome {
            reference_number: self.reference_number.clone(),
            errors: self.post_flight_errors.clone(),
        }
    }
}

pub fn create_test_session() -> UserSession {
    UserSession::new(7, "America/Chicago").unwrap()
}

pub fn create_controller(handler: RecordingHandler) -> ReservationSaveController<RecordingHandler> {
    ReservationSaveController::new(handler)
}

pub fn request_from(body: Value) -> RawReservationRequest {
    serde_json::from_value(body).unwrap()
}

pub fn create_valid_request() -> RawReservationRequest {
    request_from(json!({
        "resourceId": 5,
        "startDateTime": "2024-01-01 09:00",
        "endDateTime": "2024-01-01 10:00",
        "repeatType": "None"
    }))
}
