// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::HandlerError;
use rsvp_core::ReservationChange;

/// What a handler reports after acting on a reservation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandleOutcome {
    /// Reference number of the saved reservation, if one was issued.
    pub reference_number: Option<String>,
    /// Errors found while saving (conflicts, quotas, permissions).
    pub errors: Vec<String>,
}

impl HandleOutcome {
    /// An outcome for a reservation saved under `reference_number`.
    #[must_use]
    pub const fn saved(reference_number: String) -> Self {
        Self {
            reference_number: Some(reference_number),
            errors: Vec::new(),
        }
    }

    /// An outcome for a reservation that was rejected.
    #[must_use]
    pub const fn rejected(errors: Vec<String>) -> Self {
        Self {
            reference_number: None,
            errors,
        }
    }
}

/// Builds and persists reservations on behalf of the save controller.
///
/// The controller only calls a handler once a change has passed validation.
/// Everything past that point (resolving resources, expanding the series,
/// conflict checks, storage) belongs to the implementation.
pub trait ReservationHandler {
    /// The implementation's reservation aggregate.
    type Reservation;

    /// Turns a validated change into a reservation.
    ///
    /// # Errors
    ///
    /// Returns a `HandlerError` if the reservation cannot be built, for
    /// example when an update targets a reservation that does not exist.
    fn build_reservation(
        &self,
        change: &ReservationChange,
    ) -> Result<Self::Reservation, HandlerError>;

    /// Persists a reservation and reports the outcome.
    fn handle_reservation(&self, reservation: Self::Reservation) -> HandleOutcome;
}
