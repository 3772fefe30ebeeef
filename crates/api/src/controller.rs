// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The reservation save controller.
//!
//! Every call follows the same pipeline:
//!
//! 1. Normalize the raw request in the session's timezone.
//! 2. Resolve the update scope (updates only).
//! 3. Validate. Any error ends the call here and the handler is never
//!    invoked.
//! 4. Build the reservation through the handler.
//! 5. Hand the reservation to the handler and report its outcome.
//!
//! Steps 1 through 3 are exposed on their own as [`preflight_create`] and
//! [`preflight_update`] for callers that only want to check a request.

use crate::handler::{HandleOutcome, ReservationHandler};
use crate::result::ControllerResult;
use rsvp_core::{RawReservationRequest, ReservationChange, UserSession, normalize};
use rsvp_domain::{
    Recognized, ReservationSpec, SeriesUpdateScope, resolve_update_scope, validate_reservation,
    validate_update,
};
use tracing::{debug, info, warn};

/// Normalizes and validates a create request without saving it.
///
/// # Errors
///
/// Returns every validation message, in rule order, if the request is not
/// acceptable.
pub fn preflight_create(
    request: &RawReservationRequest,
    session: &UserSession,
) -> Result<ReservationChange, Vec<String>> {
    let spec: ReservationSpec = normalize(request, session);
    let errors: Vec<String> = validate_reservation(&spec);

    if errors.is_empty() {
        Ok(ReservationChange::Create { spec })
    } else {
        Err(errors)
    }
}

/// Normalizes and validates an update request without saving it.
///
/// An omitted or blank `update_scope` resolves to the full series.
///
/// # Errors
///
/// Returns every validation message, in rule order, if the request is not
/// acceptable. The reference number and scope checks come last.
pub fn preflight_update(
    request: &RawReservationRequest,
    session: &UserSession,
    reference_number: Option<&str>,
    update_scope: Option<&str>,
) -> Result<ReservationChange, Vec<String>> {
    let spec: ReservationSpec = normalize(request, session);
    let scope: Recognized<SeriesUpdateScope> = resolve_update_scope(update_scope);
    debug!("Resolved update scope '{}'", scope);

    let errors: Vec<String> = validate_update(&spec, reference_number, &scope);

    match (reference_number, scope) {
        (Some(reference_number), Recognized::Known(scope)) if errors.is_empty() => {
            Ok(ReservationChange::Update {
                spec,
                reference_number: reference_number.to_string(),
                scope,
            })
        }
        _ => Err(errors),
    }
}

/// Saves reservation requests that pass validation through a handler.
///
/// The controller holds nothing but its handler, so one instance can serve
/// any number of calls.
#[derive(Debug, Clone)]
pub struct ReservationSaveController<H> {
    handler: H,
}

impl<H: ReservationHandler> ReservationSaveController<H> {
    /// Creates a controller delegating to `handler`.
    #[must_use]
    pub const fn new(handler: H) -> Self {
        Self { handler }
    }

    /// Returns the handler.
    #[must_use]
    pub const fn handler(&self) -> &H {
        &self.handler
    }

    /// Creates a reservation or series.
    ///
    /// The result carries either the validation errors (with no reference
    /// number) or the handler's reference number and errors.
    #[must_use]
    pub fn create(
        &self,
        request: &RawReservationRequest,
        session: &UserSession,
    ) -> ControllerResult {
        match preflight_create(request, session) {
            Ok(change) => self.save(&change),
            Err(errors) => Self::rejected(errors),
        }
    }

    /// Updates an existing reservation or series.
    ///
    /// `update_scope` selects which occurrences are affected; when omitted
    /// the whole series is updated.
    #[must_use]
    pub fn update(
        &self,
        request: &RawReservationRequest,
        session: &UserSession,
        reference_number: Option<&str>,
        update_scope: Option<&str>,
    ) -> ControllerResult {
        match preflight_update(request, session, reference_number, update_scope) {
            Ok(change) => self.save(&change),
            Err(errors) => Self::rejected(errors),
        }
    }

    fn rejected(errors: Vec<String>) -> ControllerResult {
        debug!("Request rejected with {} validation error(s)", errors.len());
        ControllerResult::failed(errors)
    }

    fn save(&self, change: &ReservationChange) -> ControllerResult {
        let reservation: H::Reservation = match self.handler.build_reservation(change) {
            Ok(reservation) => reservation,
            Err(err) => {
                warn!("Could not build {} reservation: {}", change.kind(), err);
                return ControllerResult::failed(vec![err.to_string()]);
            }
        };

        let outcome: HandleOutcome = self.handler.handle_reservation(reservation);

        if outcome.errors.is_empty() {
            info!(
                "Saved {} reservation {:?} for user {}",
                change.kind(),
                outcome.reference_number,
                change.spec().user_id
            );
        } else {
            warn!(
                "Handler reported {} error(s) saving {} reservation",
                outcome.errors.len(),
                change.kind()
            );
        }

        ControllerResult::new(outcome.reference_number, outcome.errors)
    }
}
