// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Errors raised by reservation handlers.

use thiserror::Error;

/// Failures a handler may report while building a reservation.
///
/// The controller never propagates these. Each one becomes a single entry in
/// the result's error list, rendered with its `Display` text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HandlerError {
    /// The change could not be turned into a reservation.
    #[error("Could not build reservation: {reason}")]
    Build { reason: String },

    /// The reservation targeted by an update does not exist.
    #[error("Reservation '{reference_number}' was not found")]
    ReservationNotFound { reference_number: String },
}
