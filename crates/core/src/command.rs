// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rsvp_domain::{ReservationSpec, SeriesUpdateScope};

/// A validated reservation change, expressed as data only.
///
/// This is what gets handed to the build/persist collaborator once a request
/// has passed validation. Create and update differ only in the update's
/// target and scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReservationChange {
    /// Create a new reservation or series.
    Create {
        /// The canonical reservation.
        spec: ReservationSpec,
    },
    /// Update an existing reservation or series.
    Update {
        /// The canonical reservation.
        spec: ReservationSpec,
        /// The reservation being updated.
        reference_number: String,
        /// Which occurrences of the series are affected.
        scope: SeriesUpdateScope,
    },
}

impl ReservationChange {
    /// Returns the canonical reservation carried by this change.
    #[must_use]
    pub const fn spec(&self) -> &ReservationSpec {
        match self {
            Self::Create { spec } | Self::Update { spec, .. } => spec,
        }
    }

    /// Returns the targeted reference number for updates.
    #[must_use]
    pub fn reference_number(&self) -> Option<&str> {
        match self {
            Self::Create { .. } => None,
            Self::Update {
                reference_number, ..
            } => Some(reference_number.as_str()),
        }
    }

    /// Returns the update scope for updates.
    #[must_use]
    pub const fn scope(&self) -> Option<SeriesUpdateScope> {
        match self {
            Self::Create { .. } => None,
            Self::Update { scope, .. } => Some(*scope),
        }
    }

    /// Returns a short name for logging.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Create { .. } => "create",
            Self::Update { .. } => "update",
        }
    }
}
