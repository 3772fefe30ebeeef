// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The untrusted reservation request as it arrives from a client.

use crate::error::CoreError;
use serde::Deserialize;
use serde_json::Value;

/// A reservation request exactly as submitted.
///
/// Every field is optional. Fields that clients commonly send as either a
/// number or a numeric string, and every list, are kept as raw JSON so that
/// normalization can tell an absent value from a malformed one.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawReservationRequest {
    /// The primary resource id.
    pub resource_id: Option<Value>,
    /// Overrides the session user as the owner of the reservation.
    pub user_id: Option<Value>,
    /// Free-text title.
    pub title: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
    /// Start date and time, ISO 8601 with or without an offset.
    pub start_date_time: Option<String>,
    /// End date and time, ISO 8601 with or without an offset.
    pub end_date_time: Option<String>,
    /// Repeat type wire name.
    pub repeat_type: Option<String>,
    /// Repeat interval.
    pub repeat_interval: Option<Value>,
    /// Last date of the series.
    pub repeat_termination_date: Option<String>,
    /// Weekday numbers for weekly series, 0 = Sunday.
    pub repeat_weekdays: Option<Value>,
    /// Monthly sub-type wire name.
    pub repeat_monthly_type: Option<String>,
    /// Additional resource ids.
    pub resources: Option<Value>,
    /// Participant user ids.
    pub participants: Option<Value>,
    /// Invitee user ids.
    pub invitees: Option<Value>,
    /// Accessory entries: `{"accessoryId": .., "quantityRequested": ..}`.
    pub accessories: Option<Value>,
    /// Attribute entries: `{"attributeId": .., "attributeValue": ..}`.
    pub attributes: Option<Value>,
}

impl RawReservationRequest {
    /// Decodes a request from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::MalformedRequest` if the document is not a JSON
    /// object or a text field holds a non-string value.
    pub fn from_json(body: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(body)?)
    }
}
