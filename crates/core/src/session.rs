// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use chrono_tz::Tz;
use rsvp_domain::DomainError;

/// The authenticated caller a request is processed for.
///
/// Establishing the session (tokens, expiry) happens upstream. This only
/// carries what normalization needs: who is acting and in which timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserSession {
    user_id: i64,
    timezone: Tz,
}

impl UserSession {
    /// Creates a session from an IANA timezone name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimezone` if the name is not a known
    /// timezone.
    pub fn new(user_id: i64, timezone: &str) -> Result<Self, CoreError> {
        let timezone: Tz = timezone
            .trim()
            .parse()
            .map_err(|_| DomainError::InvalidTimezone(timezone.to_string()))?;
        Ok(Self { user_id, timezone })
    }

    /// Creates a session from an already resolved timezone.
    #[must_use]
    pub const fn with_timezone(user_id: i64, timezone: Tz) -> Self {
        Self { user_id, timezone }
    }

    /// Returns the acting user's id.
    #[must_use]
    pub const fn user_id(&self) -> i64 {
        self.user_id
    }

    /// Returns the acting user's timezone.
    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.timezone
    }
}
