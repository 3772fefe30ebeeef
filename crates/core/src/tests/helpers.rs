// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde_json::Value;

use crate::{RawReservationRequest, UserSession};

pub fn create_test_session() -> UserSession {
    UserSession::new(7, "America/Chicago").unwrap()
}

pub fn request_from(body: Value) -> RawReservationRequest {
    serde_json::from_value(body).unwrap()
}
