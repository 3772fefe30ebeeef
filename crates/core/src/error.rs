// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rsvp_domain::DomainError;

/// Errors raised at the edges of request handling.
///
/// Normalization itself never fails; these cover establishing the session
/// and decoding the request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain value was rejected.
    DomainViolation(DomainError),
    /// The request body could not be decoded.
    MalformedRequest(String),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::MalformedRequest(msg) => write!(f, "Malformed request: {msg}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedRequest(err.to_string())
    }
}
