// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::io::{self, Read};
use std::path::Path;

use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use rsvp_api::{preflight_create, preflight_update};
use rsvp_core::{RawReservationRequest, ReservationChange, UserSession};
use rsvp_domain::resolve_update_scope;
use serde::Serialize;
use tracing::{debug, info};

/// Which controller operation a request is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check<'a> {
    Create,
    Update {
        reference_number: Option<&'a str>,
        scope: Option<&'a str>,
    },
}

/// The JSON report printed for a checked request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub valid: bool,
    pub errors: Vec<String>,
    /// Resolved update scope, as given when it was not recognized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

/// Reads a request body from `path`, or from stdin when `path` is `-`.
///
/// # Errors
///
/// Returns an error if the file or stdin cannot be read.
pub fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut body: String = String::new();
        io::stdin()
            .read_to_string(&mut body)
            .wrap_err("Failed to read request from stdin")?;
        return Ok(body);
    }

    std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read request from {}", path.display()))
}

/// Parses and checks one request body.
///
/// # Errors
///
/// Returns an error only if the body is not a JSON object. A rejected
/// request is a report with `valid` set to false.
pub fn check_request(body: &str, session: &UserSession, check: &Check<'_>) -> Result<Report> {
    let request: RawReservationRequest =
        RawReservationRequest::from_json(body).wrap_err("Request body is not a JSON object")?;

    let (outcome, scope): (Result<ReservationChange, Vec<String>>, Option<String>) = match *check
    {
        Check::Create => (preflight_create(&request, session), None),
        Check::Update {
            reference_number,
            scope,
        } => (
            preflight_update(&request, session, reference_number, scope),
            Some(resolve_update_scope(scope).to_string()),
        ),
    };

    let report: Report = match outcome {
        Ok(change) => {
            info!("Request would be accepted as a {}", change.kind());
            Report {
                valid: true,
                errors: Vec::new(),
                scope,
            }
        }
        Err(errors) => {
            debug!("Request rejected with {} error(s)", errors.len());
            Report {
                valid: false,
                errors,
                scope,
            }
        }
    };

    Ok(report)
}
