// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::Serialize;

/// The outcome of a create or update call, as reported to the client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControllerResult {
    reference_number: Option<String>,
    errors: Vec<String>,
}

impl ControllerResult {
    /// Creates a result from a reference number and error list.
    #[must_use]
    pub const fn new(reference_number: Option<String>, errors: Vec<String>) -> Self {
        Self {
            reference_number,
            errors,
        }
    }

    /// Creates a result with errors and no reference number.
    #[must_use]
    pub const fn failed(errors: Vec<String>) -> Self {
        Self::new(None, errors)
    }

    /// Returns the reference number, if any.
    #[must_use]
    pub fn reference_number(&self) -> Option<&str> {
        self.reference_number.as_deref()
    }

    /// Returns the errors, in the order they were reported.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Records the reference number issued for the saved reservation.
    pub fn set_reference_number(&mut self, reference_number: String) {
        self.reference_number = Some(reference_number);
    }

    /// Replaces the error list.
    pub fn set_errors(&mut self, errors: Vec<String>) {
        self.errors = errors;
    }

    /// Returns whether a reference number was issued and no errors were
    /// reported. Any error makes the result unsuccessful.
    #[must_use]
    pub fn was_successful(&self) -> bool {
        self.errors.is_empty()
            && self
                .reference_number
                .as_deref()
                .is_some_and(|reference| !reference.is_empty())
    }
}
