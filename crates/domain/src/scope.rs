// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Series update scope resolution.

use crate::types::{Recognized, SeriesUpdateScope};

/// Resolves the raw update scope supplied with an update request.
///
/// - Missing or blank input resolves to `FullSeries`.
/// - A recognized value resolves to that member.
/// - Anything else is passed through as `Recognized::Unknown` with the raw
///   text intact. Rejecting it is the validator's job; this function never
///   fails.
#[must_use]
pub fn resolve_update_scope(raw: Option<&str>) -> Recognized<SeriesUpdateScope> {
    match raw {
        None => Recognized::Known(SeriesUpdateScope::FullSeries),
        Some(value) if value.trim().is_empty() => {
            Recognized::Known(SeriesUpdateScope::FullSeries)
        }
        Some(value) => Recognized::parse(value),
    }
}
