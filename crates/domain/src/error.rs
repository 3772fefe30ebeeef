// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors raised while interpreting reservation domain values.
///
/// These never surface as validation failures directly. The validator works
/// on already-recognized values and reports string messages instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The repeat type is not a recognized member.
    UnknownRepeatType(String),
    /// The monthly repeat sub-type is not a recognized member.
    UnknownRepeatMonthlyType(String),
    /// The series update scope is not a recognized member.
    UnknownSeriesUpdateScope(String),
    /// The timezone name is not a known IANA timezone.
    InvalidTimezone(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownRepeatType(value) => write!(f, "Unknown repeat type '{value}'"),
            Self::UnknownRepeatMonthlyType(value) => {
                write!(f, "Unknown monthly repeat type '{value}'")
            }
            Self::UnknownSeriesUpdateScope(value) => {
                write!(f, "Unknown series update scope '{value}'")
            }
            Self::InvalidTimezone(value) => write!(f, "Invalid timezone '{value}'"),
        }
    }
}

impl std::error::Error for DomainError {}
