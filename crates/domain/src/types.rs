// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;
use std::str::FromStr;

/// A value that is either a recognized enum member or the raw text that
/// failed to match one.
///
/// Unrecognized values are kept rather than rejected so that the validator,
/// not the parser, decides how to report them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Recognized<T> {
    /// A recognized member.
    Known(T),
    /// Raw input that matched no member.
    Unknown(String),
}

impl<T: FromStr> Recognized<T> {
    /// Parses raw input, keeping the raw text when it is not recognized.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        raw.parse::<T>()
            .map_or_else(|_| Self::Unknown(raw.to_string()), Self::Known)
    }
}

impl<T> Recognized<T> {
    /// Returns whether the value is a recognized member.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    /// Returns the recognized member, if any.
    #[must_use]
    pub const fn known(&self) -> Option<&T> {
        match self {
            Self::Known(value) => Some(value),
            Self::Unknown(_) => None,
        }
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Recognized<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Known(value) => write!(f, "{value}"),
            Self::Unknown(raw) => write!(f, "{raw}"),
        }
    }
}

/// How a reservation repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RepeatType {
    /// A single occurrence.
    #[default]
    None,
    /// Repeats every `interval` days.
    Daily,
    /// Repeats every `interval` weeks on the selected weekdays.
    Weekly,
    /// Repeats every `interval` months, anchored by a monthly sub-type.
    Monthly,
    /// Repeats every `interval` years.
    Yearly,
}

impl FromStr for RepeatType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            _ => Err(DomainError::UnknownRepeatType(s.to_string())),
        }
    }
}

impl std::fmt::Display for RepeatType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl RepeatType {
    /// Returns the wire name of this repeat type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

/// How a monthly series picks its day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepeatMonthlyType {
    /// Same day number each month (e.g. the 15th).
    DayOfMonth,
    /// Same weekday ordinal each month (e.g. the second Tuesday).
    DayOfWeek,
}

impl FromStr for RepeatMonthlyType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dayofmonth" => Ok(Self::DayOfMonth),
            "dayofweek" => Ok(Self::DayOfWeek),
            _ => Err(DomainError::UnknownRepeatMonthlyType(s.to_string())),
        }
    }
}

impl std::fmt::Display for RepeatMonthlyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl RepeatMonthlyType {
    /// Returns the wire name of this monthly sub-type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DayOfMonth => "dayOfMonth",
            Self::DayOfWeek => "dayOfWeek",
        }
    }
}

/// Which occurrences of an existing series an update applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesUpdateScope {
    /// Only the addressed occurrence.
    ThisInstance,
    /// The addressed occurrence and every later one.
    FutureInstances,
    /// Every occurrence in the series.
    FullSeries,
}

impl FromStr for SeriesUpdateScope {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "this" | "thisinstance" => Ok(Self::ThisInstance),
            "future" | "futureinstances" => Ok(Self::FutureInstances),
            "full" | "fullseries" => Ok(Self::FullSeries),
            _ => Err(DomainError::UnknownSeriesUpdateScope(s.to_string())),
        }
    }
}

impl std::fmt::Display for SeriesUpdateScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl SeriesUpdateScope {
    /// Returns the wire name of this scope.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ThisInstance => "this",
            Self::FutureInstances => "future",
            Self::FullSeries => "full",
        }
    }
}

/// Recurrence parameters of a requested reservation.
///
/// Only the parameters are carried here. Expanding them into concrete
/// occurrences happens downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurrencePattern {
    /// The repeat type, recognized or raw.
    pub repeat_type: Recognized<RepeatType>,
    /// Repeat every `interval` units of the repeat type.
    pub interval: Option<i64>,
    /// Last date (in the acting user's timezone) an occurrence may fall on.
    pub termination_date: Option<NaiveDate>,
    /// Selected weekdays, 0 = Sunday through 6 = Saturday.
    pub weekdays: Vec<u8>,
    /// The monthly sub-type, if one was supplied.
    pub monthly_type: Option<Recognized<RepeatMonthlyType>>,
}

impl Default for RecurrencePattern {
    fn default() -> Self {
        Self {
            repeat_type: Recognized::Known(RepeatType::None),
            interval: None,
            termination_date: None,
            weekdays: Vec::new(),
            monthly_type: None,
        }
    }
}

impl RecurrencePattern {
    /// Returns whether this pattern asks for more than one occurrence.
    ///
    /// An unrecognized repeat type counts as recurring.
    #[must_use]
    pub const fn is_recurring(&self) -> bool {
        !matches!(self.repeat_type, Recognized::Known(RepeatType::None))
    }

    /// Returns whether the repeat type is exactly `Monthly`.
    #[must_use]
    pub const fn is_monthly(&self) -> bool {
        matches!(self.repeat_type, Recognized::Known(RepeatType::Monthly))
    }
}

/// A requested accessory and quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccessoryRequest {
    /// The accessory identifier.
    pub id: Option<i64>,
    /// The requested quantity.
    pub quantity: Option<i64>,
}

impl AccessoryRequest {
    /// Creates a new accessory request.
    #[must_use]
    pub const fn new(id: Option<i64>, quantity: Option<i64>) -> Self {
        Self { id, quantity }
    }

    /// Returns whether both fields are present, the id is positive, and the
    /// quantity is not negative. A zero quantity is valid.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!((self.id, self.quantity), (Some(id), Some(quantity)) if id > 0 && quantity >= 0)
    }
}

/// A custom attribute value attached to the reservation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AttributeRequest {
    /// The attribute identifier.
    pub id: Option<i64>,
    /// The attribute value, uninterpreted.
    pub value: Option<String>,
}

impl AttributeRequest {
    /// Creates a new attribute request.
    #[must_use]
    pub const fn new(id: Option<i64>, value: Option<String>) -> Self {
        Self { id, value }
    }
}

/// The canonical, fully typed form of a reservation request.
///
/// Every optional field is `None` when the input was absent or could not be
/// interpreted. Validation reports on those gaps; construction never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationSpec {
    /// The user the reservation is made for.
    pub user_id: i64,
    /// The primary resource.
    pub resource_id: Option<i64>,
    /// Additional resources booked alongside the primary one.
    pub additional_resource_ids: Vec<i64>,
    /// Users added as participants.
    pub participant_ids: Vec<i64>,
    /// Users invited to participate.
    pub invitee_ids: Vec<i64>,
    /// Free-text title.
    pub title: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
    /// Start instant in the acting user's timezone.
    pub start: Option<DateTime<Tz>>,
    /// End instant in the acting user's timezone.
    pub end: Option<DateTime<Tz>>,
    /// Recurrence parameters.
    pub recurrence: RecurrencePattern,
    /// Requested accessories, in input order.
    pub accessories: Vec<AccessoryRequest>,
    /// Custom attribute values, in input order.
    pub attributes: Vec<AttributeRequest>,
}

/// Date component format used when reporting resolved instants.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Time component format used when reporting resolved instants.
pub const TIME_FORMAT: &str = "%H:%M";

impl ReservationSpec {
    /// Creates an empty specification for the given user.
    #[must_use]
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            resource_id: None,
            additional_resource_ids: Vec::new(),
            participant_ids: Vec::new(),
            invitee_ids: Vec::new(),
            title: None,
            description: None,
            start: None,
            end: None,
            recurrence: RecurrencePattern::default(),
            accessories: Vec::new(),
            attributes: Vec::new(),
        }
    }

    /// Returns the start date as `YYYY-MM-DD`.
    #[must_use]
    pub fn start_date(&self) -> Option<String> {
        self.start.as_ref().map(|dt| dt.format(DATE_FORMAT).to_string())
    }

    /// Returns the start time as `HH:MM`.
    #[must_use]
    pub fn start_time(&self) -> Option<String> {
        self.start.as_ref().map(|dt| dt.format(TIME_FORMAT).to_string())
    }

    /// Returns the end date as `YYYY-MM-DD`.
    #[must_use]
    pub fn end_date(&self) -> Option<String> {
        self.end.as_ref().map(|dt| dt.format(DATE_FORMAT).to_string())
    }

    /// Returns the end time as `HH:MM`.
    #[must_use]
    pub fn end_time(&self) -> Option<String> {
        self.end.as_ref().map(|dt| dt.format(TIME_FORMAT).to_string())
    }
}
