//! Core data model types.
//!
//! The loader produces an immutable [`LaunchTable`] of typed [`LaunchRecord`]s. Query functions
//! accept loosely-typed arguments as [`Value`]s and validate them at the boundary.

use std::collections::BTreeSet;
use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Serialize, Serializer};

/// Columns of the source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Company,
    Location,
    Date,
    Time,
    Rocket,
    Mission,
    RocketStatus,
    Price,
    MissionStatus,
}

impl Column {
    /// Columns that must be present in the header, in canonical order.
    pub const REQUIRED: [Column; 8] = [
        Column::Company,
        Column::Location,
        Column::Date,
        Column::Rocket,
        Column::Mission,
        Column::RocketStatus,
        Column::Price,
        Column::MissionStatus,
    ];

    /// Header name as it appears in the source file.
    pub fn header(self) -> &'static str {
        match self {
            Column::Company => "Company",
            Column::Location => "Location",
            Column::Date => "Date",
            Column::Time => "Time",
            Column::Rocket => "Rocket",
            Column::Mission => "Mission",
            Column::RocketStatus => "RocketStatus",
            Column::Price => "Price",
            Column::MissionStatus => "MissionStatus",
        }
    }
}

/// Outcome classification of a launch attempt.
///
/// The four known spellings map to dedicated variants; anything else is carried verbatim in
/// [`MissionStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MissionStatus {
    Success,
    Failure,
    PartialFailure,
    PrelaunchFailure,
    Other(String),
}

impl MissionStatus {
    /// Classify a raw status cell.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "Success" => Self::Success,
            "Failure" => Self::Failure,
            "Partial Failure" => Self::PartialFailure,
            "Prelaunch Failure" => Self::PrelaunchFailure,
            other => Self::Other(other.to_owned()),
        }
    }

    /// The source spelling of this status.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Success => "Success",
            Self::Failure => "Failure",
            Self::PartialFailure => "Partial Failure",
            Self::PrelaunchFailure => "Prelaunch Failure",
            Self::Other(s) => s.as_str(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

impl fmt::Display for MissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for MissionStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One historical orbital launch attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaunchRecord {
    /// Operator name. Exact-match key, case-sensitive.
    pub company: String,
    pub location: String,
    /// `None` when the source cell was empty or unparseable.
    pub launch_date: Option<NaiveDate>,
    pub launch_time: Option<NaiveTime>,
    /// Vehicle model name.
    pub rocket: String,
    pub mission: String,
    /// Operational classification of the vehicle (e.g. `Active`, `Retired`).
    pub rocket_status: String,
    /// Price in millions of USD, when known.
    pub price: Option<f64>,
    pub mission_status: MissionStatus,
    /// Derived from `launch_date`.
    pub year: Option<i32>,
}

impl LaunchRecord {
    /// Create a record, deriving `year` from `launch_date`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        company: impl Into<String>,
        location: impl Into<String>,
        launch_date: Option<NaiveDate>,
        launch_time: Option<NaiveTime>,
        rocket: impl Into<String>,
        mission: impl Into<String>,
        rocket_status: impl Into<String>,
        price: Option<f64>,
        mission_status: MissionStatus,
    ) -> Self {
        Self {
            company: company.into(),
            location: location.into(),
            launch_date,
            launch_time,
            rocket: rocket.into(),
            mission: mission.into(),
            rocket_status: rocket_status.into(),
            price,
            mission_status,
            year: launch_date.map(|d| d.year()),
        }
    }
}

/// Immutable, ordered table of launch records.
///
/// Records keep the order of the source file. Nothing mutates a table after construction;
/// filtering produces a new table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LaunchTable {
    records: Vec<LaunchRecord>,
}

impl LaunchTable {
    pub fn new(records: Vec<LaunchRecord>) -> Self {
        Self { records }
    }

    /// Number of records in the table.
    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LaunchRecord> {
        self.records.iter()
    }

    /// Create a new table containing only records that match `predicate`, in table order.
    pub fn filter_rows<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&LaunchRecord) -> bool,
    {
        let records = self
            .records
            .iter()
            .filter(|r| predicate(r))
            .cloned()
            .collect();
        Self { records }
    }

    /// Fold all records into an accumulator value.
    pub fn reduce_rows<A, F>(&self, init: A, mut reducer: F) -> A
    where
        F: FnMut(A, &LaunchRecord) -> A,
    {
        self.records.iter().fold(init, |acc, r| reducer(acc, r))
    }

    /// Smallest and largest derived year, or `None` if no record has a date.
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        self.reduce_rows(None, |acc, r| match (acc, r.year) {
            (None, Some(y)) => Some((y, y)),
            (Some((lo, hi)), Some(y)) => Some((lo.min(y), hi.max(y))),
            (acc, None) => acc,
        })
    }

    /// Sorted distinct values of a string-valued field.
    pub fn distinct<'a, F>(&'a self, field: F) -> BTreeSet<&'a str>
    where
        F: Fn(&'a LaunchRecord) -> &'a str,
    {
        self.records.iter().map(field).collect()
    }
}

impl<'a> IntoIterator for &'a LaunchTable {
    type Item = &'a LaunchRecord;
    type IntoIter = std::slice::Iter<'a, LaunchRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// A loosely-typed argument passed to a query function.
///
/// Query functions take `impl Into<Value>` and pattern-match the shape they expect; any other
/// shape yields the function's neutral result.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing/absent argument.
    Null,
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float.
    Float64(f64),
    /// Boolean.
    Bool(bool),
    /// UTF-8 string.
    Utf8(String),
}

impl Value {
    /// Infer a value from free text: integers first, then floats, then `true`/`false`,
    /// otherwise the text itself. Empty text is [`Value::Null`].
    pub fn infer(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Null;
        }
        if let Ok(v) = trimmed.parse::<i64>() {
            return Self::Int64(v);
        }
        if let Ok(v) = trimmed.parse::<f64>() {
            return Self::Float64(v);
        }
        match trimmed {
            "true" => Self::Bool(true),
            "false" => Self::Bool(false),
            _ => Self::Utf8(raw.to_owned()),
        }
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Utf8(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Utf8(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Self::Utf8(v.clone())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int64(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int64(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float64(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}
