//! Task data structure and related functionality.
//!
//! This module defines the `Task` record held by the store, along with the
//! canonical text forms of its date and time.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

use crate::fields::*;

/// A single to-do entry.
///
/// `lines` is never empty for a stored task and every line is already trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub lines: Vec<String>,
    pub priority: Priority,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

/// A replacement value for one task field, produced by the edit flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Priority(Priority),
    Date(NaiveDate),
    Time(NaiveTime),
    Lines(Vec<String>),
}

impl FieldValue {
    pub fn field(&self) -> Field {
        match self {
            FieldValue::Priority(_) => Field::Priority,
            FieldValue::Date(_) => Field::Date,
            FieldValue::Time(_) => Field::Time,
            FieldValue::Lines(_) => Field::Lines,
        }
    }
}

impl Task {
    /// Create a task from already validated parts.
    pub fn new(lines: Vec<String>, priority: Priority, date: NaiveDate, time: NaiveTime) -> Self {
        Task {
            lines,
            priority,
            date,
            time,
        }
    }

    /// Date as `Y-MM-DD`: year unpadded, month and day zero-padded.
    pub fn date_label(&self) -> String {
        format_date(self.date)
    }

    /// Time as `HH:MM`.
    pub fn time_label(&self) -> String {
        format_time(self.time)
    }
}

/// Canonical display form of a date.
pub fn format_date(date: NaiveDate) -> String {
    format!("{}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Canonical display form of a time.
pub fn format_time(time: NaiveTime) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}
