//! Parsing of raw console input into validated values.
//!
//! Every function here is pure: it takes the line exactly as typed (line
//! terminator already removed) and either returns the canonical value or a
//! [`ParseError`] describing why it was refused. The prompting loops in
//! [`crate::reader`] decide what to print on failure.

use chrono::{NaiveDate, NaiveTime};

use crate::fields::*;

/// Reason a piece of input was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown priority code: {0:?}")]
    Priority(String),
    #[error("expected {expected} parts separated by '{separator}', got {found}")]
    PartCount {
        expected: usize,
        separator: char,
        found: usize,
    },
    #[error("not an integer: {0:?}")]
    NotANumber(String),
    #[error("no such calendar date: {0:?}")]
    NoSuchDate(String),
    #[error("time out of range: {hour}:{minute}")]
    TimeOutOfRange { hour: u32, minute: u32 },
    #[error("task number {number} is outside 1-{len}")]
    TaskNumberOutOfRange { number: i64, len: usize },
    #[error("unknown field: {0:?}")]
    Field(String),
    #[error("unknown action: {0:?}")]
    Action(String),
}

/// Parse a priority code: `C`, `H`, `N` or `L`, in either case.
pub fn parse_priority(s: &str) -> Result<Priority, ParseError> {
    match s.to_uppercase().as_str() {
        "C" => Ok(Priority::Critical),
        "H" => Ok(Priority::High),
        "N" => Ok(Priority::Normal),
        "L" => Ok(Priority::Low),
        _ => Err(ParseError::Priority(s.to_string())),
    }
}

/// Parse a `Y-M-D` date and check it exists on the calendar.
pub fn parse_date(s: &str) -> Result<NaiveDate, ParseError> {
    let parts = split_numbers::<i64>(s, '-', 3)?;
    let (year, month, day) = (parts[0], parts[1], parts[2]);

    let no_such_date = || ParseError::NoSuchDate(s.to_string());

    let year = i32::try_from(year).map_err(|_| no_such_date())?;
    let month = u32::try_from(month).map_err(|_| no_such_date())?;
    let day = u32::try_from(day).map_err(|_| no_such_date())?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(no_such_date)
}

/// Parse an `H:M` time with hour 0-23 and minute 0-59.
pub fn parse_time(s: &str) -> Result<NaiveTime, ParseError> {
    let parts = split_numbers::<u32>(s, ':', 2)?;
    let (hour, minute) = (parts[0], parts[1]);
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or(ParseError::TimeOutOfRange { hour, minute })
}

/// Parse a 1-based task number that must address one of `len` tasks.
pub fn parse_task_number(s: &str, len: usize) -> Result<usize, ParseError> {
    let number: i64 = s
        .parse()
        .map_err(|_| ParseError::NotANumber(s.to_string()))?;
    match usize::try_from(number) {
        Ok(n) if (1..=len).contains(&n) => Ok(n),
        _ => Err(ParseError::TaskNumberOutOfRange { number, len }),
    }
}

/// Parse the name of a field to edit. Names are matched exactly.
pub fn parse_field(s: &str) -> Result<Field, ParseError> {
    match s {
        "priority" => Ok(Field::Priority),
        "date" => Ok(Field::Date),
        "time" => Ok(Field::Time),
        "task" => Ok(Field::Lines),
        _ => Err(ParseError::Field(s.to_string())),
    }
}

/// Parse an action keyword, ignoring case.
pub fn parse_action(s: &str) -> Result<Action, ParseError> {
    match s.to_lowercase().as_str() {
        "add" => Ok(Action::Add),
        "print" => Ok(Action::Print),
        "edit" => Ok(Action::Edit),
        "delete" => Ok(Action::Delete),
        "end" => Ok(Action::End),
        _ => Err(ParseError::Action(s.to_string())),
    }
}

/// Split on `separator` and parse every part as an integer.
///
/// Numeric tokens are checked before the part count, so `2023-x` reports the
/// bad token rather than the missing part.
fn split_numbers<T: std::str::FromStr>(
    s: &str,
    separator: char,
    expected: usize,
) -> Result<Vec<T>, ParseError> {
    let parts = s
        .split(separator)
        .map(|part| {
            part.parse::<T>()
                .map_err(|_| ParseError::NotANumber(part.to_string()))
        })
        .collect::<Result<Vec<T>, ParseError>>()?;

    if parts.len() != expected {
        return Err(ParseError::PartCount {
            expected,
            separator,
            found: parts.len(),
        });
    }
    Ok(parts)
}
