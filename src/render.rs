//! Table rendering for the task list.
//!
//! The layout is fixed-width so that listings stay byte-for-byte stable:
//!
//! ```text
//! +----+------------+-------+---+---+--------------------------------------------+
//! | N  |    Date    | Time  | P | D |                   Task                     |
//! +----+------------+-------+---+---+--------------------------------------------+
//! | 1  | 2023-05-01 | 09:05 |   |   |Buy milk                                    |
//! +----+------------+-------+---+---+--------------------------------------------+
//! ```
//!
//! The `P` and `D` cells are one-character color tags for priority and
//! urgency. Urgency is derived here from the date passed in as `today`.

use chrono::NaiveDate;

use crate::fields::*;
use crate::task::Task;

/// Width of the description column, in characters.
pub const TASK_WIDTH: usize = 44;

pub const EMPTY_MESSAGE: &str = "No tasks have been input";

const BORDER: &str =
    "+----+------------+-------+---+---+--------------------------------------------+";
const HEADER: &str =
    "| N  |    Date    | Time  | P | D |                   Task                     |";
const BLANK_LEFT: &str = "|    |            |       |   |   |";

/// How tag cells are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    /// A space on an ANSI background color.
    Ansi,
    /// The tag's letter code, for terminals without color.
    Plain,
}

impl Palette {
    fn tag(self, code: u8, letter: char) -> String {
        match self {
            Palette::Ansi => format!("\u{1b}[{code}m \u{1b}[0m"),
            Palette::Plain => letter.to_string(),
        }
    }

    pub fn priority_tag(self, priority: Priority) -> String {
        self.tag(priority.color_code(), priority.letter())
    }

    pub fn due_tag(self, due: Due) -> String {
        self.tag(due.color_code(), due.letter())
    }
}

/// Signed number of calendar days from `today` until `date`.
pub fn days_until(today: NaiveDate, date: NaiveDate) -> i64 {
    date.signed_duration_since(today).num_days()
}

/// Classify a day difference as an urgency level.
///
/// Only a difference of 0 is `Today` and only more than 1 is `InTime`; a task
/// due tomorrow is reported `Overdue`, like any past date.
pub fn classify_due(days: i64) -> Due {
    match days {
        0 => Due::Today,
        d if d > 1 => Due::InTime,
        _ => Due::Overdue,
    }
}

/// Split a description line into rows of at most `width` characters.
///
/// Every row except the last is exactly `width` characters long.
pub fn wrap_line(line: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = line.chars().collect();
    let rows: Vec<String> = chars
        .chunks(width.max(1))
        .map(|chunk| chunk.iter().collect())
        .collect();
    if rows.is_empty() {
        vec![String::new()]
    } else {
        rows
    }
}

/// Render every task as a table, or the empty-store message.
///
/// The returned text always ends with a newline.
pub fn render_table(tasks: &[Task], today: NaiveDate, palette: Palette) -> String {
    if tasks.is_empty() {
        return format!("{EMPTY_MESSAGE}\n");
    }

    let mut out = String::new();
    for line in [BORDER, HEADER, BORDER] {
        out.push_str(line);
        out.push('\n');
    }
    for (i, task) in tasks.iter().enumerate() {
        render_task(&mut out, i + 1, task, today, palette);
    }
    out
}

fn render_task(out: &mut String, number: usize, task: &Task, today: NaiveDate, palette: Palette) {
    let due = classify_due(days_until(today, task.date));

    out.push_str(&format!(
        "| {:<2} | {} | {} | {} | {} |",
        number,
        task.date_label(),
        task.time_label(),
        palette.priority_tag(task.priority),
        palette.due_tag(due),
    ));

    for (i, line) in task.lines.iter().enumerate() {
        if i > 0 {
            out.push_str(BLANK_LEFT);
        }
        let rows = wrap_line(line, TASK_WIDTH);
        for (j, row) in rows.iter().enumerate() {
            if j > 0 {
                out.push_str(BLANK_LEFT);
            }
            out.push_str(&format!("{:<width$}|\n", row, width = TASK_WIDTH));
        }
    }

    out.push_str(BORDER);
    out.push('\n');
}
