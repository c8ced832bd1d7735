//! Enumerations and field types for task management.
//!
//! This module defines the structured values used to categorise tasks and to
//! drive the interactive loop: priorities, urgency levels, editable fields and
//! the actions a user may type.

use clap::ValueEnum;

/// Priority classification for task importance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Critical,
    High,
    Normal,
    Low,
}

impl Priority {
    /// ANSI background color code used for the priority tag.
    pub fn color_code(self) -> u8 {
        match self {
            Priority::Critical => 101,
            Priority::High => 103,
            Priority::Normal => 102,
            Priority::Low => 104,
        }
    }

    /// Single-letter code, as typed at the priority prompt.
    pub fn letter(self) -> char {
        match self {
            Priority::Critical => 'C',
            Priority::High => 'H',
            Priority::Normal => 'N',
            Priority::Low => 'L',
        }
    }
}

/// Urgency of a task relative to the current date.
///
/// Never stored on a task; the renderer derives it on every listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Due {
    Overdue,
    Today,
    InTime,
}

impl Due {
    /// ANSI background color code used for the urgency tag.
    pub fn color_code(self) -> u8 {
        match self {
            Due::Overdue => 101,
            Due::Today => 103,
            Due::InTime => 102,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Due::Overdue => 'O',
            Due::Today => 'T',
            Due::InTime => 'I',
        }
    }
}

/// Task attribute that can be replaced through the edit action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Priority,
    Date,
    Time,
    /// The description lines, called "task" at the prompt.
    Lines,
}

/// Actions accepted at the main prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Print,
    Edit,
    Delete,
    End,
}

/// Run state of the interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Working,
    Stopped,
}

/// When to emit ANSI color escapes for the tag cells.
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    Always,
    Never,
    /// Colors only when stdout is a terminal.
    Auto,
}
