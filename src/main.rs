//! # Tasklist - interactive console to-do list
//!
//! Tasks are entered at a prompt with a priority, a due date, a due time and
//! one or more description lines, then listed in a fixed-width table:
//!
//! ```text
//! +----+------------+-------+---+---+--------------------------------------------+
//! | N  |    Date    | Time  | P | D |                   Task                     |
//! +----+------------+-------+---+---+--------------------------------------------+
//! | 1  | 2023-05-01 | 09:05 |   |   |Buy milk                                    |
//! +----+------------+-------+---+---+--------------------------------------------+
//! ```
//!
//! `P` is a color tag for the priority (Critical, High, Normal, Low) and `D`
//! a color tag for the urgency, worked out from the due date against today's
//! UTC date (Overdue, Today, In-time).
//!
//! ## Actions
//!
//! - `add` - enter a new task
//! - `print` - show the table
//! - `edit` - replace the priority, date, time or description of a task
//! - `delete` - remove a task
//! - `end` - quit
//!
//! Nothing is saved: the list lives for one session only.

use std::io;

use crossterm::tty::IsTty;
use log::warn;

use clap::Parser;

pub mod cli;
pub mod clock;
pub mod cmd;
pub mod db;
pub mod error;
pub mod fields;
pub mod logging;
pub mod parse;
pub mod reader;
pub mod render;
pub mod task;

use cli::{Cli, Commands};
use clock::{Clock, FixedClock, SystemClock};
use cmd::*;
use error::Error;
use fields::ColorMode;
use render::Palette;

fn main() {
    let cli = Cli::parse();

    let _logger = match logging::init_logging(cli.verbose) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("{e}");
            None
        }
    };

    if let Some(Commands::Completions { shell }) = cli.command {
        cmd_completions(shell);
        return;
    }

    let palette = match cli.color {
        ColorMode::Always => Palette::Ansi,
        ColorMode::Never => Palette::Plain,
        ColorMode::Auto if io::stdout().is_tty() => Palette::Ansi,
        ColorMode::Auto => Palette::Plain,
    };

    let result = match cli.today {
        Some(today) => run_session(FixedClock(today), palette),
        None => run_session(SystemClock, palette),
    };

    match result {
        Ok(()) => {}
        Err(Error::InputClosed) => warn!("standard input closed, leaving"),
        Err(e) => {
            eprintln!("tasklist: {e}");
            std::process::exit(1);
        }
    }
}

/// Run the interactive loop on the process's stdin and stdout.
fn run_session<C: Clock>(clock: C, palette: Palette) -> error::Result<()> {
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut session = Session::new(stdin, stdout, clock, palette);
    session.run()
}
