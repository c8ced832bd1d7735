//! The interactive command loop.
//!
//! A `Session` owns the task store, the console and the clock, and runs the
//! action prompt until the user types `end`. Each `cmd_*` method implements
//! one action.

use std::io::{BufRead, Write};

use clap_complete::{generate, Shell};
use log::{debug, info};

use crate::clock::Clock;
use crate::db::Database;
use crate::error::Result;
use crate::fields::*;
use crate::parse::parse_action;
use crate::reader::Console;
use crate::render::{render_table, Palette};
use crate::task::{FieldValue, Task};

pub const ASK_ACTION: &str = "Input an action (add, print, edit, delete, end):";
pub const INVALID_ACTION: &str = "The input action is invalid";
pub const TASK_CHANGED: &str = "The task is changed";
pub const TASK_DELETED: &str = "The task is deleted";
pub const EXITING: &str = "Tasklist exiting!";

/// All state of one interactive run.
pub struct Session<R, W, C> {
    console: Console<R, W>,
    clock: C,
    palette: Palette,
    db: Database,
    state: RunState,
}

impl<R: BufRead, W: Write, C: Clock> Session<R, W, C> {
    pub fn new(input: R, output: W, clock: C, palette: Palette) -> Self {
        Session {
            console: Console::new(input, output),
            clock,
            palette,
            db: Database::new(),
            state: RunState::Working,
        }
    }

    /// Prompt for actions until the session is stopped.
    pub fn run(&mut self) -> Result<()> {
        info!("session started");
        while self.state == RunState::Working {
            self.step()?;
        }
        info!("session stopped with {} task(s)", self.db.len());
        Ok(())
    }

    /// Read and perform a single action.
    pub fn step(&mut self) -> Result<()> {
        let answer = self.console.ask(ASK_ACTION)?;
        match parse_action(&answer) {
            Ok(action) => {
                debug!("action {action:?}");
                match action {
                    Action::Add => self.cmd_add(),
                    Action::Print => self.cmd_print(),
                    Action::Edit => self.cmd_edit(),
                    Action::Delete => self.cmd_delete(),
                    Action::End => self.cmd_end(),
                }
            }
            Err(e) => {
                debug!("{e}");
                self.console.say(INVALID_ACTION)
            }
        }
    }

    pub fn cmd_add(&mut self) -> Result<()> {
        let priority = self.console.read_priority()?;
        let date = self.console.read_date()?;
        let time = self.console.read_time()?;
        let lines = self.console.read_lines()?;
        self.db.add(Task::new(lines, priority, date, time));
        Ok(())
    }

    pub fn cmd_print(&mut self) -> Result<()> {
        let table = render_table(self.db.tasks(), self.clock.today(), self.palette);
        self.console.write_str(&table)
    }

    pub fn cmd_edit(&mut self) -> Result<()> {
        self.cmd_print()?;
        if self.db.is_empty() {
            return Ok(());
        }

        let index = self.console.read_task_number(self.db.len())?;
        let value = match self.console.read_field()? {
            Field::Priority => FieldValue::Priority(self.console.read_priority()?),
            Field::Date => FieldValue::Date(self.console.read_date()?),
            Field::Time => FieldValue::Time(self.console.read_time()?),
            Field::Lines => FieldValue::Lines(self.console.read_lines()?),
        };
        if let Err(e) = self.db.edit(index, value) {
            debug!("{e}");
        }
        self.console.say(TASK_CHANGED)
    }

    pub fn cmd_delete(&mut self) -> Result<()> {
        self.cmd_print()?;
        if self.db.is_empty() {
            return Ok(());
        }

        let index = self.console.read_task_number(self.db.len())?;
        if let Err(e) = self.db.delete(index) {
            debug!("{e}");
        }
        self.console.say(TASK_DELETED)
    }

    pub fn cmd_end(&mut self) -> Result<()> {
        self.console.say(EXITING)?;
        self.state = RunState::Stopped;
        Ok(())
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// End the session, handing back the store and the output written so far.
    pub fn finish(self) -> (Database, W) {
        (self.db, self.console.into_parts().1)
    }
}

/// Print a shell completion script for the CLI.
pub fn cmd_completions(shell: Shell) {
    use clap::CommandFactory;
    use crate::cli::Cli;

    let mut app = Cli::command();
    let app_name = app.get_name().to_string();
    generate(shell, &mut app, app_name, &mut std::io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::error::Error;
    use crate::reader::*;
    use crate::render::EMPTY_MESSAGE;
    use chrono::{NaiveDate, NaiveTime};
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    type TestSession = Session<Cursor<Vec<u8>>, Vec<u8>, FixedClock>;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 5, 1).unwrap()
    }

    fn session(script: &[&str]) -> TestSession {
        let mut input = script.join("\n");
        input.push('\n');
        Session::new(
            Cursor::new(input.into_bytes()),
            Vec::new(),
            FixedClock(today()),
            Palette::Plain,
        )
    }

    fn run(script: &[&str]) -> (Database, Vec<String>) {
        let mut s = session(script);
        s.run().unwrap();
        let (db, output) = s.finish();
        let text = String::from_utf8(output).unwrap();
        (db, text.lines().map(str::to_string).collect())
    }

    const ADD_MILK: [&str; 6] = ["add", "H", "2023-05-01", "9:5", "Buy milk", ""];

    fn add_script<'a>(extra: &[&'a str]) -> Vec<&'a str> {
        let mut script = ADD_MILK.to_vec();
        script.extend_from_slice(extra);
        script
    }

    #[test]
    fn test_end_stops_the_loop() {
        let mut s = session(&["end", "print"]);
        s.run().unwrap();
        assert_eq!(s.state(), RunState::Stopped);
        let (_, output) = s.finish();
        assert_eq!(String::from_utf8(output).unwrap(), format!("{ASK_ACTION}\n{EXITING}\n"));
    }

    #[test]
    fn test_unknown_action_keeps_working() {
        let (_, out) = run(&["remove", "END"]);
        assert_eq!(out, vec![ASK_ACTION, INVALID_ACTION, ASK_ACTION, EXITING]);
    }

    #[test]
    fn test_print_empty_store() {
        let (_, out) = run(&["print", "end"]);
        assert_eq!(out, vec![ASK_ACTION, EMPTY_MESSAGE, ASK_ACTION, EXITING]);
    }

    #[test]
    fn test_add_canonicalises_date_and_time() {
        let (db, out) = run(&add_script(&["end"]));
        let task = db.get(1).unwrap();
        assert_eq!(task.lines, vec!["Buy milk"]);
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.date_label(), "2023-05-01");
        assert_eq!(task.time_label(), "09:05");
        assert_eq!(
            out,
            vec![ASK_ACTION, ASK_PRIORITY, ASK_DATE, ASK_TIME, ASK_TASK, ASK_ACTION, EXITING]
        );
    }

    #[test]
    fn test_add_then_print_is_due_today() {
        let (_, out) = run(&add_script(&["print", "end"]));
        assert_eq!(
            out[9],
            format!("| 1  | 2023-05-01 | 09:05 | H | T |{:<44}|", "Buy milk")
        );
    }

    #[test]
    fn test_add_with_invalid_answers_reprompts() {
        let (db, out) = run(&[
            "add", "q", "n", "2023-2-30", "2023-2-28", "7:77", "07:07", "x", "", "end",
        ]);
        let task = db.get(1).unwrap();
        assert_eq!(task.priority, Priority::Normal);
        assert_eq!(task.date, NaiveDate::from_ymd_opt(2023, 2, 28).unwrap());
        assert_eq!(task.time, NaiveTime::from_hms_opt(7, 7, 0).unwrap());
        assert_eq!(
            out,
            vec![
                ASK_ACTION,
                ASK_PRIORITY,
                ASK_PRIORITY,
                ASK_DATE,
                INVALID_DATE,
                ASK_DATE,
                ASK_TIME,
                INVALID_TIME,
                ASK_TIME,
                ASK_TASK,
                ASK_ACTION,
                EXITING,
            ]
        );
    }

    #[test]
    fn test_add_without_lines_stores_nothing() {
        let (db, out) = run(&["add", "L", "2023-5-1", "10:00", "", "add", "L", "2023-5-1", "10:00", "  ", "end"]);
        assert!(db.is_empty());
        assert!(out.contains(&BLANK_TASK.to_string()));
    }

    #[test]
    fn test_edit_on_empty_store_only_prints_message() {
        let (_, out) = run(&["edit", "end"]);
        assert_eq!(out, vec![ASK_ACTION, EMPTY_MESSAGE, ASK_ACTION, EXITING]);
    }

    #[test]
    fn test_delete_on_empty_store_only_prints_message() {
        let (_, out) = run(&["delete", "end"]);
        assert_eq!(out, vec![ASK_ACTION, EMPTY_MESSAGE, ASK_ACTION, EXITING]);
    }

    #[test]
    fn test_edit_priority_changes_only_priority() {
        let (db, out) = run(&add_script(&["edit", "7", "1", "prio", "priority", "c", "end"]));
        let task = db.get(1).unwrap();
        assert_eq!(task.priority, Priority::Critical);
        assert_eq!(task.lines, vec!["Buy milk"]);
        assert_eq!(task.date_label(), "2023-05-01");
        assert_eq!(task.time_label(), "09:05");

        let tail: Vec<&str> = out.iter().skip(11).map(String::as_str).collect();
        assert_eq!(
            tail,
            vec![
                "Input the task number (1-1):",
                INVALID_TASK_NUMBER,
                "Input the task number (1-1):",
                ASK_FIELD,
                INVALID_FIELD,
                ASK_FIELD,
                ASK_PRIORITY,
                TASK_CHANGED,
                ASK_ACTION,
                EXITING,
            ]
        );
    }

    #[test]
    fn test_edit_task_lines() {
        let (db, out) = run(&add_script(&["edit", "1", "task", "Buy oat milk", "two litres", "", "end"]));
        assert_eq!(db.get(1).unwrap().lines, vec!["Buy oat milk", "two litres"]);
        assert!(out.contains(&TASK_CHANGED.to_string()));
    }

    #[test]
    fn test_edit_date_and_time() {
        let (db, _) = run(&add_script(&[
            "edit", "1", "date", "2024-2-29", "edit", "1", "time", "23:59", "end",
        ]));
        let task = db.get(1).unwrap();
        assert_eq!(task.date_label(), "2024-02-29");
        assert_eq!(task.time_label(), "23:59");
        assert_eq!(task.priority, Priority::High);
    }

    #[test]
    fn test_delete_renumbers() {
        let (db, out) = run(&[
            "add", "c", "2023-5-1", "1:00", "one", "",
            "add", "h", "2023-5-1", "2:00", "two", "",
            "add", "l", "2023-5-1", "3:00", "three", "",
            "delete", "1",
            "print", "end",
        ]);
        assert_eq!(db.len(), 2);
        assert_eq!(db.get(1).unwrap().lines, vec!["two"]);
        assert!(out.contains(&TASK_DELETED.to_string()));
        assert!(out
            .iter()
            .any(|l| l.starts_with("| 1  | 2023-05-01 | 02:00 | H | T |two")));
        assert!(out
            .iter()
            .any(|l| l.starts_with("| 2  | 2023-05-01 | 03:00 | L | T |three")));
    }

    #[test]
    fn test_end_of_input_is_reported() {
        let mut s = Session::new(
            Cursor::new(b"add\nC\n".to_vec()),
            Vec::new(),
            FixedClock(today()),
            Palette::Plain,
        );
        assert!(matches!(s.run(), Err(Error::InputClosed)));
        assert_eq!(s.state(), RunState::Working);
    }
}
