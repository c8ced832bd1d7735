//! Console prompting.
//!
//! `Console` wraps any line-oriented input and any output so the interactive
//! session can run against the terminal or against scripted input in tests.
//! Each `read_*` method keeps asking until the answer parses.

use std::io::{BufRead, Write};

use chrono::{NaiveDate, NaiveTime};
use log::debug;

use crate::error::{Error, Result};
use crate::fields::*;
use crate::parse::*;

pub const ASK_PRIORITY: &str = "Input the task priority (C, H, N, L):";
pub const ASK_DATE: &str = "Input the date (yyyy-mm-dd):";
pub const INVALID_DATE: &str = "The input date is invalid";
pub const ASK_TIME: &str = "Input the time (hh:mm):";
pub const INVALID_TIME: &str = "The input time is invalid";
pub const ASK_TASK: &str = "Input a new task (enter a blank line to end):";
pub const BLANK_TASK: &str = "The task is blank";
pub const INVALID_TASK_NUMBER: &str = "Invalid task number";
pub const ASK_FIELD: &str = "Input a field to edit (priority, date, time, task):";
pub const INVALID_FIELD: &str = "Invalid field";

/// Line-based prompt/answer channel.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Print one line of text.
    pub fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Print text as-is, then flush.
    pub fn write_str(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Read one line without its terminator.
    ///
    /// Returns [`Error::InputClosed`] at end of input.
    pub fn read_line(&mut self) -> Result<String> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(Error::InputClosed);
        }
        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        Ok(buf)
    }

    /// Print a prompt and read the answer.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        self.say(prompt)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Ask `prompt` until `parse` accepts the answer, printing `invalid`
    /// (when given) after each refusal.
    fn ask_until<T>(
        &mut self,
        prompt: &str,
        invalid: Option<&str>,
        parse: impl Fn(&str) -> std::result::Result<T, ParseError>,
    ) -> Result<T> {
        loop {
            let answer = self.ask(prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    debug!("rejected input: {e}");
                    if let Some(message) = invalid {
                        self.say(message)?;
                    }
                }
            }
        }
    }

    /// Priority codes are re-asked without any complaint.
    pub fn read_priority(&mut self) -> Result<Priority> {
        self.ask_until(ASK_PRIORITY, None, parse_priority)
    }

    pub fn read_date(&mut self) -> Result<NaiveDate> {
        self.ask_until(ASK_DATE, Some(INVALID_DATE), parse_date)
    }

    pub fn read_time(&mut self) -> Result<NaiveTime> {
        self.ask_until(ASK_TIME, Some(INVALID_TIME), parse_time)
    }

    /// Read a 1-based task number for a store holding `len` tasks.
    pub fn read_task_number(&mut self, len: usize) -> Result<usize> {
        let prompt = format!("Input the task number (1-{len}):");
        self.ask_until(&prompt, Some(INVALID_TASK_NUMBER), |s| parse_task_number(s, len))
    }

    pub fn read_field(&mut self) -> Result<Field> {
        self.ask_until(ASK_FIELD, Some(INVALID_FIELD), parse_field)
    }

    /// Read description lines until an empty line.
    ///
    /// A whitespace-only line also ends the description, after printing
    /// the blank-task notice. Lines are stored trimmed.
    pub fn read_lines(&mut self) -> Result<Vec<String>> {
        self.say(ASK_TASK)?;
        self.output.flush()?;

        let mut lines = Vec::new();
        loop {
            let raw = self.read_line()?;
            if raw.is_empty() {
                break;
            }
            let line = raw.trim();
            if line.is_empty() {
                self.say(BLANK_TASK)?;
                break;
            }
            lines.push(line.to_string());
        }
        Ok(lines)
    }

    /// Give back the underlying input and output.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}
