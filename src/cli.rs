use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::fields::ColorMode;
use crate::parse::parse_date;

/// Interactive console to-do list.
/// Tasks live in memory only and are discarded on exit.
#[derive(Parser)]
#[command(name = "tasklist", version, about = "Interactive to-do list")]
pub struct Cli {
    /// Treat this date (YYYY-MM-DD) as today instead of the UTC clock.
    #[arg(long, value_parser = parse_date)]
    pub today: Option<NaiveDate>,

    /// When to color the priority and urgency tags.
    #[arg(long, value_enum, default_value_t = ColorMode::Always)]
    pub color: ColorMode,

    /// Increase log output on stderr. May be repeated.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
