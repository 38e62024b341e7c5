//! CLI command definitions and subcommands

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::domain::{Priority, Theme};

/// DoIt - to-do list with priorities and a completion chart
#[derive(Parser, Debug)]
#[command(name = "doit", author, version, about = "To-do list with priorities and a completion chart", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level", global = true)]
    pub log_level: Option<String>,

    /// Storage file (overrides the configured one)
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Subcommand to execute (defaults to `list`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands
///
/// Positions are 1-based, as printed by `list`.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a task
    Add {
        /// What needs doing
        #[arg(required = true, num_args = 1..)]
        description: Vec<String>,

        /// Due date (YYYY-MM-DD)
        #[arg(short, long, value_parser = parse_date)]
        date: Option<NaiveDate>,

        /// Priority (high, medium, low)
        #[arg(short, long, default_value = "low")]
        priority: Priority,
    },

    /// List tasks
    List {
        /// Only completed tasks
        #[arg(long, conflicts_with = "important")]
        completed: bool,

        /// Only important tasks
        #[arg(long)]
        important: bool,
    },

    /// Mark a task done, or not done again
    Complete {
        /// Task position
        position: usize,
    },

    /// Mark a task important, or not important again
    Star {
        /// Task position
        position: usize,
    },

    /// Delete a task
    Delete {
        /// Task position
        position: usize,
    },

    /// Set the theme, or toggle it when no theme is given
    Theme {
        /// light or dark
        theme: Option<Theme>,
    },

    /// Show completion statistics
    Stats,
}

/// Parse a `YYYY-MM-DD` date argument
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|e| format!("Invalid date '{}': {} (expected YYYY-MM-DD)", s, e))
}

/// Convert a 1-based CLI position into a store index
pub fn to_index(position: usize) -> Option<usize> {
    position.checked_sub(1)
}
