//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

use crate::application::Step;
use crate::config::OutputFormat;
use crate::domain::EmployeeId;

/// Organization chart explorer: reparent employees, then undo and redo the moves
#[derive(Parser, Debug)]
#[command(name = "orgtree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output, repeat for more (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Output format (default: from config, else tree)
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the chart
    Show {
        /// Chart file (.json or .toml); falls back to default_chart
        #[arg(value_hint = ValueHint::FilePath)]
        chart: Option<PathBuf>,
    },

    /// Print one employee and their reports
    Get {
        /// Chart file (.json or .toml); falls back to default_chart
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        chart: Option<PathBuf>,
        /// Employee id
        id: EmployeeId,
    },

    /// Replay steps against the chart and print the result
    Apply {
        /// Chart file (.json or .toml); falls back to default_chart
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        chart: Option<PathBuf>,
        /// Steps: move:<employee>:<supervisor>, undo, redo
        #[arg(required = true)]
        steps: Vec<Step>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings
    Show,
    /// Print a config template
    Template,
    /// Print the global config file location
    Path,
}
