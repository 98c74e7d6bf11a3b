use clap::{Parser, Subcommand, ValueEnum};

use taskflow_core::{Language, TaskStatus, Theme};

#[derive(Parser)]
#[command(name = "taskflow")]
#[command(about = concat!(
    ">>=============================<<\n",
    "||  T A S K F L O W  client   ||\n",
    ">>=============================<<\n",
    "~Your tasks live on a server; this talks to it~"
))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_version = concat!(
    "v",
    env!("CARGO_PKG_VERSION"),
    "\nCodeName: ",
    env!("CODENAME")
))]
pub struct Cli {
    /// Override the API server URL for this invocation
    #[arg(long, global = true, value_name = "URL")]
    pub server: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Status filter / target values as they appear on the command line
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum StatusArg {
    Created,
    InProgress,
    Completed,
}

impl From<StatusArg> for TaskStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Created => TaskStatus::Created,
            StatusArg::InProgress => TaskStatus::InProgress,
            StatusArg::Completed => TaskStatus::Completed,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LangArg {
    Ru,
    En,
}

impl From<LangArg> for Language {
    fn from(arg: LangArg) -> Self {
        match arg {
            LangArg::Ru => Language::Ru,
            LangArg::En => Language::En,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OnOff {
    On,
    Off,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Register a new account on the server
    Register { username: String, password: String },

    /// Log in and store the session token
    Login { username: String, password: String },

    /// Drop the stored session (no server call)
    Logout,

    /// List tasks, optionally filtered by status
    List {
        /// Show only tasks with this status
        #[arg(long, short = 's', value_enum)]
        status: Option<StatusArg>,
    },

    /// Search tasks by title
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// Add a task
    Add {
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
        /// Longer description
        #[arg(long, short = 'd', value_name = "TEXT")]
        description: Option<String>,
        /// Due date (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        due: Option<String>,
    },

    /// Move a task to its next status
    Advance {
        #[arg(value_parser = clap::value_parser!(u32))]
        id: u32,
    },

    /// Remove a task
    Remove {
        #[arg(value_parser = clap::value_parser!(u32))]
        id: u32,
        /// Skip confirmation prompt
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Set the color theme
    Theme {
        #[arg(value_enum)]
        theme: ThemeArg,
    },

    /// Set the interface language
    Lang {
        #[arg(value_enum)]
        language: LangArg,
    },

    /// Turn desktop notifications on or off
    Notify {
        #[arg(value_enum)]
        state: OnOff,
    },

    /// Print the Telegram bot linking command
    Link,

    /// Check that the server is reachable
    Ping,
}
