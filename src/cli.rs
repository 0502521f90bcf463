//! CLI - Command Line Interface for LegalTUI
//!
//! Every list the TUI shows is scriptable, with the same search and
//! category filters. All output is JSON-parseable.
//!
//! # Examples
//!
//! ```bash
//! # Search clients
//! legaltui clients garcia --json
//!
//! # Archived processes, tasks by status
//! legaltui processes --tab archived
//! legaltui tracking --status urgent
//!
//! # Resolved palette
//! legaltui palette --mode dark
//! ```

use std::fmt::Display;
use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::filter::ProcessTab;
use crate::models::TrackingStatus;
use crate::theme::ThemeMode;

// =============================================================================
// Exit Codes
// =============================================================================

/// Exit codes for CLI operations (semantic for scripting)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// General error
    Error = 1,
    /// Invalid arguments
    InvalidArgs = 2,
    /// Query matched nothing
    NoResults = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> std::process::ExitCode {
        std::process::ExitCode::from(code as u8)
    }
}

// =============================================================================
// Main CLI Structure
// =============================================================================

/// LegalTUI - terminal client for legal practice management
///
/// Run without arguments to launch interactive TUI.
/// Use subcommands for scriptable automation.
#[derive(Parser, Debug)]
#[command(
    name = "legaltui",
    version,
    about = "Terminal client for legal clients, processes and judicial houses",
    long_about = "Browse clients, legal processes, tracking tasks and judicial \
                  houses from the terminal.\n\n\
                  Run without arguments to launch the interactive TUI.\n\
                  Use subcommands for automation and scripting.",
    after_help = "EXAMPLES:\n\
                  legaltui                              Launch interactive TUI\n\
                  legaltui clients garcia               Search clients\n\
                  legaltui processes --tab archived     List archived processes\n\
                  legaltui tracking -s urgent --json    Urgent tasks as JSON"
)]
pub struct Cli {
    /// Output format as JSON (default for non-TTY)
    #[arg(long, short = 'j', global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Path to config file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Initial theme mode (overrides config and LEGALTUI_THEME)
    #[arg(long, global = true, value_enum)]
    pub theme: Option<ThemeArg>,

    /// Subcommand to run (omit for TUI mode)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Check if running in CLI mode (has subcommand)
    pub fn is_cli_mode(&self) -> bool {
        self.command.is_some()
    }

    /// Check if JSON output should be used
    pub fn should_json(&self) -> bool {
        self.json || !std::io::stdout().is_terminal()
    }
}

// =============================================================================
// Subcommands
// =============================================================================

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search clients by name, email or phone
    #[command(visible_alias = "c")]
    Clients(ClientsCmd),

    /// List legal processes (active or archived)
    #[command(visible_alias = "p")]
    Processes(ProcessesCmd),

    /// List tracking tasks by status
    #[command(visible_alias = "t")]
    Tracking(TrackingCmd),

    /// Search judicial houses by name, address or city
    #[command(visible_alias = "h")]
    Houses(HousesCmd),

    /// Print the resolved color palette
    Palette(PaletteCmd),
}

/// Options shared by the list commands
#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Search query (case-insensitive substring)
    pub query: Option<String>,

    /// Maximum number of results
    #[arg(long, short = 'l', default_value = "50")]
    pub limit: usize,
}

impl ListArgs {
    pub fn query(&self) -> &str {
        self.query.as_deref().unwrap_or("")
    }
}

/// Search clients
#[derive(Args, Debug)]
pub struct ClientsCmd {
    #[command(flatten)]
    pub list: ListArgs,
}

/// List legal processes
#[derive(Args, Debug)]
pub struct ProcessesCmd {
    #[command(flatten)]
    pub list: ListArgs,

    /// Which tab to list
    #[arg(long, value_enum, default_value = "active")]
    pub tab: TabArg,
}

/// List tracking tasks
#[derive(Args, Debug)]
pub struct TrackingCmd {
    #[command(flatten)]
    pub list: ListArgs,

    /// Task status
    #[arg(long, short = 's', value_enum, default_value = "pending")]
    pub status: StatusArg,
}

/// Search judicial houses
#[derive(Args, Debug)]
pub struct HousesCmd {
    #[command(flatten)]
    pub list: ListArgs,
}

/// Print palette colors
#[derive(Args, Debug)]
pub struct PaletteCmd {
    /// Theme mode to resolve (defaults to the configured one)
    #[arg(long, short = 'm', value_enum)]
    pub mode: Option<ThemeArg>,
}

// =============================================================================
// Value Enums
// =============================================================================

/// Process tab filter
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabArg {
    /// Everything not archived
    #[default]
    Active,
    /// Archived only
    Archived,
}

impl From<TabArg> for ProcessTab {
    fn from(tab: TabArg) -> Self {
        match tab {
            TabArg::Active => ProcessTab::Active,
            TabArg::Archived => ProcessTab::Archived,
        }
    }
}

/// Tracking status filter
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusArg {
    #[default]
    Pending,
    Urgent,
    Completed,
}

impl From<StatusArg> for TrackingStatus {
    fn from(status: StatusArg) -> Self {
        match status {
            StatusArg::Pending => TrackingStatus::Pending,
            StatusArg::Urgent => TrackingStatus::Urgent,
            StatusArg::Completed => TrackingStatus::Completed,
        }
    }
}

/// Theme mode argument
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeArg {
    Light,
    Dark,
    /// Follow the terminal color scheme
    System,
}

impl From<ThemeArg> for ThemeMode {
    fn from(mode: ThemeArg) -> Self {
        match mode {
            ThemeArg::Light => ThemeMode::Light,
            ThemeArg::Dark => ThemeMode::Dark,
            ThemeArg::System => ThemeMode::System,
        }
    }
}

// =============================================================================
// JSON Output Types
// =============================================================================

/// Generic JSON output wrapper with status
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub exit_code: i32,
}

fn is_zero(n: &i32) -> bool {
    *n == 0
}

impl<T: Serialize> JsonOutput<T> {
    /// Create success output with data
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            exit_code: 0,
        }
    }

    /// Create error output (no data)
    pub fn error_msg(msg: impl Into<String>, code: ExitCode) -> JsonOutput<()> {
        JsonOutput::<()> {
            data: None,
            error: Some(msg.into()),
            exit_code: code.into(),
        }
    }
}

/// One palette entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub name: String,
    pub hex: String,
}

impl Display for PaletteEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:<14} {}", self.name, self.hex)
    }
}

// =============================================================================
// Output Helpers
// =============================================================================

/// Output handler for consistent formatting
pub struct Output {
    pub json: bool,
    pub quiet: bool,
}

impl Output {
    pub fn new(cli: &Cli) -> Self {
        Self {
            json: cli.should_json(),
            quiet: cli.quiet,
        }
    }

    /// Print success data
    pub fn print<T: Serialize>(&self, data: T) -> anyhow::Result<()> {
        if self.json {
            let output = JsonOutput::success(data);
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
        Ok(())
    }

    /// Print a list: JSON array, or one `Display` line per item
    pub fn print_list<T: Serialize + Display>(&self, items: &[T]) -> anyhow::Result<()> {
        if self.json {
            self.print(items)
        } else {
            for item in items {
                println!("{}", item);
            }
            Ok(())
        }
    }

    /// Print error and return exit code
    pub fn error(&self, msg: impl Into<String>, code: ExitCode) -> ExitCode {
        let msg = msg.into();
        if self.json {
            let output = JsonOutput::<()>::error_msg(&msg, code);
            if let Ok(json) = serde_json::to_string_pretty(&output) {
                eprintln!("{}", json);
            }
        } else if !self.quiet {
            eprintln!("Error: {}", msg);
        }
        code
    }

    /// Print info message (suppressed in quiet mode)
    pub fn info(&self, msg: impl Display) {
        if !self.quiet && !self.json {
            eprintln!("{}", msg);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
