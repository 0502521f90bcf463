//! LegalTUI - terminal client for legal practice management
//!
//! Browse clients, legal processes, tracking tasks and judicial houses.
//!
//! # Usage
//!
//! ```bash
//! # Launch interactive TUI
//! legaltui
//!
//! # CLI mode (for automation)
//! legaltui clients garcia
//! legaltui tracking --status urgent --json
//! ```

use std::io::{stdout, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use legaltui::cli::{Cli, Command, ExitCode, Output};
use legaltui::{commands, logging, ui, App, AppContext, Config, Dataset};

/// Terminal type alias for convenience
type Tui = Terminal<CrosstermBackend<Stdout>>;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.is_cli_mode() {
        // CLI mode: execute command and exit
        let exit_code = run_cli(cli);
        std::process::exit(exit_code.into());
    } else {
        // TUI mode: launch interactive interface
        let config = load_config(&cli)?;
        run_tui(config)
    }
}

/// Config file (explicit path or default) plus environment and flag overrides
fn load_config(cli: &Cli) -> Result<Config> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };
    let mut config = config.with_env_overrides()?;
    if let Some(theme) = cli.theme {
        config.theme = theme.into();
    }
    Ok(config)
}

/// Run CLI command and return exit code
fn run_cli(cli: Cli) -> ExitCode {
    let output = Output::new(&cli);

    if let Err(e) = logging::init_stderr() {
        output.info(format!("Logging disabled: {:#}", e));
    }

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => return output.error(format!("{:#}", e), ExitCode::Error),
    };

    let data = Dataset::mock();

    match cli.command {
        Some(Command::Clients(cmd)) => commands::clients_cmd(cmd, data, &output),

        Some(Command::Processes(cmd)) => commands::processes_cmd(cmd, data, &output),

        Some(Command::Tracking(cmd)) => commands::tracking_cmd(cmd, data, &output),

        Some(Command::Houses(cmd)) => commands::houses_cmd(cmd, data, &output),

        Some(Command::Palette(cmd)) => commands::palette_cmd(cmd, config.theme_store(), &output),

        None => {
            // This shouldn't happen (handled by is_cli_mode check)
            ExitCode::Success
        }
    }
}

// =============================================================================
// TUI Mode
// =============================================================================

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state
fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run interactive TUI
fn run_tui(config: Config) -> Result<()> {
    if let Some(path) = config.log_path() {
        logging::init_file(&path)?;
    }

    let data = Dataset::mock();
    data.validate().context("mock dataset is inconsistent")?;

    let theme = config.theme_store();
    let sidebar = config.sidebar_state()?;
    tracing::info!(
        theme = %theme.mode(),
        system = ?theme.system_scheme(),
        sidebar_expanded = sidebar.is_expanded(),
        "starting TUI"
    );

    let mut app = App::with_dataset(AppContext::new(theme, sidebar), data);

    // Initialize terminal
    let mut terminal = init_terminal()?;

    // Run the main event loop
    let result = run_event_loop(&mut terminal, &mut app);

    // Always restore terminal, even on error
    restore_terminal(&mut terminal)?;

    result
}

/// Main event loop - handles input, updates state, renders UI
fn run_event_loop(terminal: &mut Tui, app: &mut App) -> Result<()> {
    const TICK_RATE: Duration = Duration::from_millis(100);

    while app.running {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (ignore releases on Windows)
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
    }

    tracing::info!("exiting TUI");
    Ok(())
}
