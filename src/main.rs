mod app;
mod config;
mod domain;
mod input;
mod logging;
mod persistence;
mod planner;
mod report;
mod ticker;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use config::Config;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::Weekday;
use log::{error, info};
use persistence::init_local_data_dir;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "weekplan")]
#[command(about = "A terminal weekly planner with points for finished tasks", long_about = None)]
struct Cli {
    /// Directory holding Planner.json and TaskNames.json
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error or off
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .weekplan directory in the current directory
    Init,
    /// Print the weekly grid
    Grid,
    /// Print the tasks of one weekday
    Day {
        /// Weekday name, e.g. monday or mon
        weekday: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Init) = cli.command {
        let dir = init_local_data_dir()?;
        println!("Initialized planner directory: {}", dir.display());
        println!();
        println!("weekplan will now keep its files in this local directory.");
        println!("Run 'weekplan' to open the planner.");
        return Ok(());
    }

    let config = Config::resolve(cli.data_dir, cli.log_level)?;

    // Logging problems never stop the planner
    let _logger = match logging::init_logging(&config.log_level, &config.log_dir()) {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("Warning: logging disabled: {:#}", err);
            None
        }
    };

    match cli.command {
        Some(Commands::Grid) => {
            let app = AppState::load(&config);
            print_alerts(&app);
            print!("{}", report::format_grid(app.coordinator.grid()));
            println!("{}", report::format_week_summary(&report::calculate_week_stats(app.coordinator.schedule())));
            Ok(())
        }
        Some(Commands::Day { weekday }) => {
            let weekday: Weekday = weekday.parse()?;
            let app = AppState::load(&config);
            print_alerts(&app);
            print!("{}", report::format_day(app.coordinator.weekday_planner(), weekday));
            Ok(())
        }
        Some(Commands::Init) | None => run_tui(&config),
    }
}

fn print_alerts(app: &AppState) {
    for alert in &app.alerts {
        eprintln!("Warning: {}", alert);
    }
}

fn run_tui(config: &Config) -> Result<()> {
    eprintln!("Using planner directory: {}", config.data_dir().display());
    info!(
        "event=data_files planner=\"{}\" names=\"{}\"",
        config.planner_file().display(),
        config.task_names_file().display()
    );

    let mut app = AppState::load(config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Save on exit
    if let Err(e) = app.save().context("Saving on exit failed") {
        error!("event=save status=failed reason=\"{:#}\"", e);
        eprintln!("Error saving planner: {:#}", e);
    }

    if let Err(err) = result {
        error!("event=app_exit status=failed reason=\"{:#}\"", err);
        eprintln!("Error: {}", err);
    }
    info!("event=app_exit status=ok");

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let poll = ticker::poll_duration();
    let mut clock = ticker::Ticker::clock();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout so the clock keeps moving
        if event::poll(poll)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key)? {
                    return Ok(());
                }
            }
        }

        if clock.due() {
            app.tick();
        }
    }
}
