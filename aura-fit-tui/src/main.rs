// aura-fit-tui/src/main.rs
use anyhow::{Context, Result};
use aura_fit_lib::AppService;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    fs::File,
    io,
    sync::Mutex,
    time::Duration,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod app; // Application state
mod ui; // UI rendering logic

use crate::app::App;

// Logging is off unless this points at a writable file
const LOG_FILE_ENV: &str = "AURA_FIT_LOG_FILE";

fn main() -> Result<()> {
    init_logging()?;
    install_panic_hook();

    let app_service = AppService::initialize()?;
    info!(config = ?app_service.get_config_path(), "starting aura-fit");

    // Generation requests run here; the event loop itself stays synchronous
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run it
    let mut app = App::new(&app_service, runtime.handle().clone());
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    runtime.shutdown_timeout(Duration::from_millis(200));

    // Errors reach stderr through main's return, with a non-zero exit code
    log_exit(res)
}

fn log_exit(res: Result<()>) -> Result<()> {
    if let Err(err) = &res {
        error!(error = ?err, "event loop failed");
    }
    res
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Apply finished requests and expire status messages
        app.tick();

        terminal.draw(|f| ui::render_guarded(f, app))?;

        // Short poll so the spinner keeps moving while a request is out
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events
                if key.kind == KeyEventKind::Press {
                    app.handle_key_event(key)?;
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn init_logging() -> Result<()> {
    let Some(path) = std::env::var_os(LOG_FILE_ENV) else {
        return Ok(());
    };
    let file = File::create(&path)
        .with_context(|| format!("Failed to open log file {}", path.to_string_lossy()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

// Panics caught by the render boundary, and panics on runtime workers
// (reported back as failed requests), are only logged. A panic on the main
// thread ends the app, so the terminal is restored before the default report.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        error!(panic = %info, "panic");
        if panic_ends_app(std::thread::current().name()) {
            restore_terminal();
            default_hook(info);
        }
    }));
}

fn panic_ends_app(thread_name: Option<&str>) -> bool {
    thread_name == Some("main") && !ui::inside_render_boundary()
}

// Best effort, the terminal may already be restored
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}
