//! shoptui - Terminal storefront for the Fake Store API
//!
//! A terminal UI application that browses the product catalog, filters by
//! category, and manages a shopping cart persisted between sessions.

use std::io;
use std::panic;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use shoptui::app::{App, AppState};
use shoptui::cli::{Cli, StartupConfig};
use shoptui::ui;

/// Sets up a panic hook that restores the terminal before printing the
/// panic message, so the terminal stays usable after a crash.
fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

/// Renders the UI based on the current application state
fn render_ui(frame: &mut ratatui::Frame, app: &App) {
    match &app.state {
        AppState::Loading => {
            render_loading(frame);
        }
        AppState::Listing => {
            ui::render_listing(frame, app);
        }
        AppState::Detail(_) => {
            ui::render_listing(frame, app);
            ui::render_detail(frame, app);
        }
        AppState::CartView => {
            ui::render_cart_view(frame, app);
        }
    }

    if app.show_help {
        ui::render_help_overlay(frame);
    }
}

/// Renders a loading message while the catalog is being fetched
fn render_loading(frame: &mut ratatui::Frame) {
    use ratatui::{
        layout::{Alignment, Constraint, Direction, Layout},
        style::{Color, Style},
        widgets::Paragraph,
    };

    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(3),
            Constraint::Percentage(45),
        ])
        .split(area);

    let loading_text = Paragraph::new("Loading catalog...")
        .style(Style::default().fg(Color::LightMagenta))
        .alignment(Alignment::Center);

    frame.render_widget(loading_text, chunks[1]);
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = match StartupConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = run(config).await {
        eprintln!("{}", err);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Sets up the terminal, runs the event loop, and restores the terminal
async fn run(config: StartupConfig) -> Result<(), Box<dyn std::error::Error>> {
    setup_panic_hook();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::with_startup_config(config);

    // Initial render to show the loading state
    terminal.draw(|f| render_ui(f, &app))?;

    // Fetch products and categories, then any startup category filter
    app.load_initial().await;
    app.run_pending().await;

    // Main event loop
    loop {
        terminal.draw(|f| render_ui(f, &app))?;

        // Poll for keyboard events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        // Run any network work the key handler requested
        app.run_pending().await;

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}
