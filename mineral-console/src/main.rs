//! Mineral admin console entry point.

use crossterm::{
    event::{self, Event as CrosstermEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use mineral_console::config::ConsoleConfig;
use mineral_console::error::ConsoleError;
use mineral_console::events::ConsoleEvent;
use mineral_console::keys::map_key;
use mineral_console::logging::init_logging;
use mineral_console::screens::render_screen;
use mineral_console::state::App;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config = ConsoleConfig::load()?;
    init_logging(&config)?;
    info!(log_filter = %config.log_filter, "starting console");

    let tick_rate = Duration::from_millis(config.tick_rate_ms);
    let mut app = App::new(config);

    let mut terminal = setup_terminal()?;
    let _guard = TerminalGuard {};

    let (event_tx, mut event_rx) = mpsc::channel::<ConsoleEvent>(256);
    spawn_input_reader(event_tx.clone());

    let mut ticker = tokio::time::interval(tick_rate);

    loop {
        terminal.draw(|f| render_screen(f, &app))?;

        tokio::select! {
            _ = ticker.tick() => {
                let _ = event_tx.send(ConsoleEvent::Tick).await;
            }
            Some(event) = event_rx.recv() => {
                if handle_event(&mut app, event) {
                    break;
                }
            }
        }
    }

    let snapshot = app.snapshot().map_err(ConsoleError::from)?;
    info!(%snapshot, "session closed");

    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, ConsoleError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
    }
}

fn spawn_input_reader(sender: mpsc::Sender<ConsoleEvent>) {
    std::thread::spawn(move || loop {
        if let Ok(true) = event::poll(Duration::from_millis(200)) {
            if let Ok(evt) = event::read() {
                let sent = match evt {
                    CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                        sender.blocking_send(ConsoleEvent::Input(key))
                    }
                    CrosstermEvent::Resize(width, height) => {
                        sender.blocking_send(ConsoleEvent::Resize { width, height })
                    }
                    _ => Ok(()),
                };
                if sent.is_err() {
                    break;
                }
            }
        }
    });
}

fn handle_event(app: &mut App, event: ConsoleEvent) -> bool {
    match event {
        ConsoleEvent::Input(key) => {
            if let Some(action) = map_key(key) {
                return app.handle_action(action);
            }
        }
        ConsoleEvent::Resize { width, height } => debug!(width, height, "terminal resized"),
        ConsoleEvent::Tick => {}
    }
    false
}
