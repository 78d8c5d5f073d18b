//! Userdeck - a terminal-based viewer for remote user directories.
//!
//! Fetches one batch of users from the directory API at startup and renders
//! them in a paginated table with page-size selection and direct page
//! navigation.

mod api;
mod app;
mod error;
mod events;
mod logging;
mod pagination;
mod tasks;
mod ui;

use std::io::{self, Stdout};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use app::App;
use events::EventHandler;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init()?;

    let result = run().await;

    logging::shutdown();
    Ok(result?)
}

/// Build the client, spawn the startup fetch, and drive the event loop.
async fn run() -> error::Result<()> {
    let client = api::UserClient::new()?;

    let (mut messages, spawner) = tasks::create_task_channel();
    spawner.spawn_fetch_users(&client, api::DEFAULT_BATCH_SIZE);

    let mut terminal = setup_terminal()?;
    let events = EventHandler::new();
    let mut app = App::new();

    while !app.should_quit() {
        terminal.draw(|frame| app.view(frame))?;

        // Drain completed background work before blocking on input.
        while let Ok(message) = messages.try_recv() {
            app.handle_api_message(message);
        }

        let event = events.next()?;
        app.update(event);
    }

    restore_terminal(&mut terminal)?;
    Ok(())
}

/// Enter raw mode and the alternate screen.
fn setup_terminal() -> error::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

/// Leave the alternate screen and restore the terminal.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> error::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
