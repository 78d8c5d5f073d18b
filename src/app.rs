//! Main application state and event loop model.
//!
//! This module implements The Elm Architecture (TEA) pattern: `App` is the
//! model, `update` is the reducer, and `view` renders the current state.

use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tracing::{debug, error, info, trace};

use crate::events::Event;
use crate::tasks::ApiMessage;
use crate::ui::TableView;

/// The current view/screen state of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// The startup fetch is in flight.
    #[default]
    Loading,
    /// Displaying the paginated user table.
    UserTable,
    /// Help screen is displayed.
    Help,
    /// Application is in the process of exiting.
    Exiting,
}

/// The main application struct that holds all state.
pub struct App {
    /// The current view state.
    state: AppState,
    /// Whether the application should quit.
    should_quit: bool,
    /// The paginated user table.
    table_view: TableView,
}

impl App {
    /// Create a new application instance.
    pub fn new() -> Self {
        debug!("Creating new application instance");

        let mut table_view = TableView::new();
        table_view.set_loading(true);

        Self {
            state: AppState::Loading,
            should_quit: false,
            table_view,
        }
    }

    /// Get a reference to the table view.
    pub fn table_view(&self) -> &TableView {
        &self.table_view
    }

    /// Get a mutable reference to the table view.
    pub fn table_view_mut(&mut self) -> &mut TableView {
        &mut self.table_view
    }

    /// Returns whether the application should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the current application state.
    pub fn state(&self) -> AppState {
        self.state
    }

    /// Apply a fetch result delivered by the task channel.
    ///
    /// A failed fetch is logged and otherwise swallowed: the view leaves the
    /// loading state with its record set untouched (empty on first load) and
    /// no error is shown in the interface.
    pub fn handle_api_message(&mut self, message: ApiMessage) {
        match message {
            ApiMessage::UsersFetched(Ok(users)) => {
                info!(count = users.len(), "User batch loaded");
                self.table_view.set_records(users);
                if self.state == AppState::Loading {
                    self.state = AppState::UserTable;
                }
            }
            ApiMessage::UsersFetched(Err(e)) => {
                error!(error = %e, "User fetch failed");
                self.table_view.set_loading(false);
                if self.state == AppState::Loading {
                    self.state = AppState::UserTable;
                }
            }
        }
    }

    /// Update the application state based on an event.
    ///
    /// All state changes flow through this method for predictable behavior.
    pub fn update(&mut self, event: Event) {
        match event {
            Event::Quit => {
                info!("Quit event received");
                self.should_quit = true;
                self.state = AppState::Exiting;
            }
            Event::Key(key_event) => {
                trace!(key = ?key_event.code, modifiers = ?key_event.modifiers, "Key event");
                self.handle_key_event(key_event);
            }
            Event::Resize(width, height) => {
                trace!(width, height, "Terminal resize event");
                // Resize is handled automatically by ratatui.
            }
            Event::Tick => {}
        }
    }

    /// Handle keyboard input events.
    fn handle_key_event(&mut self, key_event: KeyEvent) {
        use crossterm::event::{KeyCode, KeyModifiers};

        // Quit on Ctrl+C, even mid page entry.
        if key_event.code == KeyCode::Char('c') && key_event.modifiers == KeyModifiers::CONTROL {
            self.should_quit = true;
            self.state = AppState::Exiting;
            return;
        }

        match self.state {
            AppState::Loading | AppState::UserTable => {
                if self.table_view.handle_input(key_event) {
                    return;
                }

                match key_event.code {
                    KeyCode::Char('q') if key_event.modifiers == KeyModifiers::NONE => {
                        self.should_quit = true;
                        self.state = AppState::Exiting;
                    }
                    KeyCode::Char('?') => {
                        self.state = AppState::Help;
                    }
                    _ => {}
                }
            }
            AppState::Help => {
                if matches!(
                    key_event.code,
                    KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?')
                ) {
                    self.state = AppState::UserTable;
                }
            }
            AppState::Exiting => {}
        }
    }

    /// Render the application UI.
    ///
    /// The view is a pure function of the current state.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(1),    // Content
                Constraint::Length(1), // Control bar
            ])
            .split(area);

        self.render_header(frame, chunks[0]);
        self.render_content(frame, chunks[1]);
        self.render_footer(frame, chunks[2]);
    }

    /// Render the application header.
    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let title = Paragraph::new("Userdeck")
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        frame.render_widget(title, area);
    }

    /// Render the main content area based on current state.
    fn render_content(&mut self, frame: &mut Frame, area: Rect) {
        match self.state {
            AppState::Loading | AppState::UserTable => {
                self.table_view.render(frame, area);
            }
            AppState::Help => {
                let paragraph = Paragraph::new(self.render_help_view())
                    .block(Block::default().borders(Borders::NONE))
                    .alignment(Alignment::Center);
                frame.render_widget(paragraph, area);
            }
            AppState::Exiting => {
                let goodbye = vec![
                    Line::raw(""),
                    Line::styled("Goodbye!", Style::default().fg(Color::Green)),
                ];
                let paragraph = Paragraph::new(goodbye).alignment(Alignment::Center);
                frame.render_widget(paragraph, area);
            }
        }
    }

    /// Render the footer/control bar.
    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        match self.state {
            AppState::Loading | AppState::UserTable => {
                self.table_view.render_status_bar(frame, area);
            }
            _ => {
                let hint = Paragraph::new("Press Esc or q to go back")
                    .style(Style::default().fg(Color::DarkGray));
                frame.render_widget(hint, area);
            }
        }
    }

    /// Render help view content.
    fn render_help_view(&self) -> Vec<Line<'static>> {
        vec![
            Line::raw(""),
            Line::styled("Help", Style::default().fg(Color::Cyan)),
            Line::raw(""),
            Line::styled("Navigation:", Style::default().fg(Color::Yellow)),
            Line::raw("  h / ←   - Previous page"),
            Line::raw("  l / →   - Next page"),
            Line::raw("  g / Home - First page"),
            Line::raw("  G / End  - Last page"),
            Line::raw("  0-9     - Type a page number, Enter to jump, Esc to cancel"),
            Line::raw(""),
            Line::styled("Page size:", Style::default().fg(Color::Yellow)),
            Line::raw("  [       - Fewer records per page"),
            Line::raw("  ]       - More records per page"),
            Line::raw(""),
            Line::styled("Global:", Style::default().fg(Color::Yellow)),
            Line::raw("  ?       - Show this help"),
            Line::raw("  q       - Quit application"),
            Line::raw("  Ctrl+C  - Quit application"),
            Line::raw(""),
            Line::styled(
                "Press Esc or q to close this help screen",
                Style::default().fg(Color::DarkGray),
            ),
        ]
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::UserRecord;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn users(count: usize) -> Vec<UserRecord> {
        (0..count)
            .map(|i| UserRecord {
                id: i as u64,
                first_name: format!("User{}", i),
                email: format!("user{}@example.com", i),
                phone_number: format!("555-{:04}", i),
                uid: format!("uid-{}", i),
            })
            .collect()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.update(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    #[test]
    fn test_app_new() {
        let app = App::new();
        assert_eq!(app.state(), AppState::Loading);
        assert!(!app.should_quit());
        assert!(app.table_view().is_loading());
    }

    #[test]
    fn test_table_view_accessors() {
        let mut app = App::new();
        app.table_view_mut().set_records(users(3));
        assert_eq!(app.table_view().record_count(), 3);
    }

    #[test]
    fn test_quit_on_q_key() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
        assert_eq!(app.state(), AppState::Exiting);
    }

    #[test]
    fn test_quit_on_ctrl_c() {
        let mut app = App::new();
        let key_event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        app.update(Event::Key(key_event));
        assert!(app.should_quit());
        assert_eq!(app.state(), AppState::Exiting);
    }

    #[test]
    fn test_quit_event() {
        let mut app = App::new();
        app.update(Event::Quit);
        assert!(app.should_quit());
        assert_eq!(app.state(), AppState::Exiting);
    }

    #[test]
    fn test_resize_event_does_not_change_state() {
        let mut app = App::new();
        let initial_state = app.state();
        app.update(Event::Resize(100, 50));
        assert_eq!(app.state(), initial_state);
        assert!(!app.should_quit());
    }

    #[test]
    fn test_successful_fetch_fills_table_and_leaves_loading() {
        let mut app = App::new();
        app.handle_api_message(ApiMessage::UsersFetched(Ok(users(100))));

        assert_eq!(app.state(), AppState::UserTable);
        assert!(!app.table_view().is_loading());
        assert_eq!(app.table_view().record_count(), 100);
        assert_eq!(app.table_view().pager().page_count(), 10);
    }

    #[test]
    fn test_failed_fetch_keeps_empty_table() {
        let mut app = App::new();
        app.handle_api_message(ApiMessage::UsersFetched(Err("connection refused".into())));

        // The UI continues with whatever it held: nothing.
        assert_eq!(app.state(), AppState::UserTable);
        assert!(!app.table_view().is_loading());
        assert_eq!(app.table_view().record_count(), 0);
        assert_eq!(app.table_view().pager().page_count(), 1);
        assert!(!app.should_quit());
    }

    #[test]
    fn test_failed_fetch_preserves_existing_records() {
        let mut app = App::new();
        app.handle_api_message(ApiMessage::UsersFetched(Ok(users(20))));
        app.handle_api_message(ApiMessage::UsersFetched(Err("timeout".into())));
        assert_eq!(app.table_view().record_count(), 20);
    }

    #[test]
    fn test_help_toggle() {
        let mut app = App::new();
        app.handle_api_message(ApiMessage::UsersFetched(Ok(users(5))));

        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.state(), AppState::Help);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.state(), AppState::UserTable);
    }

    #[test]
    fn test_q_closes_help_without_quitting() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.state(), AppState::Help);

        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.state(), AppState::UserTable);
        assert!(!app.should_quit());
    }

    #[test]
    fn test_navigation_keys_reach_table() {
        let mut app = App::new();
        app.handle_api_message(ApiMessage::UsersFetched(Ok(users(30))));

        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.table_view().pager().page_index(), 1);

        press(&mut app, KeyCode::Char('h'));
        assert_eq!(app.table_view().pager().page_index(), 0);
    }

    #[test]
    fn test_page_entry_blocks_quit_key() {
        let mut app = App::new();
        app.handle_api_message(ApiMessage::UsersFetched(Ok(users(30))));

        press(&mut app, KeyCode::Char('2'));
        assert!(app.table_view().is_entering_page());

        // 'q' is swallowed by the entry; the app keeps running.
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit());

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.table_view().pager().page_index(), 1);
    }

    #[test]
    fn test_ctrl_c_quits_during_page_entry() {
        let mut app = App::new();
        app.handle_api_message(ApiMessage::UsersFetched(Ok(users(30))));

        press(&mut app, KeyCode::Char('2'));
        let key_event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        app.update(Event::Key(key_event));
        assert!(app.should_quit());
    }
}
