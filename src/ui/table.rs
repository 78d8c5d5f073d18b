//! The paginated user table view.
//!
//! Owns the fetched record set and its pagination state, handles navigation
//! keys, and renders the table plus the control bar.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};
use tracing::debug;

use super::columns::COLUMNS;
use super::input::{NumberInput, NumberInputAction};
use crate::api::UserRecord;
use crate::pagination::PageState;

/// The paginated table over the fetched user records.
pub struct TableView {
    /// The full record set; the view renders a window of it.
    records: Vec<UserRecord>,
    /// Pagination state.
    pager: PageState,
    /// Active page-number entry, if the user is typing one.
    jump: Option<NumberInput>,
    /// Whether the initial fetch is still in flight.
    loading: bool,
}

impl TableView {
    /// Create an empty view.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            pager: PageState::new(),
            jump: None,
            loading: false,
        }
    }

    /// Set the loading flag.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Whether the initial fetch is still in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Total number of fetched records.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// The pagination state.
    pub fn pager(&self) -> &PageState {
        &self.pager
    }

    /// Whether a page-number entry is in progress.
    pub fn is_entering_page(&self) -> bool {
        self.jump.is_some()
    }

    /// Replace the record set wholesale and leave the loading state.
    pub fn set_records(&mut self, records: Vec<UserRecord>) {
        self.pager.set_total(records.len());
        self.records = records;
        self.loading = false;
    }

    /// The records visible on the current page.
    pub fn visible_records(&self) -> &[UserRecord] {
        &self.records[self.pager.page_range()]
    }

    /// Handle a key event.
    ///
    /// Returns true when the key was consumed. While a page-number entry is
    /// active every key is consumed, so global shortcuts cannot fire
    /// mid-entry (Ctrl+C is intercepted before the view).
    pub fn handle_input(&mut self, key: KeyEvent) -> bool {
        if let Some(input) = self.jump.as_mut() {
            match input.handle_input(key) {
                Some(NumberInputAction::Commit(value)) => {
                    if !value.is_empty() {
                        if let Some(page) = self.pager.jump_to(&value) {
                            debug!(page, "Jumped to page");
                        }
                    }
                    self.jump = None;
                }
                Some(NumberInputAction::Cancel) => {
                    self.jump = None;
                }
                None => {}
            }
            return true;
        }

        match key.code {
            KeyCode::Char('h') | KeyCode::Left => {
                self.pager.previous_page();
                true
            }
            KeyCode::Char('l') | KeyCode::Right => {
                self.pager.next_page();
                true
            }
            KeyCode::Char('g') | KeyCode::Home => {
                self.pager.first_page();
                true
            }
            KeyCode::Char('G') | KeyCode::End => {
                self.pager.last_page();
                true
            }
            KeyCode::Char('[') => {
                self.pager.shrink_page_size();
                true
            }
            KeyCode::Char(']') => {
                self.pager.grow_page_size();
                true
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                self.jump = Some(NumberInput::with_digit(c));
                true
            }
            _ => false,
        }
    }

    /// Render the table area.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if self.loading && self.records.is_empty() {
            let loading = Paragraph::new("Loading users...")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title(" Users "));
            frame.render_widget(loading, area);
            return;
        }

        let header = Row::new(
            COLUMNS
                .iter()
                .map(|c| Cell::from(c.label))
                .collect::<Vec<_>>(),
        )
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

        let rows: Vec<Row> = self
            .visible_records()
            .iter()
            .map(|record| Row::new(COLUMNS.iter().map(|c| Cell::from(c.cell(record)))))
            .collect();

        let widths: Vec<_> = COLUMNS.iter().map(|c| c.width).collect();

        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::default().borders(Borders::ALL).title(" Users "))
            .column_spacing(2);

        frame.render_widget(table, area);
    }

    /// Render the control bar: navigation arrows, page label, jump entry,
    /// and page-size indicator.
    pub fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let enabled = Style::default().fg(Color::Cyan);
        let disabled = Style::default().fg(Color::DarkGray);
        let dim = Style::default().fg(Color::DarkGray);

        let back = if self.pager.can_previous() { enabled } else { disabled };
        let forward = if self.pager.can_next() { enabled } else { disabled };

        let mut spans = vec![
            Span::styled(" |< ", back),
            Span::styled("< ", back),
            Span::styled(
                format!(
                    "page {} of {}",
                    self.pager.page_index() + 1,
                    self.pager.page_count()
                ),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(" >", forward),
            Span::styled(" >| ", forward),
            Span::styled(format!(" {} users ", self.pager.total()), dim),
            Span::styled(format!(" {}/page ", self.pager.page_size()), dim),
        ];

        if let Some(input) = &self.jump {
            spans.push(Span::raw("  "));
            spans.push(Span::styled("Go to page: ", dim));
            spans.push(Span::styled(
                format!("{}_", input.value()),
                Style::default().fg(Color::Yellow),
            ));
        } else {
            spans.push(Span::styled(
                "  h/l page  g/G ends  0-9 jump  [ ] size  ? help  q quit",
                dim,
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

impl Default for TableView {
    fn default() -> Self {
        Self::new()
    }
}
