//! Numeric entry widget for direct page navigation.

use crossterm::event::{KeyCode, KeyEvent};

/// Longest accepted entry; no realistic page count needs more digits.
const MAX_DIGITS: usize = 6;

/// Terminal actions produced by the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumberInputAction {
    /// Enter was pressed; carries the buffered digits (possibly empty).
    Commit(String),
    /// Esc was pressed; the entry is abandoned.
    Cancel,
}

/// A digits-only input buffer for page-number entry.
///
/// Only ASCII digits are accepted, so a committed non-empty buffer always
/// parses as a non-negative integer. Committing an empty buffer is the
/// caller's cue to leave the current page unchanged.
#[derive(Debug, Clone, Default)]
pub struct NumberInput {
    value: String,
}

impl NumberInput {
    /// Create an empty input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an input seeded with one digit.
    pub fn with_digit(digit: char) -> Self {
        let mut input = Self::new();
        input.push_digit(digit);
        input
    }

    /// The buffered digits.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether nothing has been entered.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Append a digit, ignoring anything else.
    fn push_digit(&mut self, c: char) {
        if c.is_ascii_digit() && self.value.len() < MAX_DIGITS {
            self.value.push(c);
        }
    }

    /// Handle a key event.
    ///
    /// Digits and Backspace edit the buffer; Enter and Esc terminate the
    /// entry and produce an action. Every other key is swallowed so stray
    /// shortcuts cannot fire while the user is typing a page number.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<NumberInputAction> {
        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                self.push_digit(c);
                None
            }
            KeyCode::Backspace => {
                self.value.pop();
                None
            }
            KeyCode::Enter => Some(NumberInputAction::Commit(std::mem::take(&mut self.value))),
            KeyCode::Esc => {
                self.value.clear();
                Some(NumberInputAction::Cancel)
            }
            _ => None,
        }
    }
}
