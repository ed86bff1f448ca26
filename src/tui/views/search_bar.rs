//! Search input above the gallery.
//!
//! Focus and blur only change how the input is drawn; searching works the
//! same either way. Every edit reports back so the caller can re-filter on
//! each keystroke.

use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::theme;

const PLACEHOLDER: &str = "Search...";

/// Search query with a byte-offset cursor kept on char boundaries.
#[derive(Debug, Default)]
pub struct SearchBar {
    query: String,
    cursor: usize,
    focused: bool,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn cursor_position(&self) -> usize {
        self.query[..self.cursor].chars().count()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Apply a key to the input. Returns `true` when the query text changed.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char(c) => {
                self.insert_char(c);
                true
            }
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => {
                self.move_left();
                false
            }
            KeyCode::Right => {
                self.move_right();
                false
            }
            KeyCode::Home => {
                self.cursor = 0;
                false
            }
            KeyCode::End => {
                self.cursor = self.query.len();
                false
            }
            _ => false,
        }
    }

    fn insert_char(&mut self, c: char) {
        self.query.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    fn backspace(&mut self) -> bool {
        let Some((prev, _)) = self.query[..self.cursor].char_indices().next_back() else {
            return false;
        };
        self.query.drain(prev..self.cursor);
        self.cursor = prev;
        true
    }

    fn delete(&mut self) -> bool {
        let Some(c) = self.query[self.cursor..].chars().next() else {
            return false;
        };
        self.query.drain(self.cursor..self.cursor + c.len_utf8());
        true
    }

    fn move_left(&mut self) {
        if let Some((prev, _)) = self.query[..self.cursor].char_indices().next_back() {
            self.cursor = prev;
        }
    }

    fn move_right(&mut self) {
        if let Some(c) = self.query[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            theme::search_on()
        } else {
            theme::search_off()
        };
        let block = Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let line = if self.query.is_empty() {
            Line::from(Span::styled(PLACEHOLDER, theme::dim()))
        } else {
            Line::from(Span::styled(
                self.query.clone(),
                ratatui::style::Style::default().fg(theme::TEXT),
            ))
        };
        frame.render_widget(Paragraph::new(line), inner);

        if self.focused && inner.width > 0 && inner.height > 0 {
            let x = inner.x + (self.cursor_position() as u16).min(inner.width - 1);
            frame.set_cursor_position((x, inner.y));
        }
    }
}
