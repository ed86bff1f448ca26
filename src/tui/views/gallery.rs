//! Employee card gallery.
//!
//! Cards are projected from the active list in one step together with their
//! bindings: each card remembers its position in the list it was built from
//! and carries the record id as a hidden value. Replacing the list replaces
//! every card, so nothing built for an older list survives a re-render.
//!
//! The grid is laid out as rows of fixed-height cards and scrolls by whole
//! rows to keep the selected card visible. Mouse hit-testing uses the same
//! layout function as drawing.

use std::cell::Cell;

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::core::directory::EmployeeRecord;
use crate::tui::theme;

/// Minimum width of one card, borders included.
pub const CARD_WIDTH: u16 = 36;
/// Height of one card: border, picture, name, email, place, border.
pub const CARD_HEIGHT: u16 = 6;

/// One rendered card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Position within the list the card was rendered from.
    pub position: usize,
    /// Hidden record id, read back when the card is activated.
    pub id: String,
    pub thumbnail: String,
    pub name: String,
    pub email: String,
    pub place: String,
}

/// Project records into cards, keyed by their position in `records`.
pub fn render_cards(records: &[EmployeeRecord]) -> Vec<Card> {
    records
        .iter()
        .enumerate()
        .map(|(position, record)| Card {
            position,
            id: record.id().to_string(),
            thumbnail: record.picture.thumbnail.clone(),
            name: record.full_name(),
            email: record.email.clone(),
            place: record.city_state(),
        })
        .collect()
}

/// What the gallery area shows besides cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryStatus {
    /// Fetch not finished (or failed).
    Loading,
    /// A search matched nothing.
    NoResults,
    Ready,
}

fn grid_columns(width: u16) -> usize {
    usize::from((width / CARD_WIDTH).max(1))
}

/// Rectangles of the cards visible in `area`, paired with card positions.
fn grid_cells(area: Rect, count: usize, selected: usize) -> Vec<(usize, Rect)> {
    if area.width == 0 || area.height == 0 || count == 0 {
        return Vec::new();
    }

    let cols = grid_columns(area.width);
    let card_width = area.width / cols as u16;
    let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));
    let total_rows = count.div_ceil(cols);
    let first_row = (selected / cols).saturating_sub(visible_rows - 1);
    let bottom = area.y + area.height;

    let mut cells = Vec::with_capacity(visible_rows * cols);
    for row in first_row..total_rows.min(first_row + visible_rows) {
        let y = area.y + (row - first_row) as u16 * CARD_HEIGHT;
        if y >= bottom {
            break;
        }
        for col in 0..cols {
            let position = row * cols + col;
            if position >= count {
                break;
            }
            let x = area.x + col as u16 * card_width;
            let height = CARD_HEIGHT.min(bottom - y);
            cells.push((position, Rect::new(x, y, card_width, height)));
        }
    }
    cells
}

/// Grid of cards for the current active list.
#[derive(Debug, Default)]
pub struct GalleryState {
    cards: Vec<Card>,
    selected: usize,
    /// Area the grid was last drawn into; used for hit-testing and row moves.
    viewport: Cell<Rect>,
}

impl GalleryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every card and binding with ones built from `records`.
    pub fn set_records(&mut self, records: &[EmployeeRecord]) {
        self.cards = render_cards(records);
        self.selected = self.selected.min(self.cards.len().saturating_sub(1));
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Hidden id stored on the card at `position`.
    pub fn bound_id(&self, position: usize) -> Option<&str> {
        self.cards.get(position).map(|card| card.id.as_str())
    }

    fn columns(&self) -> usize {
        grid_columns(self.viewport.get().width)
    }

    pub fn select(&mut self, position: usize) {
        if position < self.cards.len() {
            self.selected = position;
        }
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.cards.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_down(&mut self) {
        let target = self.selected + self.columns();
        if target < self.cards.len() {
            self.selected = target;
        }
    }

    pub fn select_up(&mut self) {
        self.selected = self.selected.checked_sub(self.columns()).unwrap_or(self.selected);
    }

    /// Card position under a terminal cell, if any.
    pub fn card_at(&self, column: u16, row: u16) -> Option<usize> {
        grid_cells(self.viewport.get(), self.cards.len(), self.selected)
            .into_iter()
            .find(|(_, rect)| {
                column >= rect.x
                    && column < rect.x + rect.width
                    && row >= rect.y
                    && row < rect.y + rect.height
            })
            .map(|(position, _)| position)
    }

    // ── Rendering ────────────────────────────────────────────────────────

    pub fn render(&self, frame: &mut Frame, area: Rect, status: GalleryStatus) {
        self.viewport.set(area);

        let message = match status {
            GalleryStatus::Loading => Some(("Loading employees...", theme::muted())),
            GalleryStatus::NoResults => Some((
                "No results found",
                Style::default().fg(theme::WARNING),
            )),
            GalleryStatus::Ready => None,
        };
        if let Some((text, style)) = message {
            let lines = vec![Line::raw(""), Line::from(Span::styled(text, style))];
            frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
            return;
        }

        for (position, rect) in grid_cells(area, self.cards.len(), self.selected) {
            self.render_card(frame, rect, &self.cards[position], position == self.selected);
        }
    }

    fn render_card(&self, frame: &mut Frame, area: Rect, card: &Card, selected: bool) {
        let border_style = if selected {
            theme::card_selected()
        } else {
            theme::card_default()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);

        let lines = vec![
            Line::from(vec![
                Span::styled("\u{25a3} ", theme::muted()),
                Span::styled(card.thumbnail.clone(), theme::dim()),
            ]),
            Line::from(Span::styled(card.name.clone(), theme::name())),
            Line::from(Span::styled(
                card.email.clone(),
                Style::default().fg(theme::TEXT),
            )),
            Line::from(Span::styled(card.place.clone(), theme::muted())),
        ];

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
