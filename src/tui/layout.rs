//! Root layout computation: search bar, card gallery, status bar.

use ratatui::layout::{Constraint, Layout, Rect};

/// Height of the bordered search input.
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Computed layout regions for a single frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppLayout {
    /// Search input (top).
    pub search: Rect,
    /// Card gallery.
    pub gallery: Rect,
    /// Status bar (bottom row).
    pub status: Rect,
}

impl AppLayout {
    /// Compute layout regions from the terminal area.
    pub fn compute(area: Rect) -> Self {
        let rows = Layout::vertical([
            Constraint::Length(SEARCH_BAR_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

        AppLayout {
            search: rows[0],
            gallery: rows[1],
            status: rows[2],
        }
    }
}
