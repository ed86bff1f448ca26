//! Employee profile modal overlay.
//!
//! `show` replaces whatever profile is displayed; `close` hides the overlay
//! and is a no-op when already hidden. Pagination state lives in
//! [`ModalPaginator`](crate::core::directory::ModalPaginator); this view only
//! draws the prev/next buttons the paginator says are visible.

use std::cell::Cell;

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::core::directory::{format_dob, EmployeeRecord, PaginationControls};
use crate::tui::theme;

const MODAL_WIDTH: u16 = 64;
const MODAL_HEIGHT: u16 = 13;
const CLOSE_LABEL: &str = "[X]";
const PREV_LABEL: &str = "[ Prev ]";
const NEXT_LABEL: &str = "[ Next ]";

/// Display strings for one employee's detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: String,
    pub picture: String,
    pub name: String,
    pub email: String,
    pub city: String,
    pub phone: String,
    pub address: String,
    pub birthday: String,
}

impl Profile {
    pub fn from_record(record: &EmployeeRecord) -> Self {
        Self {
            id: record.id().to_string(),
            picture: record.picture.medium.clone(),
            name: record.full_name(),
            email: record.email.clone(),
            city: record.location.city.clone(),
            phone: record.phone.clone(),
            address: record.street_address(),
            birthday: format_dob(&record.dob.date),
        }
    }

    fn lines(&self, width: u16) -> Vec<Line<'static>> {
        vec![
            Line::from(vec![
                Span::styled("\u{25a3} ", theme::muted()),
                Span::styled(self.picture.clone(), theme::dim()),
            ]),
            Line::from(Span::styled(self.name.clone(), theme::name())),
            Line::from(Span::styled(
                self.email.clone(),
                Style::default().fg(theme::TEXT),
            )),
            Line::from(Span::styled(self.city.clone(), theme::muted())),
            Line::from(Span::styled(
                "\u{2500}".repeat(usize::from(width)),
                theme::dim(),
            )),
            Line::from(Span::styled(
                self.phone.clone(),
                Style::default().fg(theme::TEXT),
            )),
            Line::from(Span::styled(
                self.address.clone(),
                Style::default().fg(theme::TEXT),
            )),
            Line::from(vec![
                Span::styled("Birthday: ", theme::muted()),
                Span::styled(self.birthday.clone(), Style::default().fg(theme::TEXT)),
            ]),
        ]
    }
}

/// Where a mouse click landed relative to the open modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalHit {
    Close,
    Prev,
    Next,
    /// Inside the modal box but not on a button.
    Inside,
    /// On the backdrop.
    Outside,
}

#[derive(Debug, Clone, Copy, Default)]
struct Hitboxes {
    modal: Rect,
    close: Rect,
    prev: Option<Rect>,
    next: Option<Rect>,
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
}

/// Compute a centered rectangle with fixed dimensions.
fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[derive(Debug, Default)]
pub struct ProfileModal {
    profile: Option<Profile>,
    hitboxes: Cell<Hitboxes>,
}

impl ProfileModal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Display `record`, replacing any profile already shown.
    pub fn show(&mut self, record: &EmployeeRecord) {
        self.profile = Some(Profile::from_record(record));
    }

    pub fn close(&mut self) {
        self.profile = None;
        self.hitboxes.set(Hitboxes::default());
    }

    pub fn is_open(&self) -> bool {
        self.profile.is_some()
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    /// Classify a click against the last drawn frame.
    pub fn hit_test(&self, column: u16, row: u16) -> ModalHit {
        let boxes = self.hitboxes.get();
        if contains(boxes.close, column, row) {
            ModalHit::Close
        } else if boxes.prev.is_some_and(|r| contains(r, column, row)) {
            ModalHit::Prev
        } else if boxes.next.is_some_and(|r| contains(r, column, row)) {
            ModalHit::Next
        } else if contains(boxes.modal, column, row) {
            ModalHit::Inside
        } else {
            ModalHit::Outside
        }
    }

    /// Render the modal centered in `area` with the given pagination controls.
    pub fn render(&self, frame: &mut Frame, area: Rect, controls: PaginationControls) {
        let Some(ref profile) = self.profile else {
            return;
        };

        let modal = centered_fixed(MODAL_WIDTH, MODAL_HEIGHT, area);
        frame.render_widget(Clear, modal);

        let block = Block::default()
            .title(" Employee ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .style(Style::default().bg(theme::BG_BASE));
        let inner = block.inner(modal);
        frame.render_widget(block, modal);

        let close_width = CLOSE_LABEL.len() as u16;
        let close = Rect::new(
            (modal.x + modal.width).saturating_sub(close_width + 1),
            modal.y,
            close_width.min(modal.width),
            1,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(CLOSE_LABEL, theme::name())),
            close,
        );

        let body_height = inner.height.saturating_sub(1);
        let body = Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), body_height);
        frame.render_widget(Paragraph::new(profile.lines(body.width)), body);

        let mut boxes = Hitboxes {
            modal,
            close,
            prev: None,
            next: None,
        };

        if controls.container && inner.height > 0 {
            let row = inner.y + inner.height - 1;
            if controls.prev {
                let rect = Rect::new(inner.x + 1, row, PREV_LABEL.len() as u16, 1);
                frame.render_widget(Paragraph::new(Span::styled(PREV_LABEL, theme::button())), rect);
                boxes.prev = Some(rect);
            }
            if controls.next {
                let width = NEXT_LABEL.len() as u16;
                let rect = Rect::new(
                    (inner.x + inner.width).saturating_sub(width + 1),
                    row,
                    width,
                    1,
                );
                frame.render_widget(Paragraph::new(Span::styled(NEXT_LABEL, theme::button())), rect);
                boxes.next = Some(rect);
            }
        }

        self.hitboxes.set(boxes);
    }
}
