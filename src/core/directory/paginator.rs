//! Profile modal pagination.
//!
//! The paginator is either `Closed` or `Open` over an [`ActiveList`] at an
//! index. Navigation never leaves the list: `next` at the last record and
//! `prev` at the first are no-ops, and the corresponding control is hidden
//! rather than disabled.

use thiserror::Error;

use super::models::{ActiveList, EmployeeRecord};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaginatorError {
    #[error("Index {index} is outside a list of {len} employees")]
    IndexOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, Default)]
enum PaginatorState {
    #[default]
    Closed,
    Open { list: ActiveList, index: usize },
}

/// Which pagination controls are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaginationControls {
    /// The shared container holding both buttons.
    pub container: bool,
    pub prev: bool,
    pub next: bool,
}

impl PaginationControls {
    pub const HIDDEN: Self = Self {
        container: false,
        prev: false,
        next: false,
    };

    /// Whether the prev button is actually visible on screen.
    pub fn prev_visible(self) -> bool {
        self.container && self.prev
    }

    /// Whether the next button is actually visible on screen.
    pub fn next_visible(self) -> bool {
        self.container && self.next
    }
}

/// Tracks which record the profile modal shows within the active list.
#[derive(Debug, Clone, Default)]
pub struct ModalPaginator {
    state: PaginatorState,
}

impl ModalPaginator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open (or re-open) over `list` at `index`.
    pub fn open_at(&mut self, list: ActiveList, index: usize) -> Result<(), PaginatorError> {
        if index >= list.len() {
            return Err(PaginatorError::IndexOutOfRange {
                index,
                len: list.len(),
            });
        }
        self.state = PaginatorState::Open { list, index };
        Ok(())
    }

    /// Advance to the next record. Returns `false` if closed or already at the end.
    pub fn next(&mut self) -> bool {
        match &mut self.state {
            PaginatorState::Open { list, index } if *index + 1 < list.len() => {
                *index += 1;
                true
            }
            _ => false,
        }
    }

    /// Step back to the previous record. Returns `false` if closed or at the start.
    pub fn prev(&mut self) -> bool {
        match &mut self.state {
            PaginatorState::Open { index, .. } if *index > 0 => {
                *index -= 1;
                true
            }
            _ => false,
        }
    }

    pub fn close(&mut self) {
        self.state = PaginatorState::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, PaginatorState::Open { .. })
    }

    pub fn index(&self) -> Option<usize> {
        match &self.state {
            PaginatorState::Open { index, .. } => Some(*index),
            PaginatorState::Closed => None,
        }
    }

    pub fn active_list(&self) -> Option<&ActiveList> {
        match &self.state {
            PaginatorState::Open { list, .. } => Some(list),
            PaginatorState::Closed => None,
        }
    }

    /// The record at the current index.
    pub fn current(&self) -> Option<&EmployeeRecord> {
        match &self.state {
            PaginatorState::Open { list, index } => list.get(*index),
            PaginatorState::Closed => None,
        }
    }

    /// Visibility of the prev/next controls for the current position.
    pub fn controls(&self) -> PaginationControls {
        match &self.state {
            PaginatorState::Closed => PaginationControls::HIDDEN,
            PaginatorState::Open { list, index } => PaginationControls {
                container: list.len() > 1,
                prev: *index != 0,
                next: *index + 1 != list.len(),
            },
        }
    }
}
