use crate::core::directory::EmployeeRecord;

/// Events flowing through the Elm-architecture event loop.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Periodic tick for notification TTLs.
    Tick,
    /// Raw terminal input (keyboard/mouse).
    Input(crossterm::event::Event),
    /// The startup fetch returned the session's records.
    EmployeesLoaded(Vec<EmployeeRecord>),
    /// The startup fetch failed. Logged only; the UI keeps waiting.
    EmployeesFailed(String),
    /// A resolved action to execute.
    Action(Action),
    /// Request to quit the application.
    Quit,
}

/// High-level actions dispatched by the input mapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Gallery
    SelectPrev,
    SelectNext,
    SelectUp,
    SelectDown,
    /// Open the profile modal for the card at this grid position.
    OpenCard(usize),

    // Search
    FocusSearch,
    BlurSearch,

    // Profile modal
    NextProfile,
    PrevProfile,
    CloseProfile,

    // Modals
    ShowHelp,
    CloseHelp,

    // Application
    Quit,
}

/// Which part of the screen has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Focus {
    Gallery,
    Search,
}

impl Focus {
    pub fn label(self) -> &'static str {
        match self {
            Focus::Gallery => "Gallery",
            Focus::Search => "Search",
        }
    }
}

/// A timed confirmation shown in the top-right overlay.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    /// Ticks remaining before auto-dismiss.
    pub ttl_ticks: u32,
}
