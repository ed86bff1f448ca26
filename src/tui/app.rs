use std::cell::Cell;
use std::io;
use std::time::Duration;

use crossterm::event::{
    Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use tokio::sync::mpsc;

use super::events::{Action, AppEvent, Focus, Notification};
use super::layout::AppLayout;
use super::services::Services;
use super::theme;
use super::views::gallery::{GalleryState, GalleryStatus};
use super::views::profile_modal::{ModalHit, ProfileModal};
use super::views::search_bar::SearchBar;
use crate::core::directory::{search, ActiveList, EmployeeRecord, ModalPaginator, RecordStore};

/// Central application state (Elm architecture).
///
/// Owns the fetched record store and the active list; the terminal is only
/// ever a projection of this state.
pub struct AppState {
    /// Whether the app is still running.
    pub running: bool,
    /// Which region has keyboard focus.
    pub focus: Focus,
    /// Records fetched at startup (None until the fetch succeeds).
    store: Option<RecordStore>,
    /// Records currently rendered and eligible for modal navigation.
    active: ActiveList,
    /// Whether the "No results found" region is shown.
    no_results: bool,
    gallery: GalleryState,
    search: SearchBar,
    paginator: ModalPaginator,
    modal: ProfileModal,
    /// Whether the help modal is open.
    pub show_help: bool,
    /// Active notifications (max 3 visible).
    pub notifications: Vec<Notification>,
    /// Regions from the last frame, for mouse hit-testing.
    last_layout: Cell<AppLayout>,
    /// Receiver for backend events.
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    /// Backend services handle.
    services: Services,
}

impl AppState {
    pub fn new(event_rx: mpsc::UnboundedReceiver<AppEvent>, services: Services) -> Self {
        Self {
            running: true,
            focus: Focus::Gallery,
            store: None,
            active: ActiveList::default(),
            no_results: false,
            gallery: GalleryState::new(),
            search: SearchBar::new(),
            paginator: ModalPaginator::new(),
            modal: ProfileModal::new(),
            show_help: false,
            notifications: Vec::new(),
            last_layout: Cell::new(AppLayout::default()),
            event_rx,
            services,
        }
    }

    // ── Elm event loop ──────────────────────────────────────────────────

    /// Main event loop: render → select → update → loop.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        tick_rate: Duration,
    ) -> io::Result<()> {
        let mut tick_interval = tokio::time::interval(tick_rate);
        let mut event_stream = EventStream::new();

        while self.running {
            // Render
            terminal.draw(|frame| self.render(frame))?;

            // Select next event
            tokio::select! {
                _ = tick_interval.tick() => {
                    self.on_tick();
                }
                Some(event) = self.event_rx.recv() => {
                    self.handle_event(event);
                }
                Some(Ok(crossterm_event)) = event_stream.next() => {
                    self.handle_event(AppEvent::Input(crossterm_event));
                }
            }
        }

        Ok(())
    }

    /// Kick off the one-shot directory fetch.
    pub fn load_directory(&self) {
        log::info!("Requesting employee directory");
        self.services.spawn_fetch();
    }

    // ── Event handling ──────────────────────────────────────────────────

    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Input(crossterm_event) => {
                if let Some(action) = self.map_input(&crossterm_event) {
                    self.handle_action(action);
                }
            }
            AppEvent::EmployeesLoaded(records) => self.on_directory_loaded(records),
            AppEvent::EmployeesFailed(error) => {
                // Logged only: the gallery keeps showing its loading state.
                log::error!("Failed to fetch employee directory: {error}");
            }
            AppEvent::Action(action) => self.handle_action(action),
            AppEvent::Tick => self.on_tick(),
            AppEvent::Quit => self.running = false,
        }
    }

    fn on_directory_loaded(&mut self, records: Vec<EmployeeRecord>) {
        if self.store.is_some() {
            log::warn!("Ignoring duplicate directory payload");
            return;
        }

        let store = RecordStore::new(records);
        log::info!("Loaded {} employees", store.len());
        self.push_notification(format!("Loaded {} employees", store.len()));
        self.no_results = false;
        self.replace_active_list(store.full_list());
        self.store = Some(store);
    }

    /// Re-filter the full store from scratch with the current query.
    fn run_search(&mut self) {
        let Some(ref store) = self.store else {
            return;
        };
        let outcome = search(store, self.search.query());
        self.no_results = outcome.no_results;
        self.replace_active_list(outcome.results);
    }

    /// Make `list` the active list and rebuild the grid and its bindings from it.
    fn replace_active_list(&mut self, list: ActiveList) {
        self.active = list;
        self.gallery.set_records(&self.active);
    }

    /// Open the profile modal for the card at `position` in the rendered grid.
    fn open_card(&mut self, position: usize) {
        let Some(id) = self.gallery.bound_id(position) else {
            return;
        };
        let Some(record) = self.active.iter().find(|r| r.id() == id).cloned() else {
            log::warn!("Card {position} is bound to unknown employee {id}");
            return;
        };

        if let Err(e) = self.paginator.open_at(self.active.clone(), position) {
            log::warn!("Cannot open profile: {e}");
            return;
        }
        self.gallery.select(position);
        self.modal.show(&record);
        log::debug!("Opened profile {} at {position}", record.id());
    }

    fn close_profile(&mut self) {
        self.paginator.close();
        self.modal.close();
    }

    fn show_current_profile(&mut self) {
        if let Some(record) = self.paginator.current() {
            self.modal.show(record);
        }
    }

    // ── Input mapping ───────────────────────────────────────────────────

    fn map_input(&mut self, event: &Event) -> Option<Action> {
        // Ctrl+C always quits
        if let Event::Key(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            ..
        }) = event
        {
            return Some(Action::Quit);
        }

        // Priority 1: Help modal
        if self.show_help {
            return self.map_help_input(event);
        }

        // Priority 2: Profile modal
        if self.paginator.is_open() {
            return self.map_modal_input(event);
        }

        if let Event::Mouse(mouse) = event {
            return self.map_mouse_input(mouse);
        }

        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return None;
        };

        // Priority 3: Search input
        if self.focus == Focus::Search {
            return match code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Tab => Some(Action::BlurSearch),
                _ => {
                    if self.search.handle_key(*code) {
                        self.run_search();
                    }
                    None
                }
            };
        }

        // Priority 4: Gallery
        self.map_gallery_input(*modifiers, *code)
    }

    fn map_help_input(&self, event: &Event) -> Option<Action> {
        let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return None;
        };
        match code {
            KeyCode::Esc | KeyCode::Char('?') => Some(Action::CloseHelp),
            _ => None,
        }
    }

    fn map_modal_input(&self, event: &Event) -> Option<Action> {
        let controls = self.paginator.controls();
        match event {
            Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                ..
            }) => match code {
                KeyCode::Esc | KeyCode::Char('x') => Some(Action::CloseProfile),
                KeyCode::Left | KeyCode::Char('h') if controls.prev_visible() => {
                    Some(Action::PrevProfile)
                }
                KeyCode::Right | KeyCode::Char('l') if controls.next_visible() => {
                    Some(Action::NextProfile)
                }
                _ => None,
            },
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => match self.modal.hit_test(*column, *row) {
                ModalHit::Close | ModalHit::Outside => Some(Action::CloseProfile),
                ModalHit::Prev => Some(Action::PrevProfile),
                ModalHit::Next => Some(Action::NextProfile),
                ModalHit::Inside => None,
            },
            _ => None,
        }
    }

    fn map_mouse_input(&self, mouse: &MouseEvent) -> Option<Action> {
        let MouseEventKind::Down(MouseButton::Left) = mouse.kind else {
            return None;
        };
        let search_area = self.last_layout.get().search;
        let (column, row) = (mouse.column, mouse.row);

        if self.store.is_some()
            && column >= search_area.x
            && column < search_area.x + search_area.width
            && row >= search_area.y
            && row < search_area.y + search_area.height
        {
            return Some(Action::FocusSearch);
        }
        self.gallery.card_at(column, row).map(Action::OpenCard)
    }

    fn map_gallery_input(&self, modifiers: KeyModifiers, code: KeyCode) -> Option<Action> {
        match (modifiers, code) {
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('q')) => Some(Action::Quit),
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('?')) => {
                Some(Action::ShowHelp)
            }
            (KeyModifiers::NONE, KeyCode::Char('/')) if self.store.is_some() => {
                Some(Action::FocusSearch)
            }
            (KeyModifiers::NONE, KeyCode::Char('h') | KeyCode::Left) => Some(Action::SelectPrev),
            (KeyModifiers::NONE, KeyCode::Char('l') | KeyCode::Right) => Some(Action::SelectNext),
            (KeyModifiers::NONE, KeyCode::Char('k') | KeyCode::Up) => Some(Action::SelectUp),
            (KeyModifiers::NONE, KeyCode::Char('j') | KeyCode::Down) => Some(Action::SelectDown),
            (KeyModifiers::NONE, KeyCode::Enter) if !self.gallery.cards().is_empty() => {
                Some(Action::OpenCard(self.gallery.selected()))
            }
            _ => None,
        }
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::SelectPrev => self.gallery.select_prev(),
            Action::SelectNext => self.gallery.select_next(),
            Action::SelectUp => self.gallery.select_up(),
            Action::SelectDown => self.gallery.select_down(),
            Action::OpenCard(position) => {
                self.set_focus(Focus::Gallery);
                self.open_card(position);
            }
            Action::FocusSearch => self.set_focus(Focus::Search),
            Action::BlurSearch => self.set_focus(Focus::Gallery),
            Action::NextProfile => {
                if self.paginator.next() {
                    self.show_current_profile();
                }
            }
            Action::PrevProfile => {
                if self.paginator.prev() {
                    self.show_current_profile();
                }
            }
            Action::CloseProfile => self.close_profile(),
            Action::ShowHelp => self.show_help = true,
            Action::CloseHelp => self.show_help = false,
        }
    }

    /// Set focus; the search input's look follows it.
    fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        match focus {
            Focus::Search => self.search.focus(),
            Focus::Gallery => self.search.blur(),
        }
    }

    // ── Notifications ───────────────────────────────────────────────────

    /// Push a notification (dedup by message, max 3).
    pub fn push_notification(&mut self, message: String) {
        if self.notifications.iter().any(|n| n.message == message) {
            return;
        }

        self.notifications.push(Notification {
            message,
            ttl_ticks: 100,
        });

        while self.notifications.len() > 3 {
            self.notifications.remove(0);
        }
    }

    /// Tick: decrement notification TTLs, dismiss expired.
    fn on_tick(&mut self) {
        for n in &mut self.notifications {
            n.ttl_ticks = n.ttl_ticks.saturating_sub(1);
        }
        self.notifications.retain(|n| n.ttl_ticks > 0);
    }

    // ── Rendering ───────────────────────────────────────────────────────

    fn gallery_status(&self) -> GalleryStatus {
        if self.store.is_none() {
            GalleryStatus::Loading
        } else if self.no_results {
            GalleryStatus::NoResults
        } else {
            GalleryStatus::Ready
        }
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let layout = AppLayout::compute(area);
        self.last_layout.set(layout);

        self.search.render(frame, layout.search);
        self.gallery.render(frame, layout.gallery, self.gallery_status());
        self.render_status_bar(frame, layout.status);

        // Overlays
        self.modal.render(frame, area, self.paginator.controls());
        self.render_notifications(frame, area);

        if self.show_help {
            self.render_help_modal(frame, area);
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let count = match self.store {
            Some(ref store) => Span::styled(
                format!("{} of {} employees", self.active.len(), store.len()),
                Style::default().fg(theme::TEXT),
            ),
            None => Span::styled("loading", theme::muted()),
        };

        let mode_indicator = if self.focus == Focus::Search {
            Span::styled(" SEARCH ", theme::search_badge())
        } else {
            Span::raw("")
        };

        let status = Line::from(vec![
            Span::styled(" Employee Directory ", theme::brand_badge()),
            Span::raw(" "),
            mode_indicator,
            Span::raw(" "),
            Span::styled(
                self.focus.label(),
                Style::default()
                    .fg(theme::PRIMARY_LIGHT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" │ "),
            count,
            Span::raw(" │ "),
            Span::styled("/", theme::key_hint()),
            Span::raw(":search "),
            Span::styled("Enter", theme::key_hint()),
            Span::raw(":open "),
            Span::styled("?", theme::key_hint()),
            Span::raw(":help "),
            Span::styled("q", theme::key_hint()),
            Span::raw(":quit"),
        ]);

        frame.render_widget(Paragraph::new(status), area);
    }

    fn render_notifications(&self, frame: &mut Frame, area: Rect) {
        if self.notifications.is_empty() {
            return;
        }

        let max_width = 40.min(area.width.saturating_sub(2));
        let height = (self.notifications.len() as u16).min(area.height);
        let x = area.width.saturating_sub(max_width + 1);
        let y = 0;

        let notification_area = Rect::new(x, y, max_width, height);

        let lines: Vec<Line> = self
            .notifications
            .iter()
            .map(|n| {
                Line::from(vec![
                    Span::styled(
                        " ✓ ",
                        Style::default()
                            .fg(theme::SUCCESS)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(n.message.as_str()),
                ])
            })
            .collect();

        frame.render_widget(Clear, notification_area);
        frame.render_widget(Paragraph::new(lines), notification_area);
    }

    fn render_help_modal(&self, frame: &mut Frame, area: Rect) {
        let modal = centered_rect(60, 70, area);

        let keybindings = [
            ("Gallery:", ""),
            ("←/→ or h/l", "Previous / next card"),
            ("↑/↓ or k/j", "Row up / down"),
            ("Enter / click", "Open employee profile"),
            ("/", "Focus search"),
            ("?", "Toggle this help"),
            ("q / Ctrl+C", "Quit"),
            ("", ""),
            ("Search:", ""),
            ("type", "Filter by name as you type"),
            ("Esc / Enter / Tab", "Leave search"),
            ("", ""),
            ("Profile:", ""),
            ("←/→ or h/l", "Previous / next employee"),
            ("Esc / x / click outside", "Close"),
        ];

        let mut lines = vec![
            Line::raw(""),
            Line::from(Span::styled(" Keybindings", theme::heading())),
            Line::raw(""),
        ];

        for (key, desc) in &keybindings {
            if key.is_empty() {
                lines.push(Line::raw(""));
            } else if desc.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("  {key}"),
                    Style::default()
                        .fg(theme::ACCENT)
                        .add_modifier(Modifier::BOLD),
                )));
            } else {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        format!("{:<24}", key),
                        Style::default()
                            .fg(theme::PRIMARY_LIGHT)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(*desc),
                ]));
            }
        }

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT));

        frame.render_widget(Clear, modal);
        frame.render_widget(Paragraph::new(lines).block(block), modal);
    }
}

/// Calculate a centered rect using percentage of parent area.
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}
