//! Color theme for the directory TUI.
//!
//! All color constants are RGB truecolor. Views import from here
//! instead of using inline `Color::*` literals.

use ratatui::style::{Color, Modifier, Style};

// ── Primary palette ─────────────────────────────────────────────────────────

/// Indigo: primary accent, focused borders, selected card.
pub const PRIMARY: Color = Color::Rgb(0x5C, 0x6B, 0xC0);
/// Light indigo: hints, focused search input.
pub const PRIMARY_LIGHT: Color = Color::Rgb(0x9F, 0xA8, 0xDA);

// ── Accent ──────────────────────────────────────────────────────────────────

/// Amber: names, modal frame, pagination buttons.
pub const ACCENT: Color = Color::Rgb(0xFF, 0xB3, 0x00);

// ── Backgrounds ─────────────────────────────────────────────────────────────

/// Base background behind overlays.
pub const BG_BASE: Color = Color::Rgb(0x12, 0x14, 0x1C);

// ── Text ────────────────────────────────────────────────────────────────────

/// Primary text.
pub const TEXT: Color = Color::Rgb(0xE0, 0xE0, 0xE0);
/// Muted text: secondary labels, unfocused borders.
pub const TEXT_MUTED: Color = Color::Rgb(0x80, 0x80, 0x80);
/// Dim text: placeholders, picture URLs.
pub const TEXT_DIM: Color = Color::Rgb(0x50, 0x50, 0x50);

// ── Semantic ────────────────────────────────────────────────────────────────

/// Warning: the "no results" message.
pub const WARNING: Color = Color::Rgb(0xFF, 0xA7, 0x26);
/// Success: load notification.
pub const SUCCESS: Color = Color::Rgb(0x66, 0xBB, 0x6A);

// ── Style helpers ───────────────────────────────────────────────────────────

/// Employee name on cards and in the modal.
pub fn name() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Section header style.
pub fn heading() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

/// Border of the keyboard-selected card.
pub fn card_selected() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

/// Border of every other card.
pub fn card_default() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Search input border while it has focus.
pub fn search_on() -> Style {
    Style::default().fg(PRIMARY_LIGHT)
}

/// Search input border while blurred.
pub fn search_off() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Modal pagination button.
pub fn button() -> Style {
    Style::default()
        .fg(BG_BASE)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Muted label text.
pub fn muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

/// Dim text for faint items.
pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Key hint style (e.g., "q:quit").
pub fn key_hint() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Status bar brand badge.
pub fn brand_badge() -> Style {
    Style::default()
        .fg(BG_BASE)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Search mode badge.
pub fn search_badge() -> Style {
    Style::default()
        .fg(BG_BASE)
        .bg(PRIMARY_LIGHT)
        .add_modifier(Modifier::BOLD)
}
