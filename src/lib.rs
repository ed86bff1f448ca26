/// Employee Directory (TUI Edition)
///
/// Fetches a one-shot batch of employee records, shows them as a card
/// gallery with live name search, and pages through profiles in a modal.

pub mod config;
pub mod core;
pub mod tui;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
