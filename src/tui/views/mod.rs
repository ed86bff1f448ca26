pub mod gallery;
pub mod profile_modal;
pub mod search_bar;
