pub mod directory;
pub mod logging;
