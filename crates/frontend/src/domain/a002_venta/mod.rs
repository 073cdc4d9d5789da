pub mod api;
pub mod loader;
pub mod status;
pub mod ui;
