//! Ratatui front-end: app state and key handling, form rendering helpers,
//! and the terminal setup plus event loop.

mod app;
mod forms;
mod helpers;
mod terminal;

pub use app::App;
pub use terminal::run_app;
