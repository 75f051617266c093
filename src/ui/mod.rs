//! Ratatui front-end: four views (library, add form, search, statistics) over
//! a single owned [`crate::store::Library`].

mod app;
mod forms;
mod helpers;
mod screens;
mod terminal;

pub use app::App;
pub use terminal::run_app;
