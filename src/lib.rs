//! Core library surface for the Personal Library Manager TUI application.
//!
//! The modules exposed here keep the API small so the `bin` target as well as
//! external tooling (and the integration tests) can reuse the same pieces.
pub mod assets;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod store;
pub mod ui;

/// Loading, saving and querying the book collection.
pub use store::{Library, LibraryStats};

/// The domain types that other layers manipulate.
pub use models::{Book, NewBook, SearchField};

pub use config::Config;
pub use error::LibraryError;

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
