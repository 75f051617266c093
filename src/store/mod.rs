//! Persistence and collection logic split across logical submodules.

mod file;
mod library;
mod stats;

pub use file::{load, save};
pub use library::{search, Library};
pub use stats::{decade_of, LibraryStats};
