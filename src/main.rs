//! Binary entry point that glues the JSON-backed book collection to the TUI:
//! resolve configuration, start logging, load the library, fetch the optional
//! banner, and drive the Ratatui event loop until the user exits.
use anyhow::Context;
use personal_library_manager::assets::fetch_banner;
use personal_library_manager::{logging, run_app, App, Config, Library};
use tracing::info;

/// Returning a `Result` bubbles fatal startup problems (for example a corrupt
/// library file) up to the terminal with the full error chain.
fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    logging::init(&config.log_path)?;
    info!(library = %config.library_path.display(), "starting");

    let library = Library::open(&config.library_path)
        .with_context(|| format!("failed to load {}", config.library_path.display()))?;
    info!(path = %library.path().display(), books = library.len(), "library ready");
    let banner = config.banner_url.as_deref().and_then(fetch_banner);

    let mut app = App::new(library, banner);
    run_app(&mut app)
}
