//! adash TUI — ratatui application shell.

use adash_core::session::Session;
use adash_data::Dataset;

pub mod app;
pub mod commands;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::App;

/// Start the TUI over the given dataset as the given signed-in user.
///
/// Configuration is loaded from disk, falling back to the built-in defaults
/// when the file is missing or malformed.
pub fn run(dataset: Dataset, session: Session) -> anyhow::Result<()> {
    let config =
        adash_core::config::Config::load().unwrap_or_else(|_| adash_core::config::Config::defaults());
    let theme = theme::Theme::load_default();
    App::new(dataset, session, config, theme).run()
}
