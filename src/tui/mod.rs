// TUI module for the interactive history browser
mod app;
mod events;
mod layout;
mod rendering;
mod terminal;

use anyhow::Result;
pub use app::App;
use terminal::TerminalManager;

use crate::backend::HistoryBackend;

/// Run the interactive TUI over the given history backend.
pub fn run_interactive<B: HistoryBackend>(backend: B) -> Result<()> {
    let mut manager = TerminalManager::new()?;

    // Create app state
    let mut app = App::new(backend);

    // Run event loop
    let res = app.run(manager.terminal_mut());

    // Restore terminal
    manager.restore()?;

    res
}
