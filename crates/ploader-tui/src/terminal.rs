//! Terminal setup and restoration

use std::io::stdout;

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ploader_core::prelude::*;

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(stdout(), DisableBracketedPaste);
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Enter the alternate screen with bracketed paste, so dropped file paths
/// arrive as a single paste event.
pub fn init() -> Result<ratatui::DefaultTerminal> {
    let terminal = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    if let Err(e) = execute!(stdout(), EnableBracketedPaste) {
        warn!("Bracketed paste unavailable: {}", e);
    }
    Ok(terminal)
}

/// Leave the alternate screen and restore the terminal state.
pub fn restore() -> Result<()> {
    if let Err(e) = execute!(stdout(), DisableBracketedPaste) {
        debug!("Failed to disable bracketed paste: {}", e);
    }
    ratatui::try_restore().map_err(|e| Error::TerminalRestore(e.to_string()))
}
