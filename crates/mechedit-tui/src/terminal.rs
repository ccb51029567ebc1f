//! Terminal setup and restoration

use std::io::stdout;

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use mechedit_core::prelude::*;

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(stdout(), DisableBracketedPaste);
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Deliver pasted text as one event instead of a burst of key presses
pub fn enable_bracketed_paste() -> Result<()> {
    execute!(stdout(), EnableBracketedPaste)
        .map_err(|e| Error::terminal(format!("failed to enable bracketed paste: {e}")))
}

pub fn disable_bracketed_paste() {
    if let Err(e) = execute!(stdout(), DisableBracketedPaste) {
        warn!("Failed to disable bracketed paste: {}", e);
    }
}
