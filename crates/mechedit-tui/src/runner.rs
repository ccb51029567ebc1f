//! Main TUI runner - entry point and event loop

use mechedit_analysis::Analyzer;
use mechedit_app::Engine;
use mechedit_core::prelude::*;

use super::{event, render, terminal};

/// Run the TUI on top of an already constructed engine.
///
/// Must be called from within a multi-threaded tokio runtime: the loop
/// blocks on terminal polling while analysis tasks run on other workers.
pub fn run<A>(mut engine: Engine<A>) -> Result<()>
where
    A: Analyzer + Sync + 'static,
{
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = ratatui::init();
    if let Err(e) = terminal::enable_bracketed_paste() {
        warn!("{}", e);
    }

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();
    terminal::disable_bracketed_paste();
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop<A>(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine<A>) -> Result<()>
where
    A: Analyzer + Sync + 'static,
{
    while !engine.should_quit() {
        // Results of spawned tasks and signals
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &mut engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}
