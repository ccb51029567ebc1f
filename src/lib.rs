//! The Mechanical Editor Library
//!
//! A terminal writing assistant that checks documents against Vale-style
//! rules with an LLM. The TUI lives in `mechedit-tui`; this crate adds the
//! headless runner used by the `mechedit` binary.

pub mod headless;

// Re-export main entry points
pub use headless::runner::run_headless;
pub use mechedit_tui::run;
