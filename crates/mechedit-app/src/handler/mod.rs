//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `analysis`: Analysis lifecycle (submit, complete, fail)
//! - `suggestions`: Writing-suggestions requests
//! - `files`: Path prompt and file load handlers
//! - `keys`: Key event handlers for UI modes
//! - `scroll`: Scroll handlers

pub(crate) mod analysis;
pub(crate) mod files;
pub(crate) mod keys;
pub(crate) mod scroll;
pub(crate) mod suggestions;
pub(crate) mod update;


use std::path::PathBuf;

use mechedit_analysis::AnalysisRequest;

use crate::message::Message;
use crate::state::FileTarget;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Send a request to the analyzer; the answer comes back as
    /// `AnalysisCompleted`/`AnalysisFailed` carrying `request_id`
    RunAnalysis {
        request_id: u64,
        request: AnalysisRequest,
    },

    /// Ask for writing suggestions; the answer comes back as
    /// `SuggestionsCompleted`/`SuggestionsFailed` carrying `request_id`
    RunSuggestions { request_id: u64, document: String },

    /// Read a file; the answer comes back as `FileLoaded`/`FileReadFailed`
    ReadFile { path: PathBuf, target: FileTarget },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
