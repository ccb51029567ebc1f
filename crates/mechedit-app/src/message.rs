//! Message types for the application (TEA pattern)

use std::path::PathBuf;

use mechedit_core::AnalysisResult;

use crate::input_key::InputKey;
use crate::state::FileTarget;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Bracketed paste from terminal
    Paste(String),

    /// Tick event for periodic updates (animations, toast expiry)
    Tick,

    /// Quit immediately (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Document Input
    // ─────────────────────────────────────────────────────────
    EnterEditMode,
    ExitEditMode,
    InputChar(char),
    InputNewline,
    InputBackspace,
    InputDelete,
    InputCursorLeft,
    InputCursorRight,
    InputLineStart,
    InputLineEnd,
    ClearInput,

    // ─────────────────────────────────────────────────────────
    // Analysis
    // ─────────────────────────────────────────────────────────
    /// Submit the current document for analysis
    SubmitAnalysis,

    /// The analyzer answered request `request_id`
    AnalysisCompleted {
        request_id: u64,
        result: AnalysisResult,
    },

    /// The analyzer failed request `request_id`
    AnalysisFailed { request_id: u64, error: String },

    /// Ask for writing suggestions on the current document
    RequestSuggestions,

    SuggestionsCompleted {
        request_id: u64,
        suggestions: Vec<String>,
    },

    SuggestionsFailed { request_id: u64, error: String },

    // ─────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────
    /// Select the issue at this index of the result's error list
    SelectError(usize),
    SelectNextError,
    SelectPreviousError,
    ClearSelection,

    // ─────────────────────────────────────────────────────────
    // Document View
    // ─────────────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollToTop,
    ScrollToBottom,
    ScrollLeft(usize),
    ScrollRight(usize),
    SwitchFocus,
    /// Toggle between the corrected and the submitted text
    ToggleDocumentText,

    // ─────────────────────────────────────────────────────────
    // Files
    // ─────────────────────────────────────────────────────────
    OpenPathPrompt(FileTarget),
    PromptChar(char),
    PromptBackspace,
    PromptSubmit,
    PromptCancel,

    /// Read a file from disk into the document or the rule list
    LoadFile { path: PathBuf, target: FileTarget },

    FileLoaded {
        path: PathBuf,
        target: FileTarget,
        content: String,
    },

    FileReadFailed { path: PathBuf, error: String },

    ClearRuleFiles,

    // ─────────────────────────────────────────────────────────
    // Notifications
    // ─────────────────────────────────────────────────────────
    DismissNotification,
}
