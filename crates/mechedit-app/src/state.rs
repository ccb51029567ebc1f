//! Application state (Model in TEA pattern)

use std::path::PathBuf;
use std::time::Duration;

use mechedit_analysis::{join_rule_sources, FileKind};
use mechedit_core::{AnalysisResult, DocumentRendering, ErrorId};

use crate::config::Settings;
use crate::document_input::DocumentInput;
use crate::document_view_state::DocumentViewState;
use crate::notifications::Notifications;

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Browsing the analyzed document and suggestions
    #[default]
    Normal,

    /// Typing into the Document Input panel
    EditDocument,

    /// Path prompt overlay is open
    PathPrompt,
}

/// Which panel receives navigation keys in normal mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Document,
    Suggestions,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::Document => Focus::Suggestions,
            Focus::Suggestions => Focus::Document,
        }
    }
}

/// Analysis lifecycle: `Idle -> Loading -> { Succeeded | Failed }`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalysisPhase {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// What a loaded file becomes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileTarget {
    /// Replaces the document input
    Document,
    /// Appended to the rule file list
    Rules,
}

impl FileTarget {
    pub fn kind(self) -> FileKind {
        match self {
            FileTarget::Document => FileKind::Document,
            FileTarget::Rules => FileKind::Rules,
        }
    }

    pub fn prompt_title(self) -> &'static str {
        match self {
            FileTarget::Document => "Open Document (.txt .md .markdown .html .htm)",
            FileTarget::Rules => "Add Vale Rules (.yml .yaml)",
        }
    }
}

/// A loaded rule file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleFile {
    pub path: PathBuf,
    pub content: String,
}

impl RuleFile {
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Path prompt overlay state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPrompt {
    pub target: FileTarget,
    pub input: String,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub ui_mode: UiMode,
    pub focus: Focus,

    /// Where the current analysis cycle is
    pub phase: AnalysisPhase,

    /// Document Input buffer
    pub input: DocumentInput,

    /// Rule files in load order
    pub rule_files: Vec<RuleFile>,

    /// Text submitted for the current (or last) analysis
    pub analyzed_text: Option<String>,

    /// Result of the last successful analysis
    pub result: Option<AnalysisResult>,

    /// Selected issue, set only by explicit user selection
    pub selected_error: Option<ErrorId>,

    /// Analyzed document scroll state
    pub view: DocumentViewState,

    pub notifications: Notifications,

    pub path_prompt: Option<PathPrompt>,

    /// Show the corrected document (true) or the submitted text
    pub show_corrected: bool,

    pub settings: Settings,

    /// Spinner frame while loading
    pub loading_frame: u64,

    /// Request id of the analysis in flight, if any
    pub in_flight: Option<u64>,

    /// Writing suggestions from the last suggestions request
    pub writing_suggestions: Vec<String>,

    /// Request id of the suggestions request in flight, if any
    pub suggestions_in_flight: Option<u64>,

    next_request_id: u64,

    quit_requested: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            ui_mode: UiMode::Normal,
            focus: Focus::Document,
            phase: AnalysisPhase::Idle,
            input: DocumentInput::new(),
            rule_files: Vec::new(),
            analyzed_text: None,
            result: None,
            selected_error: None,
            view: DocumentViewState::new(settings.ui.smooth_scroll),
            notifications: Notifications::new(Duration::from_millis(
                settings.ui.toast_duration_ms,
            )),
            path_prompt: None,
            show_corrected: settings.ui.show_corrected,
            settings,
            loading_frame: 0,
            in_flight: None,
            writing_suggestions: Vec::new(),
            suggestions_in_flight: None,
            next_request_id: 1,
            quit_requested: false,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == AnalysisPhase::Loading
    }

    pub fn is_suggesting(&self) -> bool {
        self.suggestions_in_flight.is_some()
    }

    /// Allocate the id for the next analysis or suggestions request
    pub(crate) fn allocate_request_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quit_requested
    }

    /// Rule text from the loaded rule files (blank files skipped)
    pub fn combined_rules(&self) -> String {
        let sources: Vec<&str> = self
            .rule_files
            .iter()
            .map(|file| file.content.as_str())
            .collect();
        join_rule_sources(&sources)
    }

    /// Text shown in the Analyzed Document panel.
    ///
    /// After a successful analysis this is the corrected document unless the
    /// user toggled to the submitted text; otherwise it is the submitted text.
    pub fn displayed_text(&self) -> Option<&str> {
        match (&self.result, self.show_corrected) {
            (Some(result), true) => Some(result.corrected_document.as_str()),
            _ => self.analyzed_text.as_deref(),
        }
    }

    /// Span-annotated view of the displayed text with the current selection
    pub fn rendering(&self) -> Option<DocumentRendering<'_>> {
        let text = self.displayed_text()?;
        let errors = self
            .result
            .as_ref()
            .map(|result| result.errors.as_slice())
            .unwrap_or(&[]);
        Some(DocumentRendering::new(text, errors).with_selection(self.selected_error.as_ref()))
    }

    /// Index of the selected issue in the result's error list
    pub fn selected_index(&self) -> Option<usize> {
        let selected = self.selected_error.as_ref()?;
        self.result
            .as_ref()?
            .error_ids()
            .iter()
            .position(|id| id == selected)
    }

    pub fn error_count(&self) -> usize {
        self.result.as_ref().map(AnalysisResult::error_count).unwrap_or(0)
    }
}
