//! Main update function - handles state transitions (TEA pattern)

use std::time::Instant;

use crate::message::Message;
use crate::selection;
use crate::state::{AppState, UiMode};

use super::{
    analysis, files, keys::handle_key, scroll, suggestions, UpdateAction, UpdateResult,
};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Paste(text) => {
            if state.ui_mode == UiMode::PathPrompt {
                return files::handle_prompt_paste(state, &text);
            }
            // Pasting always lands in the document
            state.ui_mode = UiMode::EditDocument;
            state.input.insert_str(&text);
            UpdateResult::none()
        }

        Message::Tick => {
            state.notifications.expire(Instant::now());
            state.view.tick_scroll();
            if state.is_loading() || state.is_suggesting() {
                state.loading_frame = state.loading_frame.wrapping_add(1);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Document Input
        // ─────────────────────────────────────────────────────────
        Message::EnterEditMode => {
            state.ui_mode = UiMode::EditDocument;
            UpdateResult::none()
        }
        Message::ExitEditMode => {
            state.ui_mode = UiMode::Normal;
            UpdateResult::none()
        }
        Message::InputChar(c) => {
            state.input.insert_char(c);
            UpdateResult::none()
        }
        Message::InputNewline => {
            state.input.insert_char('\n');
            UpdateResult::none()
        }
        Message::InputBackspace => {
            state.input.backspace();
            UpdateResult::none()
        }
        Message::InputDelete => {
            state.input.delete();
            UpdateResult::none()
        }
        Message::InputCursorLeft => {
            state.input.move_left();
            UpdateResult::none()
        }
        Message::InputCursorRight => {
            state.input.move_right();
            UpdateResult::none()
        }
        Message::InputLineStart => {
            state.input.move_line_start();
            UpdateResult::none()
        }
        Message::InputLineEnd => {
            state.input.move_line_end();
            UpdateResult::none()
        }
        Message::ClearInput => {
            state.input.clear();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Analysis
        // ─────────────────────────────────────────────────────────
        Message::SubmitAnalysis => analysis::handle_submit(state),
        Message::AnalysisCompleted { request_id, result } => {
            analysis::handle_completed(state, request_id, result)
        }
        Message::AnalysisFailed { request_id, error } => {
            analysis::handle_failed(state, request_id, error)
        }
        Message::RequestSuggestions => suggestions::handle_request(state),
        Message::SuggestionsCompleted {
            request_id,
            suggestions: list,
        } => suggestions::handle_completed(state, request_id, list),
        Message::SuggestionsFailed { request_id, error } => {
            suggestions::handle_failed(state, request_id, error)
        }

        // ─────────────────────────────────────────────────────────
        // Selection
        // ─────────────────────────────────────────────────────────
        Message::SelectError(index) => {
            selection::select(state, index);
            UpdateResult::none()
        }
        Message::SelectNextError => {
            selection::select_next(state);
            UpdateResult::none()
        }
        Message::SelectPreviousError => {
            selection::select_previous(state);
            UpdateResult::none()
        }
        Message::ClearSelection => {
            selection::clear(state);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Document View
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => scroll::handle_scroll_up(state),
        Message::ScrollDown => scroll::handle_scroll_down(state),
        Message::PageUp => scroll::handle_page_up(state),
        Message::PageDown => scroll::handle_page_down(state),
        Message::ScrollToTop => scroll::handle_scroll_to_top(state),
        Message::ScrollToBottom => scroll::handle_scroll_to_bottom(state),
        Message::ScrollLeft(n) => scroll::handle_scroll_left(state, n),
        Message::ScrollRight(n) => scroll::handle_scroll_right(state, n),

        Message::SwitchFocus => {
            state.focus = state.focus.toggle();
            UpdateResult::none()
        }

        Message::ToggleDocumentText => {
            state.show_corrected = !state.show_corrected;
            // Keep the selected issue in view in the other text
            if let Some(id) = state.selected_error.clone() {
                state.view.request_focus(id);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Files
        // ─────────────────────────────────────────────────────────
        Message::OpenPathPrompt(target) => files::handle_open_prompt(state, target),
        Message::PromptChar(c) => files::handle_prompt_char(state, c),
        Message::PromptBackspace => files::handle_prompt_backspace(state),
        Message::PromptSubmit => files::handle_prompt_submit(state),
        Message::PromptCancel => files::handle_prompt_cancel(state),
        Message::LoadFile { path, target } => {
            UpdateResult::action(UpdateAction::ReadFile { path, target })
        }
        Message::FileLoaded {
            path,
            target,
            content,
        } => files::handle_loaded(state, path, target, content),
        Message::FileReadFailed { path, error } => files::handle_read_failed(state, path, error),
        Message::ClearRuleFiles => files::handle_clear_rules(state),

        Message::DismissNotification => {
            state.notifications.dismiss_latest();
            UpdateResult::none()
        }
    }
}
