//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, FileTarget, Focus, UiMode};

/// Columns moved per horizontal scroll key press
const H_SCROLL_STEP: usize = 4;

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit works everywhere
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.ui_mode {
        UiMode::Normal => handle_key_normal(state, key),
        UiMode::EditDocument => handle_key_edit_document(key),
        UiMode::PathPrompt => handle_key_path_prompt(key),
    }
}

/// Handle key events while typing into the document
fn handle_key_edit_document(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::ExitEditMode),
        // Analyze without leaving the keyboard
        InputKey::CharCtrl('s') => Some(Message::SubmitAnalysis),
        InputKey::Enter => Some(Message::InputNewline),
        InputKey::Backspace => Some(Message::InputBackspace),
        InputKey::Delete => Some(Message::InputDelete),
        InputKey::Left => Some(Message::InputCursorLeft),
        InputKey::Right => Some(Message::InputCursorRight),
        InputKey::Home => Some(Message::InputLineStart),
        InputKey::End => Some(Message::InputLineEnd),
        InputKey::Tab => Some(Message::InputChar('\t')),
        InputKey::Char(c) => Some(Message::InputChar(c)),
        _ => None,
    }
}

/// Handle key events in the path prompt overlay
fn handle_key_path_prompt(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::PromptCancel),
        InputKey::Enter => Some(Message::PromptSubmit),
        InputKey::Backspace => Some(Message::PromptBackspace),
        InputKey::Char(c) => Some(Message::PromptChar(c)),
        _ => None,
    }
}

/// Handle key events in normal mode
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::Quit),

        // Document input and files
        InputKey::Char('e') | InputKey::Char('i') => Some(Message::EnterEditMode),
        InputKey::Char('o') => Some(Message::OpenPathPrompt(FileTarget::Document)),
        InputKey::Char('u') => Some(Message::OpenPathPrompt(FileTarget::Rules)),
        InputKey::Char('c') => Some(Message::ClearRuleFiles),

        // Analysis
        InputKey::Char('a') | InputKey::CharCtrl('s') => Some(Message::SubmitAnalysis),
        InputKey::Char('t') => Some(Message::ToggleDocumentText),
        InputKey::Char('s') => Some(Message::RequestSuggestions),

        InputKey::Tab | InputKey::BackTab => Some(Message::SwitchFocus),
        InputKey::Char('x') => Some(Message::DismissNotification),
        InputKey::Esc => Some(Message::ClearSelection),

        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),

        _ => match state.focus {
            Focus::Suggestions => handle_key_suggestions(key),
            Focus::Document => handle_key_document(key),
        },
    }
}

fn handle_key_suggestions(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('j') | InputKey::Down => Some(Message::SelectNextError),
        InputKey::Char('k') | InputKey::Up => Some(Message::SelectPreviousError),
        InputKey::Home | InputKey::Char('g') => Some(Message::SelectError(0)),
        _ => None,
    }
}

fn handle_key_document(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('j') | InputKey::Down => Some(Message::ScrollDown),
        InputKey::Char('k') | InputKey::Up => Some(Message::ScrollUp),
        InputKey::Char('h') | InputKey::Left => Some(Message::ScrollLeft(H_SCROLL_STEP)),
        InputKey::Char('l') | InputKey::Right => Some(Message::ScrollRight(H_SCROLL_STEP)),
        InputKey::Char('g') | InputKey::Home => Some(Message::ScrollToTop),
        InputKey::Char('G') | InputKey::End => Some(Message::ScrollToBottom),
        // Jump between issues from the document too
        InputKey::Char('n') => Some(Message::SelectNextError),
        InputKey::Char('N') => Some(Message::SelectPreviousError),
        _ => None,
    }
}
