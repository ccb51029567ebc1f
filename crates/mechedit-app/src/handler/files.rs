//! Path prompt and file load handlers

use std::path::PathBuf;

use mechedit_core::prelude::*;

use crate::state::{AppState, FileTarget, PathPrompt, RuleFile, UiMode};

use super::{UpdateAction, UpdateResult};

pub fn handle_open_prompt(state: &mut AppState, target: FileTarget) -> UpdateResult {
    state.path_prompt = Some(PathPrompt {
        target,
        input: String::new(),
    });
    state.ui_mode = UiMode::PathPrompt;
    UpdateResult::none()
}

pub fn handle_prompt_char(state: &mut AppState, c: char) -> UpdateResult {
    if let Some(prompt) = state.path_prompt.as_mut() {
        prompt.input.push(c);
    }
    UpdateResult::none()
}

pub fn handle_prompt_paste(state: &mut AppState, text: &str) -> UpdateResult {
    if let Some(prompt) = state.path_prompt.as_mut() {
        // Only the first line makes sense as a path
        let first_line = text.lines().next().unwrap_or("");
        prompt.input.push_str(first_line);
    }
    UpdateResult::none()
}

pub fn handle_prompt_backspace(state: &mut AppState) -> UpdateResult {
    if let Some(prompt) = state.path_prompt.as_mut() {
        prompt.input.pop();
    }
    UpdateResult::none()
}

pub fn handle_prompt_cancel(state: &mut AppState) -> UpdateResult {
    state.path_prompt = None;
    state.ui_mode = UiMode::Normal;
    UpdateResult::none()
}

pub fn handle_prompt_submit(state: &mut AppState) -> UpdateResult {
    let Some(prompt) = state.path_prompt.take() else {
        state.ui_mode = UiMode::Normal;
        return UpdateResult::none();
    };
    state.ui_mode = UiMode::Normal;

    let raw = prompt.input.trim();
    if raw.is_empty() {
        return UpdateResult::none();
    }

    UpdateResult::action(UpdateAction::ReadFile {
        path: expand_home(raw),
        target: prompt.target,
    })
}

/// Expand a leading `~/` to the home directory
fn expand_home(raw: &str) -> PathBuf {
    match raw.strip_prefix("~/") {
        Some(rest) => std::env::var_os("HOME")
            .map(|home| PathBuf::from(home).join(rest))
            .unwrap_or_else(|| PathBuf::from(raw)),
        None => PathBuf::from(raw),
    }
}

pub fn handle_loaded(
    state: &mut AppState,
    path: PathBuf,
    target: FileTarget,
    content: String,
) -> UpdateResult {
    match target {
        FileTarget::Document => {
            info!("Loaded document {}", path.display());
            state.input.set_text(&content);
            state
                .notifications
                .info("Document Loaded", path.display().to_string());
        }
        FileTarget::Rules => {
            let file = RuleFile { path, content };
            let name = file.name();

            if file.content.trim().is_empty() {
                warn!("Rule file {} is empty", file.path.display());
                state.notifications.info(
                    "Rules Added",
                    format!("{name} is empty and will be ignored"),
                );
            } else {
                state.notifications.info("Rules Added", name);
            }

            // Reloading the same path replaces it in place
            match state.rule_files.iter().position(|f| f.path == file.path) {
                Some(index) => state.rule_files[index] = file,
                None => state.rule_files.push(file),
            }
        }
    }
    UpdateResult::none()
}

pub fn handle_read_failed(state: &mut AppState, path: PathBuf, error: String) -> UpdateResult {
    warn!("Failed to read {}: {}", path.display(), error);
    state.notifications.error("File Read Failed", error);
    UpdateResult::none()
}

pub fn handle_clear_rules(state: &mut AppState) -> UpdateResult {
    if !state.rule_files.is_empty() {
        let count = state.rule_files.len();
        state.rule_files.clear();
        state
            .notifications
            .info("Rules Cleared", format!("Removed {count} rule files; default rules apply"));
    }
    UpdateResult::none()
}
