//! Writing-suggestions requests: independent of the analysis cycle, at most
//! one in flight.

use mechedit_core::prelude::*;

use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub fn handle_request(state: &mut AppState) -> UpdateResult {
    if state.is_suggesting() {
        debug!(
            "Suggestions requested while {:?} is in flight",
            state.suggestions_in_flight
        );
        state.notifications.error(
            "Suggestions In Progress",
            "Writing suggestions are already being generated.",
        );
        return UpdateResult::none();
    }

    if state.input.is_blank() {
        debug!("Rejected empty document for suggestions");
        state.notifications.error("Empty Document", Error::EmptyDocument.to_string());
        return UpdateResult::none();
    }

    let document = state.input.text().to_string();
    let request_id = state.allocate_request_id();
    state.suggestions_in_flight = Some(request_id);
    state.writing_suggestions.clear();

    info!(
        "Requesting writing suggestions {} ({} chars)",
        request_id,
        document.chars().count()
    );

    UpdateResult::action(UpdateAction::RunSuggestions {
        request_id,
        document,
    })
}

fn is_current(state: &AppState, request_id: u64) -> bool {
    let current = state.suggestions_in_flight == Some(request_id);
    if !current {
        debug!("Ignoring stale suggestions response {}", request_id);
    }
    current
}

pub fn handle_completed(
    state: &mut AppState,
    request_id: u64,
    suggestions: Vec<String>,
) -> UpdateResult {
    if !is_current(state, request_id) {
        return UpdateResult::none();
    }

    info!("Suggestions {} returned {} items", request_id, suggestions.len());
    state.suggestions_in_flight = None;

    let description = match suggestions.len() {
        0 => "No further suggestions.".to_string(),
        1 => "1 writing suggestion added.".to_string(),
        n => format!("{n} writing suggestions added."),
    };
    state.writing_suggestions = suggestions;
    state.notifications.info("Suggestions Ready", description);

    UpdateResult::none()
}

pub fn handle_failed(state: &mut AppState, request_id: u64, error: String) -> UpdateResult {
    if !is_current(state, request_id) {
        return UpdateResult::none();
    }

    error!("Suggestions {} failed: {}", request_id, error);
    state.suggestions_in_flight = None;
    state.notifications.error(
        "Suggestions Failed",
        "Could not generate writing suggestions. Please try again.",
    );

    UpdateResult::none()
}
