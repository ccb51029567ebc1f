//! Analysis lifecycle handlers: submit, complete, fail

use mechedit_analysis::AnalysisRequest;
use mechedit_core::prelude::*;
use mechedit_core::AnalysisResult;

use crate::state::{AnalysisPhase, AppState, UiMode};

use super::{UpdateAction, UpdateResult};

/// Start a new analysis cycle for the Document Input text.
///
/// Rejected (with a notification, no analyzer call) when the document is
/// blank or another analysis is still in flight.
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    if state.is_loading() {
        warn!("Analysis submitted while request {:?} is in flight", state.in_flight);
        state.notifications.error(
            "Analysis In Progress",
            Error::AnalysisInProgress.to_string(),
        );
        return UpdateResult::none();
    }

    if state.input.is_blank() {
        debug!("Rejected empty document");
        state.notifications.error("Empty Document", Error::EmptyDocument.to_string());
        return UpdateResult::none();
    }

    let document = state.input.text().to_string();
    let request = AnalysisRequest::new(document.clone(), state.combined_rules());
    let request_id = state.allocate_request_id();

    // Loading replaces the previous cycle entirely
    state.phase = AnalysisPhase::Loading;
    state.in_flight = Some(request_id);
    state.analyzed_text = Some(document);
    state.result = None;
    state.selected_error = None;
    state.view.reset();
    state.loading_frame = 0;
    state.ui_mode = UiMode::Normal;

    info!(
        "Submitting analysis request {} ({} chars, {} rule files)",
        request_id,
        request.document_content.chars().count(),
        state.rule_files.len()
    );

    UpdateResult::action(UpdateAction::RunAnalysis {
        request_id,
        request,
    })
}

fn is_current(state: &AppState, request_id: u64) -> bool {
    if state.in_flight == Some(request_id) {
        true
    } else {
        debug!(
            "Ignoring stale analysis response {} (in flight: {:?})",
            request_id, state.in_flight
        );
        false
    }
}

pub fn handle_completed(
    state: &mut AppState,
    request_id: u64,
    result: AnalysisResult,
) -> UpdateResult {
    if !is_current(state, request_id) {
        return UpdateResult::none();
    }

    let count = result.error_count();
    info!("Analysis {} completed with {} issues", request_id, count);

    state.in_flight = None;
    state.phase = AnalysisPhase::Succeeded;
    state.result = Some(result);

    let description = if count > 0 {
        format!("{count} issues found. Corrected document preview updated.")
    } else {
        "No issues found!".to_string()
    };
    state.notifications.info("Analysis Complete", description);

    UpdateResult::none()
}

pub fn handle_failed(state: &mut AppState, request_id: u64, error: String) -> UpdateResult {
    if !is_current(state, request_id) {
        return UpdateResult::none();
    }

    error!("Analysis {} failed: {}", request_id, error);

    // The submitted text stays visible; no result is shown
    state.in_flight = None;
    state.phase = AnalysisPhase::Failed;
    state.result = None;
    state.selected_error = None;

    state.notifications.error(
        "Analysis Failed",
        "An error occurred while analyzing the document. Please try again.",
    );

    UpdateResult::none()
}
