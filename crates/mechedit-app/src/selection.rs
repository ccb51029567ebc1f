//! Selection coordinator: picks an issue and brings its highlight into view.
//!
//! Selecting sets the selected id and queues a focus request. The request is
//! resolved after the next layout by [`resolve_pending_focus`], which the TUI
//! calls once it knows the viewport size. Ids that no longer resolve (the
//! document changed underneath) are dropped silently.

use mechedit_core::prelude::*;

use crate::state::AppState;

/// Select the issue at `index` in the current result. Returns false when
/// there is no such issue.
pub fn select(state: &mut AppState, index: usize) -> bool {
    let Some(id) = state
        .result
        .as_ref()
        .and_then(|result| result.error_ids().into_iter().nth(index))
    else {
        return false;
    };

    debug!("Selected {}", id);
    state.selected_error = Some(id.clone());
    state.view.request_focus(id);
    true
}

/// Select the issue after the current one (the first if nothing is selected)
pub fn select_next(state: &mut AppState) -> bool {
    let count = state.error_count();
    if count == 0 {
        return false;
    }
    let next = match state.selected_index() {
        Some(index) => (index + 1).min(count - 1),
        None => 0,
    };
    select(state, next)
}

/// Select the issue before the current one (the last if nothing is selected)
pub fn select_previous(state: &mut AppState) -> bool {
    let count = state.error_count();
    if count == 0 {
        return false;
    }
    let previous = match state.selected_index() {
        Some(index) => index.saturating_sub(1),
        None => count - 1,
    };
    select(state, previous)
}

pub fn clear(state: &mut AppState) {
    state.selected_error = None;
    state.view.pending_focus = None;
}

/// Resolve a queued focus request against the laid-out document.
///
/// Call after `view.update_content_size()` so centering uses the real
/// viewport. Returns true if the view was moved.
pub fn resolve_pending_focus(state: &mut AppState) -> bool {
    let Some(id) = state.view.pending_focus.take() else {
        return false;
    };

    let location = state
        .rendering()
        .and_then(|rendering| rendering.locate(&id));

    match location {
        Some(location) => {
            state.view.center_on(location);
            true
        }
        None => {
            trace!("Focus target {} not found, ignoring", id);
            false
        }
    }
}
