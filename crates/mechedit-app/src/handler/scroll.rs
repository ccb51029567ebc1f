//! Scroll message handlers for the analyzed document view

use crate::state::AppState;

use super::UpdateResult;

pub fn handle_scroll_up(state: &mut AppState) -> UpdateResult {
    state.view.scroll_up(1);
    UpdateResult::none()
}

pub fn handle_scroll_down(state: &mut AppState) -> UpdateResult {
    state.view.scroll_down(1);
    UpdateResult::none()
}

pub fn handle_page_up(state: &mut AppState) -> UpdateResult {
    state.view.page_up();
    UpdateResult::none()
}

pub fn handle_page_down(state: &mut AppState) -> UpdateResult {
    state.view.page_down();
    UpdateResult::none()
}

pub fn handle_scroll_to_top(state: &mut AppState) -> UpdateResult {
    state.view.scroll_to_top();
    UpdateResult::none()
}

pub fn handle_scroll_to_bottom(state: &mut AppState) -> UpdateResult {
    state.view.scroll_to_bottom();
    UpdateResult::none()
}

pub fn handle_scroll_left(state: &mut AppState, n: usize) -> UpdateResult {
    state.view.scroll_left(n);
    UpdateResult::none()
}

pub fn handle_scroll_right(state: &mut AppState, n: usize) -> UpdateResult {
    state.view.scroll_right(n);
    UpdateResult::none()
}
