//! Main render/view function (View in TEA pattern)


use std::time::Instant;

use mechedit_app::selection;
use mechedit_app::state::{AppState, Focus, UiMode};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI (View function in TEA)
///
/// Apart from drawing, this only touches view state: the document viewport
/// is resized to the panel and a queued "scroll issue into view" request is
/// resolved against the new size.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    if let Some(metrics) = widgets::DocumentView::new(state).metrics(areas.document) {
        state
            .view
            .update_content_size(metrics.total_lines, metrics.visible_lines);
        state
            .view
            .update_horizontal_size(metrics.max_line_width, metrics.visible_width);
    }
    selection::resolve_pending_focus(state);

    let state: &AppState = state;
    let normal = state.ui_mode == UiMode::Normal;

    frame.render_widget(
        widgets::MainHeader::new(state.phase, state.ui_mode).issue_count(state.error_count()),
        areas.header,
    );

    let editing = state.ui_mode == UiMode::EditDocument;
    let input_form = widgets::InputForm::new(&state.input, &state.rule_files).editing(editing);
    if editing {
        if let Some(position) = input_form.cursor_position(areas.input) {
            frame.set_cursor_position(position);
        }
    }
    frame.render_widget(input_form, areas.input);

    frame.render_widget(
        widgets::DocumentView::new(state).focused(normal && state.focus == Focus::Document),
        areas.document,
    );
    frame.render_widget(
        widgets::SuggestionsPanel::new(state).focused(normal && state.focus == Focus::Suggestions),
        areas.suggestions,
    );

    if let Some(prompt) = &state.path_prompt {
        let dialog = widgets::PathPromptDialog::new(prompt);
        frame.set_cursor_position(dialog.cursor_position(area));
        frame.render_widget(dialog, area);
    }

    if !state.notifications.is_empty() {
        frame.render_widget(
            widgets::ToastStack::new(&state.notifications, Instant::now()),
            area,
        );
    }
}
