//! Semantic style builders.

use mechedit_app::AnalysisPhase;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Flagged span styles ---
pub fn issue_highlight() -> Style {
    Style::default()
        .fg(palette::ISSUE_FG)
        .bg(palette::ISSUE_BG)
        .add_modifier(Modifier::UNDERLINED)
}

pub fn issue_selected() -> Style {
    Style::default()
        .fg(palette::ISSUE_SELECTED_FG)
        .bg(palette::ISSUE_SELECTED_BG)
        .add_modifier(Modifier::BOLD)
}

pub fn gutter() -> Style {
    Style::default().fg(palette::GUTTER_FG)
}

// --- Selection styles ---
/// "Black on Cyan" - selected item in the focused panel
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Selected item while its panel is not focused
pub fn unfocused_selected() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
        .style(Style::default().bg(palette::POPUP_BG))
}

// --- Phase indicator mapping ---

/// Phase indicator for the header.
///
/// Returns `(icon_char, label, Style)` for the given phase.
pub fn phase_indicator(phase: AnalysisPhase) -> (&'static str, &'static str, Style) {
    match phase {
        AnalysisPhase::Idle => ("○", "Ready", Style::default().fg(palette::TEXT_MUTED)),
        AnalysisPhase::Loading => (
            "↻",
            "Analyzing",
            Style::default()
                .fg(palette::STATUS_YELLOW)
                .add_modifier(Modifier::BOLD),
        ),
        AnalysisPhase::Succeeded => (
            "●",
            "Analyzed",
            Style::default()
                .fg(palette::STATUS_GREEN)
                .add_modifier(Modifier::BOLD),
        ),
        AnalysisPhase::Failed => ("✗", "Failed", Style::default().fg(palette::STATUS_RED)),
    }
}
