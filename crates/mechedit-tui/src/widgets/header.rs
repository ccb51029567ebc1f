//! Header bar widget
//!
//! Shows the app title, the analysis status and the keybindings for the
//! current mode.

use mechedit_app::{AnalysisPhase, UiMode};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

/// Main header showing title, status and keybindings
pub struct MainHeader {
    phase: AnalysisPhase,
    mode: UiMode,
    issue_count: usize,
}

impl MainHeader {
    pub fn new(phase: AnalysisPhase, mode: UiMode) -> Self {
        Self {
            phase,
            mode,
            issue_count: 0,
        }
    }

    pub fn issue_count(mut self, count: usize) -> Self {
        self.issue_count = count;
        self
    }

    fn shortcuts(&self) -> &'static [(&'static str, &'static str)] {
        match self.mode {
            UiMode::Normal => &[
                ("e", "Edit"),
                ("o", "Open"),
                ("u", "Rules"),
                ("a", "Analyze"),
                ("t", "Toggle"),
                ("q", "Quit"),
            ],
            UiMode::EditDocument => &[("Ctrl+S", "Analyze"), ("Esc", "Done")],
            UiMode::PathPrompt => &[("Enter", "Load"), ("Esc", "Cancel")],
        }
    }

    fn status_label(&self) -> String {
        let (_, label, _) = styles::phase_indicator(self.phase);
        match self.phase {
            AnalysisPhase::Succeeded => match self.issue_count {
                0 => format!("{label}: no issues"),
                1 => format!("{label}: 1 issue"),
                n => format!("{label}: {n} issues"),
            },
            _ => label.to_string(),
        }
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let (icon, _, status_style) = styles::phase_indicator(self.phase);

        let left = Line::from(vec![
            Span::raw(" "),
            Span::styled(icon, status_style),
            Span::raw(" "),
            Span::styled("The Mechanical Editor", styles::accent_bold()),
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
            Span::styled(self.status_label(), styles::text_secondary()),
        ]);
        let left_width = left.width() as u16;

        let mut hint_spans = Vec::new();
        for (key, label) in self.shortcuts() {
            hint_spans.push(Span::styled("[", styles::text_muted()));
            hint_spans.push(Span::styled(*key, styles::keybinding()));
            hint_spans.push(Span::styled(format!("] {label} "), styles::text_muted()));
        }
        let hints = Line::from(hint_spans);
        let hints_width = hints.width() as u16;

        buf.set_line(inner.x, inner.y, &left, inner.width);

        // Hints are right-aligned and dropped when they would collide
        if left_width + hints_width + 1 <= inner.width {
            let x = inner.x + inner.width - hints_width;
            buf.set_line(x, inner.y, &hints, hints_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_header_shows_title_and_normal_hints() {
        let mut term = TestTerminal::new();
        let area = Rect::new(0, 0, 100, 3);
        term.render_widget(MainHeader::new(AnalysisPhase::Idle, UiMode::Normal), area);

        assert!(term.buffer_contains("The Mechanical Editor"));
        assert!(term.buffer_contains("Ready"));
        assert!(term.buffer_contains("Analyze"));
        assert!(term.buffer_contains("Quit"));
    }

    #[test]
    fn test_header_shows_edit_hints() {
        let mut term = TestTerminal::new();
        let area = Rect::new(0, 0, 100, 3);
        term.render_widget(
            MainHeader::new(AnalysisPhase::Idle, UiMode::EditDocument),
            area,
        );

        assert!(term.buffer_contains("Ctrl+S"));
        assert!(!term.buffer_contains("Quit"));
    }

    #[test]
    fn test_header_shows_issue_count() {
        let mut term = TestTerminal::new();
        let area = Rect::new(0, 0, 100, 3);
        term.render_widget(
            MainHeader::new(AnalysisPhase::Succeeded, UiMode::Normal).issue_count(3),
            area,
        );

        assert!(term.buffer_contains("Analyzed: 3 issues"));
    }

    #[test]
    fn test_header_drops_hints_when_narrow() {
        let mut term = TestTerminal::with_size(40, 3);
        let area = Rect::new(0, 0, 40, 3);
        term.render_widget(MainHeader::new(AnalysisPhase::Loading, UiMode::Normal), area);

        assert!(term.buffer_contains("Analyzing"));
        assert!(!term.buffer_contains("[q]"));
    }
}
