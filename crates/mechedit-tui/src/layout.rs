//! Screen layout definitions for the TUI
//!
//! Wide terminals get two columns (input above document on the left,
//! suggestions on the right); narrow ones stack all three panels.

use ratatui::layout::{Constraint, Layout, Rect};

/// Below this width the panels are stacked vertically
const COMPACT_WIDTH_THRESHOLD: u16 = 80;

/// Header: top border + title row + bottom border
const HEADER_HEIGHT: u16 = 3;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title and key hints
    pub header: Rect,

    /// Document Input panel (editable text plus rule files)
    pub input: Rect,

    /// Analyzed Document panel
    pub document: Rect,

    /// Suggestions & Rules panel
    pub suggestions: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let [header, body] =
        Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(3)]).areas(area);

    if area.width < COMPACT_WIDTH_THRESHOLD {
        let [input, document, suggestions] = Layout::vertical([
            Constraint::Percentage(30),
            Constraint::Percentage(40),
            Constraint::Percentage(30),
        ])
        .areas(body);
        return ScreenAreas {
            header,
            input,
            document,
            suggestions,
        };
    }

    let [left, suggestions] =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(body);
    let [input, document] =
        Layout::vertical([Constraint::Percentage(40), Constraint::Min(5)]).areas(left);

    ScreenAreas {
        header,
        input,
        document,
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_layout_uses_two_columns() {
        let layout = create(Rect::new(0, 0, 120, 40));

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.input.x, 0);
        assert_eq!(layout.document.x, 0);
        assert!(layout.suggestions.x > 0);
        // Input sits above the document in the left column
        assert_eq!(layout.document.y, layout.input.y + layout.input.height);
        // Suggestions span the full body height
        assert_eq!(layout.suggestions.height, 37);
    }

    #[test]
    fn test_compact_layout_stacks_panels() {
        let layout = create(Rect::new(0, 0, 60, 30));

        assert_eq!(layout.input.width, 60);
        assert_eq!(layout.document.width, 60);
        assert_eq!(layout.suggestions.width, 60);
        assert!(layout.input.y < layout.document.y);
        assert!(layout.document.y < layout.suggestions.y);
    }

    #[test]
    fn test_suggestions_column_fits_location_label() {
        let layout = create(Rect::new(0, 0, 100, 30));

        // Borders take two columns
        let inner = layout.suggestions.width - 2;
        assert!(usize::from(inner) >= "Rule: Vale.Spelling (Line: 1, Pos: 1)".len());
    }

    #[test]
    fn test_layout_covers_body() {
        let area = Rect::new(0, 0, 100, 30);
        let layout = create(area);

        assert_eq!(
            layout.input.height + layout.document.height,
            area.height - HEADER_HEIGHT
        );
        assert_eq!(layout.input.width + layout.suggestions.width, area.width);
    }
}
