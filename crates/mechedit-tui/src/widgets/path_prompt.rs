//! Modal prompt for the path of a document or rule file

use mechedit_app::PathPrompt;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Clear, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::styles;

const PROMPT_WIDTH: u16 = 64;
const PROMPT_HEIGHT: u16 = 5;

/// Center a fixed-size rect within an area, clamped to the area
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Path prompt overlay
pub struct PathPromptDialog<'a> {
    prompt: &'a PathPrompt,
}

impl<'a> PathPromptDialog<'a> {
    pub fn new(prompt: &'a PathPrompt) -> Self {
        Self { prompt }
    }

    /// Rect the dialog occupies within `area`
    pub fn area(area: Rect) -> Rect {
        centered_rect(PROMPT_WIDTH, PROMPT_HEIGHT, area)
    }

    /// Visible tail of the input that fits `width` columns
    fn visible_input(&self, width: usize) -> &str {
        let input = self.prompt.input.as_str();
        let mut start = 0;
        while input[start..].width() > width {
            match input[start..].chars().next() {
                Some(c) => start += c.len_utf8(),
                None => break,
            }
        }
        &input[start..]
    }

    /// Cursor position at the end of the input
    pub fn cursor_position(&self, area: Rect) -> Position {
        let dialog = Self::area(area);
        let inner_width = dialog.width.saturating_sub(4) as usize;
        let shown = self.visible_input(inner_width.saturating_sub(1)).width() as u16;
        Position::new(dialog.x + 2 + shown, dialog.y + 1)
    }
}

impl Widget for PathPromptDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dialog = Self::area(area);
        Clear.render(dialog, buf);

        let title = format!(" {} ", self.prompt.target.prompt_title());
        let block = styles::modal_block(&title);
        let inner = block.inner(dialog);
        block.render(dialog, buf);

        if inner.height == 0 || inner.width < 2 {
            return;
        }

        let field_width = inner.width.saturating_sub(2) as usize;
        let input = Line::from(vec![
            Span::raw(" "),
            Span::styled(
                self.visible_input(field_width.saturating_sub(1)).to_string(),
                styles::text_primary(),
            ),
        ]);
        buf.set_line(inner.x, inner.y, &input, inner.width);

        if inner.height >= 3 {
            let hints = Line::from(vec![
                Span::raw(" "),
                Span::styled("Enter", styles::keybinding()),
                Span::styled(" load   ", styles::text_muted()),
                Span::styled("Esc", styles::keybinding()),
                Span::styled(" cancel   ", styles::text_muted()),
                Span::styled("~/ expands to home", styles::text_muted()),
            ]);
            buf.set_line(inner.x, inner.y + 2, &hints, inner.width);
        }
    }
}
