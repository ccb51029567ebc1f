//! Document Input panel: the editable text buffer and the loaded rule files

use mechedit_app::{DocumentInput, RuleFile};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

use crate::theme::{palette, styles};

/// Columns a tab expands to
const TAB_WIDTH: usize = 4;

const PLACEHOLDER: &str = "Press e to type, o to open a file, or paste text";

/// Editable document panel
pub struct InputForm<'a> {
    input: &'a DocumentInput,
    rule_files: &'a [RuleFile],
    editing: bool,
}

impl<'a> InputForm<'a> {
    pub fn new(input: &'a DocumentInput, rule_files: &'a [RuleFile]) -> Self {
        Self {
            input,
            rule_files,
            editing: false,
        }
    }

    pub fn editing(mut self, editing: bool) -> Self {
        self.editing = editing;
        self
    }

    fn block(&self) -> ratatui::widgets::Block<'static> {
        styles::glass_block(self.editing)
            .title(format!(" Document Input ({} chars) ", self.input.char_count()))
            .style(Style::default().bg(palette::CARD_BG))
    }

    /// Split the inner area into (text, rule list)
    fn split(inner: Rect) -> (Rect, Rect) {
        let [text, rules] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);
        (text, rules)
    }

    /// Terminal position of the edit cursor for a panel drawn at `area`
    pub fn cursor_position(&self, area: Rect) -> Option<Position> {
        let (text_area, _) = Self::split(self.block().inner(area));
        if text_area.width == 0 || text_area.height == 0 {
            return None;
        }

        let (row, col) = self.input.cursor_position();
        let column = display_column(self.input.text(), row, col);
        let (scroll_y, scroll_x) = scroll_offsets(row, column, text_area);

        Some(Position::new(
            text_area.x + (column - scroll_x as usize) as u16,
            text_area.y + (row - scroll_y as usize) as u16,
        ))
    }

    fn rules_line(&self) -> Line<'static> {
        let mut spans = vec![Span::styled("Rules: ", styles::text_muted())];
        if self.rule_files.is_empty() {
            spans.push(Span::styled("default", styles::text_secondary()));
        } else {
            let names: Vec<String> = self.rule_files.iter().map(RuleFile::name).collect();
            spans.push(Span::styled(names.join(", "), styles::text_primary()));
            spans.push(Span::styled("  [", styles::text_muted()));
            spans.push(Span::styled("c", styles::keybinding()));
            spans.push(Span::styled("] clear", styles::text_muted()));
        }
        Line::from(spans)
    }
}

impl Widget for InputForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.block();
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }
        let (text_area, rules_area) = Self::split(inner);

        if self.input.text().is_empty() && !self.editing {
            Paragraph::new(Span::styled(PLACEHOLDER, styles::text_muted())).render(text_area, buf);
        } else {
            let (row, col) = self.input.cursor_position();
            let column = display_column(self.input.text(), row, col);
            let offsets = scroll_offsets(row, column, text_area);

            let lines: Vec<Line> = self
                .input
                .text()
                .split('\n')
                .map(|line| Line::from(expand_tabs(line)))
                .collect();
            Paragraph::new(lines)
                .style(styles::text_primary())
                .scroll(offsets)
                .render(text_area, buf);
        }

        self.rules_line().render(rules_area, buf);
    }
}

fn expand_tabs(line: &str) -> String {
    line.replace('\t', &" ".repeat(TAB_WIDTH))
}

/// Display width of the first `col` chars of line `row`
fn display_column(text: &str, row: usize, col: usize) -> usize {
    text.split('\n')
        .nth(row)
        .map(|line| {
            line.chars()
                .take(col)
                .map(|c| {
                    if c == '\t' {
                        TAB_WIDTH
                    } else {
                        c.width().unwrap_or(0)
                    }
                })
                .sum()
        })
        .unwrap_or(0)
}

/// Paragraph scroll (y, x) that keeps the cursor inside `area`
fn scroll_offsets(row: usize, column: usize, area: Rect) -> (u16, u16) {
    let y = row.saturating_sub(area.height.saturating_sub(1) as usize);
    let x = column.saturating_sub(area.width.saturating_sub(1) as usize);
    (
        u16::try_from(y).unwrap_or(u16::MAX),
        u16::try_from(x).unwrap_or(u16::MAX),
    )
}
