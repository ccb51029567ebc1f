//! Analyzed Document panel: the submitted (or corrected) text with every
//! flagged span highlighted.

use mechedit_app::AppState;
use mechedit_core::{DocumentRendering, RenderedLine, Segment};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{
        Block, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget,
    },
};

use crate::theme::{palette, styles};

/// Braille spinner shown while the first result is pending
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const IDLE_PLACEHOLDER: &str = "Enter some text and press a to analyze";

/// Marker painted for a selected zero-width highlight
const ZERO_WIDTH_CARET: &str = "▏";

/// Sizes the view state needs before the panel is painted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewMetrics {
    pub total_lines: usize,
    pub visible_lines: usize,
    pub max_line_width: usize,
    pub visible_width: usize,
}

/// Document panel widget
pub struct DocumentView<'a> {
    state: &'a AppState,
    focused: bool,
}

impl<'a> DocumentView<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self {
            state,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn title(&self) -> String {
        match (&self.state.result, self.state.show_corrected) {
            (Some(_), true) => " Analyzed Document (corrected) ".to_string(),
            (Some(_), false) => " Analyzed Document (original) ".to_string(),
            (None, _) => " Analyzed Document ".to_string(),
        }
    }

    fn block(&self) -> Block<'static> {
        styles::glass_block(self.focused)
            .title(self.title())
            .style(Style::default().bg(palette::CARD_BG))
    }

    fn show_spinner(&self) -> bool {
        self.state.is_loading() && self.state.result.is_none()
    }

    /// Measure the document for a panel drawn at `area`.
    ///
    /// Returns `None` when there is no document to show.
    pub fn metrics(&self, area: Rect) -> Option<ViewMetrics> {
        if self.show_spinner() {
            return None;
        }
        let rendering = self.state.rendering()?;
        let inner = self.block().inner(area);
        let gutter = self.gutter_width(&rendering);

        let max_line_width = rendering
            .lines()
            .map(|line| painted_width(&line))
            .max()
            .unwrap_or(0);

        Some(ViewMetrics {
            total_lines: rendering.line_count(),
            visible_lines: inner.height as usize,
            max_line_width,
            visible_width: (inner.width as usize).saturating_sub(gutter),
        })
    }

    fn gutter_width(&self, rendering: &DocumentRendering<'_>) -> usize {
        if self.state.settings.ui.show_line_numbers {
            digits(rendering.line_count()) + 3
        } else {
            0
        }
    }

    fn render_spinner(&self, inner: Rect, buf: &mut Buffer) {
        let frame = SPINNER_FRAMES[(self.state.loading_frame as usize) % SPINNER_FRAMES.len()];
        let line = Line::from(vec![
            Span::styled(frame, styles::accent_bold()),
            Span::styled(" Analyzing document...", styles::text_secondary()),
        ]);
        render_centered(line, inner, buf);
    }

    fn render_lines(&self, rendering: &DocumentRendering<'_>, inner: Rect, buf: &mut Buffer) {
        let view = &self.state.view;
        let (start, end) = view.visible_range();
        let gutter = self.gutter_width(rendering);
        let digit_width = gutter.saturating_sub(3);
        let visible_width = (inner.width as usize).saturating_sub(gutter);

        let lines: Vec<Line> = rendering
            .lines()
            .skip(start)
            .take(end.saturating_sub(start))
            .map(|rendered| {
                let mut spans = Vec::new();
                if gutter > 0 {
                    spans.push(Span::styled(
                        format!("{:>digit_width$} │ ", rendered.number),
                        styles::gutter(),
                    ));
                }
                spans.extend(scrolled_spans(&rendered, view.h_offset, visible_width));
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

impl Widget for DocumentView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.block();
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.show_spinner() {
            self.render_spinner(inner, buf);
            return;
        }

        let Some(rendering) = self.state.rendering() else {
            render_centered(Line::styled(IDLE_PLACEHOLDER, styles::text_muted()), inner, buf);
            return;
        };

        self.render_lines(&rendering, inner, buf);

        let view = &self.state.view;
        if view.total_lines > view.visible_lines {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("▲"))
                .end_symbol(Some("▼"))
                .track_symbol(Some("│"))
                .thumb_symbol("█");
            let mut scrollbar_state = ScrollbarState::new(view.total_lines).position(view.offset);
            scrollbar.render(area, buf, &mut scrollbar_state);
        }
    }
}

/// Text and style a segment paints with.
///
/// Zero-width highlights paint nothing unless selected, then a one-cell caret.
fn painted<'s>(segment: &Segment<'s>) -> Option<(&'s str, Style)> {
    match segment {
        Segment::Plain(text) => Some((*text, styles::text_primary())),
        Segment::Highlight(h) if h.selected && h.is_zero_width() => {
            Some((ZERO_WIDTH_CARET, styles::issue_selected()))
        }
        Segment::Highlight(h) if h.selected => Some((h.text, styles::issue_selected())),
        Segment::Highlight(h) => Some((h.text, styles::issue_highlight())),
        Segment::Placeholder => None,
    }
}

/// Columns a rendered line occupies once painted
fn painted_width(line: &RenderedLine<'_>) -> usize {
    line.segments
        .iter()
        .filter_map(painted)
        .map(|(text, _)| text.chars().count())
        .sum()
}

/// Styled spans of one line, shifted left by `h_offset` chars and cut to
/// `width` chars.
fn scrolled_spans(line: &RenderedLine<'_>, h_offset: usize, width: usize) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut skip = h_offset;
    let mut room = width;

    for (text, style) in line.segments.iter().filter_map(painted) {
        if room == 0 {
            break;
        }

        let len = text.chars().count();
        if skip >= len {
            skip -= len;
            continue;
        }

        let visible: String = text.chars().skip(skip).take(room).collect();
        skip = 0;
        room -= visible.chars().count();
        if !visible.is_empty() {
            spans.push(Span::styled(visible, style));
        }
    }
    spans
}

fn render_centered(line: Line<'_>, inner: Rect, buf: &mut Buffer) {
    let y = inner.y + inner.height / 2;
    let row = Rect::new(inner.x, y, inner.width, 1);
    Paragraph::new(line)
        .alignment(Alignment::Center)
        .render(row, buf);
}

fn digits(n: usize) -> usize {
    n.max(1).to_string().len()
}
