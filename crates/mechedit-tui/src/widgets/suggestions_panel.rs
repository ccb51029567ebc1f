//! Suggestions & Rules panel: one entry per flagged span, in the order the
//! analyzer reported them, followed by any writing suggestions.

use mechedit_app::AppState;
use mechedit_core::ErrorRecord;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, StatefulWidget, Widget, Wrap},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::SPINNER_FRAMES;
use crate::theme::{palette, styles};

/// Suggestions list widget
pub struct SuggestionsPanel<'a> {
    state: &'a AppState,
    focused: bool,
}

impl<'a> SuggestionsPanel<'a> {
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

    fn empty_message(&self) -> &'static str {
        if self.state.is_loading() {
            "Waiting for analysis..."
        } else if self.state.result.is_some() {
            "No issues found!"
        } else {
            "Suggestions will appear here after analysis"
        }
    }
}

/// Location line shown under each message
pub fn location_label(record: &ErrorRecord) -> String {
    format!(
        "Rule: {} (Line: {}, Pos: {})",
        record.rule_id,
        record.line,
        record.display_position()
    )
}

const HIGHLIGHT_SYMBOL: &str = "▶ ";

const SUGGEST_HINT: &str = "Press s for writing suggestions";

/// Word-wrap `text` into rows of at most `width` columns.
///
/// Words wider than a row are split between characters.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut rows = Vec::new();
    let mut row = String::new();
    let mut row_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        if row_width > 0 && row_width + 1 + word_width <= width {
            row.push(' ');
            row.push_str(word);
            row_width += 1 + word_width;
            continue;
        }
        if row_width > 0 {
            rows.push(std::mem::take(&mut row));
            row_width = 0;
        }
        for ch in word.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if row_width > 0 && row_width + ch_width > width {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }
            row.push(ch);
            row_width += ch_width;
        }
    }

    if !row.is_empty() || rows.is_empty() {
        rows.push(row);
    }
    rows
}

fn muted_item(text: &str, width: usize) -> ListItem<'static> {
    ListItem::new(
        wrap_words(text, width)
            .into_iter()
            .map(|row| Line::from(Span::styled(row, styles::text_muted())))
            .collect::<Vec<_>>(),
    )
}

/// Numbered writing suggestion, wrapped to `width` columns
fn writing_item(number: usize, text: &str, width: usize) -> ListItem<'static> {
    ListItem::new(
        wrap_words(&format!("{number}. {text}"), width)
            .into_iter()
            .map(|row| Line::from(Span::styled(row, styles::text_secondary())))
            .collect::<Vec<_>>(),
    )
}

/// One list entry, wrapped to `width` columns
fn item(record: &ErrorRecord, width: usize) -> ListItem<'static> {
    let message = wrap_words(&record.message, width)
        .into_iter()
        .map(|row| Line::from(Span::styled(row, styles::text_primary())));
    let location = wrap_words(&location_label(record), width)
        .into_iter()
        .map(|row| Line::from(Span::styled(row, styles::text_muted())));
    ListItem::new(message.chain(location).collect::<Vec<_>>())
}

impl Widget for SuggestionsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let count = self.state.error_count();
        let block = styles::glass_block(self.focused)
            .title(format!(" Suggestions & Rules ({count}) "))
            .style(Style::default().bg(palette::CARD_BG));

        let errors = self
            .state
            .result
            .as_ref()
            .map(|result| result.errors.as_slice())
            .unwrap_or(&[]);

        let writing = &self.state.writing_suggestions;
        let suggesting = self.state.is_suggesting();

        if errors.is_empty() && writing.is_empty() && !suggesting {
            let inner = block.inner(area);
            block.render(area, buf);
            Paragraph::new(vec![
                Line::styled(self.empty_message(), styles::text_muted()),
                Line::default(),
                Line::styled(SUGGEST_HINT, styles::text_muted()),
            ])
            .wrap(Wrap { trim: true })
            .render(inner, buf);
            return;
        }

        let highlight = if self.focused {
            styles::focused_selected()
        } else {
            styles::unfocused_selected()
        };
        let selected = self.state.selected_index();
        // The symbol column only exists while an item is selected
        let symbol_width = if selected.is_some() {
            HIGHLIGHT_SYMBOL.width()
        } else {
            0
        };
        let width = (block.inner(area).width as usize).saturating_sub(symbol_width);

        let mut items: Vec<ListItem> = errors.iter().map(|record| item(record, width)).collect();
        if errors.is_empty() {
            items.push(muted_item(self.empty_message(), width));
        }
        if suggesting || !writing.is_empty() {
            items.push(ListItem::new(Line::default()));
            items.push(ListItem::new(Line::styled(
                "Writing Suggestions",
                styles::accent_bold(),
            )));
        }
        if suggesting {
            let frame =
                SPINNER_FRAMES[(self.state.loading_frame as usize) % SPINNER_FRAMES.len()];
            items.push(muted_item(&format!("{frame} Generating suggestions..."), width));
        }
        items.extend(
            writing
                .iter()
                .enumerate()
                .map(|(index, text)| writing_item(index + 1, text, width)),
        );

        let list = List::new(items)
            .block(block)
            .highlight_style(highlight)
            .highlight_symbol(HIGHLIGHT_SYMBOL);

        let mut list_state = ListState::default().with_selected(selected);
        StatefulWidget::render(list, area, buf, &mut list_state);
    }
}
