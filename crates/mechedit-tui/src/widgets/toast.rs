//! Toast notifications stacked in the top-right corner, newest on top

use std::time::Instant;

use mechedit_app::{Notifications, Toast};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget, Wrap},
};

use crate::theme::{palette, styles};

const TOAST_WIDTH: u16 = 44;
/// Border + title + two description rows + progress row + border
const TOAST_HEIGHT: u16 = 6;

/// Overlay widget for the active toasts
pub struct ToastStack<'a> {
    notifications: &'a Notifications,
    now: Instant,
}

impl<'a> ToastStack<'a> {
    pub fn new(notifications: &'a Notifications, now: Instant) -> Self {
        Self { notifications, now }
    }

    fn render_toast(&self, toast: &Toast, area: Rect, buf: &mut Buffer) {
        let accent = if toast.is_destructive() {
            palette::STATUS_RED
        } else {
            palette::ACCENT
        };

        Clear.render(area, buf);
        let block = styles::glass_block(false)
            .border_style(Style::default().fg(accent))
            .style(Style::default().bg(palette::POPUP_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = Line::from(Span::styled(
            toast.title.clone(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ));
        buf.set_line(inner.x, inner.y, &title, inner.width);

        if inner.height > 2 {
            let description = Rect::new(inner.x, inner.y + 1, inner.width, inner.height - 2);
            Paragraph::new(toast.description.as_str())
                .style(styles::text_secondary())
                .wrap(Wrap { trim: true })
                .render(description, buf);
        }

        // Remaining lifetime as a shrinking bar on the last row
        let fraction = self.notifications.remaining_fraction(toast, self.now);
        let filled = (f64::from(inner.width) * fraction).round() as usize;
        let bar = Line::from(Span::styled("▔".repeat(filled), Style::default().fg(accent)));
        buf.set_line(inner.x, inner.y + inner.height - 1, &bar, inner.width);
    }
}

impl Widget for ToastStack<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = TOAST_WIDTH.min(area.width);
        let x = area.x + area.width - width;
        let mut y = area.y + 1;

        for toast in self.notifications.iter().rev() {
            if y + TOAST_HEIGHT > area.y + area.height {
                break;
            }
            self.render_toast(toast, Rect::new(x, y, width, TOAST_HEIGHT), buf);
            y += TOAST_HEIGHT;
        }
    }
}
