//! Analyzed document view state - scroll position, viewport bounds and the
//! pending "bring this issue into view" request.
//!
//! Shared by the handler layer (scroll commands, selection) and the TUI layer
//! (which reports viewport size and resolves focus requests during render).

use mechedit_core::{ErrorId, SpanLocation};

/// Fraction of the remaining distance covered per tick when animating
const SMOOTH_SCROLL_DIVISOR: usize = 3;

/// Columns kept visible to the left of a focused span
const H_MARGIN: usize = 4;

/// State for document view scrolling
#[derive(Debug)]
pub struct DocumentViewState {
    /// Current vertical scroll offset from top
    pub offset: usize,
    /// Current horizontal scroll offset from left
    pub h_offset: usize,
    /// Total number of lines (set during render)
    pub total_lines: usize,
    /// Visible lines (set during render)
    pub visible_lines: usize,
    /// Widest line in chars (set during render)
    pub max_line_width: usize,
    /// Visible width in columns (set during render)
    pub visible_width: usize,
    /// Issue to center once the document has been laid out
    pub pending_focus: Option<ErrorId>,
    /// Offset the view is animating toward
    pub target_offset: Option<usize>,
    /// Animate toward `target_offset` on Tick instead of jumping
    pub smooth_scroll: bool,
}

impl Default for DocumentViewState {
    fn default() -> Self {
        Self::new(true)
    }
}

impl DocumentViewState {
    pub fn new(smooth_scroll: bool) -> Self {
        Self {
            offset: 0,
            h_offset: 0,
            total_lines: 0,
            visible_lines: 0,
            max_line_width: 0,
            visible_width: 0,
            pending_focus: None,
            target_offset: None,
            smooth_scroll,
        }
    }

    /// Back to the top, forgetting any focus request (new document)
    pub fn reset(&mut self) {
        self.offset = 0;
        self.h_offset = 0;
        self.pending_focus = None;
        self.target_offset = None;
    }

    fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.visible_lines)
    }

    /// Get the range of line indices to render
    ///
    /// Returns (start, end) where start is inclusive and end is exclusive.
    pub fn visible_range(&self) -> (usize, usize) {
        let end = (self.offset + self.visible_lines).min(self.total_lines);
        (self.offset.min(end), end)
    }

    /// Scroll up by n lines
    pub fn scroll_up(&mut self, n: usize) {
        self.target_offset = None;
        self.offset = self.offset.saturating_sub(n);
    }

    /// Scroll down by n lines
    pub fn scroll_down(&mut self, n: usize) {
        self.target_offset = None;
        self.offset = (self.offset + n).min(self.max_offset());
    }

    pub fn scroll_to_top(&mut self) {
        self.target_offset = None;
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.target_offset = None;
        self.offset = self.max_offset();
    }

    pub fn page_up(&mut self) {
        let page = self.visible_lines.saturating_sub(2).max(1);
        self.scroll_up(page);
    }

    pub fn page_down(&mut self) {
        let page = self.visible_lines.saturating_sub(2).max(1);
        self.scroll_down(page);
    }

    /// Scroll left by n columns
    pub fn scroll_left(&mut self, n: usize) {
        self.h_offset = self.h_offset.saturating_sub(n);
    }

    /// Scroll right by n columns
    pub fn scroll_right(&mut self, n: usize) {
        let max_h_offset = self.max_line_width.saturating_sub(self.visible_width);
        self.h_offset = (self.h_offset + n).min(max_h_offset);
    }

    /// Update with new content size, clamping offsets if content shrank
    pub fn update_content_size(&mut self, total: usize, visible: usize) {
        self.total_lines = total;
        self.visible_lines = visible;
        self.offset = self.offset.min(self.max_offset());
        if let Some(target) = self.target_offset {
            self.target_offset = Some(target.min(self.max_offset()));
        }
    }

    /// Update horizontal content dimensions
    pub fn update_horizontal_size(&mut self, max_width: usize, visible_width: usize) {
        self.max_line_width = max_width;
        self.visible_width = visible_width;

        let max_h_offset = max_width.saturating_sub(visible_width);
        if self.h_offset > max_h_offset {
            self.h_offset = max_h_offset;
        }
    }

    /// Ask the view to center an issue after the next layout
    pub fn request_focus(&mut self, id: ErrorId) {
        self.pending_focus = Some(id);
    }

    /// Center the view on a located span.
    ///
    /// Vertically the span's line is placed in the middle of the viewport;
    /// horizontally the view only moves when the span is outside it.
    pub fn center_on(&mut self, location: SpanLocation) {
        let half = self.visible_lines / 2;
        let target = location.line_index.saturating_sub(half).min(self.max_offset());

        if self.smooth_scroll {
            self.target_offset = Some(target);
        } else {
            self.target_offset = None;
            self.offset = target;
        }

        let span_end = location.column + location.width.max(1);
        if location.column < self.h_offset || span_end > self.h_offset + self.visible_width {
            let max_h_offset = self.max_line_width.saturating_sub(self.visible_width);
            self.h_offset = location.column.saturating_sub(H_MARGIN).min(max_h_offset);
        }
    }

    /// Advance the smooth-scroll animation one step.
    /// Returns true while the view is still moving.
    pub fn tick_scroll(&mut self) -> bool {
        let Some(target) = self.target_offset else {
            return false;
        };

        if self.offset == target {
            self.target_offset = None;
            return false;
        }

        let distance = self.offset.abs_diff(target);
        let step = (distance / SMOOTH_SCROLL_DIVISOR).max(1);
        if self.offset < target {
            self.offset += step;
        } else {
            self.offset -= step;
        }

        if self.offset == target {
            self.target_offset = None;
        }
        true
    }

    pub fn is_animating(&self) -> bool {
        self.target_offset.is_some()
    }
}
