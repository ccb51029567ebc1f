//! Span reconciliation: turns a document and its error records into
//! line-by-line segments ready to be painted.
//!
//! Offsets are character (Unicode scalar) offsets within a line. Records are
//! clamped into the line instead of rejected, and records on the same line
//! are painted in ascending `start` order (stable for ties).
//!
//! Every record is painted over its own clamped span and the cursor moves to
//! that span's end, so overlapping records repaint shared text.

use std::collections::HashMap;
use std::iter;

use crate::document::{assign_error_ids, ErrorId, ErrorRecord};

/// One painted piece of a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Unflagged text
    Plain(&'a str),
    /// Flagged span
    Highlight(Highlight<'a>),
    /// Stand-in for a line with nothing to paint, keeps the row visible
    Placeholder,
}

/// A highlighted span within a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight<'a> {
    pub text: &'a str,
    pub id: &'a ErrorId,
    /// Index of the record in the collaborator's error list
    pub error_index: usize,
    /// Clamped start column (chars)
    pub start: usize,
    /// Clamped end column (chars, exclusive)
    pub end: usize,
    pub selected: bool,
}

impl Highlight<'_> {
    pub fn is_zero_width(&self) -> bool {
        self.start == self.end
    }
}

/// All segments of one document line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine<'a> {
    /// 1-indexed line number
    pub number: usize,
    pub segments: Vec<Segment<'a>>,
}

impl<'a> RenderedLine<'a> {
    /// Text of the line reassembled from its segments
    pub fn text(&self) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Plain(text) => *text,
                Segment::Highlight(h) => h.text,
                Segment::Placeholder => "",
            })
            .collect()
    }

    pub fn highlights(&self) -> impl Iterator<Item = &Highlight<'a>> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Highlight(h) => Some(h),
            _ => None,
        })
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.segments.as_slice(), [Segment::Placeholder])
    }
}

/// Where a highlight ends up in the rendered document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanLocation {
    /// 0-indexed line (row) in the rendered document
    pub line_index: usize,
    /// Clamped start column (chars)
    pub column: usize,
    /// Highlight width in chars (0 for zero-width highlights)
    pub width: usize,
}

/// A document paired with its error records.
///
/// Rendering is lazy: [`DocumentRendering::lines`] walks the text on demand
/// and can be restarted any number of times.
#[derive(Debug, Clone)]
pub struct DocumentRendering<'a> {
    text: &'a str,
    errors: &'a [ErrorRecord],
    ids: Vec<ErrorId>,
    /// line number -> record indices sorted by `start`
    by_line: HashMap<i64, Vec<usize>>,
    selected: Option<ErrorId>,
}

impl<'a> DocumentRendering<'a> {
    pub fn new(text: &'a str, errors: &'a [ErrorRecord]) -> Self {
        let mut by_line: HashMap<i64, Vec<usize>> = HashMap::new();
        for (index, record) in errors.iter().enumerate() {
            by_line.entry(record.line).or_default().push(index);
        }
        for indices in by_line.values_mut() {
            // sort_by_key is stable: ties keep collaborator order
            indices.sort_by_key(|&index| errors[index].start);
        }

        Self {
            text,
            errors,
            ids: assign_error_ids(errors),
            by_line,
            selected: None,
        }
    }

    /// Mark the highlight with this id as selected
    pub fn with_selection(mut self, selected: Option<&ErrorId>) -> Self {
        self.selected = selected.cloned();
        self
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Ids of all records, in collaborator order
    pub fn ids(&self) -> &[ErrorId] {
        &self.ids
    }

    /// Number of rows the document occupies
    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    /// Iterate over the rendered lines
    pub fn lines(&self) -> RenderedLines<'_> {
        RenderedLines {
            rendering: self,
            lines: self.text.split('\n'),
            number: 0,
        }
    }

    /// Find where the highlight for `id` is painted.
    ///
    /// Returns `None` when the id is unknown or its record points at a line
    /// the document does not have.
    pub fn locate(&self, id: &ErrorId) -> Option<SpanLocation> {
        let error_index = self.ids.iter().position(|candidate| candidate == id)?;
        let line_number = usize::try_from(self.errors[error_index].line).ok()?;
        if line_number == 0 {
            return None;
        }

        let line_text = self.text.split('\n').nth(line_number - 1)?;
        let rendered = self.render_line(line_text, line_number);
        let location = rendered
            .highlights()
            .find(|h| h.error_index == error_index)
            .map(|h| SpanLocation {
                line_index: line_number - 1,
                column: h.start,
                width: h.end - h.start,
            });
        location
    }

    fn render_line<'r>(&'r self, line: &'r str, number: usize) -> RenderedLine<'r> {
        let Some(indices) = i64::try_from(number)
            .ok()
            .and_then(|key| self.by_line.get(&key))
        else {
            return plain_line(line, number);
        };

        // Char boundaries as byte offsets, with the line end appended
        let bounds: Vec<usize> = line
            .char_indices()
            .map(|(byte, _)| byte)
            .chain(iter::once(line.len()))
            .collect();
        let len = bounds.len() - 1;
        let slice = |from: usize, to: usize| char_slice(line, &bounds, from, to);

        let mut segments = Vec::with_capacity(indices.len() * 2 + 1);
        let mut cursor = 0;

        for &error_index in indices {
            let record = &self.errors[error_index];
            let start = clamp_offset(record.start, len);
            let end = clamp_offset(record.end, len).max(start);

            if start > cursor {
                segments.push(Segment::Plain(slice(cursor, start)));
            }

            let id = &self.ids[error_index];
            segments.push(Segment::Highlight(Highlight {
                text: slice(start, end),
                id,
                error_index,
                start,
                end,
                selected: self.selected.as_ref() == Some(id),
            }));
            cursor = end;
        }

        if cursor < len {
            segments.push(Segment::Plain(slice(cursor, len)));
        }
        if segments.is_empty() {
            segments.push(Segment::Placeholder);
        }

        RenderedLine { number, segments }
    }
}

/// Iterator over rendered lines, see [`DocumentRendering::lines`]
#[derive(Debug, Clone)]
pub struct RenderedLines<'r> {
    rendering: &'r DocumentRendering<'r>,
    lines: std::str::Split<'r, char>,
    number: usize,
}

impl<'r> Iterator for RenderedLines<'r> {
    type Item = RenderedLine<'r>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        self.number += 1;
        Some(self.rendering.render_line(line, self.number))
    }
}

fn plain_line(line: &str, number: usize) -> RenderedLine<'_> {
    let segment = if line.is_empty() {
        Segment::Placeholder
    } else {
        Segment::Plain(line)
    };
    RenderedLine {
        number,
        segments: vec![segment],
    }
}

fn char_slice<'s>(line: &'s str, bounds: &[usize], from: usize, to: usize) -> &'s str {
    &line[bounds[from]..bounds[to]]
}

/// Clamp a reported offset into `[0, len]`
fn clamp_offset(value: i64, len: usize) -> usize {
    if value <= 0 {
        0
    } else {
        usize::try_from(value).map_or(len, |v| v.min(len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn err(line: i64, start: i64, end: i64) -> ErrorRecord {
        ErrorRecord::new("msg", line, start, end, "Rule.Test")
    }

    fn highlight_texts<'a>(line: &'a RenderedLine<'a>) -> Vec<&'a str> {
        line.highlights().map(|h| h.text).collect()
    }

    #[test]
    fn test_teh_cat_scenario() {
        let errors = vec![ErrorRecord::new("Spelling", 1, 0, 3, "Spelling.Teh")];
        let rendering = DocumentRendering::new("Teh cat sat.\n", &errors);
        let lines: Vec<_> = rendering.lines().collect();

        assert_eq!(lines.len(), 2);
        match &lines[0].segments[..] {
            [Segment::Highlight(h), Segment::Plain(rest)] => {
                assert_eq!(h.text, "Teh");
                assert_eq!(h.id.as_str(), "error-1-0");
                assert_eq!(*rest, " cat sat.");
            }
            other => panic!("unexpected segments: {other:?}"),
        }
        assert!(lines[1].is_placeholder());
    }

    #[test]
    fn test_out_of_order_errors_painted_by_start() {
        let errors = vec![err(1, 4, 7), err(1, 0, 3)];
        let rendering = DocumentRendering::new("Teh kat sat.", &errors);
        let line = rendering.lines().next().unwrap();

        let starts: Vec<usize> = line.highlights().map(|h| h.start).collect();
        assert_eq!(starts, vec![0, 4]);
        assert_eq!(highlight_texts(&line), vec!["Teh", "kat"]);
        assert_eq!(line.text(), "Teh kat sat.");
    }

    #[test]
    fn test_stable_order_for_equal_starts() {
        let errors = vec![err(1, 2, 2), err(1, 2, 5)];
        let rendering = DocumentRendering::new("abcdefg", &errors);
        let line = rendering.lines().next().unwrap();
        let indices: Vec<usize> = line.highlights().map(|h| h.error_index).collect();
        assert_eq!(indices, vec![0, 1]);
    }

    #[test]
    fn test_start_after_end_yields_zero_width_highlight() {
        let errors = vec![err(1, 5, 2)];
        let rendering = DocumentRendering::new("abcdefgh", &errors);
        let line = rendering.lines().next().unwrap();

        let h = line.highlights().next().unwrap();
        assert_eq!(h.start, 5);
        assert!(h.is_zero_width());
        assert_eq!(h.text, "");
        assert_eq!(line.text(), "abcdefgh");
    }

    #[test]
    fn test_offsets_clamped_into_line() {
        let errors = vec![err(1, -4, 100)];
        let rendering = DocumentRendering::new("short", &errors);
        let line = rendering.lines().next().unwrap();

        assert_eq!(highlight_texts(&line), vec!["short"]);
        assert_eq!(line.segments.len(), 1);
    }

    #[test]
    fn test_start_past_line_end_is_zero_width_at_end() {
        let errors = vec![err(1, 50, 60)];
        let rendering = DocumentRendering::new("abc", &errors);
        let line = rendering.lines().next().unwrap();

        let h = line.highlights().next().unwrap();
        assert_eq!((h.start, h.end), (3, 3));
        assert_eq!(line.segments[0], Segment::Plain("abc"));
    }

    #[test]
    fn test_lines_without_errors_yield_single_block() {
        let errors = vec![err(2, 0, 1)];
        let rendering = DocumentRendering::new("one\ntwo\n\nfour", &errors);
        let lines: Vec<_> = rendering.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].segments, vec![Segment::Plain("one")]);
        assert!(lines[2].is_placeholder());
        assert_eq!(lines[3].segments, vec![Segment::Plain("four")]);
    }

    #[test]
    fn test_round_trip_without_errors() {
        let text = "First line\n\n  indented\nlast line with ünïcödé\n";
        let rendering = DocumentRendering::new(text, &[]);
        let rebuilt: Vec<String> = rendering.lines().map(|l| l.text()).collect();
        assert_eq!(rebuilt.join("\n"), text);
    }

    #[test]
    fn test_char_offsets_not_bytes() {
        let errors = vec![err(1, 2, 4)];
        let rendering = DocumentRendering::new("ñandú día", &errors);
        let line = rendering.lines().next().unwrap();
        assert_eq!(highlight_texts(&line), vec!["nd"]);
        assert_eq!(line.text(), "ñandú día");
    }

    #[test]
    fn test_nested_error_keeps_its_own_span() {
        let errors = vec![err(1, 0, 5), err(1, 2, 4)];
        let rendering = DocumentRendering::new("abcdefghij", &errors);
        let line = rendering.lines().next().unwrap();

        let spans: Vec<(usize, usize, &str)> =
            line.highlights().map(|h| (h.start, h.end, h.text)).collect();
        assert_eq!(spans, vec![(0, 5, "abcde"), (2, 4, "cd")]);
        // Cursor moved back to the nested end: the rest starts there
        assert_eq!(line.segments.last(), Some(&Segment::Plain("efghij")));
    }

    #[test]
    fn test_overlapping_errors_painted_in_start_order() {
        let errors = vec![err(1, 3, 8), err(1, 0, 5)];
        let rendering = DocumentRendering::new("abcdefghij", &errors);
        let line = rendering.lines().next().unwrap();

        assert_eq!(highlight_texts(&line), vec!["abcde", "defgh"]);
        let starts: Vec<usize> = line.highlights().map(|h| h.start).collect();
        assert!(starts.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(line.segments.last(), Some(&Segment::Plain("ij")));
    }

    #[test]
    fn test_locate_nested_error() {
        let errors = vec![err(1, 0, 5), err(1, 2, 4)];
        let rendering = DocumentRendering::new("abcdefghij", &errors);

        let loc = rendering.locate(&ErrorId::from("error-1-2")).unwrap();
        assert_eq!((loc.column, loc.width), (2, 2));
    }

    #[test]
    fn test_errors_on_missing_lines_are_ignored() {
        let errors = vec![err(0, 0, 1), err(-1, 0, 1), err(9, 0, 1)];
        let rendering = DocumentRendering::new("only line", &errors);
        let lines: Vec<_> = rendering.lines().collect();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].segments, vec![Segment::Plain("only line")]);
    }

    #[test]
    fn test_selected_flag_follows_id() {
        let errors = vec![err(1, 0, 3), err(1, 4, 7)];
        let selected = ErrorId::from("error-1-4");
        let rendering = DocumentRendering::new("Teh kat sat.", &errors).with_selection(Some(&selected));
        let line = rendering.lines().next().unwrap();

        let flags: Vec<bool> = line.highlights().map(|h| h.selected).collect();
        assert_eq!(flags, vec![false, true]);
    }

    #[test]
    fn test_colliding_ids_select_only_one_record() {
        let errors = vec![err(1, 0, 3), err(1, 0, 5)];
        let selected = ErrorId::from("error-1-0-2");
        let rendering = DocumentRendering::new("abcdefg", &errors).with_selection(Some(&selected));
        let line = rendering.lines().next().unwrap();

        let flags: Vec<bool> = line.highlights().map(|h| h.selected).collect();
        assert_eq!(flags, vec![false, true]);
    }

    #[test]
    fn test_lines_restartable() {
        let errors = vec![err(1, 0, 1)];
        let rendering = DocumentRendering::new("a\nb", &errors);
        let first: Vec<_> = rendering.lines().collect();
        let second: Vec<_> = rendering.lines().collect();
        assert_eq!(first, second);
        assert_eq!(rendering.line_count(), 2);
    }

    #[test]
    fn test_locate_returns_row_and_column() {
        let errors = vec![err(1, 0, 3), err(3, 4, 9)];
        let rendering = DocumentRendering::new("abc\n\nline three", &errors);

        let loc = rendering.locate(&ErrorId::from("error-3-4")).unwrap();
        assert_eq!(loc.line_index, 2);
        assert_eq!(loc.column, 4);
        assert_eq!(loc.width, 5);
    }

    #[test]
    fn test_locate_unknown_or_stale_id_is_none() {
        let errors = vec![err(5, 0, 3)];
        let rendering = DocumentRendering::new("one line", &errors);
        assert!(rendering.locate(&ErrorId::from("error-1-0")).is_none());
        assert!(rendering.locate(&ErrorId::from("error-5-0")).is_none());
    }
}
