//! Editable document buffer behind the Document Input panel.
//!
//! The cursor is a character index into the buffer. Pasted or loaded text has
//! its line endings normalized to `\n`.

/// Text buffer with a single cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentInput {
    text: String,
    /// Cursor position in chars, `0..=char_count`
    cursor: usize,
}

impl DocumentInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True when the buffer holds nothing but whitespace
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    /// Replace the whole buffer; the cursor moves to the end
    pub fn set_text(&mut self, text: &str) {
        self.text = normalize_newlines(text);
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        let byte = self.byte_index(self.cursor);
        self.text.insert(byte, c);
        self.cursor += 1;
    }

    pub fn insert_str(&mut self, s: &str) {
        let normalized = normalize_newlines(s);
        let byte = self.byte_index(self.cursor);
        self.text.insert_str(byte, &normalized);
        self.cursor += normalized.chars().count();
    }

    /// Delete the char before the cursor
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let byte = self.byte_index(self.cursor);
        self.text.remove(byte);
    }

    /// Delete the char under the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let byte = self.byte_index(self.cursor);
            self.text.remove(byte);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    /// Move to the start of the current line
    pub fn move_line_start(&mut self) {
        let (_, column) = self.cursor_position();
        self.cursor -= column;
    }

    /// Move to the end of the current line
    pub fn move_line_end(&mut self) {
        let rest = self.text.chars().skip(self.cursor).take_while(|&c| c != '\n');
        self.cursor += rest.count();
    }

    /// Cursor as `(row, column)`, both 0-indexed, column in chars
    pub fn cursor_position(&self) -> (usize, usize) {
        let before = &self.text[..self.byte_index(self.cursor)];
        let row = before.matches('\n').count();
        let column = before
            .rsplit('\n')
            .next()
            .map(|line| line.chars().count())
            .unwrap_or(0);
        (row, column)
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(byte, _)| byte)
            .unwrap_or(self.text.len())
    }
}

fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut input = DocumentInput::new();
        for c in "Teh".chars() {
            input.insert_char(c);
        }
        assert_eq!(input.text(), "Teh");
        input.backspace();
        assert_eq!(input.text(), "Te");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_insert_in_middle() {
        let mut input = DocumentInput::new();
        input.set_text("Th cat");
        for _ in 0..4 {
            input.move_left();
        }
        input.insert_char('e');
        assert_eq!(input.text(), "The cat");
    }

    #[test]
    fn test_paste_normalizes_line_endings() {
        let mut input = DocumentInput::new();
        input.insert_str("one\r\ntwo\rthree");
        assert_eq!(input.text(), "one\ntwo\nthree");
        assert_eq!(input.line_count(), 3);
        assert_eq!(input.cursor(), input.char_count());
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = DocumentInput::new();
        input.set_text("naïve café");
        input.backspace();
        assert_eq!(input.text(), "naïve caf");
        input.move_line_start();
        input.delete();
        assert_eq!(input.text(), "aïve caf");
    }

    #[test]
    fn test_cursor_position_and_line_moves() {
        let mut input = DocumentInput::new();
        input.set_text("first\nsecond line\nthird");
        assert_eq!(input.cursor_position(), (2, 5));

        for _ in 0..8 {
            input.move_left();
        }
        // Inside "second line"
        assert_eq!(input.cursor_position(), (1, 9));
        input.move_line_start();
        assert_eq!(input.cursor_position(), (1, 0));
        input.move_line_end();
        assert_eq!(input.cursor_position(), (1, 11));
    }

    #[test]
    fn test_is_blank() {
        let mut input = DocumentInput::new();
        assert!(input.is_blank());
        input.set_text("  \n\t ");
        assert!(input.is_blank());
        input.insert_char('x');
        assert!(!input.is_blank());
        input.clear();
        assert!(input.is_blank());
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_bounds_are_safe() {
        let mut input = DocumentInput::new();
        input.backspace();
        input.delete();
        input.move_left();
        input.move_right();
        assert_eq!(input.text(), "");
        assert_eq!(input.cursor(), 0);
    }
}
