//! A minimal single-line text editor used by the booking form fields.

use unicode_width::UnicodeWidthStr;

/// Single-line editable text with a cursor. The cursor is tracked as a
/// character index; byte offsets are derived when mutating so multibyte
/// input stays intact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineEditor {
    value: String,
    cursor: usize,
}

impl LineEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Display width of the text before the cursor, for placing the
    /// terminal cursor.
    pub fn width_before_cursor(&self) -> usize {
        self.value[..self.byte_index(self.cursor)].width()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .map(|(i, _)| i)
            .nth(char_index)
            .unwrap_or(self.value.len())
    }

    pub fn insert(&mut self, c: char) {
        let index = self.byte_index(self.cursor);
        self.value.insert(index, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let index = self.byte_index(self.cursor - 1);
        self.value.remove(index);
        self.cursor -= 1;
    }

    pub fn delete(&mut self) {
        if self.cursor >= self.value.chars().count() {
            return;
        }
        let index = self.byte_index(self.cursor);
        self.value.remove(index);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        let max = self.value.chars().count();
        if self.cursor < max {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.chars().count();
    }

    /// Replace the content, clamping the cursor into range.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.cursor.min(self.value.chars().count());
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_insert_at_cursor() {
        let mut editor = LineEditor::new();
        editor.insert('a');
        editor.insert('c');
        editor.move_left();
        editor.insert('b');
        assert_eq!(editor.value(), "abc");
        assert_eq!(editor.cursor(), 2);
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut editor = LineEditor::with_value("abc");
        editor.backspace();
        assert_eq!(editor.value(), "ab");
        editor.move_home();
        editor.delete();
        assert_eq!(editor.value(), "b");
        editor.backspace();
        assert_eq!(editor.value(), "b");
    }

    #[test]
    fn test_multibyte_input() {
        let mut editor = LineEditor::new();
        editor.insert('か');
        editor.insert('な');
        editor.move_left();
        editor.backspace();
        assert_eq!(editor.value(), "な");
        assert_eq!(editor.cursor(), 0);
    }

    #[test]
    fn test_set_value_clamps_cursor() {
        let mut editor = LineEditor::with_value("abcdef");
        editor.move_end();
        editor.set_value("ab");
        assert_eq!(editor.cursor(), 2);
    }
}
