//! Text of an inline comment form that has not been submitted yet.

/// An open inline comment draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentDraft {
    /// The comment body being edited.
    pub body: String,
    /// Cursor position within the body (byte offset).
    pub cursor: usize,
}

impl CommentDraft {
    /// Create an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a character at the cursor position.
    pub fn insert_char(&mut self, c: char) {
        self.body.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Insert a string at the cursor position.
    pub fn insert_str(&mut self, s: &str) {
        self.body.insert_str(self.cursor, s);
        self.cursor += s.len();
    }

    /// Delete the character before the cursor (backspace).
    pub fn delete_char_before(&mut self) {
        if let Some((prev, _)) = self.body[..self.cursor].char_indices().last() {
            self.body.remove(prev);
            self.cursor = prev;
        }
    }

    /// Insert a newline.
    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// Check if the body is empty (ignoring whitespace).
    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty()
    }

    /// The body as it is submitted.
    pub fn trimmed(&self) -> &str {
        self.body.trim()
    }
}
