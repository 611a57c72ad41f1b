//! Line representation and text operations

/// A single line of text, stored without its trailing newline
#[derive(Debug, Clone, Default)]
pub struct Line {
    text: String,
}

impl Line {
    /// Create a new empty line
    pub fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Get the text content
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the length in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the line is empty
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Insert a character at byte position
    pub fn insert_char(&mut self, byte_pos: usize, ch: char) {
        self.text.insert(byte_pos, ch);
    }

    /// Insert a string at byte position
    pub fn insert_str(&mut self, byte_pos: usize, s: &str) {
        self.text.insert_str(byte_pos, s);
    }

    /// Delete a range of bytes and return the deleted text
    pub fn delete_range(&mut self, start: usize, end: usize) -> String {
        let deleted = self.text[start..end].to_string();
        self.text.replace_range(start..end, "");
        deleted
    }

    /// Split the line at byte position, returning the remainder
    pub fn split_off(&mut self, byte_pos: usize) -> Line {
        Line {
            text: self.text.split_off(byte_pos),
        }
    }

    /// Append another line's content to this line
    pub fn append(&mut self, other: Line) {
        self.text.push_str(&other.text);
    }

    /// Nearest valid UTF-8 char boundary at or before `pos`
    pub fn floor_char_boundary(&self, pos: usize) -> usize {
        if pos >= self.text.len() {
            return self.text.len();
        }
        let mut p = pos;
        while p > 0 && !self.text.is_char_boundary(p) {
            p -= 1;
        }
        p
    }

    /// Nearest valid UTF-8 char boundary at or after `pos`
    fn ceil_char_boundary(&self, pos: usize) -> usize {
        if pos >= self.text.len() {
            return self.text.len();
        }
        let mut p = pos;
        while p < self.text.len() && !self.text.is_char_boundary(p) {
            p += 1;
        }
        p
    }

    /// Slice the line text, adjusting out-of-range or mid-character bounds
    /// to the nearest valid ones. An invalid range yields an empty string.
    pub fn safe_slice(&self, start: usize, end: usize) -> &str {
        if start >= self.text.len() {
            return "";
        }
        let start = self.floor_char_boundary(start);
        let end = self.ceil_char_boundary(end.min(self.text.len()));
        if start >= end {
            return "";
        }
        &self.text[start..end]
    }
}

impl From<&str> for Line {
    fn from(s: &str) -> Self {
        Self {
            text: s.to_string(),
        }
    }
}

impl From<String> for Line {
    fn from(text: String) -> Self {
        Self { text }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_delete() {
        let mut line = Line::from("hello");
        line.insert_char(5, '!');
        assert_eq!(line.text(), "hello!");

        let deleted = line.delete_range(0, 2);
        assert_eq!(deleted, "he");
        assert_eq!(line.text(), "llo!");
    }

    #[test]
    fn test_split_and_append() {
        let mut line = Line::from("def f():");
        let rest = line.split_off(3);
        assert_eq!(line.text(), "def");
        assert_eq!(rest.text(), " f():");

        line.append(rest);
        assert_eq!(line.text(), "def f():");
    }

    #[test]
    fn test_safe_slice_utf8() {
        let line = Line::from("café au lait"); // 'é' is 2 bytes
        assert_eq!(line.safe_slice(0, 5), "café");
        // mid-character bounds get widened to cover the whole char
        assert_eq!(line.safe_slice(3, 4), "é");
        assert_eq!(line.safe_slice(20, 30), "");
        assert_eq!(line.safe_slice(2, 2), "");
    }

    #[test]
    fn test_floor_char_boundary() {
        let line = Line::from("aé");
        assert_eq!(line.floor_char_boundary(2), 1);
        assert_eq!(line.floor_char_boundary(10), 3);
    }

    #[test]
    fn test_empty_line() {
        let line = Line::new();
        assert!(line.is_empty());
        assert_eq!(line.safe_slice(0, 10), "");
    }
}
