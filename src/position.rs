//! Buffer positions, line spans, and caret movement

use crate::buffer::Buffer;

/// A location in the buffer: line index plus byte offset within that line.
///
/// Positions are always resolved against the live buffer when used; they are
/// never cached across edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub byte: usize,
}

impl Position {
    pub fn new(line: usize, byte: usize) -> Self {
        Self { line, byte }
    }
}

/// A half-open range of buffer positions.
///
/// Spans produced by [`Buffer::line_span`] bound exactly one logical line,
/// with no embedded line breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// The line this span lives on (spans never cross lines)
    pub fn line(&self) -> usize {
        self.start.line
    }
}

/// The editing cursor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Caret {
    pub line: usize,
    pub byte: usize,
}

impl Caret {
    pub fn position(&self) -> Position {
        Position::new(self.line, self.byte)
    }

    /// Move one character left, wrapping to the end of the previous line
    pub fn move_left(&mut self, buffer: &Buffer) {
        if self.byte > 0 {
            if let Some(line) = buffer.line(self.line) {
                let before = &line.text()[..self.byte.min(line.len())];
                if let Some(ch) = before.chars().last() {
                    self.byte -= ch.len_utf8();
                }
            }
        } else if self.line > 0 {
            self.line -= 1;
            self.byte = buffer.line(self.line).map_or(0, |l| l.len());
        }
    }

    /// Move one character right, wrapping to the start of the next line
    pub fn move_right(&mut self, buffer: &Buffer) {
        if let Some(line) = buffer.line(self.line) {
            if self.byte < line.len() {
                if let Some(ch) = line.text()[self.byte..].chars().next() {
                    self.byte += ch.len_utf8();
                }
            } else if self.line + 1 < buffer.line_count() {
                self.line += 1;
                self.byte = 0;
            }
        }
    }

    /// Move to the previous line, keeping the byte offset where possible
    pub fn move_up(&mut self, buffer: &Buffer) {
        if self.line > 0 {
            self.line -= 1;
            self.snap(buffer);
        }
    }

    /// Move to the next line, keeping the byte offset where possible
    pub fn move_down(&mut self, buffer: &Buffer) {
        if self.line + 1 < buffer.line_count() {
            self.line += 1;
            self.snap(buffer);
        }
    }

    /// Move to the start of the current line
    pub fn move_line_start(&mut self) {
        self.byte = 0;
    }

    /// Move to the end of the current line
    pub fn move_line_end(&mut self, buffer: &Buffer) {
        self.byte = buffer.line(self.line).map_or(0, |l| l.len());
    }

    /// Clamp the byte offset to the current line, on a char boundary
    fn snap(&mut self, buffer: &Buffer) {
        if let Some(line) = buffer.line(self.line) {
            self.byte = line.floor_char_boundary(self.byte.min(line.len()));
        } else {
            self.byte = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Buffer;

    fn buffer(content: &str) -> Buffer {
        Buffer::from_content("test.py".into(), content.to_string())
    }

    #[test]
    fn test_left_right_within_line() {
        let buf = buffer("abc\ndef");
        let mut caret = Caret::default();
        caret.move_right(&buf);
        assert_eq!(caret, Caret { line: 0, byte: 1 });
        caret.move_left(&buf);
        assert_eq!(caret, Caret { line: 0, byte: 0 });
    }

    #[test]
    fn test_wrap_across_lines() {
        let buf = buffer("ab\ncd");
        let mut caret = Caret { line: 0, byte: 2 };
        caret.move_right(&buf);
        assert_eq!(caret, Caret { line: 1, byte: 0 });
        caret.move_left(&buf);
        assert_eq!(caret, Caret { line: 0, byte: 2 });
    }

    #[test]
    fn test_left_over_multibyte_char() {
        let buf = buffer("aé");
        let mut caret = Caret { line: 0, byte: 3 };
        caret.move_left(&buf);
        assert_eq!(caret.byte, 1);
    }

    #[test]
    fn test_up_down_snap_to_shorter_line() {
        let buf = buffer("long line\nab\nanother long");
        let mut caret = Caret { line: 0, byte: 7 };
        caret.move_down(&buf);
        assert_eq!(caret, Caret { line: 1, byte: 2 });
        caret.move_down(&buf);
        assert_eq!(caret, Caret { line: 2, byte: 2 });
    }

    #[test]
    fn test_line_start_end() {
        let buf = buffer("hello");
        let mut caret = Caret { line: 0, byte: 2 };
        caret.move_line_end(&buf);
        assert_eq!(caret.byte, 5);
        caret.move_line_start();
        assert_eq!(caret.byte, 0);
    }
}
