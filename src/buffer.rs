//! Buffer representation - the file's lines plus save/load metadata

use std::path::{Path, PathBuf};

use crate::error::{EditorError, Result};
use crate::line::Line;
use crate::position::{Position, Span};

/// Line ending style detected at load time and reused at save time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// The in-memory document: a list of lines with an associated file path
#[derive(Debug)]
pub struct Buffer {
    lines: Vec<Line>,
    path: PathBuf,
    modified: bool,
    ending: LineEnding,
    /// Whether the file content ends with a line break
    trailing_newline: bool,
}

impl Buffer {
    /// Load a buffer from an existing file.
    ///
    /// A missing file is a distinct error so startup can fail before the
    /// terminal takes over the screen.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(EditorError::FileNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_content(path.to_path_buf(), content))
    }

    /// Build a buffer from raw content, detecting the line ending style
    pub fn from_content(path: PathBuf, content: String) -> Self {
        let ending = if content.contains("\r\n") {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        };
        let trailing_newline = content.ends_with('\n');

        let mut lines: Vec<Line> = content
            .split('\n')
            .map(|piece| Line::from(piece.strip_suffix('\r').unwrap_or(piece)))
            .collect();
        if trailing_newline {
            // split() leaves an empty piece after the final newline
            lines.pop();
        }
        if lines.is_empty() {
            lines.push(Line::new());
        }

        Self {
            lines,
            path,
            modified: false,
            ending,
            trailing_newline,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, idx: usize) -> Option<&Line> {
        self.lines.get(idx)
    }

    /// Span bounding exactly one logical line
    pub fn line_span(&self, idx: usize) -> Option<Span> {
        self.lines.get(idx).map(|line| {
            Span::new(Position::new(idx, 0), Position::new(idx, line.len()))
        })
    }

    /// Span of the line above the given one
    pub fn prev_line_span(&self, line_idx: usize) -> Option<Span> {
        line_idx.checked_sub(1).and_then(|idx| self.line_span(idx))
    }

    /// Read the text bounded by a one-line span, clamped to the live line
    pub fn span_text(&self, span: Span) -> &str {
        self.lines
            .get(span.line())
            .map_or("", |line| line.safe_slice(span.start.byte, span.end.byte))
    }

    /// Insert a character at position
    pub fn insert_char(&mut self, line_idx: usize, byte_pos: usize, ch: char) {
        if let Some(line) = self.lines.get_mut(line_idx) {
            line.insert_char(byte_pos, ch);
            self.modified = true;
        }
    }

    /// Insert a string at position
    pub fn insert_str(&mut self, line_idx: usize, byte_pos: usize, s: &str) {
        if let Some(line) = self.lines.get_mut(line_idx) {
            line.insert_str(byte_pos, s);
            self.modified = true;
        }
    }

    /// Commit a line break, splitting the line at the given byte
    pub fn split_line(&mut self, line_idx: usize, byte_pos: usize) {
        if let Some(line) = self.lines.get_mut(line_idx) {
            let rest = line.split_off(byte_pos);
            self.lines.insert(line_idx + 1, rest);
            self.modified = true;
        }
    }

    /// Delete the character before the position, returning the new byte offset
    pub fn delete_backward(&mut self, line_idx: usize, byte_pos: usize) -> Option<usize> {
        let line = self.lines.get_mut(line_idx)?;
        let before = &line.text()[..byte_pos.min(line.len())];
        let ch = before.chars().last()?;
        let new_pos = byte_pos - ch.len_utf8();
        line.delete_range(new_pos, byte_pos);
        self.modified = true;
        Some(new_pos)
    }

    /// Join a line onto the previous one (backspace at column zero).
    /// Returns the byte offset of the join point in the previous line.
    pub fn join_with_previous(&mut self, line_idx: usize) -> Option<usize> {
        if line_idx == 0 || line_idx >= self.lines.len() {
            return None;
        }
        let current = self.lines.remove(line_idx);
        let prev = self.lines.get_mut(line_idx - 1)?;
        let join_pos = prev.len();
        prev.append(current);
        self.modified = true;
        Some(join_pos)
    }

    /// The full document content as it would be written to disk
    pub fn content(&self) -> String {
        let mut out = self
            .lines
            .iter()
            .map(|l| l.text())
            .collect::<Vec<_>>()
            .join(self.ending.as_str());
        if self.trailing_newline {
            out.push_str(self.ending.as_str());
        }
        out
    }

    /// Write the full content back to the file path.
    ///
    /// On failure the in-memory content is untouched and the error is
    /// returned for the caller to surface.
    pub fn save(&mut self) -> Result<()> {
        std::fs::write(&self.path, self.content())?;
        self.modified = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(content: &str) -> Buffer {
        Buffer::from_content("test.py".into(), content.to_string())
    }

    #[test]
    fn test_load_splits_lines() {
        let buf = buffer("a\nb\nc\n");
        assert_eq!(buf.line_count(), 3);
        assert_eq!(buf.line(1).unwrap().text(), "b");
        assert!(!buf.is_modified());
    }

    #[test]
    fn test_empty_content_has_one_line() {
        let buf = buffer("");
        assert_eq!(buf.line_count(), 1);
        assert!(buf.line(0).unwrap().is_empty());
    }

    #[test]
    fn test_content_round_trip() {
        for content in ["a\nb\nc\n", "a\nb", "", "x\r\ny\r\n", "one line\n"] {
            let buf = buffer(content);
            let rebuilt = Buffer::from_content("test.py".into(), buf.content());
            assert_eq!(rebuilt.content(), buf.content(), "content {:?}", content);
        }
    }

    #[test]
    fn test_crlf_detection() {
        let buf = buffer("a\r\nb\r\n");
        assert_eq!(buf.line(0).unwrap().text(), "a");
        assert_eq!(buf.content(), "a\r\nb\r\n");
    }

    #[test]
    fn test_split_and_join() {
        let mut buf = buffer("hello world");
        buf.split_line(0, 5);
        assert_eq!(buf.line_count(), 2);
        assert_eq!(buf.line(0).unwrap().text(), "hello");
        assert_eq!(buf.line(1).unwrap().text(), " world");

        let join_pos = buf.join_with_previous(1).unwrap();
        assert_eq!(join_pos, 5);
        assert_eq!(buf.line(0).unwrap().text(), "hello world");
    }

    #[test]
    fn test_delete_backward_multibyte() {
        let mut buf = buffer("aé");
        let new_pos = buf.delete_backward(0, 3).unwrap();
        assert_eq!(new_pos, 1);
        assert_eq!(buf.line(0).unwrap().text(), "a");
    }

    #[test]
    fn test_span_text_clamps_to_live_line() {
        let buf = buffer("short");
        let span = Span::new(Position::new(0, 0), Position::new(0, 100));
        assert_eq!(buf.span_text(span), "short");
    }

    #[test]
    fn test_missing_file_is_distinct_error() {
        let err = Buffer::from_file(Path::new("/no/such/file.py")).unwrap_err();
        assert!(matches!(err, EditorError::FileNotFound(_)));
    }

    #[test]
    fn test_save_then_reload_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("draft.py");
        std::fs::write(&path, "def f():\n\tpass\n").unwrap();

        let mut buf = Buffer::from_file(&path).unwrap();
        buf.insert_str(1, 5, " # noqa");
        buf.save().unwrap();

        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert_eq!(on_disk, buf.content());

        let reloaded = Buffer::from_file(&path).unwrap();
        assert_eq!(reloaded.content(), buf.content());
        assert!(!buf.is_modified());
    }
}
