//! Named tag assignments over buffer positions
//!
//! This is the tag side of the rendering surface: tags are registered once
//! with a display style, then assigned and cleared over byte ranges of
//! individual lines. Assignment overwrites, so on overlapping ranges the
//! most recently applied tag is the one that renders.

use super::style::Style;
use crate::position::Span;

/// Per-line, per-byte tag assignments for the whole document
#[derive(Debug, Default)]
pub struct TagMap {
    /// Registered tag names, in definition order
    names: Vec<&'static str>,
    /// Style for each registered tag, same indexing as `names`
    styles: Vec<Style>,
    /// For each line, the winning tag id per byte (None = untagged)
    lines: Vec<Vec<Option<u16>>>,
}

impl TagMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a named tag's display style. Called once per tag at setup;
    /// names must be unique.
    pub fn define_tag(&mut self, name: &'static str, style: Style) {
        debug_assert!(
            !self.names.contains(&name),
            "tag '{name}' defined twice"
        );
        self.names.push(name);
        self.styles.push(style);
    }

    fn tag_id(&self, name: &str) -> Option<u16> {
        self.names.iter().position(|&n| n == name).map(|i| i as u16)
    }

    /// Make sure the per-line table covers `count` lines
    pub fn ensure_lines(&mut self, count: usize) {
        if self.lines.len() < count {
            self.lines.resize_with(count, Vec::new);
        }
    }

    /// Track a line inserted into the buffer (it starts untagged)
    pub fn insert_line(&mut self, idx: usize) {
        let idx = idx.min(self.lines.len());
        self.lines.insert(idx, Vec::new());
    }

    /// Track a line removed from the buffer
    pub fn remove_line(&mut self, idx: usize) {
        if idx < self.lines.len() {
            self.lines.remove(idx);
        }
    }

    /// Remove every tag assignment within the span, across all defined tags
    pub fn clear_span(&mut self, span: Span) {
        if let Some(cells) = self.lines.get_mut(span.line()) {
            let end = span.end.byte.min(cells.len());
            for cell in &mut cells[span.start.byte.min(end)..end] {
                *cell = None;
            }
        }
    }

    /// Assign a tag over a one-line span, overwriting anything beneath it
    pub fn apply(&mut self, name: &str, span: Span) {
        let Some(id) = self.tag_id(name) else {
            debug_assert!(false, "tag '{name}' not defined");
            return;
        };
        self.ensure_lines(span.line() + 1);
        let cells = &mut self.lines[span.line()];
        if cells.len() < span.end.byte {
            cells.resize(span.end.byte, None);
        }
        for cell in &mut cells[span.start.byte..span.end.byte] {
            *cell = Some(id);
        }
    }

    /// The winning tag at a byte position, if any
    pub fn tag_at(&self, line: usize, byte: usize) -> Option<&'static str> {
        let id = (*self.lines.get(line)?.get(byte)?)?;
        self.names.get(id as usize).copied()
    }

    /// Contiguous (byte range, style) runs covering `0..len` of a line,
    /// for rendering. Untagged stretches carry `None`.
    pub fn runs(&self, line: usize, len: usize) -> Vec<(std::ops::Range<usize>, Option<Style>)> {
        let mut out = Vec::new();
        if len == 0 {
            return out;
        }
        let cells = self.lines.get(line);
        let id_at = |byte: usize| -> Option<u16> {
            cells.and_then(|c| c.get(byte).copied()).flatten()
        };

        let mut start = 0;
        let mut current = id_at(0);
        for byte in 1..len {
            let id = id_at(byte);
            if id != current {
                out.push((start..byte, current.map(|i| self.styles[i as usize])));
                start = byte;
                current = id;
            }
        }
        out.push((start..len, current.map(|i| self.styles[i as usize])));
        out
    }
}
