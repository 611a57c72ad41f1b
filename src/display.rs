//! Display rendering

use unicode_width::UnicodeWidthChar;

use crate::buffer::Buffer;
use crate::error::Result;
use crate::highlight::{Style, TagMap};
use crate::position::Caret;
use crate::terminal::Terminal;

/// Display state for the single editing view
pub struct Display {
    /// Whether a full redraw is needed
    needs_redraw: bool,
    /// Message to show in the minibuffer (bottom line)
    message: Option<String>,
    /// Whether to show line numbers
    show_line_numbers: bool,
    /// Display width of a tab character
    tab_width: usize,
}

impl Display {
    pub fn new(show_line_numbers: bool, tab_width: usize) -> Self {
        Self {
            needs_redraw: true,
            message: None,
            show_line_numbers,
            tab_width,
        }
    }

    /// Mark that a full redraw is needed
    pub fn force_redraw(&mut self) {
        self.needs_redraw = true;
    }

    /// Set a message to display in the minibuffer
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Width reserved for line numbers (including separator space)
    fn line_number_width(&self, line_count: usize) -> usize {
        if !self.show_line_numbers {
            return 0;
        }
        let digits = line_count.max(1).to_string().len();
        digits.max(3) + 1
    }

    /// Render the buffer view, status line, and minibuffer
    pub fn render(
        &mut self,
        terminal: &mut Terminal,
        buffer: &Buffer,
        tags: &TagMap,
        caret: Caret,
        top_line: usize,
    ) -> Result<()> {
        let cols = terminal.cols() as usize;
        let rows = terminal.rows();
        let text_rows = rows.saturating_sub(2) as usize;

        if self.needs_redraw {
            terminal.clear_screen()?;
        }

        let lnum_width = self.line_number_width(buffer.line_count());
        let text_cols = cols.saturating_sub(lnum_width);

        for row in 0..text_rows {
            let line_idx = top_line + row;
            terminal.move_cursor(row as u16, 0)?;

            if let Some(line) = buffer.line(line_idx) {
                if self.show_line_numbers {
                    let lnum = format!("{:>width$} ", line_idx + 1, width = lnum_width - 1);
                    terminal.set_dim(true)?;
                    terminal.write_str(&lnum)?;
                    terminal.set_dim(false)?;
                }
                self.render_line(terminal, line.text(), tags, line_idx, text_cols)?;
            } else {
                terminal.set_dim(true)?;
                terminal.write_str("~")?;
                terminal.set_dim(false)?;
            }

            terminal.clear_to_eol()?;
        }

        self.render_status_line(terminal, buffer, caret, rows.saturating_sub(2), cols)?;
        self.render_minibuffer(terminal, rows.saturating_sub(1), cols)?;
        self.position_cursor(terminal, buffer, caret, top_line, lnum_width)?;

        terminal.set_cursor_visible(true)?;
        terminal.flush()?;

        self.needs_redraw = false;
        Ok(())
    }

    /// Render one line as styled runs from the tag surface
    fn render_line(
        &self,
        terminal: &mut Terminal,
        text: &str,
        tags: &TagMap,
        line_idx: usize,
        max_cols: usize,
    ) -> Result<()> {
        for (chunk, style) in self.clip_runs(text, tags, line_idx, max_cols) {
            match style {
                Some(style) => {
                    terminal.apply_style(&style)?;
                    terminal.write_str(&chunk)?;
                    terminal.reset_attributes()?;
                }
                None => terminal.write_str(&chunk)?,
            }
        }
        Ok(())
    }

    /// Clip a line's styled runs to the available display width. The first
    /// run that does not fit in full ends the line: a wide character dropped
    /// at the edge leaves a gap that later runs must not slide into.
    fn clip_runs(
        &self,
        text: &str,
        tags: &TagMap,
        line_idx: usize,
        max_cols: usize,
    ) -> Vec<(String, Option<Style>)> {
        let mut out = Vec::new();
        let mut remaining = max_cols;
        for (range, style) in tags.runs(line_idx, text.len()) {
            if remaining == 0 {
                break;
            }
            let segment = safe_slice(text, range.start, range.end);
            let expanded = self.expand_tabs(segment);
            let clipped = truncate_to_width(&expanded, remaining);
            let clipped_width = string_width(&clipped);
            remaining -= clipped_width;
            let truncated = clipped_width < string_width(&expanded);
            out.push((clipped, style));
            if truncated {
                break;
            }
        }
        out
    }

    /// Render the reverse-video status line
    fn render_status_line(
        &self,
        terminal: &mut Terminal,
        buffer: &Buffer,
        caret: Caret,
        row: u16,
        cols: usize,
    ) -> Result<()> {
        terminal.move_cursor(row, 0)?;
        terminal.set_reverse(true)?;

        let modified = if buffer.is_modified() { "**" } else { "--" };
        let status = format!(
            "{} tinted: {} L{} ",
            modified,
            buffer.path().display(),
            caret.line + 1,
        );

        let padded = if status.len() < cols {
            format!("{}{}", status, "-".repeat(cols - status.len()))
        } else {
            truncate_to_width(&status, cols)
        };
        terminal.write_str(&padded)?;
        terminal.set_reverse(false)?;
        Ok(())
    }

    /// Render the minibuffer (message area)
    fn render_minibuffer(&self, terminal: &mut Terminal, row: u16, cols: usize) -> Result<()> {
        terminal.move_cursor(row, 0)?;
        if let Some(ref msg) = self.message {
            terminal.write_str(&truncate_to_width(msg, cols))?;
        }
        terminal.clear_to_eol()?;
        Ok(())
    }

    /// Put the hardware cursor where the caret is
    fn position_cursor(
        &self,
        terminal: &mut Terminal,
        buffer: &Buffer,
        caret: Caret,
        top_line: usize,
        lnum_width: usize,
    ) -> Result<()> {
        let display_col = buffer
            .line(caret.line)
            .map_or(0, |line| self.display_col(line.text(), caret.byte));

        let screen_row = caret.line.saturating_sub(top_line) as u16;
        let screen_col =
            (lnum_width + display_col).min(terminal.cols().saturating_sub(1) as usize) as u16;

        terminal.move_cursor(screen_row, screen_col)?;
        Ok(())
    }

    /// Display column of a byte offset, tab-aware
    fn display_col(&self, text: &str, byte: usize) -> usize {
        text[..byte.min(text.len())]
            .chars()
            .map(|ch| self.char_width(ch))
            .sum()
    }

    fn char_width(&self, ch: char) -> usize {
        if ch == '\t' {
            self.tab_width
        } else {
            ch.width().unwrap_or(1)
        }
    }

    fn expand_tabs(&self, s: &str) -> String {
        if !s.contains('\t') {
            return s.to_string();
        }
        s.replace('\t', &" ".repeat(self.tab_width))
    }
}

/// Width of a tab-free string in display columns
fn string_width(s: &str) -> usize {
    s.chars().map(|ch| ch.width().unwrap_or(1)).sum()
}

/// Truncate a string to fit within a display width
fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(1);
        if width + ch_width > max_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result
}

/// Slice at the nearest valid char boundaries around the given range
fn safe_slice(s: &str, start: usize, end: usize) -> &str {
    let mut start = start.min(s.len());
    while start > 0 && !s.is_char_boundary(start) {
        start -= 1;
    }
    let mut end = end.min(s.len());
    while end < s.len() && !s.is_char_boundary(end) {
        end += 1;
    }
    &s[start..end]
}
