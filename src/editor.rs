//! Session state and the main event loop
//!
//! One `Session` owns everything for one editing session: buffer, caret,
//! tag surface, highlighter, and indent tracker. All work happens
//! synchronously inside the handler for a single key event; there are no
//! timers, threads, or globals.

use std::path::Path;

use crate::buffer::Buffer;
use crate::config::Config;
use crate::display::Display;
use crate::error::Result;
use crate::highlight::{Highlighter, TagMap};
use crate::indent::IndentTracker;
use crate::input::{self, Direction, EditIntent};
use crate::position::Caret;
use crate::terminal::Terminal;

pub struct Session {
    terminal: Terminal,
    display: Display,
    buffer: Buffer,
    caret: Caret,
    tags: TagMap,
    highlighter: Highlighter,
    indent: IndentTracker,
    /// Text inserted per indentation level
    indent_unit: String,
    /// First buffer line shown on screen
    top_line: usize,
    running: bool,
}

impl Session {
    /// Load the file and highlight the whole document once
    pub fn new(terminal: Terminal, config: &Config, path: &Path) -> Result<Self> {
        let buffer = Buffer::from_file(path)?;
        let highlighter = Highlighter::new()?;
        let mut tags = TagMap::new();
        highlighter.install_tags(&mut tags);
        highlighter.highlight_all(&buffer, &mut tags);

        Ok(Self {
            terminal,
            display: Display::new(config.show_line_numbers, config.tab_width),
            buffer,
            caret: Caret::default(),
            tags,
            highlighter,
            indent: IndentTracker::new(),
            indent_unit: config.indent.text(),
            top_line: 0,
            running: true,
        })
    }

    /// Run the editor until quit
    pub fn run(&mut self) -> Result<()> {
        while self.running {
            self.scroll_to_caret();
            self.display.render(
                &mut self.terminal,
                &self.buffer,
                &self.tags,
                self.caret,
                self.top_line,
            )?;

            let event = self.terminal.read_key()?;
            let intent = input::translate(event);
            self.dispatch(intent)?;

            // the "content changed" signal: re-highlight exactly the line
            // the caret is on. Edits reaching beyond it stay stale until
            // visited, a deliberate scope limit of per-line re-highlighting.
            if intent.changes_text() {
                self.rehighlight_current_line();
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, intent: EditIntent) -> Result<()> {
        match intent {
            EditIntent::Insert(ch) => self.insert_char(ch),
            EditIntent::LineBreak => self.line_break(),
            EditIntent::Backspace => self.backspace(),
            EditIntent::Move(direction) => self.move_caret(direction),
            EditIntent::Save => self.save(),
            EditIntent::Quit => self.running = false,
            EditIntent::Unhandled => {}
        }
        Ok(())
    }

    fn insert_char(&mut self, ch: char) {
        self.display.clear_message();
        self.buffer.insert_char(self.caret.line, self.caret.byte, ch);
        self.caret.byte += ch.len_utf8();
    }

    /// Commit a line break. The just-completed line feeds the indent
    /// tracker, and the new line starts with the tracked number of indent
    /// units before anything else.
    fn line_break(&mut self) {
        self.display.clear_message();
        self.buffer.split_line(self.caret.line, self.caret.byte);
        self.tags.insert_line(self.caret.line + 1);
        self.caret.line += 1;
        self.caret.byte = 0;

        // the completed line is the one the caret just left behind
        let depth = match self.buffer.prev_line_span(self.caret.line) {
            Some(span) => {
                let completed = self.buffer.span_text(span);
                self.indent.on_line_break(completed)
            }
            None => self.indent.depth(),
        };

        if depth > 0 {
            let indent = self.indent_unit.repeat(depth);
            self.buffer.insert_str(self.caret.line, 0, &indent);
            self.caret.byte = indent.len();
        }
    }

    fn backspace(&mut self) {
        self.display.clear_message();
        if self.caret.byte > 0 {
            if let Some(new_byte) = self.buffer.delete_backward(self.caret.line, self.caret.byte) {
                self.caret.byte = new_byte;
            }
        } else if self.caret.line > 0 {
            let line = self.caret.line;
            if let Some(join_byte) = self.buffer.join_with_previous(line) {
                self.tags.remove_line(line);
                self.caret.line -= 1;
                self.caret.byte = join_byte;
            }
        }
    }

    fn move_caret(&mut self, direction: Direction) {
        match direction {
            Direction::Left => self.caret.move_left(&self.buffer),
            Direction::Right => self.caret.move_right(&self.buffer),
            Direction::Up => self.caret.move_up(&self.buffer),
            Direction::Down => self.caret.move_down(&self.buffer),
            Direction::LineStart => self.caret.move_line_start(),
            Direction::LineEnd => self.caret.move_line_end(&self.buffer),
        }
    }

    /// Write the buffer back to its file. A failed write is shown in the
    /// minibuffer; the in-memory content stays intact either way.
    fn save(&mut self) {
        match self.buffer.save() {
            Ok(()) => {
                let msg = format!("Wrote {}", self.buffer.path().display());
                self.display.set_message(msg);
            }
            Err(e) => {
                self.display.set_message(format!("Save failed: {e}"));
            }
        }
    }

    fn rehighlight_current_line(&mut self) {
        if let Some(span) = self.buffer.line_span(self.caret.line) {
            self.highlighter.highlight(&self.buffer, &mut self.tags, span);
        }
    }

    /// Keep the caret inside the visible text rows
    fn scroll_to_caret(&mut self) {
        let text_rows = self.terminal.rows().saturating_sub(2).max(1) as usize;
        if self.caret.line < self.top_line {
            self.top_line = self.caret.line;
            self.display.force_redraw();
        } else if self.caret.line >= self.top_line + text_rows {
            self.top_line = self.caret.line + 1 - text_rows;
            self.display.force_redraw();
        }
    }
}
