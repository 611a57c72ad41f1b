//! Key translation into edit intents

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Caret movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
    LineStart,
    LineEnd,
}

/// The finite set of recognized edit intents.
///
/// Every keystroke maps to exactly one variant; keys the editor does not
/// recognize map to `Unhandled`, an explicit no-op rather than a missing
/// table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditIntent {
    /// Insert a printable character at the caret
    Insert(char),
    /// Commit a line break (drives the indentation tracker)
    LineBreak,
    /// Delete backward
    Backspace,
    /// Move the caret without changing text
    Move(Direction),
    /// Write the buffer to its file
    Save,
    /// Leave the editor
    Quit,
    /// Recognized nothing; do nothing
    Unhandled,
}

impl EditIntent {
    /// Whether this intent may have changed buffer content. These are the
    /// intents that trigger a re-highlight of the current line.
    pub fn changes_text(&self) -> bool {
        matches!(
            self,
            EditIntent::Insert(_) | EditIntent::LineBreak | EditIntent::Backspace
        )
    }
}

/// Translate a crossterm key event into an edit intent.
///
/// Only press events count; release and repeat events are dropped, which
/// matters on Windows where crossterm delivers all kinds.
pub fn translate(event: KeyEvent) -> EditIntent {
    if event.kind != KeyEventKind::Press {
        return EditIntent::Unhandled;
    }

    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    match event.code {
        KeyCode::Char('s') if ctrl => EditIntent::Save,
        KeyCode::Char('q') if ctrl => EditIntent::Quit,
        KeyCode::Char(_) if ctrl => EditIntent::Unhandled,
        KeyCode::Char(ch) => EditIntent::Insert(ch),
        KeyCode::Tab => EditIntent::Insert('\t'),
        KeyCode::Enter => EditIntent::LineBreak,
        KeyCode::Backspace => EditIntent::Backspace,
        KeyCode::Left => EditIntent::Move(Direction::Left),
        KeyCode::Right => EditIntent::Move(Direction::Right),
        KeyCode::Up => EditIntent::Move(Direction::Up),
        KeyCode::Down => EditIntent::Move(Direction::Down),
        KeyCode::Home => EditIntent::Move(Direction::LineStart),
        KeyCode::End => EditIntent::Move(Direction::LineEnd),
        _ => EditIntent::Unhandled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_plain_characters_insert() {
        assert_eq!(
            translate(press(KeyCode::Char('a'), KeyModifiers::NONE)),
            EditIntent::Insert('a')
        );
        assert_eq!(
            translate(press(KeyCode::Char(':'), KeyModifiers::SHIFT)),
            EditIntent::Insert(':')
        );
    }

    #[test]
    fn test_control_chords() {
        assert_eq!(
            translate(press(KeyCode::Char('s'), KeyModifiers::CONTROL)),
            EditIntent::Save
        );
        assert_eq!(
            translate(press(KeyCode::Char('q'), KeyModifiers::CONTROL)),
            EditIntent::Quit
        );
        // an unbound chord is an explicit no-op
        assert_eq!(
            translate(press(KeyCode::Char('z'), KeyModifiers::CONTROL)),
            EditIntent::Unhandled
        );
    }

    #[test]
    fn test_line_break_and_backspace() {
        assert_eq!(
            translate(press(KeyCode::Enter, KeyModifiers::NONE)),
            EditIntent::LineBreak
        );
        assert_eq!(
            translate(press(KeyCode::Backspace, KeyModifiers::NONE)),
            EditIntent::Backspace
        );
    }

    #[test]
    fn test_release_events_are_dropped() {
        let mut event = press(KeyCode::Char('a'), KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        assert_eq!(translate(event), EditIntent::Unhandled);
    }

    #[test]
    fn test_changes_text_classification() {
        assert!(EditIntent::Insert('x').changes_text());
        assert!(EditIntent::LineBreak.changes_text());
        assert!(EditIntent::Backspace.changes_text());
        assert!(!EditIntent::Move(Direction::Left).changes_text());
        assert!(!EditIntent::Save.changes_text());
        assert!(!EditIntent::Unhandled.changes_text());
    }
}
