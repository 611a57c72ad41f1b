//! The matching-and-tagging engine
//!
//! A highlight pass over a span clears every tag assignment in it, then
//! applies each registry rule in order, tagging all of its matches. Later
//! rules overwrite earlier ones on overlap, so final visual precedence
//! equals registry order.

use super::rules::{build_registry, TagRule};
use super::tags::TagMap;
use crate::buffer::Buffer;
use crate::error::Result;
use crate::position::{Position, Span};

pub struct Highlighter {
    registry: Vec<TagRule>,
}

impl Highlighter {
    /// Build the highlighter. Fails fast if any registry pattern is
    /// malformed; matching itself can never fail a pass.
    pub fn new() -> Result<Self> {
        Ok(Self {
            registry: build_registry()?,
        })
    }

    /// Register each rule's display style on the tag surface, once at setup
    pub fn install_tags(&self, tags: &mut TagMap) {
        for rule in &self.registry {
            tags.define_tag(rule.name, rule.style);
        }
    }

    /// Re-highlight one line span.
    ///
    /// Match offsets are relative to the span's substring and are re-resolved
    /// into absolute positions anchored at `span.start`, against the live
    /// line. A resolved range falling outside the line is a no-op for that
    /// match, not an error.
    pub fn highlight(&self, buffer: &Buffer, tags: &mut TagMap, span: Span) {
        let Some(line) = buffer.line(span.line()) else {
            return;
        };
        let anchor = span.start.byte;
        let text = line.safe_slice(anchor, span.end.byte);

        tags.clear_span(span);
        for rule in &self.registry {
            for m in rule.pattern.find_iter(text) {
                // a search error (e.g. backtrack limit) means zero further
                // spans for this rule, never a failed pass
                let Ok(m) = m else { break };
                let start = anchor + m.start();
                if start >= line.len() {
                    continue;
                }
                let end = (anchor + m.end()).min(line.len());
                tags.apply(
                    rule.name,
                    Span::new(
                        Position::new(span.line(), start),
                        Position::new(span.line(), end),
                    ),
                );
            }
        }
    }

    /// Highlight the whole document, one line span at a time, top to bottom.
    /// Used once, at document load.
    pub fn highlight_all(&self, buffer: &Buffer, tags: &mut TagMap) {
        tags.ensure_lines(buffer.line_count());
        for idx in 0..buffer.line_count() {
            if let Some(span) = buffer.line_span(idx) {
                self.highlight(buffer, tags, span);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(content: &str) -> (Buffer, TagMap, Highlighter) {
        let buffer = Buffer::from_content("test.py".into(), content.to_string());
        let highlighter = Highlighter::new().unwrap();
        let mut tags = TagMap::new();
        highlighter.install_tags(&mut tags);
        (buffer, tags, highlighter)
    }

    // tag names are 'static, so the collected snapshot does not borrow
    // from the map and survives later mutation of it
    fn tag_over(tags: &TagMap, line: usize, range: std::ops::Range<usize>) -> Vec<Option<&'static str>> {
        range.map(|byte| tags.tag_at(line, byte)).collect()
    }

    #[test]
    fn test_keyword_and_number_tagging() {
        let (buffer, mut tags, hl) = setup("if x == 42:");
        hl.highlight_all(&buffer, &mut tags);

        assert_eq!(tags.tag_at(0, 0), Some("keyword")); // if
        assert_eq!(tags.tag_at(0, 5), Some("operators")); // ==
        assert_eq!(tags.tag_at(0, 8), Some("number")); // 42
        assert_eq!(tags.tag_at(0, 2), None); // space
    }

    #[test]
    fn test_comment_wins_every_overlap() {
        // a `#` after a keyword forces the remainder of the line, keyword
        // text included, to render as a comment
        let (buffer, mut tags, hl) = setup("for x # for ever");
        hl.highlight_all(&buffer, &mut tags);

        assert_eq!(tags.tag_at(0, 0), Some("keyword"));
        for byte in 6..16 {
            assert_eq!(tags.tag_at(0, byte), Some("comments"), "byte {byte}");
        }
    }

    #[test]
    fn test_pure_comment_line_is_only_comments() {
        let (buffer, mut tags, hl) = setup("# comment text");
        hl.highlight_all(&buffer, &mut tags);

        let line_len = buffer.line(0).unwrap().len();
        for byte in 0..line_len {
            assert_eq!(tags.tag_at(0, byte), Some("comments"), "byte {byte}");
        }
    }

    #[test]
    fn test_function_not_keyword_nor_builtin_at_call_site() {
        let (buffer, mut tags, hl) = setup("format(x)");
        hl.highlight_all(&buffer, &mut tags);

        for byte in 0..6 {
            assert_eq!(tags.tag_at(0, byte), Some("function"), "byte {byte}");
        }
    }

    #[test]
    fn test_per_line_pass_matches_whole_document_pass() {
        let content = "def f(x):\n\tif x >= 2: # half\n\t\treturn x // 2\n\treturn \"odd\"";
        let (buffer, mut tags, hl) = setup(content);
        hl.highlight_all(&buffer, &mut tags);

        let snapshot: Vec<Vec<Option<&'static str>>> = (0..buffer.line_count())
            .map(|idx| tag_over(&tags, idx, 0..buffer.line(idx).unwrap().len()))
            .collect();

        // re-running line by line over unchanged text must not move any tag
        for idx in 0..buffer.line_count() {
            let span = buffer.line_span(idx).unwrap();
            hl.highlight(&buffer, &mut tags, span);
        }
        let after: Vec<Vec<Option<&'static str>>> = (0..buffer.line_count())
            .map(|idx| tag_over(&tags, idx, 0..buffer.line(idx).unwrap().len()))
            .collect();

        assert_eq!(snapshot, after);
    }

    #[test]
    fn test_snapshot_survives_rehighlight_of_edited_line() {
        let (mut buffer, mut tags, hl) = setup("if x:");
        hl.highlight_all(&buffer, &mut tags);
        let before = tag_over(&tags, 0, 0..2);
        assert_eq!(before, vec![Some("keyword"); 2]);

        buffer.insert_str(0, 5, " pass");
        let span = buffer.line_span(0).unwrap();
        hl.highlight(&buffer, &mut tags, span);

        assert_eq!(tag_over(&tags, 0, 0..2), before);
    }

    #[test]
    fn test_highlight_clears_stale_tags_first() {
        let (mut buffer, mut tags, hl) = setup("while");
        hl.highlight_all(&buffer, &mut tags);
        assert_eq!(tags.tag_at(0, 0), Some("keyword"));

        // blank the keyword out and re-highlight the line
        while buffer.line(0).unwrap().len() > 0 {
            let len = buffer.line(0).unwrap().len();
            buffer.delete_backward(0, len);
        }
        buffer.insert_str(0, 0, "     ");
        let span = buffer.line_span(0).unwrap();
        hl.highlight(&buffer, &mut tags, span);

        for byte in 0..5 {
            assert_eq!(tags.tag_at(0, byte), None, "byte {byte}");
        }
    }

    #[test]
    fn test_quote_then_comment_overlap() {
        // the comment rule is last, so a `#` inside what looks like a string
        // still forces the rest of the line into the comment tag
        let (buffer, mut tags, hl) = setup(r##"x = "a # b""##);
        hl.highlight_all(&buffer, &mut tags);

        assert_eq!(tags.tag_at(0, 4), Some("quotes"));
        assert_eq!(tags.tag_at(0, 7), Some("comments")); // the '#'
        assert_eq!(tags.tag_at(0, 10), Some("comments")); // closing quote
    }

    #[test]
    fn test_out_of_range_span_is_noop() {
        let (buffer, mut tags, hl) = setup("x = 1");
        let span = Span::new(Position::new(7, 0), Position::new(7, 3));
        hl.highlight(&buffer, &mut tags, span);
        assert_eq!(tags.tag_at(7, 0), None);
    }
}
