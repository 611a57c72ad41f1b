//! The ordered tag/pattern registry
//!
//! Rules are listed from least to most visually important: the highlighter
//! applies them in order and a later tag overwrites an earlier one wherever
//! their matches overlap, so registry order alone defines precedence.

use fancy_regex::Regex;

use super::style::Style;
use crate::error::{EditorError, Result};

/// Reserved words of the target language
const KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break",
    "class", "continue", "def", "del", "elif", "else", "except", "finally",
    "for", "from", "global", "if", "import", "in", "is", "lambda", "nonlocal",
    "not", "or", "pass", "raise", "return", "try", "while", "with", "yield",
];

/// Fixed registry of builtin names
const BUILTINS: &[&str] = &[
    "abs", "all", "any", "ascii", "bin", "bool", "bytearray", "bytes",
    "callable", "chr", "classmethod", "compile", "complex", "delattr", "dict",
    "dir", "divmod", "enumerate", "eval", "exec", "filter", "float", "format",
    "frozenset", "getattr", "globals", "hasattr", "hash", "help", "hex", "id",
    "input", "int", "isinstance", "issubclass", "iter", "len", "list",
    "locals", "map", "max", "memoryview", "min", "next", "object", "oct",
    "open", "ord", "pow", "print", "property", "range", "repr", "reversed",
    "round", "set", "setattr", "slice", "sorted", "staticmethod", "str",
    "sum", "super", "tuple", "type", "vars", "zip",
];

/// Operator tokens, matched literally. Alternation is leftmost-first, so the
/// single `/` wins over `//` and a floor division renders as two division
/// tokens; visually identical, since both carry the same tag.
const OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "//", "%", "**", "|", "&", "<<", ">>", "==", "!=",
    "<", "<=", ">", ">=",
];

/// One entry of the registry: a named pattern with its display style
pub struct TagRule {
    pub name: &'static str,
    pub pattern: Regex,
    pub style: Style,
}

impl TagRule {
    /// Compile a rule. A malformed pattern is a configuration error that
    /// must keep the registry from being built at all.
    fn new(name: &'static str, pattern: &str, style: Style) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|source| EditorError::Pattern {
            name,
            source: Box::new(source),
        })?;
        Ok(Self {
            name,
            pattern,
            style,
        })
    }
}

/// Wrap a pattern so a match cannot touch identifier or dot characters and
/// cannot be followed by `(`. This keeps `for` out of `forest`, `object.for`,
/// and call-looking positions.
fn bounded(pattern: &str) -> String {
    format!(r"(?<![\w.])(?:{pattern})(?![\w.(])")
}

/// Build the highlight registry, in increasing order of visual importance.
///
/// `comments` is deliberately last: a `#` anywhere forces the remainder of
/// the line to render as a comment, even inside what looks like a string.
pub fn build_registry() -> Result<Vec<TagRule>> {
    let keywords = KEYWORDS.join("|");
    let builtins = BUILTINS.join("|");
    let operators = OPERATORS
        .iter()
        .map(|token| fancy_regex::escape(token).into_owned())
        .collect::<Vec<_>>()
        .join("|");

    Ok(vec![
        TagRule::new("keyword", &bounded(&keywords), Style::rgb(0xFF, 0xA5, 0x00))?,
        TagRule::new("function", r"(?<![\w)])\w+(?=\()", Style::rgb(0x00, 0x00, 0xFF))?,
        TagRule::new("builtins", &bounded(&builtins), Style::rgb(0x00, 0xA5, 0xA5))?,
        TagRule::new("operators", &format!("(?:{operators})"), Style::rgb(0x00, 0xFF, 0x00))?,
        TagRule::new("number", &bounded(r"\d+\.?\d*"), Style::rgb(0xFF, 0x00, 0x00))?,
        TagRule::new("quotes", r#"[FfrRuU]?".*""#, Style::rgb(0xB0, 0xB0, 0x00))?,
        TagRule::new("comments", "#.+$", Style::rgb(0x80, 0x80, 0x80))?,
    ])
}
