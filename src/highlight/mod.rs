//! Regex-driven syntax highlighting
//!
//! The model is pattern matching, not parsing: an ordered registry of
//! regex rules, each mapped to a named visual tag, applied per line with
//! later rules winning on overlap. Good enough for display, deliberately
//! not for correctness-sensitive use.

mod engine;
mod rules;
mod style;
mod tags;

pub use engine::Highlighter;
pub use rules::{build_registry, TagRule};
pub use style::{Color, Style};
pub use tags::TagMap;
