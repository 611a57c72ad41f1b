//! tinted - a tiny terminal text editor with regex syntax highlighting
//! and naive auto-indentation
//!
//! The interesting parts live in [`highlight`] (the ordered tag/pattern
//! registry and the matching-and-tagging engine) and [`indent`] (the
//! stack-based block tracker). Everything else is a thin crossterm shell.

pub mod buffer;
pub mod config;
pub mod display;
pub mod editor;
pub mod error;
pub mod highlight;
pub mod indent;
pub mod input;
pub mod line;
pub mod position;
pub mod terminal;
