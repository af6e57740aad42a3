//! fileeditor-core: cursor-addressed, line-oriented text editing.
//!
//! This crate provides:
//! - `Ordinal`, `Position`, `Selection` - 1-based, self-clamping addressing
//! - `Line` - single-line text with inclusive column ranges
//! - `TextBuffer` trait with the `LineBuffer` default, plus `TextFile` for disk I/O
//! - `Editor<B>` - cursor, selection, navigation, regex search and splicing

pub mod adapter;
pub mod config;
pub mod document;
pub mod editing;
pub mod error;
pub mod file;
pub mod line;
pub mod navigation;
pub mod ordinal;
pub mod pattern;
pub mod search;
pub mod selection;
pub mod text;
pub mod text_helpers;
pub mod types;

pub use adapter::BufferAdapter;
pub use config::EditorConfig;
pub use document::Editor;
pub use error::{ConfigError, EditorError, FileError, Result};
pub use file::TextFile;
pub use line::{Line, LineMatch};
pub use navigation::CharAt;
pub use ordinal::Ordinal;
pub use pattern::Pattern;
pub use search::{Occurrence, SearchResult};
pub use text::{LineBuffer, TextBuffer};
pub use types::{Position, Selection};
