use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::types::Position;

/// Convenience alias used throughout the editor API.
pub type Result<T, E = EditorError> = std::result::Result<T, E>;

/// Top-level error type for editor operations.
///
/// Out-of-range positions are never reported here; they are clamped in place.
/// These variants cover broken preconditions and failures of collaborators.
#[derive(Debug, Error, Diagnostic)]
pub enum EditorError {
    #[error("no text buffer is bound to the editor")]
    #[diagnostic(code(editor::no_buffer), help("bind one with `Editor::set_buffer`"))]
    NoBuffer,

    #[error("no selection has been started")]
    #[diagnostic(code(editor::selection::not_started))]
    NoActiveSelection,

    #[error("the current selection has no end position")]
    #[diagnostic(code(editor::selection::incomplete))]
    IncompleteSelection,

    #[error("selection end {end} lies before its start {start}")]
    #[diagnostic(code(editor::selection::invalid))]
    InvalidSelection { start: Position, end: Position },

    #[error("line {line} is outside the buffer ({lines} lines)")]
    #[diagnostic(code(editor::line_out_of_range))]
    LineOutOfRange { line: usize, lines: usize },

    #[error("replacement text must not contain line breaks")]
    #[diagnostic(
        code(editor::multi_line_text),
        help("use `replace_selection_with_text_buffer` for multi-line text")
    )]
    MultiLineText,

    #[error("invalid search pattern `{pattern}`")]
    #[diagnostic(code(editor::pattern))]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("{operation} operations are not permitted")]
    #[diagnostic(code(editor::load_save_disabled))]
    LoadSaveDisabled { operation: &'static str },

    #[error("the buffer has no associated file")]
    #[diagnostic(code(editor::no_file_path), help("use `save_as` to pick a path"))]
    NoFilePath,

    #[error(transparent)]
    #[diagnostic(transparent)]
    Io(#[from] FileError),
}

/// Failures of the file load/save collaborator.
#[derive(Debug, Error, Diagnostic)]
pub enum FileError {
    #[error("failed to read {}", path.display())]
    #[diagnostic(code(file::read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", path.display())]
    #[diagnostic(code(file::write))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Configuration errors
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("environment variable {var} is not a boolean: {value:?}")]
    #[diagnostic(code(config::invalid_bool), help("use one of true/false/1/0/yes/no"))]
    InvalidBool { var: &'static str, value: String },

    #[error("environment variable {var} must hold exactly one character, got {value:?}")]
    #[diagnostic(code(config::invalid_char))]
    InvalidChar { var: &'static str, value: String },
}
