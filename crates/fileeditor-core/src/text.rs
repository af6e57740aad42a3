//! Text buffer abstraction for editor storage.
//!
//! The `TextBuffer` trait is the storage contract the editor works against:
//! a 0-based list of raw line strings. The 0/1-based translation happens in
//! [`BufferAdapter`](crate::adapter::BufferAdapter), never here.

use std::fmt;
use std::path::{Path, PathBuf};

/// An ordered, mutable collection of lines.
///
/// Indices are 0-based. Out-of-range indices never panic: reads return
/// `None`, writes are ignored, and inserts past the end append. A read-only
/// buffer silently ignores every mutating call.
pub trait TextBuffer {
    /// Number of lines.
    fn len(&self) -> usize;

    /// Check if the buffer has no lines.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the line at `index`.
    fn line(&self, index: usize) -> Option<&str>;

    /// Replace the line at `index`.
    fn set_line(&mut self, index: usize, text: &str);

    /// Insert a line before `index`. Past the end, appends.
    fn insert_line(&mut self, index: usize, text: &str);

    /// Remove the line at `index`.
    fn remove_line(&mut self, index: usize);

    /// Append a line at the end.
    fn push_line(&mut self, text: &str);

    /// Remove every line.
    fn clear(&mut self);

    /// A fresh, empty buffer of the same kind.
    ///
    /// Implementations carry over whatever identifies the buffer (such as
    /// its file path) but none of its content.
    fn new_instance(&self) -> Self
    where
        Self: Sized;

    fn set_read_only(&mut self, read_only: bool);

    fn is_read_only(&self) -> bool;

    /// The whole buffer as text, every line terminated by `\n`.
    fn to_text(&self) -> String {
        let mut out = String::new();
        for line in (0..self.len()).filter_map(|i| self.line(i)) {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

/// In-memory line buffer, optionally tied to a file on disk.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
    path: Option<PathBuf>,
    read_only: bool,
}

impl LineBuffer {
    /// Create a new empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer holding `lines`.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Split `text` into lines. A trailing newline does not add an empty line.
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    /// The file this buffer was loaded from or last saved to.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub(crate) fn set_path(&mut self, path: PathBuf) {
        self.path = Some(path);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Replace all content without touching the read-only flag or path.
    pub(crate) fn replace_content(&mut self, lines: Vec<String>) {
        self.lines = lines;
    }

    fn writable(&self, op: &'static str) -> bool {
        if self.read_only {
            tracing::trace!(target: "fileeditor::buffer", op, "ignored on read-only buffer");
        }
        !self.read_only
    }
}

impl TextBuffer for LineBuffer {
    fn len(&self) -> usize {
        self.lines.len()
    }

    fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    fn set_line(&mut self, index: usize, text: &str) {
        if !self.writable("set_line") {
            return;
        }
        if let Some(line) = self.lines.get_mut(index) {
            line.clear();
            line.push_str(text);
        }
    }

    fn insert_line(&mut self, index: usize, text: &str) {
        if !self.writable("insert_line") {
            return;
        }
        let index = index.min(self.lines.len());
        self.lines.insert(index, text.to_string());
    }

    fn remove_line(&mut self, index: usize) {
        if !self.writable("remove_line") {
            return;
        }
        if index < self.lines.len() {
            self.lines.remove(index);
        }
    }

    fn push_line(&mut self, text: &str) {
        if self.writable("push_line") {
            self.lines.push(text.to_string());
        }
    }

    fn clear(&mut self) {
        if self.writable("clear") {
            self.lines.clear();
        }
    }

    fn new_instance(&self) -> Self {
        Self {
            lines: Vec::new(),
            path: self.path.clone(),
            read_only: false,
        }
    }

    fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    fn is_read_only(&self) -> bool {
        self.read_only
    }
}

impl fmt::Display for LineBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl From<&str> for LineBuffer {
    fn from(s: &str) -> Self {
        Self::from_text(s)
    }
}

impl From<Vec<String>> for LineBuffer {
    fn from(lines: Vec<String>) -> Self {
        Self {
            lines,
            ..Self::default()
        }
    }
}
