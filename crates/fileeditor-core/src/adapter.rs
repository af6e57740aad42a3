//! 1-based view over a 0-based [`TextBuffer`].
//!
//! This is the only place where ordinals are turned into storage indices.
//! Everything above it speaks lines and columns starting at 1.

use crate::error::{EditorError, Result};
use crate::line::Line;
use crate::ordinal::Ordinal;
use crate::text::TextBuffer;
use crate::types::Position;

/// Wraps a buffer and translates 1-based [`Ordinal`] addressing to it.
///
/// `LAST` as a line number means the final line.
#[derive(Clone, Debug, Default)]
pub struct BufferAdapter<B: TextBuffer> {
    buffer: B,
}

impl<B: TextBuffer> BufferAdapter<B> {
    pub fn new(buffer: B) -> Self {
        Self { buffer }
    }

    /// Storage index for a line ordinal.
    fn index(&self, line: Ordinal) -> usize {
        line.resolve(self.buffer.len()).saturating_sub(1)
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Read a line. Missing lines are an error.
    pub fn line(&self, line: Ordinal) -> Result<Line> {
        let lines = self.buffer.len();
        match self.buffer.line(self.index(line)) {
            Some(text) => Ok(Line::from(text)),
            None => Err(EditorError::LineOutOfRange {
                line: line.resolve(lines),
                lines,
            }),
        }
    }

    pub fn set_line(&mut self, line: Ordinal, text: &str) {
        let idx = self.index(line);
        self.buffer.set_line(idx, text);
    }

    /// Insert before `line`. Past the end, appends.
    pub fn insert_line(&mut self, line: Ordinal, text: &str) {
        let idx = line.to_zero_based().unwrap_or(usize::MAX).min(self.len());
        self.buffer.insert_line(idx, text);
    }

    pub fn remove_line(&mut self, line: Ordinal) {
        if self.buffer.is_empty() {
            return;
        }
        let idx = self.index(line);
        self.buffer.remove_line(idx);
    }

    pub fn push_line(&mut self, text: &str) {
        self.buffer.push_line(text);
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Final line number, which is also the line count.
    pub fn last_line(&self) -> usize {
        self.buffer.len()
    }

    /// Final line number as an ordinal; 1 for an empty buffer.
    pub fn last_line_number(&self) -> Ordinal {
        Ordinal::from_length(self.buffer.len())
    }

    /// Last column of `line`; 1 for an empty line.
    pub fn last_column_number(&self, line: Ordinal) -> Result<Ordinal> {
        Ok(self.line(line)?.last_column_number())
    }

    /// Clamp `column` into `line`. Returns true if it was already in bounds.
    pub fn column_within_limit(&self, line: Ordinal, column: &mut Ordinal) -> Result<bool> {
        let last = self.last_column_number(line)?;
        Ok(!column.clamp_to_limit(last.get()))
    }

    /// Clamp `line` into the buffer. Returns true if it was already in bounds.
    pub fn line_within_limit(&self, line: &mut Ordinal) -> bool {
        !line.clamp_to_limit(self.last_line_number().get())
    }

    /// Clamp both fields of `position` into the buffer.
    ///
    /// Returns true if anything changed. An empty buffer resets to 1:1.
    pub fn adjust_position(&self, position: &mut Position) -> bool {
        if self.buffer.is_empty() {
            let origin = Position::default();
            let changed = *position != origin;
            *position = origin;
            return changed;
        }
        let mut line = position.line();
        let line_changed = line.clamp_to_limit(Some(self.last_line()));
        let max_columns = self
            .line(line)
            .map(|l| l.last_column_number().resolve(1))
            .unwrap_or(1);
        position.set_line(line);
        let column_changed = position.adjust_limits(None, Some(max_columns));
        line_changed || column_changed
    }

    pub fn inner(&self) -> &B {
        &self.buffer
    }

    pub fn inner_mut(&mut self) -> &mut B {
        &mut self.buffer
    }

    pub fn into_inner(self) -> B {
        self.buffer
    }
}
