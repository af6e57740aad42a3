//! The editor: a cursor, an optional selection and a bound buffer.
//!
//! Operations are spread over several modules as separate `impl` blocks:
//! this one holds binding, reads, file I/O and the debug dump; navigation,
//! searching, selections and editing live beside it.

use std::path::Path;

use crate::adapter::BufferAdapter;
use crate::config::EditorConfig;
use crate::error::{EditorError, Result};
use crate::file::TextFile;
use crate::line::Line;
use crate::ordinal::Ordinal;
use crate::text::{LineBuffer, TextBuffer};
use crate::types::{Position, Selection};

/// Cursor-addressed editor over a line buffer.
///
/// Every position is 1-based and every range inclusive. Positions that fall
/// outside the buffer are clamped back in after each operation rather than
/// reported as errors. Operations fail with [`EditorError::NoBuffer`] while
/// no buffer is bound.
#[derive(Clone, Debug)]
pub struct Editor<B: TextBuffer = LineBuffer> {
    pub(crate) adapter: Option<BufferAdapter<B>>,
    pub(crate) position: Position,
    pub(crate) selection: Option<Selection>,
    pub(crate) config: EditorConfig,
}

impl Default for Editor<LineBuffer> {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor<LineBuffer> {
    /// Create an editor over an empty in-memory buffer.
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    pub fn with_config(config: EditorConfig) -> Self {
        Self::with_buffer_and_config(LineBuffer::new(), config)
    }
}

impl<B: TextBuffer> Editor<B> {
    pub fn with_buffer(buffer: B) -> Self {
        Self::with_buffer_and_config(buffer, EditorConfig::default())
    }

    pub fn with_buffer_and_config(buffer: B, config: EditorConfig) -> Self {
        let mut editor = Self {
            adapter: None,
            position: Position::default(),
            selection: None,
            config,
        };
        editor.set_buffer(buffer);
        editor
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn set_allow_load_save(&mut self, allow: bool) {
        self.config.allow_load_save = allow;
    }

    /// Bind a new buffer, returning the previous one.
    ///
    /// The cursor is clamped into the new buffer. The selection is kept as
    /// plain positions and not re-validated.
    pub fn set_buffer(&mut self, mut buffer: B) -> Option<B> {
        if self.config.read_only {
            buffer.set_read_only(true);
        }
        tracing::debug!(
            target: "fileeditor::editor",
            lines = buffer.len(),
            read_only = buffer.is_read_only(),
            "buffer bound"
        );
        let adapter = BufferAdapter::new(buffer);
        adapter.adjust_position(&mut self.position);
        self.adapter.replace(adapter).map(BufferAdapter::into_inner)
    }

    /// Detach the bound buffer. Until another is bound, operations fail.
    pub fn take_buffer(&mut self) -> Option<B> {
        tracing::debug!(target: "fileeditor::editor", "buffer detached");
        self.adapter.take().map(BufferAdapter::into_inner)
    }

    pub fn buffer(&self) -> Result<&B> {
        Ok(self.adapter()?.inner())
    }

    /// Direct access to the buffer. The cursor is not re-clamped afterwards.
    pub fn buffer_mut(&mut self) -> Result<&mut B> {
        Ok(self.adapter_mut()?.inner_mut())
    }

    pub(crate) fn adapter(&self) -> Result<&BufferAdapter<B>> {
        self.adapter.as_ref().ok_or(EditorError::NoBuffer)
    }

    pub(crate) fn adapter_mut(&mut self) -> Result<&mut BufferAdapter<B>> {
        self.adapter.as_mut().ok_or(EditorError::NoBuffer)
    }

    /// Clamp the cursor into the buffer. Returns true if it had to move.
    pub(crate) fn adjust_position(&mut self) -> Result<bool> {
        let adapter = self.adapter.as_ref().ok_or(EditorError::NoBuffer)?;
        Ok(adapter.adjust_position(&mut self.position))
    }

    /// Number of lines in the buffer.
    pub fn line_count(&self) -> Result<usize> {
        Ok(self.adapter()?.len())
    }

    // === Cursor ===

    pub fn position(&self) -> Position {
        self.position
    }

    /// The raw cursor. Changes made through it are not clamped until the
    /// next editor operation.
    pub fn position_mut(&mut self) -> &mut Position {
        &mut self.position
    }

    /// Move the cursor, clamping it into the buffer.
    pub fn set_position(&mut self, position: Position) -> Result<()> {
        self.position = position;
        self.adjust_position()?;
        Ok(())
    }

    // === Reading ===

    /// Line `line` as text.
    pub fn line(&self, line: usize) -> Result<String> {
        Ok(self.adapter()?.line(Ordinal::from(line))?.into_string())
    }

    /// The cursor's line as text.
    pub fn current_line(&self) -> Result<String> {
        Ok(self.current_line_as_line()?.into_string())
    }

    pub fn current_line_as_line(&self) -> Result<Line> {
        self.adapter()?.line(self.position.line())
    }

    pub fn set_line(&mut self, line: usize, text: &str) -> Result<()> {
        self.adapter_mut()?.set_line(Ordinal::from(line), text);
        self.adjust_position()?;
        Ok(())
    }

    pub fn set_current_line(&mut self, text: &str) -> Result<()> {
        let line = self.position.line();
        self.adapter_mut()?.set_line(line, text);
        self.adjust_position()?;
        Ok(())
    }

    /// Columns `start..=end` of `line`.
    pub fn substring(&self, line: usize, start: usize, end: usize) -> Result<String> {
        let line = self.adapter()?.line(Ordinal::from(line))?;
        Ok(line.sub_line(start, end).into_string())
    }

    /// Columns `start..=end` of the cursor's line.
    pub fn current_substring(&self, start: usize, end: usize) -> Result<String> {
        Ok(self.current_line_as_line()?.sub_line(start, end).into_string())
    }

    // === Files ===

    fn check_load_save(&self, operation: &'static str) -> Result<()> {
        if self.config.allow_load_save {
            Ok(())
        } else {
            Err(EditorError::LoadSaveDisabled { operation })
        }
    }

    // === Debugging ===

    /// Render the whole buffer with selection markers.
    pub fn dump(&self) -> Result<String> {
        self.dump_lines(1, usize::MAX)
    }

    /// Render lines `first..=last` with selection markers.
    ///
    /// When both ends of the selection are set, `<<[` goes before the start
    /// column and `]>>` after the end column. The end is clamped to the
    /// buffer. Every rendered line ends with `\n`.
    pub fn dump_lines(&self, first: usize, last: usize) -> Result<String> {
        let adapter = self.adapter()?;
        let bounds = self
            .selection
            .and_then(|sel| sel.start().zip(sel.end()));

        let mut out = String::new();
        for n in first.max(1)..=last.min(adapter.len()) {
            let mut line = adapter.line(Ordinal::from(n))?;
            if let Some((start, end)) = bounds {
                if end.line() == n {
                    line.insert("]>>", end.column_number().saturating_add(1));
                }
                if start.line() == n {
                    line.insert("<<[", start.column_number());
                }
            }
            out.push_str(line.as_str());
            out.push('\n');
        }
        Ok(out)
    }
}

impl<B: TextBuffer + TextFile> Editor<B> {
    /// Replace the buffer content with the file at `path`.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.check_load_save("load")?;
        self.adapter_mut()?.inner_mut().load(path.as_ref())?;
        self.adjust_position()?;
        Ok(())
    }

    /// Write the buffer back to the file it came from.
    pub fn save(&self) -> Result<()> {
        self.check_load_save("save")?;
        self.adapter()?.inner().save()
    }

    pub fn save_as(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.check_load_save("save")?;
        self.adapter_mut()?.inner_mut().save_as(path.as_ref())
    }
}
