//! Loading and saving buffers as plain text files.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{EditorError, FileError, Result};
use crate::text::{LineBuffer, TextBuffer};

/// A buffer that can be read from and written to disk.
///
/// Files are written as one line per buffer line, each terminated by `\n`.
/// Reading accepts both `\n` and `\r\n` line endings.
pub trait TextFile {
    /// Replace the content with the lines of `path` and remember the path.
    fn load(&mut self, path: &Path) -> Result<()>;

    /// Write to the remembered path.
    fn save(&self) -> Result<()>;

    /// Write to `path` and remember it for later saves.
    fn save_as(&mut self, path: &Path) -> Result<()>;
}

fn read_lines(path: &Path) -> std::result::Result<Vec<String>, FileError> {
    let read_err = |source| FileError::Read {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(read_err)?;
    BufReader::new(file)
        .lines()
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(read_err)
}

fn write_lines<B: TextBuffer>(buffer: &B, path: &Path) -> std::result::Result<(), FileError> {
    let write_err = |source| FileError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = BufWriter::new(File::create(path).map_err(write_err)?);
    for line in (0..buffer.len()).filter_map(|i| buffer.line(i)) {
        writeln!(writer, "{line}").map_err(write_err)?;
    }
    writer.flush().map_err(write_err)
}

impl TextFile for LineBuffer {
    fn load(&mut self, path: &Path) -> Result<()> {
        let lines = read_lines(path)?;
        tracing::debug!(
            target: "fileeditor::file",
            path = %path.display(),
            lines = lines.len(),
            "loaded"
        );
        self.replace_content(lines);
        self.set_path(path.to_path_buf());
        Ok(())
    }

    fn save(&self) -> Result<()> {
        let path = self.path().ok_or(EditorError::NoFilePath)?;
        write_lines(self, path)?;
        tracing::debug!(target: "fileeditor::file", path = %path.display(), lines = self.len(), "saved");
        Ok(())
    }

    fn save_as(&mut self, path: &Path) -> Result<()> {
        write_lines(self, path)?;
        tracing::debug!(target: "fileeditor::file", path = %path.display(), lines = self.len(), "saved");
        self.set_path(path.to_path_buf());
        Ok(())
    }
}
