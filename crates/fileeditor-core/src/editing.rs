//! Line rewriting, splicing and deletion at the cursor.

use crate::document::Editor;
use crate::error::{EditorError, Result};
use crate::line::Line;
use crate::ordinal::Ordinal;
use crate::text::{LineBuffer, TextBuffer};
use crate::text_helpers;
use crate::types::Position;

/// Lines of any buffer, copied out in order.
fn collect_lines<T: TextBuffer>(buffer: &T) -> Vec<String> {
    (0..buffer.len())
        .filter_map(|i| buffer.line(i))
        .map(str::to_owned)
        .collect()
}

impl<B: TextBuffer> Editor<B> {
    pub fn replace_current_line(&mut self, text: &str) -> Result<()> {
        self.set_current_line(text)
    }

    /// Replace the text between `before` and `after` on the cursor line.
    ///
    /// Returns false, leaving the line alone, if either delimiter is missing.
    pub fn replace_current_line_between(
        &mut self,
        before: &str,
        after: &str,
        new_between: &str,
    ) -> Result<bool> {
        let mut line = self.current_line_as_line()?;
        let changed = line.replace_between(before, after, new_between);
        if changed {
            self.set_current_line(line.as_str())?;
        }
        Ok(changed)
    }

    pub fn current_line_between(&self, before: &str, after: &str) -> Result<String> {
        Ok(self.current_line_as_line()?.between(before, after))
    }

    /// Replace the first literal `find` on the cursor line.
    pub fn replace_first_in_current_line(&mut self, find: &str, with: &str) -> Result<bool> {
        let mut line = self.current_line_as_line()?;
        let changed = line.replace_first(find, with);
        if changed {
            self.set_current_line(line.as_str())?;
        }
        Ok(changed)
    }

    /// Replace every literal `find` on the cursor line.
    pub fn replace_all_in_current_line(&mut self, find: &str, with: &str) -> Result<bool> {
        let mut line = self.current_line_as_line()?;
        let changed = line.replace_all(find, with);
        if changed {
            self.set_current_line(line.as_str())?;
        }
        Ok(changed)
    }

    /// Replace every literal `find` in the buffer, line by line from the
    /// top. Returns how many lines changed.
    pub fn replace_all_in_file(&mut self, find: &str, with: &str) -> Result<usize> {
        let adapter = self.adapter_mut()?;
        let mut changed = 0;
        for n in 1..=adapter.last_line() {
            let line_no = Ordinal::from(n);
            let mut line = adapter.line(line_no)?;
            if line.replace_all(find, with) {
                adapter.set_line(line_no, line.as_str());
                changed += 1;
            }
        }
        tracing::debug!(target: "fileeditor::edit", find, with, lines = changed, "replaced in file");
        self.adjust_position()?;
        Ok(changed)
    }

    /// Replace the selection with a single line of text.
    pub fn replace_selection_with_text(&mut self, text: &str) -> Result<()> {
        if text.contains(['\n', '\r']) {
            return Err(EditorError::MultiLineText);
        }
        self.replace_selection_with_text_buffer(&LineBuffer::from_lines([text]))
    }

    /// Delete the selection, then splice `buffer` in where it was.
    ///
    /// The splice happens at the former selection start even when the
    /// deletion removed the tail of the buffer, so the new lines follow
    /// the untouched lines above.
    pub fn replace_selection_with_text_buffer<T: TextBuffer>(&mut self, buffer: &T) -> Result<()> {
        let (start, _) = self.selection_bounds()?;
        self.delete_selection()?;
        self.splice(&collect_lines(buffer), start)
    }

    /// Splice `buffer` into the text at the cursor.
    ///
    /// The first inserted line joins the text before the cursor, the last
    /// one takes the text from the cursor onwards, and any lines between
    /// become lines of their own. At column 1 the lines go in above the
    /// cursor line instead. The cursor ends just after the inserted text.
    pub fn insert_text_buffer<T: TextBuffer>(&mut self, buffer: &T) -> Result<()> {
        self.adjust_position()?;
        let at = self.position;
        self.splice(&collect_lines(buffer), at)
    }

    /// Splice `lines` in at `at`. A row one past the last line appends.
    fn splice(&mut self, lines: &[String], at: Position) -> Result<()> {
        let Some(last_inserted) = lines.last() else {
            return Ok(());
        };
        let row = at.line_number();
        let column = at.column_number();
        let adapter = self.adapter_mut()?;

        let cursor = if adapter.is_empty() || row > adapter.last_line() {
            for line in lines {
                adapter.push_line(line);
            }
            Position::new(adapter.last_line(), last_inserted.chars().count() + 1)
        } else if column > 1 {
            let current = adapter.line(Ordinal::from(row))?;
            let suffix = current.sub_line(column, usize::MAX);
            let mut head = current.sub_line(1, column - 1);
            head.append(&lines[0]);

            let rest = &lines[1..];
            if rest.is_empty() {
                head.append(suffix.as_str());
                adapter.set_line(Ordinal::from(row), head.as_str());
                Position::new(row, column + lines[0].chars().count())
            } else {
                adapter.set_line(Ordinal::from(row), head.as_str());
                for (offset, text) in rest.iter().enumerate() {
                    let mut line = Line::from(text.as_str());
                    if offset + 1 == rest.len() {
                        line.append(suffix.as_str());
                    }
                    adapter.insert_line(Ordinal::from(row + 1 + offset), line.as_str());
                }
                Position::new(row + rest.len(), last_inserted.chars().count() + 1)
            }
        } else {
            for (offset, text) in lines.iter().enumerate() {
                adapter.insert_line(Ordinal::from(row + offset), text);
            }
            Position::new(row + lines.len(), 1)
        };

        tracing::debug!(
            target: "fileeditor::edit",
            %at,
            lines = lines.len(),
            "spliced"
        );
        self.position = cursor;
        self.adjust_position()?;
        Ok(())
    }

    /// Insert every line of `buffer` below the cursor, the cursor following
    /// each one.
    pub fn insert_buffer<T: TextBuffer>(&mut self, buffer: &T) -> Result<()> {
        for line in collect_lines(buffer) {
            self.insert_line(&line)?;
        }
        Ok(())
    }

    /// Append every line of `buffer` at the end. The cursor ends on the
    /// last appended line.
    pub fn append_buffer<T: TextBuffer>(&mut self, buffer: &T) -> Result<()> {
        self.move_to_end_of_file()?;
        self.insert_buffer(buffer)
    }

    /// Insert a line below the cursor and move onto it.
    pub fn insert_line(&mut self, text: &str) -> Result<()> {
        self.adjust_position()?;
        let below = self.position.line().increment(1);
        let adapter = self.adapter_mut()?;
        if adapter.is_empty() {
            adapter.push_line(text);
            self.position = Position::default();
        } else {
            adapter.insert_line(below, text);
            self.position.set_line(below);
        }
        self.adjust_position()?;
        Ok(())
    }

    /// Insert a line above the cursor. The cursor keeps its numbers, so it
    /// ends up on the new line.
    pub fn insert_line_above(&mut self, text: &str) -> Result<()> {
        self.adjust_position()?;
        let line = self.position.line();
        self.adapter_mut()?.insert_line(line, text);
        self.adjust_position()?;
        Ok(())
    }

    /// Remove the cursor line and move up one, staying on line 1 at the top.
    pub fn delete_current_line(&mut self) -> Result<()> {
        self.adjust_position()?;
        let line = self.position.line();
        self.adapter_mut()?.remove_line(line);
        tracing::trace!(target: "fileeditor::edit", %line, "line removed");
        self.position.decrement_line(1);
        self.adjust_position()?;
        Ok(())
    }

    /// Remove the word under the cursor.
    ///
    /// Words are bounded by `delimiter`, or the configured word delimiter
    /// when `None`. The delimiters themselves are kept. The cursor ends where
    /// the word started.
    pub fn delete_current_word(&mut self, delimiter: Option<char>) -> Result<()> {
        let delimiter = delimiter.unwrap_or(self.config.word_delimiter);
        self.adjust_position()?;
        let line = self.current_line_as_line()?;
        let chars: Vec<char> = line.as_str().chars().collect();

        let start = text_helpers::word_start(&chars, self.position.column_number(), delimiter);
        let end = text_helpers::word_end(&chars, start, delimiter);
        let mut rebuilt = line.sub_line(1, start - 1);
        rebuilt.append(line.sub_line(end, usize::MAX).as_str());

        self.set_current_line(rebuilt.as_str())?;
        self.position.set_column_number(start);
        self.adjust_position()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_editor(lines: &[&str]) -> Editor {
        Editor::with_buffer(LineBuffer::from_lines(lines.iter().copied()))
    }

    fn lines(editor: &Editor) -> Vec<String> {
        editor.buffer().unwrap().lines().to_vec()
    }

    #[test]
    fn test_replace_between() {
        let mut editor = make_editor(&["<version>1.0</version>"]);
        assert_eq!(editor.current_line_between("<version>", "</version>").unwrap(), "1.0");
        assert!(editor.replace_current_line_between("<version>", "</version>", "2.0").unwrap());
        assert_eq!(editor.current_line().unwrap(), "<version>2.0</version>");

        assert!(!editor.replace_current_line_between("<name>", "</name>", "x").unwrap());
        assert_eq!(editor.current_line_between("<name>", "</name>").unwrap(), "");
    }

    #[test]
    fn test_replace_in_lines() {
        let mut editor = make_editor(&["a.b.a", "b", "a"]);
        assert!(editor.replace_first_in_current_line("a", "x").unwrap());
        assert_eq!(editor.current_line().unwrap(), "x.b.a");
        assert!(editor.replace_all_in_current_line(".", "").unwrap());
        assert_eq!(editor.current_line().unwrap(), "xba");
        assert!(!editor.replace_all_in_current_line("q", "z").unwrap());

        assert_eq!(editor.replace_all_in_file("a", "aa").unwrap(), 2);
        assert_eq!(lines(&editor), ["xbaa", "b", "aa"]);

        editor.replace_current_line("fresh").unwrap();
        assert_eq!(editor.line(1).unwrap(), "fresh");
    }

    #[test]
    fn test_replace_selection_with_text() {
        let mut editor = make_editor(&["let value = old;"]);
        editor.set_position(Position::new(1, 13)).unwrap();
        editor.start_selection();
        editor.set_position(Position::new(1, 15)).unwrap();
        editor.end_selection().unwrap();

        assert!(matches!(
            editor.replace_selection_with_text("a\nb"),
            Err(EditorError::MultiLineText)
        ));
        // Rejected before anything was deleted.
        assert!(editor.has_valid_selection());

        editor.replace_selection_with_text("new_value").unwrap();
        assert_eq!(editor.current_line().unwrap(), "let value = new_value;");
        assert_eq!(editor.position(), Position::new(1, 22));
    }

    #[test]
    fn test_replace_selection_on_last_line() {
        let mut editor = make_editor(&["a", "b"]);
        editor.set_position(Position::new(2, 1)).unwrap();
        editor.start_selection();
        editor.end_selection().unwrap();

        editor.replace_selection_with_text("X").unwrap();
        assert_eq!(lines(&editor), ["a", "X"]);
        assert_eq!(editor.position(), Position::new(2, 1));
    }

    #[test]
    fn test_replace_selection_running_to_end_of_buffer() {
        let mut editor = make_editor(&["a", "b", "c"]);
        editor.set_position(Position::new(2, 1)).unwrap();
        editor.start_selection();
        editor.set_position(Position::new(3, 1)).unwrap();
        editor.end_selection().unwrap();

        editor
            .replace_selection_with_text_buffer(&LineBuffer::from_lines(["X", "Y"]))
            .unwrap();
        assert_eq!(lines(&editor), ["a", "X", "Y"]);
        assert_eq!(editor.position(), Position::new(3, 1));
    }

    #[test]
    fn test_replace_selection_before_last_line() {
        let mut editor = make_editor(&["a", "b", "c"]);
        editor.set_position(Position::new(2, 1)).unwrap();
        editor.start_selection();
        editor.end_selection().unwrap();

        editor.replace_selection_with_text("X").unwrap();
        assert_eq!(lines(&editor), ["a", "X", "c"]);
        assert_eq!(editor.position(), Position::new(3, 1));
    }

    #[test]
    fn test_insert_text_buffer_mid_line() {
        let mut editor = make_editor(&["head|tail", "next"]);
        editor.set_position(Position::new(1, 5)).unwrap();
        editor
            .insert_text_buffer(&LineBuffer::from_lines(["A", "B", "C"]))
            .unwrap();

        assert_eq!(lines(&editor), ["headA", "B", "C|tail", "next"]);
        assert_eq!(editor.position(), Position::new(3, 2));
    }

    #[test]
    fn test_insert_text_buffer_single_line_keeps_suffix() {
        let mut editor = make_editor(&["abef"]);
        editor.set_position(Position::new(1, 3)).unwrap();
        editor.insert_text_buffer(&LineBuffer::from_lines(["cd"])).unwrap();
        assert_eq!(lines(&editor), ["abcdef"]);
        assert_eq!(editor.position(), Position::new(1, 5));
    }

    #[test]
    fn test_insert_text_buffer_at_line_start() {
        let mut editor = make_editor(&["one", "four"]);
        editor.set_position(Position::new(2, 1)).unwrap();
        editor
            .insert_text_buffer(&LineBuffer::from_lines(["two", "three"]))
            .unwrap();
        assert_eq!(lines(&editor), ["one", "two", "three", "four"]);
        assert_eq!(editor.position(), Position::new(4, 1));
    }

    #[test]
    fn test_insert_text_buffer_edge_cases() {
        let mut editor = make_editor(&["x"]);
        editor.insert_text_buffer(&LineBuffer::new()).unwrap();
        assert_eq!(lines(&editor), ["x"]);

        let mut empty = Editor::new();
        empty
            .insert_text_buffer(&LineBuffer::from_lines(["a", "bc"]))
            .unwrap();
        assert_eq!(lines(&empty), ["a", "bc"]);
        assert_eq!(empty.position(), Position::new(2, 2));
    }

    #[test]
    fn test_insert_lines() {
        let mut editor = make_editor(&["1", "3"]);
        editor.insert_line("2").unwrap();
        assert_eq!(lines(&editor), ["1", "2", "3"]);
        assert_eq!(editor.position().line_number(), 2);

        editor.insert_line_above("1.5").unwrap();
        assert_eq!(lines(&editor), ["1", "1.5", "2", "3"]);
        assert_eq!(editor.current_line().unwrap(), "1.5");

        editor.move_to_top_of_file().unwrap();
        editor.insert_buffer(&LineBuffer::from_lines(["a", "b"])).unwrap();
        assert_eq!(lines(&editor), ["1", "a", "b", "1.5", "2", "3"]);
        assert_eq!(editor.position().line_number(), 3);

        editor.append_buffer(&LineBuffer::from_lines(["end"])).unwrap();
        assert_eq!(editor.line(7).unwrap(), "end");
        assert_eq!(editor.position().line_number(), 7);
    }

    #[test]
    fn test_insert_line_into_empty_buffer() {
        let mut editor = Editor::new();
        editor.insert_line("only").unwrap();
        assert_eq!(lines(&editor), ["only"]);
        assert_eq!(editor.position(), Position::new(1, 1));
    }

    #[test]
    fn test_delete_current_line() {
        let mut editor = make_editor(&["a", "b", "c"]);
        editor.set_position(Position::new(2, 1)).unwrap();
        editor.delete_current_line().unwrap();
        assert_eq!(lines(&editor), ["a", "c"]);
        assert_eq!(editor.position().line_number(), 1);

        editor.delete_current_line().unwrap();
        assert_eq!(lines(&editor), ["c"]);
        assert_eq!(editor.position().line_number(), 1);

        editor.delete_current_line().unwrap();
        assert_eq!(editor.line_count().unwrap(), 0);
        assert_eq!(editor.position(), Position::new(1, 1));
    }

    #[test]
    fn test_delete_current_word() {
        let mut editor = make_editor(&["alpha beta gamma"]);
        editor.set_position(Position::new(1, 8)).unwrap();
        editor.delete_current_word(None).unwrap();
        assert_eq!(editor.current_line().unwrap(), "alpha  gamma");
        assert_eq!(editor.position(), Position::new(1, 7));

        let mut editor = make_editor(&["some.path.to"]);
        editor.set_position(Position::new(1, 7)).unwrap();
        editor.delete_current_word(Some('.')).unwrap();
        assert_eq!(editor.current_line().unwrap(), "some..to");
    }
}
