//! Selection handling: anchoring, extraction, deletion and bracket matching.

use crate::document::Editor;
use crate::error::{EditorError, Result};
use crate::navigation::CharAt;
use crate::text::{LineBuffer, TextBuffer};
use crate::types::{Position, Selection};

impl<B: TextBuffer> Editor<B> {
    /// Anchor a new selection at the cursor, dropping any previous one.
    pub fn start_selection(&mut self) {
        tracing::trace!(target: "fileeditor::selection", start = %self.position, "started");
        self.selection = Some(Selection::starting_at(self.position));
    }

    /// Close the active selection at the cursor.
    pub fn end_selection(&mut self) -> Result<()> {
        let selection = self
            .selection
            .as_mut()
            .ok_or(EditorError::NoActiveSelection)?;
        selection.set_end(self.position);
        tracing::debug!(target: "fileeditor::selection", %selection, "completed");
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// Both ends are set and the end is not before the start.
    pub fn has_valid_selection(&self) -> bool {
        self.selection.is_some_and(|sel| sel.is_valid())
    }

    /// The ends of a usable selection, clamped into the buffer.
    pub(crate) fn selection_bounds(&self) -> Result<(Position, Position)> {
        let selection = self.selection.ok_or(EditorError::NoActiveSelection)?;
        let (mut start, mut end) = match (selection.start(), selection.end()) {
            (Some(start), Some(end)) if end >= start => (start, end),
            (Some(start), Some(end)) => return Err(EditorError::InvalidSelection { start, end }),
            _ => return Err(EditorError::IncompleteSelection),
        };
        let adapter = self.adapter()?;
        adapter.adjust_position(&mut start);
        adapter.adjust_position(&mut end);
        Ok((start, end))
    }

    /// Remove the selected text.
    ///
    /// Every spanned line is removed and replaced by one line made of the
    /// text before the start and the text after the end. That line is left
    /// out entirely when it comes out empty. The cursor moves to the old
    /// selection start and the selection is cleared.
    pub fn delete_selection(&mut self) -> Result<()> {
        let (start, end) = self.selection_bounds()?;
        let adapter = self.adapter_mut()?;

        let first = adapter.line(start.line())?;
        let last = adapter.line(end.line())?;
        let mut joined = first.sub_line(1, start.column_number().saturating_sub(1));
        joined.append(
            last.sub_line(end.column_number().saturating_add(1), usize::MAX)
                .as_str(),
        );

        let spanned = end.line_number() - start.line_number() + 1;
        for _ in 0..spanned {
            adapter.remove_line(start.line());
        }
        if !joined.is_empty() {
            adapter.insert_line(start.line(), joined.as_str());
        }
        tracing::debug!(
            target: "fileeditor::selection",
            %start,
            %end,
            removed = spanned,
            "deleted"
        );

        self.position = start;
        self.selection = None;
        self.adjust_position()?;
        Ok(())
    }

    /// The selected text as a buffer, one entry per spanned line.
    pub fn selected_text(&self) -> Result<LineBuffer> {
        let (start, end) = self.selection_bounds()?;
        let adapter = self.adapter()?;
        let mut out = LineBuffer::new();

        let first = start.line_number();
        let last = end.line_number();
        for n in first..=last {
            let line = adapter.line(n.into())?;
            let from = if n == first { start.column_number() } else { 1 };
            let to = if n == last { end.column_number() } else { usize::MAX };
            out.push_line(line.sub_line(from, to).as_str());
        }
        Ok(out)
    }

    /// The selected text with lines joined by `\n`.
    pub fn selected_text_as_string(&self) -> Result<String> {
        Ok(self.selected_text()?.lines().join("\n"))
    }

    /// Walk forward to the `close` char that balances the nesting.
    ///
    /// Scanning starts at the char after the cursor. Each `open` seen deepens
    /// the nesting and the scan stops on the first `close` that brings it
    /// back to zero or below. An `open` under the cursor is not counted, so
    /// for nested input start just before it. Returns false if the buffer
    /// ran out first, leaving the cursor at the end.
    pub fn move_to_matching(&mut self, open: char, close: char) -> Result<bool> {
        let mut depth = 0isize;
        loop {
            match self.move_to_and_return_next_char()? {
                CharAt::EndOfBuffer => return Ok(false),
                CharAt::Char(c) if c == close => {
                    depth -= 1;
                    if depth <= 0 {
                        return Ok(true);
                    }
                }
                CharAt::Char(c) if c == open => depth += 1,
                _ => {}
            }
        }
    }

    /// Extend the active selection to the matching `close` char.
    ///
    /// The selection ends on the `close` char and the cursor is left one
    /// char before it.
    pub fn select_to_matching(&mut self, open: char, close: char) -> Result<bool> {
        if self.selection.is_none() {
            return Err(EditorError::NoActiveSelection);
        }
        let found = self.move_to_matching(open, close)?;
        self.end_selection()?;
        self.move_to_prev_char()?;
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_editor(lines: &[&str]) -> Editor {
        Editor::with_buffer(LineBuffer::from_lines(lines.iter().copied()))
    }

    fn select(editor: &mut Editor, start: Position, end: Position) {
        editor.set_position(start).unwrap();
        editor.start_selection();
        editor.set_position(end).unwrap();
        editor.end_selection().unwrap();
    }

    #[test]
    fn test_selection_state() {
        let mut editor = make_editor(&["abc", "def"]);
        assert!(editor.selection().is_none());
        assert!(matches!(
            editor.end_selection(),
            Err(EditorError::NoActiveSelection)
        ));

        editor.start_selection();
        assert!(!editor.has_valid_selection());
        assert!(matches!(
            editor.selected_text(),
            Err(EditorError::IncompleteSelection)
        ));

        editor.set_position(Position::new(2, 2)).unwrap();
        editor.end_selection().unwrap();
        assert!(editor.has_valid_selection());
        assert_eq!(editor.selection().unwrap().to_string(), "1:1..=2:2");

        editor.clear_selection();
        assert!(editor.selection().is_none());
    }

    #[test]
    fn test_reversed_selection_is_rejected() {
        let mut editor = make_editor(&["abcdef"]);
        select(&mut editor, Position::new(1, 5), Position::new(1, 2));
        assert!(!editor.has_valid_selection());
        assert!(matches!(
            editor.delete_selection(),
            Err(EditorError::InvalidSelection { .. })
        ));
        assert_eq!(editor.line(1).unwrap(), "abcdef");
    }

    #[test]
    fn test_selected_text() {
        let mut editor = make_editor(&["first line", "middle", "last line"]);
        select(&mut editor, Position::new(1, 7), Position::new(3, 4));

        let text = editor.selected_text().unwrap();
        assert_eq!(text.lines(), ["line", "middle", "last"]);
        insta::assert_snapshot!(editor.selected_text_as_string().unwrap(), @r"
        line
        middle
        last
        ");
        // Reading does not consume the selection.
        assert!(editor.has_valid_selection());
    }

    #[test]
    fn test_delete_within_line() {
        let mut editor = make_editor(&["import elsewhere.some.place;"]);
        select(&mut editor, Position::new(1, 8), Position::new(1, 21));
        editor.delete_selection().unwrap();

        assert_eq!(editor.line(1).unwrap(), "import .place;");
        assert_eq!(editor.position(), Position::new(1, 8));
        assert!(editor.selection().is_none());
    }

    #[test]
    fn test_delete_across_lines_drops_empty_result() {
        let mut editor = make_editor(&["keep", "gone", "all gone", "tail"]);
        select(&mut editor, Position::new(2, 1), Position::new(3, 8));
        editor.delete_selection().unwrap();

        assert_eq!(editor.buffer().unwrap().lines(), ["keep", "tail"]);
        assert_eq!(editor.position(), Position::new(2, 1));
    }

    #[test]
    fn test_delete_joins_prefix_and_suffix() {
        let mut editor = make_editor(&["ab(cd", "ef", "gh)ij"]);
        select(&mut editor, Position::new(1, 3), Position::new(3, 3));
        editor.delete_selection().unwrap();
        assert_eq!(editor.buffer().unwrap().lines(), ["abij"]);
    }

    #[test]
    fn test_move_to_matching_nested() {
        let mut editor = make_editor(&["f(a(b)", "c)d"]);
        assert!(editor.move_to_matching('(', ')').unwrap());
        assert_eq!(editor.position(), Position::new(2, 2));
    }

    #[test]
    fn test_move_to_matching_runs_out() {
        let mut editor = make_editor(&["(a(b", "c"]);
        assert!(!editor.move_to_matching('(', ')').unwrap());
        assert_eq!(editor.position(), Position::new(2, 1));
    }

    #[test]
    fn test_select_to_matching() {
        let mut editor = make_editor(&["call(x, y);"]);
        assert!(matches!(
            editor.select_to_matching('(', ')'),
            Err(EditorError::NoActiveSelection)
        ));

        editor.set_position(Position::new(1, 5)).unwrap();
        editor.start_selection();
        assert!(editor.select_to_matching('(', ')').unwrap());
        assert_eq!(editor.selected_text_as_string().unwrap(), "(x, y)");
        assert_eq!(editor.position(), Position::new(1, 9));
    }
}
