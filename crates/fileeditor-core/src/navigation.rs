//! Cursor movement.
//!
//! Relative moves report whether they got the whole way: `false` means the
//! cursor hit an edge and was clamped, not that nothing happened.

use crate::document::Editor;
use crate::error::Result;
use crate::ordinal::Ordinal;
use crate::text::TextBuffer;
use crate::text_helpers;
use crate::types::Position;

/// What sits under the cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharAt {
    Char(char),
    /// The cursor is on an empty line, which has no chars.
    EmptyLine,
    /// A forward step found nowhere left to go.
    EndOfBuffer,
}

impl CharAt {
    pub fn as_char(&self) -> Option<char> {
        match self {
            CharAt::Char(c) => Some(*c),
            _ => None,
        }
    }
}

impl<B: TextBuffer> Editor<B> {
    pub fn move_down(&mut self, lines: usize) -> Result<bool> {
        self.position.increment_line(lines);
        Ok(!self.adjust_position()?)
    }

    pub fn move_up(&mut self, lines: usize) -> Result<bool> {
        self.position.decrement_line(lines);
        let floored = self.position.line().was_adjusted();
        let clamped = self.adjust_position()?;
        Ok(!(floored || clamped))
    }

    pub fn move_right(&mut self, columns: usize) -> Result<bool> {
        self.position.increment_column(columns);
        Ok(!self.adjust_position()?)
    }

    pub fn move_left(&mut self, columns: usize) -> Result<bool> {
        self.position.decrement_column(columns);
        let floored = self.position.column().was_adjusted();
        let clamped = self.adjust_position()?;
        Ok(!(floored || clamped))
    }

    /// Step one char forward, wrapping to the start of the next line.
    ///
    /// At the end of the last line the cursor stays put and this returns
    /// false. Empty lines are visited at column 1.
    pub fn move_to_next_char(&mut self) -> Result<bool> {
        self.adjust_position()?;
        let adapter = self.adapter()?;
        if adapter.is_empty() {
            return Ok(false);
        }
        let line = self.position.line();
        let next = self.position.column().increment(1);
        if next <= adapter.last_column_number(line)? {
            self.position.set_column(next);
        } else if line < adapter.last_line_number() {
            self.position = Position::from_ordinals(line.increment(1), Ordinal::FIRST);
        } else {
            return Ok(false);
        }
        Ok(true)
    }

    /// Step one char back, wrapping to the end of the previous line.
    ///
    /// At 1:1 the cursor stays put and this returns false.
    pub fn move_to_prev_char(&mut self) -> Result<bool> {
        self.adjust_position()?;
        let adapter = self.adapter()?;
        if adapter.is_empty() {
            return Ok(false);
        }
        let line = self.position.line();
        if self.position.column() > Ordinal::FIRST {
            self.position.decrement_column(1);
        } else if line > Ordinal::FIRST {
            let prev = line.decrement(1);
            let column = adapter.last_column_number(prev)?;
            self.position = Position::from_ordinals(prev, column);
        } else {
            return Ok(false);
        }
        Ok(true)
    }

    /// The char under the cursor.
    pub fn current_char(&self) -> Result<CharAt> {
        let line = self.current_line_as_line()?;
        Ok(match line.char_at(self.position.column_number()) {
            Some(c) => CharAt::Char(c),
            None => CharAt::EmptyLine,
        })
    }

    /// Step forward and read the char landed on.
    pub fn move_to_and_return_next_char(&mut self) -> Result<CharAt> {
        if !self.move_to_next_char()? {
            return Ok(CharAt::EndOfBuffer);
        }
        self.current_char()
    }

    pub fn move_to_and_return_next_word(&mut self) -> Result<String> {
        self.move_words_right(1)?;
        self.word()
    }

    pub fn move_to_and_return_prev_word(&mut self) -> Result<String> {
        self.move_words_left(1)?;
        self.word()
    }

    /// Cursor line as chars, with the cursor clamped first.
    fn current_chars(&mut self) -> Result<Vec<char>> {
        self.adjust_position()?;
        if self.adapter()?.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self.current_line_as_line()?.as_str().chars().collect())
    }

    /// Move right over `words` words within the current line.
    ///
    /// Lands on the first char of the following word. Returns false if the
    /// line ran out first, leaving the cursor on the last column.
    pub fn move_words_right(&mut self, words: usize) -> Result<bool> {
        let chars = self.current_chars()?;
        if chars.is_empty() {
            return Ok(false);
        }
        let (column, ok) = text_helpers::words_right(
            &chars,
            self.position.column_number(),
            words,
            self.config.word_delimiter,
        );
        self.position.set_column_number(column);
        self.adjust_position()?;
        Ok(ok)
    }

    /// Move left over `words` words within the current line.
    ///
    /// Lands on the first char of the word reached. Returns false if the
    /// start of the line was reached first.
    pub fn move_words_left(&mut self, words: usize) -> Result<bool> {
        let chars = self.current_chars()?;
        if chars.is_empty() {
            return Ok(false);
        }
        let (column, ok) = text_helpers::words_left(
            &chars,
            self.position.column_number(),
            words,
            self.config.word_delimiter,
        );
        self.position.set_column_number(column);
        self.adjust_position()?;
        Ok(ok)
    }

    /// The word under the cursor. Moves the cursor to the word's first char.
    pub fn word(&mut self) -> Result<String> {
        let chars = self.current_chars()?;
        let delimiter = self.config.word_delimiter;
        let start = text_helpers::word_start(&chars, self.position.column_number(), delimiter);
        self.position.set_column_number(start);
        self.adjust_position()?;
        Ok(text_helpers::word_from(&chars, start, delimiter))
    }

    pub fn move_to_end_of_line(&mut self) -> Result<()> {
        self.position.set_column(Ordinal::LAST);
        self.adjust_position()?;
        Ok(())
    }

    pub fn move_to_beginning_of_line(&mut self) -> Result<()> {
        self.position.set_column(Ordinal::FIRST);
        self.adjust_position()?;
        Ok(())
    }

    pub fn move_to_top_of_file(&mut self) -> Result<()> {
        self.position = Position::default();
        self.adjust_position()?;
        Ok(())
    }

    pub fn move_to_bottom_of_file(&mut self) -> Result<()> {
        self.position = Position::from_ordinals(Ordinal::LAST, Ordinal::FIRST);
        self.adjust_position()?;
        Ok(())
    }

    pub fn move_to_end_of_file(&mut self) -> Result<()> {
        self.position = Position::from_ordinals(Ordinal::LAST, Ordinal::LAST);
        self.adjust_position()?;
        Ok(())
    }

    pub fn is_on_first_line(&self) -> Result<bool> {
        self.adapter()?;
        Ok(self.position.line() == Ordinal::FIRST)
    }

    pub fn is_on_last_line(&self) -> Result<bool> {
        Ok(self.position.line() == self.adapter()?.last_line_number())
    }

    pub fn is_on_first_column(&self) -> Result<bool> {
        self.adapter()?;
        Ok(self.position.column() == Ordinal::FIRST)
    }

    pub fn is_on_last_column(&self) -> Result<bool> {
        let last = self.current_line_as_line()?.last_column_number();
        Ok(self.position.column() == last)
    }
}

#[cfg(test)]
mod tests {
    use crate::document::Editor;
    use crate::text::LineBuffer;
    use crate::types::Position;

    use super::CharAt;

    fn make_editor(lines: &[&str]) -> Editor {
        Editor::with_buffer(LineBuffer::from_lines(lines.iter().copied()))
    }

    #[test]
    fn test_relative_moves_report_clamping() {
        let mut editor = make_editor(&["abcdef", "xy", "", "last line"]);

        assert!(editor.move_right(3).unwrap());
        assert_eq!(editor.position(), Position::new(1, 4));

        // Column clamps on the shorter line.
        assert!(!editor.move_down(1).unwrap());
        assert_eq!(editor.position(), Position::new(2, 2));

        assert!(!editor.move_down(10).unwrap());
        assert_eq!(editor.position(), Position::new(4, 2));

        assert!(!editor.move_up(10).unwrap());
        assert_eq!(editor.position().line_number(), 1);

        assert!(!editor.move_left(5).unwrap());
        assert_eq!(editor.position(), Position::new(1, 1));
    }

    #[test]
    fn test_next_char_wraps_and_pins() {
        let mut editor = make_editor(&["ab", "", "c"]);

        assert!(editor.move_to_next_char().unwrap());
        assert_eq!(editor.position(), Position::new(1, 2));
        assert!(editor.move_to_next_char().unwrap());
        assert_eq!(editor.position(), Position::new(2, 1));
        assert!(editor.move_to_next_char().unwrap());
        assert_eq!(editor.position(), Position::new(3, 1));

        assert!(!editor.move_to_next_char().unwrap());
        assert!(!editor.move_to_next_char().unwrap());
        assert_eq!(editor.position(), Position::new(3, 1));
    }

    #[test]
    fn test_prev_char_wraps_and_pins() {
        let mut editor = make_editor(&["ab", "", "c"]);
        editor.move_to_end_of_file().unwrap();

        assert!(editor.move_to_prev_char().unwrap());
        assert_eq!(editor.position(), Position::new(2, 1));
        assert!(editor.move_to_prev_char().unwrap());
        assert_eq!(editor.position(), Position::new(1, 2));
        assert!(editor.move_to_prev_char().unwrap());
        assert!(!editor.move_to_prev_char().unwrap());
        assert!(!editor.move_to_prev_char().unwrap());
        assert_eq!(editor.position(), Position::new(1, 1));
    }

    #[test]
    fn test_next_char_reads() {
        let mut editor = make_editor(&["ab", ""]);
        assert_eq!(editor.current_char().unwrap(), CharAt::Char('a'));
        assert_eq!(editor.move_to_and_return_next_char().unwrap(), CharAt::Char('b'));
        assert_eq!(editor.move_to_and_return_next_char().unwrap(), CharAt::EmptyLine);
        assert_eq!(editor.move_to_and_return_next_char().unwrap(), CharAt::EndOfBuffer);
        assert_eq!(CharAt::EndOfBuffer.as_char(), None);
    }

    #[test]
    fn test_words_on_empty_line() {
        let mut editor = make_editor(&[""]);
        assert!(!editor.move_words_right(1).unwrap());
        assert!(!editor.move_words_left(1).unwrap());
        assert_eq!(editor.word().unwrap(), "");
        assert_eq!(editor.position(), Position::new(1, 1));
    }

    #[test]
    fn test_word_moves_cursor_to_word_start() {
        let mut editor = make_editor(&["alpha beta gamma"]);
        editor.set_position(Position::new(1, 9)).unwrap();
        assert_eq!(editor.word().unwrap(), "beta");
        assert_eq!(editor.position(), Position::new(1, 7));

        assert_eq!(editor.move_to_and_return_next_word().unwrap(), "gamma");
        assert_eq!(editor.position(), Position::new(1, 12));

        // From a word's first char, one word left stays on that word.
        assert_eq!(editor.move_to_and_return_prev_word().unwrap(), "gamma");
        editor.move_left(2).unwrap();
        assert_eq!(editor.move_to_and_return_prev_word().unwrap(), "beta");
    }

    #[test]
    fn test_word_delimiter_from_config() {
        let config = crate::EditorConfig {
            word_delimiter: '.',
            ..Default::default()
        };
        let mut editor = Editor::with_buffer_and_config(
            LineBuffer::from_lines(["some.path.to"]),
            config,
        );
        assert!(editor.move_words_right(1).unwrap());
        assert_eq!(editor.word().unwrap(), "path");
    }

    #[test]
    fn test_positional_predicates() {
        let mut editor = make_editor(&["first", "second"]);
        assert!(editor.is_on_first_line().unwrap());
        assert!(editor.is_on_first_column().unwrap());
        assert!(!editor.is_on_last_line().unwrap());

        editor.move_to_end_of_file().unwrap();
        assert!(editor.is_on_last_line().unwrap());
        assert!(editor.is_on_last_column().unwrap());
        assert_eq!(editor.position(), Position::new(2, 6));
    }
}
