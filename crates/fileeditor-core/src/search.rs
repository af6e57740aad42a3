//! Regex searches over the bound buffer.
//!
//! Search text is always a regular expression. Hits move the cursor to the
//! first char of the match; misses leave it where it was unless noted.

use crate::document::Editor;
use crate::error::Result;
use crate::line::LineMatch;
use crate::ordinal::Ordinal;
use crate::pattern::Pattern;
use crate::text::TextBuffer;
use crate::types::Position;

/// Outcome of a top-down [`Editor::find`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchResult {
    Found(Position),
    NotFound,
    /// A line fully matched the stop pattern before any hit.
    Aborted,
}

impl SearchResult {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchResult::Found(_))
    }

    pub fn position(&self) -> Option<Position> {
        match self {
            SearchResult::Found(pos) => Some(*pos),
            _ => None,
        }
    }
}

/// A remembered search hit.
///
/// Holds only the position, so it stays usable across edits but may point
/// at different text afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Occurrence {
    position: Position,
}

impl Occurrence {
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// The text of the line this occurrence is on.
    pub fn line_text<B: TextBuffer>(&self, editor: &Editor<B>) -> Result<String> {
        editor.line(self.position.line_number())
    }

    /// Replace the line this occurrence is on.
    pub fn set_line_text<B: TextBuffer>(&self, editor: &mut Editor<B>, text: &str) -> Result<()> {
        editor.set_line(self.position.line_number(), text)
    }
}

impl<B: TextBuffer> Editor<B> {
    /// Search from the top of the buffer.
    ///
    /// Each line is searched from column 1. If a line without a hit fully
    /// matches `end_at`, the search stops there with
    /// [`SearchResult::Aborted`].
    pub fn find(&mut self, text: &str, end_at: Option<&str>) -> Result<SearchResult> {
        let pattern = Pattern::new(text)?;
        let stop = end_at.map(Pattern::new).transpose()?;
        self.scan_lines(&pattern, stop.as_ref(), Ordinal::FIRST)
    }

    /// Like [`Editor::find`], starting at column 1 of the cursor's line.
    pub fn find_from_current(&mut self, text: &str, end_at: Option<&str>) -> Result<SearchResult> {
        let pattern = Pattern::new(text)?;
        let stop = end_at.map(Pattern::new).transpose()?;
        self.adjust_position()?;
        let line = self.position.line();
        self.scan_lines(&pattern, stop.as_ref(), line)
    }

    fn scan_lines(
        &mut self,
        pattern: &Pattern,
        stop: Option<&Pattern>,
        first: Ordinal,
    ) -> Result<SearchResult> {
        let adapter = self.adapter()?;
        let last = adapter.last_line();
        for n in first.resolve(last)..=last {
            let line_no = Ordinal::from(n);
            match adapter.line(line_no)?.find(pattern, Ordinal::FIRST, stop) {
                LineMatch::Found { column, .. } => {
                    let position = Position::from_ordinals(line_no, column);
                    tracing::debug!(target: "fileeditor::search", %pattern, %position, "found");
                    self.position = position;
                    return Ok(SearchResult::Found(position));
                }
                LineMatch::Aborted => {
                    tracing::debug!(target: "fileeditor::search", %pattern, line = n, "aborted");
                    return Ok(SearchResult::Aborted);
                }
                LineMatch::NotFound => {}
            }
        }
        tracing::debug!(target: "fileeditor::search", %pattern, "not found");
        Ok(SearchResult::NotFound)
    }

    /// Next hit after the cursor. Returns the match length in chars.
    fn find_next_match(&mut self, pattern: &Pattern) -> Result<Option<usize>> {
        self.adjust_position()?;
        let adapter = self.adapter()?;
        if adapter.is_empty() {
            return Ok(None);
        }
        let mut column = self.position.column().increment(1);
        for n in self.position.line_number()..=adapter.last_line() {
            let line_no = Ordinal::from(n);
            let line = adapter.line(line_no)?;
            // Past the last char the search resumes on the next line.
            let past_end = column.get().is_none_or(|c| c > line.len());
            if past_end {
                column = Ordinal::FIRST;
                continue;
            }
            if let LineMatch::Found { column: found, length } = line.find(pattern, column, None) {
                let position = Position::from_ordinals(line_no, found);
                tracing::trace!(target: "fileeditor::search", %pattern, %position, "next");
                self.position = position;
                return Ok(Some(length));
            }
            column = Ordinal::FIRST;
        }
        Ok(None)
    }

    /// Search onwards from one column past the cursor.
    pub fn find_next(&mut self, text: &str) -> Result<bool> {
        let pattern = Pattern::new(text)?;
        Ok(self.find_next_match(&pattern)?.is_some())
    }

    /// Walk every hit from the cursor onwards and return the start of the
    /// final one.
    ///
    /// The cursor ends just past the final hit, or stays put if there was
    /// none.
    pub fn find_last(&mut self, text: &str) -> Result<Option<Position>> {
        let pattern = Pattern::new(text)?;
        let mut last = None;
        while let Some(length) = self.find_next_match(&pattern)? {
            last = Some(self.position);
            self.move_right(length)?;
        }
        Ok(last)
    }

    /// Every hit in the buffer, top to bottom. The cursor is not moved.
    pub fn find_all_occurrences(&mut self, text: &str) -> Result<Vec<Occurrence>> {
        let pattern = Pattern::new(text)?;
        let saved = self.position;
        let found = self.collect_occurrences(&pattern);
        self.position = saved;
        found
    }

    fn collect_occurrences(&mut self, pattern: &Pattern) -> Result<Vec<Occurrence>> {
        self.move_to_top_of_file()?;
        let mut found = Vec::new();
        if let SearchResult::Found(position) = self.scan_lines(pattern, None, Ordinal::FIRST)? {
            found.push(Occurrence::new(position));
            while self.find_next_match(pattern)?.is_some() {
                found.push(Occurrence::new(self.position));
            }
        }
        Ok(found)
    }

    /// The final hit in the buffer. The cursor is not moved.
    pub fn find_last_occurrence(&mut self, text: &str) -> Result<Option<Occurrence>> {
        Ok(self.find_all_occurrences(text)?.pop())
    }

    /// Move to the first blank line at or below the cursor.
    pub fn find_blank_line(&mut self) -> Result<bool> {
        self.adjust_position()?;
        let adapter = self.adapter()?;
        for n in self.position.line_number()..=adapter.last_line() {
            if adapter.line(Ordinal::from(n))?.is_blank() {
                self.position = Position::from_ordinals(Ordinal::from(n), Ordinal::FIRST);
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Move to the first blank line below the cursor. The cursor is left
    /// alone if there is none.
    pub fn find_next_blank_line(&mut self) -> Result<bool> {
        self.adjust_position()?;
        if self.is_on_last_line()? {
            return Ok(false);
        }
        let saved = self.position;
        self.move_down(1)?;
        let found = self.find_blank_line()?;
        if !found {
            self.position = saved;
        }
        Ok(found)
    }

    /// Every blank line in the buffer. The cursor is not moved.
    pub fn find_all_blank_lines(&mut self) -> Result<Vec<Occurrence>> {
        let saved = self.position;
        let found = self.collect_blank_lines();
        self.position = saved;
        found
    }

    fn collect_blank_lines(&mut self) -> Result<Vec<Occurrence>> {
        self.move_to_top_of_file()?;
        let mut found = Vec::new();
        if self.find_blank_line()? {
            found.push(Occurrence::new(self.position));
            while self.find_next_blank_line()? {
                found.push(Occurrence::new(self.position));
            }
        }
        Ok(found)
    }

    /// Whether the whole cursor line matches `text`.
    pub fn line_matches(&self, text: &str) -> Result<bool> {
        let pattern = Pattern::new(text)?;
        Ok(self.current_line_as_line()?.matches(&pattern))
    }

    /// Move down one line and test it against `text`.
    ///
    /// On the last line this is false and the cursor does not move.
    pub fn next_line_matches(&mut self, text: &str) -> Result<bool> {
        self.adjust_position()?;
        if self.is_on_last_line()? {
            return Ok(false);
        }
        self.move_down(1)?;
        self.line_matches(text)
    }

    /// Column 1 of every line that fully matches `text`. The cursor is not
    /// moved.
    pub fn find_all_lines_matching(&self, text: &str) -> Result<Vec<Occurrence>> {
        let pattern = Pattern::new(text)?;
        let adapter = self.adapter()?;
        let mut found = Vec::new();
        for n in 1..=adapter.last_line() {
            if adapter.line(Ordinal::from(n))?.matches(&pattern) {
                found.push(Occurrence::new(Position::new(n, 1)));
            }
        }
        Ok(found)
    }
}
