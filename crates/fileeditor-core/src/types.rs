//! Core editor types: cursor position and selection.
//!
//! Both are plain `Copy` values. The editor hands out copies, so mutating a
//! returned `Position` never moves the cursor behind the editor's back.

use std::fmt;

use crate::ordinal::Ordinal;

/// A (line, column) cursor position, both 1-based.
///
/// Ordering is by line, then column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    line: Ordinal,
    column: Ordinal,
}

impl Position {
    /// Create a position from raw 1-based values. Zeroes clamp to 1.
    pub fn new(line: usize, column: usize) -> Self {
        Self {
            line: Ordinal::from(line),
            column: Ordinal::from(column),
        }
    }

    /// Create a position from ordinals.
    pub fn from_ordinals(line: Ordinal, column: Ordinal) -> Self {
        Self { line, column }
    }

    pub fn line(&self) -> Ordinal {
        self.line
    }

    pub fn column(&self) -> Ordinal {
        self.column
    }

    /// Raw line number. `LAST` reads as `usize::MAX`.
    pub fn line_number(&self) -> usize {
        self.line.resolve(usize::MAX)
    }

    /// Raw column number. `LAST` reads as `usize::MAX`.
    pub fn column_number(&self) -> usize {
        self.column.resolve(usize::MAX)
    }

    pub fn set_line(&mut self, line: Ordinal) {
        self.line = line;
    }

    /// Set the line and clamp it to `max`.
    pub fn set_line_within(&mut self, line: Ordinal, max: Option<usize>) {
        self.line = line;
        self.line.clamp_to_limit(max);
    }

    pub fn set_line_number(&mut self, line: usize) {
        self.line = Ordinal::from(line);
    }

    pub fn set_column(&mut self, column: Ordinal) {
        self.column = column;
    }

    /// Set the column and clamp it to `max`.
    pub fn set_column_within(&mut self, column: Ordinal, max: Option<usize>) {
        self.column = column;
        self.column.clamp_to_limit(max);
    }

    pub fn set_column_number(&mut self, column: usize) {
        self.column = Ordinal::from(column);
    }

    pub fn increment_line(&mut self, delta: usize) {
        self.line = self.line.increment(delta);
    }

    pub fn decrement_line(&mut self, delta: usize) {
        self.line = self.line.decrement(delta);
    }

    pub fn increment_column(&mut self, delta: usize) {
        self.column = self.column.increment(delta);
    }

    pub fn decrement_column(&mut self, delta: usize) {
        self.column = self.column.decrement(delta);
    }

    /// Clamp line and column independently. Returns true if either changed.
    pub fn adjust_limits(&mut self, max_lines: Option<usize>, max_columns: Option<usize>) -> bool {
        let line = self.line.clamp_to_limit(max_lines);
        let column = self.column.clamp_to_limit(max_columns);
        line || column
    }

    /// Whether the last clamp of either field changed it.
    pub fn was_adjusted(&self) -> bool {
        self.line.was_adjusted() || self.column.was_adjusted()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// An inclusive span between two positions.
///
/// Either end may be unset while a selection is being built. The selection
/// is never normalized: an end before the start stays that way and is simply
/// reported as invalid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    start: Option<Position>,
    end: Option<Position>,
}

impl Selection {
    /// Create a complete selection.
    pub fn new(start: Position, end: Position) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Create a selection anchored at `start` with no end yet.
    pub fn starting_at(start: Position) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    pub fn start(&self) -> Option<Position> {
        self.start
    }

    pub fn end(&self) -> Option<Position> {
        self.end
    }

    pub fn set_start(&mut self, start: Position) {
        self.start = Some(start);
    }

    pub fn set_end(&mut self, end: Position) {
        self.end = Some(end);
    }

    /// Both ends are set.
    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Both ends are set and the end is not before the start.
    pub fn is_valid(&self) -> bool {
        self.bounds().is_some()
    }

    /// The (start, end) pair of a valid selection.
    pub fn bounds(&self) -> Option<(Position, Position)> {
        match (self.start, self.end) {
            (Some(start), Some(end)) if end >= start => Some((start, end)),
            _ => None,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.start {
            Some(start) => write!(f, "{start}")?,
            None => f.write_str("?")?,
        }
        f.write_str("..=")?;
        match self.end {
            Some(end) => write!(f, "{end}"),
            None => f.write_str("?"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_clamps_zeroes() {
        let pos = Position::new(0, 0);
        assert_eq!(pos, Position::new(1, 1));
        assert!(pos.line().was_adjusted());
        assert!(pos.column().was_adjusted());
    }

    #[test]
    fn test_position_adjust_limits() {
        let mut pos = Position::new(10, 40);
        assert!(pos.adjust_limits(Some(7), Some(12)));
        assert_eq!(pos, Position::new(7, 12));

        // Each field is clamped independently.
        let mut pos = Position::new(3, 40);
        assert!(pos.adjust_limits(Some(7), Some(12)));
        assert!(!pos.line().was_adjusted());
        assert!(pos.column().was_adjusted());

        let mut pos = Position::new(3, 4);
        assert!(!pos.adjust_limits(Some(7), Some(12)));
        assert!(!pos.was_adjusted());
    }

    #[test]
    fn test_position_last_column() {
        let mut pos = Position::from_ordinals(Ordinal::new(2), Ordinal::LAST);
        assert_eq!(pos.column_number(), usize::MAX);
        pos.adjust_limits(None, Some(9));
        assert_eq!(pos.column_number(), 9);
    }

    #[test]
    fn test_position_steps() {
        let mut pos = Position::new(4, 4);
        pos.increment_line(2);
        pos.decrement_column(10);
        assert_eq!(pos, Position::new(6, 1));
        assert!(pos.column().was_adjusted());
    }

    #[test]
    fn test_position_ordering() {
        assert!(Position::new(2, 1) > Position::new(1, 80));
        assert!(Position::new(2, 3) > Position::new(2, 2));
        assert_eq!(Position::new(5, 6).to_string(), "5:6");
    }

    #[test]
    fn test_selection_validity() {
        let mut sel = Selection::starting_at(Position::new(4, 2));
        assert!(!sel.is_complete());
        assert!(!sel.is_valid());

        sel.set_end(Position::new(5, 6));
        assert!(sel.is_valid());

        // Same line, end before start.
        let sel = Selection::new(Position::new(3, 8), Position::new(3, 2));
        assert!(!sel.is_valid());
        assert!(sel.is_complete());

        // Earlier line, later column.
        let sel = Selection::new(Position::new(3, 2), Position::new(2, 8));
        assert!(!sel.is_valid());

        // A single-character selection is valid.
        let sel = Selection::new(Position::new(3, 2), Position::new(3, 2));
        assert!(sel.is_valid());
    }

    #[test]
    fn test_selection_is_not_normalized() {
        let sel = Selection::new(Position::new(5, 1), Position::new(1, 1));
        assert_eq!(sel.start(), Some(Position::new(5, 1)));
        assert_eq!(sel.end(), Some(Position::new(1, 1)));
        assert_eq!(sel.bounds(), None);
    }

    #[test]
    fn test_selection_copies_positions() {
        let mut cursor = Position::new(2, 3);
        let sel = Selection::starting_at(cursor);
        cursor.increment_line(1);
        assert_eq!(sel.start(), Some(Position::new(2, 3)));
        assert_eq!(sel.to_string(), "2:3..=?");
    }
}
