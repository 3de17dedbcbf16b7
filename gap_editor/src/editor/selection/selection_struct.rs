// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::Pos;
use std::fmt::{Debug, Formatter, Result};

/// An anchor / cursor pair of positions. The anchor is where the selection started and
/// the cursor is where it currently ends, so the anchor may come after the cursor in the
/// text.
///
/// The selected range is half open: it includes the byte at the start position and
/// excludes the byte at the end position.
///
/// ```text
///  anchor = (0, 2)            cursor = (2, 1)
///    ╭0123456╮
///  0 │ab▓▓▓▓▓│   row 0: from col 2 onward
///  1 │▓▓▓▓▓▓▓│   row 1: whole row
///  2 │▓bcd   │   row 2: up to (not including) col 1
///    ╰───────╯
/// ```
///
/// Clearing a selection keeps the endpoints, but an inactive selection contains nothing.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    active: bool,
    anchor: Pos,
    cursor: Pos,
}

impl Selection {
    /// Start a new, empty selection at `pos`.
    pub fn start(&mut self, arg_pos: impl Into<Pos>) {
        let pos: Pos = arg_pos.into();
        self.active = true;
        self.anchor = pos;
        self.cursor = pos;
    }

    /// Move only the cursor end of the selection.
    pub fn update(&mut self, arg_pos: impl Into<Pos>) { self.cursor = arg_pos.into(); }

    pub fn clear(&mut self) { self.active = false; }

    #[must_use]
    pub fn is_active(&self) -> bool { self.active }

    #[must_use]
    pub fn anchor(&self) -> Pos { self.anchor }

    #[must_use]
    pub fn cursor(&self) -> Pos { self.cursor }

    /// `(start, end)` with `start <= end`, regardless of which way the selection was
    /// made. Returns [`None`] if the selection isn't active.
    #[must_use]
    pub fn normalized_range(&self) -> Option<(Pos, Pos)> {
        self.active.then(|| {
            if self.anchor <= self.cursor {
                (self.anchor, self.cursor)
            } else {
                (self.cursor, self.anchor)
            }
        })
    }

    /// True if the selection is inactive, or active with both ends at the same place.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self.normalized_range() {
            Some((start, end)) => start == end,
            None => true,
        }
    }

    /// Is the byte at `pos` inside the selection?
    ///
    /// - Rows strictly between the start and end rows are fully contained.
    /// - On the start row, cols from the start col onward are contained.
    /// - On the end row, cols before the end col are contained.
    /// - On a single row selection, `col ∈ [start col, end col)`.
    #[must_use]
    pub fn contains(&self, arg_pos: impl Into<Pos>) -> bool {
        let pos: Pos = arg_pos.into();
        let Some((start, end)) = self.normalized_range() else {
            return false;
        };

        let (row, col) = (pos.row_index, pos.col_index);
        if row < start.row_index || row > end.row_index {
            return false;
        }
        match (row == start.row_index, row == end.row_index) {
            (true, true) => col >= start.col_index && col < end.col_index,
            (true, false) => col >= start.col_index,
            (false, true) => col < end.col_index,
            (false, false) => true,
        }
    }
}

mod impl_debug {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl Debug for Selection {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            if self.active {
                write!(f, "Selection[{:?} -> {:?}]", self.anchor, self.cursor)
            } else {
                write!(f, "Selection[inactive]")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, col, pos, row};
    use test_case::test_case;

    fn selection(anchor: Pos, cursor: Pos) -> Selection {
        let mut it = Selection::default();
        it.start(anchor);
        it.update(cursor);
        it
    }

    #[test]
    fn test_lifecycle() {
        let mut it = Selection::default();
        assert!(!it.is_active());
        assert!(it.is_empty());

        it.start(row(1) + col(2));
        assert!(it.is_active());
        assert!(it.is_empty());
        assert_eq2!(it.anchor(), it.cursor());

        it.update(row(1) + col(4));
        assert!(!it.is_empty());
        assert_eq2!(it.anchor(), pos(row(1) + col(2)));

        it.clear();
        assert!(!it.is_active());
        assert_eq2!(it.normalized_range(), None);
        // Endpoints are kept.
        assert_eq2!(it.cursor(), pos(row(1) + col(4)));
    }

    #[test]
    fn test_normalized_range() {
        let backwards = selection(pos(row(2) + col(0)), pos(row(0) + col(3)));
        assert_eq2!(
            backwards.normalized_range(),
            Some((pos(row(0) + col(3)), pos(row(2) + col(0))))
        );
    }

    #[test_case(row(0), col(1), false ; "before start on start row")]
    #[test_case(row(0), col(2), true ; "at start")]
    #[test_case(row(0), col(50), true ; "start row past start")]
    #[test_case(row(1), col(0), true ; "middle row")]
    #[test_case(row(2), col(0), true ; "end row before end")]
    #[test_case(row(2), col(1), false ; "at end")]
    #[test_case(row(3), col(0), false ; "after end row")]
    fn test_contains_multi_row(row_index: crate::RowIndex, col_index: crate::ColIndex, expected: bool) {
        let anchor = pos(row(0) + col(2));
        let cursor = pos(row(2) + col(1));
        // Invariant under swapping anchor and cursor.
        assert_eq2!(selection(anchor, cursor).contains(row_index + col_index), expected);
        assert_eq2!(selection(cursor, anchor).contains(row_index + col_index), expected);
    }

    #[test]
    fn test_contains_single_row() {
        let it = selection(pos(row(0) + col(4)), pos(row(0) + col(1)));
        assert!(!it.contains(row(0) + col(0)));
        assert!(it.contains(row(0) + col(1)));
        assert!(it.contains(row(0) + col(3)));
        assert!(!it.contains(row(0) + col(4)));
    }

    #[test]
    fn test_inactive_contains_nothing() {
        let mut it = selection(pos(row(0) + col(0)), pos(row(5) + col(0)));
        it.clear();
        assert!(!it.contains(row(1) + col(0)));
    }
}
