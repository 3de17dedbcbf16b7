// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Debug, Formatter, Result},
          ops::Add};

use crate::{ColIndex, RowIndex};

/// `Pos` holds the `row` and `col` indices of a byte in a document. [`RowIndex`] and
/// [`ColIndex`] are distinct types, so it isn't possible to use a `col` when you
/// intended to use a `row` and vice versa.
///
/// The derived ordering is lexicographic: first by row, then by col. This is the order
/// that [`crate::Selection`] uses to normalize its endpoints.
///
/// ```text
///     0   4    9
///    ┌────┴────┴── col
///  0 ┤ ab
///  1 ┤ cd◆        ◆ = pos(row(1) + col(2))
///    │
///   row
/// ```
///
/// # The many ways to create one
///
/// ```
/// use r3bl_gap_editor::{Pos, col, pos, row};
///
/// let pos_1: Pos = pos(row(2) + col(3));
/// let pos_2: Pos = (row(2), col(3)).into();
/// let pos_3: Pos = col(3) + row(2);
/// assert_eq!(pos_1, pos_2);
/// assert_eq!(pos_2, pos_3);
/// assert!(pos(row(1) + col(9)) < pos(row(2) + col(0)));
/// ```
#[derive(Copy, Clone, PartialEq, PartialOrd, Ord, Eq, Hash, Default)]
pub struct Pos {
    /// Row index, 0-based.
    pub row_index: RowIndex,
    /// Column index, 0-based.
    pub col_index: ColIndex,
}

pub fn pos(arg_pos: impl Into<Pos>) -> Pos { arg_pos.into() }

mod constructor {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl Pos {
        pub fn new(arg_pos: impl Into<Pos>) -> Self { arg_pos.into() }
    }

    impl From<(RowIndex, ColIndex)> for Pos {
        fn from((row, col): (RowIndex, ColIndex)) -> Self {
            Pos {
                row_index: row,
                col_index: col,
            }
        }
    }

    impl Add<ColIndex> for RowIndex {
        type Output = Pos;

        fn add(self, rhs: ColIndex) -> Self::Output {
            Pos {
                row_index: self,
                col_index: rhs,
            }
        }
    }

    impl Add<RowIndex> for ColIndex {
        type Output = Pos;

        fn add(self, rhs: RowIndex) -> Self::Output {
            Pos {
                row_index: rhs,
                col_index: self,
            }
        }
    }
}

mod impl_debug {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl Debug for Pos {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            write!(f, "Pos[r: {}, c: {}]", self.row_index.0, self.col_index.0)
        }
    }
}
