// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Translation between logical byte offsets and `(row, col)` positions for
//! [`GapBuffer`].
//!
//! Every lookup goes through the sorted newline index that [`GapBuffer`] keeps up to date,
//! so finding a row is a binary search. The results are identical to scanning the
//! content from offset 0:
//! - The row of an offset is the number of `\n` bytes before it.
//! - The col of an offset is the distance from the start of its row.
//! - A column past the end of a row clamps to the row's `\n` (or the end of buffer).
//! - A row past the last row resolves to the end of the buffer.

use super::{GapBuffer, SPACE_BYTE, TAB_BYTE};
use crate::{ByteIndex, ColIndex, Pos, RowIndex, byte_index, col, row};

impl GapBuffer {
    /// Number of rows. An empty buffer has one row, and every `\n` starts another one.
    #[must_use]
    pub fn row_count(&self) -> usize { self.newline_offsets.len() + 1 }

    /// Offset of the first byte of `row`, or [`None`] if the row doesn't exist.
    #[must_use]
    pub fn line_start(&self, arg_row: impl Into<RowIndex>) -> Option<ByteIndex> {
        let row_index: RowIndex = arg_row.into();
        match row_index.as_usize() {
            0 => Some(byte_index(0)),
            it => self
                .newline_offsets
                .get(it - 1)
                .map(|newline| *newline + 1),
        }
    }

    /// Offset of the `\n` that ends `row`, or the buffer length for the last row.
    /// Returns [`None`] if the row doesn't exist.
    #[must_use]
    pub fn line_end(&self, arg_row: impl Into<RowIndex>) -> Option<ByteIndex> {
        let row_index: RowIndex = arg_row.into();
        if row_index.as_usize() >= self.row_count() {
            return None;
        }
        Some(
            self.newline_offsets
                .get(row_index.as_usize())
                .copied()
                .unwrap_or(byte_index(self.len())),
        )
    }

    /// Map an offset to its `(row, col)`. Offsets past the end are clamped to the end.
    #[must_use]
    pub fn pos_to_row_col(&self, arg_offset: impl Into<ByteIndex>) -> Pos {
        let offset: ByteIndex = arg_offset.into();
        let offset = offset.min(byte_index(self.len()));

        let row_index = self.newline_offsets.partition_point(|it| *it < offset);
        let line_start = self.line_start(row_index).unwrap_or_default();

        row(row_index) + col(*offset - *line_start)
    }

    /// Map a `(row, col)` to an offset. The col is clamped to the row's length, and a
    /// row past the last row gives the buffer length.
    #[must_use]
    pub fn row_col_to_pos(&self, arg_pos: impl Into<Pos>) -> ByteIndex {
        let pos: Pos = arg_pos.into();
        match (
            self.line_start(pos.row_index),
            self.line_end(pos.row_index),
        ) {
            (Some(start), Some(end)) => (start + pos.col_index.as_usize()).min(end),
            _ => byte_index(self.len()),
        }
    }

    /// Number of bytes in `row`, excluding its `\n`. Rows past the end have length 0.
    #[must_use]
    pub fn line_length(&self, arg_row: impl Into<RowIndex>) -> ColIndex {
        let row_index: RowIndex = arg_row.into();
        match (self.line_start(row_index), self.line_end(row_index)) {
            (Some(start), Some(end)) => col(*end - *start),
            _ => col(0),
        }
    }

    /// Visual width of the leading whitespace of `row`. Spaces count 1 and tabs count
    /// `tab_width`, stopping at the first other byte. Rows past the end have indent 0.
    #[must_use]
    pub fn line_indent(&self, arg_row: impl Into<RowIndex>, tab_width: usize) -> usize {
        let row_index: RowIndex = arg_row.into();
        let (Some(start), Some(end)) =
            (self.line_start(row_index), self.line_end(row_index))
        else {
            return 0;
        };

        let mut indent = 0;
        for offset in *start..*end {
            match self.byte_at(offset) {
                Some(SPACE_BYTE) => indent += 1,
                Some(TAB_BYTE) => indent += tab_width,
                _ => break,
            }
        }
        indent
    }
}
