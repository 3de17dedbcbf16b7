// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ByteIndex, Document, Pos, row};

impl Document {
    /// Start an empty selection at `pos`.
    pub fn selection_start(&mut self, arg_pos: impl Into<Pos>) {
        self.selection.start(arg_pos);
    }

    /// Move the cursor end of the selection to `pos`.
    pub fn selection_update(&mut self, arg_pos: impl Into<Pos>) {
        self.selection.update(arg_pos);
    }

    pub fn selection_clear(&mut self) { self.selection.clear(); }

    #[must_use]
    pub fn selection_contains(&self, arg_pos: impl Into<Pos>) -> bool {
        self.selection.contains(arg_pos)
    }

    #[must_use]
    pub fn selection_normalized_range(&self) -> Option<(Pos, Pos)> {
        self.selection.normalized_range()
    }

    /// Select from the top of the document to the end of the last row. The caret moves
    /// to the end.
    pub fn select_all(&mut self) -> Pos {
        let last_row = row(self.row_count() - 1);
        let end = last_row + self.line_length(last_row);

        self.selection.start(Pos::default());
        self.selection.update(end);
        self.caret = end;
        self.set_status_message("Selected all");

        end
    }

    /// The active selection as `[start, end)` offsets, or [`None`] if there is no active
    /// selection.
    #[must_use]
    pub fn selection_offsets(&self) -> Option<(ByteIndex, ByteIndex)> {
        let (start, end) = self.selection.normalized_range()?;
        Some((
            self.buffer.row_col_to_pos(start),
            self.buffer.row_col_to_pos(end),
        ))
    }
}
