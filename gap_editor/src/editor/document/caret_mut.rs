// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Caret movement. Every function here starts from the current caret (snapped onto the
//! content), computes the new caret, and then lets [`SelectMode`] either extend or clear
//! the selection.

use super::SelectMode;
use crate::{CaretDirection, Document, Pos, col, row};

pub fn left(doc: &mut Document, select_mode: SelectMode) -> Pos {
    move_caret(doc, select_mode, |doc, caret| {
        if caret.col_index > col(0) {
            caret.row_index + (caret.col_index - 1)
        } else if caret.row_index > row(0) {
            // Wrap to the end of the previous row.
            let prev_row = caret.row_index - 1;
            prev_row + doc.line_length(prev_row)
        } else {
            caret
        }
    })
}

pub fn right(doc: &mut Document, select_mode: SelectMode) -> Pos {
    move_caret(doc, select_mode, |doc, caret| {
        if caret.col_index < doc.line_length(caret.row_index) {
            caret.row_index + (caret.col_index + 1)
        } else if caret.row_index.as_usize() + 1 < doc.row_count() {
            // Wrap to the start of the next row.
            (caret.row_index + 1) + col(0)
        } else {
            caret
        }
    })
}

pub fn up(doc: &mut Document, select_mode: SelectMode) -> Pos {
    move_caret(doc, select_mode, |doc, caret| {
        if caret.row_index > row(0) {
            clip_col_to_row(doc, caret.row_index - 1, caret)
        } else {
            caret
        }
    })
}

pub fn down(doc: &mut Document, select_mode: SelectMode) -> Pos {
    move_caret(doc, select_mode, |doc, caret| {
        if caret.row_index.as_usize() + 1 < doc.row_count() {
            clip_col_to_row(doc, caret.row_index + 1, caret)
        } else {
            caret
        }
    })
}

pub fn home(doc: &mut Document, select_mode: SelectMode) -> Pos {
    move_caret(doc, select_mode, |_, caret| caret.row_index + col(0))
}

pub fn end(doc: &mut Document, select_mode: SelectMode) -> Pos {
    move_caret(doc, select_mode, |doc, caret| {
        caret.row_index + doc.line_length(caret.row_index)
    })
}

pub fn page_up(doc: &mut Document, select_mode: SelectMode) -> Pos {
    let page_rows = doc.config.page_rows;
    move_caret(doc, select_mode, |doc, caret| {
        clip_col_to_row(doc, caret.row_index - page_rows, caret)
    })
}

pub fn page_down(doc: &mut Document, select_mode: SelectMode) -> Pos {
    let page_rows = doc.config.page_rows;
    move_caret(doc, select_mode, |doc, caret| {
        let last_row = row(doc.row_count() - 1);
        clip_col_to_row(doc, (caret.row_index + page_rows).min(last_row), caret)
    })
}

/// Dispatch one of the four arrow directions.
pub fn move_in_direction(
    doc: &mut Document,
    direction: CaretDirection,
    select_mode: SelectMode,
) -> Pos {
    match direction {
        CaretDirection::Left => left(doc, select_mode),
        CaretDirection::Right => right(doc, select_mode),
        CaretDirection::Up => up(doc, select_mode),
        CaretDirection::Down => down(doc, select_mode),
    }
}

/// Keep the caret's col on `new_row`, limited to that row's length.
fn clip_col_to_row(doc: &Document, new_row: crate::RowIndex, caret: Pos) -> Pos {
    new_row + caret.col_index.min(doc.line_length(new_row))
}

fn move_caret(
    doc: &mut Document,
    select_mode: SelectMode,
    compute_new_caret: impl FnOnce(&Document, Pos) -> Pos,
) -> Pos {
    doc.caret = doc.clamp(doc.caret);
    select_mode.before_caret_move(doc);

    let new_caret = compute_new_caret(&*doc, doc.caret);
    doc.caret = new_caret;

    select_mode.after_caret_move(doc, new_caret);
    new_caret
}
