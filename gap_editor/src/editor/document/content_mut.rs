// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Content mutation. Each function resolves the given position to an offset, edits the
//! [`crate::GapBuffer`] one byte at a time, records one [`EditRecord`] per byte, and
//! returns the new caret (which is also stored on the [`Document`]).
//!
//! Positions past the end of a row or past the last row are clamped onto the content
//! before editing.

use crate::{ByteIndex, Document, EditRecord, EditorResult, LINE_FEED_BYTE, Pos,
            SPACE_BYTE, TAB_BYTE, ok};

/// Insert `byte` at `pos`. The caret ends up just after it.
///
/// # Errors
///
/// Returns [`crate::EditorError::OutOfMemory`] if the buffer can't grow. Nothing
/// changes in that case.
pub fn insert_char(doc: &mut Document, pos: Pos, byte: u8) -> EditorResult<Pos> {
    let offset = doc.buffer.row_col_to_pos(pos);
    insert_and_record(doc, offset, byte)?;
    Ok(move_caret_to_offset(doc, offset + 1))
}

/// Insert a `\n` at `pos`, followed by `auto_indent_width` spaces. Every byte is its own
/// history record. The caret ends up after the indent on the new row.
///
/// # Errors
///
/// Returns [`crate::EditorError::OutOfMemory`] if the buffer can't grow. The bytes
/// inserted before the failure stay, and each of them can be undone.
pub fn insert_newline(
    doc: &mut Document,
    pos: Pos,
    auto_indent_width: usize,
) -> EditorResult<Pos> {
    let offset = doc.buffer.row_col_to_pos(pos);
    insert_and_record(doc, offset, LINE_FEED_BYTE)?;
    for index in 0..auto_indent_width {
        insert_and_record(doc, offset + 1 + index, SPACE_BYTE)?;
    }
    Ok(move_caret_to_offset(doc, offset + 1 + auto_indent_width))
}

/// Insert `tab_width` spaces at `pos`.
///
/// # Errors
///
/// Returns [`crate::EditorError::OutOfMemory`] if the buffer can't grow.
pub fn insert_tab(doc: &mut Document, pos: Pos) -> EditorResult<Pos> {
    let offset = doc.buffer.row_col_to_pos(pos);
    let tab_width = doc.config.tab_width;
    for index in 0..tab_width {
        insert_and_record(doc, offset + index, SPACE_BYTE)?;
    }
    Ok(move_caret_to_offset(doc, offset + tab_width))
}

/// Insert every byte of `bytes` at `pos`, in order.
///
/// # Errors
///
/// Returns [`crate::EditorError::OutOfMemory`] if the buffer can't grow.
pub fn insert_bytes(doc: &mut Document, pos: Pos, bytes: &[u8]) -> EditorResult<Pos> {
    let offset = doc.buffer.row_col_to_pos(pos);
    for (index, byte) in bytes.iter().enumerate() {
        insert_and_record(doc, offset + index, *byte)?;
    }
    Ok(move_caret_to_offset(doc, offset + bytes.len()))
}

/// Remove the byte before `pos` (backspace). At col 0 this joins the row with the one
/// above. At the start of the buffer nothing happens.
pub fn delete_backward(doc: &mut Document, pos: Pos) -> Pos {
    let offset = doc.buffer.row_col_to_pos(pos);
    match doc.buffer.delete_backward(offset) {
        Some(removed) => {
            let removed_at = offset - 1;
            record(doc, EditRecord::for_delete(removed_at, removed));
            move_caret_to_offset(doc, removed_at)
        }
        None => move_caret_to_offset(doc, offset),
    }
}

/// Remove the byte at `pos` (delete key). At the end of the buffer nothing happens. The
/// caret stays at `pos`.
pub fn delete_forward(doc: &mut Document, pos: Pos) {
    let offset = doc.buffer.row_col_to_pos(pos);
    if let Some(removed) = doc.buffer.delete_forward(offset) {
        record(doc, EditRecord::for_delete(offset, removed));
    }
    move_caret_to_offset(doc, offset);
}

/// Remove every byte in `[start, end)`, repeatedly deleting at `start`. One record per
/// byte. The caret ends up at `start`.
pub fn delete_between(doc: &mut Document, start: ByteIndex, end: ByteIndex) -> Pos {
    for _ in *start..*end {
        match doc.buffer.delete_forward(start) {
            Some(removed) => record(doc, EditRecord::for_delete(start, removed)),
            None => break,
        }
    }
    move_caret_to_offset(doc, start)
}

/// Undo the most recent edit. The caret moves to where the edit happened.
///
/// # Errors
///
/// Returns [`crate::EditorError::OutOfMemory`] if undoing a delete can't grow the
/// buffer. Nothing changes in that case.
pub fn undo(doc: &mut Document) -> EditorResult<Option<Pos>> {
    let maybe_offset = doc.history.undo(&mut doc.buffer)?;
    Ok(after_history_move(doc, maybe_offset))
}

/// Redo the most recently undone edit.
///
/// # Errors
///
/// Returns [`crate::EditorError::OutOfMemory`] if redoing an insert can't grow the
/// buffer. Nothing changes in that case.
pub fn redo(doc: &mut Document) -> EditorResult<Option<Pos>> {
    let maybe_offset = doc.history.redo(&mut doc.buffer)?;
    Ok(after_history_move(doc, maybe_offset))
}

/// Width of the whitespace that starts the row of `pos`, counting only the bytes before
/// `pos`. This is the indent a new row gets when the row is split at `pos`. Returns 0
/// when auto indent is off.
#[must_use]
pub fn auto_indent_width(doc: &Document, pos: Pos) -> usize {
    if !doc.config.auto_indent {
        return 0;
    }
    let offset = doc.buffer.row_col_to_pos(pos);
    let line_start = doc.buffer.line_start(pos.row_index).unwrap_or(offset);

    let mut indent = 0;
    for it in *line_start..*offset {
        match doc.buffer.byte_at(it) {
            Some(SPACE_BYTE) => indent += 1,
            Some(TAB_BYTE) => indent += doc.config.tab_width,
            _ => break,
        }
    }
    indent
}

fn insert_and_record(doc: &mut Document, offset: ByteIndex, byte: u8) -> EditorResult<()> {
    doc.buffer.insert_at(offset, byte)?;
    record(doc, EditRecord::for_insert(offset, byte));
    ok!()
}

fn record(doc: &mut Document, record: EditRecord) {
    doc.history.push(record);
    doc.dirty = true;
}

fn move_caret_to_offset(doc: &mut Document, offset: ByteIndex) -> Pos {
    doc.caret = doc.buffer.pos_to_row_col(offset);
    doc.caret
}

fn after_history_move(doc: &mut Document, maybe_offset: Option<ByteIndex>) -> Option<Pos> {
    doc.selection.clear();
    let offset = maybe_offset?;
    doc.dirty = true;
    Some(move_caret_to_offset(doc, offset))
}
