// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Editing and caret movement actions on [`Document`]. These are thin wrappers that
//! delegate to [`content_mut`] and [`caret_mut`].

use super::{SelectMode, caret_mut, content_mut};
use crate::{CaretDirection, Document, EditorResult, Pos};

impl Document {
    /// Insert `byte` at `pos` and return the caret just after it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EditorError::OutOfMemory`] if the buffer can't grow.
    pub fn insert_char(&mut self, arg_pos: impl Into<Pos>, byte: u8) -> EditorResult<Pos> {
        content_mut::insert_char(self, arg_pos.into(), byte)
    }

    /// Insert every byte of `bytes` at `pos`, one history record each.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EditorError::OutOfMemory`] if the buffer can't grow.
    pub fn insert_bytes(
        &mut self,
        arg_pos: impl Into<Pos>,
        bytes: &[u8],
    ) -> EditorResult<Pos> {
        content_mut::insert_bytes(self, arg_pos.into(), bytes)
    }

    /// Split the row at `pos` and indent the new row by `auto_indent_width` spaces.
    /// Use [`Document::auto_indent_width`] to get the width the config asks for.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EditorError::OutOfMemory`] if the buffer can't grow.
    pub fn insert_newline(
        &mut self,
        arg_pos: impl Into<Pos>,
        auto_indent_width: usize,
    ) -> EditorResult<Pos> {
        content_mut::insert_newline(self, arg_pos.into(), auto_indent_width)
    }

    /// Insert [`crate::EditorConfig::tab_width`] spaces at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EditorError::OutOfMemory`] if the buffer can't grow.
    pub fn insert_tab(&mut self, arg_pos: impl Into<Pos>) -> EditorResult<Pos> {
        content_mut::insert_tab(self, arg_pos.into())
    }

    #[must_use]
    pub fn auto_indent_width(&self, arg_pos: impl Into<Pos>) -> usize {
        content_mut::auto_indent_width(self, arg_pos.into())
    }

    /// Backspace at `pos`. Returns the new caret.
    ///
    /// # Errors
    ///
    /// Deleting never allocates, so this doesn't fail today. The [`EditorResult`] keeps
    /// all content mutations on the same footing for callers.
    pub fn delete_backward(&mut self, arg_pos: impl Into<Pos>) -> EditorResult<Pos> {
        Ok(content_mut::delete_backward(self, arg_pos.into()))
    }

    /// Delete key at `pos`.
    ///
    /// # Errors
    ///
    /// Deleting never allocates, so this doesn't fail today.
    pub fn delete_forward(&mut self, arg_pos: impl Into<Pos>) -> EditorResult<()> {
        content_mut::delete_forward(self, arg_pos.into());
        Ok(())
    }

    /// Undo the most recent edit. Returns [`None`] if there is nothing to undo.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EditorError::OutOfMemory`] if the buffer can't grow.
    pub fn undo(&mut self) -> EditorResult<Option<Pos>> { content_mut::undo(self) }

    /// Redo the most recently undone edit. Returns [`None`] if there is nothing to redo.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EditorError::OutOfMemory`] if the buffer can't grow.
    pub fn redo(&mut self) -> EditorResult<Option<Pos>> { content_mut::redo(self) }

    pub fn move_caret(&mut self, direction: CaretDirection, select_mode: SelectMode) -> Pos {
        caret_mut::move_in_direction(self, direction, select_mode)
    }

    pub fn home(&mut self, select_mode: SelectMode) -> Pos {
        caret_mut::home(self, select_mode)
    }

    pub fn end(&mut self, select_mode: SelectMode) -> Pos { caret_mut::end(self, select_mode) }

    pub fn page_up(&mut self, select_mode: SelectMode) -> Pos {
        caret_mut::page_up(self, select_mode)
    }

    pub fn page_down(&mut self, select_mode: SelectMode) -> Pos {
        caret_mut::page_down(self, select_mode)
    }
}
