// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Copy, cut and paste between the active selection and the [`crate::Clipboard`] slot
//! that every [`Document`] owns.

use super::content_mut;
use crate::{DEBUG_COPY_PASTE, Document, EditorResult, Pos};

impl Document {
    /// Copy the selected bytes into the clipboard and clear the selection. Returns the
    /// number of bytes copied.
    ///
    /// An active but empty selection is cleared without touching the clipboard, and 0 is
    /// returned. With no active selection nothing happens.
    pub fn copy(&mut self) -> usize {
        if !self.selection.is_active() {
            return 0;
        }
        let copied = self.copy_selection_to_clipboard();
        self.selection.clear();
        if copied > 0 {
            self.set_status_message(format!("Copied {copied} bytes"));
        }
        copied
    }

    /// Copy the selection, then delete it. Returns the number of bytes cut. Like
    /// [`Document::copy`], an active but empty selection is just cleared.
    pub fn cut(&mut self) -> usize {
        if !self.selection.is_active() {
            return 0;
        }
        let cut = self.copy_selection_to_clipboard();
        self.delete_range();
        if cut > 0 {
            self.set_status_message(format!("Cut {cut} bytes"));
        }
        cut
    }

    /// Insert the clipboard content at `pos`, one history record per byte, and return the
    /// caret after the pasted bytes. An active selection is deleted first, and the paste
    /// goes where the selection started.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EditorError::OutOfMemory`] if the buffer can't grow.
    pub fn paste(&mut self, arg_pos: impl Into<Pos>) -> EditorResult<Pos> {
        let pos = if self.selection.is_active() {
            self.delete_range()
        } else {
            arg_pos.into()
        };

        if self.clipboard.is_empty() {
            return Ok(self.set_caret(pos));
        }

        let bytes = self.clipboard.as_bytes().to_vec();

        DEBUG_COPY_PASTE.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "📋📋📋 paste",
                pos = ?pos,
                len = %bytes.len(),
                content = %String::from_utf8_lossy(&bytes)
            );
        });

        content_mut::insert_bytes(self, pos, &bytes)
    }

    #[must_use]
    pub fn clipboard_len(&self) -> usize { self.clipboard.len() }

    /// Delete the selected bytes, one history record per byte. The caret moves to the
    /// start of the range and the selection is cleared. With no active selection the
    /// caret is returned unchanged.
    pub fn delete_range(&mut self) -> Pos {
        let Some((start, end)) = self.selection_offsets() else {
            return self.caret;
        };

        DEBUG_COPY_PASTE.then(|| {
            tracing::debug!(
                message = "📋📋📋 delete_range",
                start = %start,
                end = %end
            );
        });

        let caret = content_mut::delete_between(self, start, end);
        self.selection.clear();
        caret
    }

    /// Replace the clipboard content with the selected bytes, read one at a time from the
    /// buffer. Returns the number of bytes copied, 0 if there was nothing to copy.
    fn copy_selection_to_clipboard(&mut self) -> usize {
        let Some((start, end)) = self.selection_offsets() else {
            return 0;
        };
        if start >= end {
            return 0;
        }

        let bytes: Vec<u8> = (*start..*end)
            .filter_map(|offset| self.buffer.byte_at(offset))
            .collect();
        let copied = bytes.len();

        DEBUG_COPY_PASTE.then(|| {
            tracing::debug!(
                message = "📋📋📋 copy",
                len = %copied,
                content = %String::from_utf8_lossy(&bytes)
            );
        });

        self.clipboard.put(bytes);
        copied
    }
}
