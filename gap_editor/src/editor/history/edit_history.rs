// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::EditRecord;
use crate::{ByteIndex, DEBUG_EDIT_HISTORY, EditorResult, GapBuffer};

/// # Undo/Redo Algorithm
///
/// `EditHistory` keeps two independent stacks of [`EditRecord`]s. Each record describes
/// a single byte edit that was already applied to the [`GapBuffer`].
///
/// ## Pushing a new edit ([`EditHistory::push`])
///
/// 1. The record is pushed onto the undo stack.
/// 2. The redo stack is cleared. History is linear, so a new edit after an undo discards
///    the undone future.
///
/// ## Undoing ([`EditHistory::undo`])
///
/// 1. If the undo stack is empty, there is nothing to do and `Ok(None)` is returned.
/// 2. The top record is popped and its inverse is applied to the buffer.
/// 3. The original record is pushed onto the redo stack.
/// 4. The resulting gap start is returned, which is where the caret goes.
///
/// ## Redoing ([`EditHistory::redo`])
///
/// Symmetric to undo: pop from redo, re-apply the original record, push back onto undo.
///
/// ## Failure
///
/// If applying a record fails, the record goes back onto the stack it came from, so both
/// stacks and the buffer are exactly as they were before the call.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct EditHistory {
    undo_stack: Vec<EditRecord>,
    redo_stack: Vec<EditRecord>,
}

impl EditHistory {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn push(&mut self, record: EditRecord) {
        self.undo_stack.push(record);
        self.redo_stack.clear();

        DEBUG_EDIT_HISTORY.then(|| {
            tracing::debug!(
                message = "history -> push",
                record = ?record,
                undo_depth = %self.undo_stack.len()
            );
        });
    }

    /// # Errors
    ///
    /// Returns [`crate::EditorError::OutOfMemory`] if the inverse edit can't grow the
    /// buffer. Nothing changes in that case.
    pub fn undo(&mut self, buffer: &mut GapBuffer) -> EditorResult<Option<ByteIndex>> {
        let Some(record) = self.undo_stack.pop() else {
            return Ok(None);
        };

        match record.inverse().apply(buffer) {
            Ok(offset) => {
                self.redo_stack.push(record);
                DEBUG_EDIT_HISTORY.then(|| {
                    tracing::debug!(
                        message = "history -> undo",
                        record = ?record,
                        offset = %offset
                    );
                });
                Ok(Some(offset))
            }
            Err(error) => {
                self.undo_stack.push(record);
                Err(error)
            }
        }
    }

    /// # Errors
    ///
    /// Returns [`crate::EditorError::OutOfMemory`] if the edit can't grow the buffer.
    /// Nothing changes in that case.
    pub fn redo(&mut self, buffer: &mut GapBuffer) -> EditorResult<Option<ByteIndex>> {
        let Some(record) = self.redo_stack.pop() else {
            return Ok(None);
        };

        match record.apply(buffer) {
            Ok(offset) => {
                self.undo_stack.push(record);
                DEBUG_EDIT_HISTORY.then(|| {
                    tracing::debug!(
                        message = "history -> redo",
                        record = ?record,
                        offset = %offset
                    );
                });
                Ok(Some(offset))
            }
            Err(error) => {
                self.redo_stack.push(record);
                Err(error)
            }
        }
    }

    #[must_use]
    pub fn undo_depth(&self) -> usize { self.undo_stack.len() }

    #[must_use]
    pub fn redo_depth(&self) -> usize { self.redo_stack.len() }

    #[must_use]
    pub fn can_undo(&self) -> bool { !self.undo_stack.is_empty() }

    #[must_use]
    pub fn can_redo(&self) -> bool { !self.redo_stack.is_empty() }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, byte_index};

    /// Insert `bytes` one at a time at increasing offsets, recording each insert.
    fn type_bytes(buffer: &mut GapBuffer, history: &mut EditHistory, bytes: &[u8]) {
        for byte in bytes {
            let offset = buffer.len();
            buffer.insert_at(offset, *byte).unwrap();
            history.push(EditRecord::for_insert(offset, *byte));
        }
    }

    #[test]
    fn test_empty_history_has_nothing_to_do() {
        let mut buffer = GapBuffer::new(0);
        let mut history = EditHistory::new();
        assert_eq2!(history.undo(&mut buffer).unwrap(), None);
        assert_eq2!(history.redo(&mut buffer).unwrap(), None);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_five_undos_empty_the_buffer() {
        let mut buffer = GapBuffer::new(0);
        let mut history = EditHistory::new();
        type_bytes(&mut buffer, &mut history, b"ab\ncd");
        assert_eq2!(history.undo_depth(), 5);

        for expected_offset in (0..5).rev() {
            assert_eq2!(
                history.undo(&mut buffer).unwrap(),
                Some(byte_index(expected_offset))
            );
        }
        assert_eq2!(buffer.len(), 0);
        assert_eq2!(buffer.row_count(), 1);
        assert_eq2!(history.undo(&mut buffer).unwrap(), None);
        assert_eq2!(history.redo_depth(), 5);
    }

    #[test]
    fn test_undo_then_redo_is_identity() {
        let mut buffer = GapBuffer::new(2);
        let mut history = EditHistory::new();
        type_bytes(&mut buffer, &mut history, b"x\ny");

        // Delete the newline with backspace and record it.
        let removed = buffer.delete_backward(2).unwrap();
        history.push(EditRecord::for_delete(1, removed));
        let before = buffer.to_contiguous();
        assert_eq2!(before, b"xy".to_vec());

        let undo_offset = history.undo(&mut buffer).unwrap();
        assert_eq2!(buffer.to_contiguous(), b"x\ny".to_vec());
        assert_eq2!(undo_offset, Some(byte_index(2)));

        let redo_offset = history.redo(&mut buffer).unwrap();
        assert_eq2!(buffer.to_contiguous(), before);
        assert_eq2!(redo_offset, Some(byte_index(1)));
    }

    #[test]
    fn test_new_edit_after_undo_clears_redo() {
        let mut buffer = GapBuffer::new(0);
        let mut history = EditHistory::new();
        type_bytes(&mut buffer, &mut history, b"abc");

        history.undo(&mut buffer).unwrap();
        assert!(history.can_redo());

        type_bytes(&mut buffer, &mut history, b"z");
        assert!(!history.can_redo());
        assert_eq2!(history.redo(&mut buffer).unwrap(), None);
        assert_eq2!(buffer.to_contiguous(), b"abz".to_vec());
    }

    #[test]
    fn test_clear() {
        let mut buffer = GapBuffer::new(0);
        let mut history = EditHistory::new();
        type_bytes(&mut buffer, &mut history, b"ab");
        history.undo(&mut buffer).unwrap();
        history.clear();
        assert_eq2!(history.undo_depth(), 0);
        assert_eq2!(history.redo_depth(), 0);
    }
}
