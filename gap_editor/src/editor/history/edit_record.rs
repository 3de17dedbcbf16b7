// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ByteIndex, EditorResult, GapBuffer, LINE_FEED_BYTE};
use std::fmt::{Debug, Formatter, Result};

/// One single byte edit, with enough information to undo it.
///
/// Newlines get their own variants so that the history reads the same way a user
/// thinks about the edit ("split the line", "join the lines").
///
/// | Record                        | Inverse                       |
/// | :---------------------------- | :---------------------------- |
/// | `Insert { offset, byte }`     | `Delete { offset, byte }`     |
/// | `InsertNewline { offset }`    | `DeleteNewline { offset }`    |
///
/// The inverse always targets the same offset, since an insert at `offset` puts the byte
/// at `offset`, and a forward delete at `offset` removes it again.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditRecord {
    Insert { offset: ByteIndex, byte: u8 },
    Delete { offset: ByteIndex, byte: u8 },
    InsertNewline { offset: ByteIndex },
    DeleteNewline { offset: ByteIndex },
}

impl EditRecord {
    /// Record for `byte` having been inserted at `offset`.
    #[must_use]
    pub fn for_insert(arg_offset: impl Into<ByteIndex>, byte: u8) -> Self {
        let offset: ByteIndex = arg_offset.into();
        if byte == LINE_FEED_BYTE {
            Self::InsertNewline { offset }
        } else {
            Self::Insert { offset, byte }
        }
    }

    /// Record for `byte` having been removed from `offset`.
    #[must_use]
    pub fn for_delete(arg_offset: impl Into<ByteIndex>, byte: u8) -> Self {
        let offset: ByteIndex = arg_offset.into();
        if byte == LINE_FEED_BYTE {
            Self::DeleteNewline { offset }
        } else {
            Self::Delete { offset, byte }
        }
    }

    #[must_use]
    pub fn offset(&self) -> ByteIndex {
        match self {
            Self::Insert { offset, .. }
            | Self::Delete { offset, .. }
            | Self::InsertNewline { offset }
            | Self::DeleteNewline { offset } => *offset,
        }
    }

    /// The byte that this record adds or removes.
    #[must_use]
    pub fn byte(&self) -> u8 {
        match self {
            Self::Insert { byte, .. } | Self::Delete { byte, .. } => *byte,
            Self::InsertNewline { .. } | Self::DeleteNewline { .. } => LINE_FEED_BYTE,
        }
    }

    #[must_use]
    pub fn inverse(&self) -> Self {
        match *self {
            Self::Insert { offset, byte } => Self::Delete { offset, byte },
            Self::Delete { offset, byte } => Self::Insert { offset, byte },
            Self::InsertNewline { offset } => Self::DeleteNewline { offset },
            Self::DeleteNewline { offset } => Self::InsertNewline { offset },
        }
    }

    /// Perform this edit on `buffer` and return the resulting gap start, which is where
    /// the caret belongs afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EditorError::OutOfMemory`] if an insert needs to grow the buffer
    /// and can't. The buffer is unchanged in that case.
    ///
    /// # Panics
    ///
    /// In debug builds, if a delete removes a byte other than [`EditRecord::byte`]. That
    /// means the record no longer describes `buffer`.
    pub fn apply(&self, buffer: &mut GapBuffer) -> EditorResult<ByteIndex> {
        match self {
            Self::Insert { .. } | Self::InsertNewline { .. } => {
                buffer.insert_at(self.offset(), self.byte())?;
            }
            Self::Delete { .. } | Self::DeleteNewline { .. } => {
                buffer.move_gap(self.offset());
                let removed = buffer.delete_forward(self.offset());
                debug_assert_eq!(
                    removed,
                    Some(self.byte()),
                    "{self:?} does not match the buffer"
                );
            }
        }
        Ok(buffer.gap_start())
    }
}

mod impl_debug {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl Debug for EditRecord {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            match self {
                Self::Insert { offset, byte } => {
                    write!(f, "Insert[{}: {:?}]", offset, char::from(*byte))
                }
                Self::Delete { offset, byte } => {
                    write!(f, "Delete[{}: {:?}]", offset, char::from(*byte))
                }
                Self::InsertNewline { offset } => write!(f, "InsertNewline[{offset}]"),
                Self::DeleteNewline { offset } => write!(f, "DeleteNewline[{offset}]"),
            }
        }
    }
}
