// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The [`GapBuffer`] struct along with construction and read-only access. Mutation
//! lives in `gap_buffer_ops` and coordinate mapping in `coordinate_mapper`.

use super::{DEFAULT_CAPACITY, LINE_FEED_BYTE};
use crate::{ByteIndex, EditorError, EditorResult, byte_index};
use std::fmt::{Debug, Formatter, Result};

/// Single byte array with a movable gap. See the [module docs](super) for the layout.
///
/// Invariants:
/// - `storage.len()` is the capacity, and `0 <= gap_start <= gap_end <= capacity`.
/// - `newline_offsets` holds the logical offset of every `\n` in the content, sorted
///   ascending.
#[derive(Clone, PartialEq, Eq)]
pub struct GapBuffer {
    pub(super) storage: Vec<u8>,
    pub(super) gap_start: usize,
    pub(super) gap_end: usize,
    pub(super) newline_offsets: Vec<ByteIndex>,
}

impl Default for GapBuffer {
    fn default() -> Self { Self::new(DEFAULT_CAPACITY) }
}

impl GapBuffer {
    /// Create an empty buffer. The gap spans the whole storage. A `capacity` of 0 uses
    /// [`DEFAULT_CAPACITY`].
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = resolve_capacity(capacity);
        Self {
            storage: vec![0; capacity],
            gap_start: 0,
            gap_end: capacity,
            newline_offsets: Vec::new(),
        }
    }

    /// Create a buffer holding `bytes`, with a gap of `spare_capacity` bytes at the end
    /// (0 uses [`DEFAULT_CAPACITY`]). The line index is built with a single scan.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::OutOfMemory`] if the storage can't be allocated.
    pub fn from_bytes(bytes: &[u8], spare_capacity: usize) -> EditorResult<Self> {
        let gap_len = resolve_capacity(spare_capacity);
        let capacity = bytes.len().saturating_add(gap_len);
        let mut storage = try_alloc_zeroed(capacity)?;
        storage[..bytes.len()].copy_from_slice(bytes);

        let newline_offsets = bytes
            .iter()
            .enumerate()
            .filter(|(_, it)| **it == LINE_FEED_BYTE)
            .map(|(offset, _)| byte_index(offset))
            .collect();

        Ok(Self {
            storage,
            gap_start: bytes.len(),
            gap_end: capacity,
            newline_offsets,
        })
    }

    /// Logical length, i.e. the number of content bytes. `O(1)`.
    #[must_use]
    pub fn len(&self) -> usize { self.storage.len() - self.gap_len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Physical size of the storage, content plus gap.
    #[must_use]
    pub fn capacity(&self) -> usize { self.storage.len() }

    #[must_use]
    pub fn gap_len(&self) -> usize { self.gap_end - self.gap_start }

    /// Logical offset where the gap currently sits. After an edit this is the offset
    /// just past the edit point.
    #[must_use]
    pub fn gap_start(&self) -> ByteIndex { byte_index(self.gap_start) }

    /// Read the byte at a logical offset, independent of where the gap is. Returns
    /// [`None`] for offsets at or past [`Self::len`].
    #[must_use]
    pub fn byte_at(&self, arg_pos: impl Into<ByteIndex>) -> Option<u8> {
        let pos: ByteIndex = arg_pos.into();
        let pos = pos.as_usize();
        if pos >= self.len() {
            return None;
        }
        let physical = if pos < self.gap_start {
            pos
        } else {
            pos + self.gap_len()
        };
        self.storage.get(physical).copied()
    }

    /// Zero-copy view of the content as `(prefix, suffix)`. Concatenated, they are the
    /// logical content.
    #[must_use]
    pub fn as_slices(&self) -> (&[u8], &[u8]) {
        (
            &self.storage[..self.gap_start],
            &self.storage[self.gap_end..],
        )
    }

    /// Copy of the content as one contiguous byte sequence. For renderers and file
    /// save; internal algorithms read through [`Self::byte_at`] instead.
    #[must_use]
    pub fn to_contiguous(&self) -> Vec<u8> {
        let (prefix, suffix) = self.as_slices();
        let mut acc = Vec::with_capacity(prefix.len() + suffix.len());
        acc.extend_from_slice(prefix);
        acc.extend_from_slice(suffix);
        acc
    }

    /// Offsets of every `\n` in the content, ascending.
    #[must_use]
    pub fn newline_offsets(&self) -> &[ByteIndex] { &self.newline_offsets }
}

pub(super) fn resolve_capacity(capacity: usize) -> usize {
    if capacity == 0 {
        DEFAULT_CAPACITY
    } else {
        capacity
    }
}

/// Allocate `capacity` zeroed bytes without aborting the process on failure.
pub(super) fn try_alloc_zeroed(capacity: usize) -> EditorResult<Vec<u8>> {
    let mut acc: Vec<u8> = Vec::new();
    acc.try_reserve_exact(capacity)
        .map_err(|_| EditorError::OutOfMemory {
            requested: capacity,
        })?;
    acc.resize(capacity, 0);
    Ok(acc)
}

mod impl_debug {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl Debug for GapBuffer {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            write!(
                f,
                "GapBuffer[len: {}, cap: {}, gap: {}..{}, rows: {}, content: {:?}]",
                self.len(),
                self.capacity(),
                self.gap_start,
                self.gap_end,
                self.newline_offsets.len() + 1,
                String::from_utf8_lossy(&self.to_contiguous())
            )
        }
    }
}
