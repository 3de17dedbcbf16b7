// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Mutating operations for [`GapBuffer`]: gap movement, growth, single byte insert and
//! delete. Every mutation patches the newline index so that it always matches the
//! content.
//!
//! All offsets are logical and are clamped into `[0, len]`.

use super::{GapBuffer, LINE_FEED_BYTE, gap_buffer_core::try_alloc_zeroed};
use crate::{ByteIndex, DEBUG_GAP_BUFFER, EditorError, EditorResult, ok};

impl GapBuffer {
    /// Relocate the gap so that `gap_start == pos`. Only the bytes between the old and
    /// new gap position are copied, so the cost is `O(|pos - gap_start|)`.
    pub fn move_gap(&mut self, arg_pos: impl Into<ByteIndex>) {
        let pos: ByteIndex = arg_pos.into();
        let pos = pos.as_usize().min(self.len());

        if pos < self.gap_start {
            // Shift the tail of the prefix to the front of the suffix.
            let move_len = self.gap_start - pos;
            let new_gap_end = self.gap_end - move_len;
            self.storage.copy_within(pos..self.gap_start, new_gap_end);
            self.gap_start = pos;
            self.gap_end = new_gap_end;
        } else if pos > self.gap_start {
            // Shift the head of the suffix to the back of the prefix.
            let move_len = pos - self.gap_start;
            self.storage
                .copy_within(self.gap_end..self.gap_end + move_len, self.gap_start);
            self.gap_start += move_len;
            self.gap_end += move_len;
        }
    }

    /// Insert `byte` at `pos`, growing the storage first if the gap is empty. After the
    /// insert the gap sits just past the new byte.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::OutOfMemory`] if growth fails. The buffer is unchanged.
    pub fn insert_at(&mut self, arg_pos: impl Into<ByteIndex>, byte: u8) -> EditorResult<()> {
        let pos: ByteIndex = arg_pos.into();
        let pos = pos.as_usize().min(self.len());

        if self.gap_start == self.gap_end {
            self.grow()?;
        }
        if byte == LINE_FEED_BYTE {
            self.newline_offsets.try_reserve(1).map_err(|_| {
                EditorError::OutOfMemory {
                    requested: self.newline_offsets.len() + 1,
                }
            })?;
        }

        self.move_gap(pos);
        self.storage[self.gap_start] = byte;
        self.gap_start += 1;

        self.patch_newline_offsets_for_insert(pos, byte);

        ok!()
    }

    /// Remove the byte just before `pos` (backspace). Returns the removed byte, or
    /// [`None`] at the start of the buffer.
    pub fn delete_backward(&mut self, arg_pos: impl Into<ByteIndex>) -> Option<u8> {
        let pos: ByteIndex = arg_pos.into();
        let pos = pos.as_usize().min(self.len());
        if pos == 0 {
            return None;
        }

        self.move_gap(pos);
        self.gap_start -= 1;
        let removed = self.storage[self.gap_start];

        self.patch_newline_offsets_for_delete(pos - 1, removed);

        Some(removed)
    }

    /// Remove the byte at `pos` (delete key). Returns the removed byte, or [`None`] at
    /// the end of the buffer.
    pub fn delete_forward(&mut self, arg_pos: impl Into<ByteIndex>) -> Option<u8> {
        let pos: ByteIndex = arg_pos.into();
        let pos = pos.as_usize();
        if pos >= self.len() {
            return None;
        }

        self.move_gap(pos);
        let removed = self.storage[self.gap_end];
        self.gap_end += 1;

        self.patch_newline_offsets_for_delete(pos, removed);

        Some(removed)
    }

    /// Grow the storage to `old + max(old / 2, 1)` bytes. The prefix keeps its place and
    /// the suffix moves to the end of the new storage.
    fn grow(&mut self) -> EditorResult<()> {
        let old_capacity = self.storage.len();
        let new_capacity = old_capacity + (old_capacity / 2).max(1);
        let mut new_storage = try_alloc_zeroed(new_capacity)?;

        let suffix_len = old_capacity - self.gap_end;
        let new_gap_end = new_capacity - suffix_len;
        new_storage[..self.gap_start].copy_from_slice(&self.storage[..self.gap_start]);
        new_storage[new_gap_end..].copy_from_slice(&self.storage[self.gap_end..]);

        DEBUG_GAP_BUFFER.then(|| {
            tracing::debug!(
                message = "gap_buffer -> grow",
                old_capacity = %old_capacity,
                new_capacity = %new_capacity,
                len = %self.len()
            );
        });

        self.storage = new_storage;
        self.gap_end = new_gap_end;

        ok!()
    }

    /// Shift every newline at or after `pos` one to the right, then record `pos` itself
    /// if the inserted byte is a newline.
    fn patch_newline_offsets_for_insert(&mut self, pos: usize, byte: u8) {
        let index = self.newline_offsets.partition_point(|it| it.as_usize() < pos);
        for it in &mut self.newline_offsets[index..] {
            *it += 1;
        }
        if byte == LINE_FEED_BYTE {
            self.newline_offsets.insert(index, pos.into());
        }
    }

    /// Forget the newline at `pos` if the removed byte was one, then shift every later
    /// newline one to the left.
    fn patch_newline_offsets_for_delete(&mut self, pos: usize, byte: u8) {
        let index = self.newline_offsets.partition_point(|it| it.as_usize() < pos);
        if byte == LINE_FEED_BYTE {
            self.newline_offsets.remove(index);
        }
        for it in &mut self.newline_offsets[index..] {
            *it -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, byte_index};
    use test_case::test_case;

    fn naive_newline_offsets(bytes: &[u8]) -> Vec<ByteIndex> {
        bytes
            .iter()
            .enumerate()
            .filter(|(_, it)| **it == LINE_FEED_BYTE)
            .map(|(offset, _)| byte_index(offset))
            .collect()
    }

    fn assert_consistent(buffer: &GapBuffer, expected: &[u8]) {
        assert_eq2!(buffer.to_contiguous(), expected.to_vec());
        assert_eq2!(buffer.len(), expected.len());
        assert_eq2!(buffer.newline_offsets().to_vec(), naive_newline_offsets(expected));
        assert!(buffer.gap_start <= buffer.gap_end);
        assert!(buffer.gap_end <= buffer.capacity());
    }

    #[test]
    fn test_insert_at_increasing_offsets() {
        let mut buffer = GapBuffer::new(0);
        for (offset, byte) in b"ab\ncd".iter().enumerate() {
            buffer.insert_at(offset, *byte).unwrap();
        }
        assert_consistent(&buffer, b"ab\ncd");
        assert_eq2!(buffer.gap_start(), byte_index(5));
    }

    #[test]
    fn test_insert_in_middle_moves_gap() {
        let mut buffer = GapBuffer::from_bytes(b"acd", 4).unwrap();
        buffer.insert_at(1, b'b').unwrap();
        assert_consistent(&buffer, b"abcd");
        assert_eq2!(buffer.gap_start(), byte_index(2));
    }

    #[test]
    fn test_insert_past_end_is_clamped() {
        let mut buffer = GapBuffer::from_bytes(b"ab", 4).unwrap();
        buffer.insert_at(99, b'c').unwrap();
        assert_consistent(&buffer, b"abc");
    }

    #[test_case(1 ; "capacity one")]
    #[test_case(2 ; "capacity two")]
    #[test_case(3 ; "capacity three")]
    fn test_growth_from_tiny_capacity_preserves_content(capacity: usize) {
        let mut buffer = GapBuffer::new(capacity);
        let mut model: Vec<u8> = vec![];
        for (index, byte) in b"line one\nline two\n\nend".iter().enumerate() {
            // Alternate between inserting at the front half and the back.
            let pos = if index % 3 == 0 { model.len() / 2 } else { model.len() };
            buffer.insert_at(pos, *byte).unwrap();
            model.insert(pos, *byte);
            assert_consistent(&buffer, &model);
        }
        assert!(buffer.capacity() >= model.len());
    }

    #[test]
    fn test_growth_policy_is_one_and_a_half() {
        let mut buffer = GapBuffer::new(4);
        for byte in b"abcd" {
            buffer.insert_at(buffer.len(), *byte).unwrap();
        }
        assert_eq2!(buffer.capacity(), 4);
        buffer.insert_at(2, b'x').unwrap();
        assert_eq2!(buffer.capacity(), 6);
        assert_consistent(&buffer, b"abxcd");
    }

    #[test]
    fn test_delete_backward() {
        let mut buffer = GapBuffer::from_bytes(b"ab\ncd", 0).unwrap();
        assert_eq2!(buffer.delete_backward(0), None);
        assert_eq2!(buffer.delete_backward(3), Some(b'\n'));
        assert_consistent(&buffer, b"abcd");
        assert_eq2!(buffer.gap_start(), byte_index(2));
        assert_eq2!(buffer.delete_backward(4), Some(b'd'));
        assert_consistent(&buffer, b"abc");
    }

    #[test]
    fn test_delete_forward() {
        let mut buffer = GapBuffer::from_bytes(b"a\nb\nc", 0).unwrap();
        assert_eq2!(buffer.delete_forward(5), None);
        assert_eq2!(buffer.delete_forward(1), Some(b'\n'));
        assert_consistent(&buffer, b"ab\nc");
        assert_eq2!(buffer.delete_forward(0), Some(b'a'));
        assert_consistent(&buffer, b"b\nc");
    }

    #[test]
    fn test_move_gap_is_clamped_and_keeps_content() {
        let mut buffer = GapBuffer::from_bytes(b"hello\nworld", 3).unwrap();
        buffer.move_gap(0);
        assert_eq2!(buffer.gap_start(), byte_index(0));
        assert_consistent(&buffer, b"hello\nworld");
        buffer.move_gap(7);
        assert_eq2!(buffer.gap_start(), byte_index(7));
        assert_consistent(&buffer, b"hello\nworld");
        buffer.move_gap(1_000);
        assert_eq2!(buffer.gap_start(), byte_index(11));
        assert_consistent(&buffer, b"hello\nworld");
    }

    /// Pseudo random edit script, checked step by step against a plain `Vec<u8>`.
    #[test]
    fn test_random_edits_match_reference_model() {
        use rand::{Rng, SeedableRng, rngs::StdRng};

        let mut rng = StdRng::seed_from_u64(42);
        let mut buffer = GapBuffer::new(2);
        let mut model: Vec<u8> = vec![];
        let alphabet = b"ab \n\t";

        for _ in 0..2_000 {
            let pos = rng.random_range(0..=model.len());
            match rng.random_range(0..4) {
                0 | 1 => {
                    let byte = alphabet[rng.random_range(0..alphabet.len())];
                    buffer.insert_at(pos, byte).unwrap();
                    model.insert(pos, byte);
                }
                2 => {
                    let removed = buffer.delete_backward(pos);
                    let expected = (pos > 0).then(|| model.remove(pos - 1));
                    assert_eq2!(removed, expected);
                }
                _ => {
                    let removed = buffer.delete_forward(pos);
                    let expected = (pos < model.len()).then(|| model.remove(pos));
                    assert_eq2!(removed, expected);
                }
            }
            assert_consistent(&buffer, &model);
        }
    }
}
