// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::generate_index_type_impl;

/// Represents a logical byte offset into the content of a [`crate::GapBuffer`]. The
/// gap is never visible through a `ByteIndex`; the buffer translates it to a physical
/// index internally.
#[derive(Copy, Clone, PartialEq, PartialOrd, Ord, Eq, Hash, Default)]
pub struct ByteIndex(pub usize);
generate_index_type_impl!(
    /* Add impl for this type */ ByteIndex, /* Make this constructor fn */ byte_index
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_byte_index() {
        let it = byte_index(3);
        assert_eq2!(it + 1, byte_index(4));
        assert_eq2!(it - 4, byte_index(0));
        assert_eq2!(usize::from(it), 3);
    }
}
