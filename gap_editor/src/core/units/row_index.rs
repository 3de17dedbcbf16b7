// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::generate_index_type_impl;

/// The vertical index of a line in a document, starting at 0, which is the first row.
///
/// This is one part of a [`Pos`]. You can use the [`row()`] to create a new instance.
///
/// # Examples
/// ```
/// use r3bl_gap_editor::{RowIndex, row};
/// let row = row(5);
/// let row = RowIndex::new(5);
/// ```
///
/// [`Pos`]: crate::Pos
/// [`row()`]: crate::row
#[derive(Copy, Clone, PartialEq, PartialOrd, Ord, Eq, Hash, Default)]
pub struct RowIndex(pub usize);
generate_index_type_impl!(
    /* Add impl for this type */ RowIndex, /* Make this constructor fn */ row
);
