// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::generate_index_type_impl;

/// The horizontal index of a byte within a line, starting at 0, which is the first
/// column. Columns count bytes, not display cells or grapheme clusters.
///
/// This is one part of a [`Pos`]. You can use the [`col()`] to create a new instance.
///
/// # Examples
/// ```
/// use r3bl_gap_editor::{ColIndex, col};
/// let col = col(5);
/// let col = ColIndex::new(5);
/// ```
///
/// [`Pos`]: crate::Pos
/// [`col()`]: crate::col
#[derive(Copy, Clone, PartialEq, PartialOrd, Ord, Eq, Hash, Default)]
pub struct ColIndex(pub usize);
generate_index_type_impl!(
    /* Add impl for this type */ ColIndex, /* Make this constructor fn */ col
);
