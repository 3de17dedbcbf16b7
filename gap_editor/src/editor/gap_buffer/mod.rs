// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Gap buffer text store for the editing core.
//!
//! The whole document is one byte array with a single movable gap. The bytes before
//! the gap are the prefix, the bytes after it are the suffix, and the logical content is
//! `prefix ‖ suffix`.
//!
//! ```text
//!            gap_start        gap_end
//!                │               │
//!  storage: [ a b c ░ ░ ░ ░ ░ ░ d e ]      logical: "abcde"
//!             prefix     gap     suffix
//! ```
//!
//! # Module Architecture
//!
//! All operations are inherent methods on [`GapBuffer`], organized into focused files:
//! - `gap_buffer_core` - The struct, construction, reads, contiguous snapshots
//! - `gap_buffer_ops` - Gap movement, growth, insert and delete
//! - `coordinate_mapper` - Offset to (row, col) mapping, line length, line indent
//!
//! # Line index
//!
//! Alongside the bytes, [`GapBuffer`] keeps a sorted list of the logical offsets of every
//! `\n`. Every insert and delete patches this list, so row lookups are a binary search
//! instead of a scan from the start of the buffer.
//!
//! # Growth
//!
//! When an insert finds the gap empty, storage grows to `old + old / 2` bytes (at least
//! one more byte). The prefix is copied to the front and the suffix to the back of the
//! new storage. Allocation is fallible, and a failure is reported as
//! [`crate::EditorError::OutOfMemory`] with the buffer unchanged.

// Attach sources.
pub mod coordinate_mapper;
pub mod gap_buffer_core;
pub mod gap_buffer_ops;

// Re-export.
pub use gap_buffer_core::*;

/// Capacity used when a caller asks for a capacity of 0.
pub const DEFAULT_CAPACITY: usize = 1024;

pub const LINE_FEED_BYTE: u8 = b'\n';
pub const SPACE_BYTE: u8 = b' ';
pub const TAB_BYTE: u8 = b'\t';
