// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_gap_editor
//!
//! The editing core of a terminal text editor. Everything that is not algorithmic
//! (raw mode, ANSI rendering, key decoding, syntax colors, status bar) lives in the host
//! application, which drives this crate through a [`Document`].
//!
//! ```text
//! host (view / controller)
//!   │  Pos(row, col) + intent
//!   ▼
//! Document ──► GapBuffer  ◄── coordinate mapper (pos_to_row_col, row_col_to_pos, ..)
//!    │            ▲
//!    ├──► EditHistory (undo / redo stacks of EditRecord)
//!    ├──► Selection (anchor + cursor)
//!    └──► Clipboard (single detached slot)
//! ```
//!
//! # Parts
//!
//! - [`GapBuffer`]: one byte array with a movable gap. Inserts and deletes near the
//!   previous edit point are cheap. It also keeps a sorted index of newline offsets that
//!   is patched on every mutation, so row lookups are `O(log rows)`.
//! - Coordinate mapping: [`GapBuffer::pos_to_row_col`],
//!   [`GapBuffer::row_col_to_pos`], [`GapBuffer::line_length`],
//!   [`GapBuffer::line_indent`], [`GapBuffer::row_count`].
//! - [`EditHistory`]: linear undo / redo, one [`EditRecord`] per byte.
//! - [`Selection`] and [`Clipboard`].
//! - [`Document`]: the facade. Each public method is one user action.
//! - [`EditorEvent`]: typed intents that a host can map its key presses onto.
//!
//! # Example
//!
//! ```
//! use r3bl_gap_editor::{Document, col, pos, row};
//!
//! let mut doc = Document::new_empty(0);
//! let mut caret = pos(row(0) + col(0));
//! for byte in b"ab\ncd" {
//!     caret = doc.insert_char(caret, *byte).unwrap();
//! }
//! assert_eq!(doc.to_contiguous(), b"ab\ncd");
//! assert_eq!(doc.row_count(), 2);
//!
//! while doc.undo().unwrap().is_some() {}
//! assert!(doc.is_empty());
//! ```

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod core;
pub mod editor;

// Re-export.
pub use self::core::*;
pub use editor::*;

/// Enable or disable debug logging for gap movement and growth.
pub const DEBUG_GAP_BUFFER: bool = false;

/// Enable or disable debug logging for pushes, undos and redos.
pub const DEBUG_EDIT_HISTORY: bool = false;

/// Enable or disable debug logging for copy, cut, paste and selection deletes.
pub const DEBUG_COPY_PASTE: bool = true;
