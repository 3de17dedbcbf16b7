// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`Document`] is the one type a host talks to. Each public method is one user action,
//! and it sequences the gap buffer mutation, the coordinate lookups and the history
//! recording for that action.
//!
//! - `document_struct` - The struct, constructors, accessors, read-only passthroughs
//! - `document_public_api` - Editing and caret movement actions
//! - `content_mut` - Free functions that mutate content and record history
//! - `caret_mut` - Free functions that move the caret and extend the selection
//! - `select_mode` - Whether a caret move extends the selection or clears it
//! - `document_selection_support` - Selection passthroughs and select all
//! - `document_clipboard_support` - Copy, cut, paste, delete range
//! - `document_search` - Wrap around substring search
//! - `document_io` - Open from and save to a file

// Attach sources.
pub mod caret_mut;
pub mod content_mut;
pub mod document_clipboard_support;
pub mod document_io;
pub mod document_public_api;
pub mod document_search;
pub mod document_selection_support;
pub mod document_struct;
pub mod select_mode;

// Re-export.
pub use document_search::*;
pub use document_struct::*;
pub use select_mode::*;
