// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Fixtures shared by the unit tests and the `tests/` integration tests of
//! `r3bl_gap_editor`.

// Attach sources.
pub mod temp_dir;

// Re-export.
pub use temp_dir::*;
