// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod clipboard_slot;

// Re-export.
pub use clipboard_slot::*;
