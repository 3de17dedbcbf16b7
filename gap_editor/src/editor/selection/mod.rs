// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod selection_struct;

// Re-export.
pub use selection_struct::*;
