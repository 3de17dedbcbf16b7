// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod edit_history;
pub mod edit_record;

// Re-export.
pub use edit_history::*;
pub use edit_record::*;
