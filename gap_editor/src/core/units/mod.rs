// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod byte_index;
pub mod col_index;
pub mod index_impl_macros;
pub mod pos;
pub mod row_index;

// Re-export.
pub use byte_index::*;
pub use col_index::*;
pub use pos::*;
pub use row_index::*;
