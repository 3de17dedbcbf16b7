// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod clipboard;
pub mod document;
pub mod editor_config;
pub mod editor_event;
pub mod gap_buffer;
pub mod history;
pub mod selection;

// Re-export.
pub use clipboard::*;
pub use document::*;
pub use editor_config::*;
pub use editor_event::*;
pub use gap_buffer::*;
pub use history::*;
pub use selection::*;
