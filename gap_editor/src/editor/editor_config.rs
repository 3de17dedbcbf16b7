// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{DEFAULT_CAPACITY, EditorError, EditorResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// User tunable settings for a [`crate::Document`]. Missing fields in JSON fall back to
/// their [`Default`] values, so a partial config file is fine.
///
/// ```
/// use r3bl_gap_editor::EditorConfig;
///
/// let config = EditorConfig::try_from_json_str(r#"{ "tab_width": 2 }"#).unwrap();
/// assert_eq!(config.tab_width, 2);
/// assert!(config.auto_indent);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Number of spaces inserted for a tab, and the width of a tab in
    /// [`crate::GapBuffer::line_indent`].
    pub tab_width: usize,
    /// Copy the leading whitespace of the current row onto a new row.
    pub auto_indent: bool,
    /// Gap buffer capacity for a new document. 0 means the built in default.
    pub initial_capacity: usize,
    /// Rows moved by page up and page down.
    pub page_rows: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_width: 4,
            auto_indent: true,
            initial_capacity: DEFAULT_CAPACITY,
            page_rows: 20,
        }
    }
}

impl EditorConfig {
    /// # Errors
    ///
    /// Returns [`EditorError::InvalidConfig`] if `json` isn't a valid config object.
    pub fn try_from_json_str(json: &str) -> EditorResult<Self> {
        serde_json::from_str(json).map_err(|source| EditorError::InvalidConfig { source })
    }

    /// # Errors
    ///
    /// Returns [`EditorError::OpenIo`] if the file can't be read, and
    /// [`EditorError::InvalidConfig`] if its content isn't a valid config object.
    pub fn try_from_json_file(path: impl AsRef<Path>) -> EditorResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| EditorError::OpenIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::try_from_json_str(&json)
    }

    /// # Errors
    ///
    /// Returns [`EditorError::InvalidConfig`] if serialization fails.
    pub fn try_to_json_string(&self) -> EditorResult<String> {
        serde_json::to_string_pretty(self).map_err(|source| EditorError::InvalidConfig { source })
    }
}
