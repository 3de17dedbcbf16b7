// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Error taxonomy for the editing core. See [`EditorError`] for details.
//!
//! Nothing in here is fatal. Every variant leaves the [`crate::Document`] in a usable
//! state, and the host decides what to show to the user. Empty undo / redo stacks are
//! not errors at all; those operations return `Ok(None)`.

use std::path::PathBuf;

/// Type alias to make it easy to work with [`EditorError`]. Since [`EditorError`]
/// implements [`miette::Diagnostic`], application code can lift it into a
/// [`miette::Result`] with `?`.
pub type EditorResult<T> = Result<T, EditorError>;

/// Errors surfaced by the editing core.
///
/// | Variant           | Cause                                           | Document state          |
/// | :---------------- | :---------------------------------------------- | :---------------------- |
/// | [`OutOfMemory`]   | Gap buffer storage could not grow               | Unchanged               |
/// | [`NoFilename`]    | Save requested, but no path is bound            | Unchanged, still dirty  |
/// | [`SaveIo`]        | Open / truncate / write failed during save      | Unchanged, still dirty  |
/// | [`OpenIo`]        | Existing file could not be read                 | No document is created  |
/// | [`NotFound`]      | Search query has no match                       | Caret unchanged         |
/// | [`InvalidConfig`] | Config JSON could not be parsed                 | No config is created    |
///
/// [`OutOfMemory`]: Self::OutOfMemory
/// [`NoFilename`]: Self::NoFilename
/// [`SaveIo`]: Self::SaveIo
/// [`OpenIo`]: Self::OpenIo
/// [`NotFound`]: Self::NotFound
/// [`InvalidConfig`]: Self::InvalidConfig
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum EditorError {
    /// Allocation failed while growing the gap buffer.
    #[error("Could not grow the text buffer to {requested} bytes")]
    #[diagnostic(
        code(r3bl_gap_editor::gap_buffer::out_of_memory),
        help("The edit was not applied. Free some memory and try again.")
    )]
    OutOfMemory { requested: usize },

    /// Save was requested for a document that has no associated path.
    #[error("No filename")]
    #[diagnostic(
        code(r3bl_gap_editor::io::no_filename),
        help("Use save_as() to bind a path to this document first.")
    )]
    NoFilename,

    /// Open, truncate or write failed while saving.
    #[error("Save failed for '{path}'", path = path.display())]
    #[diagnostic(code(r3bl_gap_editor::io::save))]
    SaveIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading an existing file failed while opening.
    #[error("Could not open '{path}'", path = path.display())]
    #[diagnostic(code(r3bl_gap_editor::io::open))]
    OpenIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Search ran over the whole buffer without a match.
    #[error("Not found: {query}")]
    #[diagnostic(code(r3bl_gap_editor::search::not_found))]
    NotFound { query: String },

    /// Config JSON is malformed or has the wrong shape.
    #[error("Invalid editor config")]
    #[diagnostic(
        code(r3bl_gap_editor::config::invalid),
        help("Check the JSON against the fields of EditorConfig.")
    )]
    InvalidConfig {
        #[source]
        source: serde_json::Error,
    },
}
