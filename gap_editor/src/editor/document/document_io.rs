// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Open a [`Document`] from a file and save it back. The file on disk is always the
//! exact contiguous byte sequence of the buffer; there is no encoding or line ending
//! translation.

use crate::{Document, EditorConfig, EditorError, EditorResult};
use std::{fs::OpenOptions,
          io::{ErrorKind, Write},
          path::{Path, PathBuf}};

impl Document {
    /// Read `path` into a new document bound to that path. A file that doesn't exist
    /// yet gives an empty document, which creates the file on the first save.
    ///
    /// # Errors
    ///
    /// - [`EditorError::OpenIo`] if the file exists but can't be read.
    /// - [`EditorError::OutOfMemory`] if the storage can't be allocated.
    pub fn open_file(path: impl AsRef<Path>) -> EditorResult<Self> {
        Self::open_file_with_config(path, EditorConfig::default())
    }

    /// Same as [`Document::open_file`] with an explicit config.
    ///
    /// # Errors
    ///
    /// See [`Document::open_file`].
    pub fn open_file_with_config(
        path: impl AsRef<Path>,
        config: EditorConfig,
    ) -> EditorResult<Self> {
        let path: PathBuf = path.as_ref().to_path_buf();
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == ErrorKind::NotFound => Vec::new(),
            Err(source) => return Err(EditorError::OpenIo { path, source }),
        };

        tracing::debug!(
            message = "open_file",
            path = %path.display(),
            len = %bytes.len()
        );

        Self::open_with_config(&bytes, Some(path), config)
    }

    /// Write the content to the bound path, truncating whatever was there. Returns the
    /// number of bytes written, and the document is clean afterwards.
    ///
    /// # Errors
    ///
    /// - [`EditorError::NoFilename`] if no path is bound. Status is "No filename!".
    /// - [`EditorError::SaveIo`] if the file can't be opened, truncated or written.
    ///   Status is "Save failed!".
    ///
    /// The document stays dirty in both cases.
    pub fn save(&mut self) -> EditorResult<usize> {
        let Some(path) = self.filename.clone() else {
            self.set_status_message("No filename!");
            return Err(EditorError::NoFilename);
        };

        let bytes = self.buffer.to_contiguous();
        match write_exact(&path, &bytes) {
            Ok(()) => {
                self.dirty = false;
                self.set_status_message(format!("Saved! {} bytes", bytes.len()));
                tracing::debug!(
                    message = "save",
                    path = %path.display(),
                    len = %bytes.len()
                );
                Ok(bytes.len())
            }
            Err(source) => {
                self.set_status_message("Save failed!");
                tracing::error!(
                    message = "save failed",
                    path = %path.display(),
                    error = %source
                );
                Err(EditorError::SaveIo { path, source })
            }
        }
    }

    /// Bind the document to `path`, then [`Document::save`].
    ///
    /// # Errors
    ///
    /// See [`Document::save`].
    pub fn save_as(&mut self, path: impl Into<PathBuf>) -> EditorResult<usize> {
        self.set_filename(path);
        self.save()
    }
}

fn write_exact(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)?;
    file.set_len(bytes.len() as u64)?;
    file.write_all(bytes)?;
    file.flush()
}
