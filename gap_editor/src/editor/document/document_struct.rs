// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::SearchState;
use crate::{ByteIndex, Clipboard, ColIndex, EditHistory, EditorConfig, EditorResult,
            GapBuffer, Pos, RowIndex, Selection};
use std::{fmt::{Debug, Formatter, Result},
          path::{Path, PathBuf}};

/// A single open document: the text, its history, the caret, the selection and the
/// clipboard. There is no global editor state; the host owns a `Document` and passes it
/// around by `&mut`.
///
/// The [`GapBuffer`] is the single source of truth for content. Everything else (caret,
/// selection, search match) is expressed as positions that are resolved against the
/// buffer whenever they are used.
#[derive(Clone, PartialEq)]
pub struct Document {
    pub(crate) buffer: GapBuffer,
    pub(crate) history: EditHistory,
    pub(crate) selection: Selection,
    pub(crate) clipboard: Clipboard,
    pub(crate) caret: Pos,
    pub(crate) filename: Option<PathBuf>,
    pub(crate) dirty: bool,
    pub(crate) config: EditorConfig,
    pub(crate) search: SearchState,
    pub(crate) status_message: String,
}

impl Default for Document {
    fn default() -> Self { Self::with_config(EditorConfig::default()) }
}

mod construct {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl Document {
        /// Empty document with a gap buffer of `capacity_hint` bytes (0 uses the
        /// default) and the default [`EditorConfig`].
        #[must_use]
        pub fn new_empty(capacity_hint: usize) -> Self {
            Self::with_config(EditorConfig {
                initial_capacity: capacity_hint,
                ..EditorConfig::default()
            })
        }

        /// Empty document sized by [`EditorConfig::initial_capacity`].
        #[must_use]
        pub fn with_config(config: EditorConfig) -> Self {
            Self::from_parts(GapBuffer::new(config.initial_capacity), None, config)
        }

        /// Document holding `initial_bytes`, bound to `filename` for saving. The caret
        /// starts at the top, and the document starts clean with an empty history.
        ///
        /// # Errors
        ///
        /// Returns [`crate::EditorError::OutOfMemory`] if the storage can't be
        /// allocated.
        pub fn open(
            initial_bytes: &[u8],
            filename: Option<PathBuf>,
        ) -> EditorResult<Self> {
            Self::open_with_config(initial_bytes, filename, EditorConfig::default())
        }

        /// Same as [`Document::open`] with an explicit config.
        ///
        /// # Errors
        ///
        /// Returns [`crate::EditorError::OutOfMemory`] if the storage can't be
        /// allocated.
        pub fn open_with_config(
            initial_bytes: &[u8],
            filename: Option<PathBuf>,
            config: EditorConfig,
        ) -> EditorResult<Self> {
            let buffer = GapBuffer::from_bytes(initial_bytes, config.initial_capacity)?;
            Ok(Self::from_parts(buffer, filename, config))
        }

        fn from_parts(
            buffer: GapBuffer,
            filename: Option<PathBuf>,
            config: EditorConfig,
        ) -> Self {
            Self {
                buffer,
                history: EditHistory::new(),
                selection: Selection::default(),
                clipboard: Clipboard::default(),
                caret: Pos::default(),
                filename,
                dirty: false,
                config,
                search: SearchState::default(),
                status_message: String::new(),
            }
        }
    }
}

mod accessors {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl Document {
        #[must_use]
        pub fn buffer(&self) -> &GapBuffer { &self.buffer }

        #[must_use]
        pub fn history(&self) -> &EditHistory { &self.history }

        #[must_use]
        pub fn selection(&self) -> &Selection { &self.selection }

        #[must_use]
        pub fn clipboard(&self) -> &Clipboard { &self.clipboard }

        /// Mutable access to the clipboard slot, so a host can fill it from another
        /// document or from the system clipboard before calling [`Document::paste`].
        pub fn clipboard_mut(&mut self) -> &mut Clipboard { &mut self.clipboard }

        /// Replace the clipboard slot and return the previous one.
        pub fn set_clipboard(&mut self, clipboard: Clipboard) -> Clipboard {
            std::mem::replace(&mut self.clipboard, clipboard)
        }

        #[must_use]
        pub fn config(&self) -> &EditorConfig { &self.config }

        #[must_use]
        pub fn caret(&self) -> Pos { self.caret }

        /// Move the caret to `pos`, clamped onto the content.
        pub fn set_caret(&mut self, arg_pos: impl Into<Pos>) -> Pos {
            self.caret = self.clamp(arg_pos);
            self.caret
        }

        /// Snap `pos` onto the content: the row is limited to the last row and the col
        /// to that row's length.
        #[must_use]
        pub fn clamp(&self, arg_pos: impl Into<Pos>) -> Pos {
            let offset = self.buffer.row_col_to_pos(arg_pos);
            self.buffer.pos_to_row_col(offset)
        }

        #[must_use]
        pub fn filename(&self) -> Option<&Path> { self.filename.as_deref() }

        pub fn set_filename(&mut self, filename: impl Into<PathBuf>) {
            self.filename = Some(filename.into());
        }

        /// True when there are edits that haven't been saved.
        #[must_use]
        pub fn is_dirty(&self) -> bool { self.dirty }

        /// Short human readable outcome of the last action, for a status bar.
        #[must_use]
        pub fn status_message(&self) -> &str { &self.status_message }

        pub fn clear_status_message(&mut self) { self.status_message.clear(); }

        pub(crate) fn set_status_message(&mut self, message: impl Into<String>) {
            self.status_message = message.into();
        }
    }
}

mod read_only_passthroughs {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl Document {
        #[must_use]
        pub fn len(&self) -> usize { self.buffer.len() }

        #[must_use]
        pub fn is_empty(&self) -> bool { self.buffer.is_empty() }

        #[must_use]
        pub fn row_count(&self) -> usize { self.buffer.row_count() }

        #[must_use]
        pub fn line_length(&self, arg_row: impl Into<RowIndex>) -> ColIndex {
            self.buffer.line_length(arg_row)
        }

        /// Indent of `row`, with tabs weighted by [`EditorConfig::tab_width`].
        #[must_use]
        pub fn line_indent(&self, arg_row: impl Into<RowIndex>) -> usize {
            self.buffer.line_indent(arg_row, self.config.tab_width)
        }

        #[must_use]
        pub fn pos_to_row_col(&self, arg_offset: impl Into<ByteIndex>) -> Pos {
            self.buffer.pos_to_row_col(arg_offset)
        }

        #[must_use]
        pub fn row_col_to_pos(&self, arg_pos: impl Into<Pos>) -> ByteIndex {
            self.buffer.row_col_to_pos(arg_pos)
        }

        /// Copy of the whole content, for rendering and saving.
        #[must_use]
        pub fn to_contiguous(&self) -> Vec<u8> { self.buffer.to_contiguous() }
    }
}

mod impl_debug {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl Debug for Document {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            f.debug_struct("Document")
                .field("filename", &self.filename)
                .field("dirty", &self.dirty)
                .field("caret", &self.caret)
                .field("selection", &self.selection)
                .field("undo_depth", &self.history.undo_depth())
                .field("redo_depth", &self.history.redo_depth())
                .field("buffer", &self.buffer)
                .finish_non_exhaustive()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DEFAULT_CAPACITY, assert_eq2, col, pos, row};

    #[test]
    fn test_new_empty() {
        let doc = Document::new_empty(0);
        assert!(doc.is_empty());
        assert!(!doc.is_dirty());
        assert_eq2!(doc.row_count(), 1);
        assert_eq2!(doc.buffer().capacity(), DEFAULT_CAPACITY);
        assert_eq2!(doc.caret(), pos(row(0) + col(0)));
        assert_eq2!(doc.filename(), None);
    }

    #[test]
    fn test_open() {
        let doc = Document::open(b"one\ntwo", Some(PathBuf::from("a.txt"))).unwrap();
        assert_eq2!(doc.to_contiguous(), b"one\ntwo".to_vec());
        assert_eq2!(doc.row_count(), 2);
        assert_eq2!(doc.line_length(1), col(3));
        assert_eq2!(doc.filename(), Some(Path::new("a.txt")));
        assert!(!doc.is_dirty());
        assert!(!doc.history().can_undo());
    }

    #[test]
    fn test_set_caret_clamps() {
        let mut doc = Document::open(b"ab\ncdef", None).unwrap();
        assert_eq2!(doc.set_caret(row(0) + col(9)), pos(row(0) + col(2)));
        assert_eq2!(doc.set_caret(row(9) + col(0)), pos(row(1) + col(4)));
        assert_eq2!(doc.caret(), pos(row(1) + col(4)));
    }

    #[test]
    fn test_line_indent_uses_config_tab_width() {
        let config = EditorConfig {
            tab_width: 8,
            ..EditorConfig::default()
        };
        let doc = Document::open_with_config(b"\t x", None, config).unwrap();
        assert_eq2!(doc.line_indent(0), 9);
    }
}
