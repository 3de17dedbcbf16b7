// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Wrap around substring search over the content of a [`Document`].
//!
//! The search runs over a contiguous snapshot of the buffer. Candidate start offsets
//! are visited cyclically, one step at a time, for as many steps as there are bytes, so
//! every offset is tried exactly once. A match must fit entirely before the end of the
//! buffer; it never spans the wrap point.

use crate::{ByteIndex, Document, EditorError, EditorResult, Pos, byte_index};

/// The last query and where it matched, so that "find next" and "find previous" can
/// continue from there.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchState {
    pub query: Option<String>,
    pub last_match: Option<ByteIndex>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum_macros::Display)]
pub enum SearchDirection {
    Forward,
    Backward,
}

/// Find `needle` in `haystack`, visiting candidate offsets cyclically from `start`.
///
/// - [`SearchDirection::Forward`] tries `start`, `start + 1`, .. wrapping to 0.
/// - [`SearchDirection::Backward`] tries `start`, `start - 1`, .. wrapping to the end.
///
/// Returns [`None`] for an empty needle or haystack, or when nothing matches.
#[must_use]
pub fn find_in(
    haystack: &[u8],
    needle: &[u8],
    start: usize,
    direction: SearchDirection,
) -> Option<usize> {
    let len = haystack.len();
    if needle.is_empty() || len == 0 {
        return None;
    }
    let start = start % len;

    (0..len)
        .map(|step| match direction {
            SearchDirection::Forward => (start + step) % len,
            SearchDirection::Backward => (start + len - step) % len,
        })
        .find(|&candidate| {
            haystack
                .get(candidate..candidate + needle.len())
                .is_some_and(|window| window == needle)
        })
}

impl Document {
    /// Search for `query` starting from the caret, wrapping around the buffer. On a match
    /// the caret moves to the start of the match, which is returned.
    ///
    /// Forward search starts one byte past the caret, so repeated searches step through
    /// successive matches. Backward search starts at the caret itself.
    ///
    /// An empty query does nothing and returns `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::NotFound`] if nothing matches. The caret stays put and the
    /// status message says so.
    pub fn find(
        &mut self,
        query: impl Into<String>,
        direction: SearchDirection,
    ) -> EditorResult<Option<Pos>> {
        let query: String = query.into();
        if query.is_empty() {
            return Ok(None);
        }

        let caret_offset = *self.buffer.row_col_to_pos(self.caret);
        let start = match direction {
            SearchDirection::Forward => caret_offset + 1,
            SearchDirection::Backward => caret_offset,
        };

        let haystack = self.buffer.to_contiguous();
        let maybe_match = find_in(&haystack, query.as_bytes(), start, direction);
        self.search.query = Some(query.clone());

        match maybe_match {
            Some(offset) => {
                let offset = byte_index(offset);
                self.search.last_match = Some(offset);
                self.caret = self.buffer.pos_to_row_col(offset);
                self.selection.clear();
                Ok(Some(self.caret))
            }
            None => {
                self.search.last_match = None;
                self.set_status_message(format!("Not found: {query}"));
                Err(EditorError::NotFound { query })
            }
        }
    }

    /// Repeat the last query forward. `Ok(None)` if there was no previous query.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::NotFound`] if the last query no longer matches.
    pub fn find_next(&mut self) -> EditorResult<Option<Pos>> {
        self.find_again(SearchDirection::Forward)
    }

    /// Repeat the last query backward. `Ok(None)` if there was no previous query.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::NotFound`] if the last query no longer matches.
    pub fn find_previous(&mut self) -> EditorResult<Option<Pos>> {
        self.find_again(SearchDirection::Backward)
    }

    #[must_use]
    pub fn search_state(&self) -> &SearchState { &self.search }

    fn find_again(&mut self, direction: SearchDirection) -> EditorResult<Option<Pos>> {
        match self.search.query.clone() {
            Some(query) => self.find(query, direction),
            None => Ok(None),
        }
    }
}
