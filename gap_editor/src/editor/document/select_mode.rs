// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Document, Pos};

/// Whether a caret movement extends the selection (shift held) or clears it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum SelectMode {
    Enabled,
    Disabled,
}

impl SelectMode {
    /// Called before the caret moves. Starts a selection at the old caret if none is
    /// active yet.
    pub fn before_caret_move(self, doc: &mut Document) {
        if self == SelectMode::Enabled && !doc.selection.is_active() {
            doc.selection.start(doc.caret);
        }
    }

    /// Called after the caret moved to `new_caret`. Extends the selection to it, or
    /// clears the selection when not selecting.
    pub fn after_caret_move(self, doc: &mut Document, new_caret: Pos) {
        match self {
            SelectMode::Enabled => doc.selection.update(new_caret),
            SelectMode::Disabled => doc.selection.clear(),
        }
    }
}
