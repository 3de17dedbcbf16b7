// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{DEBUG_COPY_PASTE, Document, EditorResult, SearchDirection, SelectMode};

/// Events that can be applied to a [`Document`]. Each one is a single user action that
/// happens at the caret.
///
/// A host maps its own key presses onto these (for example Ctrl+Z onto
/// [`EditorEvent::Undo`]), then feeds them to [`Document::apply_editor_event`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditorEvent {
    InsertChar(u8),
    InsertString(String),
    InsertNewLine,
    InsertTab,
    Delete,
    Backspace,
    Home,
    End,
    PageDown,
    PageUp,
    MoveCaret(CaretDirection),
    Select(SelectionAction),
    Copy,
    Paste,
    Cut,
    Undo,
    Redo,
    Find {
        query: String,
        direction: SearchDirection,
    },
    FindNext,
    FindPrevious,
    Save,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum_macros::Display)]
pub enum SelectionAction {
    OneCharLeft,
    OneCharRight,
    OneLineUp,
    OneLineDown,
    PageUp,
    PageDown,
    Home,
    End,
    All,
    Esc,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum_macros::Display, strum_macros::EnumIter)]
pub enum CaretDirection {
    Up,
    Down,
    Left,
    Right,
}

impl EditorEvent {
    fn delete_text_if_selected(doc: &mut Document) {
        if doc.selection.is_active() {
            doc.delete_range();
        }
    }

    /// Apply `event` to `doc` at its caret.
    ///
    /// # Errors
    ///
    /// Whatever the underlying action returns: [`crate::EditorError::OutOfMemory`] for
    /// edits, [`crate::EditorError::NotFound`] for searches, and
    /// [`crate::EditorError::NoFilename`] or [`crate::EditorError::SaveIo`] for saves.
    pub fn apply_editor_event(doc: &mut Document, event: EditorEvent) -> EditorResult<()> {
        DEBUG_COPY_PASTE.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "🥏🥏🥏 EditorEvent::apply_editor_event",
                event = ?event
            );
        });

        match event {
            EditorEvent::Undo => {
                doc.undo()?;
            }

            EditorEvent::Redo => {
                doc.redo()?;
            }

            EditorEvent::InsertChar(byte) => {
                Self::delete_text_if_selected(doc);
                doc.insert_char(doc.caret(), byte)?;
            }

            EditorEvent::InsertString(chunk) => {
                Self::delete_text_if_selected(doc);
                doc.insert_bytes(doc.caret(), chunk.as_bytes())?;
            }

            EditorEvent::InsertNewLine => {
                Self::delete_text_if_selected(doc);
                let caret = doc.caret();
                let width = doc.auto_indent_width(caret);
                doc.insert_newline(caret, width)?;
            }

            EditorEvent::InsertTab => {
                Self::delete_text_if_selected(doc);
                doc.insert_tab(doc.caret())?;
            }

            EditorEvent::Delete => {
                if doc.selection.is_active() {
                    doc.delete_range();
                } else {
                    doc.delete_forward(doc.caret())?;
                }
            }

            EditorEvent::Backspace => {
                if doc.selection.is_active() {
                    doc.delete_range();
                } else {
                    doc.delete_backward(doc.caret())?;
                }
            }

            EditorEvent::MoveCaret(direction) => {
                doc.move_caret(direction, SelectMode::Disabled);
            }

            EditorEvent::Home => {
                doc.home(SelectMode::Disabled);
            }

            EditorEvent::End => {
                doc.end(SelectMode::Disabled);
            }

            EditorEvent::PageDown => {
                doc.page_down(SelectMode::Disabled);
            }

            EditorEvent::PageUp => {
                doc.page_up(SelectMode::Disabled);
            }

            EditorEvent::Select(selection_action) => {
                Self::apply_selection_action(doc, selection_action);
            }

            EditorEvent::Copy => {
                doc.copy();
            }

            EditorEvent::Cut => {
                doc.cut();
            }

            EditorEvent::Paste => {
                doc.paste(doc.caret())?;
            }

            EditorEvent::Find { query, direction } => {
                doc.find(query, direction)?;
            }

            EditorEvent::FindNext => {
                doc.find_next()?;
            }

            EditorEvent::FindPrevious => {
                doc.find_previous()?;
            }

            EditorEvent::Save => {
                doc.save()?;
            }
        }

        Ok(())
    }

    fn apply_selection_action(doc: &mut Document, selection_action: SelectionAction) {
        let mode = SelectMode::Enabled;
        match selection_action {
            SelectionAction::OneCharLeft => {
                doc.move_caret(CaretDirection::Left, mode);
            }
            SelectionAction::OneCharRight => {
                doc.move_caret(CaretDirection::Right, mode);
            }
            SelectionAction::OneLineUp => {
                doc.move_caret(CaretDirection::Up, mode);
            }
            SelectionAction::OneLineDown => {
                doc.move_caret(CaretDirection::Down, mode);
            }
            SelectionAction::PageUp => {
                doc.page_up(mode);
            }
            SelectionAction::PageDown => {
                doc.page_down(mode);
            }
            SelectionAction::Home => {
                doc.home(mode);
            }
            SelectionAction::End => {
                doc.end(mode);
            }
            SelectionAction::All => {
                doc.select_all();
            }
            SelectionAction::Esc => {
                doc.selection_clear();
            }
        }
    }

    /// Apply each event in order. Stops at the first event that fails; the events
    /// before it stay applied.
    ///
    /// # Errors
    ///
    /// The error of the first event that failed.
    pub fn apply_editor_events(
        doc: &mut Document,
        editor_event_vec: Vec<EditorEvent>,
    ) -> EditorResult<()> {
        for editor_event in editor_event_vec {
            EditorEvent::apply_editor_event(doc, editor_event)?;
        }
        Ok(())
    }
}

impl Document {
    /// See [`EditorEvent::apply_editor_event`].
    ///
    /// # Errors
    ///
    /// See [`EditorEvent::apply_editor_event`].
    pub fn apply_editor_event(&mut self, event: EditorEvent) -> EditorResult<()> {
        EditorEvent::apply_editor_event(self, event)
    }

    /// See [`EditorEvent::apply_editor_events`].
    ///
    /// # Errors
    ///
    /// See [`EditorEvent::apply_editor_events`].
    pub fn apply_editor_events(&mut self, events: Vec<EditorEvent>) -> EditorResult<()> {
        EditorEvent::apply_editor_events(self, events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EditorConfig, EditorError, assert_eq2, col, pos, row};

    fn type_str(doc: &mut Document, text: &str) {
        let events = text
            .bytes()
            .map(|byte| match byte {
                b'\n' => EditorEvent::InsertNewLine,
                _ => EditorEvent::InsertChar(byte),
            })
            .collect();
        doc.apply_editor_events(events).unwrap();
    }

    #[test]
    fn test_typing_with_auto_indent() {
        let mut doc = Document::new_empty(0);
        type_str(&mut doc, "fn main() {\n  let a = 1;\nb");
        assert_eq2!(
            String::from_utf8(doc.to_contiguous()).unwrap(),
            "fn main() {\n  let a = 1;\n  b"
        );
        assert_eq2!(doc.caret(), pos(row(2) + col(3)));
    }

    #[test]
    fn test_no_auto_indent_when_disabled() {
        let mut doc = Document::with_config(EditorConfig {
            auto_indent: false,
            ..EditorConfig::default()
        });
        type_str(&mut doc, "  a\nb");
        assert_eq2!(doc.to_contiguous(), b"  a\nb".to_vec());
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut doc = Document::open(b"ab\ncd", None).unwrap();
        doc.set_caret(row(1) + col(0));
        doc.apply_editor_event(EditorEvent::Backspace).unwrap();
        assert_eq2!(doc.to_contiguous(), b"abcd".to_vec());
        assert_eq2!(doc.caret(), pos(row(0) + col(2)));

        doc.apply_editor_event(EditorEvent::Delete).unwrap();
        assert_eq2!(doc.to_contiguous(), b"abd".to_vec());
        assert_eq2!(doc.caret(), pos(row(0) + col(2)));

        doc.apply_editor_events(vec![EditorEvent::Undo, EditorEvent::Undo])
            .unwrap();
        assert_eq2!(doc.to_contiguous(), b"ab\ncd".to_vec());
    }

    #[test]
    fn test_select_then_type_replaces_selection() {
        let mut doc = Document::open(b"hello world", None).unwrap();
        doc.apply_editor_events(vec![
            EditorEvent::End,
            EditorEvent::Select(SelectionAction::OneCharLeft),
            EditorEvent::Select(SelectionAction::OneCharLeft),
            EditorEvent::Select(SelectionAction::OneCharLeft),
            EditorEvent::Select(SelectionAction::OneCharLeft),
            EditorEvent::Select(SelectionAction::OneCharLeft),
            EditorEvent::InsertString("there".to_string()),
        ])
        .unwrap();
        assert_eq2!(doc.to_contiguous(), b"hello there".to_vec());
        assert!(!doc.selection().is_active());
    }

    #[test]
    fn test_select_all_cut_paste() {
        let mut doc = Document::open(b"one\ntwo", None).unwrap();
        doc.apply_editor_events(vec![
            EditorEvent::Select(SelectionAction::All),
            EditorEvent::Cut,
        ])
        .unwrap();
        assert!(doc.is_empty());
        assert_eq2!(doc.clipboard_len(), 7);

        doc.apply_editor_events(vec![EditorEvent::Paste, EditorEvent::Paste])
            .unwrap();
        assert_eq2!(doc.to_contiguous(), b"one\ntwoone\ntwo".to_vec());
    }

    #[test]
    fn test_copy_and_esc() {
        let mut doc = Document::open(b"abc", None).unwrap();
        doc.apply_editor_events(vec![
            EditorEvent::Select(SelectionAction::End),
            EditorEvent::Copy,
        ])
        .unwrap();
        assert_eq2!(doc.clipboard().as_bytes(), b"abc");

        doc.apply_editor_events(vec![
            EditorEvent::Home,
            EditorEvent::Select(SelectionAction::OneCharRight),
            EditorEvent::Select(SelectionAction::Esc),
        ])
        .unwrap();
        assert!(!doc.selection().is_active());
    }

    #[test]
    fn test_find_events() {
        let mut doc = Document::open(b"x y x y", None).unwrap();
        doc.apply_editor_event(EditorEvent::Find {
            query: "y".to_string(),
            direction: SearchDirection::Forward,
        })
        .unwrap();
        assert_eq2!(doc.caret(), pos(row(0) + col(2)));
        doc.apply_editor_event(EditorEvent::FindNext).unwrap();
        assert_eq2!(doc.caret(), pos(row(0) + col(6)));
        doc.apply_editor_event(EditorEvent::FindPrevious).unwrap();
        assert_eq2!(doc.caret(), pos(row(0) + col(6)));
    }

    #[test]
    fn test_apply_editor_events_stops_at_first_error() {
        let mut doc = Document::new_empty(0);
        let result = doc.apply_editor_events(vec![
            EditorEvent::InsertChar(b'a'),
            EditorEvent::Save,
            EditorEvent::InsertChar(b'b'),
        ]);
        assert!(matches!(result, Err(EditorError::NoFilename)));
        assert_eq2!(doc.to_contiguous(), b"a".to_vec());
    }

    #[test]
    fn test_tab_and_caret_moves() {
        let mut doc = Document::open(b"ab\ncd", None).unwrap();
        doc.apply_editor_events(vec![
            EditorEvent::MoveCaret(CaretDirection::Down),
            EditorEvent::MoveCaret(CaretDirection::Right),
            EditorEvent::InsertTab,
        ])
        .unwrap();
        assert_eq2!(doc.to_contiguous(), b"ab\nc    d".to_vec());
        assert_eq2!(doc.caret(), pos(row(1) + col(5)));
    }
}
