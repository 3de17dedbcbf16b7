// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use pretty_assertions::assert_eq;
use r3bl_gap_editor::{ByteIndex, Clipboard, Document, EditorConfig, EditorError,
                      EditorEvent, SearchDirection, byte_index, col, pos, row};
use r3bl_test_fixtures::try_create_temp_dir;
use rand::{Rng, SeedableRng, rngs::StdRng};

fn offset_of(doc: &Document) -> ByteIndex { doc.row_col_to_pos(doc.caret()) }

#[test]
fn test_type_then_undo_everything() {
    let mut doc = Document::new_empty(0);
    for (offset, byte) in b"ab\ncd".iter().enumerate() {
        let caret = doc.pos_to_row_col(offset);
        doc.insert_char(caret, *byte).unwrap();
    }

    assert_eq!(doc.to_contiguous(), b"ab\ncd".to_vec());
    assert_eq!(doc.row_count(), 2);
    assert_eq!(doc.line_length(row(0)), col(2));
    assert_eq!(doc.line_length(row(1)), col(2));

    for _ in 0..5 {
        assert!(doc.undo().unwrap().is_some());
    }
    assert_eq!(doc.len(), 0);
    assert_eq!(doc.undo().unwrap(), None);
}

#[test]
fn test_copy_into_fresh_document() {
    let mut source = Document::open(b"ab\ncd", None).unwrap();
    source.selection_start(row(0) + col(0));
    source.selection_update(row(1) + col(1));
    assert_eq!(source.copy(), 4);

    let mut target = Document::new_empty(0);
    target.set_clipboard(source.clipboard().clone());
    let caret = target.paste(row(0) + col(0)).unwrap();
    assert_eq!(target.to_contiguous(), b"ab\nc".to_vec());
    assert_eq!(target.history().undo_depth(), 4);
    assert_eq!(caret, pos(row(1) + col(1)));

    // The source slot is untouched by the paste.
    assert_eq!(source.clipboard().as_bytes(), b"ab\nc");
}

#[test]
fn test_host_fills_clipboard_then_pastes() {
    let mut doc = Document::open(b"xy", None).unwrap();
    doc.clipboard_mut().put(b"12".to_vec());
    doc.paste(row(0) + col(1)).unwrap();
    assert_eq!(doc.to_contiguous(), b"x12y".to_vec());

    let previous = doc.set_clipboard(Clipboard::default());
    assert_eq!(previous.as_bytes(), b"12");
    assert_eq!(doc.paste(row(0) + col(0)).unwrap(), pos(row(0) + col(0)));
    assert_eq!(doc.to_contiguous(), b"x12y".to_vec());
}

#[test]
fn test_new_edit_after_undo_drops_redo() {
    let mut doc = Document::new_empty(0);
    doc.insert_char(row(0) + col(0), b'a').unwrap();
    doc.insert_char(row(0) + col(1), b'b').unwrap();
    doc.undo().unwrap();
    assert!(doc.history().can_redo());

    doc.insert_char(row(0) + col(1), b'c').unwrap();
    assert_eq!(doc.redo().unwrap(), None);
    assert_eq!(doc.to_contiguous(), b"ac".to_vec());
}

/// Random single byte edits checked against a `Vec<u8>` model. After every edit, one
/// undo followed by one redo must restore both the content and the caret.
#[test]
fn test_random_edits_match_model_and_undo_redo_is_dual() {
    let mut rng = StdRng::seed_from_u64(0x6a70);
    let mut doc = Document::new_empty(1);
    let mut model: Vec<u8> = Vec::new();
    let alphabet = b"ab \n\t";

    for _ in 0..500 {
        let offset = rng.random_range(0..=model.len());
        let caret = doc.pos_to_row_col(offset);
        let depth_before = doc.history().undo_depth();

        match rng.random_range(0..3) {
            0 => {
                let byte = alphabet[rng.random_range(0..alphabet.len())];
                doc.insert_char(caret, byte).unwrap();
                model.insert(offset, byte);
            }
            1 => {
                doc.delete_backward(caret).unwrap();
                if offset > 0 {
                    model.remove(offset - 1);
                }
            }
            _ => {
                doc.delete_forward(caret).unwrap();
                if offset < model.len() {
                    model.remove(offset);
                }
            }
        }

        assert_eq!(doc.len(), model.len());
        assert_eq!(doc.to_contiguous(), model);

        if doc.history().undo_depth() > depth_before {
            let content = doc.to_contiguous();
            let caret = doc.caret();
            doc.undo().unwrap();
            doc.redo().unwrap();
            assert_eq!(doc.to_contiguous(), content);
            assert_eq!(doc.caret(), caret);
        }
    }

    while doc.undo().unwrap().is_some() {}
    assert!(doc.is_empty());
    assert_eq!(doc.row_count(), 1);
}

#[test]
fn test_pos_round_trip_for_every_offset() {
    let doc = Document::open(b"first\n\n  third line\nx", None).unwrap();
    for offset in 0..=doc.len() {
        let offset = byte_index(offset);
        assert_eq!(doc.row_col_to_pos(doc.pos_to_row_col(offset)), offset);
    }
    assert_eq!(doc.pos_to_row_col(7), pos(row(2) + col(0)));
    assert_eq!(doc.line_indent(row(2)), 2);
}

#[test]
fn test_out_of_range_inputs_are_clamped() {
    let mut doc = Document::open(b"ab\ncd", None).unwrap();
    assert_eq!(doc.row_col_to_pos(row(0) + col(99)), byte_index(2));
    assert_eq!(doc.row_col_to_pos(row(9) + col(0)), byte_index(5));
    assert_eq!(doc.line_length(row(9)), col(0));

    let caret = doc.insert_char(row(0) + col(99), b'!').unwrap();
    assert_eq!(doc.to_contiguous(), b"ab!\ncd".to_vec());
    assert_eq!(caret, pos(row(0) + col(3)));
}

#[test]
fn test_search_wraps_around() {
    let mut doc = Document::open(b"needle hay needle", None).unwrap();
    doc.set_caret(row(0) + col(11));
    assert_eq!(
        doc.find("needle", SearchDirection::Forward).unwrap(),
        Some(pos(row(0) + col(0)))
    );
    assert_eq!(offset_of(&doc), byte_index(0));
    assert!(matches!(
        doc.find("pin", SearchDirection::Backward),
        Err(EditorError::NotFound { .. })
    ));
}

#[test]
fn test_save_and_reopen() {
    let temp_dir = try_create_temp_dir().unwrap();
    let file = temp_dir.join("save.txt");
    let mut doc = Document::new_empty(0);
    doc.apply_editor_events(vec![
        EditorEvent::InsertString("line one".to_string()),
        EditorEvent::InsertNewLine,
        EditorEvent::InsertString("line two".to_string()),
    ])
    .unwrap();

    assert!(matches!(doc.save(), Err(EditorError::NoFilename)));
    assert!(doc.is_dirty());

    assert_eq!(doc.save_as(file.clone()).unwrap(), 17);
    assert!(!doc.is_dirty());

    let reopened = Document::open_file(&file).unwrap();
    assert_eq!(reopened.to_contiguous(), doc.to_contiguous());
    assert_eq!(reopened.row_count(), 2);
}

#[test]
fn test_config_from_json_drives_tab_width() {
    let config = EditorConfig::try_from_json_str(r#"{ "tab_width": 2 }"#).unwrap();
    assert!(config.auto_indent);

    let mut doc = Document::with_config(config);
    doc.apply_editor_events(vec![EditorEvent::InsertTab, EditorEvent::InsertChar(b'x')])
        .unwrap();
    assert_eq!(doc.to_contiguous(), b"  x".to_vec());

    assert!(matches!(
        EditorConfig::try_from_json_str("{ not json"),
        Err(EditorError::InvalidConfig { .. })
    ));
}
