use super::*;
use crate::display::buffer::DisplayBuffer;
use crate::display::filter::FilterContext;
use crate::models::{DisplayCoord, Selection, TextBuffer};

fn run(text: &str, selections: &[Selection]) -> DisplayBuffer {
    let buffer = TextBuffer::new("t", text);
    let mut db = DisplayBuffer::new();
    db.push(DisplayAtom::new(
        DisplayCoord::new(0, 0),
        buffer.begin(),
        buffer.end(),
    ));
    let ctx = FilterContext {
        buffer: &buffer,
        selections,
    };
    highlight_selections()(&ctx, &mut db);
    db.check_invariant(&buffer);
    db
}

#[test]
fn test_selection_splits_and_marks_atoms() {
    let selections = vec![Selection::new(BufferIterator::new(1), BufferIterator::new(3))];
    let db = run("hello", &selections);

    assert_eq!(db.len(), 3);
    assert_eq!(db.atoms()[0].highlight(), None);
    assert_eq!(db.atoms()[1].begin().offset(), 1);
    assert_eq!(db.atoms()[1].end().offset(), 4);
    assert_eq!(db.atoms()[1].highlight(), Some(HighlightKind::Selection));
    assert_eq!(db.atoms()[2].highlight(), None);
}

#[test]
fn test_caret_marks_single_cell() {
    let selections = vec![Selection::caret(BufferIterator::new(0))];
    let db = run("ab", &selections);

    assert_eq!(db.len(), 2);
    assert_eq!(db.atoms()[0].highlight(), Some(HighlightKind::Selection));
    assert_eq!(db.atoms()[0].end().offset(), 1);
    assert_eq!(db.atoms()[1].highlight(), None);
}

#[test]
fn test_multiple_selections_mark_their_ranges() {
    let selections = vec![
        Selection::caret(BufferIterator::new(0)),
        Selection::caret(BufferIterator::new(3)),
    ];
    let db = run("abcd", &selections);

    let marked: Vec<usize> = db
        .atoms()
        .iter()
        .filter(|atom| atom.highlight() == Some(HighlightKind::Selection))
        .map(|atom| atom.begin().offset())
        .collect();
    assert_eq!(marked, vec![0, 3]);
}

#[test]
fn test_no_selection_overlap_leaves_atom_alone() {
    let selections = vec![Selection::caret(BufferIterator::new(4))];
    let buffer = TextBuffer::new("t", "abcdef");
    let mut db = DisplayBuffer::new();
    db.push(DisplayAtom::new(
        DisplayCoord::new(0, 0),
        buffer.begin(),
        buffer.begin() + 3,
    ));
    let ctx = FilterContext {
        buffer: &buffer,
        selections: &selections,
    };
    highlight_selections()(&ctx, &mut db);

    assert_eq!(db.len(), 1);
    assert_eq!(db.atoms()[0].highlight(), None);
}
