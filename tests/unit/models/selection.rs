use super::*;

#[test]
fn test_caret_spans_one_cell() {
    let sel = Selection::caret(BufferIterator::new(2));
    assert_eq!(sel.begin().offset(), 2);
    assert_eq!(sel.end().offset(), 3);
    assert!(sel.is_forward());
}

#[test]
fn test_begin_end_normalize_direction() {
    let forward = Selection::new(BufferIterator::new(2), BufferIterator::new(5));
    assert_eq!(forward.begin().offset(), 2);
    assert_eq!(forward.end().offset(), 6);

    let reverse = Selection::new(BufferIterator::new(5), BufferIterator::new(2));
    assert!(!reverse.is_forward());
    assert_eq!(reverse.begin().offset(), 2);
    assert_eq!(reverse.end().offset(), 6);
}

#[test]
fn test_merge_preserves_forward_direction() {
    let mut sel = Selection::new(BufferIterator::new(2), BufferIterator::new(5));
    sel.merge_with(&Selection::new(BufferIterator::new(0), BufferIterator::new(10)));
    assert_eq!(sel.first().offset(), 0);
    assert_eq!(sel.last().offset(), 10);
    assert!(sel.is_forward());
}

#[test]
fn test_merge_preserves_reverse_direction() {
    let mut sel = Selection::new(BufferIterator::new(9), BufferIterator::new(7));
    sel.merge_with(&Selection::new(BufferIterator::new(0), BufferIterator::new(10)));
    assert_eq!(sel.first().offset(), 9);
    assert_eq!(sel.last().offset(), 10);
}

#[test]
fn test_merge_does_not_touch_captures() {
    let mut sel = Selection::with_captures(
        BufferIterator::new(0),
        BufferIterator::new(3),
        vec!["one".to_string()],
    );
    sel.merge_with(&Selection::with_captures(
        BufferIterator::new(5),
        BufferIterator::new(8),
        vec!["two".to_string()],
    ));
    assert_eq!(sel.capture(0), "one");
}

#[test]
fn test_capture_out_of_range_is_empty() {
    let sel = Selection::caret(BufferIterator::new(0));
    assert_eq!(sel.capture(0), "");
    assert_eq!(sel.capture(7), "");

    let sel = Selection::with_captures(
        BufferIterator::new(0),
        BufferIterator::new(0),
        vec!["hit".to_string()],
    );
    assert_eq!(sel.capture(0), "hit");
    assert_eq!(sel.capture(1), "");
}

#[test]
fn test_reshape_keeps_captures() {
    let mut sel = Selection::with_captures(
        BufferIterator::new(1),
        BufferIterator::new(4),
        vec!["kept".to_string()],
    );
    sel.reshape(BufferIterator::new(7), BufferIterator::new(7));
    assert_eq!(sel.first().offset(), 7);
    assert_eq!(sel.last().offset(), 7);
    assert_eq!(sel.capture(0), "kept");
}

#[test]
fn test_transform_shifts_both_ends() {
    let mut sel = Selection::new(BufferIterator::new(3), BufferIterator::new(6));
    sel.transform(&Edit {
        start: 0,
        removed: 0,
        inserted: 2,
    });
    assert_eq!(sel.first().offset(), 5);
    assert_eq!(sel.last().offset(), 8);

    sel.transform(&Edit {
        start: 4,
        removed: 3,
        inserted: 0,
    });
    assert_eq!(sel.first().offset(), 4);
    assert_eq!(sel.last().offset(), 5);
}
