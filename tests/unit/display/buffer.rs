use super::*;
use crate::models::BufferIterator;

#[test]
fn test_transform_recomputes_coords() {
    let buffer = TextBuffer::new("t", "ab\ncd");
    let mut db = DisplayBuffer::new();
    db.push(DisplayAtom::new(
        DisplayCoord::new(0, 0),
        buffer.begin(),
        buffer.end(),
    ));

    // 对半拆，坐标应由流水线重排
    db.transform(&buffer, |atom, _| {
        let (left, right) = atom.split_at(BufferIterator::new(4));
        vec![left, right]
    });

    assert_eq!(db.len(), 2);
    assert_eq!(db.atoms()[0].coord(), DisplayCoord::new(0, 0));
    assert_eq!(db.atoms()[1].coord(), DisplayCoord::new(1, 1));
    db.check_invariant(&buffer);
}

#[test]
fn test_transform_passes_start_coord() {
    let buffer = TextBuffer::new("t", "xy");
    let mut db = DisplayBuffer::new();
    db.push(DisplayAtom::new(
        DisplayCoord::new(0, 0),
        buffer.begin(),
        buffer.end(),
    ));

    let mut seen = Vec::new();
    db.transform(&buffer, |atom, start| {
        seen.push(start);
        vec![atom]
    });
    assert_eq!(seen, vec![DisplayCoord::new(0, 0)]);
}

#[test]
fn test_invariant_accepts_contiguous_atoms() {
    let buffer = TextBuffer::new("t", "abcd");
    let mut db = DisplayBuffer::new();
    db.push(DisplayAtom::new(
        DisplayCoord::new(0, 0),
        buffer.begin(),
        buffer.begin() + 2,
    ));
    db.push(DisplayAtom::new(
        DisplayCoord::new(0, 2),
        buffer.begin() + 2,
        buffer.end(),
    ));
    db.check_invariant(&buffer);
}

#[test]
fn test_invariant_accepts_empty() {
    let buffer = TextBuffer::new("t", "abcd");
    DisplayBuffer::new().check_invariant(&buffer);
}

#[test]
#[should_panic(expected = "contiguous")]
fn test_invariant_rejects_gap() {
    let buffer = TextBuffer::new("t", "abcd");
    let mut db = DisplayBuffer::new();
    db.push(DisplayAtom::new(
        DisplayCoord::new(0, 0),
        buffer.begin(),
        buffer.begin() + 2,
    ));
    db.push(DisplayAtom::new(
        DisplayCoord::new(0, 5),
        buffer.begin() + 2,
        buffer.end(),
    ));
    db.check_invariant(&buffer);
}

#[test]
#[should_panic(expected = "monotonic")]
fn test_invariant_rejects_reordered_sources() {
    let buffer = TextBuffer::new("t", "abcd");
    let mut db = DisplayBuffer::new();
    db.push(DisplayAtom::new(
        DisplayCoord::new(0, 0),
        buffer.begin() + 2,
        buffer.end(),
    ));
    db.push(DisplayAtom::new(
        DisplayCoord::new(0, 2),
        buffer.begin(),
        buffer.begin() + 2,
    ));
    db.check_invariant(&buffer);
}

#[test]
#[should_panic(expected = "origin")]
fn test_invariant_rejects_shifted_front() {
    let buffer = TextBuffer::new("t", "abcd");
    let mut db = DisplayBuffer::new();
    db.push(DisplayAtom::new(
        DisplayCoord::new(0, 1),
        buffer.begin(),
        buffer.end(),
    ));
    db.check_invariant(&buffer);
}
