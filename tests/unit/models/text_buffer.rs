use super::*;

#[test]
fn test_new_buffer() {
    let buffer = TextBuffer::new("scratch", "ab\ncd");
    assert_eq!(buffer.name(), "scratch");
    assert_eq!(buffer.text(), "ab\ncd");
    assert_eq!(buffer.len_chars(), 5);
    assert_eq!(buffer.len_lines(), 2);
    assert!(!buffer.is_modified());
}

#[test]
fn test_iterator_endpoints() {
    let buffer = TextBuffer::new("t", "abc");
    assert!(buffer.begin().is_begin());
    assert!(buffer.is_end(buffer.end()));
    assert_eq!(buffer.end().offset(), 3);
    assert_eq!(buffer.char_at(buffer.begin()), 'a');
    assert_eq!(buffer.char_at(buffer.begin() + 2), 'c');
}

#[test]
fn test_iterator_at_clamps() {
    let buffer = TextBuffer::new("t", "ab\ncd");
    assert_eq!(buffer.iterator_at(BufferCoord::new(0, 0)).offset(), 0);
    // 非末行的列钳制到换行符
    assert_eq!(buffer.iterator_at(BufferCoord::new(0, 5)).offset(), 2);
    assert_eq!(buffer.iterator_at(BufferCoord::new(-3, -7)).offset(), 0);
    assert_eq!(buffer.iterator_at(BufferCoord::new(9, 0)).offset(), 3);
    // 末行的列可以落在缓冲区末尾
    assert_eq!(buffer.iterator_at(BufferCoord::new(1, 99)).offset(), 5);
}

#[test]
fn test_line_and_column_at() {
    let buffer = TextBuffer::new("t", "ab\ncd");
    assert_eq!(
        buffer.line_and_column_at(BufferIterator::new(0)),
        BufferCoord::new(0, 0)
    );
    assert_eq!(
        buffer.line_and_column_at(BufferIterator::new(4)),
        BufferCoord::new(1, 1)
    );
    assert_eq!(
        buffer.line_and_column_at(BufferIterator::new(5)),
        BufferCoord::new(1, 2)
    );
}

#[test]
fn test_string_slice() {
    let buffer = TextBuffer::new("t", "hello world");
    assert_eq!(
        buffer.string(BufferIterator::new(6), BufferIterator::new(11)),
        "world"
    );
    // 越界钳制
    assert_eq!(
        buffer.string(BufferIterator::new(6), BufferIterator::new(99)),
        "world"
    );
    assert_eq!(slice_to_cow(buffer.slice(buffer.begin(), buffer.begin() + 5)), "hello");
}

#[test]
fn test_insert_and_erase_report_edits() {
    let mut buffer = TextBuffer::new("t", "ad");
    let edit = buffer.insert(buffer.begin() + 1, "bc");
    assert_eq!(buffer.text(), "abcd");
    assert_eq!(edit.start, 1);
    assert_eq!(edit.inserted, 2);

    let edit = buffer.erase(buffer.begin() + 1, buffer.begin() + 3);
    assert_eq!(buffer.text(), "ad");
    assert_eq!(edit.removed, 2);
}

#[test]
fn test_erase_empty_range_is_noop() {
    let mut buffer = TextBuffer::new("t", "abc");
    buffer.erase(buffer.begin() + 1, buffer.begin() + 1);
    assert_eq!(buffer.text(), "abc");
    assert!(!buffer.is_modified());
}

#[test]
fn test_undo_group_is_one_step() {
    let mut buffer = TextBuffer::new("t", "foo");
    buffer.begin_undo_group();
    buffer.erase(buffer.begin(), buffer.begin() + 3);
    buffer.insert(buffer.begin(), "bar");
    buffer.end_undo_group();
    assert_eq!(buffer.text(), "bar");

    assert!(buffer.undo());
    assert_eq!(buffer.text(), "foo");
    assert!(buffer.redo());
    assert_eq!(buffer.text(), "bar");
}

#[test]
fn test_lone_edit_commits_as_own_step() {
    let mut buffer = TextBuffer::new("t", "");
    buffer.insert(buffer.begin(), "a");
    buffer.insert(buffer.begin(), "b");
    assert!(buffer.undo());
    assert_eq!(buffer.text(), "a");
    assert!(buffer.undo());
    assert_eq!(buffer.text(), "");
}

#[test]
fn test_undo_redo_return_false_when_exhausted() {
    let mut buffer = TextBuffer::new("t", "x");
    assert!(!buffer.undo());
    assert!(!buffer.redo());
}

#[test]
fn test_empty_group_records_nothing() {
    let mut buffer = TextBuffer::new("t", "x");
    buffer.begin_undo_group();
    buffer.end_undo_group();
    assert!(!buffer.undo());
}

#[test]
fn test_modified_tracks_save_point() {
    let mut buffer = TextBuffer::new("t", "");
    buffer.insert(buffer.begin(), "x");
    assert!(buffer.is_modified());

    assert!(buffer.undo());
    assert!(!buffer.is_modified());

    assert!(buffer.redo());
    buffer.mark_saved();
    assert!(!buffer.is_modified());

    assert!(buffer.undo());
    assert!(buffer.is_modified());
}

#[test]
fn test_save_point_lost_with_discarded_redo() {
    let mut buffer = TextBuffer::new("t", "");
    buffer.insert(buffer.begin(), "a");
    buffer.insert(buffer.begin(), "b");
    buffer.mark_saved();
    assert!(buffer.undo());
    // 新编辑丢弃重做分支，保存点不可达
    buffer.insert(buffer.begin(), "c");
    assert!(buffer.is_modified());
}

#[test]
#[should_panic(expected = "undo group already open")]
fn test_nested_group_is_programmer_error() {
    let mut buffer = TextBuffer::new("t", "");
    buffer.begin_undo_group();
    buffer.begin_undo_group();
}
