//! 文本缓冲区模型
//!
//! 职责：
//! - 文本存储（Rope）
//! - 迭代器句柄与行列 ↔ 字符偏移映射
//! - 撤销组：组内的所有修改作为一个撤销步骤提交
//!
//! 迭代器稳定性：`BufferIterator` 是纯字符偏移句柄，每次修改返回
//! [`Edit`]，持有者用 `Edit::transform` 把旧偏移映射到新位置。

use super::coords::BufferCoord;
use super::edit_op::{Edit, EditOp};
use ropey::{Rope, RopeSlice};
use std::borrow::Cow;
use tracing::trace;

/// 从 RopeSlice 获取字符串，优先零拷贝
pub fn slice_to_cow(slice: RopeSlice<'_>) -> Cow<'_, str> {
    match slice.as_str() {
        Some(s) => Cow::Borrowed(s),
        None => Cow::Owned(slice.to_string()),
    }
}

/// 缓冲区中的稳定位置句柄（字符偏移）。
///
/// 解引用和行列查询要经过所属的 [`TextBuffer`]；跨修改持有时由
/// [`Edit::transform`] 修正。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BufferIterator {
    offset: usize,
}

impl BufferIterator {
    pub const fn new(offset: usize) -> Self {
        Self { offset }
    }

    pub const fn offset(&self) -> usize {
        self.offset
    }

    pub const fn is_begin(&self) -> bool {
        self.offset == 0
    }

    pub fn transformed(&self, edit: &Edit) -> Self {
        Self::new(edit.transform(self.offset))
    }
}

impl std::ops::Add<usize> for BufferIterator {
    type Output = Self;

    fn add(self, n: usize) -> Self {
        Self::new(self.offset + n)
    }
}

impl std::ops::Sub<usize> for BufferIterator {
    type Output = Self;

    fn sub(self, n: usize) -> Self {
        Self::new(self.offset.saturating_sub(n))
    }
}

pub struct TextBuffer {
    name: String,
    rope: Rope,
    history: Vec<Vec<EditOp>>,
    redo_stack: Vec<Vec<EditOp>>,
    pending: Vec<EditOp>,
    group_open: bool,
    saved_groups: usize,
}

impl TextBuffer {
    pub fn new(name: &str, text: &str) -> Self {
        Self {
            name: name.to_string(),
            rope: Rope::from_str(text),
            history: Vec::new(),
            redo_stack: Vec::new(),
            pending: Vec::new(),
            group_open: false,
            saved_groups: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    /// 未保存的修改：撤销回保存点会清除该标记
    pub fn is_modified(&self) -> bool {
        self.history.len() != self.saved_groups
    }

    pub fn mark_saved(&mut self) {
        self.saved_groups = self.history.len();
    }

    // ==================== 迭代器 ====================

    pub fn begin(&self) -> BufferIterator {
        BufferIterator::new(0)
    }

    pub fn end(&self) -> BufferIterator {
        BufferIterator::new(self.rope.len_chars())
    }

    pub fn is_end(&self, it: BufferIterator) -> bool {
        it.offset() >= self.rope.len_chars()
    }

    /// 解引用。对 `end()` 解引用是调用方错误。
    pub fn char_at(&self, it: BufferIterator) -> char {
        debug_assert!(!self.is_end(it), "deref of end iterator");
        let offset = it.offset().min(self.rope.len_chars().saturating_sub(1));
        self.rope.char(offset)
    }

    /// 行列 → 迭代器。各分量钳制到合法范围：
    /// 负值归零，行超界落在最后一行，列超界落在行尾。
    pub fn iterator_at(&self, coord: BufferCoord) -> BufferIterator {
        let last_line = self.rope.len_lines().saturating_sub(1);
        let line = coord.line.clamp(0, last_line as i64) as usize;

        let line_start = self.rope.line_to_char(line);
        let line_chars = self.rope.line(line).len_chars();
        // 非末行带换行符，光标最多落在换行符上；末行可落在缓冲区末尾
        let max_col = if line < last_line {
            line_chars.saturating_sub(1)
        } else {
            line_chars
        };
        let column = coord.column.clamp(0, max_col as i64) as usize;

        BufferIterator::new(line_start + column)
    }

    /// 迭代器 → 行列
    pub fn line_and_column_at(&self, it: BufferIterator) -> BufferCoord {
        let offset = it.offset().min(self.rope.len_chars());
        let line = self.rope.char_to_line(offset);
        let column = offset - self.rope.line_to_char(line);
        BufferCoord::new(line as i64, column as i64)
    }

    pub fn string(&self, begin: BufferIterator, end: BufferIterator) -> String {
        self.slice(begin, end).to_string()
    }

    pub fn slice(&self, begin: BufferIterator, end: BufferIterator) -> RopeSlice<'_> {
        let len = self.rope.len_chars();
        let start = begin.offset().min(len);
        let end = end.offset().clamp(start, len);
        self.rope.slice(start..end)
    }

    // ==================== 修改 ====================

    /// 插入文本，返回偏移摘要
    pub fn insert(&mut self, at: BufferIterator, text: &str) -> Edit {
        let at = at.offset().min(self.rope.len_chars());
        let op = EditOp::Insert {
            at,
            text: text.to_string(),
        };
        op.apply(&mut self.rope);
        let edit = op.summary();
        self.record(op);
        edit
    }

    /// 删除 `[begin, end)`，返回偏移摘要
    pub fn erase(&mut self, begin: BufferIterator, end: BufferIterator) -> Edit {
        let len = self.rope.len_chars();
        let start = begin.offset().min(len);
        let end = end.offset().clamp(start, len);
        if start == end {
            return Edit {
                start,
                removed: 0,
                inserted: 0,
            };
        }

        let erased = self.rope.slice(start..end).to_string();
        let op = EditOp::Erase { start, end, erased };
        op.apply(&mut self.rope);
        let edit = op.summary();
        self.record(op);
        edit
    }

    fn record(&mut self, op: EditOp) {
        if self.group_open {
            self.pending.push(op);
        } else {
            // 组外的单次修改作为独立撤销步骤提交
            self.commit(vec![op]);
        }
    }

    fn commit(&mut self, group: Vec<EditOp>) {
        if !self.redo_stack.is_empty() && self.saved_groups > self.history.len() {
            // 保存点在被丢弃的重做分支上，从此不可达
            self.saved_groups = usize::MAX;
        }
        self.redo_stack.clear();
        self.history.push(group);
    }

    // ==================== 撤销组 ====================

    pub fn begin_undo_group(&mut self) {
        assert!(!self.group_open, "undo group already open");
        self.group_open = true;
    }

    pub fn end_undo_group(&mut self) {
        assert!(self.group_open, "no undo group open");
        self.group_open = false;
        if !self.pending.is_empty() {
            let group = std::mem::take(&mut self.pending);
            self.commit(group);
        }
    }

    pub fn undo(&mut self) -> bool {
        let Some(group) = self.history.pop() else {
            return false;
        };

        for op in group.iter().rev() {
            op.inverse().apply(&mut self.rope);
        }
        trace!(ops = group.len(), "undo group");
        self.redo_stack.push(group);
        true
    }

    pub fn redo(&mut self) -> bool {
        let Some(group) = self.redo_stack.pop() else {
            return false;
        };

        for op in &group {
            op.apply(&mut self.rope);
        }
        trace!(ops = group.len(), "redo group");
        self.history.push(group);
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/text_buffer.rs"]
mod tests;
