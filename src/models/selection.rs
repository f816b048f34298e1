//! 选区模型：带锚点的有向范围
//!
//! `first` 是锚点，`last` 是光标；光标所在格属于选区，
//! 因此 `end()` 比两端的最大值多一。

use super::edit_op::Edit;
use super::text_buffer::BufferIterator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    first: BufferIterator,
    last: BufferIterator,
    captures: Vec<String>,
}

impl Selection {
    pub fn new(first: BufferIterator, last: BufferIterator) -> Self {
        Self {
            first,
            last,
            captures: Vec::new(),
        }
    }

    pub fn with_captures(
        first: BufferIterator,
        last: BufferIterator,
        captures: Vec<String>,
    ) -> Self {
        Self {
            first,
            last,
            captures,
        }
    }

    /// 零宽选区：视觉上占一格
    pub fn caret(pos: BufferIterator) -> Self {
        Self::new(pos, pos)
    }

    pub fn first(&self) -> BufferIterator {
        self.first
    }

    pub fn last(&self) -> BufferIterator {
        self.last
    }

    pub fn begin(&self) -> BufferIterator {
        self.first.min(self.last)
    }

    pub fn end(&self) -> BufferIterator {
        self.first.max(self.last) + 1
    }

    pub fn is_forward(&self) -> bool {
        self.first <= self.last
    }

    /// 保向合并：锚点沿现有方向外扩，光标跳到对方的光标
    pub fn merge_with(&mut self, other: &Selection) {
        if self.first <= self.last {
            self.first = self.first.min(other.first);
        } else {
            self.first = self.first.max(other.first);
        }
        self.last = other.last;
    }

    /// 移动两端，保留捕获串
    pub fn reshape(&mut self, first: BufferIterator, last: BufferIterator) {
        self.first = first;
        self.last = last;
    }

    /// 按编辑摘要修正两端偏移
    pub fn transform(&mut self, edit: &Edit) {
        self.first = self.first.transformed(edit);
        self.last = self.last.transformed(edit);
    }

    pub fn captures(&self) -> &[String] {
        &self.captures
    }

    pub fn take_captures(self) -> Vec<String> {
        self.captures
    }

    /// 第 i 个捕获串，越界返回空串
    pub fn capture(&self, index: usize) -> &str {
        self.captures.get(index).map(String::as_str).unwrap_or("")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/selection.rs"]
mod tests;
