//! 渲染原子：一段连续的显示内容及其来源范围

use crate::models::{slice_to_cow, BufferIterator, DisplayCoord, TextBuffer};
use std::borrow::Cow;

/// 过滤器产出的标注类别，由渲染端映射为样式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum HighlightKind {
    Selection = 0,
    Keyword = 1,
    Preprocessor = 2,
    String = 3,
    Comment = 4,
    Number = 5,
}

/// 显示坐标按内容推进：换行到下一行列零，其余前进一列
pub(crate) fn advance(coord: DisplayCoord, text: &str) -> DisplayCoord {
    text.chars().fold(coord, advance_char)
}

pub(crate) fn advance_char(coord: DisplayCoord, ch: char) -> DisplayCoord {
    if ch == '\n' {
        DisplayCoord::new(coord.line + 1, 0)
    } else {
        DisplayCoord::new(coord.line, coord.column + 1)
    }
}

/// 一段连续的渲染内容。
///
/// `begin`/`end` 界定来源切片（`end` 开区间）；`replacement` 存在时
/// 渲染该替换文本而非来源切片，此时原子内部不再有逐字符的坐标对应，
/// 两个方向的查询都塌缩到原子起点。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayAtom {
    coord: DisplayCoord,
    begin: BufferIterator,
    end: BufferIterator,
    replacement: Option<String>,
    highlight: Option<HighlightKind>,
}

impl DisplayAtom {
    pub fn new(coord: DisplayCoord, begin: BufferIterator, end: BufferIterator) -> Self {
        Self {
            coord,
            begin,
            end,
            replacement: None,
            highlight: None,
        }
    }

    pub fn replaced(
        coord: DisplayCoord,
        begin: BufferIterator,
        end: BufferIterator,
        content: String,
    ) -> Self {
        Self {
            coord,
            begin,
            end,
            replacement: Some(content),
            highlight: None,
        }
    }

    pub fn coord(&self) -> DisplayCoord {
        self.coord
    }

    pub fn begin(&self) -> BufferIterator {
        self.begin
    }

    pub fn end(&self) -> BufferIterator {
        self.end
    }

    pub fn replacement(&self) -> Option<&str> {
        self.replacement.as_deref()
    }

    pub fn highlight(&self) -> Option<HighlightKind> {
        self.highlight
    }

    pub fn set_highlight(&mut self, kind: HighlightKind) {
        self.highlight = Some(kind);
    }

    pub(crate) fn set_coord(&mut self, coord: DisplayCoord) {
        self.coord = coord;
    }

    /// 渲染内容：替换文本优先，否则取来源切片
    pub fn content<'a>(&self, buffer: &'a TextBuffer) -> Cow<'a, str> {
        match &self.replacement {
            Some(text) => Cow::Owned(text.clone()),
            None => slice_to_cow(buffer.slice(self.begin, self.end)),
        }
    }

    /// 原子结束处的显示坐标
    pub fn end_coord(&self, buffer: &TextBuffer) -> DisplayCoord {
        advance(self.coord, &self.content(buffer))
    }

    /// 在来源边界处拆分（仅对无替换内容的原子有意义）。
    /// 右半边的坐标由流水线重排时回填。
    pub(crate) fn split_at(&self, at: BufferIterator) -> (DisplayAtom, DisplayAtom) {
        debug_assert!(self.replacement.is_none(), "split of replaced atom");
        debug_assert!(self.begin < at && at < self.end, "split point outside atom");
        let mut left = self.clone();
        left.end = at;
        let mut right = self.clone();
        right.begin = at;
        (left, right)
    }

    /// 显示坐标 → 缓冲区位置（原子内部）。
    ///
    /// 逐字符推进显示游标，首个不小于目标的位置即命中；列超出行尾时
    /// 落在行尾的换行符上。替换原子塌缩到 `begin`。
    pub fn iterator_at(&self, pos: DisplayCoord, buffer: &TextBuffer) -> BufferIterator {
        if self.replacement.is_some() {
            return self.begin;
        }

        let content = self.content(buffer);
        let mut cur = self.coord;
        let mut it = self.begin;
        for ch in content.chars() {
            if cur >= pos {
                return it;
            }
            cur = advance_char(cur, ch);
            it = it + 1;
        }
        it
    }

    /// 缓冲区位置 → 显示坐标（原子内部）。替换原子塌缩到起点坐标。
    pub fn line_and_column_at(&self, it: BufferIterator, buffer: &TextBuffer) -> DisplayCoord {
        if self.replacement.is_some() {
            return self.coord;
        }

        debug_assert!(self.begin <= it && it < self.end, "iterator outside atom");
        let prefix = buffer.slice(self.begin, it);
        advance(self.coord, &slice_to_cow(prefix))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/display/atom.rs"]
mod tests;
