//! 窗口：缓冲区视图与编辑入口
//!
//! 持有非空的选区列表（末尾为主选区）、滚动原点、过滤器流水线和
//! 派生的显示缓冲区。所有修改都包在一个撤销组里；复合操作
//! （如 replace）通过 `_noundo` 变体合并为单个撤销步骤。

mod inserter;

pub use inserter::{IncrementalInserter, Mode};

use crate::display::{
    DisplayAtom, DisplayBuffer, FilterContext, FilterError, FilterFn, FilterParams, FilterRegistry,
};
use crate::models::{BufferCoord, BufferIterator, DisplayCoord, Edit, Selection, TextBuffer};
use std::ops::{Deref, DerefMut};
use tracing::{debug, warn};

const DEFAULT_FILTERS: [&str; 3] = ["expand_tabs", "highlight_selections", "hlcpp"];

pub struct Window<'b> {
    buffer: &'b mut TextBuffer,
    position: BufferCoord,
    dimensions: DisplayCoord,
    selections: Vec<Selection>,
    display_buffer: DisplayBuffer,
    filters: Vec<(String, FilterFn)>,
    inserter_active: bool,
}

impl<'b> Window<'b> {
    /// 新窗口：单个光标落在缓冲区起点，装上默认过滤器集
    pub fn new(buffer: &'b mut TextBuffer, registry: &FilterRegistry) -> Self {
        let caret = Selection::caret(buffer.begin());
        let mut window = Self {
            buffer,
            position: BufferCoord::new(0, 0),
            dimensions: DisplayCoord::new(0, 0),
            selections: vec![caret],
            display_buffer: DisplayBuffer::new(),
            filters: Vec::new(),
            inserter_active: false,
        };

        for name in DEFAULT_FILTERS {
            if let Err(err) = registry.add_filter_to_window(&mut window, name, &FilterParams::default())
            {
                warn!(filter = name, error = %err, "default filter not installed");
            }
        }
        window
    }

    fn check_invariant(&self) {
        assert!(!self.selections.is_empty(), "window has no selections");
    }

    pub fn buffer(&self) -> &TextBuffer {
        self.buffer
    }

    pub fn position(&self) -> BufferCoord {
        self.position
    }

    pub fn dimensions(&self) -> DisplayCoord {
        self.dimensions
    }

    pub fn set_dimensions(&mut self, dimensions: DisplayCoord) {
        self.dimensions = dimensions;
    }

    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    pub fn display_buffer(&self) -> &DisplayBuffer {
        &self.display_buffer
    }

    /// 主选区：列表末尾，驱动光标、状态栏与非追加操作
    fn primary(&self) -> &Selection {
        self.check_invariant();
        &self.selections[self.selections.len() - 1]
    }

    pub fn cursor_iterator(&self) -> BufferIterator {
        self.primary().last()
    }

    pub fn cursor_position(&self) -> DisplayCoord {
        self.line_and_column_at(self.cursor_iterator())
    }

    // ==================== 编辑操作 ====================

    pub fn insert(&mut self, text: &str) {
        let mut scope = UndoScope::open(self);
        scope.insert_noundo(text);
    }

    pub fn insert_noundo(&mut self, text: &str) {
        self.check_invariant();
        for i in 0..self.selections.len() {
            let at = self.selections[i].begin();
            let edit = self.buffer.insert(at, text);
            self.shift_selections(&edit);
        }
        self.scroll_to_keep_cursor_visible();
    }

    pub fn append(&mut self, text: &str) {
        let mut scope = UndoScope::open(self);
        scope.append_noundo(text);
    }

    pub fn append_noundo(&mut self, text: &str) {
        self.check_invariant();
        for i in 0..self.selections.len() {
            let at = self.selections[i].end();
            let edit = self.buffer.insert(at, text);
            self.shift_selections(&edit);
        }
        self.scroll_to_keep_cursor_visible();
    }

    pub fn erase(&mut self) {
        let mut scope = UndoScope::open(self);
        scope.erase_noundo();
    }

    pub fn erase_noundo(&mut self) {
        self.check_invariant();
        for i in 0..self.selections.len() {
            let begin = self.selections[i].begin();
            let end = self.selections[i].end();
            let edit = self.buffer.erase(begin, end);
            self.shift_selections(&edit);
        }
        self.scroll_to_keep_cursor_visible();
    }

    /// 删除再插入，合并为一个撤销步骤
    pub fn replace(&mut self, text: &str) {
        let mut scope = UndoScope::open(self);
        scope.erase_noundo();
        scope.insert_noundo(text);
    }

    pub fn undo(&mut self) -> bool {
        self.buffer.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.buffer.redo()
    }

    /// 缓冲区已变，按编辑摘要修正所有选区端点。
    /// 靠前选区的修改由此反映到靠后选区随后的 begin()/end() 计算里。
    fn shift_selections(&mut self, edit: &Edit) {
        for sel in &mut self.selections {
            sel.transform(edit);
        }
    }

    // ==================== 坐标映射 ====================

    /// 视口坐标 → 缓冲区位置。
    ///
    /// 原子边界归右侧原子所有：取最后一个起点不超过目标的原子。
    /// 负坐标或越过末原子起点时退化为滚动原点加偏移的裸算术，
    /// 供滚动计算触及屏幕外的位置。
    pub fn iterator_at(&self, window_pos: DisplayCoord) -> BufferIterator {
        if self.display_buffer.is_empty() {
            return self.buffer.begin();
        }

        if window_pos >= DisplayCoord::new(0, 0) {
            let atoms = self.display_buffer.atoms();
            for i in 1..atoms.len() {
                if window_pos < atoms[i].coord() {
                    return atoms[i - 1].iterator_at(window_pos, self.buffer);
                }
            }
        }

        self.buffer
            .iterator_at(self.position + BufferCoord::from(window_pos))
    }

    /// 缓冲区位置 → 视口坐标。
    ///
    /// 可见范围内委托给覆盖该位置的原子（边界归右：第一个 end 超过
    /// 该位置的原子）；范围外减去滚动原点，结果可为负或超出尺寸，
    /// 调用方视作屏幕外并滚动。
    pub fn line_and_column_at(&self, it: BufferIterator) -> DisplayCoord {
        let (Some(front), Some(back)) = (self.display_buffer.front(), self.display_buffer.back())
        else {
            return DisplayCoord::new(0, 0);
        };

        if it >= front.begin() && it < back.end() {
            for atom in self.display_buffer.atoms() {
                if atom.end() > it {
                    debug_assert!(atom.begin() <= it, "monotonic atoms cover the range");
                    return atom.line_and_column_at(it, self.buffer);
                }
            }
        }

        let coord = self.buffer.line_and_column_at(it) - self.position;
        DisplayCoord::from(coord)
    }

    // ==================== 选区操作 ====================

    /// 收拢为主光标处的单个光标
    pub fn clear_selections(&mut self) {
        let cursor = self.primary().last();
        self.selections.clear();
        self.selections.push(Selection::caret(cursor));
    }

    pub fn select<F>(&mut self, selector: F, append: bool)
    where
        F: Fn(&TextBuffer, BufferIterator) -> Selection,
    {
        self.check_invariant();

        if !append {
            let sel = selector(self.buffer, self.primary().last());
            self.selections.clear();
            self.selections.push(sel);
        } else {
            for i in 0..self.selections.len() {
                let other = selector(self.buffer, self.selections[i].last());
                self.selections[i].merge_with(&other);
            }
        }
        self.scroll_to_keep_cursor_visible();
    }

    pub fn multi_select<F>(&mut self, selector: F)
    where
        F: Fn(&TextBuffer, &Selection) -> Vec<Selection>,
    {
        self.check_invariant();

        let mut new_selections = Vec::new();
        for sel in &self.selections {
            new_selections.extend(selector(self.buffer, sel));
        }

        if new_selections.is_empty() {
            // 空结果是调用方错误；保留原主选区以维持非空不变量
            warn!("multi_select produced no selections, keeping primary");
            if let Some(primary) = self.selections.pop() {
                self.selections.clear();
                self.selections.push(primary);
            }
        } else {
            self.selections = new_selections;
        }
        self.scroll_to_keep_cursor_visible();
    }

    /// 主选区覆盖的文本
    pub fn selection_content(&self) -> String {
        let primary = self.primary();
        self.buffer.string(primary.begin(), primary.end())
    }

    // ==================== 光标移动 ====================

    pub fn move_cursor(&mut self, offset: DisplayCoord, append: bool) {
        if !append {
            let pos = self.buffer.line_and_column_at(self.cursor_iterator())
                + BufferCoord::from(offset);
            self.move_cursor_to(self.buffer.iterator_at(pos));
        } else {
            for i in 0..self.selections.len() {
                let sel = &self.selections[i];
                let pos = self.buffer.line_and_column_at(sel.last()) + BufferCoord::from(offset);
                let cursor = self.buffer.iterator_at(pos);
                let anchor = sel.first();
                self.selections[i].reshape(anchor, cursor);
            }
            self.scroll_to_keep_cursor_visible();
        }
    }

    pub fn move_cursor_to(&mut self, it: BufferIterator) {
        self.selections.clear();
        self.selections.push(Selection::caret(it));
        self.scroll_to_keep_cursor_visible();
    }

    // ==================== 视口 ====================

    /// 用当前（可能已过期的）显示映射估算光标的视口坐标并滚动。
    /// 滚动之后、下一次查询之前必须重建显示缓冲区。
    pub fn scroll_to_keep_cursor_visible(&mut self) {
        self.check_invariant();

        let cursor = self.line_and_column_at(self.primary().last());
        if cursor.line < 0 {
            self.position.line = (self.position.line + cursor.line).max(0);
        } else if cursor.line >= self.dimensions.line {
            self.position.line += cursor.line - (self.dimensions.line - 1);
        }

        if cursor.column < 0 {
            self.position.column = (self.position.column + cursor.column).max(0);
        } else if cursor.column >= self.dimensions.column {
            self.position.column += cursor.column - (self.dimensions.column - 1);
        }
    }

    /// 从头重建可见矩形的渲染表示并跑一遍过滤器流水线
    pub fn update_display_buffer(&mut self) {
        self.display_buffer.clear();

        let begin = self.buffer.iterator_at(self.position);
        let corner = self.position
            + BufferCoord::new(self.dimensions.line, self.dimensions.column);
        let end = (self.buffer.iterator_at(corner) + 1).min(self.buffer.end());
        if begin == end {
            return;
        }

        self.display_buffer
            .push(DisplayAtom::new(DisplayCoord::new(0, 0), begin, end));

        let ctx = FilterContext {
            buffer: self.buffer,
            selections: &self.selections,
        };
        for (_, filter) in &self.filters {
            filter(&ctx, &mut self.display_buffer);
            self.display_buffer.check_invariant(self.buffer);
        }
    }

    // ==================== 过滤器管理 ====================

    pub fn add_filter(&mut self, id: &str, filter: FilterFn) -> Result<(), FilterError> {
        if self.filters.iter().any(|(existing, _)| existing == id) {
            return Err(FilterError::IdNotUnique(id.to_string()));
        }
        debug!(filter = id, "filter added");
        self.filters.push((id.to_string(), filter));
        Ok(())
    }

    /// 移除首个同名过滤器；没有则为静默空操作
    pub fn remove_filter(&mut self, id: &str) {
        if let Some(index) = self.filters.iter().position(|(existing, _)| existing == id) {
            self.filters.remove(index);
            debug!(filter = id, "filter removed");
        }
    }

    /// 按注册顺序返回所有以 `prefix[..cursor_pos]` 开头的过滤器名
    pub fn complete_filterid(&self, prefix: &str, cursor_pos: usize) -> Vec<String> {
        let real_prefix = prefix.get(..cursor_pos).unwrap_or(prefix);
        self.filters
            .iter()
            .filter(|(id, _)| id.starts_with(real_prefix))
            .map(|(id, _)| id.clone())
            .collect()
    }

    // ==================== 状态 ====================

    pub fn status_line(&self) -> String {
        let cursor = self.buffer.line_and_column_at(self.cursor_iterator());
        let mut status = self.buffer.name().to_string();
        if self.buffer.is_modified() {
            status.push_str(" [+]");
        }
        status.push_str(&format!(
            " -- {},{} -- {} sel -- ",
            cursor.line + 1,
            cursor.column + 1,
            self.selections.len()
        ));
        if self.inserter_active {
            status.push_str("[Insert]");
        }
        status
    }
}

/// 作用域撤销组：打开后经由它执行 `_noundo` 操作，
/// 离开作用域（含展开）时关闭撤销组。
struct UndoScope<'a, 'b> {
    window: &'a mut Window<'b>,
}

impl<'a, 'b> UndoScope<'a, 'b> {
    fn open(window: &'a mut Window<'b>) -> Self {
        window.buffer.begin_undo_group();
        Self { window }
    }
}

impl<'b> Deref for UndoScope<'_, 'b> {
    type Target = Window<'b>;

    fn deref(&self) -> &Self::Target {
        self.window
    }
}

impl<'b> DerefMut for UndoScope<'_, 'b> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.window
    }
}

impl Drop for UndoScope<'_, '_> {
    fn drop(&mut self) {
        self.window.buffer.end_undo_group();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/window/window.rs"]
mod tests;
