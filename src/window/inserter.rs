//! Incremental insertion session: an exclusive scoped borrow of a window.

use super::Window;
use crate::models::DisplayCoord;

/// 进入插入会话时光标的落点方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Insert,
    Append,
    Change,
    OpenLineBelow,
    AppendAtLineEnd,
    OpenLineAbove,
    InsertAtLineBegin,
}

/// 绑定在窗口上的插入会话。
///
/// 存续期间窗口被独占借用，编辑全部走 `_noundo` 变体并落在
/// 构造时打开的撤销组里；析构时光标左移一个显示列、关闭撤销组。
pub struct IncrementalInserter<'w, 'b> {
    window: &'w mut Window<'b>,
}

impl<'w, 'b> IncrementalInserter<'w, 'b> {
    pub fn new(window: &'w mut Window<'b>, mode: Mode) -> Self {
        assert!(!window.inserter_active, "another inserter is active");
        window.inserter_active = true;
        window.check_invariant();

        window.buffer.begin_undo_group();

        if mode == Mode::Change {
            window.erase_noundo();
        }

        // 按模式把每个选区收拢为光标，保留捕获串
        for i in 0..window.selections.len() {
            let (sel_begin, sel_end) = {
                let sel = &window.selections[i];
                (sel.begin(), sel.end())
            };

            let pos = match mode {
                Mode::Insert | Mode::Change => sel_begin,
                Mode::Append => sel_end,

                Mode::OpenLineBelow | Mode::AppendAtLineEnd => {
                    let mut pos = sel_end - 1;
                    while !window.buffer.is_end(pos) && window.buffer.char_at(pos) != '\n' {
                        pos = pos + 1;
                    }
                    if mode == Mode::OpenLineBelow {
                        let edit = window.buffer.insert(pos, "\n");
                        window.shift_selections(&edit);
                        pos = pos + 1;
                    }
                    pos
                }

                Mode::OpenLineAbove | Mode::InsertAtLineBegin => {
                    let mut pos = sel_begin;
                    // 末尾迭代器不可解引用，先退一步
                    while !pos.is_begin()
                        && (window.buffer.is_end(pos) || window.buffer.char_at(pos) != '\n')
                    {
                        pos = pos - 1;
                    }
                    if mode == Mode::OpenLineAbove {
                        let edit = window.buffer.insert(pos, "\n");
                        window.shift_selections(&edit);
                    }
                    pos + 1
                }
            };

            window.selections[i].reshape(pos, pos);
        }

        Self { window }
    }

    /// 会话期间窗口被独占，渲染端经由这里读取窗口状态
    pub fn window(&self) -> &Window<'b> {
        self.window
    }

    /// 会话期间重建显示缓冲区（窗口被独占借用，只能从这里触发）
    pub fn update_display_buffer(&mut self) {
        self.window.update_display_buffer();
    }

    pub fn insert(&mut self, text: &str) {
        self.window.insert_noundo(text);
    }

    /// 在每个选区起点插入它自己的第 i 个捕获串
    pub fn insert_capture(&mut self, index: usize) {
        for i in 0..self.window.selections.len() {
            let text = self.window.selections[i].capture(index).to_string();
            if text.is_empty() {
                continue;
            }
            let at = self.window.selections[i].begin();
            let edit = self.window.buffer.insert(at, &text);
            self.window.shift_selections(&edit);
        }
        self.window.scroll_to_keep_cursor_visible();
    }

    /// 退格：锚点和光标同时左移一位再删除。
    /// 已在缓冲区起点、无法左移的光标跳过。
    pub fn erase(&mut self) {
        for i in 0..self.window.selections.len() {
            let (first, last) = {
                let sel = &self.window.selections[i];
                (sel.first(), sel.last())
            };
            if first.is_begin() && last.is_begin() {
                continue;
            }
            self.window.selections[i].reshape(first - 1, last - 1);

            let (begin, end) = {
                let sel = &self.window.selections[i];
                (sel.begin(), sel.end())
            };
            let edit = self.window.buffer.erase(begin, end);
            self.window.shift_selections(&edit);
        }
        self.window.scroll_to_keep_cursor_visible();
    }

    /// 每个选区按当前显示位置加偏移重新定位，收拢为光标
    pub fn move_cursor(&mut self, offset: DisplayCoord) {
        for i in 0..self.window.selections.len() {
            let last = self.window.selections[i].last();
            let pos = self.window.line_and_column_at(last) + offset;
            let it = self.window.iterator_at(pos);
            self.window.selections[i].reshape(it, it);
        }
    }
}

impl Drop for IncrementalInserter<'_, '_> {
    fn drop(&mut self) {
        // 光标格属于选区：左移一列让光标停在最后输入的字符上
        self.move_cursor(DisplayCoord::new(0, -1));
        assert!(self.window.inserter_active, "inserter not registered");
        self.window.inserter_active = false;
        self.window.buffer.end_undo_group();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/window/inserter.rs"]
mod tests;
