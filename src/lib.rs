//! zwin - 模态编辑器的窗口/多选区核心
//!
//! 这个 crate 提供编辑器的视口核心：缓冲区视图、多选区、
//! 显示过滤器流水线与增量插入会话，可被渲染端和命令分发集成。

pub mod display;
pub mod logging;
pub mod models;
pub mod window;

pub use display::{
    DisplayAtom, DisplayBuffer, FilterError, FilterParams, FilterRegistry, HighlightKind,
};
pub use models::{BufferCoord, BufferIterator, DisplayCoord, Selection, TextBuffer};
pub use window::{IncrementalInserter, Mode, Window};
