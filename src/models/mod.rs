//! 数据模型层
//!
//! 纯数据结构，无视图逻辑：
//! - BufferCoord / DisplayCoord: 两个坐标空间
//! - TextBuffer: 文本缓冲区与撤销组
//! - Selection: 选区模型

pub mod coords;
pub mod edit_op;
pub mod selection;
pub mod text_buffer;

pub use coords::{BufferCoord, DisplayCoord};
pub use edit_op::{Edit, EditOp};
pub use selection::Selection;
pub use text_buffer::{slice_to_cow, BufferIterator, TextBuffer};
