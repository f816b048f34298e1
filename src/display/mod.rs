//! 显示层：可见矩形的渲染表示与过滤器流水线

pub mod atom;
pub mod buffer;
pub mod filter;
pub mod filters;

pub use atom::{DisplayAtom, HighlightKind};
pub use buffer::DisplayBuffer;
pub use filter::{FilterContext, FilterError, FilterFactory, FilterFn, FilterParams, FilterRegistry};
