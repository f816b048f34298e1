//! 默认过滤器集：制表符展开、选区高亮、C++ 语法标注

mod cpp;
mod expand_tabs;
mod highlight_selections;

pub use cpp::hlcpp;
pub use expand_tabs::expand_tabs;
pub use highlight_selections::highlight_selections;
