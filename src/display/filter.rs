//! 过滤器流水线与注册表
//!
//! 过滤器是挂在窗口上的具名变换，按注册顺序作用于显示缓冲区。
//! 注册表只在安装时被查询；安装完成后窗口持有自己的可调用副本，
//! 与注册表再无关联。注册表由调用方注入，不做进程级单例。

use super::buffer::DisplayBuffer;
use crate::models::{Selection, TextBuffer};
use crate::window::Window;
use rustc_hash::FxHashMap;
use std::fmt;

/// 过滤器每趟收到的只读环境
pub struct FilterContext<'a> {
    pub buffer: &'a TextBuffer,
    pub selections: &'a [Selection],
}

pub type FilterFn = Box<dyn Fn(&FilterContext<'_>, &mut DisplayBuffer)>;

/// 工厂参数。默认过滤器不取参数；自定义工厂可按位置读取。
#[derive(Debug, Clone, Default)]
pub struct FilterParams(pub Vec<String>);

pub type FilterFactory = Box<dyn Fn(&FilterParams) -> FilterFn>;

#[derive(Debug)]
pub enum FilterError {
    IdNotUnique(String),
    UnknownFilter(String),
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterError::IdNotUnique(id) => write!(f, "filter id not unique: {}", id),
            FilterError::UnknownFilter(name) => write!(f, "unknown filter: {}", name),
        }
    }
}

impl std::error::Error for FilterError {}

/// 具名过滤器工厂的查找表
pub struct FilterRegistry {
    factories: FxHashMap<String, FilterFactory>,
}

impl FilterRegistry {
    pub fn new() -> Self {
        Self {
            factories: FxHashMap::default(),
        }
    }

    /// 带默认过滤器集的注册表
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("expand_tabs", Box::new(|_| super::filters::expand_tabs()));
        registry.register(
            "highlight_selections",
            Box::new(|_| super::filters::highlight_selections()),
        );
        registry.register("hlcpp", Box::new(|_| super::filters::hlcpp()));
        registry
    }

    pub fn register(&mut self, name: &str, factory: FilterFactory) {
        self.factories.insert(name.to_string(), factory);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// 查找工厂并把产出的过滤器装到窗口上
    pub fn add_filter_to_window(
        &self,
        window: &mut Window<'_>,
        name: &str,
        params: &FilterParams,
    ) -> Result<(), FilterError> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| FilterError::UnknownFilter(name.to_string()))?;
        window.add_filter(name, factory(params))
    }
}

impl Default for FilterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/display/filter.rs"]
mod tests;
