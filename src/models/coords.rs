//! 坐标类型：缓冲区坐标与显示坐标
//!
//! 两个空间各自独立：
//! - BufferCoord: 文本缓冲区中的行/列
//! - DisplayCoord: 视口渲染后的行/列，(0,0) 为可见区域左上角
//!
//! 分量允许为负（滚动计算的中间值）；钳制由缓冲区负责。

use std::ops::{Add, AddAssign, Sub, SubAssign};

/// 缓冲区中的行列位置。字典序比较：先行后列。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct BufferCoord {
    pub line: i64,
    pub column: i64,
}

/// 视口中的行列位置。永不持久化。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct DisplayCoord {
    pub line: i64,
    pub column: i64,
}

impl BufferCoord {
    pub const fn new(line: i64, column: i64) -> Self {
        Self { line, column }
    }
}

impl DisplayCoord {
    pub const fn new(line: i64, column: i64) -> Self {
        Self { line, column }
    }
}

impl Add for BufferCoord {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.line + rhs.line, self.column + rhs.column)
    }
}

impl Sub for BufferCoord {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.line - rhs.line, self.column - rhs.column)
    }
}

impl AddAssign for BufferCoord {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for BufferCoord {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Add for DisplayCoord {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.line + rhs.line, self.column + rhs.column)
    }
}

impl Sub for DisplayCoord {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.line - rhs.line, self.column - rhs.column)
    }
}

impl AddAssign for DisplayCoord {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for DisplayCoord {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl From<DisplayCoord> for BufferCoord {
    fn from(coord: DisplayCoord) -> Self {
        Self::new(coord.line, coord.column)
    }
}

impl From<BufferCoord> for DisplayCoord {
    fn from(coord: BufferCoord) -> Self {
        Self::new(coord.line, coord.column)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/coords.rs"]
mod tests;
