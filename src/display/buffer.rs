//! 显示缓冲区：有序的渲染原子序列
//!
//! 不变量（每趟过滤器之后校验）：
//! - 首个原子位于 (0,0)
//! - 原子在显示空间连续：后一个的坐标等于前一个按内容推进后的坐标
//! - 来源范围单调不减：过滤器可以收缩或展开，但不能乱序

use super::atom::{advance, DisplayAtom};
use crate::models::{DisplayCoord, TextBuffer};

#[derive(Debug, Default)]
pub struct DisplayBuffer {
    atoms: Vec<DisplayAtom>,
}

impl DisplayBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.atoms.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn atoms(&self) -> &[DisplayAtom] {
        &self.atoms
    }

    pub fn front(&self) -> Option<&DisplayAtom> {
        self.atoms.first()
    }

    pub fn back(&self) -> Option<&DisplayAtom> {
        self.atoms.last()
    }

    pub fn push(&mut self, atom: DisplayAtom) {
        self.atoms.push(atom);
    }

    /// 过滤器的重写入口：把每个原子映射为若干碎片，
    /// 并按内容推进重排所有坐标，连续性由构造保证。
    ///
    /// 回调收到原子与其重排后的起始坐标。
    pub fn transform<F>(&mut self, buffer: &TextBuffer, mut f: F)
    where
        F: FnMut(DisplayAtom, DisplayCoord) -> Vec<DisplayAtom>,
    {
        let old = std::mem::take(&mut self.atoms);
        let mut cur = DisplayCoord::new(0, 0);
        for atom in old {
            for mut shard in f(atom, cur) {
                shard.set_coord(cur);
                cur = advance(cur, &shard.content(buffer));
                self.atoms.push(shard);
            }
        }
    }

    /// 不变量校验。违反即为过滤器实现错误，直接终止。
    pub fn check_invariant(&self, buffer: &TextBuffer) {
        let Some(front) = self.atoms.first() else {
            return;
        };
        assert_eq!(
            front.coord(),
            DisplayCoord::new(0, 0),
            "display buffer must start at origin"
        );

        let mut expected = front.coord();
        let mut prev_source_end = front.begin();
        for atom in &self.atoms {
            assert_eq!(atom.coord(), expected, "display atoms must be contiguous");
            assert!(atom.begin() <= atom.end(), "atom source range inverted");
            assert!(
                prev_source_end <= atom.begin(),
                "atom source ranges must be monotonic"
            );
            expected = advance(atom.coord(), &atom.content(buffer));
            prev_source_end = atom.end();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/display/buffer.rs"]
mod tests;
