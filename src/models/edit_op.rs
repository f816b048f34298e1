use ropey::Rope;

/// 可逆的原子编辑操作
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditOp {
    Insert {
        at: usize,
        text: String,
    },
    Erase {
        start: usize,
        end: usize,
        erased: String,
    },
}

impl EditOp {
    pub fn apply(&self, rope: &mut Rope) {
        match self {
            EditOp::Insert { at, text } => {
                rope.insert(*at, text);
            }
            EditOp::Erase { start, end, .. } => {
                rope.remove(*start..*end);
            }
        }
    }

    pub fn inverse(&self) -> EditOp {
        match self {
            EditOp::Insert { at, text } => EditOp::Erase {
                start: *at,
                end: at + text.chars().count(),
                erased: text.clone(),
            },
            EditOp::Erase { start, erased, .. } => EditOp::Insert {
                at: *start,
                text: erased.clone(),
            },
        }
    }

    pub fn summary(&self) -> Edit {
        match self {
            EditOp::Insert { at, text } => Edit {
                start: *at,
                removed: 0,
                inserted: text.chars().count(),
            },
            EditOp::Erase { start, end, .. } => Edit {
                start: *start,
                removed: end - start,
                inserted: 0,
            },
        }
    }
}

/// 单次编辑的偏移摘要，用于修正外部持有的位置。
///
/// 位置稳定性约定：
/// - 插入点及其之前的偏移不动；插入点处的偏移改指第一个新插入的字符
/// - 被删除区间内的偏移收缩到区间起点（最近的幸存边界）
/// - 其余偏移按长度差平移
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edit {
    pub start: usize,
    pub removed: usize,
    pub inserted: usize,
}

impl Edit {
    pub fn transform(&self, offset: usize) -> usize {
        if offset <= self.start {
            return offset;
        }
        if offset <= self.start + self.removed {
            return self.start;
        }
        offset - self.removed + self.inserted
    }
}
