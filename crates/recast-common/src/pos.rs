//! Line/column source positions.
//! 行/列源码位置。

use std::fmt;

/// A line/column position in source code. Both components are 1-based;
/// `(0, 0)` is reserved for nodes that have no source location.
/// 源码中的行/列位置。两个分量都从 1 开始；`(0, 0)` 保留给没有源码位置的节点。
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SourcePos {
    /// Line number (1-based). / 行号（从 1 开始）。
    pub line: u32,
    /// Column number (1-based). / 列号（从 1 开始）。
    pub col: u32,
}

impl SourcePos {
    /// The position of synthesized nodes that do not appear in source.
    /// 合成节点的位置，这些节点不出现在源码中。
    pub const SYNTHETIC: SourcePos = SourcePos { line: 0, col: 0 };

    pub fn new(line: u32, col: u32) -> Self {
        SourcePos { line, col }
    }

    /// Returns true if this position marks a synthesized node.
    /// 如果此位置标记的是合成节点则返回 true。
    pub fn is_synthetic(self) -> bool {
        self == SourcePos::SYNTHETIC
    }
}

impl fmt::Debug for SourcePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.line, self.col)
    }
}

impl fmt::Display for SourcePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.line, self.col)
    }
}
