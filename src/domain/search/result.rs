// 探索結果の定義

use serde::{Deserialize, Serialize};
use std::fmt;

/// 1回のジャンプを表す不変レコード。
/// (x1, y1)が跳ぶ元、(x2, y2)が着地先。取られるペグは常に両端の中点。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub x1: usize,
    pub y1: usize,
    pub x2: usize,
    pub y2: usize,
}

impl Move {
    pub fn new(x1: usize, y1: usize, x2: usize, y2: usize) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// 跳び越されて取られるセル
    pub fn captured(&self) -> (usize, usize) {
        ((self.x1 + self.x2) / 2, (self.y1 + self.y2) / 2)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}, {}]", self.x1, self.y1, self.x2, self.y2)
    }
}

/// 解1件分の受け渡し用レコード（JSON出力向け）
#[derive(Clone, Debug, Serialize)]
pub struct SolutionRecord {
    pub index: usize,
    pub moves: Vec<Move>,
    pub complement: bool,
}

/// 探索サマリー
#[derive(Clone, Debug, Default, Serialize)]
pub struct SearchSummary {
    pub generations: u32,
    pub expanded: u64,
    pub duplicates: u64,
    pub pruned: u64,
    pub solutions: usize,
    pub elapsed_seconds: f64,
}
