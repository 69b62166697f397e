// 占有パターンの対称変換

use crate::error::BoardError;

/// 幅×高さの占有パターンに対する純粋な対称変換。
/// どの変換も元のパターンを変更せず、新しいパターンを返す。
/// 対角ミラーと90度系の回転は正方形のパターンに対してのみ呼べる。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Pattern {
    pub fn new(width: usize, height: usize, cells: Vec<bool>) -> Result<Self, BoardError> {
        if cells.len() != width * height {
            return Err(BoardError::MaskSizeMismatch {
                expected: width * height,
                actual: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// 長さ検証済みの占有配列から直接構築する
    pub(crate) fn from_parts(width: usize, height: usize, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells,
        }
    }

    #[inline]
    fn at(&self, x: usize, y: usize) -> bool {
        self.cells[y * self.width + x]
    }

    fn transform(&self, f: impl Fn(usize, usize) -> bool) -> Pattern {
        let mut cells = vec![false; self.cells.len()];
        for y in 0..self.height {
            for x in 0..self.width {
                cells[y * self.width + x] = f(x, y);
            }
        }
        Pattern {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// 縦軸ミラー（x反転）
    pub fn vertical_flip(&self) -> Pattern {
        self.transform(|x, y| self.at(self.width - 1 - x, y))
    }

    /// 横軸ミラー（y反転）
    pub fn horizontal_flip(&self) -> Pattern {
        self.transform(|x, y| self.at(x, self.height - 1 - y))
    }

    /// 180度回転
    pub fn rotate180(&self) -> Pattern {
        self.transform(|x, y| self.at(self.width - 1 - x, self.height - 1 - y))
    }

    /// 左対角ミラー。正方形のみ。
    pub fn left_diagonal_flip(&self) -> Pattern {
        debug_assert_eq!(self.width, self.height);
        self.transform(|x, y| self.at(self.height - 1 - y, self.width - 1 - x))
    }

    /// 右対角ミラー。正方形のみ。
    pub fn right_diagonal_flip(&self) -> Pattern {
        debug_assert_eq!(self.width, self.height);
        self.transform(|x, y| self.at(y, x))
    }

    /// 90度回転。正方形のみ。
    pub fn rotate90(&self) -> Pattern {
        debug_assert_eq!(self.width, self.height);
        self.transform(|x, y| self.at(y, self.width - 1 - x))
    }

    /// 270度回転。正方形のみ。
    pub fn rotate270(&self) -> Pattern {
        debug_assert_eq!(self.width, self.height);
        self.transform(|x, y| self.at(self.height - 1 - y, x))
    }

    /// 行優先の'1'/'0'シリアライズ。
    /// 2つのパターンはシリアライズが一致するとき、かつそのときに限り構造的に等しい。
    pub fn id(&self) -> String {
        self.cells.iter().map(|&c| if c { '1' } else { '0' }).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 1 0 0
    // 1 1 0
    fn pattern_3x2() -> Pattern {
        Pattern::new(3, 2, vec![true, false, false, true, true, false]).unwrap()
    }

    // a b      t f
    // c d  =>  f t
    fn pattern_2x2() -> Pattern {
        Pattern::new(2, 2, vec![true, false, false, true]).unwrap()
    }

    fn asymmetric_3x3() -> Pattern {
        Pattern::new(
            3,
            3,
            vec![true, true, false, false, true, false, false, false, false],
        )
        .unwrap()
    }

    #[test]
    fn rejects_wrong_mask_length() {
        let result = Pattern::new(3, 2, vec![true; 5]);
        assert_eq!(
            result.unwrap_err(),
            BoardError::MaskSizeMismatch {
                expected: 6,
                actual: 5
            }
        );
    }

    #[test]
    fn id_serializes_row_major() {
        assert_eq!(pattern_3x2().id(), "100110");
    }

    #[test]
    fn vertical_flip_mirrors_x() {
        assert_eq!(pattern_3x2().vertical_flip().id(), "001011");
    }

    #[test]
    fn horizontal_flip_mirrors_y() {
        assert_eq!(pattern_3x2().horizontal_flip().id(), "110100");
    }

    #[test]
    fn rotate180_is_both_flips() {
        let p = pattern_3x2();
        assert_eq!(p.rotate180(), p.vertical_flip().horizontal_flip());
    }

    #[test]
    fn flips_are_involutions() {
        let p = pattern_3x2();
        assert_eq!(p.vertical_flip().vertical_flip(), p);
        assert_eq!(p.horizontal_flip().horizontal_flip(), p);
        assert_eq!(p.rotate180().rotate180(), p);
    }

    #[test]
    fn right_diagonal_flip_transposes() {
        // 主対角線上のパターンは転置で不変
        let p = pattern_2x2();
        assert_eq!(p.right_diagonal_flip(), p);
    }

    #[test]
    fn diagonal_flips_are_involutions() {
        let p = asymmetric_3x3();
        assert_eq!(p.left_diagonal_flip().left_diagonal_flip(), p);
        assert_eq!(p.right_diagonal_flip().right_diagonal_flip(), p);
    }

    #[test]
    fn rotations_compose() {
        let p = asymmetric_3x3();
        assert_eq!(p.rotate90().rotate90(), p.rotate180());
        assert_eq!(p.rotate90().rotate90().rotate90(), p.rotate270());
        assert_eq!(p.rotate90().rotate270(), p);
    }
}
