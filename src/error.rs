// ドメインエラー定義

use thiserror::Error;

/// 盤面の構築・参照で発生するエラー。
/// いずれも呼び出し時点で即座に失敗し、黙って補正されることはない。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("盤面サイズは1x1以上が必要です: {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    #[error("マスク長が盤面サイズと一致しません: 期待{expected}、実際{actual}")]
    MaskSizeMismatch { expected: usize, actual: usize },

    #[error("座標が範囲外です: ({x}, {y})")]
    OutOfBounds { x: usize, y: usize },

    #[error("初期の空きセルが穴ではありません: ({x}, {y})")]
    NotAHole { x: usize, y: usize },
}
