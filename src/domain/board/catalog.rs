// 既知の盤面カタログと文字レイアウトのパース

use anyhow::{anyhow, Result};

use crate::domain::board::geometry::Board;

/// 英国式の33穴盤面（7×7の十字）
pub const ENGLISH_LAYOUT: &str = "\
..ooo..
..ooo..
ooooooo
ooooooo
ooooooo
..ooo..
..ooo..";

/// 欧州式の37穴盤面
pub const EUROPEAN_LAYOUT: &str = "\
..ooo..
.ooooo.
ooooooo
ooooooo
ooooooo
.ooooo.
..ooo..";

/// 文字レイアウトから盤面を構築する。
/// 'o'が穴、'.'が穴なし。行の幅は揃っていること。
pub fn parse_layout(s: &str) -> Result<Board> {
    let lines: Vec<&str> = s
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.is_empty() {
        return Err(anyhow!("レイアウトが空です"));
    }

    let width = lines[0].chars().count();
    let height = lines.len();
    let mut holes = Vec::with_capacity(width * height);
    for (y, line) in lines.iter().enumerate() {
        if line.chars().count() != width {
            return Err(anyhow!(
                "行の幅が不揃いです: 行{}は幅{}（期待{}）",
                y,
                line.chars().count(),
                width
            ));
        }
        for ch in line.chars() {
            match ch {
                'o' | 'O' | '1' => holes.push(true),
                '.' | '0' => holes.push(false),
                _ => return Err(anyhow!("不正な文字です: {}", ch)),
            }
        }
    }

    Ok(Board::new(width, height, holes)?)
}

/// 英国式盤面
pub fn english() -> Board {
    parse_layout(ENGLISH_LAYOUT).unwrap()
}

/// 欧州式盤面
pub fn european() -> Board {
    parse_layout(EUROPEAN_LAYOUT).unwrap()
}

/// 名前から既知の盤面を引く
pub fn by_name(name: &str) -> Result<Board> {
    match name {
        "english" => Ok(english()),
        "european" => Ok(european()),
        _ => Err(anyhow!("未知の盤面名です: {}（english / european）", name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_has_33_holes() {
        let board = english();
        assert_eq!(board.width(), 7);
        assert_eq!(board.height(), 7);
        assert_eq!(board.hole_count(), 33);
        assert!(!board.allowed(0, 0).unwrap());
        assert!(board.allowed(3, 3).unwrap());
    }

    #[test]
    fn european_has_37_holes() {
        let board = european();
        assert_eq!(board.hole_count(), 37);
        assert!(board.allowed(1, 1).unwrap());
        assert!(!board.allowed(0, 0).unwrap());
    }

    #[test]
    fn catalog_boards_have_full_symmetry() {
        for board in [english(), european()] {
            let s = board.symmetries();
            assert!(s.vertical_flip);
            assert!(s.horizontal_flip);
            assert!(s.left_diagonal_flip);
            assert!(s.right_diagonal_flip);
            assert!(s.rotate90);
            assert!(s.rotate180);
            assert!(s.rotate270);
        }
    }

    #[test]
    fn parse_rejects_ragged_rows() {
        assert!(parse_layout("ooo\noo").is_err());
    }

    #[test]
    fn parse_rejects_unknown_characters() {
        assert!(parse_layout("oxo").is_err());
    }

    #[test]
    fn parse_rejects_empty_layout() {
        assert!(parse_layout("\n  \n").is_err());
    }

    #[test]
    fn parse_accepts_digit_masks() {
        let board = parse_layout("0110\n1111").unwrap();
        assert_eq!(board.width(), 4);
        assert_eq!(board.hole_count(), 6);
    }

    #[test]
    fn by_name_rejects_unknown() {
        assert!(by_name("klingon").is_err());
    }
}
