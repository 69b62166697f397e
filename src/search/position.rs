// 局面表現と合法手生成

use once_cell::unsync::OnceCell;

use crate::domain::board::{Board, Pattern};
use crate::domain::search::Move;
use crate::error::BoardError;

/// ジャンプ方向の走査順（下・上・右・左）。
/// 枝刈りの同点タイブレークは子局面の列挙順に依存するため、この順序は変更しない。
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// ゲーム中のある時点の盤面状態。
/// 占有状態と、初期局面からここに至るまでのジャンプ履歴を持つ。
/// 公開コンストラクタは持たず、初期局面はBoard::initial_positionだけが生成する。
/// 以後の局面は親から1ジャンプ分を適用した新しい独立なオブジェクトとして派生する。
#[derive(Clone, Debug)]
pub struct Position<'a> {
    board: &'a Board,
    occupied: Vec<bool>,
    history: Vec<Move>,
    id: OnceCell<String>,
    symm_id: OnceCell<String>,
    score: OnceCell<u32>,
}

impl Board {
    /// 指定セルだけを空けた初期局面を返す。指定セルは盤面内の穴であること。
    pub fn initial_position(&self, x: usize, y: usize) -> Result<Position<'_>, BoardError> {
        if !self.allowed(x, y)? {
            return Err(BoardError::NotAHole { x, y });
        }

        let mut occupied: Vec<bool> = (0..self.cell_count()).map(|i| self.hole(i)).collect();
        occupied[y * self.width() + x] = false;

        Ok(Position {
            board: self,
            occupied,
            history: Vec::new(),
            id: OnceCell::new(),
            symm_id: OnceCell::new(),
            score: OnceCell::new(),
        })
    }
}

impl<'a> Position<'a> {
    pub fn board(&self) -> &'a Board {
        self.board
    }

    /// 指定セルにペグがあるか。穴でないセルと範囲外は常にfalse。
    pub fn occupied(&self, x: usize, y: usize) -> bool {
        if x >= self.board.width() || y >= self.board.height() {
            return false;
        }
        let i = y * self.board.width() + x;
        self.board.hole(i) && self.occupied[i]
    }

    /// 残っているペグの数
    pub fn peg_count(&self) -> usize {
        self.occupied.iter().filter(|&&o| o).count()
    }

    /// この局面に至ったジャンプ履歴
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// ペグが1本だけ残った勝利状態か。0本の局面は最終状態とはみなさない。
    pub fn is_final(&self) -> bool {
        self.peg_count() == 1
    }

    /// 全ての穴で占有状態が食い違うか。
    /// 初期局面と最終局面の組に対しては、最後のペグが最初の空きセルに
    /// 戻っていることと同値になる。
    pub fn is_complement(&self, other: &Position<'_>) -> bool {
        debug_assert_eq!(self.occupied.len(), other.occupied.len());
        for i in 0..self.occupied.len() {
            if self.board.hole(i) && self.occupied[i] == other.occupied[i] {
                return false;
            }
        }
        true
    }

    /// 占有状態の行優先'1'/'0'シリアライズ。初回アクセス時に一度だけ計算される。
    /// 履歴には依存しない純粋な占有状態の関数。
    pub fn id(&self) -> &str {
        self.id
            .get_or_init(|| self.occupied.iter().map(|&o| if o { '1' } else { '0' }).collect())
    }

    /// 盤面が実際に持つ対称変換で正規化したid。
    /// 全ての像のシリアライズのうち辞書順最小を取る。初回アクセス時に一度だけ計算される。
    pub fn symm_id(&self) -> &str {
        self.symm_id.get_or_init(|| self.calculate_symm_id())
    }

    fn calculate_symm_id(&self) -> String {
        let pattern = Pattern::from_parts(
            self.board.width(),
            self.board.height(),
            self.occupied.clone(),
        );
        let symm = self.board.symmetries();

        let mut ids = vec![pattern.id()];
        if symm.rotate270 {
            ids.push(pattern.rotate270().id());
        }
        if symm.rotate180 {
            ids.push(pattern.rotate180().id());
        }
        if symm.rotate90 {
            ids.push(pattern.rotate90().id());
        }
        if symm.vertical_flip {
            ids.push(pattern.vertical_flip().id());
        }
        if symm.horizontal_flip {
            ids.push(pattern.horizontal_flip().id());
        }
        if symm.right_diagonal_flip {
            ids.push(pattern.right_diagonal_flip().id());
        }
        if symm.left_diagonal_flip {
            ids.push(pattern.left_diagonal_flip().id());
        }

        ids.into_iter().min().unwrap_or_default()
    }

    /// コンパクトさのヒューリスティック値。初回アクセス時に一度だけ計算される。
    /// 占有セルと空きの境界の長さで、小さいほど密集した局面。
    /// 密集した局面ほど解につながりやすいとみなして枝刈りの順位付けに使う。
    pub fn score(&self) -> u32 {
        *self.score.get_or_init(|| self.calculate_compactness_score())
    }

    fn calculate_compactness_score(&self) -> u32 {
        let width = self.board.width();
        let mut score = 0;
        for i in 0..self.occupied.len() {
            if !(self.board.hole(i) && self.occupied[i]) {
                continue;
            }
            let x = (i % width) as isize;
            let y = (i / width) as isize;
            for (dx, dy) in DIRECTIONS {
                if self.empty_at(x + dx, y + dy) {
                    score += 1;
                }
            }
        }
        score
    }

    /// 盤外・穴なし・未占有のいずれかならtrue
    fn empty_at(&self, x: isize, y: isize) -> bool {
        if x < 0 || y < 0 || x >= self.board.width() as isize || y >= self.board.height() as isize {
            return true;
        }
        let i = y as usize * self.board.width() + x as usize;
        !self.board.hole(i) || !self.occupied[i]
    }

    /// (cx, cy)のペグを跳び越えて(lx, ly)に着地できるか。
    /// 両セルとも盤面内の穴で、跳び越されるセルが占有、着地先が空きであること。
    /// 跳ぶ元のセルの占有は呼び出し側で確認済み。
    fn is_valid_move(&self, cx: isize, cy: isize, lx: isize, ly: isize) -> bool {
        let width = self.board.width() as isize;
        let height = self.board.height() as isize;
        if cx < 0 || cy < 0 || lx < 0 || ly < 0 {
            return false;
        }
        if cx >= width || cy >= height || lx >= width || ly >= height {
            return false;
        }

        let ci = cy as usize * self.board.width() + cx as usize;
        let li = ly as usize * self.board.width() + lx as usize;
        if !self.board.hole(ci) || !self.board.hole(li) {
            return false;
        }
        self.occupied[ci] && !self.occupied[li]
    }

    /// 1ジャンプで到達できる全ての子局面を生成する。
    /// セルは行優先、方向はDIRECTIONS順で、列挙順は決定的。
    pub fn children(&self) -> Vec<Position<'a>> {
        let width = self.board.width();
        let mut children = Vec::new();
        for i in 0..self.occupied.len() {
            if !(self.board.hole(i) && self.occupied[i]) {
                continue;
            }
            let x = (i % width) as isize;
            let y = (i / width) as isize;
            for (dx, dy) in DIRECTIONS {
                let (cx, cy) = (x + dx, y + dy);
                let (lx, ly) = (x + 2 * dx, y + 2 * dy);
                if self.is_valid_move(cx, cy, lx, ly) {
                    children.push(self.beget(
                        (x as usize, y as usize),
                        (cx as usize, cy as usize),
                        (lx as usize, ly as usize),
                    ));
                }
            }
        }
        children
    }

    /// 1ジャンプ分を適用した新しい子局面を生成する。
    /// 占有状態は深いコピーで、跳ぶ元と取られるセルを空け、着地先を占有にする。
    /// 履歴はコピーに1手追加し、メモは全て未計算に戻る。
    fn beget(
        &self,
        origin: (usize, usize),
        captured: (usize, usize),
        landing: (usize, usize),
    ) -> Position<'a> {
        let width = self.board.width();
        let mut occupied = self.occupied.clone();
        occupied[origin.1 * width + origin.0] = false;
        occupied[captured.1 * width + captured.0] = false;
        occupied[landing.1 * width + landing.0] = true;

        let mut history = self.history.clone();
        history.push(Move::new(origin.0, origin.1, landing.0, landing.1));

        Position {
            board: self.board,
            occupied,
            history,
            id: OnceCell::new(),
            symm_id: OnceCell::new(),
            score: OnceCell::new(),
        }
    }
}
