// 枝刈り探索エンジン

use rustc_hash::FxHashSet;
use std::time::Instant;

use crate::domain::search::{Move, SearchConfig, SearchSummary};
use crate::search::position::Position;
use crate::vlog;

/// 世代単位の枝刈り探索。
/// 1世代は同じジャンプ数で到達できる局面の集合。世代ごとに全ての子局面を
/// 展開し、正規化idで重複を除去し、最終局面を回収し、コンパクトさ順に
/// 上位だけを残して次の世代へ進む。解が見つかった世代で打ち切る。
pub struct PruningSearch<'a> {
    initial: Position<'a>,
    prune_limit: usize,
    use_symmetry: bool,
    solutions: Vec<Position<'a>>,
    summary: SearchSummary,
}

impl<'a> PruningSearch<'a> {
    /// 探索の起点となる初期局面を受け取る。
    /// 盤面情報はPositionが参照しているため追加の情報は要らない。
    pub fn new(initial: Position<'a>) -> Self {
        Self {
            initial,
            prune_limit: SearchConfig::default().prune_limit.get(),
            use_symmetry: false,
            solutions: Vec::new(),
            summary: SearchSummary::default(),
        }
    }

    /// 設定オブジェクトから構築する
    pub fn with_config(initial: Position<'a>, config: &SearchConfig) -> Self {
        let mut search = Self::new(initial);
        search.prune_limit = config.prune_limit.get();
        search.use_symmetry = config.use_symmetry;
        search
    }

    /// 枝刈り幅を設定する。0で枝刈り無効（全探索、現実的な盤面では非常に遅い）。
    /// 既定の200で解が見つからないときは、徐々に増やして再実行する。
    pub fn prune(&mut self, limit: usize) {
        self.prune_limit = limit;
    }

    /// 重複除去のキーに対称性正規化idを使うかどうか。
    /// 1局面あたりの計算は重くなるが、対称な盤面では実効分岐数が減る。
    pub fn set_use_symmetry(&mut self, val: bool) {
        self.use_symmetry = val;
    }

    /// 探索を実行し、見つかった解の数を返す。0なら解なし。
    /// 世代が空になるのはエラーではなく、この枝刈り幅では解なしという通常終了。
    pub fn search(&mut self) -> usize {
        let started = Instant::now();
        self.solutions.clear();
        self.summary = SearchSummary::default();

        let mut generation = vec![self.initial.clone()];
        while !generation.is_empty() {
            let mut seen: FxHashSet<String> = FxHashSet::default();
            let mut candidates: Vec<Position<'a>> = Vec::new();

            for position in &generation {
                for child in position.children() {
                    self.summary.expanded += 1;
                    let key = if self.use_symmetry {
                        child.symm_id().to_owned()
                    } else {
                        child.id().to_owned()
                    };
                    if seen.insert(key) {
                        candidates.push(child);
                    } else {
                        self.summary.duplicates += 1;
                    }
                }
            }

            self.summary.generations += 1;
            vlog!(
                "[世代 {}] 候補={} / 重複累計={} / 展開累計={}",
                self.summary.generations,
                candidates.len(),
                self.summary.duplicates,
                self.summary.expanded
            );

            // 最終局面が出た世代で即座に打ち切る
            if candidates.iter().any(Position::is_final) {
                self.solutions
                    .extend(candidates.into_iter().filter(Position::is_final));
                break;
            }

            if self.prune_limit > 0 && candidates.len() > self.prune_limit {
                self.summary.pruned += (candidates.len() - self.prune_limit) as u64;
                // 安定ソートなので同点の候補は列挙順のまま残る
                candidates.sort_by_key(Position::score);
                candidates.truncate(self.prune_limit);
                vlog!(
                    "[世代 {}] 枝刈り後={}",
                    self.summary.generations,
                    candidates.len()
                );
            }

            generation = candidates;
        }

        self.summary.solutions = self.solutions.len();
        self.summary.elapsed_seconds = started.elapsed().as_secs_f64();
        self.solutions.len()
    }

    /// 見つかった解の数
    pub fn solution_count(&self) -> usize {
        self.solutions.len()
    }

    /// i番目の解のジャンプ列。範囲外はNone。
    pub fn get_solution(&self, i: usize) -> Option<&[Move]> {
        self.solutions.get(i).map(|p| p.history())
    }

    /// i番目の解の最終局面。範囲外はNone。
    pub fn get_final_position(&self, i: usize) -> Option<&Position<'a>> {
        self.solutions.get(i)
    }

    /// 直近のsearch()の統計
    pub fn summary(&self) -> &SearchSummary {
        &self.summary
    }
}
