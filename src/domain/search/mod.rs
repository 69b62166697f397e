// 探索設定と結果のドメイン層

pub mod config;
pub mod result;

pub use config::{PruneLimit, SearchConfig};
pub use result::{Move, SearchSummary, SolutionRecord};
