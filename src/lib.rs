// ペグソリテア枝刈りソルバー - ライブラリモジュール

pub mod domain; // ドメイン層
pub mod error;
pub mod logging;
pub mod search; // 探索層

// 外部クレートの再エクスポート
pub use anyhow::{anyhow, Context, Result};

// 主要な型を再エクスポート
pub use domain::board::{Board, Pattern, Symmetries};
pub use domain::search::{Move, PruneLimit, SearchConfig, SearchSummary, SolutionRecord};
pub use error::BoardError;
pub use search::{Position, PruningSearch};
