// 探索設定のValue Objects

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// 1世代に残す候補数の上限を表すValue Object。0は枝刈り無効。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PruneLimit(usize);

impl PruneLimit {
    /// 既定の枝刈り幅
    pub const DEFAULT: usize = 200;

    pub fn new(limit: usize) -> Result<Self> {
        if limit > 1_000_000 {
            return Err(anyhow!("枝刈り幅が大きすぎます: {}", limit));
        }
        Ok(Self(limit))
    }

    /// 枝刈りを無効化する（全探索）
    pub fn disabled() -> Self {
        Self(0)
    }

    pub fn get(&self) -> usize {
        self.0
    }

    pub fn is_disabled(&self) -> bool {
        self.0 == 0
    }
}

impl Default for PruneLimit {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

/// 探索設定のValue Object
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SearchConfig {
    pub prune_limit: PruneLimit,
    pub use_symmetry: bool,
}

impl SearchConfig {
    pub fn validate(&self) -> Result<()> {
        // Value Objectsで既に検証済み
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            prune_limit: PruneLimit::default(),
            use_symmetry: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prune_limit_default_is_200() {
        assert_eq!(PruneLimit::default().get(), 200);
        assert!(!PruneLimit::default().is_disabled());
    }

    #[test]
    fn prune_limit_zero_disables() {
        assert!(PruneLimit::disabled().is_disabled());
        assert!(PruneLimit::new(0).unwrap().is_disabled());
    }

    #[test]
    fn prune_limit_rejects_absurd_width() {
        assert!(PruneLimit::new(1_000_001).is_err());
        assert!(PruneLimit::new(1_000_000).is_ok());
    }

    #[test]
    fn config_default_has_symmetry_off() {
        let config = SearchConfig::default();
        assert_eq!(config.prune_limit.get(), 200);
        assert!(!config.use_symmetry);
        assert!(config.validate().is_ok());
    }
}
