// config.rs - Run-time configuration with defaults

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::plan::ShufflePlan;
use crate::seed_store::{FileStore, DEFAULT_SEED_KEY};

/// Run-time configuration (single source of truth).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub store_path:    PathBuf,
    pub seed_key:      String,
    pub plan:          ShufflePlan,
    pub fallback_seed: Option<u32>,
    pub log_level:     String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path:    PathBuf::from("deckshuffle_seeds.json"),
            seed_key:      DEFAULT_SEED_KEY.to_owned(),
            plan:          ShufflePlan::default(),
            fallback_seed: None,               // answer fails loudly without a seed
            log_level:     "info".to_owned(),
        }
    }
}

impl Config {
    pub fn store(&self) -> FileStore {
        FileStore::new(&self.store_path)
    }
}
