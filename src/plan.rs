// plan.rs - Which vectors of a card table get shuffled, and with which seed

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::table::{shuffle_columns, shuffle_rows, Anchors, Table};

/// Shuffle variants of the table note types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ShuffleMode {
    /// Plain table, nothing moves.
    Unshuffled,
    Rows,
    Columns,
    /// Columns first, then rows.
    #[default]
    Vectors,
}

impl ShuffleMode {
    /// Mode for a note's `shuffle_rows` / `shuffle_cols` flags.
    pub fn from_flags(rows: bool, cols: bool) -> Self {
        match (rows, cols) {
            (false, false) => Self::Unshuffled,
            (true, false) => Self::Rows,
            (false, true) => Self::Columns,
            (true, true) => Self::Vectors,
        }
    }
}

/// Starting seed of the row pass in `Vectors` mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SeedPolicy {
    /// Rows restart from the persisted seed, ignoring what the column pass consumed.
    #[default]
    Shared,
    /// Rows continue from the column pass's final seed.
    Chained,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShufflePlan {
    pub mode: ShuffleMode,
    pub policy: SeedPolicy,
    pub anchors: Anchors,
}

impl ShufflePlan {
    pub fn new(mode: ShuffleMode) -> Self {
        Self { mode, ..Self::default() }
    }

    /// Shuffle `table` and return the seed state after the last pass.
    pub fn apply<T>(&self, table: &mut Table<T>, seed: u32) -> u32 {
        match self.mode {
            ShuffleMode::Unshuffled => seed,
            ShuffleMode::Rows => shuffle_rows(table, seed, self.anchors),
            ShuffleMode::Columns => shuffle_columns(table, seed, self.anchors),
            ShuffleMode::Vectors => {
                let after_columns = shuffle_columns(table, seed, self.anchors);
                let row_seed = match self.policy {
                    SeedPolicy::Shared => seed,
                    SeedPolicy::Chained => after_columns,
                };
                shuffle_rows(table, row_seed, self.anchors)
            }
        }
    }
}
