// error.rs - Error taxonomy for seed handling, permutations and table I/O

use thiserror::Error;

/// Failures of a key-value seed store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("seed store I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("seed store is not a JSON object of strings: {0}")]
    Json(#[from] serde_json::Error),
}

/// Why a persisted seed could not be turned into a `u32`.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("no seed stored under key `{key}`")]
    Missing { key: String },
    #[error("value `{value}` stored under key `{key}` is not a non-negative decimal integer")]
    Malformed { key: String, value: String },
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShuffleError {
    #[error("permutation of length {len} is not a bijection on 0..{expected}")]
    InvalidPermutation { len: usize, expected: usize },
}

#[derive(Debug, Error)]
pub enum TableError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV writer could not flush: {0}")]
    Io(#[from] std::io::Error),
}
