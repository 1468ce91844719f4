// session.rs - Question/answer presentations sharing one persisted seed

use tracing::info;

use crate::error::SeedError;
use crate::plan::ShufflePlan;
use crate::seed_store::{generate_seed, load_seed, load_seed_or, persist_seed, SeedStore};
use crate::table::Table;

/// Shuffle the question side and persist the seed it used.
///
/// `seed` overrides the wall-clock seed. The seed is stored before the table
/// is touched; the returned value is that stored seed.
pub fn present_question<T, S: SeedStore + ?Sized>(
    store: &mut S,
    key: &str,
    plan: &ShufflePlan,
    table: &mut Table<T>,
    seed: Option<u32>,
) -> Result<u32, SeedError> {
    let seed = seed.unwrap_or_else(generate_seed);
    persist_seed(store, key, seed)?;
    plan.apply(table, seed);
    info!(seed, mode = ?plan.mode, "question shuffled");
    Ok(seed)
}

/// Shuffle the answer side with the seed the question stored.
///
/// Without a `fallback`, a missing or malformed seed is an error; with one,
/// the fallback is used and a warning logged.
pub fn present_answer<T, S: SeedStore + ?Sized>(
    store: &S,
    key: &str,
    plan: &ShufflePlan,
    table: &mut Table<T>,
    fallback: Option<u32>,
) -> Result<u32, SeedError> {
    let seed = match fallback {
        Some(fallback) => load_seed_or(store, key, fallback),
        None => load_seed(store, key)?,
    };
    plan.apply(table, seed);
    info!(seed, mode = ?plan.mode, "answer shuffled");
    Ok(seed)
}
