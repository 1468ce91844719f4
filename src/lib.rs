pub mod lcg;
pub mod shuffle;
pub mod table;
pub mod plan;
pub mod seed_store;
pub mod session;
pub mod config;
pub mod error;
pub mod logging;
