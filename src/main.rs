//! Command-line front end: shuffle a CSV card table for the question side,
//! replay the same order for the answer side, or inspect the generator.

use std::fs::File;
use std::io;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use deckshuffle::config::Config;
use deckshuffle::lcg;
use deckshuffle::logging::init_logging;
use deckshuffle::plan::{SeedPolicy, ShuffleMode};
use deckshuffle::session::{present_answer, present_question};
use deckshuffle::shuffle::permutation;
use deckshuffle::table::Table;
use tracing::debug;

#[derive(Parser)]
#[command(name = "deckshuffle", version, about = "Seeded row/column shuffles for flashcard tables")]
struct Cli {
    /// Log level used when RUST_LOG is unset
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate and persist a seed, then print the shuffled table
    Question {
        #[command(flatten)]
        table: TableArgs,

        /// Use this seed instead of the wall clock
        #[arg(long)]
        seed: Option<u32>,
    },
    /// Print the table shuffled with the persisted seed
    Answer {
        #[command(flatten)]
        table: TableArgs,

        /// Seed to use when none (or garbage) is stored
        #[arg(long)]
        fallback_seed: Option<u32>,
    },
    /// Print the permutation of 0..n for a seed
    Permute {
        #[arg(long)]
        n: usize,

        #[arg(long)]
        seed: u32,
    },
    /// Print successive (value, seed) draws
    Next {
        #[arg(long)]
        seed: u32,

        #[arg(long, default_value = "1")]
        count: usize,
    },
}

#[derive(Args)]
struct TableArgs {
    /// CSV table; the first record is the header row
    #[arg(long)]
    input: PathBuf,

    /// Write the shuffled CSV here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// JSON file holding persisted seeds
    #[arg(long)]
    store: Option<PathBuf>,

    /// Key the seed is stored under
    #[arg(long)]
    key: Option<String>,

    #[arg(long, value_enum)]
    mode: Option<ShuffleMode>,

    /// Seed of the row pass when both rows and columns shuffle
    #[arg(long, value_enum)]
    policy: Option<SeedPolicy>,

    /// Let the first row move too
    #[arg(long)]
    no_header_anchor: bool,

    /// Let the first column move too
    #[arg(long)]
    no_column_anchor: bool,
}

impl TableArgs {
    fn config(&self, log_level: &str) -> Config {
        let mut cfg = Config { log_level: log_level.to_owned(), ..Config::default() };
        if let Some(path) = &self.store {
            cfg.store_path = path.clone();
        }
        if let Some(key) = &self.key {
            cfg.seed_key = key.clone();
        }
        if let Some(mode) = self.mode {
            cfg.plan.mode = mode;
        }
        if let Some(policy) = self.policy {
            cfg.plan.policy = policy;
        }
        cfg.plan.anchors.header_row = !self.no_header_anchor;
        cfg.plan.anchors.first_column = !self.no_column_anchor;
        cfg
    }

    fn read(&self) -> Result<Table<String>, Box<dyn std::error::Error>> {
        Ok(Table::read_csv(File::open(&self.input)?)?)
    }

    fn write(&self, table: &Table<String>) -> Result<(), Box<dyn std::error::Error>> {
        match &self.output {
            Some(path) => table.write_csv(File::create(path)?)?,
            None => table.write_csv(io::stdout().lock())?,
        }
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match cli.command {
        Command::Question { table: args, seed } => {
            let cfg = args.config(&cli.log_level);
            debug!("Configuration:\n{cfg:#?}");
            let mut table = args.read()?;
            let mut store = cfg.store();
            present_question(&mut store, &cfg.seed_key, &cfg.plan, &mut table, seed)?;
            args.write(&table)?;
        }
        Command::Answer { table: args, fallback_seed } => {
            let mut cfg = args.config(&cli.log_level);
            cfg.fallback_seed = fallback_seed.or(cfg.fallback_seed);
            debug!("Configuration:\n{cfg:#?}");
            let mut table = args.read()?;
            let store = cfg.store();
            present_answer(&store, &cfg.seed_key, &cfg.plan, &mut table, cfg.fallback_seed)?;
            args.write(&table)?;
        }
        Command::Permute { n, seed } => {
            let (perm, final_seed) = permutation(n, seed);
            let perm: Vec<String> = perm.iter().map(usize::to_string).collect();
            println!("{}", perm.join(" "));
            println!("final seed: {final_seed}");
        }
        Command::Next { seed, count } => {
            let mut seed = seed;
            for _ in 0..count {
                let (value, next_seed) = lcg::next(seed);
                println!("{value:.12} {next_seed}");
                seed = next_seed;
            }
        }
    }

    Ok(())
}
