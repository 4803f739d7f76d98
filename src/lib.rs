//! rTimeClock library root.
//! Exposes the time-entry engine, its storage port and backends, and the
//! CLI that drives them.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

pub use crate::core::TimeSheet;
pub use crate::core::calculator::hours::calc_hours_at;
pub use crate::core::calculator::range::{DateRange, last_month_range, month_range, week_range};
pub use crate::core::time_source::{Clock, FixedClock, SystemClock};
pub use db::SqliteStore;
pub use store::{ClockStorage, Collection, KeyValueStore, MemoryStore};
pub use utils::formatting::fmt_hours;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Employee { .. } => cli::commands::employee::handle(cli, cfg),
        Commands::In { .. } | Commands::Out { .. } | Commands::Punch { .. } => {
            cli::commands::clock::handle(cli, cfg)
        }
        Commands::Edit { .. } => cli::commands::edit::handle(cli, cfg),
        Commands::Today => cli::commands::today::handle(cli, cfg),
        Commands::List { .. } => cli::commands::list::handle(cli, cfg),
        Commands::Summary { .. } => cli::commands::summary::handle(cli, cfg),
        Commands::Report { .. } => cli::commands::report::handle(cli, cfg),
        Commands::Export { .. } => cli::commands::export::handle(cli, cfg),
    }
}

fn init_tracing(cfg: &Config) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(cfg.tracing_level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load();

    // 3️⃣ command-line database override
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    init_tracing(&cfg);

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
