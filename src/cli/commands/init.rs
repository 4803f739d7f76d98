use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::SqliteStore;
use crate::db::migrate::latest_version;
use crate::errors::AppResult;
use tracing::info;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and its schema
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_str = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing rTimeClock…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &db_str);

    let store = SqliteStore::open(&db_str)?;
    let version = store.schema_version()?;
    info!(version, latest = latest_version(), "schema ready");

    println!("✅ Database initialized at {} (schema v{})", &db_str, version);
    println!("🎉 rTimeClock initialization completed!");
    Ok(())
}
