use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::state::save_state;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::store::LocalStore;
use crate::errors::AppResult;
use crate::models::ProgressState;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and all pending migrations
///  - a fresh progress record, unless one is already stored
pub fn handle(cli: &Cli) -> AppResult<()> {
    //
    // 1️⃣ CONFIGURATION
    //
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;

    let mut cfg = if cli.test {
        Config::default()
    } else {
        Config::load()?
    };
    cfg.database = db_path;

    println!("⚙️  Initializing rDietTracker…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &cfg.database);

    //
    // 2️⃣ DATABASE (tables + migrations)
    //
    let mut pool = DbPool::open_ready(&cfg.database)?;

    //
    // 3️⃣ PROGRESS RECORD
    //
    if pool.get(&cfg.store_key)?.is_some() {
        info("Existing progress found: keeping it.");
    } else {
        save_state(&mut pool, &cfg.store_key, &ProgressState::fresh())?;
        success("Fresh 21-day plan stored.");
    }

    //
    // 4️⃣ INTERNAL LOG (non-blocking)
    //
    ttlog_quiet(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &cfg.database),
    );

    println!("🎉 rDietTracker initialization completed!");
    Ok(())
}
