use crate::db::pool::DbPool;
use crate::db::store::{LocalStore, last_updated};
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::path::file_size;
use std::path::Path;

pub fn print_db_info(pool: &mut DbPool, db_path: &str, store_key: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let size = file_size(Path::new(db_path));
    let kb = (size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, kb);

    //
    // 2) STORED RECORD
    //
    match pool.get(store_key)? {
        Some(raw) => {
            println!(
                "{}• Progress record:{} {}{}{} ({} bytes)",
                CYAN,
                RESET,
                GREEN,
                store_key,
                RESET,
                raw.len()
            );
            let updated = last_updated(pool, store_key)?.unwrap_or_else(|| "--".into());
            println!("{}• Last update:{} {}", CYAN, RESET, updated);
        }
        None => {
            println!(
                "{}• Progress record:{} {}none (fresh state){}",
                CYAN, RESET, GREY, RESET
            );
        }
    }

    //
    // 3) LOG ROWS
    //
    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))?;
    println!("{}• Log entries:{} {}{}{}", CYAN, RESET, GREEN, count, RESET);

    println!();
    Ok(())
}
