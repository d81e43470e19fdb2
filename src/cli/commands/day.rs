use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::progress::{DayChange, ProgressLogic};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::views::render_day;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Day { set, next } = cmd {
        let mut pool = DbPool::open_ready(&cfg.database)?;

        let change = match (set, next) {
            (Some(day), _) => Some(DayChange::Set(*day)),
            (None, true) => Some(DayChange::Next),
            (None, false) => None,
        };

        let state = match change {
            Some(change) => ProgressLogic::change_day(&mut pool, cfg, change)?,
            None => ProgressLogic::load(&pool, cfg),
        };

        print!("{}", render_day(&state));
    }

    Ok(())
}
