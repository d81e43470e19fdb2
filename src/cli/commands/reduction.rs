use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::progress::ProgressLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::views::render_reduction;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Reduction) {
        let pool = DbPool::open_ready(&cfg.database)?;
        let state = ProgressLogic::load(&pool, cfg);
        print!(
            "{}",
            render_reduction(state.reduced_mode_active, cfg.separator())
        );
    }
    Ok(())
}
