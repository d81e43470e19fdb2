use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::progress::ProgressLogic;
use crate::core::summary::DashboardSummary;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::views::render_dashboard;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Dashboard) {
        let pool = DbPool::open_ready(&cfg.database)?;
        let state = ProgressLogic::load(&pool, cfg);
        let summary = DashboardSummary::build(&state);
        print!("{}", render_dashboard(&summary, cfg.separator()));
    }

    Ok(())
}
