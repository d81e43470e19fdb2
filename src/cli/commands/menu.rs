use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::progress::ProgressLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::views::render_menu;

/// Print one week of the rotation. Without `--week` the week of the
/// current plan day is shown.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Menu { week } = cmd {
        let pool = DbPool::open_ready(&cfg.database)?;
        let state = ProgressLogic::load(&pool, cfg);

        let number = week.unwrap_or_else(|| state.current_week_number());
        let plan = state.week(number).ok_or(AppError::InvalidWeek(number))?;

        print!(
            "{}",
            render_menu(
                plan,
                state.reduced_mode_active,
                cfg.wrap_width,
                cfg.separator()
            )
        );
    }

    Ok(())
}
