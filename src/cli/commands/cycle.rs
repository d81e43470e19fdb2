use crate::catalog::REDUCTION_PERCENT;
use crate::cli::commands::ask_confirmation;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::progress::ProgressLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Cycle { yes } = cmd {
        let prompt = format!(
            "Start a new cycle? All meal check-offs are cleared and portions are reduced by {}%.",
            REDUCTION_PERCENT
        );
        if !*yes && !ask_confirmation(&prompt) {
            info("New cycle cancelled.");
            return Ok(());
        }

        let mut pool = DbPool::open_ready(&cfg.database)?;
        let state = ProgressLogic::start_new_cycle(&mut pool, cfg);

        success(format!(
            "New cycle started on day {}: portions reduced by {}%.",
            state.current_day, REDUCTION_PERCENT
        ));
    }

    Ok(())
}
