use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::progress::{ProgressLogic, ToggleOutcome};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::formatting::ratio;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Toggle { week, slot } = cmd {
        let mut pool = DbPool::open_ready(&cfg.database)?;
        let (state, outcome) = ProgressLogic::toggle(&mut pool, cfg, *week, *slot)?;

        match outcome {
            ToggleOutcome::Toggled { meal_id, completed } => {
                if completed {
                    success(format!("{} ({}) marked as done.", slot.label(), meal_id));
                } else {
                    success(format!("{} ({}) marked as pending.", slot.label(), meal_id));
                }
                println!(
                    "🍽️  Meals done: {}",
                    ratio(state.count_completed_meals(), state.total_meals())
                );
            }
            ToggleOutcome::NotFound { meal_id } => {
                warning(format!("Meal '{}' not found: nothing changed.", meal_id));
            }
        }
    }

    Ok(())
}
