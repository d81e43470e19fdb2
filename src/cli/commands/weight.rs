use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::progress::{ProgressLogic, WeightUpdate};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::ui::views::render_weights;
use crate::utils::weight::parse_weight;

/// Show the weights, or update them when `--initial` / `--current` is given.
/// Any text is stored as typed; a non-numeric value only gets a warning.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Weight { initial, current } = cmd {
        let mut pool = DbPool::open_ready(&cfg.database)?;

        let update = WeightUpdate {
            initial: initial.clone(),
            current: current.clone(),
        };

        for value in [&update.initial, &update.current].into_iter().flatten() {
            if !value.trim().is_empty() && parse_weight(value).is_none() {
                warning(format!("'{}' is not a number: weight loss will be unavailable.", value));
            }
        }

        let changed = !update.is_empty();
        let state = ProgressLogic::set_weights(&mut pool, cfg, update);

        if changed {
            success("Weights updated.");
        }
        print!("{}", render_weights(&state));
    }

    Ok(())
}
