use crate::catalog::WEEK_COUNT;
use crate::config::Config;
use crate::core::state::{load_state, persist};
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::{MealEntry, MealSlot, ProgressState};

/// Tracker mutations as run by the CLI: load, mutate, persist, audit.
pub struct ProgressLogic;

/// Outcome of a toggle request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    Toggled { meal_id: String, completed: bool },
    NotFound { meal_id: String },
}

/// Which weight fields to overwrite. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct WeightUpdate {
    pub initial: Option<String>,
    pub current: Option<String>,
}

impl WeightUpdate {
    pub fn is_empty(&self) -> bool {
        self.initial.is_none() && self.current.is_none()
    }
}

/// How the day counter should change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayChange {
    Set(u8),
    Next,
}

impl ProgressLogic {
    pub fn load(pool: &DbPool, cfg: &Config) -> ProgressState {
        load_state(pool, &cfg.store_key)
    }

    fn save(
        pool: &mut DbPool,
        cfg: &Config,
        state: &ProgressState,
        op: &str,
        target: &str,
        msg: &str,
    ) {
        if persist(pool, &cfg.store_key, state) {
            ttlog_quiet(&pool.conn, op, target, msg);
        }
    }

    pub fn toggle(
        pool: &mut DbPool,
        cfg: &Config,
        week_number: u8,
        slot: MealSlot,
    ) -> AppResult<(ProgressState, ToggleOutcome)> {
        if !(1..=WEEK_COUNT).contains(&week_number) {
            return Err(AppError::InvalidWeek(week_number));
        }

        let mut state = Self::load(pool, cfg);
        let meal_id = MealEntry::make_id(week_number, slot);

        let toggled = state
            .week_index(week_number)
            .and_then(|idx| state.toggle_completion(idx, &meal_id));

        let outcome = match toggled {
            Some(completed) => {
                let msg = if completed {
                    "Meal marked as done"
                } else {
                    "Meal marked as pending"
                };
                Self::save(pool, cfg, &state, "toggle", &meal_id, msg);
                ToggleOutcome::Toggled { meal_id, completed }
            }
            None => ToggleOutcome::NotFound { meal_id },
        };

        Ok((state, outcome))
    }

    pub fn set_weights(pool: &mut DbPool, cfg: &Config, update: WeightUpdate) -> ProgressState {
        let mut state = Self::load(pool, cfg);
        if update.is_empty() {
            return state;
        }

        let mut changed = Vec::new();
        if let Some(v) = update.initial {
            changed.push(format!("initial='{}'", v));
            state.set_initial_weight(v);
        }
        if let Some(v) = update.current {
            changed.push(format!("current='{}'", v));
            state.set_current_weight(v);
        }

        Self::save(pool, cfg, &state, "weight", "", &changed.join(", "));
        state
    }

    pub fn change_day(
        pool: &mut DbPool,
        cfg: &Config,
        change: DayChange,
    ) -> AppResult<ProgressState> {
        let mut state = Self::load(pool, cfg);

        match change {
            DayChange::Set(day) => state.set_current_day(day)?,
            DayChange::Next => {
                state.advance_day();
            }
        }

        let target = state.current_day.to_string();
        Self::save(pool, cfg, &state, "day", &target, "Plan day updated");
        Ok(state)
    }

    pub fn start_new_cycle(pool: &mut DbPool, cfg: &Config) -> ProgressState {
        let mut state = Self::load(pool, cfg);
        state.start_new_cycle();
        Self::save(
            pool,
            cfg,
            &state,
            "cycle",
            "reduced",
            "New cycle started with reduced portions",
        );
        state
    }
}
