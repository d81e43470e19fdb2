//! Progress tracker state.
//!
//! `ProgressState` is the only mutable data in the application. It is owned
//! by the caller, mutated through the methods below and persisted explicitly
//! afterwards (see `core::state`).

use super::week::WeekPlan;
use crate::catalog::{self, PLAN_DAYS};
use crate::errors::{AppError, AppResult};
use crate::utils::weight::parse_weight;
use serde::Serialize;

/// Serialized with the persisted record layout
/// (`weeksData`, `initialWeight`, `currentWeight`, `isReduced`, `currentDay`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressState {
    #[serde(rename = "weeksData")]
    pub weeks: Vec<WeekPlan>,
    pub initial_weight: String,
    pub current_weight: String,
    #[serde(rename = "isReduced")]
    pub reduced_mode_active: bool,
    pub current_day: u8,
}

impl Default for ProgressState {
    fn default() -> Self {
        Self::fresh()
    }
}

impl ProgressState {
    /// First-run state: catalog weeks, nothing completed, no weights, day 1.
    pub fn fresh() -> Self {
        Self {
            weeks: catalog::initial_weeks(),
            initial_weight: String::new(),
            current_weight: String::new(),
            reduced_mode_active: false,
            current_day: 1,
        }
    }

    /// Flip the completion flag of `meal_id` inside the week at `week_index`
    /// (0-based). Returns the new flag, or `None` when no such meal exists,
    /// in which case nothing changes.
    pub fn toggle_completion(&mut self, week_index: usize, meal_id: &str) -> Option<bool> {
        let meal = self.weeks.get_mut(week_index)?.meal_by_id_mut(meal_id)?;
        meal.completed = !meal.completed;
        Some(meal.completed)
    }

    pub fn count_completed_meals(&self) -> usize {
        self.weeks.iter().map(WeekPlan::completed_count).sum()
    }

    /// Number of modeled meal entries (12 for the three-week rotation).
    pub fn total_meals(&self) -> usize {
        self.weeks.iter().map(|w| w.meals.len()).sum()
    }

    /// `initial - current`, only when both weights parse. A zero delta is a
    /// real value; `None` means "not available yet".
    pub fn compute_weight_delta(&self) -> Option<f64> {
        let initial = parse_weight(&self.initial_weight)?;
        let current = parse_weight(&self.current_weight)?;
        Some(initial - current)
    }

    pub fn set_initial_weight(&mut self, value: impl Into<String>) {
        self.initial_weight = value.into();
    }

    pub fn set_current_weight(&mut self, value: impl Into<String>) {
        self.current_weight = value.into();
    }

    /// Restart the plan with reduced portions. Weights are kept.
    pub fn start_new_cycle(&mut self) {
        self.weeks = catalog::initial_weeks();
        self.reduced_mode_active = true;
        self.current_day = 1;
    }

    pub fn set_current_day(&mut self, day: u8) -> AppResult<()> {
        if !(1..=PLAN_DAYS).contains(&day) {
            return Err(AppError::InvalidDay(day));
        }
        self.current_day = day;
        Ok(())
    }

    /// Move to the next plan day, staying on the last one once reached.
    pub fn advance_day(&mut self) -> u8 {
        self.current_day = self.current_day.saturating_add(1).min(PLAN_DAYS);
        self.current_day
    }

    /// Rotation week (1..=3) the current day falls into.
    pub fn current_week_number(&self) -> u8 {
        let day = self.current_day.clamp(1, PLAN_DAYS);
        (day - 1) / 7 + 1
    }

    /// Week by number (1-based).
    pub fn week(&self, number: u8) -> Option<&WeekPlan> {
        self.weeks.iter().find(|w| w.week_number == number)
    }

    /// 0-based position of a week inside the state, as expected by
    /// `toggle_completion`.
    pub fn week_index(&self, number: u8) -> Option<usize> {
        self.weeks.iter().position(|w| w.week_number == number)
    }
}
