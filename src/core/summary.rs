use crate::catalog::{self, PLAN_DAYS, PLANNED_MEALS};
use crate::models::ProgressState;

/// Aggregated progress figures shown on the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub current_day: u8,
    pub plan_days: u8,
    pub completed_meals: usize,
    pub total_meals: usize,
    pub planned_meals: usize,
    pub weeks_completed: usize,
    pub initial_weight: String,
    pub current_weight: String,
    pub weight_delta: Option<f64>,
    pub daily_cost_cents: u32,
    pub reduced_mode_active: bool,
}

impl DashboardSummary {
    pub fn build(state: &ProgressState) -> Self {
        Self {
            current_day: state.current_day,
            plan_days: PLAN_DAYS,
            completed_meals: state.count_completed_meals(),
            total_meals: state.total_meals(),
            planned_meals: PLANNED_MEALS,
            weeks_completed: state.weeks.iter().filter(|w| w.is_complete()).count(),
            initial_weight: state.initial_weight.clone(),
            current_weight: state.current_weight.clone(),
            weight_delta: state.compute_weight_delta(),
            daily_cost_cents: catalog::daily_cost_cents(),
            reduced_mode_active: state.reduced_mode_active,
        }
    }

    /// Completed share of the modeled meals, 0..=100.
    pub fn completion_percent(&self) -> u8 {
        if self.total_meals == 0 {
            return 0;
        }
        ((self.completed_meals * 100) / self.total_meals) as u8
    }
}
