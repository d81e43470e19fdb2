// src/export/model.rs

use crate::models::ProgressState;
use serde::Serialize;

/// Flat row used by the CSV / XLSX / PDF exports, one per meal entry.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct MealExport {
    pub week: u8,
    pub id: String,
    pub slot: String,
    pub option1: String,
    pub option2: String,
    pub completed: bool,
}

pub fn meals_for_export(state: &ProgressState) -> Vec<MealExport> {
    state
        .weeks
        .iter()
        .flat_map(|w| {
            w.meals.iter().map(move |m| MealExport {
                week: w.week_number,
                id: m.id.clone(),
                slot: m.slot.code().to_string(),
                option1: m.option_a.clone(),
                option2: m.option_b.clone(),
                completed: m.completed,
            })
        })
        .collect()
}

/// Header for CSV / XLSX / PDF
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["week", "id", "slot", "option1", "option2", "completed"]
}

pub(crate) fn meal_to_row(m: &MealExport) -> Vec<String> {
    vec![
        m.week.to_string(),
        m.id.clone(),
        m.slot.clone(),
        m.option1.clone(),
        m.option2.clone(),
        if m.completed { "yes" } else { "no" }.to_string(),
    ]
}

pub(crate) fn meals_to_table(meals: &[MealExport]) -> Vec<Vec<String>> {
    meals.iter().map(meal_to_row).collect()
}
