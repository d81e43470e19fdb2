use super::meal_slot::MealSlot;
use serde::{Deserialize, Serialize};

/// One meal slot of a week, with its two interchangeable food options.
///
/// Field names on the wire follow the persisted record layout
/// (`type`, `option1`, `option2`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub slot: MealSlot,
    #[serde(rename = "option1")]
    pub option_a: String,
    #[serde(rename = "option2")]
    pub option_b: String,
    #[serde(default)]
    pub completed: bool,
}

impl MealEntry {
    /// Build a not-yet-completed entry; the id is derived from week + slot.
    pub fn new(week: u8, slot: MealSlot, option_a: &str, option_b: &str) -> Self {
        Self {
            id: Self::make_id(week, slot),
            slot,
            option_a: option_a.to_string(),
            option_b: option_b.to_string(),
            completed: false,
        }
    }

    /// "1-breakfast", "3-dinner", ...
    pub fn make_id(week: u8, slot: MealSlot) -> String {
        format!("{}-{}", week, slot.code())
    }

    pub fn status_icon(&self) -> &'static str {
        if self.completed { "✔" } else { "○" }
    }
}
