use super::meal::MealEntry;
use super::meal_slot::MealSlot;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekPlan {
    #[serde(rename = "week")]
    pub week_number: u8,
    pub meals: Vec<MealEntry>,
}

impl WeekPlan {
    pub fn meal(&self, slot: MealSlot) -> Option<&MealEntry> {
        self.meals.iter().find(|m| m.slot == slot)
    }

    pub fn meal_by_id_mut(&mut self, id: &str) -> Option<&mut MealEntry> {
        self.meals.iter_mut().find(|m| m.id == id)
    }

    pub fn completed_count(&self) -> usize {
        self.meals.iter().filter(|m| m.completed).count()
    }

    pub fn is_complete(&self) -> bool {
        !self.meals.is_empty() && self.meals.iter().all(|m| m.completed)
    }
}
