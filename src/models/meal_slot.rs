use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Snack,
    Dinner,
}

impl MealSlot {
    /// Slots in the order they appear within a day.
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Snack,
        MealSlot::Dinner,
    ];

    /// Convert enum → stored code (also used to build meal ids)
    pub fn code(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Snack => "snack",
            MealSlot::Dinner => "dinner",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Snack => "Snack",
            MealSlot::Dinner => "Dinner",
        }
    }

    /// Label as printed in the plan booklet.
    pub fn label_pt(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Café da Manhã",
            MealSlot::Lunch => "Almoço",
            MealSlot::Snack => "Lanche",
            MealSlot::Dinner => "Jantar",
        }
    }
}
