pub mod meal;
pub mod meal_slot;
pub mod progress;
pub mod week;

pub use meal::MealEntry;
pub use meal_slot::MealSlot;
pub use progress::ProgressState;
pub use week::WeekPlan;
