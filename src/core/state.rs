//! Load / save of the progress record.
//!
//! The record is decoded field by field: a missing or malformed field falls
//! back to its fresh value without affecting the others, and an unreadable
//! record falls back to the fresh state as a whole.

use crate::catalog::PLAN_DAYS;
use crate::db::store::LocalStore;
use crate::errors::AppResult;
use crate::models::{ProgressState, WeekPlan};
use crate::ui::messages::warning;
use serde_json::{Map, Value};

/// Serialize the state into the persisted JSON record.
pub fn encode_state(state: &ProgressState) -> AppResult<String> {
    Ok(serde_json::to_string(state)?)
}

/// Decode a persisted record. Never fails.
pub fn decode_state(raw: &str) -> ProgressState {
    let mut state = ProgressState::fresh();

    let obj = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => map,
        _ => return state,
    };

    if let Some(Value::Array(stored)) = obj.get("weeksData") {
        merge_completion(&mut state.weeks, stored);
    }

    state.initial_weight = text_field(&obj, "initialWeight");
    state.current_weight = text_field(&obj, "currentWeight");

    state.reduced_mode_active = obj
        .get("isReduced")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    state.current_day = obj
        .get("currentDay")
        .and_then(Value::as_u64)
        .filter(|d| (1..=PLAN_DAYS as u64).contains(d))
        .map(|d| d as u8)
        .unwrap_or(1);

    state
}

/// Copy completion flags from the stored week list onto the catalog weeks.
/// Only `week`, `id` and `completed` are read; entries missing one of them,
/// or naming a week / meal the catalog does not have, are skipped one by one.
fn merge_completion(weeks: &mut [WeekPlan], stored: &[Value]) {
    for stored_week in stored {
        let Some(number) = stored_week.get("week").and_then(Value::as_u64) else {
            continue;
        };
        let Some(week) = weeks.iter_mut().find(|w| u64::from(w.week_number) == number) else {
            continue;
        };
        let Some(meals) = stored_week.get("meals").and_then(Value::as_array) else {
            continue;
        };

        for stored_meal in meals {
            let id = stored_meal.get("id").and_then(Value::as_str);
            let completed = stored_meal.get("completed").and_then(Value::as_bool);

            if let (Some(id), Some(completed)) = (id, completed)
                && let Some(meal) = week.meal_by_id_mut(id)
            {
                meal.completed = completed;
            }
        }
    }
}

/// Weight fields are text; numbers written by other tools are accepted too.
fn text_field(obj: &Map<String, Value>, key: &str) -> String {
    match obj.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Load the state stored under `key`, or the fresh state when there is none.
/// A store read failure is reported and treated as "no record".
pub fn load_state<S: LocalStore + ?Sized>(store: &S, key: &str) -> ProgressState {
    match store.get(key) {
        Ok(Some(raw)) => decode_state(&raw),
        Ok(None) => ProgressState::fresh(),
        Err(e) => {
            warning(format!("Could not read saved progress ({}); starting fresh.", e));
            ProgressState::fresh()
        }
    }
}

/// Write the whole state under `key`.
pub fn save_state<S: LocalStore + ?Sized>(
    store: &mut S,
    key: &str,
    state: &ProgressState,
) -> AppResult<()> {
    let raw = encode_state(state)?;
    store.set(key, &raw)
}

/// Best-effort save: a failure is reported, the in-memory state stays
/// authoritative for the rest of the command. Returns whether it was saved.
pub fn persist<S: LocalStore + ?Sized>(store: &mut S, key: &str, state: &ProgressState) -> bool {
    match save_state(store, key, state) {
        Ok(()) => true,
        Err(e) => {
            warning(format!("Progress could not be saved: {}", e));
            false
        }
    }
}
