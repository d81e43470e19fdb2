use rdiettracker::catalog::{self, PLAN_DAYS};
use rdiettracker::errors::AppError;
use rdiettracker::models::{MealEntry, MealSlot, ProgressState};

#[test]
fn fresh_state_has_nothing_done() {
    let state = ProgressState::fresh();

    assert_eq!(state.weeks.len(), 3);
    assert_eq!(state.total_meals(), 12);
    assert_eq!(state.count_completed_meals(), 0);
    assert_eq!(state.current_day, 1);
    assert!(!state.reduced_mode_active);
    assert!(state.initial_weight.is_empty());
    assert!(state.current_weight.is_empty());
    assert_eq!(state.compute_weight_delta(), None);
}

#[test]
fn toggle_marks_and_unmarks_a_meal() {
    let mut state = ProgressState::fresh();

    assert_eq!(state.toggle_completion(0, "1-breakfast"), Some(true));
    assert_eq!(state.count_completed_meals(), 1);
    assert!(state.weeks[0].meals[0].completed);

    assert_eq!(state.toggle_completion(0, "1-breakfast"), Some(false));
    assert_eq!(state, ProgressState::fresh());
}

#[test]
fn toggle_unknown_meal_changes_nothing() {
    let mut state = ProgressState::fresh();

    assert_eq!(state.toggle_completion(0, "2-lunch"), None);
    assert_eq!(state.toggle_completion(7, "1-breakfast"), None);
    assert_eq!(state.toggle_completion(0, "1-brunch"), None);
    assert_eq!(state, ProgressState::fresh());
}

#[test]
fn toggle_only_touches_the_target_meal() {
    let mut state = ProgressState::fresh();
    state.toggle_completion(1, "2-snack");

    let done: Vec<&str> = state
        .weeks
        .iter()
        .flat_map(|w| w.meals.iter())
        .filter(|m| m.completed)
        .map(|m| m.id.as_str())
        .collect();
    assert_eq!(done, vec!["2-snack"]);
}

#[test]
fn completed_count_stays_within_bounds() {
    let mut state = ProgressState::fresh();

    for (idx, week) in catalog::initial_weeks().iter().enumerate() {
        for meal in &week.meals {
            state.toggle_completion(idx, &meal.id);
            assert!(state.count_completed_meals() <= state.total_meals());
        }
    }

    assert_eq!(state.count_completed_meals(), 12);
    assert!(state.weeks.iter().all(|w| w.is_complete()));
}

#[test]
fn weight_delta_examples() {
    let mut state = ProgressState::fresh();

    state.set_initial_weight("80");
    state.set_current_weight("75");
    assert_eq!(state.compute_weight_delta(), Some(5.0));

    state.set_initial_weight("70");
    assert_eq!(state.compute_weight_delta(), Some(-5.0));

    state.set_current_weight("70");
    assert_eq!(state.compute_weight_delta(), Some(0.0));
}

#[test]
fn weight_delta_unavailable_without_both_numbers() {
    let mut state = ProgressState::fresh();

    state.set_initial_weight("80");
    assert_eq!(state.compute_weight_delta(), None);

    state.set_current_weight("abc");
    assert_eq!(state.compute_weight_delta(), None);

    state.set_current_weight("");
    assert_eq!(state.compute_weight_delta(), None);
}

#[test]
fn weight_accepts_decimal_comma() {
    let mut state = ProgressState::fresh();
    state.set_initial_weight("82,5");
    state.set_current_weight(" 80.0 ");

    let delta = state.compute_weight_delta().expect("delta");
    assert!((delta - 2.5).abs() < 1e-9);
}

#[test]
fn new_cycle_resets_meals_and_day_but_keeps_weights() {
    let mut state = ProgressState::fresh();
    state.toggle_completion(0, "1-breakfast");
    state.toggle_completion(2, "3-dinner");
    state.set_initial_weight("90");
    state.set_current_weight("86");
    state.set_current_day(15).expect("valid day");

    state.start_new_cycle();

    assert_eq!(state.count_completed_meals(), 0);
    assert!(state.reduced_mode_active);
    assert_eq!(state.current_day, 1);
    assert_eq!(state.initial_weight, "90");
    assert_eq!(state.current_weight, "86");
    assert_eq!(state.weeks, catalog::initial_weeks());
}

#[test]
fn new_cycle_is_idempotent() {
    let mut once = ProgressState::fresh();
    once.toggle_completion(1, "2-lunch");
    once.start_new_cycle();

    let mut twice = once.clone();
    twice.start_new_cycle();

    assert_eq!(once, twice);
}

#[test]
fn day_counter_limits() {
    let mut state = ProgressState::fresh();

    assert!(matches!(state.set_current_day(0), Err(AppError::InvalidDay(0))));
    assert!(matches!(
        state.set_current_day(22),
        Err(AppError::InvalidDay(22))
    ));
    assert_eq!(state.current_day, 1);

    state.set_current_day(20).expect("valid day");
    assert_eq!(state.advance_day(), 21);
    assert_eq!(state.advance_day(), PLAN_DAYS);
}

#[test]
fn current_week_follows_the_day() {
    let mut state = ProgressState::fresh();

    for (day, week) in [(1, 1), (7, 1), (8, 2), (14, 2), (15, 3), (21, 3)] {
        state.set_current_day(day).expect("valid day");
        assert_eq!(state.current_week_number(), week, "day {day}");
    }
}

#[test]
fn meal_ids_follow_week_and_slot() {
    assert_eq!(MealEntry::make_id(1, MealSlot::Breakfast), "1-breakfast");
    assert_eq!(MealEntry::make_id(3, MealSlot::Dinner), "3-dinner");

    let state = ProgressState::fresh();
    for week in &state.weeks {
        for slot in MealSlot::ALL {
            let meal = week.meal(slot).expect("slot present");
            assert_eq!(meal.id, MealEntry::make_id(week.week_number, slot));
        }
    }
    assert_eq!(state.week_index(2), Some(1));
    assert_eq!(state.week_index(4), None);
}
