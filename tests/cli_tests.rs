use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db, rdt, setup_test_db};

#[test]
fn init_creates_a_fresh_plan() {
    let db_path = setup_test_db("cli_init");

    rdt()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Fresh 21-day plan stored."));

    // a second init keeps the stored progress
    rdt()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Existing progress found"));
}

#[test]
fn dashboard_on_fresh_plan() {
    let db_path = setup_test_db("cli_dashboard_fresh");
    init_db(&db_path);

    rdt()
        .args(["--db", &db_path, "--test", "dashboard"])
        .assert()
        .success()
        .stdout(contains("1/21"))
        .stdout(contains("0/12 (0%)"))
        .stdout(contains("unavailable"))
        .stdout(contains("R$ 9,50"))
        .stdout(contains("84 planned meals"))
        .stdout(contains("Reduced mode active").not());
}

#[test]
fn toggle_twice_restores_pending() {
    let db_path = setup_test_db("cli_toggle");
    init_db(&db_path);

    rdt()
        .args(["--db", &db_path, "--test", "toggle", "1", "breakfast"])
        .assert()
        .success()
        .stdout(contains("(1-breakfast) marked as done."))
        .stdout(contains("Meals done: 1/12"));

    rdt()
        .args(["--db", &db_path, "--test", "status"])
        .assert()
        .success()
        .stdout(contains("1/12 (8%)"));

    rdt()
        .args(["--db", &db_path, "--test", "toggle", "1", "breakfast"])
        .assert()
        .success()
        .stdout(contains("marked as pending."))
        .stdout(contains("Meals done: 0/12"));
}

#[test]
fn toggle_rejects_unknown_week_and_slot() {
    let db_path = setup_test_db("cli_toggle_invalid");
    init_db(&db_path);

    rdt()
        .args(["--db", &db_path, "--test", "toggle", "4", "lunch"])
        .assert()
        .failure();

    rdt()
        .args(["--db", &db_path, "--test", "toggle", "1", "brunch"])
        .assert()
        .failure();
}

#[test]
fn menu_shows_the_week() {
    let db_path = setup_test_db("cli_menu");
    init_db(&db_path);

    rdt()
        .args(["--db", &db_path, "--test", "toggle", "2", "snack"])
        .assert()
        .success();

    rdt()
        .args(["--db", &db_path, "--test", "menu", "--week", "2"])
        .assert()
        .success()
        .stdout(contains("Week 2"))
        .stdout(contains("[2-snack] done"))
        .stdout(contains("[2-lunch] pending"))
        .stdout(contains("1 of 4 meals done this week."));

    // without --week the week of the current day is shown
    rdt()
        .args(["--db", &db_path, "--test", "menu"])
        .assert()
        .success()
        .stdout(contains("Week 1"))
        .stdout(contains("[1-breakfast]"));
}

#[test]
fn weight_updates_and_delta() {
    let db_path = setup_test_db("cli_weight");
    init_db(&db_path);

    rdt()
        .args([
            "--db",
            &db_path,
            "--test",
            "weight",
            "--initial",
            "80",
            "--current",
            "75,5",
        ])
        .assert()
        .success()
        .stdout(contains("Weights updated."))
        .stdout(contains("4.5 kg"));

    rdt()
        .args(["--db", &db_path, "--test", "weight", "--current", "abc"])
        .assert()
        .success()
        .stderr(contains("is not a number"))
        .stdout(contains("Weight loss:    unavailable"));

    rdt()
        .args(["--db", &db_path, "--test", "weight"])
        .assert()
        .success()
        .stdout(contains("Initial weight: 80 kg"))
        .stdout(contains("abc (not a number)"));
}

#[test]
fn day_counter() {
    let db_path = setup_test_db("cli_day");
    init_db(&db_path);

    rdt()
        .args(["--db", &db_path, "--test", "day", "--set", "7"])
        .assert()
        .success()
        .stdout(contains("Day 7/21 (week 1"));

    rdt()
        .args(["--db", &db_path, "--test", "day", "--next"])
        .assert()
        .success()
        .stdout(contains("Day 8/21 (week 2"));

    rdt()
        .args(["--db", &db_path, "--test", "day", "--set", "22"])
        .assert()
        .failure()
        .stderr(contains("Invalid plan day: 22"));

    rdt()
        .args(["--db", &db_path, "--test", "day"])
        .assert()
        .success()
        .stdout(contains("Day 8/21"));
}

#[test]
fn cycle_resets_and_reduces() {
    let db_path = setup_test_db("cli_cycle");
    init_db(&db_path);

    for slot in ["breakfast", "dinner"] {
        rdt()
            .args(["--db", &db_path, "--test", "toggle", "3", slot])
            .assert()
            .success();
    }
    rdt()
        .args(["--db", &db_path, "--test", "weight", "--initial", "90"])
        .assert()
        .success();

    rdt()
        .args(["--db", &db_path, "--test", "cycle", "--yes"])
        .assert()
        .success()
        .stdout(contains("New cycle started on day 1"));

    rdt()
        .args(["--db", &db_path, "--test", "dashboard"])
        .assert()
        .success()
        .stdout(contains("0/12"))
        .stdout(contains("90 kg"))
        .stdout(contains("Reduced mode active"));

    rdt()
        .args(["--db", &db_path, "--test", "reduction"])
        .assert()
        .success()
        .stdout(contains("Reduced mode is active"));
}

#[test]
fn cycle_without_confirmation_is_cancelled() {
    let db_path = setup_test_db("cli_cycle_cancel");
    init_db(&db_path);

    rdt()
        .args(["--db", &db_path, "--test", "cycle"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("New cycle cancelled."));

    rdt()
        .args(["--db", &db_path, "--test", "reduction"])
        .assert()
        .success()
        .stdout(contains("rdiettracker cycle"));
}

#[test]
fn reference_screens() {
    let db_path = setup_test_db("cli_reference");
    init_db(&db_path);

    rdt()
        .args(["--db", &db_path, "--test", "tips"])
        .assert()
        .success()
        .stdout(contains("Allowed seasonings"))
        .stdout(contains("Preparation methods"));

    rdt()
        .args(["--db", &db_path, "--test", "costs", "--shopping"])
        .assert()
        .success()
        .stdout(contains("R$ 199,50"))
        .stdout(contains("35 ovos"))
        .stdout(contains("105 ovos"))
        .stdout(contains("5,25 kg de frango"));
}

#[test]
fn log_records_changes() {
    let db_path = setup_test_db("cli_log");
    init_db(&db_path);

    rdt()
        .args(["--db", &db_path, "--test", "toggle", "1", "lunch"])
        .assert()
        .success();

    rdt()
        .args(["--db", &db_path, "--test", "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("1-lunch"))
        .stdout(contains("Meal marked as done"));
}

#[test]
fn db_info_and_check() {
    let db_path = setup_test_db("cli_db_info");
    init_db(&db_path);

    rdt()
        .args(["--db", &db_path, "--test", "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("dietAppData"))
        .stdout(contains("Integrity check passed."));
}

#[test]
fn relative_db_path_is_taken_from_working_dir() {
    let work_dir = std::env::temp_dir().join("cli_relative_db_dir");
    std::fs::create_dir_all(&work_dir).expect("work dir");
    let db_file = work_dir.join("relative_diet.sqlite");
    std::fs::remove_file(&db_file).ok();

    rdt()
        .current_dir(&work_dir)
        .args(["--db", "relative_diet.sqlite", "--test", "init"])
        .assert()
        .success();
    assert!(db_file.exists());

    rdt()
        .current_dir(&work_dir)
        .args(["--db", "./relative_diet.sqlite", "--test", "toggle", "2", "dinner"])
        .assert()
        .success()
        .stdout(contains("(2-dinner) marked as done."));

    rdt()
        .args(["--db", &db_file.to_string_lossy(), "--test", "dashboard"])
        .assert()
        .success()
        .stdout(contains("1/12"));
}
