use predicates::str::contains;
use serde_json::Value;
use std::fs;

mod common;
use common::{init_db, rdt, setup_test_db, temp_out};

fn db_with_one_meal_done(name: &str) -> String {
    let db_path = setup_test_db(name);
    init_db(&db_path);
    rdt()
        .args(["--db", &db_path, "--test", "toggle", "1", "breakfast"])
        .assert()
        .success();
    db_path
}

#[test]
fn export_json_writes_the_record() {
    let db_path = db_with_one_meal_done("export_json");
    let out = temp_out("export_json", "json");

    rdt()
        .args([
            "--db", &db_path, "--test", "export", "--format", "json", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read json");
    let json: Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(json["weeksData"][0]["meals"][0]["completed"], true);
    assert_eq!(json["isReduced"], false);
    assert_eq!(json["currentDay"], 1);
}

#[test]
fn export_csv_has_one_row_per_meal() {
    let db_path = db_with_one_meal_done("export_csv");
    let out = temp_out("export_csv", "csv");

    rdt()
        .args([
            "--db", &db_path, "--test", "export", "--format", "csv", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("week,id,slot,option1,option2,completed")
    );
    assert_eq!(content.lines().count(), 13);
    assert!(content.contains("1-breakfast"));
    assert_eq!(content.matches(",true").count(), 1);
}

#[test]
fn export_xlsx_and_pdf_create_files() {
    let db_path = db_with_one_meal_done("export_binary");

    for ext in ["xlsx", "pdf"] {
        let out = temp_out(&format!("export_binary_{ext}"), ext);
        rdt()
            .args([
                "--db", &db_path, "--test", "export", "--format", ext, "--file", &out,
            ])
            .assert()
            .success();

        let meta = fs::metadata(&out).expect("export file exists");
        assert!(meta.len() > 0);
    }
}

#[test]
fn export_requires_absolute_path() {
    let db_path = db_with_one_meal_done("export_relative");

    rdt()
        .args([
            "--db",
            &db_path,
            "--test",
            "export",
            "--format",
            "csv",
            "--file",
            "relative_out.csv",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn export_overwrite_needs_force() {
    let db_path = db_with_one_meal_done("export_force");
    let out = temp_out("export_force", "csv");
    fs::write(&out, "old").expect("seed file");

    rdt()
        .args([
            "--db", &db_path, "--test", "export", "--format", "csv", "--file", &out,
        ])
        .write_stdin("n\n")
        .assert()
        .failure();
    assert_eq!(fs::read_to_string(&out).expect("read"), "old");

    rdt()
        .args([
            "--db", &db_path, "--test", "export", "--format", "csv", "--file", &out, "--force",
        ])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).expect("read").contains("1-breakfast"));
}

#[test]
fn backup_copies_and_compresses() {
    let db_path = db_with_one_meal_done("backup_src");
    let plain = temp_out("backup_plain", "sqlite");

    rdt()
        .args(["--db", &db_path, "--test", "backup", "--file", &plain])
        .assert()
        .success()
        .stdout(contains("Backup created"));
    assert!(fs::metadata(&plain).is_ok());

    let zipped = temp_out("backup_zip", "sqlite");
    let zip_path = zipped.replace(".sqlite", ".zip");
    fs::remove_file(&zip_path).ok();

    rdt()
        .args([
            "--db", &db_path, "--test", "backup", "--file", &zipped, "--compress",
        ])
        .assert()
        .success();
    assert!(fs::metadata(&zip_path).is_ok());
    assert!(fs::metadata(&zipped).is_err());
}
