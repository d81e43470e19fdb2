use rdiettracker::config::migrate::{migrate_config_file, missing_keys};
use rdiettracker::config::{Config, DEFAULT_STORE_KEY};
use std::env;
use std::fs;
use std::path::PathBuf;

fn temp_conf(name: &str) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("{}_rdiettracker.conf", name));
    fs::remove_file(&path).ok();
    path
}

#[test]
fn missing_file_loads_defaults() {
    let path = temp_conf("config_missing");
    let cfg = Config::load_from(&path).expect("defaults");

    assert_eq!(cfg.store_key, DEFAULT_STORE_KEY);
    assert_eq!(cfg.separator(), '-');
    assert_eq!(cfg.wrap_width, 60);
}

#[test]
fn old_file_gets_missing_keys() {
    let path = temp_conf("config_old");
    fs::write(&path, "database: /tmp/old_diet.sqlite\n").expect("write conf");

    let missing = missing_keys(&path).expect("check");
    assert!(missing.contains(&"store_key".to_string()));
    assert!(missing.contains(&"wrap_width".to_string()));
    assert!(!missing.contains(&"database".to_string()));

    let added = migrate_config_file(&path).expect("migrate");
    assert_eq!(added.len(), missing.len());
    assert!(missing_keys(&path).expect("recheck").is_empty());

    let cfg = Config::load_from(&path).expect("load");
    assert_eq!(cfg.database, "/tmp/old_diet.sqlite");
    assert_eq!(cfg.store_key, DEFAULT_STORE_KEY);

    // second run has nothing to add
    assert!(migrate_config_file(&path).expect("migrate again").is_empty());
}

#[test]
fn save_and_load_round_trip() {
    let path = temp_conf("config_round_trip");
    let cfg = Config {
        database: "/tmp/diet.sqlite".into(),
        separator_char: "=".into(),
        wrap_width: 40,
        ..Config::default()
    };

    cfg.save_to(&path).expect("save");
    assert_eq!(Config::load_from(&path).expect("load"), cfg);
    assert_eq!(cfg.separator(), '=');
}

#[test]
fn db_path_resolution() {
    use rdiettracker::utils::path::resolve_db_path;

    let cwd = env::current_dir().expect("cwd");
    assert_eq!(
        resolve_db_path("x.sqlite"),
        cwd.join("x.sqlite").to_string_lossy()
    );
    assert_eq!(resolve_db_path("/tmp/abs.sqlite"), "/tmp/abs.sqlite");
}
