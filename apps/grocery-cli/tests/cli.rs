//! Integration tests for the `grocery` binary.
//!
//! Each test points the binary at a fresh database file in a temp dir.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

struct Fixture {
    _dir: TempDir,
    db: std::path::PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let db = dir.path().join("grocery.db");
        Fixture { _dir: dir, db }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("grocery").unwrap();
        cmd.env("GROCERY_DB_PATH", &self.db)
            .env_remove("GROCERY_PERMISSIVE_TITLES")
            .env("GROCERY_LOG", "off");
        cmd
    }
}

#[test]
fn test_help_flag() {
    Command::cargo_bin("grocery")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("essentials"))
        .stdout(predicate::str::contains("--db"));
}

#[test]
fn test_empty_list_shows_empty_state() {
    let fx = Fixture::new();

    fx.cmd()
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Empty Cart"))
        .stdout(predicate::str::contains("grocery essentials"));
}

#[test]
fn test_items_persist_between_runs_in_order() {
    let fx = Fixture::new();

    fx.cmd().args(["add", "Milk"]).assert().success();
    fx.cmd().args(["add", "Whole", "Wheat", "Bread"]).assert().success();

    fx.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout("Grocery List\n  1. [ ] Milk\n  2. [ ] Whole Wheat Bread\n");
}

#[test]
fn test_toggle_by_number_twice_restores_state() {
    let fx = Fixture::new();
    fx.cmd().args(["add", "Milk"]).assert().success();

    fx.cmd()
        .args(["toggle", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  1. [x] Milk"));

    fx.cmd()
        .args(["toggle", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  1. [ ] Milk"));
}

#[test]
fn test_delete_missing_item_exits_not_found() {
    let fx = Fixture::new();
    fx.cmd().args(["add", "Milk"]).assert().success();

    fx.cmd()
        .args(["delete", "5"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Item not found"));

    fx.cmd()
        .args(["delete", "550e8400-e29b-41d4-a716-446655440000"])
        .assert()
        .code(2);
}

#[test]
fn test_delete_then_list() {
    let fx = Fixture::new();
    fx.cmd().args(["add", "Milk"]).assert().success();
    fx.cmd().args(["add", "Eggs"]).assert().success();

    fx.cmd()
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Deleted: Milk\n"));

    fx.cmd()
        .assert()
        .success()
        .stdout("Grocery List\n  1. [ ] Eggs\n");
}

#[test]
fn test_empty_add_is_rejected() {
    let fx = Fixture::new();

    fx.cmd()
        .args(["add", ""])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Nothing to add"));

    fx.cmd()
        .args(["add", "   "])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("title is required"));

    fx.cmd()
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Empty Cart"));
}

#[test]
fn test_whitespace_title_allowed_when_permissive() {
    let fx = Fixture::new();

    fx.cmd()
        .env("GROCERY_PERMISSIVE_TITLES", "true")
        .args(["add", "   ", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\": \"   \""));
}

#[test]
fn test_essentials_seed_fixed_order() {
    let fx = Fixture::new();

    fx.cmd()
        .arg("essentials")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 5 essentials"))
        .stdout(predicate::str::contains("  1. [ ] Bakery & Bread"))
        .stdout(predicate::str::contains("  2. [x] Meat & Seafood"))
        .stdout(predicate::str::contains("Cheese & Eggs"));

    fx.cmd().arg("essentials").assert().code(3);
    fx.cmd().args(["essentials", "--force"]).assert().success();

    let output = fx.cmd().args(["list", "--json"]).output().unwrap();
    let items: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(items.as_array().unwrap().len(), 10);
}

#[test]
fn test_json_output_and_errors() {
    let fx = Fixture::new();

    let output = fx.cmd().args(["add", "Milk", "--json"]).output().unwrap();
    assert!(output.status.success());
    let item: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(item["title"], "Milk");
    assert_eq!(item["isCompleted"], false);

    fx.cmd()
        .args(["--json", "toggle", "9"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"code\":\"NOT_FOUND\""));
}

#[test]
fn test_db_flag_overrides_env() {
    let fx = Fixture::new();
    let other = TempDir::new().unwrap();
    let other_db = other.path().join("other.db");

    fx.cmd()
        .args(["add", "Milk", "--db"])
        .arg(&other_db)
        .assert()
        .success();

    assert!(other_db.exists());
    fx.cmd()
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Empty Cart"));
}

#[test]
fn test_session_reads_stdin() {
    let fx = Fixture::new();

    fx.cmd()
        .arg("session")
        .write_stdin("add Milk\ntoggle 1\nbogus\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added: Milk"))
        .stdout(predicate::str::contains("Done: Milk"))
        .stdout(predicate::str::contains("error: Unknown command: bogus"));

    fx.cmd()
        .assert()
        .success()
        .stdout("Grocery List\n  1. [x] Milk\n");
}
