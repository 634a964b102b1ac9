use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn stockpile(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("stockpile").unwrap();
    cmd.current_dir(home.path())
        .env("STOCKPILE_HOME", home.path())
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

#[test]
fn first_run_lists_the_sample_inventory() {
    let home = TempDir::new().unwrap();

    stockpile(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wireless Mouse"))
        .stdout(predicate::str::contains("LED Desk Lamp"))
        .stdout(predicate::str::contains("Items 82"))
        .stdout(predicate::str::contains("Low stock 2"));
}

#[test]
fn add_then_list() {
    let home = TempDir::new().unwrap();

    stockpile(&home)
        .args(["add", "Desk Fan", "Home", "19.5", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product added: Desk Fan"));

    stockpile(&home)
        .args(["list", "--search", "fan"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 1 of 7 products"))
        .stdout(predicate::str::contains("$19.50"));
}

#[test]
fn invalid_add_fails_without_saving() {
    let home = TempDir::new().unwrap();

    stockpile(&home)
        .args(["add", "", "Home", "0", "1.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Invalid product"))
        .stderr(predicate::str::contains("Product name is required."))
        .stderr(predicate::str::contains("Price must be a number greater than 0."));

    stockpile(&home)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Items 82"));
}

#[test]
fn edit_by_row_in_current_view() {
    let home = TempDir::new().unwrap();

    // Default view is name ascending, so row 1 is the pens.
    stockpile(&home)
        .args(["edit", "1", "quantity", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Updated quantity of Ballpoint Pens (10 pack) (1)",
        ));

    stockpile(&home)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Items 77"))
        .stdout(predicate::str::contains("Low stock 3"));
}

#[test]
fn invalid_edit_keeps_old_value() {
    let home = TempDir::new().unwrap();

    stockpile(&home)
        .args(["edit", "1", "price", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("price: Price must be a number"));

    stockpile(&home)
        .args(["list", "--search", "pens"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$5.25"));
}

#[test]
fn delete_with_yes_removes_row() {
    let home = TempDir::new().unwrap();

    stockpile(&home)
        .args(["delete", "1", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Product deleted (1): Ballpoint Pens (10 pack)",
        ));

    stockpile(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ballpoint").not());
}

#[test]
fn listed_id_still_resolves_in_next_run() {
    let home = TempDir::new().unwrap();

    let output = stockpile(&home).arg("list").output().unwrap();
    assert!(output.status.success());
    let listing = String::from_utf8(output.stdout).unwrap();
    let id = listing
        .lines()
        .find(|line| line.contains("Wireless Mouse"))
        .and_then(|line| line.split_whitespace().last())
        .unwrap()
        .to_string();

    stockpile(&home)
        .args(["delete", &format!("id:{}", id), "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product deleted (id:"))
        .stdout(predicate::str::contains("Wireless Mouse"));
}

#[test]
fn declined_delete_keeps_row() {
    let home = TempDir::new().unwrap();

    stockpile(&home)
        .args(["delete", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Delete 1 product(s)?"))
        .stdout(predicate::str::contains("Aborted."));

    stockpile(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ballpoint Pens"));
}

#[test]
fn delete_unknown_row_fails() {
    let home = TempDir::new().unwrap();

    stockpile(&home)
        .args(["delete", "99", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Row 99 not found"));
}

#[test]
fn sort_twice_flips_direction() {
    let home = TempDir::new().unwrap();

    stockpile(&home)
        .args(["sort", "price"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sorted by price (asc)"));

    stockpile(&home)
        .args(["sort", "price"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sorted by price (desc)"));

    // Most expensive first now, so row 1 is the keyboard.
    stockpile(&home)
        .args(["delete", "1", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mechanical Keyboard"));
}

#[test]
fn category_filter_and_clear() {
    let home = TempDir::new().unwrap();

    stockpile(&home)
        .args(["list", "--category", "Stationery"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Notebook A5"))
        .stdout(predicate::str::contains("Wireless Mouse").not());

    stockpile(&home)
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("Filters cleared"))
        .stdout(predicate::str::contains("Wireless Mouse"));
}

#[test]
fn categories_lists_seed_choices() {
    let home = TempDir::new().unwrap();

    stockpile(&home)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Electronics"))
        .stdout(predicate::str::contains("Home"));
}

#[test]
fn export_import_round_trip() {
    let home = TempDir::new().unwrap();

    stockpile(&home)
        .args(["add", "Desk Fan", "Home", "19.5", "7"])
        .assert()
        .success();
    stockpile(&home)
        .args(["export", "-o", "backup.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 7 products"));
    assert!(home.path().join("backup.json").exists());

    stockpile(&home).args(["reset", "--yes"]).assert().success();

    stockpile(&home)
        .args(["import", "backup.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 7 products"));

    stockpile(&home)
        .args(["list", "--search", "desk fan"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Desk Fan"));
}

#[test]
fn export_defaults_to_config_file_name() {
    let home = TempDir::new().unwrap();

    stockpile(&home).arg("export").assert().success();
    assert!(home.path().join("inventory.json").exists());
}

#[test]
fn export_to_stdout_is_json() {
    let home = TempDir::new().unwrap();

    let output = stockpile(&home)
        .args(["export", "--stdout"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 6);
}

#[test]
fn malformed_import_changes_nothing() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("bad.json"), r#"{"name": "x"}"#).unwrap();

    stockpile(&home)
        .args(["import", "bad.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Import failed"));

    stockpile(&home)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Items 82"));
}

#[test]
fn strict_import_rejects_bad_rows() {
    let home = TempDir::new().unwrap();
    std::fs::write(
        home.path().join("rows.json"),
        r#"[{"name": "Fan", "category": "Home", "price": "cheap", "quantity": 2}]"#,
    )
    .unwrap();

    stockpile(&home)
        .args(["import", "rows.json", "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("row 1"));

    stockpile(&home)
        .args(["import", "rows.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("row 1: unreadable price, stored as 0"));
}

#[test]
fn reset_restores_sample() {
    let home = TempDir::new().unwrap();

    stockpile(&home).args(["delete", "1", "2", "3", "--yes"]).assert().success();
    stockpile(&home)
        .args(["reset", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sample inventory restored"));
    stockpile(&home)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Items 82"));
}

#[test]
fn theme_set_persists() {
    let home = TempDir::new().unwrap();

    stockpile(&home)
        .args(["theme", "dark"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme set to dark"));

    stockpile(&home)
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: dark"));

    stockpile(&home)
        .args(["theme", "toggle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme set to light"));
}

#[test]
fn config_set_and_show() {
    let home = TempDir::new().unwrap();

    stockpile(&home)
        .args(["config", "import_policy", "strict"])
        .assert()
        .success()
        .stdout(predicate::str::contains("import_policy set to strict"));

    stockpile(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("import_policy = strict"))
        .stdout(predicate::str::contains("delete_delay_ms = 180"));
}

#[test]
fn no_color_output_has_no_escapes() {
    let home = TempDir::new().unwrap();

    stockpile(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[").not());
}
