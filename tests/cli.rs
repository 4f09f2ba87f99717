use assert_cmd::Command;
use predicates::prelude::*;
use std::{fs, path::Path};

const SEED: &str = r#"
{
    "users": [
        {"id": 1, "firstName": "Charlie", "age": 31},
        {"id": 2, "firstName": "Bob", "age": 25},
        {"id": 3, "firstName": "amy", "age": 40}
    ]
}
"#;

fn deck(storage_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env_remove("CONTACTS_SOURCE")
        .env_remove("STORAGE_CHOICE")
        .env_remove("RUST_LOG")
        .arg("--storage-dir")
        .arg(storage_dir);
    cmd
}

#[test]
fn load_like_update_and_filter() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let storage_dir = dir.path().join(".instance");
    let seed = dir.path().join("seed.json");
    fs::write(&seed, SEED)?;

    // First run pulls the default set from the seed file
    deck(&storage_dir)
        .arg("--source")
        .arg(&seed)
        .arg("load")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contacts received: 3"));

    assert!(storage_dir.join("contacts.json").exists());

    // Later runs are served from storage, no source needed
    deck(&storage_dir)
        .args(["like", "--id", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact 2 liked"));

    deck(&storage_dir)
        .args(["list", "--filter", "liked"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bob").and(predicate::str::contains("Charlie").not()));

    deck(&storage_dir)
        .args(["update", "--id", "2", "--first-name", "Robert", "--field", "age=26"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact updated successfully"));

    deck(&storage_dir)
        .args(["list", "--search", "ROB"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Robert").and(predicate::str::contains("liked")));

    let stored = fs::read_to_string(storage_dir.join("contacts.json"))?;
    assert!(stored.contains(r#""age":26"#));
    assert!(stored.contains(r#""version":1"#));

    Ok(())
}

#[test]
fn list_sorts_by_first_name() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    fs::write(
        dir.path().join("contacts.json"),
        r#"[{"id":1,"firstName":"Charlie","isLiked":false},{"id":2,"firstName":"bob","isLiked":true},{"id":3,"firstName":"Amy","isLiked":false}]"#,
    )?;

    let output = deck(dir.path())
        .args(["list", "--filter", "sortZ-A"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let listing = String::from_utf8_lossy(&output);
    let lines: Vec<&str> = listing.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("Charlie"));
    assert!(lines[1].contains("bob") && lines[1].contains("liked"));
    assert!(lines[2].contains("Amy"));

    Ok(())
}

#[test]
fn empty_storage_without_source_fails() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;

    deck(dir.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Default contacts source"));

    Ok(())
}

#[test]
fn unknown_id_and_bad_name_are_reported() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    fs::write(
        dir.path().join("contacts.json"),
        r#"[{"id":1,"firstName":"Amy","isLiked":false}]"#,
    )?;

    deck(dir.path())
        .args(["like", "--id", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Contact 9 Not found"));

    deck(dir.path())
        .args(["update", "--id", "1", "--first-name", "4my"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation failed"));

    // Nothing was written by the failed commands
    let stored = fs::read_to_string(dir.path().join("contacts.json"))?;
    assert_eq!(stored, r#"[{"id":1,"firstName":"Amy","isLiked":false}]"#);

    Ok(())
}

#[test]
fn load_json_reports_status_and_list() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    fs::write(
        dir.path().join("contacts.json"),
        r#"[{"id":1,"firstName":"Amy","isLiked":true,"email":"amy@example.com"}]"#,
    )?;

    let output = deck(dir.path())
        .args(["load", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let snapshot: serde_json::Value = serde_json::from_slice(&output)?;

    assert_eq!(snapshot["status"], "received");
    assert!(snapshot["error"].is_null());
    assert_eq!(snapshot["list"][0]["firstName"], "Amy");
    assert_eq!(snapshot["list"][0]["isLiked"], true);
    assert_eq!(snapshot["list"][0]["email"], "amy@example.com");

    Ok(())
}

#[test]
fn mem_storage_warns_that_changes_are_dropped() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let storage_dir = dir.path().join(".instance");
    let seed = dir.path().join("seed.json");
    fs::write(&seed, SEED)?;

    deck(&storage_dir)
        .args(["--storage-choice", "mem", "--source"])
        .arg(&seed)
        .args(["like", "--id", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact 2 liked"))
        .stderr(predicate::str::contains("will not be kept"));

    // Reads from mem storage stay quiet
    deck(&storage_dir)
        .args(["--storage-choice", "mem", "--source"])
        .arg(&seed)
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    assert!(!storage_dir.join("contacts.json").exists());

    Ok(())
}

#[test]
fn update_cannot_overwrite_the_id() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let original = r#"[{"id":1,"firstName":"Amy","isLiked":true}]"#;
    fs::write(dir.path().join("contacts.json"), original)?;

    deck(dir.path())
        .args(["update", "--id", "1", "--first-name", "Amy", "--field", "id=9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("`id` cannot be set with --field"));

    deck(dir.path())
        .args(["like", "--id", "1", "--unlike"])
        .assert()
        .success();

    let stored = fs::read_to_string(dir.path().join("contacts.json"))?;
    assert_eq!(stored.matches(r#""id""#).count(), 1);

    Ok(())
}
