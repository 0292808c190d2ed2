use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use std::process::Command;

const BIN: &str = "souffle-profile-db";

fn profile_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("profile")
}

fn cmd() -> Result<Command, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.arg("--dir").arg(profile_dir());
    Ok(cmd)
}

#[test]
fn criteria_json_selects_relations() -> Result<(), Box<dyn std::error::Error>> {
    cmd()?
        .arg("relations")
        .arg("--criteria")
        .arg(r#"{"relation_name": "path", "tuple_count": 5}"#)
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""id": "R.3""#))
        .stdout(predicate::str::contains(r#""id": "R.2""#).not());
    Ok(())
}

#[test]
fn flag_overrides_criteria_key() -> Result<(), Box<dyn std::error::Error>> {
    cmd()?
        .arg("relations")
        .arg("--criteria")
        .arg(r#"{"relation_name": "path", "tuple_count": 5}"#)
        .arg("--tuple-count")
        .arg("51")
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""id": "R.2""#))
        .stdout(predicate::str::contains(r#""id": "R.3""#).not());
    Ok(())
}

#[test]
fn rule_flag_overrides_criteria_key() -> Result<(), Box<dyn std::error::Error>> {
    cmd()?
        .arg("rules")
        .arg("--criteria")
        .arg(r#"{"id": "N."}"#)
        .arg("--id")
        .arg("C.")
        .arg("--rule-version")
        .arg("1")
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""tuple_count": 17"#))
        .stdout(predicate::str::contains(r#""id": "N."#).not())
        .stdout(predicate::str::contains(r#""tuple_count": 30"#).not());
    Ok(())
}

#[test]
fn rules_of_relation_match_name_exactly() -> Result<(), Box<dyn std::error::Error>> {
    cmd()?
        .arg("rules")
        .arg("--relation")
        .arg("path")
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""id": "N.2.0""#))
        .stdout(predicate::str::contains(r#""id": "C.2.1""#))
        .stdout(predicate::str::contains(r#""relation_name": "path_len""#).not())
        .stdout(predicate::str::contains(r#""relation_name": "edge""#).not());

    // The rule filter still applies on top of the relation.
    cmd()?
        .arg("rules")
        .arg("--relation")
        .arg("path")
        .arg("--tuple-count")
        .arg("4")
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""id": "N.2.0""#))
        .stdout(predicate::str::contains(r#""id": "C.2.1""#).not());
    Ok(())
}

#[test]
fn relation_name_flag_is_a_substring_match() -> Result<(), Box<dyn std::error::Error>> {
    cmd()?
        .arg("rules")
        .arg("--relation-name")
        .arg("path")
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""relation_name": "path_len""#));
    Ok(())
}

#[test]
fn table_output_has_header() -> Result<(), Box<dyn std::error::Error>> {
    cmd()?
        .arg("relations")
        .arg("--relation-name")
        .arg("edge")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("TOT_T"))
        .stdout(predicate::str::contains("R.1"))
        .stdout(predicate::str::contains("R.2").not());
    Ok(())
}

#[test]
fn summary_prints_counts() -> Result<(), Box<dyn std::error::Error>> {
    cmd()?
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""relations": 3"#))
        .stdout(predicate::str::contains(r#""program": "path.dl""#));
    Ok(())
}

#[test]
fn bad_criteria_json_fails() -> Result<(), Box<dyn std::error::Error>> {
    cmd()?
        .arg("relations")
        .arg("--criteria")
        .arg("{not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("parse --criteria"));
    Ok(())
}

#[test]
fn missing_profile_dir_fails() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin(BIN)?
        .arg("--dir")
        .arg("no-such-profile-dir")
        .arg("summary")
        .assert()
        .failure()
        .stderr(predicate::str::contains("overview.json"));
    Ok(())
}
