//! Command-line behaviour of the `deedscan` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const AGREEMENT: &str = "Seller Name Buyer Name 123 Main St 90210 456 Oak Ave 10001 \
                         SELLER(S) BUYER(S)\nThe purchase price is Two Hundred Thousand ONLY.\n\
                         Signed 05/21/2023";

fn deedscan(config_home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("deedscan").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home);
    cmd
}

#[test]
fn extract_prints_json_record() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("agreement.txt");
    fs::write(&input, AGREEMENT).unwrap();

    let output = deedscan(dir.path())
        .arg("extract")
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "buyerName": "456 Oak Ave",
            "sellerName": "123 Main St",
            "propertyAddress": "Not Found",
            "offerPrice": "$200000",
            "keyDates": "05/21/2023",
        })
    );
}

#[test]
fn extract_reads_stdin() {
    let dir = TempDir::new().unwrap();

    deedscan(dir.path())
        .args(["extract", "-", "--format", "csv"])
        .write_stdin("Jordan to seller under the terms. Total due: $150,000")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "buyerName,sellerName,propertyAddress,offerPrice,keyDates\n",
        ))
        .stdout(predicate::str::contains("Jordan,Not Found,Not Found,\"$150,000\",Not Found"));
}

#[test]
fn extract_joins_pages_in_order() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("page1.txt");
    let second = dir.path().join("page2.txt");
    fs::write(&first, "The Seller(s) ia/are Dana").unwrap();
    fs::write(&second, "Wu residing at 1 Elm").unwrap();

    deedscan(dir.path())
        .args(["extract", "--format", "text"])
        .arg(&first)
        .arg(&second)
        .assert()
        .success()
        .stdout(predicate::str::contains("Dana Wu"));
}

#[test]
fn extract_seller_phrase_override_and_rules() {
    let dir = TempDir::new().unwrap();

    deedscan(dir.path())
        .args(["extract", "-", "--seller-phrase", "corrected", "--show-rules"])
        .write_stdin("The Seller(s) is/are Dana Wu residing at 1 Elm")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"sellerName\":\"Dana Wu\""))
        .stderr(predicate::str::contains("seller_intro_is_are"));
}

#[test]
fn extract_uses_config_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("custom.json");
    fs::write(&config, r#"{"extraction": {"seller_phrase": "lenient"}, "output": {"format": "text"}}"#)
        .unwrap();

    deedscan(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["extract", "-"])
        .write_stdin("The Seller(s) is/are Dana Wu residing at 1 Elm")
        .assert()
        .success()
        .stdout(predicate::str::contains("Seller:"))
        .stdout(predicate::str::contains("Dana Wu"));
}

#[test]
fn extract_rejects_blank_input() {
    let dir = TempDir::new().unwrap();

    deedscan(dir.path())
        .args(["extract", "-"])
        .write_stdin("  \n\t ")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No text in input"));
}

#[test]
fn extract_missing_file_fails() {
    let dir = TempDir::new().unwrap();

    deedscan(dir.path())
        .arg("extract")
        .arg(dir.path().join("missing.txt"))
        .assert()
        .failure();
}

#[test]
fn batch_writes_outputs_and_summary() {
    let dir = TempDir::new().unwrap();
    let inputs = dir.path().join("in");
    let outputs = dir.path().join("out");
    fs::create_dir_all(&inputs).unwrap();
    fs::write(inputs.join("a.txt"), AGREEMENT).unwrap();
    fs::write(inputs.join("b.txt"), "random unrelated text").unwrap();
    fs::write(inputs.join("notes.md"), AGREEMENT).unwrap();

    let pattern = format!("{}/*", inputs.display());
    deedscan(dir.path())
        .args(["batch", &pattern, "--summary", "-j", "2", "--output-dir"])
        .arg(&outputs)
        .assert()
        .success();

    let a: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(outputs.join("a.json")).unwrap()).unwrap();
    assert_eq!(a["offerPrice"], "$200000");
    assert!(outputs.join("b.json").exists());
    assert!(!outputs.join("notes.json").exists());

    let summary = fs::read_to_string(outputs.join("summary.csv")).unwrap();
    let mut lines = summary.lines();
    assert_eq!(
        lines.next(),
        Some("filename,status,buyerName,sellerName,propertyAddress,offerPrice,keyDates,processing_time_ms,error")
    );
    assert!(lines.next().unwrap().starts_with("a.txt,success,456 Oak Ave,123 Main St,"));
    assert!(lines.next().unwrap().starts_with("b.txt,success,Not Found,"));
    assert_eq!(lines.next(), None);
}

#[test]
fn batch_stops_on_first_error_unless_asked() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("good.txt"), AGREEMENT).unwrap();
    fs::write(dir.path().join("blank.txt"), "   ").unwrap();
    let pattern = format!("{}/*.txt", dir.path().display());

    deedscan(dir.path())
        .args(["batch", &pattern])
        .assert()
        .failure()
        .stderr(predicate::str::contains("blank.txt"));

    deedscan(dir.path())
        .args(["batch", &pattern, "--continue-on-error"])
        .assert()
        .success()
        .stdout(predicate::str::contains("==>"))
        .stderr(predicate::str::contains("1 failed"));
}

#[test]
fn batch_without_matches_fails() {
    let dir = TempDir::new().unwrap();
    let pattern = format!("{}/*.txt", dir.path().display());

    deedscan(dir.path())
        .args(["batch", &pattern])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No matching files"));
}

#[test]
fn config_init_writes_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");

    deedscan(dir.path())
        .args(["config", "init", "--output"])
        .arg(&path)
        .assert()
        .success();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["extraction"]["seller_phrase"], "observed");

    deedscan(dir.path())
        .args(["config", "init", "--output"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
}

#[cfg(target_os = "linux")]
#[test]
fn config_set_then_get_round_trips_through_default_location() {
    let dir = TempDir::new().unwrap();

    deedscan(dir.path())
        .args(["config", "set", "extraction.seller_phrase", "lenient"])
        .assert()
        .success();
    assert!(dir.path().join("deedscan").join("config.json").exists());

    deedscan(dir.path())
        .args(["config", "get", "extraction.seller_phrase"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"lenient\""));

    deedscan(dir.path())
        .args(["config", "set", "extraction.seller_phrase", "sloppy"])
        .assert()
        .failure();
}

#[test]
fn config_subcommands_honour_explicit_config_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.json");

    deedscan(dir.path())
        .arg("--config")
        .arg(&path)
        .args(["config", "set", "extraction.seller_phrase", "corrected"])
        .assert()
        .success();
    assert!(path.exists());
    assert!(!dir.path().join("deedscan").join("config.json").exists());

    deedscan(dir.path())
        .arg("--config")
        .arg(&path)
        .args(["config", "get", "extraction.seller_phrase"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"corrected\""));

    deedscan(dir.path())
        .arg("--config")
        .arg(&path)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.json"));

    deedscan(dir.path())
        .arg("--config")
        .arg(&path)
        .args(["extract", "-"])
        .write_stdin("The Seller(s) is/are Dana Wu residing at 1 Elm")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"sellerName\":\"Dana Wu\""));
}

#[test]
fn batch_keeps_same_named_files_from_different_directories() {
    let dir = TempDir::new().unwrap();
    let inputs = dir.path().join("in");
    let outputs = dir.path().join("out");
    fs::create_dir_all(inputs.join("a")).unwrap();
    fs::create_dir_all(inputs.join("b")).unwrap();
    fs::write(inputs.join("a").join("x.txt"), "Jordan to seller").unwrap();
    fs::write(inputs.join("b").join("x.txt"), "Avery to seller").unwrap();

    let pattern = format!("{}/**/*.txt", inputs.display());
    deedscan(dir.path())
        .args(["batch", &pattern, "--summary", "--output-dir"])
        .arg(&outputs)
        .assert()
        .success();

    let read_buyer = |rel: &str| -> String {
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(outputs.join(rel)).unwrap()).unwrap();
        value["buyerName"].as_str().unwrap().to_string()
    };
    assert_eq!(read_buyer("a/x.json"), "Jordan");
    assert_eq!(read_buyer("b/x.json"), "Avery");

    let summary = fs::read_to_string(outputs.join("summary.csv")).unwrap();
    assert_eq!(summary.lines().count(), 3);
}
