//! Command-line integration tests.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CARD_TXT: &str = "\
CARTE NATIONALE D'IDENTITE BURKINABE
NIP: 10020030040050060
OUEDRAOGO
AWA MARIE

Né(e) le 15/08/1985 à Bobo-Dioulasso
SEXE: F
Délivrée le 10/03/2020
Expire le 09/03/2030
B12345678
";

fn cnib(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cnib").unwrap();
    // Keep the per-user config directory out of the tests
    cmd.env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join("config"));
    cmd
}

#[test]
fn process_text_file_prints_json() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("card.txt");
    fs::write(&input, CARD_TXT).unwrap();

    cnib(&dir)
        .arg("process")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"    "Nom": "Ouedraogo","#))
        .stdout(predicate::str::contains(r#""Lieu_naissance": "Bobo-Dioulasso""#))
        .stdout(predicate::str::contains(r#""Numero_document": "B12345678""#));
}

#[test]
fn process_json_file_as_csv() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("card.json");
    fs::write(&input, r#"["NOM: Dupont", "SEXE: M"]"#).unwrap();

    cnib(&dir)
        .args(["process", "--format", "csv"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Type Document,Numero_NIP,Nom"))
        .stdout(predicate::str::contains(",,Dupont,,,,M,"));
}

#[test]
fn process_stdin_as_text() {
    let dir = TempDir::new().unwrap();

    cnib(&dir)
        .args(["process", "-", "--format", "text", "--raw"])
        .write_stdin("SEXE: F\nTAILLE: 170 cm\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sexe: F\nTaille: 170cm"))
        .stdout(predicate::str::contains("Raw OCR text:"));
}

#[test]
fn process_into_directory_uses_default_file_name() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("card.txt");
    fs::write(&input, CARD_TXT).unwrap();
    let out_dir = dir.path().join("out");
    fs::create_dir(&out_dir).unwrap();

    cnib(&dir)
        .arg("process")
        .arg(&input)
        .arg("--output")
        .arg(&out_dir)
        .assert()
        .success();

    let written = fs::read_to_string(out_dir.join("donnees_identite.json")).unwrap();
    assert!(written.contains(r#""Prenom": "Awa Marie""#));
    assert!(written.starts_with("{\n    \"Type Document\""));
}

#[test]
fn process_missing_input_fails() {
    let dir = TempDir::new().unwrap();

    cnib(&dir)
        .args(["process", "does-not-exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn process_blank_input_yields_empty_map() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("blank.txt");
    fs::write(&input, "\n   \n").unwrap();

    cnib(&dir)
        .arg("process")
        .arg(&input)
        .assert()
        .success()
        .stdout("{}\n");
}

#[test]
fn process_uses_config_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("card.txt");
    fs::write(&input, CARD_TXT).unwrap();
    let config = dir.path().join("cnib.json");
    fs::write(
        &config,
        r#"{"extraction": {"document_type_label": "CNIB"}, "output": {"format": "text"}}"#,
    )
    .unwrap();

    cnib(&dir)
        .arg("--config")
        .arg(&config)
        .arg("process")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Type Document: CNIB\n"));
}

#[test]
fn batch_writes_outputs_and_summary() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.txt"), CARD_TXT).unwrap();
    fs::write(dir.path().join("b.json"), r#"["SEXE: M"]"#).unwrap();
    fs::write(dir.path().join("c.json"), r#"{"lines": 3}"#).unwrap();
    fs::write(dir.path().join("d.txt"), "\n").unwrap();
    let out_dir = dir.path().join("out");

    cnib(&dir)
        .arg("batch")
        .arg(format!("{}/*", dir.path().display()))
        .arg("--output-dir")
        .arg(&out_dir)
        .args(["--summary", "--continue-on-error"])
        .assert()
        .success()
        .stderr(predicate::str::contains("3 successful, 1 failed"));

    assert!(out_dir.join("a.json").exists());
    assert!(out_dir.join("b.json").exists());
    assert!(!out_dir.join("c.json").exists());
    assert_eq!(fs::read_to_string(out_dir.join("d.json")).unwrap(), "{}");

    let summary = fs::read_to_string(out_dir.join("summary.csv")).unwrap();
    let rows: Vec<&str> = summary.lines().collect();
    assert_eq!(rows.len(), 5);
    assert!(rows[0].starts_with("filename,status,Type Document"));
    assert!(rows[1].starts_with("a.txt,success,CARTE NATIONALE"));
    assert!(rows[3].starts_with("c.json,error"));
    assert!(rows[4].starts_with("d.txt,success,,"));
}

#[test]
fn batch_stops_on_first_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.json"), "[\"NOM: Dupont\"").unwrap();
    fs::write(dir.path().join("b.json"), r#"["SEXE: M"]"#).unwrap();

    cnib(&dir)
        .arg("batch")
        .arg(format!("{}/*.json", dir.path().display()))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Processing failed"));
}

#[test]
fn config_init_get_set() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("cnib.json");

    cnib(&dir)
        .arg("--config")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .success();

    cnib(&dir)
        .arg("--config")
        .arg(&config)
        .args(["config", "set", "output.indent", "2"])
        .assert()
        .success();

    cnib(&dir)
        .arg("--config")
        .arg(&config)
        .args(["config", "get", "output.indent"])
        .assert()
        .success()
        .stdout("2\n");

    cnib(&dir)
        .arg("--config")
        .arg(&config)
        .args(["config", "set", "output.colour", "red"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration key not found"));
}
