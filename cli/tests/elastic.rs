use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn fixture(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
        .to_string_lossy()
        .to_string()
}

fn elastic() -> Command {
    let mut cmd = Command::cargo_bin("elastic").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_decode_text() {
    elastic()
        .args([
            "decode",
            "--schema",
            &fixture("schema.yaml"),
            "--type",
            "List",
            &fixture("list.json"),
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("List\n"))
        .stdout(predicate::str::contains("description: \"buy milk\""))
        .stdout(predicate::str::contains("notes: \"in the room too\""));
}

#[test]
fn test_decode_json_output() {
    elastic()
        .args([
            "decode",
            "-s",
            &fixture("schema.json"),
            "-t",
            "List",
            &fixture("list.json"),
            "-o",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"buy milk\""))
        .stdout(predicate::str::contains("\"description\": \"water plants\""));
}

#[test]
fn test_decode_yaml_output() {
    elastic()
        .args([
            "decode",
            "-s",
            &fixture("schema.yaml"),
            "-t",
            "Country",
            &fixture("country.yaml"),
            "-o",
            "yaml",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("name: Hungary"))
        .stdout(predicate::str::contains("Gábor Demszky"));
}

#[test]
fn test_decode_time_is_normalized() {
    elastic()
        .args([
            "decode",
            "-s",
            &fixture("schema.yaml"),
            "-t",
            "Apple",
            &fixture("apple.json"),
            "-o",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2010-09-25T15:15:00+00:00"));
}

#[test]
fn test_decode_scalar_casts() {
    elastic()
        .args([
            "decode",
            "-s",
            &fixture("schema.yaml"),
            "-t",
            "Reading",
            &fixture("reading.json"),
            "-o",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"value\": 21"))
        .stdout(predicate::str::contains("\"valid\": false"));
}

#[test]
fn test_decode_stdin() {
    elastic()
        .args(["decode", "-s", &fixture("schema.yaml"), "-t", "Item"])
        .write_stdin("\"buy milk\"")
        .assert()
        .success()
        .stdout(predicate::str::contains("description: \"buy milk\""));
}

#[test]
fn test_decode_stdin_yaml_format() {
    elastic()
        .args([
            "decode",
            "-s",
            &fixture("schema.yaml"),
            "-t",
            "Person",
            "--input-format",
            "yaml",
        ])
        .write_stdin("name: Andrea\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("name: \"Andrea\""));
}

#[test]
fn test_decode_invalid_root() {
    elastic()
        .args(["decode", "-s", &fixture("schema.yaml"), "-t", "Person"])
        .write_stdin("\"Andrea\"")
        .assert()
        .failure()
        .stderr(predicate::str::contains("InvalidRootShape"));
}

#[test]
fn test_decode_unknown_type() {
    elastic()
        .args([
            "decode",
            "-s",
            &fixture("schema.yaml"),
            "-t",
            "Planet",
            &fixture("list.json"),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("UnknownType"));
}

#[test]
fn test_roundtrip_json() {
    elastic()
        .args([
            "roundtrip",
            "-s",
            &fixture("schema.yaml"),
            "-t",
            "List",
            &fixture("list.json"),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("List: round trip ok"));
}

#[test]
fn test_roundtrip_yaml() {
    elastic()
        .args([
            "roundtrip",
            "-s",
            &fixture("schema.yaml"),
            "-t",
            "Country",
            &fixture("country.yaml"),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Country: round trip ok"));
}

#[test]
fn test_roundtrip_mismatch() {
    // a map holding only the default attribute encodes as the bare value
    elastic()
        .args([
            "roundtrip",
            "-s",
            &fixture("schema.yaml"),
            "-t",
            "Item",
            &fixture("item_map.json"),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("RoundTripMismatch"));
}

#[test]
fn test_schema_listing() {
    elastic()
        .args(["schema", "--schema", &fixture("schema.yaml")])
        .assert()
        .success()
        .stdout(predicate::str::contains("City\n    name\n    mayor: Person\n"))
        .stdout(predicate::str::contains("    description (default)\n"))
        .stdout(predicate::str::contains("    items: [Item]\n"))
        .stdout(predicate::str::contains("    picked_at: time\n"));
}

#[test]
fn test_schema_missing_file() {
    elastic()
        .args(["schema", "--schema", &fixture("missing.yaml")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Io"));
}
