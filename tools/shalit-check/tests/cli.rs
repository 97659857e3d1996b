// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com
//
// End-to-end tests for the shalit-check binary: exit codes, digest sources,
// config file handling.

use std::process::{Command, Output};

const ABC_HEX: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

fn shalit_check(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_shalit-check"))
        .args(args)
        .env_remove("SHALIT_REFERENCE_DIGEST")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run shalit-check")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_builtin_password_matches() {
    let output = shalit_check(&["myverysecretpassword"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("good password!"));
}

#[test]
fn test_wrong_password_mismatches() {
    let output = shalit_check(&["myverysecretpasswor"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("bad password!"));
}

#[test]
fn test_no_arguments_is_usage_error() {
    let output = shalit_check(&[]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_explicit_digest() {
    let output = shalit_check(&["--digest", ABC_HEX, "abc"]);
    assert_eq!(output.status.code(), Some(0));

    let output = shalit_check(&["--digest", ABC_HEX, "myverysecretpassword"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_invalid_digest_is_usage_error() {
    let output = shalit_check(&["--digest", "not-hex", "abc"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_digest_from_environment() {
    let output = Command::new(env!("CARGO_BIN_EXE_shalit-check"))
        .arg("abc")
        .env("SHALIT_REFERENCE_DIGEST", ABC_HEX)
        .output()
        .expect("failed to run shalit-check");
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_hash_subcommand() {
    let output = shalit_check(&["hash", "abc"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output).trim(), ABC_HEX);
}

#[test]
fn test_config_file_digest() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shalit.toml");
    std::fs::write(&path, format!("reference_digest = \"{}\"\n", ABC_HEX)).unwrap();
    let path = path.to_str().unwrap();

    let output = shalit_check(&["--config", path, "abc"]);
    assert_eq!(output.status.code(), Some(0));

    // Flag wins over the file
    let empty_hex = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
    let output = shalit_check(&["--config", path, "--digest", empty_hex, "abc"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_broken_config_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "reference_digest = 42\n").unwrap();

    let output = shalit_check(&["--config", path.to_str().unwrap(), "abc"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error:"));
}

#[test]
fn test_gen_config_then_validate() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("generated.toml");
    let path = path.to_str().unwrap();

    let output = shalit_check(&["gen-config", "--output", path]);
    assert_eq!(output.status.code(), Some(0));

    let output = shalit_check(&["validate", "--config", path]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Configuration valid!"));

    // The generated file carries the built-in digest
    let output = shalit_check(&["--config", path, "myverysecretpassword"]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_validate_rejects_bad_log_level() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("loud.toml");
    std::fs::write(&path, "log_level = \"loud\"\n").unwrap();

    let output = shalit_check(&["validate", "--config", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));
}
