use predicates::prelude::predicate;
use serde_json::Value;

#[test]
fn help_is_available() {
    assert_cmd::cargo::cargo_bin_cmd!("rowcheck")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"));
}

#[test]
fn version_is_available() {
    assert_cmd::cargo::cargo_bin_cmd!("rowcheck")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_flag_is_input_usage_error() {
    let output = assert_cmd::cargo::cargo_bin_cmd!("rowcheck")
        .args(["check", "--bogus"])
        .output()
        .expect("run rowcheck");

    assert_eq!(output.status.code(), Some(3));
    let stderr: Value = serde_json::from_slice(&output.stderr).expect("stderr json");
    assert_eq!(stderr["error"], "input_usage_error");
    assert_eq!(stderr["details"]["kind"], "cli_parse_error");
}
