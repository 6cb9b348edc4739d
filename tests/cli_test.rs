use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn coolpay() -> Command {
    let mut cmd = Command::new(cargo_bin!("coolpay"));
    cmd.env_remove("COOLPAY_USERNAME")
        .env_remove("COOLPAY_APIKEY")
        .env_remove("COOLPAY_API_URL")
        .arg("--api-url")
        .arg("http://127.0.0.1:9/api");
    cmd
}

#[test]
fn test_cli_help_lists_commands() {
    let mut cmd = coolpay();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("recipients"))
        .stdout(predicate::str::contains("payments"));
}

#[test]
fn test_cli_requires_username() {
    let mut cmd = coolpay();
    cmd.args(["--apikey", "valid-apikey", "recipients", "list"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("username is mandatory"));
}

#[test]
fn test_cli_requires_apikey_from_env_or_flag() {
    let mut cmd = coolpay();
    cmd.env("COOLPAY_USERNAME", "valid-user")
        .args(["payments", "list"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("apikey is mandatory"));
}

#[test]
fn test_cli_rejects_non_numeric_amount() {
    let mut cmd = coolpay();
    cmd.args([
        "--username",
        "valid-user",
        "--apikey",
        "valid-apikey",
        "payments",
        "create",
        "lots",
        "GBP",
        "test_recipient",
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
