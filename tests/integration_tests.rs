use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn demo_runs_without_arguments() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("bank_commands")?;

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("#6 call withdraw-200: succeeded=true"))
        .stdout(predicate::str::contains("#8 undo withdraw-200: succeeded=true\n    account: 1500.0000"))
        .stdout(predicate::str::contains("#14 call transfer-2000: succeeded=false"));

    Ok(())
}

#[test]
fn transfer_script_as_csv() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("bank_commands")?;
    cmd.arg("tests/fixtures/transfer.csv").args(&["--format", "csv"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with(
            "step,operation,command,succeeded,account,balance",
        ))
        .stdout(predicate::str::contains("4,call,t300,true,A,700.0000"))
        .stdout(predicate::str::contains("4,call,t300,true,B,800.0000"))
        .stdout(predicate::str::contains("5,undo,t300,true,A,1000.0000"))
        .stdout(predicate::str::contains("7,call,t2000,false,A,1000.0000"))
        .stdout(predicate::str::contains("8,undo,t2000,false,B,500.0000"));

    Ok(())
}

#[test]
fn composite_script_as_json() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("bank_commands")?;
    cmd.arg("tests/fixtures/composite.csv").args(&["--format", "json"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let reports: serde_json::Value = serde_json::from_slice(&output)?;

    assert_eq!(reports[0]["command"], "payday");
    assert_eq!(reports[0]["succeeded"], true);
    assert_eq!(reports[0]["balances"][0]["balance"], "300.0000");
    assert_eq!(reports[0]["balances"][1]["balance"], "50.0000");
    assert_eq!(reports[1]["operation"], "undo");
    assert_eq!(reports[1]["balances"][0]["balance"], "0.0000");
    assert_eq!(reports[1]["balances"][1]["balance"], "100.0000");

    Ok(())
}

#[test]
fn overdraft_limit_option() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("bank_commands")?;
    cmd.arg("--overdraft-limit=-2000");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("#14 call transfer-2000: succeeded=true"));

    Ok(())
}

#[test]
fn debug_flag_logs_to_stderr() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("bank_commands")?;
    cmd.arg("--debug");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("opened account A with balance 1000"));

    let mut quiet = Command::cargo_bin("bank_commands")?;
    quiet.assert().success().stderr(predicate::str::is_empty());

    Ok(())
}

#[test]
fn unknown_account_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("bank_commands")?;
    cmd.arg("tests/fixtures/unknown_account.csv");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown account `Z`"));

    Ok(())
}

#[test]
fn missing_script_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("bank_commands")?;
    cmd.arg("tests/fixtures/missing.csv");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to open script"));

    Ok(())
}
