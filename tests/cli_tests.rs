use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_describes_the_viewer() {
    Command::cargo_bin("folio")
        .expect("binary")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("portfolio"))
        .stdout(predicate::str::contains("--content"))
        .stdout(predicate::str::contains("--no-autoplay"));
}

#[test]
fn version_flag_works() {
    Command::cargo_bin("folio")
        .expect("binary")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("folio"));
}

#[test]
fn rejects_unknown_theme() {
    Command::cargo_bin("folio")
        .expect("binary")
        .args(["--theme", "sepia"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn missing_content_file_is_a_clean_error() {
    Command::cargo_bin("folio")
        .expect("binary")
        .args(["--content", "/nonexistent/profile.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("/nonexistent/profile.toml"));
}
