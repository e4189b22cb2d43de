use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Binary with HOME pointed at an empty directory so user configuration
/// never leaks into a test
struct Cli {
    cmd: Command,
    _home: TempDir,
}

impl std::ops::Deref for Cli {
    type Target = Command;
    fn deref(&self) -> &Command {
        &self.cmd
    }
}

impl std::ops::DerefMut for Cli {
    fn deref_mut(&mut self) -> &mut Command {
        &mut self.cmd
    }
}

fn cmd() -> Cli {
    let home = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("gogh-themes").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"));
    Cli { cmd, _home: home }
}

#[test]
fn list_prints_sorted_names() {
    let output = cmd().arg("list").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let names: Vec<&str> = stdout.lines().collect();
    assert!(names.contains(&"Dracula"));

    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

#[test]
fn list_filter_is_case_insensitive() {
    cmd()
        .args(["list", "--filter", "DRAC"])
        .assert()
        .success()
        .stdout(predicate::eq("Dracula\n"));
}

#[test]
fn show_prints_all_slots() {
    cmd()
        .args(["show", "Dracula"])
        .assert()
        .success()
        .stdout(predicate::str::contains("background"))
        .stdout(predicate::str::contains("#282A36"))
        .stdout(predicate::str::contains("bright_white"));
}

#[test]
fn show_json_is_raw_catalog_entry() {
    let output = cmd().args(["show", "Nord", "--json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["name"], "Nord");
    assert_eq!(value["background"], "#2E3440");
    assert_eq!(value["bright"]["white"], "#ECEFF4");
}

#[test]
fn show_unknown_theme_fails_with_message_on_stdout() {
    cmd()
        .args(["show", "dracula"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Theme 'dracula' does not exist"));
}

#[test]
fn config_set_rejects_unknown_theme() {
    cmd()
        .args(["config", "set", "theme", "Not A Theme"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("does not exist"));
}
