use assert_cmd::Command;
use predicates::prelude::*;

fn linemark() -> Command {
    Command::cargo_bin("linemark").unwrap()
}

#[test]
fn converts_file_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.md");
    let output = dir.path().join("out.html");
    std::fs::write(&input, "# Hi\n\n*text*\n").unwrap();

    linemark().arg(&input).arg(&output).assert().success();

    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "<h1>Hi</h1>\n<p><em>text</em></p>\n"
    );
}

#[test]
fn output_is_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.md");
    let output = dir.path().join("out.html");
    std::fs::write(&input, "fresh").unwrap();
    std::fs::write(&output, "stale content").unwrap();

    linemark().arg(&input).arg(&output).assert().success();

    assert_eq!(std::fs::read_to_string(&output).unwrap(), "<p>fresh</p>\n");
}

#[test]
fn missing_input_fails_and_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.html");

    linemark()
        .arg(dir.path().join("absent.md"))
        .arg(&output)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("absent.md"));

    assert!(!output.exists());
}

#[test]
fn unwritable_output_fails_and_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.md");
    std::fs::write(&input, "x").unwrap();
    let output = dir.path().join("no_such_dir").join("out.html");

    linemark()
        .arg(&input)
        .arg(&output)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no_such_dir"));
}

#[test]
fn no_arguments_is_a_usage_error() {
    linemark()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn one_argument_is_a_usage_error() {
    linemark().arg("only.md").assert().code(2);
}

#[test]
fn three_arguments_is_a_usage_error() {
    linemark()
        .args(["a.md", "b.html", "c"])
        .assert()
        .code(2);
}

#[test]
fn empty_input_produces_empty_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.md");
    let output = dir.path().join("out.html");
    std::fs::write(&input, "").unwrap();

    linemark().arg(&input).arg(&output).assert().success();

    assert_eq!(std::fs::read_to_string(&output).unwrap(), "");
}
