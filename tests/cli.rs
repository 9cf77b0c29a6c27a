use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Three files with five valid TODO markers and two quoted/invalid ones.
fn fixture_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "a.js",
        "\
// TODO Veronika; 2018-05-12; fix the parser!
const s = \"// todo quoted away\";
// todo: just a note
",
    );
    write(
        dir.path(),
        "b.js",
        "\
let t = '// TODO ghost; 2020; never seen';
// TODO Bob; 20.12.2012; review this!!
",
    );
    write(dir.path(), "c.js", "// todo   cleanup later\n");
    dir
}

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn relic() -> Command {
    Command::cargo_bin("relic").unwrap()
}

#[test]
fn test_show_prints_prompt_and_table() {
    let dir = fixture_tree();

    relic()
        .arg(dir.path())
        .write_stdin("show\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Please, write your command!"))
        .stdout(predicate::str::contains("fix the parser!"))
        .stdout(predicate::str::contains("cleanup later"))
        .stdout(predicate::str::contains("fileName"));
}

#[test]
fn test_quoted_markers_are_not_collected() {
    let dir = fixture_tree();

    relic()
        .arg(dir.path())
        .write_stdin("show\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("quoted away").not())
        .stdout(predicate::str::contains("never seen").not());
}

#[test]
fn test_json_dump_has_exactly_the_valid_comments() {
    let dir = fixture_tree();

    let output = relic()
        .arg(dir.path())
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let comments: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let comments = comments.as_array().unwrap();
    assert_eq!(comments.len(), 5);

    // Within a file, comments keep line order
    let a_texts: Vec<&str> = comments
        .iter()
        .filter(|c| c["file_name"] == "a.js")
        .map(|c| c["text"].as_str().unwrap())
        .collect();
    assert_eq!(a_texts, vec!["fix the parser!", "just a note"]);

    // The year-last date was normalized
    assert!(
        comments
            .iter()
            .any(|c| c["user"] == "Bob" && c["date"] == "2012-12-20" && c["importance"] == 2)
    );
}

#[test]
fn test_wrong_command_recovers() {
    let dir = fixture_tree();

    relic()
        .arg(dir.path())
        .write_stdin("frobnicate\ndate not-a-date\nimportant\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("wrong command").count(2))
        .stdout(predicate::str::contains("review this!!"));
}

#[test]
fn test_end_of_input_exits_cleanly() {
    let dir = fixture_tree();

    relic().arg(dir.path()).write_stdin("show\n").assert().success();
}

#[test]
fn test_missing_directory_fails_startup() {
    relic()
        .arg("/definitely/not/a/real/path")
        .write_stdin("exit\n")
        .assert()
        .failure();
}
