use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

const DOCUMENT: &str = r#"{
    "precise": false,
    "root": {
        "type": "Sequence",
        "element_id": 0,
        "children": [
            { "node": { "type": "Block", "element_id": 1, "debug_info": { "filename": "a.src", "start_line": 3, "end_line": 7 } } },
            { "node": { "type": "For", "element_id": 2, "root": { "type": "Block", "element_id": 3 } } }
        ]
    },
    "flops": { "1": 5, "3": null }
}"#;

fn document_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn flop_tool() -> Command {
    Command::cargo_bin("flop-tool").unwrap()
}

#[test]
fn test_prints_report_with_trailing_blank_line() {
    let file = document_file(DOCUMENT);

    flop_tool()
        .arg(file.path())
        .assert()
        .success()
        .stdout(
            "Approximation\n\
             Sequence NOT MEASURED\n\
             \x20 Block a.src:3-7 5\n\
             \x20 For NOT MEASURED\n\
             \x20   Block NULL\n\
             \n",
        );
}

#[test]
fn test_missing_argument_exits_with_usage() {
    flop_tool()
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Usage: flop-tool"));
}

#[test]
fn test_extra_argument_exits_with_usage() {
    let file = document_file(DOCUMENT);

    flop_tool()
        .arg(file.path())
        .arg("second.json")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Usage: flop-tool"));
}

#[test]
fn test_unreadable_file_exits_with_error() {
    flop_tool()
        .arg("/no/such/sdfg.json")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains(
            "Could not open file: /no/such/sdfg.json",
        ));
}

#[test]
fn test_malformed_document_exits_with_error() {
    let file = document_file(r#"{ "root": { "type": "Block" "#);

    flop_tool()
        .arg(file.path())
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Malformed flop document"));
}

#[test]
fn test_json_format() {
    let file = document_file(DOCUMENT);

    flop_tool()
        .arg(file.path())
        .args(["--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""precision": "Approximation""#))
        .stdout(predicate::str::contains(r#""state": "not_measured""#));
}

#[test]
fn test_indent_and_hidden_debug_info() {
    let file = document_file(DOCUMENT);

    flop_tool()
        .arg(file.path())
        .args(["--indent", "4", "--no-debug-info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("    Block 5\n"))
        .stdout(predicate::str::contains("        Block NULL\n"))
        .stdout(predicate::str::contains("a.src").not());
}

#[test]
fn test_output_file() {
    let file = document_file(DOCUMENT);
    let out = NamedTempFile::new().unwrap();

    flop_tool()
        .arg(file.path())
        .arg("--output")
        .arg(out.path())
        .assert()
        .success()
        .stdout("");

    let written = std::fs::read_to_string(out.path()).unwrap();
    assert!(written.starts_with("Approximation\nSequence NOT MEASURED\n"));
    assert!(written.ends_with("Block NULL\n\n"));
}

#[test]
fn test_out_of_range_indent_exits_with_usage() {
    let file = document_file(DOCUMENT);

    flop_tool()
        .arg(file.path())
        .args(["--indent", "18446744073709551615"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Usage: flop-tool"));

    flop_tool()
        .arg(file.path())
        .args(["--indent", "17"])
        .assert()
        .code(1)
        .stdout("");
}

#[test]
fn test_color_applies_when_piped() {
    let file = document_file(DOCUMENT);

    flop_tool()
        .arg(file.path())
        .arg("--color")
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b["))
        .stdout(predicate::str::contains("NOT MEASURED"));
}

#[test]
fn test_unwritable_output_names_path() {
    let file = document_file(DOCUMENT);
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("missing").join("report.txt");

    flop_tool()
        .arg(file.path())
        .arg("--output")
        .arg(&target)
        .assert()
        .code(1)
        .stderr(predicate::str::contains(format!(
            "Could not write file: {}",
            target.display()
        )));
}

#[test]
fn test_help_exits_successfully() {
    flop_tool()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("flop-tool"));
}
