use std::fs;

use indoc::indoc;
use tempfile::tempdir;

use super::*;
use crate::diag::FixState;

fn sample_json() -> &'static str {
    indoc! {r#"
        {
          "type": "Program",
          "body": [
            {"type": "EmptyStatement"},
            {"type": "DebuggerStatement"},
            {
              "type": "ExpressionStatement",
              "expression": {
                "type": "CallExpression",
                "callee": {"type": "Identifier", "name": "main"},
                "arguments": []
              }
            }
          ]
        }
    "#}
}

#[test]
fn test_optimizes_file_in_place() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("program.json");
    fs::write(&path, sample_json()).expect("seed file");

    let mut diags = Reporter::new();
    process_file(&path, &BatchOptions::default(), &mut diags).expect("pipeline should succeed");

    let written = fs::read_to_string(&path).expect("optimized file");
    let tree: Node = serde_json::from_str(&written).expect("written output should parse");
    assert_eq!(tree.block().map(|block| block.len()), Some(1));
    assert_eq!(diags.fix_count(), 2);
    assert_eq!(diags.state(), FixState::AllFixed);
}

#[test]
fn test_dry_run_leaves_file_untouched() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("program.json");
    fs::write(&path, sample_json()).expect("seed file");

    let mut diags = Reporter::new();
    let opts = BatchOptions {
        write: false,
        dump: false,
    };
    let output = process_file(&path, &opts, &mut diags).expect("pipeline should succeed");

    assert_eq!(fs::read_to_string(&path).expect("file"), sample_json());
    assert!(output.contains("CallExpression"));
    assert_eq!(diags.fix_count(), 2);
}

#[test]
fn test_missing_file_is_a_read_failure() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("absent.json");

    let mut diags = Reporter::new();
    let error = process_file(&path, &BatchOptions::default(), &mut diags)
        .expect_err("read should fail");
    assert!(matches!(error, FileError::Read(..)));
}

#[test]
fn test_bad_file_does_not_stop_the_batch() {
    let dir = tempdir().expect("tempdir");
    let bad = dir.path().join("bad.json");
    let good = dir.path().join("good.json");
    fs::write(&bad, "not json at all").expect("seed bad file");
    fs::write(&good, sample_json()).expect("seed good file");

    let mut diags = Reporter::new();
    let failures = run(
        &[bad.clone(), good.clone()],
        &BatchOptions::default(),
        &mut diags,
    );

    assert_eq!(failures.len(), 1);
    assert!(matches!(failures[0], FileError::Parse(..)));

    let rewritten: Node = serde_json::from_str(&fs::read_to_string(&good).expect("good file"))
        .expect("rewritten output should parse");
    assert_eq!(rewritten.block().map(|block| block.len()), Some(1));
    assert_eq!(diags.state(), FixState::AllFixed);
}
