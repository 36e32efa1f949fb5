use std::process::{Command, Output};

const EXPECTED: &str = "Main start  : main\nBlock start : block\nfuncScope start : block\n";

fn scopedemo() -> Output {
    Command::new(env!("CARGO_BIN_EXE_scopedemo"))
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn scopedemo")
}

#[test]
fn prints_every_scope_in_order() {
    let output = scopedemo();
    assert!(output.status.success());
    pretty_assertions::assert_eq!(String::from_utf8_lossy(&output.stdout), EXPECTED);
    assert!(output.stderr.is_empty());
}

#[test]
fn repeated_runs_are_identical() {
    let first = scopedemo();
    let second = scopedemo();
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.status.code(), Some(0));
    assert_eq!(second.status.code(), Some(0));
}

#[test]
fn logging_stays_off_stdout() {
    let output = Command::new(env!("CARGO_BIN_EXE_scopedemo"))
        .env("RUST_LOG", "trace")
        .output()
        .expect("failed to spawn scopedemo");
    assert!(output.status.success());
    pretty_assertions::assert_eq!(String::from_utf8_lossy(&output.stdout), EXPECTED);
    assert!(!output.stderr.is_empty());
}
