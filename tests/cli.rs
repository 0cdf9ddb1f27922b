use std::{
    io::Write,
    process::{Command, Output, Stdio},
};

fn verify(input: &str, args: &[&str]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_aho-verify"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn passing_case() {
    let output = verify("4 ahishers\nhe\nshe\nhis\nhers\n1\n1\n1\n1\n", &[]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "1: Passed\n1: Passed\n1: Passed\n1: Passed\n"
    );
}

#[test]
fn failing_case_exits_nonzero() {
    let output = verify("2 aaaa a aa 4 1", &[]);
    assert!(!output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "4: Passed\n3: Failed\n"
    );
}

#[test]
fn custom_alphabet_flag() {
    let output = verify("1 ACGTACGT CG 2", &["--alphabet", "ACGT"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "2: Passed\n");
}

#[test]
fn capacity_error_is_reported() {
    let output = verify("1 abc abc 1", &["--max-states", "2"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("at most 2"));
}
