use std::process::{Command, Output};

const KEY_ONE: &str = "0000000000000000000000000000000000000000000000000000000000000001";
const ADDRESS_ONE: &str = "7e5f4552091a69125d5dfcb7b8c2659029395bdf";

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_address_from_key"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_known_key() {
    let output = run(&[KEY_ONE]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), format!("{}\n", ADDRESS_ONE));
}

#[test]
fn test_repeated_runs_identical() {
    let key = "4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318";
    let first = run(&[key]);
    let second = run(&[key]);
    assert_eq!(first.status.code(), Some(0));
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(stdout(&first), "2c7536e3605d9c16a7a3d7b1898e529396a65c23\n");
}

#[test]
fn test_no_arguments_is_usage_error() {
    let output = run(&[]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}

#[test]
fn test_two_arguments_is_usage_error() {
    let output = run(&[KEY_ONE, KEY_ONE]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_malformed_hex_is_decode_error() {
    for bad in ["0".repeat(63), format!("{}zz", "0".repeat(62))] {
        let output = run(&[bad.as_str()]);
        assert_eq!(output.status.code(), Some(1));
        assert!(output.stdout.is_empty());
        assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid hex"));
    }
}

#[test]
fn test_hyphen_leading_key_is_decode_error() {
    let even = format!("-{}", "0".repeat(63));
    for bad in ["-deadbeef", even.as_str()] {
        let output = run(&[bad]);
        assert_eq!(output.status.code(), Some(1), "input {}", bad);
        assert!(output.stdout.is_empty());
        assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid hex"));
    }
}

#[test]
fn test_wrong_length_is_invalid_key() {
    let output = run(&["0001"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid private key"));
}

#[test]
fn test_zero_key_is_invalid_key() {
    let output = run(&["0".repeat(64).as_str()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid private key"));
}

#[test]
fn test_output_formats() {
    let output = run(&["--format", "prefixed", KEY_ONE]);
    assert_eq!(stdout(&output), format!("0x{}\n", ADDRESS_ONE));

    let output = run(&["-f", "checksum", KEY_ONE]);
    assert_eq!(
        stdout(&output),
        "0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf\n"
    );
}

#[test]
fn test_public_key_flag() {
    let output = run(&["-k", KEY_ONE]);
    assert_eq!(output.status.code(), Some(0));
    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        [
            "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798\
             483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8",
            ADDRESS_ONE,
        ]
    );
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let output = run(&["-vv", KEY_ONE]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), format!("{}\n", ADDRESS_ONE));
    assert!(!String::from_utf8_lossy(&output.stderr).contains(KEY_ONE));
}
