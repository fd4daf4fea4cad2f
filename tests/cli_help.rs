//! E2E tests for venv's flags: help, version and argument validation

#![cfg(unix)]

mod common;

use common::*;

#[test]
fn help_exits_zero_and_documents_debug_variable() {
    let env = TestEnv::new();
    let result = env.run(&["--help"]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.contains("--create"));
    assert!(result.stdout.contains("--abort"));
    assert!(result.stdout.contains("VENV_DEBUG"));
    assert_no_calls(&env);
}

#[test]
fn short_v_prints_version_and_commit() {
    let env = TestEnv::new();
    let result = env.run(&["-v"]);

    assert!(result.success);
    assert!(result
        .stdout
        .contains(&format!("venv version: {}", env!("CARGO_PKG_VERSION"))));
    assert!(result.stdout.contains("commit:"));
}

#[test]
fn create_and_abort_together_is_a_usage_error() {
    let env = TestEnv::new();
    // Would otherwise be "already present" and succeed
    env.create_project_dir(".venv");

    let result = env.run(&["--create", "--abort"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("cannot be used with"), "stderr: {}", result.stderr);
    assert!(!result.stdout.contains("already a virtual environment"));
    assert_no_calls(&env);
}

#[test]
fn positional_arguments_are_rejected() {
    let env = TestEnv::new();
    let result = env.run(&["myproject"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("myproject"));
    assert_no_calls(&env);
}

#[test]
fn unknown_flag_exits_one() {
    let env = TestEnv::new();
    let result = env.run(&["--frobnicate"]);

    assert_eq!(result.exit_code, 1);
}
