//! Test environment builder for isolated venv testing.
//!
//! Provides `TestEnv` - an empty project directory plus a directory of fake
//! `python`, `poetry` and `flit` executables placed first on `PATH`. Every
//! fake appends its command line to a log file, so tests can assert exactly
//! which external commands venv ran and in which order.

use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Shell script used for every fake tool.
///
/// `python -m venv <dir>` creates `<dir>/bin/python` as a copy of itself so
/// later steps can call the environment's interpreter. Setting
/// `VENV_TEST_FAIL` to a command-line prefix makes matching calls exit 1.
/// With `VENV_TEST_PARTIAL` set, `-m venv` creates its directory even when
/// it then fails.
const FAKE_TOOL: &str = r#"#!/bin/sh
line="$(basename "$0") $*"
echo "$line" >> "$VENV_TEST_LOG"
if [ -n "$VENV_TEST_PARTIAL" ] && [ "$1" = "-m" ] && [ "$2" = "venv" ]; then
  mkdir -p "$3"
fi
if [ -n "$VENV_TEST_FAIL" ]; then
  case "$line" in
    "$VENV_TEST_FAIL"*) exit 1 ;;
  esac
fi
if [ "$1" = "-m" ] && [ "$2" = "venv" ]; then
  mkdir -p "$3/bin"
  cp "$0" "$3/bin/python"
fi
exit 0
"#;

/// Result of running the venv CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Temporary directory for the project
    pub project_root: TempDir,
    /// Directory holding the fake tools and the call log
    tools_dir: TempDir,
    /// Path to the venv binary
    venv_bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let env = Self {
            project_root: TempDir::new().expect("Failed to create project dir"),
            tools_dir: TempDir::new().expect("Failed to create tools dir"),
            venv_bin: PathBuf::from(env!("CARGO_BIN_EXE_venv")),
        };

        for tool in ["python", "poetry", "flit"] {
            let path = env.bin_dir().join(tool);
            std::fs::create_dir_all(env.bin_dir()).expect("Failed to create bin dir");
            std::fs::write(&path, FAKE_TOOL).expect("Failed to write fake tool");
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
                .expect("Failed to chmod fake tool");
        }

        env
    }

    fn bin_dir(&self) -> PathBuf {
        self.tools_dir.path().join("bin")
    }

    fn log_path(&self) -> PathBuf {
        self.tools_dir.path().join("calls.log")
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Write raw bytes to a file in the project
    pub fn write_project_bytes(&self, relative_path: &str, content: &[u8]) {
        std::fs::write(self.project_path(relative_path), content).expect("Failed to write file");
    }

    /// Create a directory in the project
    pub fn create_project_dir(&self, relative_path: &str) {
        std::fs::create_dir_all(self.project_path(relative_path))
            .expect("Failed to create directory");
    }

    /// Command lines recorded by the fake tools, in call order
    pub fn calls(&self) -> Vec<String> {
        match std::fs::read_to_string(self.log_path()) {
            Ok(log) => log.lines().map(str::to_string).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Names of the entries in the project directory
    pub fn project_entries(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.project_root.path())
            .expect("Failed to list project dir")
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    /// Run venv in the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run venv in the project root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = self.command(args);
        cmd.env("NO_COLOR", "1").env("TERM", "dumb");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute venv");
        output_to_result(output)
    }

    /// Run venv with a color-capable TERM and no NO_COLOR; the output
    /// streams are still pipes
    #[allow(dead_code)]
    pub fn run_with_color_term(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = self.command(args);
        cmd.env_remove("NO_COLOR")
            .env("TERM", "xterm-256color")
            .env("LANG", "en_US.UTF-8");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute venv");
        output_to_result(output)
    }

    fn command(&self, args: &[&str]) -> Command {
        let path = format!("{}:/usr/bin:/bin", self.bin_dir().display());

        let mut cmd = Command::new(&self.venv_bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("PATH", path)
            .env("VENV_TEST_LOG", self.log_path())
            .env_remove("VENV_DEBUG")
            .env_remove("VENV_TEST_FAIL")
            .env_remove("VENV_TEST_PARTIAL")
            .stdin(Stdio::null());
        cmd
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

#[allow(dead_code)]
pub fn assert_no_calls(env: &TestEnv) {
    let calls = env.calls();
    assert!(calls.is_empty(), "expected no external commands, got: {:?}", calls);
}
