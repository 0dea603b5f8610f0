//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Path to the color-themer binary
pub fn color_themer_bin() -> &'static str {
    env!("CARGO_BIN_EXE_color-themer")
}

/// Isolated config directory and data file for one test.
pub struct Workspace {
    /// Keeps the directory alive for the test's duration
    pub temp: TempDir,
}

impl Workspace {
    /// Creates an empty workspace.
    pub fn new() -> Self {
        Self {
            temp: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Root of the workspace.
    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Config directory handed to the binary.
    pub fn config_dir(&self) -> PathBuf {
        self.temp.path().join("config")
    }

    /// Palette data file handed to the binary.
    pub fn data_file(&self) -> PathBuf {
        self.temp.path().join("palettes.json")
    }

    /// Command with isolated config and a fixed random seed, without
    /// `--data-file`.
    pub fn bare_command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(color_themer_bin());
        cmd.env("COLOR_THEMER_CONFIG_DIR", self.config_dir())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .args(args)
            .args(["--seed", "7"]);
        cmd
    }

    /// Runs the binary against this workspace's data file.
    pub fn run(&self, args: &[&str]) -> Output {
        let data_file = self.data_file();
        self.bare_command(args)
            .arg("--data-file")
            .arg(&data_file)
            .output()
            .expect("Failed to execute command")
    }

    /// Runs the binary and asserts it exited with code 0.
    pub fn run_ok(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert_success(&output, &args.join(" "));
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    /// Runs the binary and parses stdout as JSON.
    pub fn run_json(&self, args: &[&str]) -> serde_json::Value {
        let stdout = self.run_ok(args);
        serde_json::from_str(&stdout)
            .unwrap_or_else(|e| panic!("stdout of '{}' is not JSON ({e}): {stdout}", args.join(" ")))
    }

    /// Writes `content` to a file in the workspace and returns its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp.path().join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Ids of the stored palettes in display order.
    pub fn ids(&self) -> Vec<u64> {
        self.run_json(&["list", "--json"])
            .as_array()
            .expect("list --json should print an array")
            .iter()
            .map(|set| set["id"].as_u64().expect("id should be a number"))
            .collect()
    }
}

/// Asserts a zero exit status, printing stderr otherwise.
pub fn assert_success(output: &Output, what: &str) {
    assert_eq!(
        output.status.code(),
        Some(0),
        "'{what}' should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Asserts the exit code and returns stderr.
pub fn assert_exit_code(output: &Output, code: i32) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    assert_eq!(
        output.status.code(),
        Some(code),
        "unexpected exit code. stdout: {} stderr: {stderr}",
        String::from_utf8_lossy(&output.stdout)
    );
    stderr
}

/// An import file with one named and one unnamed palette.
pub fn sample_import_json() -> &'static str {
    r##"{
  "version": "1.0",
  "exportedAt": "2025-01-01T00:00:00Z",
  "colorSets": [
    { "baseColor": "#FF0000", "customName": "Fire", "colorCount": 11 },
    { "baseColor": "#10B981", "colorCount": 5 }
  ]
}"##
}
