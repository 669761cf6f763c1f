//! Test harness for running the `sizzle` CLI as a subprocess and validating
//! its output.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::OnceLock;
use tempfile::TempDir;

/// Result of running the `sizzle` CLI.
#[derive(Debug)]
pub struct CliResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn from_output(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    pub fn assert_success(&self) {
        assert!(
            self.success,
            "Command failed with exit code {}.\nstdout: {}\nstderr: {}",
            self.exit_code, self.stdout, self.stderr
        );
    }

    pub fn assert_failure(&self) {
        assert!(
            !self.success,
            "Expected command to fail, but it succeeded.\nstdout: {}",
            self.stdout
        );
    }
}

/// A test harness for running `sizzle` CLI commands against a scratch
/// directory.
pub struct TestHarness {
    pub work_dir: TempDir,
}

impl TestHarness {
    pub fn new() -> Self {
        Self {
            work_dir: TempDir::new().expect("failed to create work dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.work_dir.path()
    }

    /// Runs `sizzle` as a subprocess (via `cargo run`), more reliable for
    /// CLI integration tests than linking against `sizzle-cli` directly.
    pub fn run_cli(&self, args: &[&str]) -> CliResult {
        let manifest_path = workspace_manifest_path();

        let output = Command::new("cargo")
            .args(["run", "--quiet", "--manifest-path"])
            .arg(&manifest_path)
            .args(["-p", "sizzle-cli", "--bin", "sizzle", "--"])
            .args(args)
            .current_dir(self.path())
            .output();

        match output {
            Ok(out) => CliResult::from_output(out),
            Err(e) => CliResult {
                success: false,
                exit_code: -1,
                stdout: String::new(),
                stderr: format!("failed to run CLI: {e}"),
            },
        }
    }

    /// Runs the pipeline over a scenes directory in dry-run mode.
    pub fn dry_run(&self, scenes_dir: &Path, style: &str) -> CliResult {
        self.run_cli(&["--dry-run", "--style", style, scenes_dir.to_str().unwrap()])
    }

    pub fn doctor(&self) -> CliResult {
        self.run_cli(&["doctor"])
    }

    pub fn lint(&self, scenes_dir: &Path) -> CliResult {
        self.run_cli(&["lint", scenes_dir.to_str().unwrap()])
    }
}

fn workspace_manifest_path() -> PathBuf {
    static PATH: OnceLock<PathBuf> = OnceLock::new();
    PATH.get_or_init(|| {
        let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let manifest_path = manifest_dir.join("..").join("..").join("Cargo.toml");
        manifest_path.canonicalize().unwrap_or(manifest_path)
    })
    .clone()
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Checks an output file exists under `out_root`.
pub fn validate_output_exists(out_root: &Path, rel_path: &str) -> bool {
    out_root.join(rel_path).exists()
}

/// Reads a written manifest JSON file back for assertions.
pub fn read_manifest(path: &Path) -> serde_json::Value {
    let data = fs::read_to_string(path).expect("failed to read manifest output");
    serde_json::from_str(&data).expect("manifest output is not valid JSON")
}
