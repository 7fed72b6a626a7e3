//! Integration test common infrastructure.
//!
//! Runs the abacus binary in a scratch directory with scripted stdin.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tempfile::TempDir;

/// Captured result of one scripted session.
pub struct Transcript {
    pub stdout: String,
    pub success: bool,
}

/// A scratch working directory for one calculator process.
pub struct TestSession {
    dir: TempDir,
}

impl TestSession {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            dir: TempDir::new()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `abacus.toml` into the working directory.
    pub fn write_config(&self, content: &str) -> anyhow::Result<PathBuf> {
        let path = self.dir.path().join("abacus.toml");
        std::fs::write(&path, content)?;
        Ok(path)
    }

    /// Feed `lines` to a fresh process and collect its output.
    pub fn run(&self, lines: &[&str]) -> anyhow::Result<Transcript> {
        let mut child = Command::new(env!("CARGO_BIN_EXE_abacus"))
            .current_dir(self.dir.path())
            .env("LOG_LEVEL", "DEBUG")
            .env_remove("RUST_LOG")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        {
            let mut stdin = child
                .stdin
                .take()
                .ok_or_else(|| anyhow::anyhow!("stdin not captured"))?;
            for line in lines {
                writeln!(stdin, "{line}")?;
            }
        }

        let output = child.wait_with_output()?;
        Ok(Transcript {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            success: output.status.success(),
        })
    }
}
