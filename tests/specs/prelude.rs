//! Shared helpers for CLI specs

pub use assert_cmd::Command;
pub use predicates::prelude::*;
pub use similar_asserts::assert_eq;
pub use tempfile::TempDir;

/// The eboard binary with logging limited to warnings
pub fn eboard() -> Command {
    let mut cmd = Command::cargo_bin("eboard").unwrap();
    cmd.env("RUST_LOG", "warn");
    cmd
}

/// Stdout of a successful `eboard` invocation
pub fn stdout_of(args: &[&str]) -> String {
    let output = eboard().args(args).output().unwrap();
    assert!(
        output.status.success(),
        "eboard {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

/// Scratch directory for config files
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        self.dir.path()
    }

    /// Write `content` to `name` and return its path as a string
    pub fn file(&self, name: &str, content: &str) -> String {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path.to_string_lossy().into_owned()
    }
}
