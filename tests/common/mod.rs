//! Shared test utilities for E2E tests.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_config(configs::COMPLETE);
//!     fixture.command().arg("validate").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::env;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::configs;
    pub use super::TestFixture;
}

/// Common `.docwiki.yaml` snippets for testing.
#[allow(dead_code)]
pub mod configs {
    /// Every input the clean-phpdoc-md generator requires, plus a fixed
    /// repository context so no git lookup is needed.
    pub const COMPLETE: &str = r#"
engine: clean-phpdoc-md
repository: acme/widgets
branch: main
inputs:
  class_root_namespace: Acme
  include: |
    Acme/**
    !Acme/Internal/**
"#;

    /// Generator selected but no inputs set.
    pub const MISSING_INPUTS: &str = r#"
engine: clean-phpdoc-md
repository: acme/widgets
branch: main
"#;

    /// Complete configuration whose only action does not apply to the
    /// generator, so a run succeeds without spawning anything.
    pub const NOTHING_TO_DO: &str = r#"
engine: clean-phpdoc-md
repository: acme/widgets
branch: main
actions:
  - install-global-packages
inputs:
  class_root_namespace: Acme
  include: Acme/**
"#;

    /// Manifest naming an action that does not exist.
    pub const UNKNOWN_ACTION: &str = r#"
engine: clean-phpdoc-md
actions:
  - clone-wiki
  - publish-pages
inputs:
  class_root_namespace: Acme
  include: Acme/**
"#;

    /// A top-level key the configuration does not know.
    pub const UNKNOWN_KEY: &str = r#"
engine: clean-phpdoc-md
output: docs
"#;

    /// Invalid YAML for error testing.
    pub const INVALID_YAML: &str = "engine: [unclosed";
}

/// A temporary working directory with an optional `.docwiki.yaml`.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a `.docwiki.yaml` configuration file with the given content.
    pub fn with_config(self, content: &str) -> Self {
        self.temp_dir
            .child(".docwiki.yaml")
            .write_str(content)
            .expect("Failed to write config file");
        self
    }

    /// Create a directory (and its parents) inside the fixture.
    #[allow(dead_code)]
    pub fn with_dir(self, path: &str) -> Self {
        self.temp_dir
            .child(path)
            .create_dir_all()
            .expect("Failed to create directory");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get the path to the config file.
    #[allow(dead_code)]
    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.path().join(".docwiki.yaml")
    }

    /// Create a command running in this fixture's directory.
    ///
    /// CI variables that would leak inputs or repository context from the
    /// outer environment are removed.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("docwiki");
        cmd.current_dir(self.path())
            .env_remove("DOCWIKI_CONFIG")
            .env_remove("GITHUB_REPOSITORY")
            .env_remove("GITHUB_REF")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1");
        for (key, _) in env::vars() {
            if key.starts_with("INPUT_") {
                cmd.env_remove(key);
            }
        }
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
