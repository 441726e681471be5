//! # Error Handling
//!
//! This module defines the centralized error type for `docwiki`. It uses the
//! `thiserror` library to build an `Error` enum covering every failure the
//! pipeline can report, grouped the same way the pipeline fails:
//!
//! - **Configuration errors**: unknown generator or action names, missing
//!   required inputs, unreadable configuration files. These are detected
//!   before any external process runs or any file is touched.
//! - **Precondition errors**: the staging directory is already present (a
//!   leftover from an earlier run), or the staging directory or generated
//!   documentation is missing when publishing.
//! - **Matching errors**: no class survives the include rules.
//! - **External-process errors**: a spawned tool could not start or exited
//!   with a non-zero status.
//!
//! Every variant is fatal. Nothing is retried and nothing is rolled back; the
//! error travels to the top of the pipeline and aborts the remaining actions.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for docwiki operations
#[derive(Error, Debug)]
pub enum Error {
    /// The selected engine does not name a registered generator.
    #[error("Unknown generator '{name}' (known generators: {known})")]
    UnknownGenerator { name: String, known: String },

    /// The action manifest contains a name with no registered action.
    #[error("Unknown action '{name}' (known actions: {known})")]
    UnknownAction { name: String, known: String },

    /// The generator's required inputs are not all defined.
    #[error("Missing required configuration for generator '{generator}': {}", missing.join(", "))]
    MissingInputs {
        generator: String,
        missing: Vec<String>,
    },

    /// The configuration file or an input override could not be understood.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// The staging directory survived a previous run.
    #[error("{} already exists but shouldn't", path.display())]
    StagingExists { path: PathBuf },

    /// The staging directory was expected to hold the cloned wiki.
    #[error("Staging directory {} does not exist; was the wiki cloned?", path.display())]
    StagingMissing { path: PathBuf },

    /// The generator left no documentation folder to publish.
    #[error("Documentation folder {} does not exist; did the generator run?", path.display())]
    DocsMissing { path: PathBuf },

    /// Filtering the class catalog left nothing to document.
    #[error("No classes matches include rules")]
    NoClassesMatch,

    /// A spawned process exited unsuccessfully.
    #[error("Command `{command}` failed in {} ({status}): {stderr}", cwd.display())]
    Command {
        command: String,
        cwd: PathBuf,
        status: String,
        stderr: String,
    },

    /// A process could not be started at all.
    #[error("Failed to start `{command}`: {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The source repository's identity could not be determined.
    #[error("Cannot resolve repository context: {message}")]
    RepoContext { message: String },

    /// The class catalog printed by the runtime was not usable.
    #[error("Cannot read class catalog: {message}")]
    ClassCatalog { message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A glob pattern error, wrapped from `glob::PatternError`.
    #[error("Glob pattern error: {0}")]
    Glob(#[from] glob::PatternError),

    /// A URL parsing error, wrapped from `url::ParseError`.
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// A regular expression error, wrapped from `regex::Error`.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_unknown_generator() {
        let error = Error::UnknownGenerator {
            name: "doxygen".to_string(),
            known: "clean-phpdoc-md".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Unknown generator"));
        assert!(display.contains("doxygen"));
        assert!(display.contains("clean-phpdoc-md"));
    }

    #[test]
    fn test_error_display_missing_inputs() {
        let error = Error::MissingInputs {
            generator: "clean-phpdoc-md".to_string(),
            missing: vec!["class_root_namespace".to_string(), "include".to_string()],
        };
        let display = format!("{}", error);
        assert!(display.contains("Missing required configuration"));
        assert!(display.contains("class_root_namespace, include"));
    }

    #[test]
    fn test_error_display_config_parse_with_hint() {
        let error = Error::ConfigParse {
            message: "Invalid input override 'engine'".to_string(),
            hint: Some("Use --input name=value".to_string()),
        };
        let display = format!("{}", error);
        assert!(display.contains("Configuration parsing error"));
        assert!(display.contains("hint:"));
        assert!(display.contains("name=value"));
    }

    #[test]
    fn test_error_display_staging_exists() {
        let error = Error::StagingExists {
            path: PathBuf::from("/tmp/docs.old"),
        };
        assert_eq!(
            format!("{}", error),
            "/tmp/docs.old already exists but shouldn't"
        );
    }

    #[test]
    fn test_error_display_docs_missing() {
        let error = Error::DocsMissing {
            path: PathBuf::from("/work/build/wiki"),
        };
        assert_eq!(
            format!("{}", error),
            "Documentation folder /work/build/wiki does not exist; did the generator run?"
        );
    }

    #[test]
    fn test_error_display_no_classes() {
        let display = format!("{}", Error::NoClassesMatch);
        assert_eq!(display, "No classes matches include rules");
    }

    #[test]
    fn test_error_display_command() {
        let error = Error::Command {
            command: "git clone".to_string(),
            cwd: PathBuf::from("/work"),
            status: "exit status: 128".to_string(),
            stderr: "Authentication failed".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("git clone"));
        assert!(display.contains("/work"));
        assert!(display.contains("Authentication failed"));
    }

    #[test]
    fn test_error_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let error: Error = io_error.into();
        let display = format!("{}", error);
        assert!(display.contains("I/O error"));
        assert!(display.contains("File not found"));
    }

    #[test]
    fn test_error_from_regex_error() {
        let regex_error = regex::Regex::new("(unclosed").unwrap_err();
        let error: Error = regex_error.into();
        assert!(format!("{}", error).contains("Regex error"));
    }
}
