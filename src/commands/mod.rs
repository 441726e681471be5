//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the `docwiki`
//! command-line tool. Each subcommand is defined in its own file.
//!
//! ## Structure
//!
//! Each command module contains:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and performs the
//!   command's logic by calling into the `docwiki` library.
//!
//! `run` and `validate` share [`SettingsArgs`], the options that decide where
//! the configuration comes from.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;

use docwiki::config::{LoadOptions, Settings};
use docwiki::registry;

pub mod completions;
pub mod list;
pub mod run;
pub mod validate;

/// Options that select and override the run configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct SettingsArgs {
    /// Path to the configuration file (defaults to .docwiki.yaml in the working directory)
    #[arg(short, long, value_name = "FILE", env = "DOCWIKI_CONFIG")]
    pub config: Option<PathBuf>,

    /// Generator engine, overriding the configured one
    #[arg(short, long, value_name = "NAME")]
    pub engine: Option<String>,

    /// Set an input (repeatable), e.g. --input class_root_namespace=App
    #[arg(short, long = "input", value_name = "NAME=VALUE")]
    pub inputs: Vec<String>,

    /// Directory to run in (defaults to the current directory)
    #[arg(short = 'C', long, value_name = "DIR")]
    pub working_dir: Option<PathBuf>,
}

impl SettingsArgs {
    /// Load settings from every source, including `INPUT_*` variables.
    pub fn load(&self) -> Result<Settings> {
        let settings = Settings::load(&LoadOptions {
            config: self.config.clone(),
            working_dir: self.working_dir.clone(),
            engine: self.engine.clone(),
            inputs: self.inputs.clone(),
            read_env: true,
        })?;
        Ok(settings)
    }
}

/// The configured engine, failing when none was given.
pub fn require_engine(settings: &Settings) -> Result<String> {
    let engine = settings.engine().trim();
    if engine.is_empty() {
        bail!(
            "No engine configured (known generators: {}); set `engine` in the configuration file, INPUT_ENGINE or --engine",
            registry::generator_names().join(", ")
        );
    }
    Ok(engine.to_string())
}
