//! # Docwiki Library
//!
//! This library turns the source code of a PHP repository into Markdown API
//! documentation and publishes it to the repository's wiki. It is designed to
//! be used by the `docwiki` command-line tool, typically from a CI job, but
//! the pipeline can be driven directly from Rust as well.
//!
//! ## Quick Example
//!
//! ```
//! use docwiki::config::{inputs, Settings};
//! use docwiki::generators::validate_generator;
//! use docwiki::{registry, RunEnv};
//!
//! let mut settings = Settings::new("/path/to/project");
//! settings.set_input(inputs::CLASS_ROOT_NAMESPACE, "App");
//!
//! let env = RunEnv::system(settings);
//! let generator = registry::make_generator("clean-phpdoc-md", &env).unwrap();
//!
//! // `include` is still missing, so the run would stop before doing anything.
//! let err = validate_generator(generator.as_ref()).unwrap_err();
//! assert!(err.to_string().contains("include"));
//! ```
//!
//! ## Core Concepts
//!
//! - **Settings (`config`)**: configuration inputs and the ordered action
//!   manifest, loaded once from defaults, `.docwiki.yaml`, `INPUT_*`
//!   variables and command-line overrides.
//! - **Generators (`generators`)**: wrappers around one documentation tool
//!   each. They declare the packages they need, the inputs they require and
//!   the steps to run before and after the tool.
//! - **Actions (`actions`)**: the pipeline stages, from cloning the wiki to
//!   pushing the updated pages.
//! - **Registry (`registry`)**: the fixed name → constructor tables for
//!   generators and actions.
//! - **Orchestrator (`orchestrator`)**: validates the generator, resolves the
//!   repository context and runs the applicable actions in order.
//! - **Processes (`exec`, `git`)**: every external tool runs through the
//!   [`exec::CommandRunner`] trait.
//!
//! ## Execution Flow
//!
//! 1. **Resolve**: look up the generator for the configured engine.
//! 2. **Validate**: stop if any required input is empty.
//! 3. **Context**: determine the repository and branch or tag.
//! 4. **Actions**: clone the wiki, install packages, run the generator's
//!    before-steps, generate, run the after-steps, update the wiki.

use std::sync::Arc;

pub mod actions;
pub mod config;
pub mod context;
pub mod error;
pub mod exec;
pub mod generators;
pub mod git;
pub mod orchestrator;
pub mod output;
pub mod registry;
pub mod step;

#[cfg(test)]
mod rules_proptest;

use config::Settings;
use exec::{CommandRunner, SystemCommandRunner};

/// State shared by every generator and action of one run.
#[derive(Clone)]
pub struct RunEnv {
    pub settings: Arc<Settings>,
    pub runner: Arc<dyn CommandRunner>,
}

impl RunEnv {
    pub fn new(settings: Settings, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            settings: Arc::new(settings),
            runner,
        }
    }

    /// Environment that spawns real processes.
    pub fn system(settings: Settings) -> Self {
        Self::new(settings, Arc::new(SystemCommandRunner))
    }
}
