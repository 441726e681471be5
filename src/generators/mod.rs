//! # Documentation Generators
//!
//! A generator wraps one external documentation tool. It tells the pipeline
//! which packages the tool needs, whether the inputs it depends on are set,
//! which steps must run before and after the tool, and how to invoke the tool
//! itself.
//!
//! Generators are created per run from a [`crate::RunEnv`] through the
//! registry and hold no state between runs. Before/after steps are built
//! fresh on every request from the current inputs.

use std::collections::BTreeMap;

use crate::context::RepoContext;
use crate::error::{Error, Result};
use crate::step::StepDefinition;

pub mod clean_phpdoc_md;
pub mod include_rules;
pub mod phpdoc_config;

pub use clean_phpdoc_md::CleanPhpdocMd;

/// Package name → version constraint.
pub type Requirements = BTreeMap<String, String>;

/// Capabilities every documentation generator provides.
pub trait Generator {
    /// Registry name of the generator.
    fn name(&self) -> &'static str;

    /// Packages that must be installed globally, regardless of inputs.
    fn global_composer_requirements(&self) -> Requirements;

    /// Packages this generator needs in the project.
    fn composer_requirements(&self) -> Requirements;

    /// Required inputs that are currently empty. Must not have side effects.
    fn missing_inputs(&self) -> Vec<&'static str>;

    /// Whether every required input is set.
    fn check_if_all_input_options_defined(&self) -> bool {
        self.missing_inputs().is_empty()
    }

    /// Steps to run before generation.
    fn before_actions(&self, context: &RepoContext) -> Vec<StepDefinition>;

    /// Steps to run after generation.
    fn after_actions(&self, context: &RepoContext) -> Vec<StepDefinition>;

    /// Invoke the documentation tool.
    fn generate(&self) -> Result<()>;
}

/// Fail with [`Error::MissingInputs`] unless all required inputs are set.
pub fn validate_generator(generator: &dyn Generator) -> Result<()> {
    if generator.check_if_all_input_options_defined() {
        return Ok(());
    }
    Err(Error::MissingInputs {
        generator: generator.name().to_string(),
        missing: generator
            .missing_inputs()
            .into_iter()
            .map(str::to_string)
            .collect(),
    })
}
