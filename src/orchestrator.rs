//! Orchestrator for a complete documentation run
//!
//! A run goes through these stages, in order:
//! 1. Build the generator named by the engine setting
//! 2. Check that its required inputs are set (nothing is spawned or written
//!    before this passes)
//! 3. Resolve the repository context once
//! 4. Build the configured actions, in manifest order
//! 5. Run each action that applies, stopping at the first failure
//!
//! A failing action leaves whatever the earlier actions did in place.

use log::info;

use crate::actions::Action;
use crate::context::RepoContext;
use crate::error::Result;
use crate::generators::{validate_generator, Generator};
use crate::registry;
use crate::RunEnv;

/// Which actions a run executed and which it skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub executed: Vec<&'static str>,
    pub skipped: Vec<&'static str>,
}

/// Drives one run with a fixed environment.
pub struct Orchestrator {
    env: RunEnv,
}

impl Orchestrator {
    pub fn new(env: RunEnv) -> Self {
        Self { env }
    }

    /// Run the generator registered as `generator_name`.
    pub fn run(&self, generator_name: &str) -> Result<RunReport> {
        let generator = registry::make_generator(generator_name, &self.env)?;
        self.run_generator(generator.as_ref())
    }

    /// Run an already built generator through the configured actions.
    pub fn run_generator(&self, generator: &dyn Generator) -> Result<RunReport> {
        validate_generator(generator)?;

        let context = RepoContext::resolve(&self.env.settings, self.env.runner.as_ref())?;
        info!("Documenting {} with {}", context, generator.name());

        let actions = registry::make_actions(self.env.settings.actions(), &self.env)?;
        run_actions(generator, &context, &actions)
    }
}

/// Run `actions` in order against `generator`.
///
/// Actions whose `should_run` is false are skipped without logging anything.
/// The first failing action ends the run with its error.
pub fn run_actions(
    generator: &dyn Generator,
    context: &RepoContext,
    actions: &[Box<dyn Action>],
) -> Result<RunReport> {
    let mut report = RunReport::default();
    for action in actions {
        if !action.should_run(generator, context) {
            report.skipped.push(action.name());
            continue;
        }
        if let Some(description) = action.description() {
            info!("{}", description);
        }
        action.exec(generator, context)?;
        report.executed.push(action.name());
    }
    Ok(report)
}
