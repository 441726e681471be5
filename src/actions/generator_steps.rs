//! Run a generator's own before/after steps.

use log::info;

use super::Action;
use crate::context::RepoContext;
use crate::error::Result;
use crate::generators::Generator;
use crate::step::StepDefinition;
use crate::RunEnv;

pub const BEFORE_NAME: &str = "exec-before-generator-actions";
pub const AFTER_NAME: &str = "exec-after-generator-actions";

pub struct ExecBeforeGeneratorActions;

impl ExecBeforeGeneratorActions {
    pub fn new(_env: &RunEnv) -> Self {
        Self
    }
}

impl Action for ExecBeforeGeneratorActions {
    fn name(&self) -> &'static str {
        BEFORE_NAME
    }

    fn description(&self) -> Option<&str> {
        None
    }

    fn should_run(&self, generator: &dyn Generator, context: &RepoContext) -> bool {
        !generator.before_actions(context).is_empty()
    }

    fn exec(&self, generator: &dyn Generator, context: &RepoContext) -> Result<()> {
        run_steps(generator.before_actions(context))
    }
}

pub struct ExecAfterGeneratorActions;

impl ExecAfterGeneratorActions {
    pub fn new(_env: &RunEnv) -> Self {
        Self
    }
}

impl Action for ExecAfterGeneratorActions {
    fn name(&self) -> &'static str {
        AFTER_NAME
    }

    fn description(&self) -> Option<&str> {
        None
    }

    fn should_run(&self, generator: &dyn Generator, context: &RepoContext) -> bool {
        !generator.after_actions(context).is_empty()
    }

    fn exec(&self, generator: &dyn Generator, context: &RepoContext) -> Result<()> {
        run_steps(generator.after_actions(context))
    }
}

/// Execute steps in order, stopping at the first failure.
fn run_steps(steps: Vec<StepDefinition>) -> Result<()> {
    for step in steps {
        info!("{}", step.description());
        step.exec()?;
    }
    Ok(())
}
