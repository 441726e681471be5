//! Invoke the generator's documentation tool.

use super::Action;
use crate::context::RepoContext;
use crate::error::Result;
use crate::generators::Generator;
use crate::RunEnv;

pub const NAME: &str = "generate";

pub struct Generate;

impl Generate {
    pub fn new(_env: &RunEnv) -> Self {
        Self
    }
}

impl Action for Generate {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> Option<&str> {
        Some("Generating documentation...")
    }

    fn should_run(&self, _generator: &dyn Generator, _context: &RepoContext) -> bool {
        true
    }

    fn exec(&self, generator: &dyn Generator, _context: &RepoContext) -> Result<()> {
        generator.generate()
    }
}
