//! Install the generator's composer packages.

use std::sync::Arc;

use super::Action;
use crate::config::Settings;
use crate::context::RepoContext;
use crate::error::Result;
use crate::exec::{self, CommandRunner};
use crate::generators::{Generator, Requirements};
use crate::RunEnv;

pub const GLOBAL_NAME: &str = "install-global-packages";
pub const NAME: &str = "install-packages";

/// `composer global require` for requirements independent of the project.
pub struct InstallGlobalPackages {
    settings: Arc<Settings>,
    runner: Arc<dyn CommandRunner>,
}

impl InstallGlobalPackages {
    pub fn new(env: &RunEnv) -> Self {
        Self {
            settings: Arc::clone(&env.settings),
            runner: Arc::clone(&env.runner),
        }
    }
}

impl Action for InstallGlobalPackages {
    fn name(&self) -> &'static str {
        GLOBAL_NAME
    }

    fn description(&self) -> Option<&str> {
        Some("Installing global composer packages...")
    }

    fn should_run(&self, generator: &dyn Generator, _context: &RepoContext) -> bool {
        !generator.global_composer_requirements().is_empty()
    }

    fn exec(&self, generator: &dyn Generator, _context: &RepoContext) -> Result<()> {
        let packages = package_specs(&generator.global_composer_requirements());
        let mut args = vec!["global", "require", "--no-interaction", "--no-progress"];
        args.extend(packages.iter().map(String::as_str));
        exec::composer(self.runner.as_ref(), &args, self.settings.working_dir()).map(drop)
    }
}

/// `composer require` in the working directory.
pub struct InstallPackages {
    settings: Arc<Settings>,
    runner: Arc<dyn CommandRunner>,
}

impl InstallPackages {
    pub fn new(env: &RunEnv) -> Self {
        Self {
            settings: Arc::clone(&env.settings),
            runner: Arc::clone(&env.runner),
        }
    }
}

impl Action for InstallPackages {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> Option<&str> {
        Some("Installing composer packages...")
    }

    fn should_run(&self, generator: &dyn Generator, _context: &RepoContext) -> bool {
        !generator.composer_requirements().is_empty()
    }

    fn exec(&self, generator: &dyn Generator, _context: &RepoContext) -> Result<()> {
        let packages = package_specs(&generator.composer_requirements());
        let mut args = vec!["require", "--no-interaction", "--no-progress", "--no-scripts"];
        args.extend(packages.iter().map(String::as_str));
        exec::composer(self.runner.as_ref(), &args, self.settings.working_dir()).map(drop)
    }
}

/// `name:constraint` arguments, in package name order.
fn package_specs(requirements: &Requirements) -> Vec<String> {
    requirements
        .iter()
        .map(|(name, constraint)| format!("{}:{}", name, constraint))
        .collect()
}
