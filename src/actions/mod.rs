//! # Pipeline Actions
//!
//! An action is one stage of the pipeline. The orchestrator asks each
//! configured action, in manifest order, whether it applies to the current
//! generator and repository; applicable actions have their description
//! logged and are then executed.
//!
//! | name | runs when | does |
//! |---|---|---|
//! | `clone-wiki` | always | stage the wiki checkout on the right branch |
//! | `install-global-packages` | generator has global requirements | `composer global require` |
//! | `install-packages` | generator has requirements | `composer require` |
//! | `exec-before-generator-actions` | generator has before-steps | run them in order |
//! | `generate` | always | run the documentation tool |
//! | `exec-after-generator-actions` | generator has after-steps | run them in order |
//! | `update-wiki` | always | copy the docs into the checkout, commit and push |

use crate::context::RepoContext;
use crate::error::Result;
use crate::generators::Generator;

pub mod clone_wiki;
pub mod generate;
pub mod generator_steps;
pub mod install_packages;
pub mod update_wiki;

pub use clone_wiki::CloneWiki;
pub use generate::Generate;
pub use generator_steps::{ExecAfterGeneratorActions, ExecBeforeGeneratorActions};
pub use install_packages::{InstallGlobalPackages, InstallPackages};
pub use update_wiki::UpdateWiki;

/// A pipeline stage.
pub trait Action {
    /// Registry name of the action.
    fn name(&self) -> &'static str;

    /// Line logged before the action runs; `None` logs nothing.
    fn description(&self) -> Option<&str>;

    /// Whether the action applies to this generator and repository.
    fn should_run(&self, generator: &dyn Generator, context: &RepoContext) -> bool;

    /// Perform the action.
    fn exec(&self, generator: &dyn Generator, context: &RepoContext) -> Result<()>;
}
