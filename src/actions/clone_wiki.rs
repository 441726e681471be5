//! Stage the existing wiki content.
//!
//! The wiki is cloned into the staging directory (the temp docs folder with
//! `.old` appended), then switched to the branch named after the source
//! repository's branch or tag, creating it when the wiki has no such branch.
//!
//! A staging directory that already exists means an earlier run did not
//! finish cleanly; the action refuses to continue rather than reuse it.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use log::{debug, info};

use super::Action;
use crate::config::{inputs, Settings};
use crate::context::RepoContext;
use crate::error::{Error, Result};
use crate::exec::CommandRunner;
use crate::generators::Generator;
use crate::git::{self, Git};
use crate::RunEnv;

pub const NAME: &str = "clone-wiki";

pub struct CloneWiki {
    settings: Arc<Settings>,
    runner: Arc<dyn CommandRunner>,
}

impl CloneWiki {
    pub fn new(env: &RunEnv) -> Self {
        Self {
            settings: Arc::clone(&env.settings),
            runner: Arc::clone(&env.runner),
        }
    }
}

impl Action for CloneWiki {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> Option<&str> {
        Some("Cloning old wiki...")
    }

    fn should_run(&self, _generator: &dyn Generator, _context: &RepoContext) -> bool {
        true
    }

    fn exec(&self, _generator: &dyn Generator, context: &RepoContext) -> Result<()> {
        self.settings.check_docs_layout()?;
        let staging = self.settings.staging_dir();
        if staging.exists() {
            return Err(Error::StagingExists { path: staging });
        }

        let url = git::wiki_url(
            self.settings.input(inputs::WIKI_HOST),
            context.repository(),
            self.settings.input(inputs::WIKI_UPDATE_USER),
            self.settings.input(inputs::WIKI_UPDATE_TOKEN),
        )?;
        let (parent, target) = split_staging(&staging)?;

        fs::create_dir_all(&staging)?;
        Git::new(self.runner.as_ref(), parent).clone_into(&url, &target)?;

        let wiki = Git::new(self.runner.as_ref(), &staging);
        wiki.config_local("gc.auto", "0")?;
        let branches = wiki.remote_branches()?;
        debug!("Wiki branches: {}", branches.join(", "));

        let branch = context.branch_or_tag();
        if wiki.remote_branch_exists(branch) {
            wiki.checkout(branch)?;
            wiki.pull()?;
        } else {
            info!("Wiki has no branch '{}' yet; creating it", branch);
            wiki.checkout_new(branch)?;
        }
        Ok(())
    }
}

fn split_staging(staging: &Path) -> Result<(&Path, String)> {
    match (staging.parent(), staging.file_name()) {
        (Some(parent), Some(name)) => Ok((parent, name.to_string_lossy().into_owned())),
        _ => Err(Error::ConfigParse {
            message: format!("Invalid staging directory {}", staging.display()),
            hint: Some("Set temp_docs_folder to a directory path".to_string()),
        }),
    }
}
