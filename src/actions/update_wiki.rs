//! Publish the generated documentation.
//!
//! The staged wiki checkout has its working tree replaced by the contents of
//! the temp docs folder. When that leaves git with nothing to record, the
//! action stops there; otherwise it commits as the configured wiki user and
//! pushes the branch, setting its upstream so new branches are created.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use log::{debug, info};
use walkdir::WalkDir;

use super::Action;
use crate::config::{inputs, Settings};
use crate::context::RepoContext;
use crate::error::{Error, Result};
use crate::exec::CommandRunner;
use crate::generators::Generator;
use crate::git::Git;
use crate::RunEnv;

pub const NAME: &str = "update-wiki";

/// Committer name used when no wiki update user is configured.
const DEFAULT_COMMITTER: &str = "docwiki";

pub struct UpdateWiki {
    settings: Arc<Settings>,
    runner: Arc<dyn CommandRunner>,
}

impl UpdateWiki {
    pub fn new(env: &RunEnv) -> Self {
        Self {
            settings: Arc::clone(&env.settings),
            runner: Arc::clone(&env.runner),
        }
    }
}

impl Action for UpdateWiki {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> Option<&str> {
        Some("Updating wiki...")
    }

    fn should_run(&self, _generator: &dyn Generator, _context: &RepoContext) -> bool {
        true
    }

    fn exec(&self, _generator: &dyn Generator, context: &RepoContext) -> Result<()> {
        self.settings.check_docs_layout()?;
        let staging = self.settings.staging_dir();
        if !staging.is_dir() {
            return Err(Error::StagingMissing { path: staging });
        }
        let docs = self.settings.temp_docs_folder();
        if !docs.is_dir() {
            return Err(Error::DocsMissing { path: docs });
        }

        clear_checkout(&staging)?;
        let copied = copy_tree(&docs, &staging)?;
        debug!("Copied {} file(s) into {}", copied, staging.display());

        let wiki = Git::new(self.runner.as_ref(), &staging);
        wiki.add_all()?;
        if !wiki.has_changes()? {
            info!("Wiki is already up to date");
            return Ok(());
        }

        let user = match self.settings.input(inputs::WIKI_UPDATE_USER) {
            "" => DEFAULT_COMMITTER,
            user => user,
        };
        wiki.config_local("user.name", user)?;
        wiki.config_local("user.email", &format!("{}@users.noreply.github.com", user))?;
        wiki.commit(self.settings.input(inputs::COMMIT_MESSAGE))?;
        wiki.push_upstream(context.branch_or_tag())
    }
}

/// Remove everything in the checkout except its `.git` directory.
fn clear_checkout(dir: &Path) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_name() == ".git" {
            continue;
        }
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            fs::remove_dir_all(&path)?;
        } else {
            fs::remove_file(&path)?;
        }
    }
    Ok(())
}

/// Copy every file under `source` into `dest`, returning the file count.
fn copy_tree(source: &Path, dest: &Path) -> Result<usize> {
    let mut copied = 0;
    for entry in WalkDir::new(source).min_depth(1) {
        let entry = entry.map_err(std::io::Error::from)?;
        let Ok(relative) = entry.path().strip_prefix(source) else {
            continue;
        };
        if relative.starts_with(".git") {
            continue;
        }

        let target = dest.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}
