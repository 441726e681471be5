//! Identity of the source repository driving a run.
//!
//! The context is resolved once per run, before any action executes, from the
//! first source that provides each value:
//!
//! | value | settings | environment | git |
//! |---|---|---|---|
//! | repository (`owner/name`) | `repository` | `GITHUB_REPOSITORY` | `remote.origin.url` |
//! | branch or tag | `branch` | `GITHUB_REF` | `rev-parse --abbrev-ref HEAD` |

use std::fmt;

use log::debug;

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::exec::CommandRunner;
use crate::git::{self, Git};

/// Resolved repository identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoContext {
    repository: String,
    branch_or_tag: String,
}

impl RepoContext {
    pub fn new(repository: impl Into<String>, branch_or_tag: impl Into<String>) -> Self {
        Self {
            repository: repository.into(),
            branch_or_tag: branch_or_tag.into(),
        }
    }

    /// Resolve from settings, the process environment and git.
    pub fn resolve(settings: &Settings, runner: &dyn CommandRunner) -> Result<Self> {
        Self::resolve_with(settings, runner, |key| std::env::var(key).ok())
    }

    /// Resolve using `env` in place of the process environment.
    pub fn resolve_with<E>(settings: &Settings, runner: &dyn CommandRunner, env: E) -> Result<Self>
    where
        E: Fn(&str) -> Option<String>,
    {
        let env = |key: &str| env(key).filter(|v| !v.trim().is_empty());
        let git = Git::new(runner, settings.working_dir());

        let repository = match settings.repository() {
            Some(repository) => repository.to_string(),
            None => match env("GITHUB_REPOSITORY") {
                Some(repository) => repository,
                None => {
                    let remote = git.origin_url()?;
                    git::parse_remote_repository(&remote)?.ok_or_else(|| Error::RepoContext {
                        message: format!("cannot derive owner/name from remote '{}'", remote),
                    })?
                }
            },
        };

        let branch_or_tag = match settings.branch() {
            Some(branch) => branch.to_string(),
            None => match env("GITHUB_REF") {
                Some(git_ref) => git::short_ref_name(&git_ref).to_string(),
                None => {
                    let branch = git.current_branch()?;
                    if branch == "HEAD" {
                        return Err(Error::RepoContext {
                            message: "HEAD is detached; set 'branch' in the configuration"
                                .to_string(),
                        });
                    }
                    branch
                }
            },
        };

        let context = Self::new(repository, branch_or_tag);
        debug!("Repository context: {}", context);
        Ok(context)
    }

    /// `owner/name` of the source repository.
    pub fn repository(&self) -> &str {
        &self.repository
    }

    pub fn branch_or_tag(&self) -> &str {
        &self.branch_or_tag
    }
}

impl fmt::Display for RepoContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.repository, self.branch_or_tag)
    }
}
