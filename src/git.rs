//! Wrappers over the system `git` client.
//!
//! All commands go through a [`CommandRunner`], so authentication is whatever
//! the system git is configured with plus the credentials embedded in the
//! wiki URL.

use std::path::Path;
use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use url::Url;

use crate::error::{Error, Result};
use crate::exec::CommandRunner;

/// `user@host:owner/name` remotes, as git accepts them without a scheme.
static SCP_REMOTE: LazyLock<std::result::Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[^@/\s]+@[^:/\s]+:(.+)$"));

/// A git working copy addressed through a [`CommandRunner`].
pub struct Git<'a> {
    runner: &'a dyn CommandRunner,
    dir: &'a Path,
}

impl<'a> Git<'a> {
    pub fn new(runner: &'a dyn CommandRunner, dir: &'a Path) -> Self {
        Self { runner, dir }
    }

    fn git(&self, args: &[&str]) -> Result<String> {
        self.runner.run("git", args, self.dir)
    }

    /// Clone `url` into `target`, relative to this directory.
    pub fn clone_into(&self, url: &Url, target: &str) -> Result<()> {
        self.git(&["clone", url.as_str(), target]).map(drop)
    }

    /// Set a repository-local config value.
    pub fn config_local(&self, key: &str, value: &str) -> Result<()> {
        self.git(&["config", "--local", key, value]).map(drop)
    }

    /// Remote-tracking branches, e.g. `origin/main`.
    pub fn remote_branches(&self) -> Result<Vec<String>> {
        let output = self.git(&["branch", "-r"])?;
        Ok(output
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.contains(" -> "))
            .map(str::to_string)
            .collect())
    }

    /// Whether `origin/<branch>` exists.
    ///
    /// Any failure of the probe counts as "absent", including failures that
    /// have nothing to do with the branch (auth, network). The failure is
    /// logged at debug level so the two cases can still be told apart.
    pub fn remote_branch_exists(&self, branch: &str) -> bool {
        let remote = format!("origin/{}", branch);
        match self.git(&["show-branch", &remote]) {
            Ok(_) => true,
            Err(e) => {
                debug!("Treating {} as absent: {}", remote, e);
                false
            }
        }
    }

    pub fn checkout(&self, branch: &str) -> Result<()> {
        self.git(&["checkout", branch]).map(drop)
    }

    pub fn checkout_new(&self, branch: &str) -> Result<()> {
        self.git(&["checkout", "-b", branch]).map(drop)
    }

    pub fn pull(&self) -> Result<()> {
        self.git(&["pull"]).map(drop)
    }

    pub fn add_all(&self) -> Result<()> {
        self.git(&["add", "-A"]).map(drop)
    }

    /// Whether the working copy has anything staged or modified.
    pub fn has_changes(&self) -> Result<bool> {
        let status = self.git(&["status", "--porcelain"])?;
        Ok(!status.trim().is_empty())
    }

    pub fn commit(&self, message: &str) -> Result<()> {
        self.git(&["commit", "-m", message]).map(drop)
    }

    pub fn push_upstream(&self, branch: &str) -> Result<()> {
        self.git(&["push", "--set-upstream", "origin", branch])
            .map(drop)
    }

    /// Name of the checked-out branch.
    pub fn current_branch(&self) -> Result<String> {
        Ok(self
            .git(&["rev-parse", "--abbrev-ref", "HEAD"])?
            .trim()
            .to_string())
    }

    /// URL of the `origin` remote.
    pub fn origin_url(&self) -> Result<String> {
        Ok(self
            .git(&["config", "--get", "remote.origin.url"])?
            .trim()
            .to_string())
    }
}

/// Build the clone URL of `repository`'s wiki.
///
/// Credentials are percent-encoded into the userinfo part; with no token the
/// URL carries no credentials at all.
pub fn wiki_url(host: &str, repository: &str, user: &str, token: &str) -> Result<Url> {
    if host.trim().is_empty() {
        return Err(Error::ConfigParse {
            message: "wiki_host is empty".to_string(),
            hint: Some("Set wiki_host to the wiki's server, e.g. github.com".to_string()),
        });
    }
    let mut url = Url::parse(&format!("https://{}/{}.wiki.git", host, repository))?;
    if !token.is_empty() {
        let user = if user.is_empty() { "x-access-token" } else { user };
        if url.set_username(user).is_err() || url.set_password(Some(token)).is_err() {
            return Err(Error::ConfigParse {
                message: format!("Cannot embed credentials into the wiki URL for {}", host),
                hint: None,
            });
        }
    }
    Ok(url)
}

/// Extract `owner/name` from a remote URL (https or scp-like).
pub fn parse_remote_repository(remote: &str) -> Result<Option<String>> {
    let path = match Url::parse(remote) {
        Ok(url) if url.has_host() => url.path().trim_start_matches('/').to_string(),
        _ => {
            let scp = SCP_REMOTE.as_ref().map_err(|e| Error::Regex(e.clone()))?;
            match scp.captures(remote).and_then(|c| c.get(1)) {
                Some(path) => path.as_str().to_string(),
                None => return Ok(None),
            }
        }
    };
    let path = path.trim_end_matches('/');
    let path = path.strip_suffix(".git").unwrap_or(path);
    Ok((path.split('/').filter(|s| !s.is_empty()).count() >= 2).then(|| path.to_string()))
}

/// Turn `refs/heads/x` or `refs/tags/x` into `x`.
pub fn short_ref_name(git_ref: &str) -> &str {
    git_ref
        .strip_prefix("refs/heads/")
        .or_else(|| git_ref.strip_prefix("refs/tags/"))
        .unwrap_or(git_ref)
}
