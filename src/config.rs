//! # Run Configuration
//!
//! This module defines [`Settings`], the configuration object a caller loads
//! once and hands to the pipeline. Nothing in the library reads configuration
//! from ambient global state; every generator and action receives the same
//! `Settings` through [`crate::RunEnv`].
//!
//! ## Sources
//!
//! Settings are layered, later sources overriding earlier ones:
//!
//! 1.  **Defaults**: the default action manifest and default input values.
//! 2.  **Configuration file**: `.docwiki.yaml` (or an explicit path).
//! 3.  **Environment**: `INPUT_<NAME>` variables, the convention CI action
//!     runners use to pass inputs.
//! 4.  **Overrides**: `name=value` pairs and the engine given on the command
//!     line.
//!
//! ## File Format
//!
//! ```yaml
//! engine: clean-phpdoc-md
//! actions:
//!   - clone-wiki
//!   - generate
//! repository: acme/widgets
//! branch: main
//! inputs:
//!   class_root_namespace: Acme
//!   include: |
//!     Acme/**
//!     !Acme/Internal/**
//! ```
//!
//! Input values are plain strings. An input that was never set reads as the
//! empty string, which is what generators test against when validating.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Component, Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = ".docwiki.yaml";

/// Prefix of environment variables that carry inputs.
pub const ENV_INPUT_PREFIX: &str = "INPUT_";

/// The action manifest used when the configuration does not list one.
pub const DEFAULT_ACTIONS: &[&str] = &[
    "clone-wiki",
    "install-global-packages",
    "install-packages",
    "exec-before-generator-actions",
    "generate",
    "exec-after-generator-actions",
    "update-wiki",
];

/// Names of the recognized inputs.
pub mod inputs {
    pub const ENGINE: &str = "engine";
    pub const CLASS_ROOT_NAMESPACE: &str = "class_root_namespace";
    pub const INCLUDE: &str = "include";
    pub const TEMP_DOCS_FOLDER: &str = "temp_docs_folder";
    pub const WIKI_UPDATE_USER: &str = "wiki_github_update_user";
    pub const WIKI_UPDATE_TOKEN: &str = "wiki_github_update_token";
    pub const WIKI_HOST: &str = "wiki_host";
    pub const COMMIT_MESSAGE: &str = "commit_message";
}

const DEFAULT_INPUTS: &[(&str, &str)] = &[
    (inputs::TEMP_DOCS_FOLDER, "build/wiki"),
    (inputs::WIKI_HOST, "github.com"),
    (inputs::COMMIT_MESSAGE, "Update documentation"),
];

/// On-disk shape of the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Generator engine to run.
    #[serde(default)]
    pub engine: Option<String>,
    /// Ordered action manifest.
    #[serde(default)]
    pub actions: Option<Vec<String>>,
    /// Source repository as `owner/name`.
    #[serde(default)]
    pub repository: Option<String>,
    /// Branch or tag the documentation is published under.
    #[serde(default)]
    pub branch: Option<String>,
    /// Generator and action inputs.
    #[serde(default)]
    pub inputs: BTreeMap<String, String>,
}

/// Parse a configuration file from a YAML string.
pub fn parse(yaml: &str) -> Result<ConfigFile> {
    if yaml.trim().is_empty() {
        return Ok(ConfigFile::default());
    }
    serde_yaml::from_str(yaml).map_err(|e| Error::ConfigParse {
        message: e.to_string(),
        hint: Some(
            "Allowed top-level keys are: engine, actions, repository, branch, inputs".to_string(),
        ),
    })
}

/// Read and parse a configuration file.
pub fn from_file(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path)?;
    parse(&content)
}

/// What to load and from where.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Explicit configuration file; must exist when set.
    pub config: Option<PathBuf>,
    /// Directory the pipeline works in; defaults to the current directory.
    pub working_dir: Option<PathBuf>,
    /// Engine override.
    pub engine: Option<String>,
    /// `name=value` input overrides.
    pub inputs: Vec<String>,
    /// Whether `INPUT_*` environment variables are consulted.
    pub read_env: bool,
}

/// Resolved configuration for one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    inputs: BTreeMap<String, String>,
    actions: Vec<String>,
    repository: Option<String>,
    branch: Option<String>,
    working_dir: PathBuf,
}

impl Settings {
    /// Settings holding only the defaults.
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            inputs: DEFAULT_INPUTS
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            actions: DEFAULT_ACTIONS.iter().map(|a| a.to_string()).collect(),
            repository: None,
            branch: None,
            working_dir: working_dir.into(),
        }
    }

    /// Load settings from every configured source.
    pub fn load(options: &LoadOptions) -> Result<Self> {
        let working_dir = match &options.working_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };
        let mut settings = Self::new(working_dir);

        let config_path = match &options.config {
            Some(path) => Some(path.clone()),
            None => {
                let default = settings.working_dir.join(DEFAULT_CONFIG_FILE);
                default.exists().then_some(default)
            }
        };
        if let Some(path) = config_path {
            debug!("Loading configuration from {}", path.display());
            let file = from_file(&path).map_err(|e| match e {
                Error::Io(io) => Error::ConfigParse {
                    message: format!("Cannot read {}: {}", path.display(), io),
                    hint: None,
                },
                other => other,
            })?;
            settings.apply_file(file);
        }

        if options.read_env {
            settings.apply_env(std::env::vars());
        }

        for raw in &options.inputs {
            let (name, value) = parse_override(raw)?;
            settings.layer_input(name, value);
        }
        if let Some(engine) = &options.engine {
            settings.layer_input(inputs::ENGINE, engine.clone());
        }

        settings.check_docs_layout()?;
        Ok(settings)
    }

    /// Layer a parsed configuration file over the current values.
    pub fn apply_file(&mut self, file: ConfigFile) {
        if let Some(engine) = file.engine {
            self.layer_input(inputs::ENGINE, engine);
        }
        if let Some(actions) = file.actions {
            self.actions = actions;
        }
        if file.repository.is_some() {
            self.repository = file.repository;
        }
        if file.branch.is_some() {
            self.branch = file.branch;
        }
        for (name, value) in file.inputs {
            self.layer_input(name, value);
        }
    }

    /// Layer `INPUT_<NAME>` variables from `vars` over the current values.
    pub fn apply_env<I>(&mut self, vars: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in vars {
            if let Some(name) = key.strip_prefix(ENV_INPUT_PREFIX) {
                if !name.is_empty() {
                    self.layer_input(name.to_lowercase(), value);
                }
            }
        }
    }

    pub fn set_input(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.inputs.insert(name.into(), value.into());
    }

    /// Set an input from a configuration source. A blank value counts as
    /// unset and leaves the current value in place.
    fn layer_input(&mut self, name: impl Into<String>, value: String) {
        if !value.trim().is_empty() {
            self.set_input(name, value);
        }
    }

    /// Value of an input, or `""` when it was never set.
    pub fn input(&self, name: &str) -> &str {
        self.inputs.get(name).map(String::as_str).unwrap_or("")
    }

    /// Selected generator engine.
    pub fn engine(&self) -> &str {
        self.input(inputs::ENGINE)
    }

    /// Ordered action manifest.
    pub fn actions(&self) -> &[String] {
        &self.actions
    }

    pub fn set_actions(&mut self, actions: Vec<String>) {
        self.actions = actions;
    }

    pub fn repository(&self) -> Option<&str> {
        self.repository.as_deref()
    }

    pub fn branch(&self) -> Option<&str> {
        self.branch.as_deref()
    }

    pub fn set_repository(&mut self, repository: impl Into<String>) {
        self.repository = Some(repository.into());
    }

    pub fn set_branch(&mut self, branch: impl Into<String>) {
        self.branch = Some(branch.into());
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Where the generator writes fresh documentation.
    pub fn temp_docs_folder(&self) -> PathBuf {
        normalize(&self.working_dir.join(self.input(inputs::TEMP_DOCS_FOLDER)))
    }

    /// Local checkout of the wiki: the temp docs folder with `.old` appended.
    pub fn staging_dir(&self) -> PathBuf {
        let mut staging = self.temp_docs_folder().into_os_string();
        staging.push(".old");
        PathBuf::from(staging)
    }

    /// Fail unless the temp docs folder is a directory of its own.
    ///
    /// Publishing empties the staging checkout and copies the temp docs folder
    /// into it, so the folder may be neither the working directory nor one of
    /// its ancestors, and the staging directory must sit outside it.
    pub fn check_docs_layout(&self) -> Result<()> {
        let docs = self.temp_docs_folder();
        let working_dir = normalize(&self.working_dir);
        if docs.file_name().is_none()
            || working_dir.starts_with(&docs)
            || self.staging_dir().starts_with(&docs)
        {
            return Err(Error::ConfigParse {
                message: format!(
                    "temp_docs_folder '{}' resolves to {}, which contains the working directory",
                    self.input(inputs::TEMP_DOCS_FOLDER),
                    docs.display()
                ),
                hint: Some("Point temp_docs_folder at a subdirectory such as build/wiki".to_string()),
            });
        }
        Ok(())
    }
}

/// Resolve `.` and `..` components without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if normalized.file_name().is_some() {
                    normalized.pop();
                } else if !normalized.has_root() {
                    normalized.push("..");
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// Split a `name=value` override.
pub fn parse_override(raw: &str) -> Result<(String, String)> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(Error::ConfigParse {
            message: format!("Invalid input override '{}'", raw),
            hint: Some("Use --input name=value".to_string()),
        }),
    }
}
