//! Generator for `clean/phpdoc-md`, which renders Markdown API docs for PHP
//! classes.
//!
//! Before generation it installs the project's composer dependencies with an
//! authoritative classmap, reads the class catalog out of that classmap,
//! filters it through the `include` rules and writes `.phpdoc-md`. After
//! generation it renames the produced `README.md` to the wiki home page.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::debug;

use super::include_rules::{self, IncludeRules};
use super::phpdoc_config::{PhpdocMdConfig, CONFIG_FILE_NAME};
use super::{Generator, Requirements};
use crate::config::{inputs, Settings};
use crate::context::RepoContext;
use crate::error::{Error, Result};
use crate::exec::{self, CommandRunner};
use crate::step::StepDefinition;
use crate::RunEnv;

/// Registry name.
pub const NAME: &str = "clean-phpdoc-md";

/// Page the generator writes as its index.
pub const GENERATED_INDEX: &str = "README.md";

/// Page a wiki shows as its landing page.
pub const WIKI_HOME_PAGE: &str = "Home.md";

/// Prints the classmap keys as a JSON array.
const CLASSMAP_SCRIPT: &str = "require \"./vendor/autoload.php\"; \
     echo json_encode(array_keys(require(\"./vendor/composer/autoload_classmap.php\")));";

const REQUIRED_INPUTS: &[&str] = &[inputs::CLASS_ROOT_NAMESPACE, inputs::INCLUDE];

pub struct CleanPhpdocMd {
    settings: Arc<Settings>,
    runner: Arc<dyn CommandRunner>,
}

impl CleanPhpdocMd {
    pub fn new(env: &RunEnv) -> Self {
        Self {
            settings: Arc::clone(&env.settings),
            runner: Arc::clone(&env.runner),
        }
    }
}

/// Arguments of the config generation step, frozen when the step is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigStepArgs {
    pub cwd: PathBuf,
    pub root_namespace: String,
    pub include: Vec<String>,
    pub temp_docs_folder: PathBuf,
}

impl Generator for CleanPhpdocMd {
    fn name(&self) -> &'static str {
        NAME
    }

    fn global_composer_requirements(&self) -> Requirements {
        Requirements::new()
    }

    fn composer_requirements(&self) -> Requirements {
        Requirements::from([("clean/phpdoc-md".to_string(), "*".to_string())])
    }

    fn missing_inputs(&self) -> Vec<&'static str> {
        REQUIRED_INPUTS
            .iter()
            .copied()
            .filter(|name| self.settings.input(name).is_empty())
            .collect()
    }

    fn before_actions(&self, _context: &RepoContext) -> Vec<StepDefinition> {
        let args = ConfigStepArgs {
            cwd: self.settings.working_dir().to_path_buf(),
            root_namespace: self.settings.input(inputs::CLASS_ROOT_NAMESPACE).to_string(),
            include: include_rules::split_lines(self.settings.input(inputs::INCLUDE)),
            temp_docs_folder: self.settings.temp_docs_folder(),
        };

        vec![StepDefinition::new(
            "Generating generator config...",
            (Arc::clone(&self.runner), args),
            |(runner, args): (Arc<dyn CommandRunner>, ConfigStepArgs)| {
                generate_config(runner.as_ref(), &args)
            },
        )]
    }

    fn after_actions(&self, _context: &RepoContext) -> Vec<StepDefinition> {
        let docs = self.settings.temp_docs_folder();
        vec![StepDefinition::new(
            format!("Renaming {} to {}...", GENERATED_INDEX, WIKI_HOME_PAGE),
            (docs.join(GENERATED_INDEX), docs.join(WIKI_HOME_PAGE)),
            |(from, to): (PathBuf, PathBuf)| fs::rename(from, to).map_err(Error::from),
        )]
    }

    fn generate(&self) -> Result<()> {
        exec::composer(
            self.runner.as_ref(),
            &["exec", "phpdoc-md", "-v"],
            self.settings.working_dir(),
        )
        .map(drop)
    }
}

/// Install dependencies, resolve the documented classes and write
/// `.phpdoc-md` into `args.cwd`.
///
/// Nothing is written when no class survives the include rules.
pub fn generate_config(runner: &dyn CommandRunner, args: &ConfigStepArgs) -> Result<()> {
    exec::composer(
        runner,
        &[
            "install",
            "--classmap-authoritative",
            "--no-progress",
            "--no-suggest",
            "-o",
            "--no-cache",
            "--no-scripts",
        ],
        &args.cwd,
    )?;

    let rules = IncludeRules::new(&args.include);
    let catalog = read_class_catalog(runner, &args.cwd)?;
    let classes = rules.resolve(&catalog)?;

    log_rules("Include rules:", rules.include());
    log_rules("Do not include rules:", rules.exclude());

    if classes.is_empty() {
        return Err(Error::NoClassesMatch);
    }

    let rendered = PhpdocMdConfig {
        root_namespace: args.root_namespace.clone(),
        dest_directory: args.temp_docs_folder.display().to_string(),
        classes,
    }
    .render();

    debug!("Generated config:");
    for line in rendered.lines() {
        debug!("{}", line.trim_end());
    }

    fs::write(args.cwd.join(CONFIG_FILE_NAME), rendered)?;
    Ok(())
}

/// Class names from the installed autoload classmap.
pub fn read_class_catalog(runner: &dyn CommandRunner, cwd: &Path) -> Result<Vec<String>> {
    let output = runner.run(
        "php",
        &[
            "-d",
            "display_errors=0",
            "-d",
            "error_reporting=0",
            "-r",
            CLASSMAP_SCRIPT,
        ],
        cwd,
    )?;

    let keys: Vec<Option<String>> =
        serde_json::from_str(output.trim()).map_err(|e| Error::ClassCatalog {
            message: format!("expected a JSON array of class names ({})", e),
        })?;
    Ok(keys.into_iter().flatten().collect())
}

fn log_rules(title: &str, rules: &[String]) {
    debug!("{}", title);
    if rules.is_empty() {
        debug!("  (none)");
    }
    for rule in rules {
        debug!("  [*] {}", include_rules::to_namespace(rule));
    }
}
