//! # Component Registry
//!
//! Generators and actions are looked up by name in two fixed tables. Each
//! entry pairs the registry name with a constructor taking the run
//! environment; nothing is discovered at runtime, and a name missing from the
//! table is an error that lists the names that do exist.

use crate::actions::{
    self, Action, CloneWiki, ExecAfterGeneratorActions, ExecBeforeGeneratorActions, Generate,
    InstallGlobalPackages, InstallPackages, UpdateWiki,
};
use crate::error::{Error, Result};
use crate::generators::{self, CleanPhpdocMd, Generator};
use crate::RunEnv;

/// Builds a generator for one run.
pub type GeneratorFactory = fn(&RunEnv) -> Box<dyn Generator>;

/// Builds an action for one run.
pub type ActionFactory = fn(&RunEnv) -> Box<dyn Action>;

const GENERATORS: &[(&str, GeneratorFactory)] =
    &[(generators::clean_phpdoc_md::NAME, clean_phpdoc_md)];

const ACTIONS: &[(&str, ActionFactory)] = &[
    (actions::clone_wiki::NAME, clone_wiki),
    (actions::install_packages::GLOBAL_NAME, install_global_packages),
    (actions::install_packages::NAME, install_packages),
    (actions::generator_steps::BEFORE_NAME, exec_before_generator_actions),
    (actions::generate::NAME, generate),
    (actions::generator_steps::AFTER_NAME, exec_after_generator_actions),
    (actions::update_wiki::NAME, update_wiki),
];

fn clean_phpdoc_md(env: &RunEnv) -> Box<dyn Generator> {
    Box::new(CleanPhpdocMd::new(env))
}

fn clone_wiki(env: &RunEnv) -> Box<dyn Action> {
    Box::new(CloneWiki::new(env))
}

fn install_global_packages(env: &RunEnv) -> Box<dyn Action> {
    Box::new(InstallGlobalPackages::new(env))
}

fn install_packages(env: &RunEnv) -> Box<dyn Action> {
    Box::new(InstallPackages::new(env))
}

fn exec_before_generator_actions(env: &RunEnv) -> Box<dyn Action> {
    Box::new(ExecBeforeGeneratorActions::new(env))
}

fn generate(env: &RunEnv) -> Box<dyn Action> {
    Box::new(Generate::new(env))
}

fn exec_after_generator_actions(env: &RunEnv) -> Box<dyn Action> {
    Box::new(ExecAfterGeneratorActions::new(env))
}

fn update_wiki(env: &RunEnv) -> Box<dyn Action> {
    Box::new(UpdateWiki::new(env))
}

/// Names of all registered generators.
pub fn generator_names() -> Vec<&'static str> {
    GENERATORS.iter().map(|(name, _)| *name).collect()
}

/// Names of all registered actions, in registration order.
pub fn action_names() -> Vec<&'static str> {
    ACTIONS.iter().map(|(name, _)| *name).collect()
}

/// Build the generator registered as `name`.
pub fn make_generator(name: &str, env: &RunEnv) -> Result<Box<dyn Generator>> {
    GENERATORS
        .iter()
        .find(|(registered, _)| *registered == name)
        .map(|(_, factory)| factory(env))
        .ok_or_else(|| Error::UnknownGenerator {
            name: name.to_string(),
            known: generator_names().join(", "),
        })
}

/// Build one action per name, in the order given.
///
/// Fails on the first unknown name without building anything further.
pub fn make_actions<S: AsRef<str>>(names: &[S], env: &RunEnv) -> Result<Vec<Box<dyn Action>>> {
    names
        .iter()
        .map(|name| make_action(name.as_ref(), env))
        .collect()
}

fn make_action(name: &str, env: &RunEnv) -> Result<Box<dyn Action>> {
    ACTIONS
        .iter()
        .find(|(registered, _)| *registered == name)
        .map(|(_, factory)| factory(env))
        .ok_or_else(|| Error::UnknownAction {
            name: name.to_string(),
            known: action_names().join(", "),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Settings, DEFAULT_ACTIONS};
    use crate::exec::testing::RecordingRunner;
    use std::sync::Arc;

    fn env() -> RunEnv {
        RunEnv::new(Settings::new("/work"), Arc::new(RecordingRunner::new()))
    }

    #[test]
    fn test_make_generator() {
        let generator = make_generator("clean-phpdoc-md", &env()).unwrap();
        assert_eq!(generator.name(), "clean-phpdoc-md");
    }

    #[test]
    fn test_unknown_generator_lists_known_names() {
        let err = make_generator("doxygen", &env()).err().unwrap();
        assert!(matches!(err, Error::UnknownGenerator { .. }));
        let message = err.to_string();
        assert!(message.contains("doxygen"));
        assert!(message.contains("clean-phpdoc-md"));
    }

    #[test]
    fn test_default_manifest_resolves_in_order() {
        let actions = make_actions(DEFAULT_ACTIONS, &env()).unwrap();
        let names: Vec<_> = actions.iter().map(|a| a.name()).collect();
        assert_eq!(names, DEFAULT_ACTIONS);
    }

    #[test]
    fn test_registry_names_match_action_names() {
        let env = env();
        for (name, factory) in ACTIONS {
            assert_eq!(factory(&env).name(), *name);
        }
        for (name, factory) in GENERATORS {
            assert_eq!(factory(&env).name(), *name);
        }
    }

    #[test]
    fn test_unknown_action_fails_closed() {
        let err = make_actions(&["clone-wiki", "publish-pages"], &env())
            .err()
            .unwrap();
        match err {
            Error::UnknownAction { name, known } => {
                assert_eq!(name, "publish-pages");
                assert!(known.contains("update-wiki"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_manifest() {
        assert!(make_actions::<&str>(&[], &env()).unwrap().is_empty());
    }
}
