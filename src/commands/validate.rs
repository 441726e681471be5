//! # Validate Command Implementation
//!
//! This module implements the `validate` subcommand, which checks a run
//! configuration without executing it.
//!
//! ## Functionality
//!
//! - **Configuration Parsing**: loads settings from the same sources `run`
//!   uses.
//! - **Engine Resolution**: checks that the engine names a registered
//!   generator.
//! - **Manifest Resolution**: checks that every configured action exists.
//! - **Input Check**: reports the generator's required inputs that are empty.
//!
//! This command spawns no processes and does not touch the filesystem beyond
//! reading the configuration file.

use anyhow::Result;
use clap::Args;

use docwiki::generators::validate_generator;
use docwiki::output::{Mark, OutputConfig};
use docwiki::{registry, RunEnv};

use super::{require_engine, SettingsArgs};

/// Check the configuration without running anything
#[derive(Args, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,
}

/// Execute the `validate` command.
///
/// # Arguments
/// * `args` - The command arguments
/// * `color_flag` - The value of the global --color flag ("always", "never", or "auto")
pub fn execute(args: ValidateArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    println!("{} Validating configuration...", out.mark(Mark::Scan));

    let settings = match args.settings.load() {
        Ok(settings) => {
            println!("{} Configuration loaded successfully", out.mark(Mark::Ok));
            settings
        }
        Err(e) => {
            println!(
                "{} Configuration loading failed: {}",
                out.mark(Mark::Err),
                e
            );
            return Err(e);
        }
    };

    let engine = require_engine(&settings)?;
    let env = RunEnv::system(settings);

    let generator = registry::make_generator(&engine, &env)?;
    println!("{} Generator: {}", out.mark(Mark::Ok), generator.name());

    let actions = registry::make_actions(env.settings.actions(), &env)?;
    println!("\n{} Action manifest:", out.mark(Mark::Info));
    for (index, action) in actions.iter().enumerate() {
        println!("   {}. {}", index + 1, action.name());
    }

    if let Err(e) = validate_generator(generator.as_ref()) {
        println!("\n{} {}", out.mark(Mark::Err), e);
        return Err(e.into());
    }

    println!("\n{} Configuration is valid", out.mark(Mark::Ok));
    Ok(())
}
