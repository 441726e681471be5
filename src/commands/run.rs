//! Run command implementation
//!
//! The run command executes the whole pipeline for the configured engine:
//! clone the wiki, install packages, run the generator with its before and
//! after steps, then commit and push the result.

use std::time::Instant;

use anyhow::Result;
use clap::Args;

use docwiki::orchestrator::Orchestrator;
use docwiki::output::{Mark, OutputConfig};
use docwiki::RunEnv;

use super::{require_engine, SettingsArgs};

/// Arguments for the run command
#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Suppress the summary printed after a successful run
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the run command
pub fn execute(args: RunArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let start_time = Instant::now();

    let settings = args.settings.load()?;
    let engine = require_engine(&settings)?;

    let report = Orchestrator::new(RunEnv::system(settings)).run(&engine)?;

    if !args.quiet {
        println!(
            "{} Documentation published with {} in {:.2?}",
            out.mark(Mark::Ok),
            engine,
            start_time.elapsed()
        );
        println!("   Actions run: {}", join_or_none(&report.executed));
        println!("   Actions skipped: {}", join_or_none(&report.skipped));
    }

    Ok(())
}

fn join_or_none(names: &[&str]) -> String {
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}
