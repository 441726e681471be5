//! List command implementation
//!
//! Prints the registered generators and actions. Actions that are part of
//! the default manifest are shown with their position in it.

use anyhow::Result;
use clap::Args;

use docwiki::config::DEFAULT_ACTIONS;
use docwiki::output::{Mark, OutputConfig};
use docwiki::registry;

/// Arguments for the list command
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print bare names, one per line, without headings
    #[arg(long)]
    pub plain: bool,
}

/// Execute the list command
pub fn execute(args: ListArgs, color_flag: &str) -> Result<()> {
    if args.plain {
        for name in registry::generator_names()
            .into_iter()
            .chain(registry::action_names())
        {
            println!("{}", name);
        }
        return Ok(());
    }

    let out = OutputConfig::from_env_and_flag(color_flag);

    println!("{} Generators:", out.mark(Mark::Generator));
    for name in registry::generator_names() {
        println!("   {}", name);
    }

    println!("\n{} Actions:", out.mark(Mark::Action));
    for name in registry::action_names() {
        match DEFAULT_ACTIONS.iter().position(|a| *a == name) {
            Some(index) => println!("   {} (default #{})", name, index + 1),
            None => println!("   {}", name),
        }
    }

    Ok(())
}
