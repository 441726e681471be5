//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Docwiki - Generate API documentation and publish it to a repository wiki
#[derive(Parser, Debug)]
#[command(name = "docwiki")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(
        long,
        global = true,
        value_name = "LEVEL",
        default_value = "info",
        value_parser = ["off", "error", "warn", "info", "debug", "trace"]
    )]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate documentation and push it to the wiki
    Run(commands::run::RunArgs),

    /// Check the configuration without running anything
    Validate(commands::validate::ValidateArgs),

    /// List the registered generators and actions
    List(commands::list::ListArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);

        match self.command {
            Commands::Run(args) => commands::run::execute(args, &self.color),
            Commands::Validate(args) => commands::validate::execute(args, &self.color),
            Commands::List(args) => commands::list::execute(args, &self.color),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

/// `RUST_LOG`, when set, takes precedence over `--log-level`.
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    // A logger may already be installed when embedded; keep that one.
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
