//! # Output Configuration
//!
//! Controls how the CLI decorates its status lines. With colour enabled a
//! status line starts with an emoji; without it, with a bracketed tag that
//! stays readable in CI logs and when piped.
//!
//! The `--color` flag decides first (`always`, `never`, `auto`). In `auto`
//! mode the environment decides:
//! - `NO_COLOR` set to anything (https://no-color.org/) disables colour
//! - `CLICOLOR=0` disables colour
//! - `CLICOLOR_FORCE=1` forces colour even when stdout is not a terminal
//! - `TERM=dumb` disables colour
//! - otherwise the terminal's own capabilities decide
//!
//! ```rust,ignore
//! use docwiki::output::{Mark, OutputConfig};
//!
//! let out = OutputConfig::from_env_and_flag("auto");
//! println!("{} Generating documentation", out.mark(Mark::Scan));
//! ```

use std::env;

/// Output configuration for controlling colors and emojis.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors and emojis should be used in output.
    pub use_color: bool,
}

/// Status prefixes used by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Ok,
    Err,
    Scan,
    Info,
    Generator,
    Action,
}

impl Mark {
    fn pair(self) -> (&'static str, &'static str) {
        match self {
            Mark::Ok => ("✅", "[OK]"),
            Mark::Err => ("❌", "[ERR]"),
            Mark::Scan => ("🔍", "[SCAN]"),
            Mark::Info => ("📋", "[INFO]"),
            Mark::Generator => ("🧩", "[GEN]"),
            Mark::Action => ("📋", "[ACT]"),
        }
    }
}

impl OutputConfig {
    /// Create an output configuration from environment and the `--color` flag.
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => color_from_env(|key| env::var(key).ok())
                .unwrap_or_else(|| console::Term::stdout().features().colors_supported()),
        };

        Self { use_color }
    }

    /// The prefix for `mark` under this configuration.
    pub fn mark(&self, mark: Mark) -> &'static str {
        let (emoji_str, plain) = mark.pair();
        emoji(self, emoji_str, plain)
    }
}

/// Colour decision made by environment variables alone, if any.
fn color_from_env<F>(var: F) -> Option<bool>
where
    F: Fn(&str) -> Option<String>,
{
    if var("NO_COLOR").is_some() {
        return Some(false);
    }
    if var("CLICOLOR").is_some_and(|v| v == "0") {
        return Some(false);
    }
    if var("CLICOLOR_FORCE").is_some_and(|v| v != "0" && !v.is_empty()) {
        return Some(true);
    }
    if var("TERM").is_some_and(|v| v == "dumb") {
        return Some(false);
    }
    None
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// `emoji_str` when colour is enabled, `plain` otherwise.
pub fn emoji<'a>(config: &OutputConfig, emoji_str: &'a str, plain: &'a str) -> &'a str {
    if config.use_color {
        emoji_str
    } else {
        plain
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_color_flag_wins() {
        assert!(OutputConfig::from_env_and_flag("always").use_color);
        assert!(OutputConfig::from_env_and_flag("ALWAYS").use_color);
        assert!(!OutputConfig::from_env_and_flag("never").use_color);
    }

    #[test]
    fn test_env_rules() {
        assert_eq!(color_from_env(vars(&[("NO_COLOR", "")])), Some(false));
        assert_eq!(color_from_env(vars(&[("CLICOLOR", "0")])), Some(false));
        assert_eq!(color_from_env(vars(&[("CLICOLOR_FORCE", "1")])), Some(true));
        assert_eq!(color_from_env(vars(&[("CLICOLOR_FORCE", "0")])), None);
        assert_eq!(color_from_env(vars(&[("TERM", "dumb")])), Some(false));
        assert_eq!(color_from_env(vars(&[("TERM", "xterm")])), None);
    }

    #[test]
    fn test_no_color_beats_force() {
        let decided = color_from_env(vars(&[("NO_COLOR", "1"), ("CLICOLOR_FORCE", "1")]));
        assert_eq!(decided, Some(false));
    }

    #[test]
    fn test_marks() {
        let plain = OutputConfig { use_color: false };
        let fancy = OutputConfig { use_color: true };
        assert_eq!(plain.mark(Mark::Ok), "[OK]");
        assert_eq!(plain.mark(Mark::Generator), "[GEN]");
        assert_eq!(fancy.mark(Mark::Err), "❌");
        assert_eq!(emoji(&plain, "🔍", "[SCAN]"), "[SCAN]");
    }
}
