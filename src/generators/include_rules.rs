//! Include/exclude rules for selecting documented classes.
//!
//! Rules are glob patterns over class names written as paths. Either
//! separator may be used in a rule; both rules and class names are normalized
//! to `/` before matching and class names are converted back to `\` on the
//! way out. A rule starting with `!` is an exclusion: exclusions are pulled
//! out into their own set before matching rather than being evaluated in
//! sequence with the inclusions.

use glob::{MatchOptions, Pattern};

use crate::error::Result;

/// Prefix that marks a rule as an exclusion.
pub const EXCLUDE_MARKER: char = '!';

/// `*` stays within one namespace segment; `**` spans segments.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Partitioned, normalized rule sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncludeRules {
    include: Vec<String>,
    exclude: Vec<String>,
}

impl IncludeRules {
    /// Build from individual rules.
    pub fn new<I, S>(rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed = Self::default();
        for rule in rules {
            let rule = to_match_path(rule.as_ref().trim());
            match rule.strip_prefix(EXCLUDE_MARKER) {
                Some(excluded) => {
                    if !excluded.is_empty() {
                        parsed.exclude.push(excluded.to_string());
                    }
                }
                None if !rule.is_empty() => parsed.include.push(rule),
                None => {}
            }
        }
        parsed
    }

    /// Build from the newline-separated `include` input.
    pub fn parse(raw: &str) -> Self {
        Self::new(split_lines(raw))
    }

    pub fn include(&self) -> &[String] {
        &self.include
    }

    pub fn exclude(&self) -> &[String] {
        &self.exclude
    }

    /// Filter `catalog`, keeping classes matched by an include rule and by no
    /// exclude rule. Catalog order is preserved; names come back with `\`
    /// separators.
    pub fn resolve<S: AsRef<str>>(&self, catalog: &[S]) -> Result<Vec<String>> {
        let include = compile(&self.include)?;
        let exclude = compile(&self.exclude)?;

        Ok(catalog
            .iter()
            .map(|class| to_match_path(class.as_ref()))
            .filter(|path| matches_any(&include, path) && !matches_any(&exclude, path))
            .map(|path| to_namespace(&path))
            .collect())
    }
}

/// Split a multi-line input into trimmed, non-empty lines.
pub fn split_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// `App\Foo` → `App/Foo`
pub fn to_match_path(class: &str) -> String {
    class.replace('\\', "/")
}

/// `App/Foo` → `App\Foo`
pub fn to_namespace(path: &str) -> String {
    path.replace('/', "\\")
}

fn compile(rules: &[String]) -> Result<Vec<Pattern>> {
    rules
        .iter()
        .map(|rule| Pattern::new(rule).map_err(Into::into))
        .collect()
}

fn matches_any(patterns: &[Pattern], path: &str) -> bool {
    patterns
        .iter()
        .any(|pattern| pattern.matches_with(path, MATCH_OPTIONS))
}
