//! Rendering of the `.phpdoc-md` configuration file.
//!
//! The file is PHP source returning an object, read by the generator's own
//! runtime. Every value is written as a single-quoted PHP literal, which
//! performs no interpolation: only `\` and `'` need escaping.

/// File name the generator looks for in the project root.
pub const CONFIG_FILE_NAME: &str = ".phpdoc-md";

/// Output format understood by the generator.
pub const OUTPUT_FORMAT: &str = "github";

/// Values written into the configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhpdocMdConfig {
    pub root_namespace: String,
    pub dest_directory: String,
    pub classes: Vec<String>,
}

impl PhpdocMdConfig {
    /// Render as PHP source.
    pub fn render(&self) -> String {
        let classes = self
            .classes
            .iter()
            .map(|class| php_string(class))
            .collect::<Vec<_>>()
            .join(",\n        ");

        format!(
            "<?php\n\
             return (object)[\n    \
             \"rootNamespace\" => {},\n    \
             \"destDirectory\" => {},\n    \
             \"format\" => \"{}\",\n    \
             \"classes\" => [\n        \
             {}\n    \
             ],\n\
             ];\n",
            php_string(&self.root_namespace),
            php_string(&self.dest_directory),
            OUTPUT_FORMAT,
            classes
        )
    }
}

/// Quote `value` as a single-quoted PHP string literal.
pub fn php_string(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for ch in value.chars() {
        if ch == '\\' || ch == '\'' {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    quoted.push('\'');
    quoted
}
