//! Configuration file support
//!
//! Loads settings from ~/.tinted.toml (or %USERPROFILE%\.tinted.toml on
//! Windows). A missing or unparseable file falls back to the defaults, and
//! an individual setting with the wrong type is ignored.
//!
//! Example:
//! ```text
//! indent = "spaces"
//! indent-width = 4
//! tab-width = 8
//! line-numbers = true
//! ```

use std::path::PathBuf;

use toml::Table;

/// What gets inserted per indentation level on auto-indent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndentUnit {
    Tab,
    Spaces(usize),
}

impl IndentUnit {
    /// The literal text of one indent unit
    pub fn text(&self) -> String {
        match self {
            IndentUnit::Tab => "\t".to_string(),
            IndentUnit::Spaces(n) => " ".repeat(*n),
        }
    }
}

/// Configuration settings
#[derive(Debug, Clone)]
pub struct Config {
    /// Indent unit for auto-indentation
    pub indent: IndentUnit,
    /// Display width of a tab character
    pub tab_width: usize,
    /// Whether to show line numbers
    pub show_line_numbers: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent: IndentUnit::Tab,
            tab_width: 8,
            show_line_numbers: false,
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        let home = std::env::var("USERPROFILE").ok();

        #[cfg(not(windows))]
        let home = std::env::var("HOME").ok();

        home.map(|home| PathBuf::from(home).join(".tinted.toml"))
    }

    /// Load configuration from file
    pub fn load() -> Self {
        let mut config = Config::default();

        if let Some(path) = Self::config_path() {
            if let Ok(contents) = std::fs::read_to_string(&path) {
                if let Ok(table) = contents.parse::<Table>() {
                    config.apply(&table);
                }
            }
        }

        config
    }

    /// Apply settings from a parsed table
    fn apply(&mut self, table: &Table) {
        let width = table
            .get("indent-width")
            .and_then(|v| v.as_integer())
            .map(|n| (n.max(1) as usize).min(16))
            .unwrap_or(4);

        if let Some(value) = table.get("indent").and_then(|v| v.as_str()) {
            match value {
                "tab" => self.indent = IndentUnit::Tab,
                "spaces" => self.indent = IndentUnit::Spaces(width),
                _ => {}
            }
        }

        if let Some(n) = table.get("tab-width").and_then(|v| v.as_integer()) {
            self.tab_width = (n.max(1) as usize).min(16);
        }

        if let Some(value) = table.get("line-numbers").and_then(|v| v.as_bool()) {
            self.show_line_numbers = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(contents: &str) -> Config {
        let mut config = Config::default();
        config.apply(&contents.parse::<Table>().unwrap());
        config
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.indent, IndentUnit::Tab);
        assert_eq!(config.tab_width, 8);
        assert!(!config.show_line_numbers);
    }

    #[test]
    fn test_apply_settings() {
        let config = apply(
            "indent = \"spaces\"\nindent-width = 2\ntab-width = 4\nline-numbers = true\n",
        );
        assert_eq!(config.indent, IndentUnit::Spaces(2));
        assert_eq!(config.tab_width, 4);
        assert!(config.show_line_numbers);
    }

    #[test]
    fn test_spaces_default_width() {
        let config = apply("indent = \"spaces\"\n");
        assert_eq!(config.indent, IndentUnit::Spaces(4));
    }

    #[test]
    fn test_bad_values_are_ignored() {
        let config = apply("indent = \"elastic\"\ntab-width = \"wide\"\nline-numbers = 3\n");
        assert_eq!(config.indent, IndentUnit::Tab);
        assert_eq!(config.tab_width, 8);
        assert!(!config.show_line_numbers);
    }

    #[test]
    fn test_width_clamped() {
        let config = apply("indent = \"spaces\"\nindent-width = 99\ntab-width = 0\n");
        assert_eq!(config.indent, IndentUnit::Spaces(16));
        assert_eq!(config.tab_width, 1);
    }

    #[test]
    fn test_indent_unit_text() {
        assert_eq!(IndentUnit::Tab.text(), "\t");
        assert_eq!(IndentUnit::Spaces(3).text(), "   ");
    }
}
