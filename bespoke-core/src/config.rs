//! Generator configuration.
//!
//! Every field has a sensible default, so an empty document is a valid
//! configuration:
//!
//! ```toml
//! indent_width = 2
//! header = "Generated file. Only edit inside bespoke regions."
//! comment = { kind = "line", prefix = "//" }
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::{CommentStyle, ConfigError, Indent};

/// Options shared by every pipeline run.
///
/// Language defaults (indent unit, comment syntax) apply unless overridden here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Number of spaces per indent level.
    pub indent_width: Option<u8>,
    /// Indent with tabs instead of spaces. Takes precedence over `indent_width`.
    pub tabs: bool,
    /// Comment line written at the top of every generated file.
    pub header: Option<String>,
    /// Comment syntax used for bespoke markers and the header.
    pub comment: Option<CommentStyle>,
    /// Create missing parent directories of the destination.
    pub create_parent_dirs: bool,
    /// Leave the destination untouched when the rendered bytes are identical.
    pub skip_unchanged: bool,
}

impl Config {
    /// Parse a configuration from TOML source.
    pub fn from_toml_str(src: &str, filename: &str) -> Result<Self, Box<ConfigError>> {
        toml::from_str(src).map_err(|e| ConfigError::parse(e, src, filename))
    }

    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self, Box<ConfigError>> {
        let src = std::fs::read_to_string(path).map_err(|source| {
            Box::new(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        })?;
        let filename = path.display().to_string();
        Self::from_toml_str(&src, &filename)
    }

    /// Resolve the indentation, falling back to the language default.
    pub fn indent_or(&self, default: Indent) -> Indent {
        if self.tabs {
            return Indent::Tab;
        }
        self.indent_width.map(Indent::Spaces).unwrap_or(default)
    }

    /// Resolve the comment syntax, falling back to the language default.
    pub fn comment_or(&self, default: CommentStyle) -> CommentStyle {
        self.comment.clone().unwrap_or(default)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent_width: None,
            tabs: false,
            header: None,
            comment: None,
            create_parent_dirs: true,
            skip_unchanged: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml_str("", "bespoke.toml").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.create_parent_dirs);
        assert!(config.skip_unchanged);
    }

    #[test]
    fn test_indent_resolution() {
        let config = Config::from_toml_str("indent_width = 2", "bespoke.toml").unwrap();
        assert_eq!(config.indent_or(Indent::FOUR_SPACES), Indent::Spaces(2));

        let config = Config::from_toml_str("indent_width = 2\ntabs = true", "bespoke.toml").unwrap();
        assert_eq!(config.indent_or(Indent::FOUR_SPACES), Indent::Tab);

        assert_eq!(
            Config::default().indent_or(Indent::TWO_SPACES),
            Indent::TWO_SPACES
        );
    }

    #[test]
    fn test_comment_override() {
        let config = Config::from_toml_str(
            r##"comment = { kind = "line", prefix = "#" }"##,
            "bespoke.toml",
        )
        .unwrap();
        assert_eq!(
            config.comment_or(CommentStyle::double_slash()),
            CommentStyle::hash()
        );
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let err = Config::from_toml_str("indentation = 2", "bespoke.toml").unwrap_err();
        assert!(matches!(*err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let temp = tempfile::TempDir::new().unwrap();
        let err = Config::load(&temp.path().join("missing.toml")).unwrap_err();
        assert!(matches!(*err, ConfigError::Io { .. }));
    }
}
