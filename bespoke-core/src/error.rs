use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Errors raised while loading a generator configuration.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read '{}'", path.display())]
    #[diagnostic(code(bespoke::config::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse generator configuration")]
    #[diagnostic(
        code(bespoke::config::parse),
        help("known keys are: indent_width, tabs, header, comment, create_parent_dirs, skip_unchanged")
    )]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    /// Create a parse error from a toml error with source context.
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(ConfigError::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }
}
