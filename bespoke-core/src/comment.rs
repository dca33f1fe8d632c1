//! Comment syntax of a target language.

use serde::Deserialize;

/// How a single-line, no-op comment is written in the target language.
///
/// Bespoke markers are emitted as comments so that the generated file stays
/// valid source code.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CommentStyle {
    /// A line comment introduced by `prefix` (e.g. `//`, `#`, `--`).
    Line { prefix: String },
    /// A block comment written on one line (e.g. `/* ... */`, `<!-- ... -->`).
    Block { open: String, close: String },
}

impl CommentStyle {
    /// `// comment`
    pub fn double_slash() -> Self {
        Self::Line {
            prefix: "//".to_string(),
        }
    }

    /// `# comment`
    pub fn hash() -> Self {
        Self::Line {
            prefix: "#".to_string(),
        }
    }

    /// `/* comment */`
    pub fn c_block() -> Self {
        Self::Block {
            open: "/*".to_string(),
            close: "*/".to_string(),
        }
    }

    /// The token that opens a comment.
    pub fn open(&self) -> &str {
        match self {
            Self::Line { prefix } => prefix,
            Self::Block { open, .. } => open,
        }
    }

    /// The token that closes a comment, if the style has one.
    pub fn close(&self) -> Option<&str> {
        match self {
            Self::Line { .. } => None,
            Self::Block { close, .. } => Some(close),
        }
    }

    /// Wrap `text` into a single comment line (without line break).
    pub fn wrap(&self, text: &str) -> String {
        match self.close() {
            Some(close) => format!("{} {} {}", self.open(), text, close),
            None => format!("{} {}", self.open(), text),
        }
    }

    /// Inverse of [`CommentStyle::wrap`]: return the comment text if `line`
    /// (already trimmed) is a single comment in this style.
    pub fn unwrap<'a>(&self, line: &'a str) -> Option<&'a str> {
        let inner = line.strip_prefix(self.open())?;
        let inner = match self.close() {
            Some(close) => inner.strip_suffix(close)?,
            None => inner,
        };
        Some(inner.trim())
    }
}

impl Default for CommentStyle {
    fn default() -> Self {
        Self::double_slash()
    }
}
