use std::{fmt, path::PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for rendering operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// What is wrong with a bespoke marker found in a previously generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkerProblem {
    /// A BEGIN marker has no END marker before the end of the file.
    Unclosed,
    /// An END marker has no preceding BEGIN marker.
    UnexpectedEnd,
    /// An END marker closes a region while another one, opened later, is still open.
    Interleaved { innermost: String },
    /// A BEGIN marker for a region that is already open.
    Reopened,
    /// The same region appears more than once at the top level.
    Repeated,
}

impl fmt::Display for MarkerProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkerProblem::Unclosed => write!(f, "opened but never closed"),
            MarkerProblem::UnexpectedEnd => write!(f, "closed without being opened"),
            MarkerProblem::Interleaved { innermost } => {
                write!(f, "closed while '{}' is still open", innermost)
            }
            MarkerProblem::Reopened => write!(f, "opened again while already open"),
            MarkerProblem::Repeated => write!(f, "appears in more than one region"),
        }
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("malformed bespoke marker for '{name}': {problem}")]
    #[diagnostic(
        code(bespoke::malformed_marker),
        help("fix the markers by hand; the file was left untouched so no authored content is lost")
    )]
    MalformedMarker {
        name: String,
        problem: MarkerProblem,
        #[source_code]
        src: NamedSource<String>,
        #[label("{problem}")]
        span: SourceSpan,
    },

    #[error("duplicate bespoke name '{name}'")]
    #[diagnostic(
        code(bespoke::duplicate_bespoke),
        help("every bespoke slot in a module needs a distinct name")
    )]
    DuplicateBespokeName { name: String },

    #[error("invalid bespoke name '{name}'")]
    #[diagnostic(code(bespoke::invalid_bespoke), help("{reason}"))]
    InvalidBespokeName { name: String, reason: String },

    #[error("identifier '{name}' is declared by both {first} and {second}")]
    #[diagnostic(code(bespoke::duplicate_identifier))]
    DuplicateIdentifier {
        name: String,
        first: String,
        second: String,
    },

    #[error("conflicting imports from '{module}': '{existing}' and '{incoming}'")]
    #[diagnostic(
        code(bespoke::conflicting_import),
        help("a module can bind its default export or namespace to a single name")
    )]
    ConflictingImport {
        module: String,
        existing: String,
        incoming: String,
    },

    #[error("{node}: {message}")]
    #[diagnostic(code(bespoke::verification))]
    VerificationFailure { node: String, message: String },

    #[error("failed to access '{}'", path.display())]
    #[diagnostic(code(bespoke::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a malformed marker error pointing at `offset..offset + len` in `src`.
    pub fn malformed_marker(
        name: impl Into<String>,
        problem: MarkerProblem,
        src: &str,
        filename: &str,
        offset: usize,
        len: usize,
    ) -> Box<Self> {
        Box::new(Error::MalformedMarker {
            name: name.into(),
            problem,
            src: NamedSource::new(filename, src.to_string()),
            span: SourceSpan::from((offset, len)),
        })
    }

    /// Create a verification failure for the node identified by `node`.
    pub fn verification(node: impl Into<String>, message: impl Into<String>) -> Box<Self> {
        Box::new(Error::VerificationFailure {
            node: node.into(),
            message: message.into(),
        })
    }

    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }
}
