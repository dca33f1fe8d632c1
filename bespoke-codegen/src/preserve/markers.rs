//! Sentinel marker lines that delimit bespoke regions.

use bespoke_core::CommentStyle;

/// Literal tag embedded in every marker line.
pub const MARKER_TAG: &str = "==BESPOKE==";

const BEGIN: &str = "BEGIN";
const END: &str = "END";

/// Which side of a region a marker delimits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Begin,
    End,
}

/// A parsed marker line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker<'a> {
    pub name: &'a str,
    pub kind: MarkerKind,
}

/// Marker format for one comment syntax.
///
/// A region named `body` in a `//` language is delimited by:
///
/// ```text
/// // ==BESPOKE==:body:BEGIN
/// // ==BESPOKE==:body:END
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Markers {
    comment: CommentStyle,
}

impl Markers {
    pub fn new(comment: CommentStyle) -> Self {
        Self { comment }
    }

    pub fn comment(&self) -> &CommentStyle {
        &self.comment
    }

    /// The opening marker line for `name` (without indentation or line break).
    pub fn begin(&self, name: &str) -> String {
        self.comment
            .wrap(&format!("{}:{}:{}", MARKER_TAG, name, BEGIN))
    }

    /// The closing marker line for `name` (without indentation or line break).
    pub fn end(&self, name: &str) -> String {
        self.comment.wrap(&format!("{}:{}:{}", MARKER_TAG, name, END))
    }

    /// Parse a line as a marker.
    ///
    /// Only a line that, apart from surrounding whitespace, is exactly a marker
    /// produced by [`Markers::begin`] or [`Markers::end`] is recognised. Text
    /// that merely mentions the tag is ordinary content.
    pub fn parse<'a>(&self, line: &'a str) -> Option<Marker<'a>> {
        let text = self.comment.unwrap(line.trim())?;
        let rest = text.strip_prefix(MARKER_TAG)?.strip_prefix(':')?;
        let (name, kind) = rest.rsplit_once(':')?;
        let kind = match kind {
            BEGIN => MarkerKind::Begin,
            END => MarkerKind::End,
            _ => return None,
        };
        self.check_name(name).ok()?;
        Some(Marker { name, kind })
    }

    /// Check that `name` can be written into a marker line and read back.
    ///
    /// Returns the reason when it cannot.
    pub fn check_name(&self, name: &str) -> Result<(), String> {
        if name.is_empty() {
            return Err("bespoke names cannot be empty".to_string());
        }
        if name.chars().any(char::is_control) {
            return Err("names must fit on a single marker line".to_string());
        }
        if name.trim() != name {
            return Err("names cannot start or end with whitespace".to_string());
        }
        if let Some(close) = self.comment.close() {
            if name.contains(close) {
                return Err(format!("names cannot contain the comment terminator '{}'", close));
            }
        }
        Ok(())
    }
}
