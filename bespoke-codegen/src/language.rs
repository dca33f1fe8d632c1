//! Target language dialects.

use std::fmt;

use bespoke_core::{CommentStyle, Indent};

use crate::{
    CodeBuilder,
    generation::{ImportCollector, ImportGroup},
};

/// What the engine needs to know about a target language.
///
/// Implement this trait to generate files in a new language. Everything else
/// (marker placement, preservation, ordering, writing) is language agnostic.
pub trait Language: fmt::Debug {
    /// Language identifier (e.g., "typescript")
    fn name(&self) -> &'static str;

    /// Default indent unit.
    fn indent(&self) -> Indent;

    /// Default comment syntax, used for bespoke markers and the file header.
    fn comment(&self) -> CommentStyle;

    /// Print the merged imports of one source module.
    fn render_imports(&self, source: &str, group: &ImportGroup, builder: &mut CodeBuilder);

    /// Print every collected import, one group per source, sources sorted.
    fn render_import_block(&self, imports: &ImportCollector, builder: &mut CodeBuilder) {
        for (source, group) in imports.sorted() {
            self.render_imports(source, group, builder);
        }
    }
}
