use std::path::{Path, PathBuf};

use bespoke_core::Indent;

use super::{Node, Renderable, sorted};
use crate::{CodeBuilder, Context};

/// A generated file: its destination and its top-level declarations.
///
/// Constructing a module renders nothing; see [`crate::pipeline::Pipeline`].
#[derive(Debug)]
pub struct Module {
    destination: PathBuf,
    content: Vec<Node>,
}

impl Module {
    pub fn new(destination: impl Into<PathBuf>, content: Vec<Node>) -> Self {
        Self {
            destination: destination.into(),
            content,
        }
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Top-level declarations in attachment order.
    pub fn content(&self) -> &[Node] {
        &self.content
    }

    /// Top-level declarations in render order.
    pub fn sorted_content(&self) -> Vec<&dyn Renderable> {
        sorted(&self.content)
    }

    /// Names from `expected` that no bespoke in this module carries.
    pub fn missing_bespokes<'a>(&self, expected: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
        let present = self.bespokes();
        expected
            .into_iter()
            .filter(|name| !present.iter().any(|p| p.as_str() == *name))
            .collect()
    }

    /// Render each top-level declaration through its own builder.
    ///
    /// Declarations that produce no text (hoisted imports) are dropped; the
    /// others end with exactly one line break.
    pub fn render_parts(&self, ctx: &Context, indent: Indent) -> Vec<String> {
        self.sorted_content()
            .into_iter()
            .filter_map(|node| {
                let text = node.to_text(ctx, indent);
                let text = text.trim_end_matches('\n');
                if text.is_empty() {
                    None
                } else {
                    Some(format!("{}\n", text))
                }
            })
            .collect()
    }
}

impl Renderable for Module {
    /// Modules render at column zero: parts are appended verbatim, separated
    /// by blank lines.
    fn render(&self, ctx: &Context, builder: &mut CodeBuilder) {
        for (i, part) in self
            .render_parts(ctx, builder.indent_unit())
            .iter()
            .enumerate()
        {
            if i > 0 {
                builder.push_blank();
            }
            builder.push_verbatim(part);
        }
    }

    fn children(&self) -> &[Node] {
        &self.content
    }

    fn describe(&self) -> String {
        format!("module '{}'", self.destination.display())
    }
}
