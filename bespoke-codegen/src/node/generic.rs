//! Language-neutral nodes.

use super::{Node, Renderable};
use crate::{CodeBuilder, Context};

/// Fixed text, one or more lines, indented like its surroundings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raw {
    text: String,
    sort_key: String,
}

impl Raw {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sort_key: String::new(),
        }
    }

    /// Build from multiple lines.
    pub fn lines(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::new(
            lines
                .into_iter()
                .map(Into::into)
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }

    pub fn with_sort_key(mut self, key: impl Into<String>) -> Self {
        self.sort_key = key.into();
        self
    }
}

impl Renderable for Raw {
    fn render(&self, _ctx: &Context, builder: &mut CodeBuilder) {
        for line in self.text.lines() {
            builder.push_line(line);
        }
    }

    fn sort_key(&self) -> &str {
        &self.sort_key
    }
}

/// A header line, indented content, and an optional closing line.
///
/// Content is rendered in attachment order; a block is a statement-like
/// container, not a sorting one.
#[derive(Debug)]
pub struct Block {
    header: String,
    close: Option<String>,
    content: Vec<Node>,
    declares: Option<String>,
}

impl Block {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            close: None,
            content: Vec::new(),
            declares: None,
        }
    }

    /// Closing line written after the content.
    pub fn close(mut self, close: impl Into<String>) -> Self {
        self.close = Some(close.into());
        self
    }

    /// Append a child node.
    pub fn child(mut self, node: impl Renderable + 'static) -> Self {
        self.content.push(Box::new(node));
        self
    }

    /// Append already boxed child nodes.
    pub fn content(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.content.extend(nodes);
        self
    }

    /// Mark this block as the declaration of `name`.
    ///
    /// The name is registered as an identifier and used as the sort key.
    pub fn declares(mut self, name: impl Into<String>) -> Self {
        self.declares = Some(name.into());
        self
    }
}

impl Renderable for Block {
    fn render(&self, ctx: &Context, builder: &mut CodeBuilder) {
        builder.push_line(&self.header);
        builder.indented(|b| {
            for child in &self.content {
                b.emit(ctx, &**child);
            }
        });
        if let Some(close) = &self.close {
            builder.push_line(close);
        }
    }

    fn children(&self) -> &[Node] {
        &self.content
    }

    fn sort_key(&self) -> &str {
        self.declares.as_deref().unwrap_or_default()
    }

    fn identifiers(&self) -> Vec<String> {
        self.declares.iter().cloned().collect()
    }

    fn describe(&self) -> String {
        match &self.declares {
            Some(name) => format!("block '{}'", name),
            None => format!("block '{}'", self.header.trim()),
        }
    }
}
