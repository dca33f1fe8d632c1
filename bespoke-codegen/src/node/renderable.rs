//! The node contract shared by every kind of node in a generation tree.

use std::fmt;

use bespoke_core::Indent;

use crate::{CodeBuilder, Context, Result, generation::ImportSpec};

/// An owned node of a generation tree.
pub type Node = Box<dyn Renderable>;

/// Trait implemented by every node of a generation tree.
///
/// Only [`Renderable::render`] is required. The other methods have defaults
/// that suit leaf nodes; containers override [`Renderable::children`] so that
/// the default [`Renderable::bespokes`] walk and the pipeline's walks reach
/// their content.
pub trait Renderable: fmt::Debug {
    /// Append this node's text to `builder`.
    ///
    /// Must not have side effects beyond the text appended.
    fn render(&self, ctx: &Context, builder: &mut CodeBuilder);

    /// Owned child nodes, in attachment order.
    fn children(&self) -> &[Node] {
        &[]
    }

    /// Every bespoke name reachable from this node, in tree order.
    fn bespokes(&self) -> Vec<String> {
        self.children()
            .iter()
            .flat_map(|child| child.bespokes())
            .collect()
    }

    /// Key ordering this node among its siblings in a sorting container.
    fn sort_key(&self) -> &str {
        ""
    }

    /// Identifiers this node itself declares (children excluded).
    fn identifiers(&self) -> Vec<String> {
        Vec::new()
    }

    /// Imports this node itself needs hoisted to the top of the file.
    fn imports(&self) -> Vec<ImportSpec> {
        Vec::new()
    }

    /// Structural self-check run before rendering.
    fn verify(&self, _ctx: &Context) -> Result<()> {
        Ok(())
    }

    /// Short human-readable identity used in diagnostics.
    fn describe(&self) -> String {
        let full = std::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full).to_string()
    }

    /// Render through a fresh builder.
    fn to_text(&self, ctx: &Context, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);
        self.render(ctx, &mut builder);
        builder.build()
    }

    /// Box this node.
    fn boxed(self) -> Node
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

/// Visit `node` and every descendant, depth first, in attachment order.
pub fn walk<F>(node: &dyn Renderable, f: &mut F) -> Result<()>
where
    F: FnMut(&dyn Renderable) -> Result<()>,
{
    f(node)?;
    for child in node.children() {
        walk(&**child, f)?;
    }
    Ok(())
}

/// Stable sort of sibling nodes by [`Renderable::sort_key`].
pub fn sorted(nodes: &[Node]) -> Vec<&dyn Renderable> {
    let mut sorted: Vec<&dyn Renderable> = nodes.iter().map(|node| &**node).collect();
    sorted.sort_by(|a, b| a.sort_key().cmp(b.sort_key()));
    sorted
}
