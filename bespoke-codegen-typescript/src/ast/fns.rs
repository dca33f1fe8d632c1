//! TypeScript functions.

use bespoke_codegen::{CodeBuilder, Context, Node, Renderable};

use super::{Param, types::push_signature};

/// A top-level function declaration.
///
/// The body is rendered in attachment order, one indent level deeper than the
/// signature.
#[derive(Debug)]
pub struct Function {
    name: String,
    exported: bool,
    is_async: bool,
    params: Vec<Param>,
    returns: Option<String>,
    content: Vec<Node>,
}

impl Function {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exported: true,
            is_async: false,
            params: Vec::new(),
            returns: None,
            content: Vec::new(),
        }
    }

    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    pub fn async_(mut self) -> Self {
        self.is_async = true;
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.returns = Some(ty.into());
        self
    }

    /// Append a node to the body.
    pub fn child(mut self, node: impl Renderable + 'static) -> Self {
        self.content.push(Box::new(node));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Renderable for Function {
    fn render(&self, ctx: &Context, builder: &mut CodeBuilder) {
        let export = if self.exported { "export " } else { "" };
        let async_kw = if self.is_async { "async " } else { "" };
        let head = format!("{}{}function {}", export, async_kw, self.name);
        let tail = match &self.returns {
            Some(ty) => format!(": {} {{", ty),
            None => " {".to_string(),
        };

        push_signature(builder, &head, &self.params, &tail);
        builder.indented(|b| {
            for node in &self.content {
                b.emit(ctx, &**node);
            }
        });
        builder.push_line("}");
    }

    fn children(&self) -> &[Node] {
        &self.content
    }

    fn sort_key(&self) -> &str {
        &self.name
    }

    fn identifiers(&self) -> Vec<String> {
        vec![self.name.clone()]
    }

    fn describe(&self) -> String {
        format!("function '{}'", self.name)
    }
}
