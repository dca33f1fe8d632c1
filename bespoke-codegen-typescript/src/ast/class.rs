//! TypeScript classes and their methods.

use std::collections::HashSet;

use bespoke_codegen::{
    CodeBuilder, Context, Error, Node, Renderable, Result, node::sorted,
};

use super::{Param, types::push_signature};

/// Member visibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

impl Visibility {
    fn keyword(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Protected => "protected",
            Visibility::Private => "private",
        }
    }
}

/// A class method or constructor.
///
/// Within a class, methods sort after bespoke slots: the constructor first,
/// then static methods, then instance methods, each group by name.
#[derive(Debug)]
pub struct Method {
    name: String,
    visibility: Visibility,
    is_static: bool,
    is_async: bool,
    constructor: bool,
    params: Vec<Param>,
    returns: Option<String>,
    content: Vec<Node>,
    sort_key: String,
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            is_static: false,
            is_async: false,
            constructor: false,
            params: Vec::new(),
            returns: None,
            content: Vec::new(),
            sort_key: String::new(),
        }
        .rekey()
    }

    /// The class constructor.
    pub fn constructor() -> Self {
        Self {
            constructor: true,
            ..Self::new("constructor")
        }
        .rekey()
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self.rekey()
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

    fn rekey(mut self) -> Self {
        let rank = match (self.constructor, self.is_static) {
            (true, _) => 1,
            (false, true) => 2,
            (false, false) => 3,
        };
        self.sort_key = format!("{}:{}", rank, self.name);
        self
    }
}

impl Renderable for Method {
    fn render(&self, ctx: &Context, builder: &mut CodeBuilder) {
        let mut head = format!("{} ", self.visibility.keyword());
        if self.is_static {
            head.push_str("static ");
        }
        if self.is_async {
            head.push_str("async ");
        }
        head.push_str(&self.name);

        let tail = match (&self.returns, self.constructor) {
            (Some(ty), false) => format!(": {} {{", ty),
            _ => " {".to_string(),
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
        &self.sort_key
    }

    fn describe(&self) -> String {
        format!("method '{}'", self.name)
    }
}

/// A class declaration.
///
/// Members are sorted by their sort keys and separated by blank lines. Names
/// listed with [`Class::uses`] must be declared elsewhere in the same module.
#[derive(Debug)]
pub struct Class {
    name: String,
    exported: bool,
    is_abstract: bool,
    extends: Option<String>,
    implements: Vec<String>,
    uses: Vec<String>,
    content: Vec<Node>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exported: true,
            is_abstract: false,
            extends: None,
            implements: Vec::new(),
            uses: Vec::new(),
            content: Vec::new(),
        }
    }

    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    pub fn abstract_(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    pub fn extends(mut self, base: impl Into<String>) -> Self {
        self.extends = Some(base.into());
        self
    }

    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        self.implements.push(interface.into());
        self
    }

    /// Require `name` to be declared by another node of the module.
    pub fn uses(mut self, name: impl Into<String>) -> Self {
        self.uses.push(name.into());
        self
    }

    /// Append a member.
    pub fn child(mut self, node: impl Renderable + 'static) -> Self {
        self.content.push(Box::new(node));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn header(&self) -> String {
        let mut header = String::new();
        if self.exported {
            header.push_str("export ");
        }
        if self.is_abstract {
            header.push_str("abstract ");
        }
        header.push_str("class ");
        header.push_str(&self.name);
        if let Some(base) = &self.extends {
            header.push_str(&format!(" extends {}", base));
        }
        if !self.implements.is_empty() {
            header.push_str(&format!(" implements {}", self.implements.join(", ")));
        }
        header.push_str(" {");
        header
    }
}

impl Renderable for Class {
    fn render(&self, ctx: &Context, builder: &mut CodeBuilder) {
        builder.push_line(&self.header());
        builder.indented(|b| {
            b.emit_separated(ctx, sorted(&self.content));
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

    fn verify(&self, ctx: &Context) -> Result<()> {
        for name in &self.uses {
            if !ctx.identifiers().contains(name) {
                return Err(Error::verification(
                    self.describe(),
                    format!("uses undeclared '{}'", name),
                ));
            }
        }

        let mut members = HashSet::new();
        for member in &self.content {
            let key = member.sort_key();
            if !key.is_empty() && !members.insert(key) {
                let name = key.split_once(':').map_or(key, |(_, name)| name);
                return Err(Error::verification(
                    self.describe(),
                    format!("more than one member is named '{}'", name),
                ));
            }
        }
        Ok(())
    }

    fn describe(&self) -> String {
        format!("class '{}'", self.name)
    }
}

#[cfg(test)]
mod tests {
    use bespoke_codegen::{Bespoke, IdentifierRegistry, preserve::{Markers, PreservationStore}};
    use bespoke_core::Indent;

    use super::*;
    use crate::ast::Import;

    fn text(node: &dyn Renderable) -> String {
        node.to_text(&Context::default(), Indent::TWO_SPACES)
    }

    #[test]
    fn test_members_sorted_and_separated() {
        let class = Class::new("Counter")
            .extends("Base")
            .implements("A")
            .implements("B")
            .child(Method::new("render").returns("void"))
            .child(Import::new("react").all_as("React"))
            .child(Method::new("create").static_())
            .child(Bespoke::new("fields"))
            .child(Method::constructor().param(Param::new("n", "number")));

        assert_eq!(
            text(&class),
            "\
export class Counter extends Base implements A, B {
  // ==BESPOKE==:fields:BEGIN
  // ==BESPOKE==:fields:END

  public constructor(
    n: number,
  ) {
  }

  public static create() {
  }

  public render(): void {
  }
}
"
        );
    }

    #[test]
    fn test_abstract_private_empty_class() {
        let class = Class::new("Shape").private().abstract_();
        assert_eq!(text(&class), "abstract class Shape {\n}\n");
    }

    #[test]
    fn test_method_modifiers() {
        let method = Method::new("load")
            .visibility(Visibility::Protected)
            .async_()
            .returns("Promise<void>");
        assert_eq!(text(&method), "protected async load(): Promise<void> {\n}\n");
    }

    #[test]
    fn test_verify_uses_declared_identifiers() {
        let class = Class::new("Foo").uses("IFooProps");

        let err = class.verify(&Context::default()).unwrap_err();
        assert_eq!(err.to_string(), "class 'Foo': uses undeclared 'IFooProps'");

        let mut identifiers = IdentifierRegistry::new();
        identifiers.declare("IFooProps", "interface 'IFooProps'").unwrap();
        let ctx = Context::new(PreservationStore::new(), Markers::default())
            .with_identifiers(identifiers);
        assert!(class.verify(&ctx).is_ok());
    }

    #[test]
    fn test_verify_rejects_duplicate_members() {
        let class = Class::new("Foo")
            .child(Method::new("render"))
            .child(Method::new("render"));

        let err = class.verify(&Context::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "class 'Foo': more than one member is named 'render'"
        );
    }

    #[test]
    fn test_static_and_instance_methods_may_share_a_name() {
        let class = Class::new("Foo")
            .child(Method::new("of").static_())
            .child(Method::new("of"));
        assert!(class.verify(&Context::default()).is_ok());
    }
}
