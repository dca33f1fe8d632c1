//! Parameters, properties and type aliases.

use bespoke_codegen::{CodeBuilder, Context, Renderable};

/// A parameter of a function or method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub ty: String,
    pub optional: bool,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            optional: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub(crate) fn declaration(&self) -> String {
        let optional = if self.optional { "?" } else { "" };
        format!("{}{}: {}", self.name, optional, self.ty)
    }
}

/// A property of an interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub ty: String,
    pub optional: bool,
    pub readonly: bool,
}

impl Property {
    /// A property that must be present.
    pub fn required(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            optional: false,
            readonly: false,
        }
    }

    /// A property that may be absent (`name?: ty`).
    pub fn optional(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            optional: true,
            ..Self::required(name, ty)
        }
    }

    pub fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }

    pub(crate) fn declaration(&self) -> String {
        let readonly = if self.readonly { "readonly " } else { "" };
        let optional = if self.optional { "?" } else { "" };
        format!("{}{}{}: {};", readonly, self.name, optional, self.ty)
    }
}

/// `type Name = ty;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeAlias {
    name: String,
    ty: String,
    exported: bool,
}

impl TypeAlias {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            exported: true,
        }
    }

    /// Make this alias private (not exported).
    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }
}

impl Renderable for TypeAlias {
    fn render(&self, _ctx: &Context, builder: &mut CodeBuilder) {
        let export = if self.exported { "export " } else { "" };
        builder.push_line(&format!("{}type {} = {};", export, self.name, self.ty));
    }

    fn sort_key(&self) -> &str {
        &self.name
    }

    fn identifiers(&self) -> Vec<String> {
        vec![self.name.clone()]
    }

    fn describe(&self) -> String {
        format!("type '{}'", self.name)
    }
}

/// Render a parameter list, one parameter per line when there are any.
pub(crate) fn push_signature(builder: &mut CodeBuilder, head: &str, params: &[Param], tail: &str) {
    if params.is_empty() {
        builder.push_line(&format!("{}(){}", head, tail));
        return;
    }
    builder.push_line(&format!("{}(", head));
    builder.indented(|b| {
        for param in params {
            b.push_line(&format!("{},", param.declaration()));
        }
    });
    builder.push_line(&format!("){}", tail));
}
