//! TypeScript interfaces.

use std::collections::HashSet;

use bespoke_codegen::{CodeBuilder, Context, Error, Renderable, Result};

use super::Property;

/// An interface declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interface {
    name: String,
    exported: bool,
    extends: Vec<String>,
    properties: Vec<Property>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exported: true,
            extends: Vec::new(),
            properties: Vec::new(),
        }
    }

    /// Make this interface private (not exported).
    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    pub fn extends(mut self, base: impl Into<String>) -> Self {
        self.extends.push(base.into());
        self
    }

    pub fn property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    pub fn properties(mut self, properties: impl IntoIterator<Item = Property>) -> Self {
        self.properties.extend(properties);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Renderable for Interface {
    fn render(&self, _ctx: &Context, builder: &mut CodeBuilder) {
        let export = if self.exported { "export " } else { "" };
        let extends = if self.extends.is_empty() {
            String::new()
        } else {
            format!(" extends {}", self.extends.join(", "))
        };
        let header = format!("{}interface {}{}", export, self.name, extends);

        if self.properties.is_empty() {
            builder.push_line(&format!("{} {{}}", header));
            return;
        }
        builder.block(&format!("{} {{", header), "}", |b| {
            for property in &self.properties {
                b.push_line(&property.declaration());
            }
        });
    }

    fn sort_key(&self) -> &str {
        &self.name
    }

    fn identifiers(&self) -> Vec<String> {
        vec![self.name.clone()]
    }

    fn verify(&self, _ctx: &Context) -> Result<()> {
        let mut seen = HashSet::new();
        for property in &self.properties {
            if !seen.insert(property.name.as_str()) {
                return Err(Error::verification(
                    self.describe(),
                    format!("property '{}' is declared more than once", property.name),
                ));
            }
        }
        Ok(())
    }

    fn describe(&self) -> String {
        format!("interface '{}'", self.name)
    }
}

#[cfg(test)]
mod tests {
    use bespoke_core::Indent;

    use super::*;

    fn text(i: &Interface) -> String {
        i.to_text(&Context::default(), Indent::TWO_SPACES)
    }

    #[test]
    fn test_empty_interface() {
        assert_eq!(text(&Interface::new("Empty")), "export interface Empty {}\n");
    }

    #[test]
    fn test_interface_with_properties() {
        let i = Interface::new("ICounterProps")
            .extends("IBase")
            .property(Property::required("start", "number"))
            .property(Property::optional("label", "string").readonly());
        assert_eq!(
            text(&i),
            "export interface ICounterProps extends IBase {\n  start: number;\n  readonly label?: string;\n}\n"
        );
    }

    #[test]
    fn test_private_interface() {
        let i = Interface::new("Internal").private();
        assert_eq!(text(&i), "interface Internal {}\n");
    }

    #[test]
    fn test_duplicate_property_fails_verification() {
        let i = Interface::new("IState")
            .property(Property::required("count", "number"))
            .property(Property::optional("count", "string"));

        let err = i.verify(&Context::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "interface 'IState': property 'count' is declared more than once"
        );
    }
}
