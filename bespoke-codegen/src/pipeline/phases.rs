//! Tree walks run by the pipeline before and around rendering.

use std::collections::HashSet;

use crate::{
    Context, Error, IdentifierRegistry, Module, Renderable, Result,
    generation::ImportCollector,
    node::walk,
    preserve::Markers,
};

/// Check every bespoke name in `module` and reject duplicates.
pub(crate) fn check_bespokes(module: &Module, markers: &Markers) -> Result<()> {
    let mut seen = HashSet::new();
    for name in module.bespokes() {
        if let Err(reason) = markers.check_name(&name) {
            return Err(Box::new(Error::InvalidBespokeName { name, reason }));
        }
        if !seen.insert(name.clone()) {
            return Err(Box::new(Error::DuplicateBespokeName { name }));
        }
    }
    Ok(())
}

/// Register every identifier declared anywhere in `module`.
pub(crate) fn declare_identifiers(module: &Module) -> Result<IdentifierRegistry> {
    let mut registry = IdentifierRegistry::new();
    walk(module, &mut |node: &dyn Renderable| {
        for name in node.identifiers() {
            registry.declare(name, node.describe())?;
        }
        Ok(())
    })?;
    Ok(registry)
}

/// Run every node's structural self-check.
pub(crate) fn verify_all(module: &Module, ctx: &Context) -> Result<()> {
    walk(module, &mut |node: &dyn Renderable| node.verify(ctx))
}

/// Hoist every import in `module`, deduplicated by symbol and source.
pub(crate) fn collect_imports(module: &Module) -> Result<ImportCollector> {
    let mut imports = ImportCollector::new();
    walk(module, &mut |node: &dyn Renderable| {
        for spec in node.imports() {
            imports.add(&spec)?;
        }
        Ok(())
    })?;
    Ok(imports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Bespoke, Block, Node, Raw, generation::ImportSpec};

    #[derive(Debug)]
    struct Uses {
        spec: ImportSpec,
    }

    impl Renderable for Uses {
        fn render(&self, _ctx: &Context, _builder: &mut crate::CodeBuilder) {}

        fn imports(&self) -> Vec<ImportSpec> {
            vec![self.spec.clone()]
        }
    }

    #[derive(Debug)]
    struct Refuses;

    impl Renderable for Refuses {
        fn render(&self, _ctx: &Context, _builder: &mut crate::CodeBuilder) {}

        fn verify(&self, _ctx: &Context) -> Result<()> {
            Err(Error::verification(self.describe(), "always fails"))
        }
    }

    fn module(content: Vec<Node>) -> Module {
        Module::new("a.out", content)
    }

    #[test]
    fn test_duplicate_bespoke_in_nested_blocks() {
        let m = module(vec![
            Bespoke::new("body").boxed(),
            Block::new("f {").child(Bespoke::new("body")).boxed(),
        ]);

        let err = check_bespokes(&m, &Markers::default()).unwrap_err();
        assert!(matches!(*err, Error::DuplicateBespokeName { ref name } if name == "body"));
    }

    #[test]
    fn test_invalid_bespoke_name() {
        let m = module(vec![Bespoke::new("two\nlines").boxed()]);

        let err = check_bespokes(&m, &Markers::default()).unwrap_err();
        assert!(matches!(*err, Error::InvalidBespokeName { ref name, .. } if name == "two\nlines"));
    }

    #[test]
    fn test_identifiers_from_composed_fragments_collide() {
        let m = module(vec![
            Block::new("function f() {").close("}").declares("f").boxed(),
            Block::new("outer {")
                .child(Block::new("function f() {").close("}").declares("f"))
                .boxed(),
        ]);

        let err = declare_identifiers(&m).unwrap_err();
        assert!(matches!(*err, Error::DuplicateIdentifier { ref name, .. } if name == "f"));
    }

    #[test]
    fn test_verify_reaches_nested_nodes() {
        let m = module(vec![Block::new("outer {").child(Refuses).boxed()]);

        let err = verify_all(&m, &Context::default()).unwrap_err();
        assert_eq!(err.to_string(), "Refuses: always fails");
    }

    #[test]
    fn test_imports_from_sub_trees_are_merged() {
        let useful = || Uses {
            spec: ImportSpec::named("react", "useState"),
        };
        let m = module(vec![
            Block::new("a {").child(useful()).boxed(),
            Block::new("b {").child(useful()).boxed(),
            Raw::new("c").boxed(),
        ]);

        let imports = collect_imports(&m).unwrap();
        assert_eq!(imports.len(), 1);
        assert!(imports.has_symbol("react", "useState"));
    }
}
