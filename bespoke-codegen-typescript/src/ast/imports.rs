//! TypeScript import declarations.

use bespoke_codegen::{
    CodeBuilder, Context, Renderable, Result,
    generation::{ImportCollector, ImportSpec},
    language::Language,
};

use crate::TypeScript;

/// An import needed by the surrounding tree.
///
/// Imports render nothing where they are attached. The pipeline hoists every
/// import in a module to the top of the file, merged per source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    from: String,
    specs: Vec<ImportSpec>,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            specs: Vec::new(),
        }
    }

    /// Import the default export as `name`.
    pub fn default(mut self, name: impl Into<String>) -> Self {
        self.specs
            .push(ImportSpec::default_export(self.from.as_str(), name));
        self
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.specs.push(ImportSpec::named(self.from.as_str(), name));
        self
    }

    /// Import the whole module as `alias` (`* as alias`).
    pub fn all_as(mut self, alias: impl Into<String>) -> Self {
        self.specs.push(ImportSpec::namespace(self.from.as_str(), alias));
        self
    }

    /// Print this import on its own, as it would appear at the top of a file.
    pub fn build(&self) -> Result<String> {
        let mut imports = ImportCollector::new();
        for spec in self.imports() {
            imports.add(&spec)?;
        }
        let mut builder = CodeBuilder::new(TypeScript.indent());
        TypeScript.render_import_block(&imports, &mut builder);
        Ok(builder.build())
    }
}

impl Renderable for Import {
    fn render(&self, _ctx: &Context, _builder: &mut CodeBuilder) {}

    fn imports(&self) -> Vec<ImportSpec> {
        if self.specs.is_empty() {
            return vec![ImportSpec::side_effect(self.from.as_str())];
        }
        self.specs.clone()
    }

    fn describe(&self) -> String {
        format!("import from '{}'", self.from)
    }
}
