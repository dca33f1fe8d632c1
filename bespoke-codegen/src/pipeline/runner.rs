//! Pipeline orchestrator.

use std::path::Path;

use bespoke_core::{Config, File, FileRules, Indent, WriteResult, read_existing};
use tracing::{debug, info};

use super::phases;
use crate::{
    CodeBuilder, Context, Error, Module, Result, language::Language,
    preserve::{Markers, extract},
};

/// Renders modules for one target language and writes them in place.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new(TypeScript).with_config(Config::load(path)?);
///
/// let text = pipeline.preview(&module)?;
/// pipeline.run(&module)?;
/// ```
#[derive(Debug)]
pub struct Pipeline {
    language: Box<dyn Language>,
    config: Config,
}

impl Pipeline {
    /// Create a pipeline using the language's defaults.
    pub fn new(language: impl Language + 'static) -> Self {
        Self {
            language: Box::new(language),
            config: Config::default(),
        }
    }

    /// Override the defaults with a configuration.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn language(&self) -> &dyn Language {
        self.language.as_ref()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Effective indent unit.
    pub fn indent(&self) -> Indent {
        self.config.indent_or(self.language.indent())
    }

    /// Effective marker format.
    pub fn markers(&self) -> Markers {
        Markers::new(self.config.comment_or(self.language.comment()))
    }

    /// Check bespoke names and their uniqueness without touching the disk.
    pub fn validate(&self, module: &Module) -> Result<()> {
        phases::check_bespokes(module, &self.markers())
    }

    /// Render `module` as it would be written over a file holding `previous`.
    ///
    /// Pure: the same module and previous text always give the same output.
    pub fn render(&self, module: &Module, previous: &str) -> Result<String> {
        self.validate(module)?;
        self.render_validated(module, previous)
    }

    /// Render `module` against the current content of its destination.
    pub fn preview(&self, module: &Module) -> Result<String> {
        self.validate(module)?;
        let previous = self.read(module.destination())?;
        self.render_validated(module, previous.as_deref().unwrap_or_default())
    }

    /// Render `module` and replace its destination.
    ///
    /// The destination is only written once everything else has succeeded,
    /// and it is replaced atomically.
    pub fn run(&self, module: &Module) -> Result<WriteResult> {
        let path = module.destination();
        self.validate(module)?;

        let previous = self.read(path)?;
        let content = self.render_validated(module, previous.as_deref().unwrap_or_default())?;

        let result = File::new(path, content)
            .with_rules(self.rules())
            .write(previous.as_deref())
            .map_err(|e| Error::io(path, e))?;

        info!(path = %path.display(), ?result, "generated");
        Ok(result)
    }

    fn rules(&self) -> FileRules {
        FileRules {
            create_parent_dirs: self.config.create_parent_dirs,
            skip_unchanged: self.config.skip_unchanged,
        }
    }

    fn read(&self, path: &Path) -> Result<Option<String>> {
        read_existing(path).map_err(|e| Error::io(path, e))
    }

    fn render_validated(&self, module: &Module, previous: &str) -> Result<String> {
        let filename = module.destination().display().to_string();
        let markers = self.markers();
        let indent = self.indent();

        let store = extract(previous, &filename, &markers)?;
        let identifiers = phases::declare_identifiers(module)?;
        let ctx = Context::new(store, markers).with_identifiers(identifiers);
        phases::verify_all(module, &ctx)?;

        let imports = phases::collect_imports(module)?;
        let parts = module.render_parts(&ctx, indent);
        debug!(
            path = %filename,
            preserved = ctx.store().len(),
            imports = imports.len(),
            declarations = parts.len(),
            "rendered module"
        );

        let mut sections = Vec::with_capacity(parts.len() + 2);
        let header = self
            .config
            .header
            .as_deref()
            .filter(|header| !header.trim().is_empty());
        if let Some(header) = header {
            let comment = ctx.markers().comment();
            let mut builder = CodeBuilder::new(indent);
            for line in header.lines() {
                builder.push_line(&comment.wrap(line));
            }
            sections.push(builder.build());
        }
        if !imports.is_empty() {
            let mut builder = CodeBuilder::new(indent);
            self.language.render_import_block(&imports, &mut builder);
            sections.push(builder.build());
        }
        sections.extend(parts);

        Ok(sections.join("\n"))
    }
}
