use bespoke_codegen::{CodeBuilder, generation::ImportGroup, language::Language};
use bespoke_core::{CommentStyle, Indent};

/// TypeScript: two-space indentation, `//` comments and ES module imports.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScript;

impl Language for TypeScript {
    fn name(&self) -> &'static str {
        "typescript"
    }

    fn indent(&self) -> Indent {
        Indent::TWO_SPACES
    }

    fn comment(&self) -> CommentStyle {
        CommentStyle::double_slash()
    }

    fn render_imports(&self, source: &str, group: &ImportGroup, builder: &mut CodeBuilder) {
        if group.is_side_effect_only() {
            builder.push_line(&format!("import \"{}\";", source));
            return;
        }

        let named = (!group.named.is_empty()).then(|| {
            let symbols: Vec<&str> = group.named.iter().map(String::as_str).collect();
            format!("{{ {} }}", symbols.join(", "))
        });

        match &group.namespace {
            // A namespace import cannot share a clause with named imports.
            Some(alias) => {
                let clause = match &group.default {
                    Some(default) => format!("{}, * as {}", default, alias),
                    None => format!("* as {}", alias),
                };
                builder.push_line(&format!("import {} from \"{}\";", clause, source));
                if let Some(named) = named {
                    builder.push_line(&format!("import {} from \"{}\";", named, source));
                }
            }
            None => {
                let clause: Vec<String> = group.default.iter().cloned().chain(named).collect();
                builder.push_line(&format!("import {} from \"{}\";", clause.join(", "), source));
            }
        }
    }
}
