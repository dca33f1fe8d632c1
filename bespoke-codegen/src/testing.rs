//! Test utilities for code generators.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use bespoke_core::{CommentStyle, Indent};

use crate::{CodeBuilder, generation::ImportGroup, language::Language};

/// Minimal language with `//` comments and four-space indentation.
///
/// Imports print as `import <source> [default D] [as NS] [{ a, b }]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainLanguage;

impl Language for PlainLanguage {
    fn name(&self) -> &'static str {
        "plain"
    }

    fn indent(&self) -> Indent {
        Indent::FOUR_SPACES
    }

    fn comment(&self) -> CommentStyle {
        CommentStyle::double_slash()
    }

    fn render_imports(&self, source: &str, group: &ImportGroup, builder: &mut CodeBuilder) {
        let mut line = format!("import {}", source);
        if let Some(default) = &group.default {
            line.push_str(&format!(" default {}", default));
        }
        if let Some(namespace) = &group.namespace {
            line.push_str(&format!(" as {}", namespace));
        }
        if !group.named.is_empty() {
            let named: Vec<&str> = group.named.iter().map(String::as_str).collect();
            line.push_str(&format!(" {{ {} }}", named.join(", ")));
        }
        builder.push_line(&line);
    }
}
