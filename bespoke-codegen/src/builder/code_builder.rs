//! Indentation-aware text sink used by every render pass.

use std::ops::{Deref, DerefMut};

use bespoke_core::Indent;

use crate::{Context, Renderable};

/// Mutable text buffer that indents every line it starts.
///
/// A builder is owned by exactly one render pass of one top-level
/// declaration. Indentation is scoped: [`CodeBuilder::indent`] returns a guard
/// that dedents when dropped, and [`CodeBuilder::indented`] /
/// [`CodeBuilder::block`] dedent when their closure returns.
///
/// # Example
///
/// ```
/// use bespoke_codegen::builder::CodeBuilder;
/// use bespoke_core::Indent;
///
/// let mut builder = CodeBuilder::new(Indent::TWO_SPACES);
/// builder.block("function main() {", "}", |b| {
///     b.push_line("run();");
/// });
///
/// assert_eq!(builder.build(), "function main() {\n  run();\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
    at_line_start: bool,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
            at_line_start: true,
        }
    }

    /// Append text. Every non-empty line it starts is indented.
    pub fn push(&mut self, text: &str) -> &mut Self {
        for (i, segment) in text.split('\n').enumerate() {
            if i > 0 {
                self.newline();
            }
            if segment.is_empty() {
                continue;
            }
            if self.at_line_start {
                self.indent.write_to(&mut self.buffer, self.indent_level);
                self.at_line_start = false;
            }
            self.buffer.push_str(segment);
        }
        self
    }

    /// Append text followed by a line break.
    pub fn push_line(&mut self, text: &str) -> &mut Self {
        self.push(text);
        self.newline();
        self
    }

    /// Add a blank line (no indentation).
    pub fn push_blank(&mut self) -> &mut Self {
        self.newline();
        self
    }

    /// Append text exactly as given, without indenting anything.
    ///
    /// Used for preserved bespoke bodies, which carry their own indentation.
    pub fn push_verbatim(&mut self, text: &str) -> &mut Self {
        if !text.is_empty() {
            self.buffer.push_str(text);
            self.at_line_start = text.ends_with('\n');
        }
        self
    }

    /// Increase indentation level.
    ///
    /// Prefer [`CodeBuilder::indent`] or [`CodeBuilder::indented`], which
    /// cannot be left unbalanced.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        debug_assert!(self.indent_level > 0, "dedent without matching indent");
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Enter an indented scope that ends when the guard is dropped.
    pub fn indent(&mut self) -> IndentGuard<'_> {
        self.push_indent();
        IndentGuard { builder: self }
    }

    /// Run `f` one indent level deeper.
    pub fn indented<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        let depth = self.indent_level;
        self.push_indent();
        f(self);
        self.push_dedent();
        debug_assert_eq!(self.indent_level, depth, "unbalanced indentation in scope");
        self
    }

    /// Add a header line, an indented body and a closing line.
    pub fn block<F>(&mut self, header: &str, close: &str, f: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.push_line(header);
        self.indented(f);
        self.push_line(close)
    }

    /// Render a node into this builder.
    pub fn emit(&mut self, ctx: &Context, node: &dyn Renderable) -> &mut Self {
        node.render(ctx, self);
        self
    }

    /// Render nodes one after another with a blank line between them.
    ///
    /// Nodes that produce no text get no separator.
    pub fn emit_separated<'a, 'n: 'a>(
        &mut self,
        ctx: &Context,
        nodes: impl IntoIterator<Item = &'a (dyn Renderable + 'n)>,
    ) -> &mut Self {
        let mut first = true;
        for node in nodes {
            let mark = (self.buffer.len(), self.at_line_start);
            if !first {
                self.push_blank();
            }
            let start = self.buffer.len();
            node.render(ctx, self);
            if self.buffer.len() == start {
                self.buffer.truncate(mark.0);
                self.at_line_start = mark.1;
            } else {
                first = false;
            }
        }
        self
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// The indentation unit this builder writes.
    pub fn indent_unit(&self) -> Indent {
        self.indent
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        debug_assert_eq!(self.indent_level, 0, "unbalanced indentation at end of render");
        self.buffer
    }

    fn newline(&mut self) {
        self.buffer.push('\n');
        self.at_line_start = true;
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::new(Indent::default())
    }
}

/// Scoped indentation; dedents its builder when dropped.
#[derive(Debug)]
pub struct IndentGuard<'a> {
    builder: &'a mut CodeBuilder,
}

impl Deref for IndentGuard<'_> {
    type Target = CodeBuilder;

    fn deref(&self) -> &CodeBuilder {
        self.builder
    }
}

impl DerefMut for IndentGuard<'_> {
    fn deref_mut(&mut self) -> &mut CodeBuilder {
        self.builder
    }
}

impl Drop for IndentGuard<'_> {
    fn drop(&mut self) {
        self.builder.push_dedent();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let mut builder = CodeBuilder::default();
        builder.push_line("let x = 1;");
        assert_eq!(builder.build(), "let x = 1;\n");
    }

    #[test]
    fn test_indentation() {
        let mut builder = CodeBuilder::new(Indent::TWO_SPACES);
        builder
            .push_line("function foo() {")
            .push_indent()
            .push_line("return 1;")
            .push_dedent()
            .push_line("}");
        assert_eq!(builder.build(), "function foo() {\n  return 1;\n}\n");
    }

    #[test]
    fn test_indent_guard_dedents_on_drop() {
        let mut builder = CodeBuilder::new(Indent::TWO_SPACES);
        builder.push_line("a {");
        {
            let mut inner = builder.indent();
            inner.push_line("b;");
            assert_eq!(inner.current_indent(), 1);
        }
        builder.push_line("}");
        assert_eq!(builder.current_indent(), 0);
        assert_eq!(builder.build(), "a {\n  b;\n}\n");
    }

    #[test]
    fn test_nested_blocks() {
        let mut builder = CodeBuilder::new(Indent::FOUR_SPACES);
        builder.block("impl Foo {", "}", |b| {
            b.block("fn bar(&self) {", "}", |b| {
                b.push_line("todo!()");
            });
        });
        assert_eq!(
            builder.build(),
            "impl Foo {\n    fn bar(&self) {\n        todo!()\n    }\n}\n"
        );
    }

    #[test]
    fn test_push_indents_every_line() {
        let mut builder = CodeBuilder::new(Indent::TWO_SPACES);
        builder.indented(|b| {
            b.push_line("first\nsecond\n\nthird");
        });
        assert_eq!(builder.build(), "  first\n  second\n\n  third\n");
    }

    #[test]
    fn test_push_continues_current_line() {
        let mut builder = CodeBuilder::new(Indent::TWO_SPACES);
        builder.indented(|b| {
            b.push("export ").push("function f() {}").push_line("");
        });
        assert_eq!(builder.build(), "  export function f() {}\n");
    }

    #[test]
    fn test_push_verbatim_keeps_text_untouched() {
        let mut builder = CodeBuilder::new(Indent::TWO_SPACES);
        builder.indented(|b| {
            b.push_line("// begin");
            b.push_verbatim("X();\n      deeply();\n");
            b.push_line("// end");
        });
        assert_eq!(
            builder.build(),
            "  // begin\nX();\n      deeply();\n  // end\n"
        );
    }

    #[test]
    fn test_blank_line_has_no_indent() {
        let mut builder = CodeBuilder::new(Indent::TAB);
        builder.indented(|b| {
            b.push_line("a").push_blank().push_line("b");
        });
        assert_eq!(builder.build(), "\ta\n\n\tb\n");
    }

    #[test]
    fn test_emit_separated_skips_silent_nodes() {
        use crate::{Node, Raw};

        let nodes: Vec<Node> = vec![
            Raw::new("a();").boxed(),
            Raw::new("").boxed(),
            Raw::new("b();").boxed(),
        ];
        let mut builder = CodeBuilder::new(Indent::TWO_SPACES);
        builder.indented(|b| {
            b.emit_separated(&Context::default(), nodes.iter().map(|n| &**n));
        });
        assert_eq!(builder.build(), "  a();\n\n  b();\n");
    }

    #[test]
    #[should_panic(expected = "dedent without matching indent")]
    #[cfg(debug_assertions)]
    fn test_unbalanced_dedent_panics_in_debug() {
        let mut builder = CodeBuilder::default();
        builder.push_dedent();
    }

    #[test]
    #[should_panic(expected = "unbalanced indentation at end of render")]
    #[cfg(debug_assertions)]
    fn test_unclosed_indent_panics_in_debug() {
        let mut builder = CodeBuilder::default();
        builder.push_indent();
        let _ = builder.build();
    }
}
