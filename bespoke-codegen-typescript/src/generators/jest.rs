use std::path::PathBuf;

use bespoke_codegen::{Bespoke, CodeBuilder, Context, Module, Node, Renderable};

use super::string_literal;

/// Jest lifecycle hooks, in the order they are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hook {
    BeforeAll,
    AfterAll,
    BeforeEach,
    AfterEach,
}

impl Hook {
    pub const ALL: [Hook; 4] = [
        Hook::BeforeAll,
        Hook::AfterAll,
        Hook::BeforeEach,
        Hook::AfterEach,
    ];

    pub fn function_name(self) -> &'static str {
        match self {
            Hook::BeforeAll => "beforeAll",
            Hook::AfterAll => "afterAll",
            Hook::BeforeEach => "beforeEach",
            Hook::AfterEach => "afterEach",
        }
    }
}

/// One call to a Jest global: a lifecycle hook or a `test` case.
///
/// The async callback body is a bespoke slot named after the hook or the test.
#[derive(Debug)]
pub struct JestCall {
    function: &'static str,
    test_name: Option<String>,
    content: Vec<Node>,
    sort_key: String,
}

impl JestCall {
    pub fn hook(hook: Hook) -> Self {
        let name = hook.function_name();
        Self {
            function: name,
            test_name: None,
            content: vec![Bespoke::new(name).boxed()],
            sort_key: format!("hooks/{}", hook as u8),
        }
    }

    pub fn test(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            function: "test",
            content: vec![Bespoke::new(name.as_str()).boxed()],
            sort_key: format!("tests/{}", name),
            test_name: Some(name),
        }
    }

    fn slot_name(&self) -> &str {
        self.test_name.as_deref().unwrap_or(self.function)
    }
}

impl Renderable for JestCall {
    fn render(&self, ctx: &Context, builder: &mut CodeBuilder) {
        builder.push_line(&format!("{}(", self.function));
        builder.indented(|b| {
            if let Some(name) = &self.test_name {
                b.push_line(&format!("{},", string_literal(name)));
            }
            b.block("async (): Promise<void> => {", "},", |b| {
                for node in &self.content {
                    b.emit(ctx, &**node);
                }
            });
        });
        builder.push_line(");");
    }

    fn children(&self) -> &[Node] {
        &self.content
    }

    fn sort_key(&self) -> &str {
        &self.sort_key
    }

    fn identifiers(&self) -> Vec<String> {
        vec![self.slot_name().to_string()]
    }

    fn describe(&self) -> String {
        match &self.test_name {
            Some(name) => format!("test '{}'", name),
            None => format!("hook '{}'", self.function),
        }
    }
}

/// Scaffold a Jest test file.
///
/// The file has a bespoke `imports` slot, the four lifecycle hooks and one
/// `test` case per name, each with a bespoke body named after it.
pub fn jest<I, S>(destination: impl Into<PathBuf>, tests: I) -> Module
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut content: Vec<Node> = vec![Bespoke::new("imports").boxed()];
    content.extend(Hook::ALL.into_iter().map(|hook| JestCall::hook(hook).boxed()));
    content.extend(tests.into_iter().map(|name| JestCall::test(name).boxed()));
    Module::new(destination, content)
}

#[cfg(test)]
mod tests {
    use bespoke_core::Indent;

    use super::*;

    #[test]
    fn test_bespokes() {
        let module = jest("math.test.ts", ["adds", "subtracts"]);
        assert_eq!(
            module.bespokes(),
            vec![
                "imports",
                "beforeAll",
                "afterAll",
                "beforeEach",
                "afterEach",
                "adds",
                "subtracts"
            ]
        );
    }

    #[test]
    fn test_case_render() {
        let text = JestCall::test("adds").to_text(&Context::default(), Indent::TWO_SPACES);
        assert_eq!(
            text,
            "\
test(
  \"adds\",
  async (): Promise<void> => {
    // ==BESPOKE==:adds:BEGIN
    // ==BESPOKE==:adds:END
  },
);
"
        );
    }

    #[test]
    fn test_hooks_sort_before_tests_in_declared_order() {
        let module = jest("a.test.ts", ["zeta", "alpha"]);
        let order: Vec<String> = module
            .sorted_content()
            .iter()
            .map(|node| node.describe())
            .collect();
        assert_eq!(
            order,
            vec![
                "bespoke 'imports'",
                "hook 'beforeAll'",
                "hook 'afterAll'",
                "hook 'beforeEach'",
                "hook 'afterEach'",
                "test 'alpha'",
                "test 'zeta'"
            ]
        );
    }
}
