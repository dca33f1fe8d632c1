//! Ready-made module scaffolds.
//!
//! - [`jest`] - a Jest test file with lifecycle hooks and one case per test
//! - [`react`] - a React component, functional or class based

mod jest;
mod react;

pub use jest::{Hook, JestCall, jest};
pub use react::react;

/// Quote `text` as a TypeScript string literal.
pub(crate) fn string_literal(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for c in text.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\t' => quoted.push_str("\\t"),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
