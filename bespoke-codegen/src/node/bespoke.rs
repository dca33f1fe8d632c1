use crate::{CodeBuilder, Context, Renderable};

/// A named slot whose body is written by a human and kept across regenerations.
///
/// On render the slot looks its name up in the context's preservation store.
/// A stored body is emitted byte for byte between the two marker lines; an
/// unknown name (first generation, or a renamed slot) yields an empty body the
/// author can fill in before the next run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bespoke {
    name: String,
}

impl Bespoke {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Renderable for Bespoke {
    fn render(&self, ctx: &Context, builder: &mut CodeBuilder) {
        let markers = ctx.markers();
        builder.push_line(&markers.begin(&self.name));
        if let Some(body) = ctx.store().get(&self.name) {
            builder.push_verbatim(body);
            if !body.is_empty() && !body.ends_with('\n') {
                builder.push_blank();
            }
        }
        builder.push_line(&markers.end(&self.name));
    }

    fn bespokes(&self) -> Vec<String> {
        vec![self.name.clone()]
    }

    fn describe(&self) -> String {
        format!("bespoke '{}'", self.name)
    }
}

#[cfg(test)]
mod tests {
    use bespoke_core::Indent;

    use super::*;
    use crate::preserve::{Markers, PreservationStore};

    #[test]
    fn test_first_generation_has_empty_body() {
        let ctx = Context::default();
        let text = Bespoke::new("body").to_text(&ctx, Indent::TWO_SPACES);
        assert_eq!(text, "// ==BESPOKE==:body:BEGIN\n// ==BESPOKE==:body:END\n");
    }

    #[test]
    fn test_preserved_body_is_emitted_verbatim() {
        let store: PreservationStore = [("body", "      X();\n")].into_iter().collect();
        let ctx = Context::new(store, Markers::default());

        let mut builder = CodeBuilder::new(Indent::TWO_SPACES);
        builder.indented(|b| {
            b.emit(&ctx, &Bespoke::new("body"));
        });

        assert_eq!(
            builder.build(),
            "  // ==BESPOKE==:body:BEGIN\n      X();\n  // ==BESPOKE==:body:END\n"
        );
    }

    #[test]
    fn test_body_without_final_newline_keeps_end_marker_on_own_line() {
        let store: PreservationStore = [("body", "X();")].into_iter().collect();
        let ctx = Context::new(store, Markers::default());

        let text = Bespoke::new("body").to_text(&ctx, Indent::TWO_SPACES);
        assert_eq!(text, "// ==BESPOKE==:body:BEGIN\nX();\n// ==BESPOKE==:body:END\n");
    }

    #[test]
    fn test_bespokes_is_own_name() {
        assert_eq!(Bespoke::new("render").bespokes(), vec!["render"]);
    }
}
