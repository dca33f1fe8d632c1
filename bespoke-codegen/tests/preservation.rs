//! Integration tests for preservation of hand-authored regions across runs.

use bespoke_codegen::{
    Bespoke, Block, CodeBuilder, Context, Error, MarkerProblem, Module, Node, Pipeline, Raw,
    Renderable,
    generation::{ImportGroup, ImportSpec},
    language::Language,
};
use bespoke_core::{CommentStyle, Indent, WriteResult};
use tempfile::TempDir;

#[derive(Debug)]
struct Shell;

impl Language for Shell {
    fn name(&self) -> &'static str {
        "shell"
    }

    fn indent(&self) -> Indent {
        Indent::TWO_SPACES
    }

    fn comment(&self) -> CommentStyle {
        CommentStyle::hash()
    }

    fn render_imports(&self, source: &str, group: &ImportGroup, builder: &mut CodeBuilder) {
        if group.named.is_empty() {
            builder.push_line(&format!("source {}", source));
        }
        for symbol in &group.named {
            builder.push_line(&format!("source {} # {}", source, symbol));
        }
    }
}

#[derive(Debug)]
struct Sources(&'static str);

impl Renderable for Sources {
    fn render(&self, _ctx: &Context, _builder: &mut CodeBuilder) {}

    fn imports(&self) -> Vec<ImportSpec> {
        vec![ImportSpec::side_effect(self.0)]
    }
}

fn function(name: &str, body: Vec<Node>) -> Node {
    Block::new(format!("{}() {{", name))
        .close("}")
        .declares(name)
        .content(body)
        .boxed()
}

fn a_out(dir: &TempDir) -> Module {
    Module::new(
        dir.path().join("a.out"),
        vec![
            Bespoke::new("imports").boxed(),
            function("f", vec![Bespoke::new("body").boxed()]),
        ],
    )
}

#[test]
fn test_authored_text_survives_regeneration() {
    let temp = TempDir::new().unwrap();
    let pipeline = Pipeline::new(Shell);
    let path = temp.path().join("a.out");

    pipeline.run(&a_out(&temp)).unwrap();
    let first = std::fs::read_to_string(&path).unwrap();
    insta::assert_snapshot!(first, @r#"
# ==BESPOKE==:imports:BEGIN
# ==BESPOKE==:imports:END

f() {
  # ==BESPOKE==:body:BEGIN
  # ==BESPOKE==:body:END
}
"#);

    // A human fills in the body.
    let edited = first.replace(
        "  # ==BESPOKE==:body:BEGIN\n",
        "  # ==BESPOKE==:body:BEGIN\nX();\n",
    );
    std::fs::write(&path, &edited).unwrap();

    assert_eq!(pipeline.run(&a_out(&temp)).unwrap(), WriteResult::Unchanged);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), edited);
}

#[test]
fn test_generated_text_outside_regions_is_regenerated() {
    let temp = TempDir::new().unwrap();
    let pipeline = Pipeline::new(Shell);
    let path = temp.path().join("a.out");

    pipeline.run(&a_out(&temp)).unwrap();
    let first = std::fs::read_to_string(&path).unwrap();

    let tampered = first
        .replace("f() {", "f() { # hand edit outside a region")
        .replace(
            "  # ==BESPOKE==:body:BEGIN\n",
            "  # ==BESPOKE==:body:BEGIN\n    keep  me\n",
        );
    std::fs::write(&path, &tampered).unwrap();

    assert_eq!(pipeline.run(&a_out(&temp)).unwrap(), WriteResult::Written);
    let second = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        second,
        first.replace(
            "  # ==BESPOKE==:body:BEGIN\n",
            "  # ==BESPOKE==:body:BEGIN\n    keep  me\n",
        )
    );
}

#[test]
fn test_output_is_independent_of_attachment_order() {
    let forward = Module::new(
        "a.out",
        vec![
            function("a", vec![]),
            function("b", vec![]),
            Bespoke::new("top").boxed(),
        ],
    );
    let backward = Module::new(
        "a.out",
        vec![
            Bespoke::new("top").boxed(),
            function("b", vec![]),
            function("a", vec![]),
        ],
    );

    let pipeline = Pipeline::new(Shell);
    assert_eq!(
        pipeline.render(&forward, "").unwrap(),
        pipeline.render(&backward, "").unwrap()
    );
}

#[test]
fn test_duplicate_names_fail_before_touching_the_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("a.out");
    std::fs::write(&path, "precious\n").unwrap();

    let module = Module::new(
        &path,
        vec![
            Bespoke::new("x").boxed(),
            function("f", vec![Bespoke::new("x").boxed()]),
        ],
    );

    let err = Pipeline::new(Shell).run(&module).unwrap_err();
    assert!(matches!(*err, Error::DuplicateBespokeName { ref name } if name == "x"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "precious\n");
}

#[test]
fn test_malformed_markers_leave_the_file_untouched() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("a.out");
    let broken = "\
# ==BESPOKE==:imports:BEGIN
# ==BESPOKE==:imports:END

f() {
  # ==BESPOKE==:body:BEGIN
  authored
}
";
    std::fs::write(&path, broken).unwrap();

    let err = Pipeline::new(Shell).run(&a_out(&temp)).unwrap_err();
    match *err {
        Error::MalformedMarker {
            ref name,
            ref problem,
            ..
        } => {
            assert_eq!(name, "body");
            assert_eq!(*problem, MarkerProblem::Unclosed);
        }
        ref other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(std::fs::read_to_string(&path).unwrap(), broken);
}

#[test]
fn test_renamed_slot_starts_empty() {
    let previous = "\
# ==BESPOKE==:old:BEGIN
lost
# ==BESPOKE==:old:END
";
    let module = Module::new("a.out", vec![Bespoke::new("new").boxed()]);

    let text = Pipeline::new(Shell).render(&module, previous).unwrap();
    assert_eq!(text, "# ==BESPOKE==:new:BEGIN\n# ==BESPOKE==:new:END\n");
}

#[test]
fn test_imports_are_hoisted_and_deduplicated() {
    let module = Module::new(
        "a.out",
        vec![
            function("b", vec![Sources("./lib.sh").boxed(), Raw::new("b_impl").boxed()]),
            function("a", vec![Sources("./lib.sh").boxed()]),
            Sources("./env.sh").boxed(),
        ],
    );

    let text = Pipeline::new(Shell).render(&module, "").unwrap();
    insta::assert_snapshot!(text, @r#"
source ./env.sh
source ./lib.sh

a() {
}

b() {
  b_impl
}
"#);
}

#[test]
fn test_rendering_is_idempotent() {
    let pipeline = Pipeline::new(Shell);
    let module = Module::new(
        "a.out",
        vec![
            Bespoke::new("imports").boxed(),
            function(
                "f",
                vec![
                    Raw::new("local x").boxed(),
                    Block::new("if true; then")
                        .close("fi")
                        .child(Bespoke::new("branch"))
                        .boxed(),
                ],
            ),
        ],
    );

    let first = pipeline.render(&module, "").unwrap();
    let filled = first.replace(
        "    # ==BESPOKE==:branch:BEGIN\n",
        "    # ==BESPOKE==:branch:BEGIN\n\techo   \"tabs kept\"\n\n",
    );
    let second = pipeline.render(&module, &filled).unwrap();
    let third = pipeline.render(&module, &second).unwrap();

    assert_eq!(second, filled);
    assert_eq!(third, second);
}
