use std::path::PathBuf;

use bespoke_codegen::{Bespoke, Block, Module, Node, Raw, Renderable};

use crate::ast::{Class, Function, Import, Interface, Method, Param, Property};

const ELEMENT: &str = "JSX.Element";

/// Scaffold a React component.
///
/// Without props the component is a function whose body is the bespoke
/// `render` slot. With props it is a class extending `React.Component`, with
/// exported `I<Name>Props` (and `I<Name>State` when `state` is given)
/// interfaces, a `render` method and a bespoke `implementation` slot. Given
/// state, a constructor initialises `this.state` from a bespoke `state` slot.
///
/// Every variant imports React and has a bespoke `imports` slot.
pub fn react(
    destination: impl Into<PathBuf>,
    name: &str,
    props: Option<Vec<Property>>,
    state: Option<Vec<Property>>,
) -> Module {
    let mut content: Vec<Node> = vec![
        Import::new("react").all_as("React").boxed(),
        Bespoke::new("imports").boxed(),
    ];

    let Some(props) = props else {
        content.push(
            Function::new(name)
                .returns(ELEMENT)
                .child(Bespoke::new("render"))
                .boxed(),
        );
        return Module::new(destination, content);
    };

    let props_name = format!("I{}Props", name);
    content.push(Interface::new(props_name.as_str()).properties(props).boxed());

    let mut class = Class::new(name).uses(props_name.as_str());
    let base = match state {
        Some(state) => {
            let state_name = format!("I{}State", name);
            content.push(Interface::new(state_name.as_str()).properties(state).boxed());
            class = class.uses(state_name.as_str()).child(
                Method::constructor()
                    .param(Param::new("props", props_name.as_str()))
                    .child(Raw::new("super(props);"))
                    .child(
                        Block::new("this.state = {")
                            .close("};")
                            .child(Bespoke::new("state")),
                    ),
            );
            format!("React.Component<{}, {}>", props_name, state_name)
        }
        None => format!("React.Component<{}>", props_name),
    };

    content.push(
        class
            .extends(base)
            .child(
                Method::new("render")
                    .returns(ELEMENT)
                    .child(Bespoke::new("render")),
            )
            .child(Bespoke::new("implementation"))
            .boxed(),
    );
    Module::new(destination, content)
}
