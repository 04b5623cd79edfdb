//! Terse node constructors for hosts and tests. Ids start at 0 (unset)
//! and are expected to be assigned by `traverse::assign_node_ids` once the
//! tree is complete.

use crate::{Id, Node};

pub fn doc(children: Vec<Node>) -> Node {
    Node::Document { id: Id(0), children }
}

pub fn elem(name: &str, attributes: &[(&str, Option<&str>)], children: Vec<Node>) -> Node {
    Node::Element {
        id: Id(0),
        name: name.to_string(),
        attributes: attributes
            .iter()
            .map(|(k, v)| (k.to_string(), v.map(str::to_string)))
            .collect(),
        style: Vec::new(),
        children,
    }
}

pub fn text(text: &str) -> Node {
    Node::Text { id: Id(0), text: text.to_string() }
}
