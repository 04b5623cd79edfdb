use crate::{Id, Node};

pub fn attr<'a>(node: &'a Node, name: &str) -> Option<&'a str> {
    match node {
        Node::Element { attributes, .. } => attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .and_then(|(_, v)| v.as_deref()),
        _ => None,
    }
}

pub fn has_attr(node: &Node, name: &str) -> bool {
    match node {
        Node::Element { attributes, .. } => {
            attributes.iter().any(|(k, _)| k.eq_ignore_ascii_case(name))
        }
        _ => false,
    }
}

/// Attribute present with exactly this value. Attribute names are
/// ASCII-case-insensitive; values compare exactly.
pub fn attr_is(node: &Node, name: &str, value: &str) -> bool {
    attr(node, name) == Some(value)
}

pub fn set_attr(node: &mut Node, name: &str, value: Option<String>) {
    if let Node::Element { attributes, .. } = node {
        if let Some(slot) = attributes.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(name)) {
            slot.1 = value;
        } else {
            attributes.push((name.to_string(), value));
        }
    }
}

pub fn classes(node: &Node) -> impl Iterator<Item = &str> {
    attr(node, "class").unwrap_or("").split_ascii_whitespace()
}

pub fn has_class(node: &Node, class: &str) -> bool {
    classes(node).any(|c| c == class)
}

pub fn add_class(node: &mut Node, class: &str) {
    if has_class(node, class) {
        return;
    }
    let mut list: Vec<&str> = classes(node).collect();
    list.push(class);
    let joined = list.join(" ");
    set_attr(node, "class", Some(joined));
}

pub fn remove_class(node: &mut Node, class: &str) {
    if !has_class(node, class) {
        return;
    }
    let joined = classes(node).filter(|c| *c != class).collect::<Vec<_>>().join(" ");
    set_attr(node, "class", Some(joined));
}

/// classList.replace semantics: swaps `from` for `to` only when `from`
/// is present, preserving token position.
pub fn replace_class(node: &mut Node, from: &str, to: &str) -> bool {
    if !has_class(node, from) {
        return false;
    }
    let joined = classes(node)
        .map(|c| if c == from { to } else { c })
        .collect::<Vec<_>>()
        .join(" ");
    set_attr(node, "class", Some(joined));
    true
}

pub fn set_style(node: &mut Node, property: &str, value: String) {
    if let Node::Element { style, .. } = node {
        if let Some(slot) = style.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(property)) {
            slot.1 = value;
        } else {
            style.push((property.to_string(), value));
        }
    }
}

pub fn collect_text(node: &Node, out: &mut String) {
    match node {
        Node::Text { text, .. } => out.push_str(text),
        Node::Element { children, .. } | Node::Document { children, .. } => {
            for c in children {
                collect_text(c, out);
            }
        }
        Node::Comment { .. } => {}
    }
}

pub fn text_of(node: &Node) -> String {
    let mut out = String::new();
    collect_text(node, &mut out);
    out
}

pub fn is_heading(node: &Node) -> bool {
    matches!(node, Node::Element { name, .. }
        if matches!(name.as_str(), "h1" | "h2" | "h3" | "h4" | "h5"))
}

/// First descendant (pre-order, excluding `node` itself) matching the
/// predicate.
pub fn find_descendant<'a, F>(node: &'a Node, pred: F) -> Option<&'a Node>
where
    F: Fn(&Node) -> bool,
{
    fn walk<'a>(node: &'a Node, pred: &dyn Fn(&Node) -> bool) -> Option<&'a Node> {
        let children = node.children()?;
        for c in children {
            if pred(c) {
                return Some(c);
            }
            if let Some(found) = walk(c, pred) {
                return Some(found);
            }
        }
        None
    }
    walk(node, &pred)
}

pub fn find_descendant_mut<'a, F>(node: &'a mut Node, pred: F) -> Option<&'a mut Node>
where
    F: Fn(&Node) -> bool,
{
    fn walk<'a>(node: &'a mut Node, pred: &dyn Fn(&Node) -> bool) -> Option<&'a mut Node> {
        let children = node.children_mut()?;
        for c in children {
            if pred(c) {
                return Some(c);
            }
            if let Some(found) = walk(c, pred) {
                return Some(found);
            }
        }
        None
    }
    walk(node, &pred)
}

/// Ids of all descendants matching the predicate, in document order.
pub fn collect_ids<F>(node: &Node, pred: F, out: &mut Vec<Id>)
where
    F: Fn(&Node) -> bool,
{
    fn walk(node: &Node, pred: &dyn Fn(&Node) -> bool, out: &mut Vec<Id>) {
        let Some(children) = node.children() else {
            return;
        };
        for c in children {
            if pred(c) {
                out.push(c.id());
            }
            walk(c, pred, out);
        }
    }
    walk(node, &pred, out)
}
