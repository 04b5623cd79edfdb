use crate::traverse::assign_fresh_ids;
use crate::{Id, Node, NodeId};

/// Detach the node with this id from wherever it sits in the tree.
///
/// Removal is idempotent: removing a node that is no longer attached is a
/// no-op and returns `false`. Both the auto-dismiss timer and a manual
/// dismiss click target the same node; whichever fires second must land
/// here harmlessly.
pub fn remove_node(root: &mut Node, target: Id) -> bool {
    let Some(children) = root.children_mut() else {
        return false;
    };
    if let Some(pos) = children.iter().position(|c| c.id() == target) {
        children.remove(pos);
        return true;
    }
    for c in children {
        if remove_node(c, target) {
            return true;
        }
    }
    false
}

/// Insert `node` as the first child of `parent` (newest-on-top ordering).
/// Returns `false` when `parent` is absent or cannot hold children.
pub fn insert_first_child(root: &mut Node, parent: Id, node: Node) -> bool {
    let Some(target) = crate::traverse::find_node_by_id_mut(root, parent) else {
        return false;
    };
    let Some(children) = target.children_mut() else {
        return false;
    };
    children.insert(0, node);
    true
}

/// Deep-copy a subtree, giving every copied node a fresh id. This is the
/// cloneNode step of template instantiation.
pub fn clone_with_fresh_ids(node: &Node, next: &mut NodeId) -> Node {
    let mut copy = node.clone();
    assign_fresh_ids(&mut copy, next);
    copy
}

/// textContent assignment: replace the element's children with a single
/// text node. The new text node's id is unset (0).
pub fn set_text_content(node: &mut Node, text: &str) {
    if let Some(children) = node.children_mut() {
        children.clear();
        children.push(Node::Text { id: Id(0), text: text.to_string() });
    }
}
