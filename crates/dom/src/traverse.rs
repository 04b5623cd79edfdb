use crate::{Id, Node, NodeId};

/// Assign fresh ids to every node in the subtree, unconditionally.
/// Used when a template fragment is instantiated into a live document.
pub fn assign_fresh_ids(root: &mut Node, next: &mut NodeId) {
    root.set_id(Id(*next));
    *next = next.wrapping_add(1);

    if let Some(children) = root.children_mut() {
        for c in children {
            assign_fresh_ids(c, next);
        }
    }
}

/// Assign ids to nodes that do not have one yet (id == 0), leaving
/// already-identified nodes untouched.
pub fn assign_node_ids(root: &mut Node, next: &mut NodeId) {
    if root.id() == Id(0) {
        root.set_id(Id(*next));
        *next = next.wrapping_add(1);
    } else if root.id().0 >= *next {
        *next = root.id().0.wrapping_add(1);
    }

    if let Some(children) = root.children_mut() {
        for c in children {
            assign_node_ids(c, next);
        }
    }
}

pub fn find_node_by_id(node: &Node, id: Id) -> Option<&Node> {
    if node.id() == id {
        return Some(node);
    }
    if let Some(children) = node.children() {
        for c in children {
            if let Some(found) = find_node_by_id(c, id) {
                return Some(found);
            }
        }
    }
    None
}

pub fn find_node_by_id_mut(node: &mut Node, id: Id) -> Option<&mut Node> {
    if node.id() == id {
        return Some(node);
    }
    if let Some(children) = node.children_mut() {
        for c in children {
            if let Some(found) = find_node_by_id_mut(c, id) {
                return Some(found);
            }
        }
    }
    None
}

/// Id of the node whose child list directly contains `target`.
pub fn parent_of(node: &Node, target: Id) -> Option<Id> {
    let children = node.children()?;
    for c in children {
        if c.id() == target {
            return Some(node.id());
        }
        if let Some(found) = parent_of(c, target) {
            return Some(found);
        }
    }
    None
}

pub fn contains(node: &Node, id: Id) -> bool {
    find_node_by_id(node, id).is_some()
}

/// Ids of every node in the subtree, `root` included.
pub fn subtree_ids(root: &Node, out: &mut Vec<Id>) {
    out.push(root.id());
    if let Some(children) = root.children() {
        for c in children {
            subtree_ids(c, out);
        }
    }
}
