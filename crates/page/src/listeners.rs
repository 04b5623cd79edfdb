//! Bound-handler table keyed by (element, event name).
//!
//! The site's scripts used to fake idempotent rebinding by removing a
//! remembered handler reference before adding it again; here the table is
//! explicit. A key holds at most one binding per owning script, replaced
//! in place on rebind, so distinct scripts may share an (element, event)
//! pair without ever duplicating their own listener.

use crate::events::{EventName, Handler, ScriptId};
use dom::Id;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct ListenerTable {
    bound: HashMap<(Id, EventName), Vec<(ScriptId, Handler)>>,
}

impl ListenerTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, target: Id, event: EventName, owner: ScriptId, handler: Handler) {
        let slot = self.bound.entry((target, event)).or_default();
        if let Some(existing) = slot.iter_mut().find(|(o, _)| *o == owner) {
            existing.1 = handler;
        } else {
            slot.push((owner, handler));
        }
    }

    /// Handlers bound on this exact target, in binding order.
    pub fn handlers_for(&self, target: Id, event: EventName) -> &[(ScriptId, Handler)] {
        self.bound.get(&(target, event)).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn unbind(&mut self, target: Id, event: EventName, owner: ScriptId) -> bool {
        let Some(slot) = self.bound.get_mut(&(target, event)) else {
            return false;
        };
        let before = slot.len();
        slot.retain(|(o, _)| *o != owner);
        let removed = slot.len() != before;
        if slot.is_empty() {
            self.bound.remove(&(target, event));
        }
        removed
    }

    /// Drop every binding whose target is one of `targets`, across all
    /// events and owners. Called when a subtree leaves the document so
    /// the table never holds listeners on dead nodes.
    pub fn unbind_targets(&mut self, targets: &[Id]) {
        self.bound.retain(|(id, _), _| !targets.contains(id));
    }

    pub fn binding_count(&self) -> usize {
        self.bound.values().map(Vec::len).sum()
    }
}
