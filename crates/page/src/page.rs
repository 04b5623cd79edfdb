use crate::clipboard::{ClipboardSink, MemoryClipboard};
use crate::geom::{GeometryMap, Viewport};
use crate::listeners::ListenerTable;
use crate::timers::{Scheduler, TimerAction};
use dom::traverse::{assign_node_ids, find_node_by_id, find_node_by_id_mut, subtree_ids};
use dom::{Id, Node, NodeId, mutate};

/// One loaded page: the document tree plus every runtime the scripts
/// share. Everything here is mutated from a single event-handling context;
/// there is no other thread.
pub struct Page {
    pub dom: Node,
    next_node_id: NodeId,
    pub listeners: ListenerTable,
    pub scheduler: Scheduler,
    now_ms: u64,
    pub geometry: GeometryMap,
    pub viewport: Viewport,
    /// Page URL, used to build heading anchor links.
    pub location: String,
    pub clipboard: Box<dyn ClipboardSink>,
}

impl Page {
    pub fn new(mut dom: Node) -> Self {
        let mut next = 1;
        assign_node_ids(&mut dom, &mut next);
        Self {
            dom,
            next_node_id: next,
            listeners: ListenerTable::new(),
            scheduler: Scheduler::new(),
            now_ms: 0,
            geometry: GeometryMap::new(),
            viewport: Viewport::default(),
            location: String::new(),
            clipboard: Box::new(MemoryClipboard::new()),
        }
    }

    pub fn with_location(dom: Node, location: impl Into<String>) -> Self {
        let mut page = Self::new(dom);
        page.location = location.into();
        page
    }

    pub fn root_id(&self) -> Id {
        self.dom.id()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Deep-copy a template fragment into this document's id space.
    pub fn instantiate(&mut self, template: &Node) -> Node {
        mutate::clone_with_fresh_ids(template, &mut self.next_node_id)
    }

    pub fn insert_first_child(&mut self, parent: Id, node: Node) -> bool {
        mutate::insert_first_child(&mut self.dom, parent, node)
    }

    /// Idempotent removal; the no-op branch is the timer losing the race
    /// against a manual dismiss (or vice versa). Bindings on the removed
    /// subtree are released with it.
    pub fn remove(&mut self, target: Id) -> bool {
        let mut leaving = Vec::new();
        if let Some(node) = find_node_by_id(&self.dom, target) {
            subtree_ids(node, &mut leaving);
        }
        let removed = mutate::remove_node(&mut self.dom, target);
        if removed {
            self.listeners.unbind_targets(&leaving);
        } else {
            log::debug!("remove of detached node {target:?} ignored");
        }
        removed
    }

    pub fn schedule_in(&mut self, delay_ms: u64, action: TimerAction) {
        self.scheduler.schedule(self.now_ms + delay_ms, action);
    }

    /// Move the clock forward and run every timer that came due, in
    /// deadline order. Returns the actions that ran.
    pub fn advance(&mut self, delta_ms: u64) -> Vec<TimerAction> {
        self.now_ms += delta_ms;
        let due = self.scheduler.take_due(self.now_ms);
        for action in &due {
            self.apply_timer(action);
        }
        due
    }

    fn apply_timer(&mut self, action: &TimerAction) {
        match action {
            TimerAction::RemoveNode(id) => {
                self.remove(*id);
            }
            TimerAction::RestoreText { node, text } => {
                if let Some(target) = find_node_by_id_mut(&mut self.dom, *node) {
                    mutate::set_text_content(target, text);
                }
            }
        }
    }
}
