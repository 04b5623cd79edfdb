//! Deferred work over a virtual millisecond clock. There is no timer
//! cancellation: an armed auto-dismiss always fires, and fires harmlessly
//! when manual dismissal got there first, because node removal is
//! idempotent.

use dom::Id;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TimerAction {
    RemoveNode(Id),
    RestoreText { node: Id, text: String },
}

#[derive(Debug)]
struct Timer {
    deadline_ms: u64,
    seq: u64,
    action: TimerAction,
}

impl PartialEq for Timer {
    fn eq(&self, other: &Self) -> bool {
        self.deadline_ms == other.deadline_ms && self.seq == other.seq
    }
}

impl Eq for Timer {}

impl PartialOrd for Timer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Timer {
    fn cmp(&self, other: &Self) -> Ordering {
        // Deadline first, arming order breaks ties.
        (self.deadline_ms, self.seq).cmp(&(other.deadline_ms, other.seq))
    }
}

#[derive(Debug, Default)]
pub struct Scheduler {
    queue: BinaryHeap<Reverse<Timer>>,
    next_seq: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, deadline_ms: u64, action: TimerAction) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Reverse(Timer { deadline_ms, seq, action }));
    }

    /// Pop every timer with deadline <= now, in (deadline, arming) order.
    pub fn take_due(&mut self, now_ms: u64) -> Vec<TimerAction> {
        let mut due = Vec::new();
        while let Some(Reverse(timer)) = self.queue.peek() {
            if timer.deadline_ms > now_ms {
                break;
            }
            let Some(Reverse(timer)) = self.queue.pop() else {
                break;
            };
            due.push(timer.action);
        }
        due
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.queue.peek().map(|Reverse(t)| t.deadline_ms)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
