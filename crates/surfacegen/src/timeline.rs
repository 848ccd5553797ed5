use std::collections::VecDeque;

/// Fire-once queue of cues keyed by absolute time in milliseconds.
///
/// Cues due at the same instant come out in the order they were scheduled.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline<E> {
    pending: VecDeque<(u64, E)>,
}

impl<E> Default for Timeline<E> {
    fn default() -> Self {
        Self {
            pending: VecDeque::new(),
        }
    }
}

impl<E> Timeline<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, at_ms: u64, cue: E) {
        let slot = self.pending.partition_point(|(at, _)| *at <= at_ms);
        self.pending.insert(slot, (at_ms, cue));
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn next_due(&self) -> Option<u64> {
        self.pending.front().map(|(at, _)| *at)
    }

    /// Remove and return every cue due at or before `now_ms`
    pub fn drain_due(&mut self, now_ms: u64) -> Vec<E> {
        let mut due = Vec::new();
        while self.next_due().is_some_and(|at| at <= now_ms) {
            if let Some((_, cue)) = self.pending.pop_front() {
                due.push(cue);
            }
        }
        due
    }
}
