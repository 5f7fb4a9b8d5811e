use std::collections::BTreeMap;

use crate::{
    foundation::core::{InstanceId, ListenerId, TimerId},
    host::window::{ScrollSource, TimerQueue, Viewport},
};

#[derive(Clone, Copy, Debug, PartialEq)]
struct PendingTimer {
    owner: InstanceId,
    due_ms: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// A timer that came due during [`SimWindow::pop_due`].
pub struct FiredTimer {
    pub timer: TimerId,
    pub owner: InstanceId,
    pub at_ms: f64,
}

/// Deterministic in-memory window: virtual clock, scroll position and document layout.
///
/// Element tops are derived from a per-instance document offset minus the scroll position,
/// the way a bounding rect moves when the page scrolls.
#[derive(Clone, Debug)]
pub struct SimWindow {
    now_ms: f64,
    scroll_y: f64,
    inner_height: f64,
    layout: BTreeMap<InstanceId, f64>,
    timers: BTreeMap<TimerId, PendingTimer>,
    listeners: BTreeMap<ListenerId, InstanceId>,
    next_timer: u64,
    next_listener: u64,
}

impl SimWindow {
    pub fn new(inner_height: f64) -> Self {
        Self {
            now_ms: 0.0,
            scroll_y: 0.0,
            inner_height,
            layout: BTreeMap::new(),
            timers: BTreeMap::new(),
            listeners: BTreeMap::new(),
            next_timer: 1,
            next_listener: 1,
        }
    }

    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn set_inner_height(&mut self, inner_height: f64) {
        self.inner_height = inner_height;
    }

    /// Place `owner`'s container at `doc_top` pixels from the top of the document.
    pub fn place(&mut self, owner: InstanceId, doc_top: f64) {
        self.layout.insert(owner, doc_top);
    }

    pub fn remove_element(&mut self, owner: InstanceId) {
        self.layout.remove(&owner);
    }

    /// Move the scroll position and return the owners of every attached listener.
    pub fn scroll_to(&mut self, y: f64) -> Vec<InstanceId> {
        self.scroll_y = y;
        self.listeners.values().copied().collect()
    }

    /// Remove and return the earliest timer due at or before `until_ms`, moving the clock to it.
    ///
    /// Ties fire in scheduling order.
    pub fn pop_due(&mut self, until_ms: f64) -> Option<FiredTimer> {
        let (timer, pending) = self
            .timers
            .iter()
            .filter(|(_, p)| p.due_ms <= until_ms)
            .min_by(|(a_id, a), (b_id, b)| a.due_ms.total_cmp(&b.due_ms).then(a_id.cmp(b_id)))
            .map(|(id, p)| (*id, *p))?;
        self.timers.remove(&timer);
        self.now_ms = self.now_ms.max(pending.due_ms);
        Some(FiredTimer {
            timer,
            owner: pending.owner,
            at_ms: self.now_ms,
        })
    }

    /// Move the clock forward without firing anything.
    pub fn set_now(&mut self, now_ms: f64) {
        self.now_ms = self.now_ms.max(now_ms);
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Pending timers owned by `owner`.
    pub fn pending_timers_for(&self, owner: InstanceId) -> usize {
        self.timers.values().filter(|p| p.owner == owner).count()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn has_listener(&self, owner: InstanceId) -> bool {
        self.listeners.values().any(|o| *o == owner)
    }
}

impl Viewport for SimWindow {
    fn element_top(&self, owner: InstanceId) -> Option<f64> {
        self.layout.get(&owner).map(|doc_top| doc_top - self.scroll_y)
    }

    fn inner_height(&self) -> f64 {
        self.inner_height
    }
}

impl TimerQueue for SimWindow {
    fn set_timeout(&mut self, owner: InstanceId, delay_ms: f64) -> TimerId {
        let timer = TimerId(self.next_timer);
        self.next_timer += 1;
        // Negative and NaN delays fire on the next turn, like a browser timer.
        let due_ms = self.now_ms + delay_ms.max(0.0);
        self.timers.insert(timer, PendingTimer { owner, due_ms });
        timer
    }

    fn clear_timeout(&mut self, timer: TimerId) {
        self.timers.remove(&timer);
    }
}

impl ScrollSource for SimWindow {
    fn add_scroll_listener(&mut self, owner: InstanceId) -> ListenerId {
        let listener = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.insert(listener, owner);
        listener
    }

    fn remove_scroll_listener(&mut self, listener: ListenerId) {
        self.listeners.remove(&listener);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/sim.rs"]
mod tests;
