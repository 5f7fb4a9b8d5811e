use std::collections::BTreeMap;

use crate::{
    config::model::RevealConfig,
    foundation::core::InstanceId,
    foundation::error::{RevealError, RevealResult},
    host::sim::SimWindow,
    reveal::wrapper::{Container, Phase, RevealWrapper},
    style::snapshot::StyleSnapshot,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
/// What caused a timeline entry.
pub enum Cause {
    Mount,
    Revisit,
    Scroll,
    Timer,
    Unmount,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// One observable change of an instance's phase or style.
pub struct TimelineEntry {
    pub at_ms: f64,
    pub instance: InstanceId,
    pub cause: Cause,
    pub phase: Phase,
    pub style: StyleSnapshot,
}

/// A page of reveal wrappers over a [`SimWindow`].
///
/// Routes timer and scroll callbacks to the owning instance and records every change in a
/// timeline. Each instance only ever sees its own handles.
pub struct Stage<E> {
    window: SimWindow,
    instances: BTreeMap<InstanceId, RevealWrapper<E>>,
    next_id: u64,
    timeline: Vec<TimelineEntry>,
}

impl<E> Stage<E> {
    pub fn new(inner_height: f64) -> Self {
        Self {
            window: SimWindow::new(inner_height),
            instances: BTreeMap::new(),
            next_id: 1,
            timeline: Vec::new(),
        }
    }

    pub fn window(&self) -> &SimWindow {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut SimWindow {
        &mut self.window
    }

    pub fn now_ms(&self) -> f64 {
        self.window.now_ms()
    }

    pub fn timeline(&self) -> &[TimelineEntry] {
        &self.timeline
    }

    pub fn get(&self, id: InstanceId) -> Option<&RevealWrapper<E>> {
        self.instances.get(&id)
    }

    pub fn render(&self, id: InstanceId) -> Option<Container<'_, E>> {
        self.instances.get(&id).map(RevealWrapper::render)
    }

    pub fn instance_ids(&self) -> impl Iterator<Item = InstanceId> + '_ {
        self.instances.keys().copied()
    }

    /// Lay out a new wrapper at `doc_top` and run its mount effects.
    pub fn mount(&mut self, element: E, config: RevealConfig, doc_top: f64) -> InstanceId {
        let id = InstanceId(self.next_id);
        self.next_id += 1;

        self.window.place(id, doc_top);
        let mut wrapper = RevealWrapper::new(id, element, config);
        wrapper.mount(&mut self.window);
        self.record(&wrapper, Cause::Mount);
        self.instances.insert(id, wrapper);
        id
    }

    pub fn revisit(&mut self, id: InstanceId) -> RevealResult<()> {
        let wrapper = self
            .instances
            .get_mut(&id)
            .ok_or_else(|| unknown_instance(id))?;
        wrapper.revisit(&mut self.window);
        let entry = entry(self.window.now_ms(), wrapper, Cause::Revisit);
        self.timeline.push(entry);
        Ok(())
    }

    pub fn set_config(&mut self, id: InstanceId, config: RevealConfig) -> RevealResult<()> {
        let wrapper = self
            .instances
            .get_mut(&id)
            .ok_or_else(|| unknown_instance(id))?;
        wrapper.set_config(config);
        Ok(())
    }

    /// Dispose of an instance and return its element.
    pub fn unmount(&mut self, id: InstanceId) -> RevealResult<E> {
        let wrapper = self
            .instances
            .remove(&id)
            .ok_or_else(|| unknown_instance(id))?;
        self.record(&wrapper, Cause::Unmount);
        let element = wrapper.unmount(&mut self.window);
        self.window.remove_element(id);
        Ok(element)
    }

    /// Scroll the window and notify every subscribed instance.
    #[tracing::instrument(skip(self))]
    pub fn scroll_to(&mut self, y: f64) {
        for owner in self.window.scroll_to(y) {
            let Some(wrapper) = self.instances.get_mut(&owner) else {
                tracing::warn!(instance = %owner, "listener without a mounted instance");
                continue;
            };
            let before = (wrapper.phase(), wrapper.style().clone());
            wrapper.on_scroll(&mut self.window);
            if before != (wrapper.phase(), wrapper.style().clone()) {
                let entry = entry(self.window.now_ms(), wrapper, Cause::Scroll);
                self.timeline.push(entry);
            }
        }
    }

    /// Advance the clock by `ms`, firing due timers in order.
    pub fn advance(&mut self, ms: f64) {
        let until = self.window.now_ms() + ms;
        self.advance_to(until);
    }

    /// Advance the clock to `until_ms`, firing due timers in order.
    pub fn advance_to(&mut self, until_ms: f64) {
        while let Some(fired) = self.window.pop_due(until_ms) {
            let Some(wrapper) = self.instances.get_mut(&fired.owner) else {
                tracing::warn!(instance = %fired.owner, "timer without a mounted instance");
                continue;
            };
            if wrapper.on_timer(fired.timer) {
                let entry = entry(fired.at_ms, wrapper, Cause::Timer);
                self.timeline.push(entry);
            }
        }
        self.window.set_now(until_ms);
    }

    fn record(&mut self, wrapper: &RevealWrapper<E>, cause: Cause) {
        self.timeline
            .push(entry(self.window.now_ms(), wrapper, cause));
    }
}

fn entry<E>(at_ms: f64, wrapper: &RevealWrapper<E>, cause: Cause) -> TimelineEntry {
    TimelineEntry {
        at_ms,
        instance: wrapper.id(),
        cause,
        phase: wrapper.phase(),
        style: wrapper.style().clone(),
    }
}

fn unknown_instance(id: InstanceId) -> RevealError {
    RevealError::host(format!("no mounted instance {id}"))
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/stage.rs"]
mod tests;
