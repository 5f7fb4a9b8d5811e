use crate::{
    config::model::RevealConfig,
    foundation::core::{InstanceId, ListenerId, TimerId},
    host::window::{RevealHost, within_threshold},
    style::snapshot::StyleSnapshot,
};

/// Fixed width constraint of the container so it hugs its child.
pub const CONTAINER_MAX_WIDTH: &str = "max-content";

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
/// Where a wrapper is in its reveal.
pub enum Phase {
    /// Constructed, pre-mount style computed, not laid out yet.
    Initial,
    /// Rendered with the initial style; in scroll mode waiting for viewport entry.
    MountedWaiting,
    /// Target style will be applied when `timer` fires.
    TransitionScheduled { timer: TimerId },
    /// Target style applied.
    Settled,
}

impl Phase {
    pub fn name(self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::MountedWaiting => "mounted_waiting",
            Self::TransitionScheduled { .. } => "transition_scheduled",
            Self::Settled => "settled",
        }
    }

    pub fn pending_timer(self) -> Option<TimerId> {
        match self {
            Self::TransitionScheduled { timer } => Some(timer),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Lifecycle {
    phase: Phase,
    first_render: bool,
    scheduled_before: bool,
    in_view: bool,
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self {
            phase: Phase::Initial,
            first_render: true,
            scheduled_before: false,
            in_view: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// Inline style of the container: current snapshot plus the fixed transition properties.
pub struct InlineStyle {
    #[serde(flatten)]
    pub snapshot: StyleSnapshot,
    pub transition: String,
    pub max_width: &'static str,
}

impl InlineStyle {
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        let mut out = self.snapshot.declarations();
        out.push(("transition", self.transition.clone()));
        out.push(("max-width", self.max_width.to_string()));
        out
    }

    /// `style` attribute text, e.g. `opacity: 0; transition: ...; max-width: max-content`.
    pub fn css(&self) -> String {
        self.declarations()
            .into_iter()
            .map(|(k, v)| format!("{k}: {v}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Render output: the child, unmodified, inside a styled container.
#[derive(Debug)]
pub struct Container<'a, E> {
    pub child: &'a E,
    pub style: InlineStyle,
}

/// Reveal transition bound to one element's lifecycle.
///
/// The host drives it: [`mount`](Self::mount) once after first paint, then
/// [`on_timer`](Self::on_timer) / [`on_scroll`](Self::on_scroll) for callbacks it scheduled,
/// [`render`](Self::render) whenever it paints, and [`unmount`](Self::unmount) on disposal.
/// Unmounting consumes the wrapper, so nothing can reach it afterwards.
///
/// Effects keep the config captured at mount; [`set_config`](Self::set_config) only changes what
/// [`render`](Self::render) emits.
#[derive(Debug)]
pub struct RevealWrapper<E> {
    id: InstanceId,
    element: E,
    mounted: RevealConfig,
    current: RevealConfig,
    style: StyleSnapshot,
    lifecycle: Lifecycle,
    listener: Option<ListenerId>,
}

impl<E> RevealWrapper<E> {
    pub fn new(id: InstanceId, element: E, config: RevealConfig) -> Self {
        Self {
            id,
            element,
            style: config.pre_mount_style(),
            mounted: config.clone(),
            current: config,
            lifecycle: Lifecycle::default(),
            listener: None,
        }
    }

    pub fn id(&self) -> InstanceId {
        self.id
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    pub fn phase(&self) -> Phase {
        self.lifecycle.phase
    }

    pub fn style(&self) -> &StyleSnapshot {
        &self.style
    }

    /// Config of the latest render pass.
    pub fn config(&self) -> &RevealConfig {
        &self.current
    }

    /// Viewport membership as of the last scroll evaluation.
    pub fn is_in_view(&self) -> bool {
        self.lifecycle.in_view
    }

    pub fn is_subscribed(&self) -> bool {
        self.listener.is_some()
    }

    /// Replace the render-time config. Timer, listener and target style keep the mount-time one.
    pub fn set_config(&mut self, config: RevealConfig) {
        self.current = config;
    }

    pub fn render(&self) -> Container<'_, E> {
        Container {
            child: &self.element,
            style: InlineStyle {
                snapshot: self.style.clone(),
                transition: self.current.transition().css(),
                max_width: CONTAINER_MAX_WIDTH,
            },
        }
    }

    /// Run the mount effects: initial layout style first, then the transition trigger.
    ///
    /// Mounting an already mounted wrapper behaves like [`revisit`](Self::revisit).
    #[tracing::instrument(skip_all, fields(instance = %self.id))]
    pub fn mount<H: RevealHost + ?Sized>(&mut self, host: &mut H) {
        if self.lifecycle.phase != Phase::Initial {
            tracing::debug!("already mounted, revisiting");
            self.revisit(host);
            return;
        }
        self.apply_layout();
        self.arm_trigger(host);
    }

    /// Re-run both mount effects on a live instance.
    ///
    /// Tears down the pending timer and listener, reapplies the full initial style, then the
    /// transform override, then arms the trigger again (1 ms timing).
    #[tracing::instrument(skip_all, fields(instance = %self.id))]
    pub fn revisit<H: RevealHost + ?Sized>(&mut self, host: &mut H) {
        self.teardown(host);
        self.apply_layout();
        self.arm_trigger(host);
    }

    /// Scroll notification for this instance's listener.
    #[tracing::instrument(skip_all, fields(instance = %self.id))]
    pub fn on_scroll<H: RevealHost + ?Sized>(&mut self, host: &mut H) {
        if self.listener.is_none() {
            tracing::warn!("scroll delivered to an instance without a listener");
            return;
        }
        let in_view = self.measure(host);
        match (self.lifecycle.phase, in_view) {
            (Phase::MountedWaiting, true) => self.schedule(host),
            (Phase::TransitionScheduled { .. } | Phase::Settled, false) if self.mounted.reverse => {
                self.hide(host)
            }
            _ => {}
        }
    }

    /// Timer callback. Returns whether the target style was applied.
    ///
    /// Ids other than the pending one are ignored.
    #[tracing::instrument(skip_all, fields(instance = %self.id, timer = timer.0))]
    pub fn on_timer(&mut self, timer: TimerId) -> bool {
        if self.lifecycle.phase.pending_timer() != Some(timer) {
            tracing::warn!(phase = self.lifecycle.phase.name(), "stale timer ignored");
            return false;
        }
        self.style = self.style.overlay(&self.mounted.target_patch());
        self.set_phase(Phase::Settled);
        true
    }

    /// Cancel the pending timer, detach the scroll listener and hand the element back.
    #[tracing::instrument(skip_all, fields(instance = %self.id))]
    pub fn unmount<H: RevealHost + ?Sized>(mut self, host: &mut H) -> E {
        self.teardown(host);
        tracing::debug!(phase = self.lifecycle.phase.name(), "unmounted");
        self.element
    }

    fn apply_layout(&mut self) {
        if !self.lifecycle.first_render {
            self.style = self.mounted.initial_style();
        }
        self.lifecycle.first_render = false;

        if self.mounted.has_motion() {
            self.style = self.style.overlay(&self.mounted.transform_patch());
        }
        self.set_phase(Phase::MountedWaiting);
    }

    fn arm_trigger<H: RevealHost + ?Sized>(&mut self, host: &mut H) {
        if !self.mounted.on_scroll {
            self.schedule(host);
            return;
        }
        if self.measure(host) {
            self.schedule(host);
        }
        self.listener = Some(host.add_scroll_listener(self.id));
    }

    fn measure<H: RevealHost + ?Sized>(&mut self, host: &H) -> bool {
        let top = host.element_top(self.id);
        let in_view = within_threshold(top, host.inner_height(), self.mounted.view_port);
        tracing::trace!(?top, in_view, "viewport check");
        self.lifecycle.in_view = in_view;
        in_view
    }

    fn schedule<H: RevealHost + ?Sized>(&mut self, host: &mut H) {
        if let Some(timer) = self.lifecycle.phase.pending_timer() {
            host.clear_timeout(timer);
        }
        let delay_ms = self
            .mounted
            .schedule_delay_ms(!self.lifecycle.scheduled_before);
        self.lifecycle.scheduled_before = true;
        let timer = host.set_timeout(self.id, delay_ms);
        tracing::trace!(delay_ms, timer = timer.0, "transition scheduled");
        self.set_phase(Phase::TransitionScheduled { timer });
    }

    fn hide<H: RevealHost + ?Sized>(&mut self, host: &mut H) {
        if let Some(timer) = self.lifecycle.phase.pending_timer() {
            host.clear_timeout(timer);
        }
        self.style = self.mounted.initial_style();
        self.set_phase(Phase::MountedWaiting);
    }

    fn teardown<H: RevealHost + ?Sized>(&mut self, host: &mut H) {
        if let Some(timer) = self.lifecycle.phase.pending_timer() {
            host.clear_timeout(timer);
        }
        if let Some(listener) = self.listener.take() {
            host.remove_scroll_listener(listener);
        }
    }

    fn set_phase(&mut self, phase: Phase) {
        if self.lifecycle.phase != phase {
            tracing::debug!(from = self.lifecycle.phase.name(), to = phase.name(), "phase");
        }
        self.lifecycle.phase = phase;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/wrapper.rs"]
mod tests;
