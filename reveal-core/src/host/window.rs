//! What the wrapper needs from the surrounding window.
//!
//! All three capabilities are keyed by the owning [`InstanceId`] so a host can route
//! callbacks back to the right wrapper; no instance ever touches another's handles.

use crate::foundation::core::{InstanceId, ListenerId, TimerId};

/// Layout queries.
pub trait Viewport {
    /// Distance from the top of the visible window to the container's top edge.
    ///
    /// `None` when the container is not laid out.
    fn element_top(&self, owner: InstanceId) -> Option<f64>;

    /// Visible height of the window.
    fn inner_height(&self) -> f64;
}

/// One-shot deferred callbacks.
pub trait TimerQueue {
    /// Schedule a callback for `owner` after `delay_ms`.
    fn set_timeout(&mut self, owner: InstanceId, delay_ms: f64) -> TimerId;

    /// Cancel a pending callback. Unknown or already fired ids are ignored.
    fn clear_timeout(&mut self, timer: TimerId);
}

/// The window-wide scroll notification stream.
pub trait ScrollSource {
    fn add_scroll_listener(&mut self, owner: InstanceId) -> ListenerId;

    /// Detach a listener. Unknown ids are ignored.
    fn remove_scroll_listener(&mut self, listener: ListenerId);
}

/// Everything a [`crate::RevealWrapper`] consumes from its host.
pub trait RevealHost: Viewport + TimerQueue + ScrollSource {}

impl<T: Viewport + TimerQueue + ScrollSource + ?Sized> RevealHost for T {}

/// Whether an element at `top` sits above the trigger line `inner_height * view_port`.
pub fn within_threshold(top: Option<f64>, inner_height: f64, view_port: f64) -> bool {
    match top {
        Some(top) => top < inner_height * view_port,
        None => false,
    }
}
