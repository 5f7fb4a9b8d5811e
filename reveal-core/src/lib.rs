//! Reveal is a one-shot "reveal" transition for a single wrapped element.
//!
//! A [`RevealWrapper`] starts its element hidden and/or offset (opacity 0, translated, rotated)
//! and moves it to a settled style (`transform: none`, target opacity and colors) either shortly
//! after mount or once the element scrolls above a fraction of the viewport height.
//!
//! # Model
//!
//! - **Config**: [`RevealConfig`] (serde, prop-style camelCase keys) or [`RevealConfigBuilder`].
//! - **Style**: [`StyleSnapshot`] updated only through overlays; [`TransformSpec`] renders the
//!   starting transform.
//! - **Lifecycle**: [`Phase`] goes `Initial -> MountedWaiting -> TransitionScheduled -> Settled`.
//! - **Host**: the wrapper reaches the window only through [`Viewport`], [`TimerQueue`] and
//!   [`ScrollSource`]. [`SimWindow`] is a deterministic implementation; [`Stage`] drives many
//!   wrappers over it and [`Scenario`] replays scripted pages from JSON.
//!
//! The crate performs no IO in the lifecycle and never fails there; errors only arise when
//! parsing or strictly validating configs and scenarios.
#![forbid(unsafe_code)]

mod animation;
mod config;
mod foundation;
mod host;
mod reveal;
mod style;

pub use animation::ease::Ease;
pub use animation::transition::TransitionSpec;
pub use config::dsl::RevealConfigBuilder;
pub use config::model::{DEFAULT_DURATION_MS, DEFAULT_VIEW_PORT, RevealConfig};
pub use foundation::core::{Affine, InstanceId, ListenerId, Offset, TimerId, Vec2};
pub use foundation::error::{RevealError, RevealResult};
pub use host::sim::{FiredTimer, SimWindow};
pub use host::window::{RevealHost, ScrollSource, TimerQueue, Viewport, within_threshold};
pub use reveal::scenario::{
    FinalState, Replay, Scenario, ScenarioAction, ScenarioEvent, ScenarioInstance,
};
pub use reveal::stage::{Cause, Stage, TimelineEntry};
pub use reveal::wrapper::{CONTAINER_MAX_WIDTH, Container, InlineStyle, Phase, RevealWrapper};
pub use style::snapshot::StyleSnapshot;
pub use style::transform::TransformSpec;
