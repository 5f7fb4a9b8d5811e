use std::{fs::File, io::BufReader, path::Path};

use crate::{
    animation::{ease::Ease, transition::TransitionSpec},
    foundation::core::Offset,
    foundation::error::{RevealError, RevealResult},
    style::{snapshot::StyleSnapshot, transform::TransformSpec},
};

/// Default transition length in milliseconds.
pub const DEFAULT_DURATION_MS: f64 = 400.0;
/// Default fraction of the viewport height used as the scroll trigger line.
pub const DEFAULT_VIEW_PORT: f64 = 0.8;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Configuration of one reveal wrapper.
///
/// Field names follow the wrapper's props (`onScroll`, `viewPort`, `backgroundColor`) so the
/// same JSON can be shared with web front-ends. Every field is optional.
///
/// Values are not checked when a wrapper mounts: negative durations or a `viewPort` outside
/// `[0, 1]` simply produce whatever timing the arithmetic yields. Call
/// [`RevealConfig::validate`] to opt into strict checking.
pub struct RevealConfig {
    /// Target opacity; when set the element starts fully transparent.
    pub opacity: Option<f64>,
    /// Transition duration in milliseconds.
    pub duration: f64,
    /// Transition delay in milliseconds.
    pub delay: f64,
    pub ease: Ease,
    /// Horizontal starting offset.
    pub x: Option<Offset>,
    /// Vertical starting offset.
    pub y: Option<Offset>,
    /// Starting rotation in degrees.
    pub rotate: Option<f64>,
    /// Wait for the element to enter the viewport instead of revealing on mount.
    pub on_scroll: bool,
    /// Trigger line as a fraction of the viewport height, measured from the top.
    pub view_port: f64,
    pub background_color: Option<String>,
    /// Target text color.
    pub color: Option<String>,
    /// Scroll mode only: hide again when the element leaves the trigger zone.
    pub reverse: bool,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            opacity: None,
            duration: DEFAULT_DURATION_MS,
            delay: 0.0,
            ease: Ease::default(),
            x: None,
            y: None,
            rotate: None,
            on_scroll: false,
            view_port: DEFAULT_VIEW_PORT,
            background_color: None,
            color: None,
            reverse: false,
        }
    }
}

impl RevealConfig {
    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> RevealResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| RevealError::config(format!("parse reveal config JSON: {e}")))
    }

    pub fn from_json_str(s: &str) -> RevealResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| RevealError::config(format!("parse reveal config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> RevealResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            RevealError::config(format!("open reveal config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Strict check of numeric ranges. Never called implicitly.
    pub fn validate(&self) -> RevealResult<()> {
        for (name, value) in [("duration", self.duration), ("delay", self.delay)] {
            if !value.is_finite() || value < 0.0 {
                return Err(RevealError::validation(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.view_port) {
            return Err(RevealError::validation("viewPort must be in [0, 1]"));
        }
        if let Some(opacity) = self.opacity
            && !(0.0..=1.0).contains(&opacity)
        {
            return Err(RevealError::validation("opacity must be in [0, 1]"));
        }
        if let Some(rotate) = self.rotate
            && !rotate.is_finite()
        {
            return Err(RevealError::validation("rotate must be finite"));
        }
        for (name, offset) in [("x", &self.x), ("y", &self.y)] {
            match offset {
                Some(Offset::Px(v)) if !v.is_finite() => {
                    return Err(RevealError::validation(format!("{name} must be finite")));
                }
                Some(Offset::Raw(s)) if s.trim().is_empty() => {
                    return Err(RevealError::validation(format!(
                        "{name} must be non-empty when given as a string"
                    )));
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Transition descriptor rendered into the container style.
    pub fn transition(&self) -> TransitionSpec {
        TransitionSpec {
            duration_ms: self.duration,
            ease: self.ease,
            delay_ms: self.delay,
        }
    }

    pub fn transform(&self) -> TransformSpec {
        TransformSpec {
            x: self.x.clone(),
            y: self.y.clone(),
            rotate_deg: self.rotate.unwrap_or(0.0),
        }
    }

    /// Whether any offset or rotation was configured.
    pub fn has_motion(&self) -> bool {
        self.x.is_some() || self.y.is_some() || self.rotate.is_some()
    }

    /// Style before the first layout pass: only the hidden opacity, if any.
    pub fn pre_mount_style(&self) -> StyleSnapshot {
        StyleSnapshot {
            opacity: self.opacity.map(|_| 0.0),
            ..StyleSnapshot::default()
        }
    }

    /// Full starting style: hidden opacity plus the starting transform.
    ///
    /// Colors are absent; the element keeps its natural colors until it settles.
    pub fn initial_style(&self) -> StyleSnapshot {
        StyleSnapshot {
            transform: Some(self.transform().css()),
            ..self.pre_mount_style()
        }
    }

    /// Transform part of [`RevealConfig::initial_style`], as an overlay.
    pub fn transform_patch(&self) -> StyleSnapshot {
        StyleSnapshot {
            transform: Some(self.transform().css()),
            ..StyleSnapshot::default()
        }
    }

    /// Overlay applied when the transition fires.
    pub fn target_patch(&self) -> StyleSnapshot {
        StyleSnapshot {
            opacity: self.opacity,
            transform: Some("none".to_string()),
            background_color: self.background_color.clone(),
            color: self.color.clone(),
        }
    }

    /// Delay before the target style is applied.
    ///
    /// Half the duration the first time, 1 ms on any later scheduling so a re-trigger
    /// still lands asynchronously.
    pub fn schedule_delay_ms(&self, first: bool) -> f64 {
        if first { self.duration / 2.0 } else { 1.0 }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
