use crate::animation::ease::Ease;

/// Timing of the reveal as rendered into the container's `transition` property.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TransitionSpec {
    pub duration_ms: f64,
    pub ease: Ease,
    pub delay_ms: f64,
}

impl TransitionSpec {
    /// CSS shorthand, e.g. `all 400ms ease-in 0ms`.
    pub fn css(&self) -> String {
        format!(
            "all {}ms {} {}ms",
            self.duration_ms,
            self.ease.css(),
            self.delay_ms
        )
    }

    /// Eased progress `[0, 1]` at `elapsed_ms` after the target style was applied.
    ///
    /// For hosts that interpolate styles themselves instead of running CSS transitions.
    pub fn progress_at(&self, elapsed_ms: f64) -> f64 {
        let active = elapsed_ms - self.delay_ms;
        if active < 0.0 {
            return 0.0;
        }
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        self.ease.apply(active / self.duration_ms)
    }

    /// Time from applying the target style until the host has finished interpolating.
    pub fn total_ms(&self) -> f64 {
        self.delay_ms.max(0.0) + self.duration_ms.max(0.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/transition.rs"]
mod tests;
