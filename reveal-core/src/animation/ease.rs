use std::{fmt, str::FromStr};

use crate::foundation::error::{RevealError, RevealResult};

/// Timing function of the reveal transition.
///
/// The set is fixed; the default is the linear `cubic-bezier(0, 0, 1.0, 1.0)` curve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    #[default]
    #[serde(rename = "cubic-bezier(0, 0, 1.0, 1.0)", alias = "linear")]
    Linear,
    #[serde(rename = "ease-in")]
    EaseIn,
    #[serde(rename = "ease-out")]
    EaseOut,
    #[serde(rename = "ease-in-out")]
    EaseInOut,
}

impl Ease {
    /// CSS identifier used in the `transition` shorthand.
    pub fn css(self) -> &'static str {
        match self {
            Self::Linear => "cubic-bezier(0, 0, 1.0, 1.0)",
            Self::EaseIn => "ease-in",
            Self::EaseOut => "ease-out",
            Self::EaseInOut => "ease-in-out",
        }
    }

    /// Control points `(x1, y1, x2, y2)` of the equivalent cubic-bezier curve.
    pub fn control_points(self) -> (f64, f64, f64, f64) {
        match self {
            Self::Linear => (0.0, 0.0, 1.0, 1.0),
            Self::EaseIn => (0.42, 0.0, 1.0, 1.0),
            Self::EaseOut => (0.0, 0.0, 0.58, 1.0),
            Self::EaseInOut => (0.42, 0.0, 0.58, 1.0),
        }
    }

    /// Eased progress for linear progress `t` (clamped to `[0, 1]`).
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            _ => {
                let (x1, y1, x2, y2) = self.control_points();
                cubic_bezier(x1, y1, x2, y2, t)
            }
        }
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css())
    }
}

impl FromStr for Ease {
    type Err = RevealError;

    fn from_str(s: &str) -> RevealResult<Self> {
        let key: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "ease-in" => Ok(Self::EaseIn),
            "ease-out" => Ok(Self::EaseOut),
            "ease-in-out" => Ok(Self::EaseInOut),
            "linear" | "cubic-bezier(0,0,1.0,1.0)" | "cubic-bezier(0,0,1,1)" => Ok(Self::Linear),
            _ => Err(RevealError::config(format!("unknown ease '{}'", s.trim()))),
        }
    }
}

fn bezier_component(a1: f64, a2: f64, t: f64) -> f64 {
    let u = 1.0 - t;
    3.0 * u * u * t * a1 + 3.0 * u * t * t * a2 + t * t * t
}

fn bezier_slope(a1: f64, a2: f64, t: f64) -> f64 {
    let u = 1.0 - t;
    3.0 * u * u * a1 + 6.0 * u * t * (a2 - a1) + 3.0 * t * t * (1.0 - a2)
}

// Solve x(t) = x for t, then evaluate y(t).
fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    const EPS: f64 = 1e-7;

    let mut t = x;
    for _ in 0..8 {
        let err = bezier_component(x1, x2, t) - x;
        if err.abs() < EPS {
            return bezier_component(y1, y2, t);
        }
        let d = bezier_slope(x1, x2, t);
        if d.abs() < 1e-6 {
            break;
        }
        t = (t - err / d).clamp(0.0, 1.0);
    }

    let (mut lo, mut hi) = (0.0, 1.0);
    t = x;
    for _ in 0..64 {
        let v = bezier_component(x1, x2, t);
        if (v - x).abs() < EPS {
            break;
        }
        if v < x {
            lo = t;
        } else {
            hi = t;
        }
        t = (lo + hi) / 2.0;
    }
    bezier_component(y1, y2, t)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
