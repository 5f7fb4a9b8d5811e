use std::fmt;

pub use kurbo::{Affine, Vec2};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
/// Identity of one mounted wrapper (one usage site on a page).
pub struct InstanceId(pub u64);

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
/// Handle of a one-shot timer scheduled on the host.
pub struct TimerId(pub u64);

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
/// Teardown handle of a scroll subscription.
pub struct ListenerId(pub u64);

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Translation along one axis.
///
/// Numbers are pixels; strings carry their own unit (`"10%"`, `"2rem"`) and are used verbatim.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Offset {
    /// Pixel distance.
    Px(f64),
    /// Any CSS length, copied as-is.
    Raw(String),
}

impl Offset {
    /// CSS text of this offset (`100px`, `10%`).
    pub fn to_css(&self) -> String {
        match self {
            Self::Px(v) => format!("{v}px"),
            Self::Raw(s) => s.clone(),
        }
    }

    /// Pixel value, if this offset is expressed in pixels.
    ///
    /// Raw strings count when they are a plain number followed by `px`.
    pub fn as_px(&self) -> Option<f64> {
        match self {
            Self::Px(v) => Some(*v),
            Self::Raw(s) => s.trim().strip_suffix("px")?.trim().parse().ok(),
        }
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(v) => write!(f, "{v}px"),
            Self::Raw(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Offset {
    fn from(v: f64) -> Self {
        Self::Px(v)
    }
}

impl From<i32> for Offset {
    fn from(v: i32) -> Self {
        Self::Px(f64::from(v))
    }
}

impl From<&str> for Offset {
    fn from(v: &str) -> Self {
        Self::Raw(v.to_string())
    }
}

impl From<String> for Offset {
    fn from(v: String) -> Self {
        Self::Raw(v)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
