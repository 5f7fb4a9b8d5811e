//! Initial translate/rotate transform of the container.

use crate::foundation::core::{Affine, Offset, Vec2};

/// Offsets and rotation the element starts from before it settles at `transform: none`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransformSpec {
    pub x: Option<Offset>,
    pub y: Option<Offset>,
    pub rotate_deg: f64,
}

impl TransformSpec {
    /// Translation component, if any offset is set.
    pub fn translate_css(&self) -> Option<String> {
        match (&self.x, &self.y) {
            (Some(x), Some(y)) => Some(format!("translate({x}, {y})")),
            (Some(x), None) => Some(format!("translateX({x})")),
            (None, Some(y)) => Some(format!("translateY({y})")),
            (None, None) => None,
        }
    }

    /// Rotation component; always present, `rotate(0deg)` by default.
    pub fn rotate_css(&self) -> String {
        format!("rotate({}deg)", self.rotate_deg)
    }

    /// Full CSS transform, translation first.
    pub fn css(&self) -> String {
        match self.translate_css() {
            Some(translate) => format!("{translate} {}", self.rotate_css()),
            None => self.rotate_css(),
        }
    }

    /// Equivalent matrix for hosts without a CSS engine.
    ///
    /// `None` when an offset is not expressed in pixels (percentages need layout).
    pub fn to_affine(&self) -> Option<Affine> {
        let px = |o: &Option<Offset>| match o {
            Some(o) => o.as_px(),
            None => Some(0.0),
        };
        let translate = Vec2::new(px(&self.x)?, px(&self.y)?);
        // CSS applies the list right to left: rotate, then translate.
        Some(Affine::translate(translate) * Affine::rotate(self.rotate_deg.to_radians()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/transform.rs"]
mod tests;
