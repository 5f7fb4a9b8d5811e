use crate::{
    animation::ease::Ease,
    config::model::RevealConfig,
    foundation::core::Offset,
    foundation::error::RevealResult,
};

/// Fluent construction of a [`RevealConfig`].
///
/// ```
/// use reveal::{Ease, RevealConfigBuilder};
///
/// let config = RevealConfigBuilder::new()
///     .opacity(1.0)
///     .x(-40)
///     .ease(Ease::EaseOut)
///     .on_scroll(true)
///     .build()
///     .unwrap();
/// assert_eq!(config.initial_style().transform.as_deref(), Some("translateX(-40px) rotate(0deg)"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct RevealConfigBuilder {
    config: RevealConfig,
    strict: bool,
}

impl RevealConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.config.opacity = Some(opacity);
        self
    }

    pub fn duration(mut self, ms: f64) -> Self {
        self.config.duration = ms;
        self
    }

    pub fn delay(mut self, ms: f64) -> Self {
        self.config.delay = ms;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.config.ease = ease;
        self
    }

    pub fn x(mut self, x: impl Into<Offset>) -> Self {
        self.config.x = Some(x.into());
        self
    }

    pub fn y(mut self, y: impl Into<Offset>) -> Self {
        self.config.y = Some(y.into());
        self
    }

    pub fn rotate(mut self, deg: f64) -> Self {
        self.config.rotate = Some(deg);
        self
    }

    pub fn on_scroll(mut self, on_scroll: bool) -> Self {
        self.config.on_scroll = on_scroll;
        self
    }

    pub fn view_port(mut self, fraction: f64) -> Self {
        self.config.view_port = fraction;
        self
    }

    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.config.background_color = Some(color.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.config.color = Some(color.into());
        self
    }

    pub fn reverse(mut self, reverse: bool) -> Self {
        self.config.reverse = reverse;
        self
    }

    /// Run [`RevealConfig::validate`] in [`RevealConfigBuilder::build`].
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    pub fn build(self) -> RevealResult<RevealConfig> {
        if self.strict {
            self.config.validate()?;
        }
        Ok(self.config)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/dsl.rs"]
mod tests;
