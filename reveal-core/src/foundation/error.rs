/// Result alias used across the crate.
pub type RevealResult<T> = Result<T, RevealError>;

#[derive(thiserror::Error, Debug)]
/// Errors raised at the edges of the crate: config parsing, strict validation and scenario replay.
///
/// The wrapper lifecycle itself never fails.
pub enum RevealError {
    /// A value failed strict validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// A config or scenario could not be interpreted.
    #[error("config error: {0}")]
    Config(String),

    /// The host refused or could not answer a request.
    #[error("host error: {0}")]
    Host(String),

    /// JSON (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other failure.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RevealError {
    /// Build a [`RevealError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RevealError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`RevealError::Host`].
    pub fn host(msg: impl Into<String>) -> Self {
        Self::Host(msg.into())
    }

    /// Build a [`RevealError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for RevealError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
