/// Convenience result type used across telop.
pub type TelopResult<T> = Result<T, TelopError>;

/// Top-level error taxonomy used by engine APIs.
///
/// A frame with no visible caption and an adjustment whose target never matches are not errors;
/// they surface as `None` and as an unchanged entry sequence.
#[derive(thiserror::Error, Debug)]
pub enum TelopError {
    /// Corrupt source data: a missing field, an unparseable time-code line, a bad id line.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// Configuration values that cannot be evaluated.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while validating animation tracks.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors when serializing or deserializing boundary types.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TelopError {
    /// Build a [`TelopError::MalformedInput`] value.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedInput(msg.into())
    }

    /// Build a [`TelopError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TelopError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`TelopError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for TelopError {
    fn from(e: serde_json::Error) -> Self {
        Self::serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
