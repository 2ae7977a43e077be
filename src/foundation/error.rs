/// Convenience result type used across blockhints.
pub type HintResult<T> = Result<T, HintError>;

/// Top-level error taxonomy used by the decorator APIs.
///
/// The decorator itself never fails; these variants exist so that host
/// renderers behind the [`crate::TemplateRenderer`] seam have a shared
/// error channel, and so that their failures propagate unchanged.
#[derive(thiserror::Error, Debug)]
pub enum HintError {
    /// Invalid host-provided construction data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Failure raised by a host template renderer.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HintError {
    /// Build a [`HintError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`HintError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`HintError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
