/// Convenience result type used across basicolor.
pub type StoreResult<T> = Result<T, StoreError>;

/// Top-level error taxonomy used at the IO edges of the storefront core.
///
/// Filtering, selection and composition are infallible; only loading,
/// decoding, rendering and cart arithmetic report errors.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    /// Invalid user-provided catalog, config or cart data.
    #[error("validation error: {0}")]
    Validation(String),

    /// An uploaded file could not be decoded into a logo bitmap.
    #[error("decode error: {0}")]
    Decode(String),

    /// Errors while rasterizing or writing a preview.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StoreError {
    /// Build a [`StoreError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StoreError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`StoreError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`StoreError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
