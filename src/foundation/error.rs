/// Convenience result type used across the crate.
pub type CityResult<T> = Result<T, CityError>;

/// Top-level error taxonomy.
///
/// None of these are recovered inside the crate: any error aborts the whole render and
/// no partial document is produced.
#[derive(thiserror::Error, Debug)]
pub enum CityError {
    /// The contribution source returned too few days, malformed records, or an error payload.
    #[error("upstream data error: {0}")]
    UpstreamData(String),

    /// A record or total failed range validation (weekday outside 0..=6, negative count).
    #[error("input validation error: {0}")]
    InputValidation(String),

    /// Geometry that would render degenerate or non-finite output.
    #[error("rendering invariant violated: {0}")]
    RenderInvariant(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CityError {
    /// Build a [`CityError::UpstreamData`] value.
    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::UpstreamData(msg.into())
    }

    /// Build a [`CityError::InputValidation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::InputValidation(msg.into())
    }

    /// Build a [`CityError::RenderInvariant`] value.
    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::RenderInvariant(msg.into())
    }

    /// Build a [`CityError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for CityError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
