use thiserror::Error;

// ---------------------------------------------------------------------------
// Conversion errors
// ---------------------------------------------------------------------------

/// Failures from the conversion helpers and option loading.
///
/// The path accessor never returns these; it is total.
#[derive(Debug, Error)]
pub enum ArrError {
    /// JSON text could not be parsed or a value could not be (de)serialized.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML text could not be parsed or produced.
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The document parsed, but its root is not a mapping.
    #[error("expected a mapping at the root, found {found}")]
    NotAMapping { found: &'static str },

    /// Accessor options failed validation.
    #[error("invalid accessor options: {0}")]
    InvalidOptions(String),
}

pub type Result<T> = std::result::Result<T, ArrError>;
