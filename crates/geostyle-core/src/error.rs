//! Error types for map style generation
//!
//! Provides a unified error type for all geostyle crates. Every variant except
//! [`Error::Other`] describes a problem with the caller's configuration, so the
//! invoking layer is expected to reject the whole update when one surfaces.

use thiserror::Error;

/// Core error type for style and legend generation
#[derive(Error, Debug)]
pub enum Error {
    /// Classification method is not one of equal_interval, quantile or jenks
    #[error("Unknown discretize method \"{0}\"")]
    UnknownMethod(String),

    /// Analysis is not one of graduated, categorized or proportional
    #[error("Unhandled analysis type \"{0}\"")]
    UnknownAnalysis(String),

    /// Map style type has no known rendering
    #[error("Unknown map style type \"{0}\"")]
    UnknownStyleType(String),

    /// Legacy symbology is not one of graduated or circle
    #[error("Unknown symbology \"{0}\"")]
    UnknownSymbology(String),

    /// A property cannot be driven by the requested analysis
    #[error("Property \"{property}\" does not support \"{analysis}\" analysis")]
    UnsupportedProperty { property: String, analysis: String },

    /// Structurally valid configuration with invalid content
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Configuration that could not be deserialized
    #[error("Malformed configuration: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Failure of the underlying feature store
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether the error comes from the caller's input rather than the backend.
    ///
    /// Validation errors are deterministic: retrying with the same
    /// configuration and data fails the same way.
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Create an error for explicit boundaries that cannot define a class
    pub fn too_few_boundaries(actual: usize) -> Self {
        Self::InvalidConfig(format!(
            "\"boundaries\" must be at least a list of two values, got {actual}"
        ))
    }

    /// Create an error for a required key missing from a property
    pub fn missing_key(property: &str, key: &str) -> Self {
        Self::InvalidConfig(format!("\"{property}\" requires \"{key}\""))
    }
}
