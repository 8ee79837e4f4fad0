// src/error.rs
// Standardized error types for leadscout

use thiserror::Error;

/// Main error type for the leadscout library
///
/// Allocation itself never fails; these cover loading configuration and
/// replacement catalogs.
#[derive(Error, Debug)]
pub enum LeadScoutError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("catalog error: {0}")]
    Catalog(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

/// Convenience type alias for Result using LeadScoutError
pub type Result<T> = std::result::Result<T, LeadScoutError>;

impl From<String> for LeadScoutError {
    fn from(s: String) -> Self {
        LeadScoutError::InvalidInput(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = LeadScoutError::Catalog("category 'X' has no tier 1".to_string());
        assert_eq!(err.to_string(), "catalog error: category 'X' has no tier 1");

        let err = LeadScoutError::Config("bad strategy".to_string());
        assert_eq!(err.to_string(), "configuration error: bad strategy");
    }

    #[test]
    fn test_from_toml_error() {
        let parse_err = toml::from_str::<toml::Value>("not = [valid").unwrap_err();
        let err: LeadScoutError = parse_err.into();
        assert!(matches!(err, LeadScoutError::Toml(_)));
    }

    #[test]
    fn test_from_string() {
        let err: LeadScoutError = "empty category".to_string().into();
        assert!(matches!(err, LeadScoutError::InvalidInput(ref s) if s == "empty category"));
    }
}
