//! Error types for layout loading.

use d2fw_model::{ResourceError, SchemaError};
use thiserror::Error;

/// Errors that can occur while loading a field layout.
#[derive(Debug, Error)]
pub enum LayoutLoadError {
    /// The layout file is missing or unreadable.
    #[error(transparent)]
    Resource(#[from] ResourceError),

    /// The layout file was read but its content is invalid.
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Result type for layout loading.
pub type Result<T> = std::result::Result<T, LayoutLoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_is_transparent() {
        let err: LayoutLoadError = SchemaError::EmptyLayout.into();
        assert_eq!(err.to_string(), "layout does not declare any field");
        assert!(matches!(err, LayoutLoadError::Schema(_)));
    }
}
