use thiserror::Error;

/// Library-level error type.
///
/// Out-of-range lookups are not errors: they return `None`. Only configuration
/// the engine refuses to lay out, and scene loading failures, surface here.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Invalid column count: {column_count} (must be greater than 0)")]
    InvalidColumnCount { column_count: usize },

    #[error("Scene I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scene format error: {0}")]
    SceneFormat(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_column_count_message_names_value() {
        let err = LayoutError::InvalidColumnCount { column_count: 0 };
        assert_eq!(
            err.to_string(),
            "Invalid column count: 0 (must be greater than 0)"
        );
    }

    #[test]
    fn test_json_error_converts() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: LayoutError = json_err.into();
        assert!(matches!(err, LayoutError::SceneFormat(_)));
    }
}
