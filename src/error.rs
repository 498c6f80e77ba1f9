//! Application error types with MCP protocol conversion.

use rmcp::model::ErrorCode;
use thiserror::Error;

use crate::store::StoreError;

/// Application-level errors for the curriculum server.
#[derive(Error, Debug)]
pub enum AppError {
    // Domain errors
    #[error("{kind} with ID {id} not found")]
    NotFound { kind: String, id: String },

    #[error("Item with ID {id} already exists in {collection}")]
    AlreadyExists { collection: String, id: String },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    // Storage errors
    #[error("Storage error: {0}")]
    Storage(StoreError),

    // Config errors
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::AlreadyExists { collection, id } => AppError::AlreadyExists {
                collection: collection.to_string(),
                id,
            },
            other => AppError::Storage(other),
        }
    }
}

impl From<AppError> for rmcp::model::ErrorData {
    fn from(err: AppError) -> Self {
        let (code, app_code) = match &err {
            AppError::NotFound { .. } => (ErrorCode::RESOURCE_NOT_FOUND, "NOT_FOUND"),
            AppError::AlreadyExists { .. } => (ErrorCode::INVALID_PARAMS, "ALREADY_EXISTS"),
            AppError::InvalidRequest(_) => (ErrorCode::INVALID_REQUEST, "INVALID_REQUEST"),
            AppError::Storage(_) => (ErrorCode::INTERNAL_ERROR, "STORAGE_FAILURE"),
            AppError::Config(_) => (ErrorCode::INTERNAL_ERROR, "CONFIG_ERROR"),
        };

        rmcp::model::ErrorData::new(code, format!("[{}] {}", app_code, err), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Collection;

    #[test]
    fn test_not_found_message() {
        let err = AppError::NotFound {
            kind: "Lesson phase".to_string(),
            id: "p9".to_string(),
        };
        let data = rmcp::model::ErrorData::from(err);
        assert_eq!(data.code, ErrorCode::RESOURCE_NOT_FOUND);
        assert_eq!(data.message, "[NOT_FOUND] Lesson phase with ID p9 not found");
    }

    #[test]
    fn test_already_exists_is_split_out_of_storage() {
        let err = AppError::from(StoreError::AlreadyExists {
            collection: Collection::Tasks,
            id: "t1".to_string(),
        });
        assert!(matches!(err, AppError::AlreadyExists { ref collection, .. } if collection == "tasks"));
    }
}
