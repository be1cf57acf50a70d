//! Uniform response envelope for every JSON body the API returns.

use serde::{Deserialize, Serialize};

pub const DEFAULT_SUCCESS_MESSAGE: &str = "Operation completed successfully";
pub const DEFAULT_ERROR_MESSAGE: &str = "Operation failed";

/// Success carries `data`; failure carries a non-empty `errors` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self::ok_with_message(data, DEFAULT_SUCCESS_MESSAGE)
    }

    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            errors: None,
        }
    }

    pub fn error(errors: Vec<String>) -> Self {
        Self::error_with_message(errors, DEFAULT_ERROR_MESSAGE)
    }

    pub fn error_with_message(errors: Vec<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            errors: Some(errors),
        }
    }

    /// The message doubles as the single error entry.
    pub fn not_found(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            success: false,
            errors: Some(vec![message.clone()]),
            message,
            data: None,
        }
    }
}
