use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 统一响应包: `{success, message, data?, statusCode?}`
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            status_code: None,
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// 错误响应, message 与 error.message 相同
    pub fn error(status_code: u16, code: &str, message: String) -> Self {
        Self {
            success: false,
            message: message.clone(),
            data: None,
            status_code: Some(status_code),
            error: Some(ApiError {
                code: code.to_string(),
                message,
            }),
        }
    }

    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
            status_code: None,
            error: None,
        }
    }
}
