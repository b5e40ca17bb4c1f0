use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::models::ApiResponse;
use crate::services::EventState;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] DbErr),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Registration is currently closed")]
    RegistrationClosed,

    #[error("Cannot move event from {from} to {to}")]
    InvalidStateTransition { from: EventState, to: EventState },

    #[error("No available students to raffle")]
    NoEligibleStudents,

    #[error("No available items to raffle")]
    NoEligibleItems,
}

impl AppError {
    /// 将唯一约束冲突转换为 Conflict，其它数据库错误保持原样
    pub fn from_insert(err: DbErr, conflict_message: &str) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                AppError::Conflict(conflict_message.to_string())
            }
            _ => AppError::DatabaseError(err),
        }
    }

    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::ValidationError(msg) => {
                log::warn!("Validation error: {msg}");
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Conflict(msg) => {
                log::warn!("Conflict: {msg}");
                (StatusCode::BAD_REQUEST, "CONFLICT", msg.clone())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::RegistrationClosed => {
                log::warn!("Registration attempted while closed");
                (
                    StatusCode::FORBIDDEN,
                    "REGISTRATION_CLOSED",
                    "Registration is currently closed.".to_string(),
                )
            }
            AppError::InvalidStateTransition { .. } => {
                log::warn!("{self}");
                (StatusCode::CONFLICT, "INVALID_STATE_TRANSITION", self.to_string())
            }
            AppError::NoEligibleStudents => (
                StatusCode::BAD_REQUEST,
                "NO_ELIGIBLE_STUDENTS",
                "No available students to raffle.".to_string(),
            ),
            AppError::NoEligibleItems => (
                StatusCode::BAD_REQUEST,
                "NO_ELIGIBLE_ITEMS",
                "No available items to raffle.".to_string(),
            ),
            AppError::DatabaseError(err) => {
                log::error!("Database error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Internal server error".to_string(),
                )
            }
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_)
            | AppError::Conflict(_)
            | AppError::NoEligibleStudents
            | AppError::NoEligibleItems => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::RegistrationClosed => StatusCode::FORBIDDEN,
            AppError::InvalidStateTransition { .. } => StatusCode::CONFLICT,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let (status_code, error_code, message) = self.parts();

        HttpResponse::build(status_code).json(ApiResponse::error(
            status_code.as_u16(),
            error_code,
            message,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::ValidationError("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Conflict("dup".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::RegistrationClosed.status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::NotFound("item".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::DatabaseError(DbErr::Custom("boom".into())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    async fn body_json(err: AppError) -> serde_json::Value {
        let resp = err.error_response();
        let bytes = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_error_body_shape() {
        let body = body_json(AppError::NotFound("Raffle item not found".into())).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Raffle item not found");
        assert_eq!(body["statusCode"], 404);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert_eq!(body["error"]["message"], "Raffle item not found");
        assert!(body.get("data").is_none());
    }

    #[tokio::test]
    async fn test_internal_details_are_hidden() {
        let err = AppError::DatabaseError(DbErr::Custom("secret table".into()));
        assert_eq!(err.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(err).await;
        assert_eq!(body["statusCode"], 500);
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
        assert!(!body.to_string().contains("secret"));
    }
}
