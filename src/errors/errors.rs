//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다. 모든 에러는 하나의 열거형으로 표현되고,
//! HTTP 응답 변환은 `error_response`의 단일 `match`에서 이루어집니다.
//!
//! ## 응답 형식
//!
//! | 구분 | HTTP Status | `status` 필드 | `message` |
//! |------|-------------|---------------|-----------|
//! | 클라이언트 에러 | 4xx | `"fail"` | 에러 메시지 그대로 |
//! | 서버 에러 | 5xx | `"error"` | `"Something went wrong!"` (상세 내용은 로그로만) |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn get_product(id: &str) -> Result<Product, AppError> {
//!     store.find_by_id(id).await?
//!         .ok_or_else(|| AppError::NotFound("Product not found".to_string()))
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

/// 5xx 응답에서 클라이언트에게 노출되는 고정 메시지
pub const GENERIC_SERVER_ERROR_MESSAGE: &str = "Something went wrong!";

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    ///
    /// 실패한 필드마다 하나의 메시지를 담습니다. 첫 번째 실패에서 멈추지 않습니다.
    #[error("{}", .0.join(". "))]
    ValidationError(Vec<String>),

    /// 검증은 통과했지만 요청을 처리할 수 없는 경우 (400 Bad Request)
    #[error("{0}")]
    BadRequest(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("{0}")]
    AuthenticationError(String),

    /// 서명이 맞지 않거나 형식이 잘못된 JWT (401 Unauthorized)
    #[error("Invalid token. Please log in again.")]
    InvalidToken,

    /// 만료된 JWT (401 Unauthorized)
    #[error("Your token has expired! Please log in again.")]
    TokenExpired,

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("{0}")]
    NotFound(String),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 외부 서비스 에러 (500 Internal Server Error)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 단일 메시지로 검증 에러를 생성합니다.
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::ValidationError(vec![message.into()])
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::AuthenticationError(_) | AppError::InvalidToken | AppError::TokenExpired => {
                StatusCode::UNAUTHORIZED
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_)
            | AppError::ExternalServiceError(_)
            | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러는 상세 내용을 서버 로그에만 남기고 클라이언트에는 고정 메시지를 돌려줍니다.
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        let body = match self {
            AppError::ValidationError(messages) => json!({
                "status": "fail",
                "message": self.to_string(),
                "errors": messages,
            }),
            _ if status.is_client_error() => json!({
                "status": "fail",
                "message": self.to_string(),
            }),
            _ => {
                log::error!("ERROR 💥 {}", self);
                json!({
                    "status": "error",
                    "message": GENERIC_SERVER_ERROR_MESSAGE,
                })
            }
        };

        HttpResponse::build(status).json(body)
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::ValidationError(validation_messages(&errors))
    }
}

/// `validator`의 에러 맵을 사람이 읽을 수 있는 메시지 목록으로 변환합니다.
///
/// 필드 이름 순으로 정렬하여 응답이 항상 같은 순서를 갖도록 합니다.
/// 메시지가 지정되지 않은 규칙은 `"<field> is invalid"`로 표시됩니다.
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<(String, Vec<String>)> = errors
        .field_errors()
        .into_iter()
        .map(|(field, field_errors)| {
            let field = field.to_string();
            let messages = field_errors
                .iter()
                .map(|error| match &error.message {
                    Some(message) => message.to_string(),
                    None => format!("{} is invalid", field),
                })
                .collect();
            (field, messages)
        })
        .collect();

    fields.sort_by(|a, b| a.0.cmp(&b.0));
    fields.into_iter().flat_map(|(_, messages)| messages).collect()
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
