//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 본문을 구조화된 Rust 타입으로 변환하고
//! `validator` 크레이트로 검증합니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! #[actix_web::post("/register")]
//! async fn register(
//!     state: web::Data<AppState>,
//!     payload: web::Json<RegisterRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     payload.validate()?;
//!     // ...
//! }
//! ```
//!
//! 검증 실패 시 `validator::ValidationErrors`가 `AppError::ValidationError`로 변환되어
//! HTTP 400 응답이 됩니다. 실패한 모든 필드의 메시지가 함께 반환됩니다.

pub mod auth_request;

pub use auth_request::*;
