//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 요청을 추출하고 서비스를 호출한 뒤 응답 봉투로 감싸는 일만 합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! HTTP Layer Architecture
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities/Models - 도메인 모델                  ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`products`**: 상품 카탈로그 조회
//! - **`auth`**: 회원가입, 로그인, Google 로그인, 현재 사용자
//!
//! 서비스는 `web::Data<AppState>`로 주입받습니다.
//!
//! ```rust,ignore
//! #[get("/{id}")]
//! pub async fn get_product(
//!     state: web::Data<AppState>,
//!     path: web::Path<String>,
//! ) -> Result<HttpResponse, AppError> {
//!     let product = state.products.get_product(&path.into_inner()).await?;
//!     Ok(HttpResponse::Ok().json(ApiResponse::success(product)))
//! }
//! ```

use actix_web::{HttpRequest, HttpResponse};
use serde_json::json;

pub mod auth;
pub mod products;

/// 등록되지 않은 모든 경로에 대한 JSON 404 응답
pub async fn route_not_found(req: HttpRequest) -> HttpResponse {
    log::debug!("Route not found: {} {}", req.method(), req.path());

    HttpResponse::NotFound().json(json!({
        "status": "fail",
        "message": "Route not found",
    }))
}
