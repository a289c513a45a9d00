//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 상품, 인증 라우트와 헬스체크 엔드포인트, 추출기 에러 처리를 포함합니다.
//!
//! # Routes
//!
//! | 경로 | 인증 | 핸들러 |
//! |------|------|--------|
//! | `GET /api/health` | - | [`health_check`] |
//! | `GET /api/products` | - | `handlers::products::get_products` |
//! | `GET /api/products/categories` | - | `handlers::products::get_categories` |
//! | `GET /api/products/{id}` | - | `handlers::products::get_product` |
//! | `POST /api/auth/register` | - | `handlers::auth::register` |
//! | `POST /api/auth/login` | - | `handlers::auth::login` |
//! | `POST /api/auth/google` | - | `handlers::auth::google_login` |
//! | `GET /api/auth/me` | Bearer | `handlers::auth::get_current_user` |
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .configure(configure_all_routes)
//!     .default_service(web::route().to(handlers::route_not_found));
//! ```

use crate::config::JSON_BODY_LIMIT;
use crate::errors::AppError;
use crate::handlers;
use actix_web::{error, web, HttpResponse};
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
/// JSON 본문과 쿼리 문자열 파싱 실패도 `AppError` 형식으로 응답하도록 설정합니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).app_data(query_config());

    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_product_routes(cfg);
    configure_auth_routes(cfg);
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_BODY_LIMIT)
        .error_handler(|err, _req| {
            let message = match &err {
                error::JsonPayloadError::OverflowKnownLength { .. } | error::JsonPayloadError::Overflow { .. } => {
                    "Request body is too large".to_string()
                }
                _ => format!("Invalid request body: {}", err),
            };
            AppError::validation(message).into()
        })
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| AppError::validation(format!("Invalid query string: {}", err)).into())
}

/// 상품 조회 라우트를 설정합니다
///
/// `/categories`는 `/{id}`에 가로채이지 않도록 먼저 등록합니다.
fn configure_product_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/products")
            .service(handlers::products::get_products)
            .service(handlers::products::get_categories)
            .service(handlers::products::get_product)
    );
}

/// 인증 관련 라우트를 설정합니다
///
/// `/me`는 핸들러의 `CurrentUser` 추출기가 Bearer 토큰을 검증합니다.
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:5000/api/auth/login \
///   -H "Content-Type: application/json" \
///   -d '{"email":"user@example.com","password":"Password123"}'
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/auth")
            .service(handlers::auth::register)
            .service(handlers::auth::login)
            .service(handlers::auth::google_login)
            .service(handlers::auth::get_current_user)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:5000/api/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "success",
///   "message": "Server is running",
///   "timestamp": "2024-01-01T00:00:00Z"
/// }
/// ```
#[actix_web::get("/api/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "success",
        "message": "Server is running",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
