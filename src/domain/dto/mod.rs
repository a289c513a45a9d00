//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//!
//! ## 응답 형식
//!
//! 성공 응답은 모두 [`ApiResponse`] 봉투를 사용합니다.
//!
//! ```json
//! { "status": "success", "data": { ... } }
//! ```
//!
//! 실패 응답은 `AppError`가 만들며 `{ "status": "fail" | "error", "message": ... }` 형식입니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── products/
//! │   ├── request.rs    # 쿼리 파라미터, ProductFilter
//! │   └── response.rs   # ProductResponse, PaginationMeta
//! └── users/
//!     ├── request/      # 회원가입, 로그인, Google 로그인
//!     └── response/     # AuthResponse, UserResponse
//! ```

use serde::Serialize;

pub mod products;
pub mod users;

pub use products::*;
pub use users::*;

/// 성공 응답 봉투
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: &'static str,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self { status: "success", data }
    }
}
