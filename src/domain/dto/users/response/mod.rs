//! # 사용자 관련 응답 DTO 모듈
//!
//! ## JSON 응답 예제
//!
//! ### 인증 응답 (`register`, `login`, `google`)
//! ```json
//! {
//!   "status": "success",
//!   "data": {
//!     "user": { "id": "507f1f77bcf86cd799439011", "name": "John Doe", "email": "john@example.com" },
//!     "token": "eyJhbGciOiJIUzI1NiIs..."
//!   }
//! }
//! ```

pub mod user_response;

pub use user_response::*;
