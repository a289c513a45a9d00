//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 핵심 엔티티들을 정의합니다.
//!
//! - [`products`] - `products` 컬렉션 (읽기 전용 카탈로그)
//! - [`users`] - `users` 컬렉션 (로컬/Google 계정)
//!
//! 모든 엔티티는 MongoDB 필드명과 맞추기 위해 `camelCase`로 직렬화되며,
//! `_id`는 `ObjectId`로 매핑됩니다.

pub mod products;
pub mod users;

pub use products::*;
pub use users::*;
