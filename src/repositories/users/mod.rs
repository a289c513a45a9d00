//! 사용자 데이터 액세스 계층
//!
//! [`UserStore`](user_repo::UserStore) 트레이트와 MongoDB 구현을 제공합니다.

pub mod user_repo;
#[cfg(test)]
pub mod memory;

pub use user_repo::*;
