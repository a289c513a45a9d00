//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스는 구체 타입이 아닌 [`ProductStore`](products::ProductStore),
//! [`UserStore`](users::UserStore) 트레이트에 의존합니다.
//! 운영 환경에서는 MongoDB 구현이, 테스트에서는 메모리 구현이 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{MongoUserRepository, UserStore};
//!
//! let users: Arc<dyn UserStore> = Arc::new(MongoUserRepository::new(database.clone()));
//! let user = users.find_by_email("user@example.com").await?;
//! ```

pub mod products;
pub mod users;
