//! 인증된 요청 컨텍스트

pub mod current_user;

pub use current_user::CurrentUser;
