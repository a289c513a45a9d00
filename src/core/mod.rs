//! # Core Module
//!
//! 애플리케이션 전역에서 공유되는 상태를 정의합니다.
//!
//! ## 모듈 구성
//!
//! ### [`state`] - 애플리케이션 상태
//! - **AppState**: 시작 시점에 조립된 서비스 묶음
//! - **명시적 주입**: `web::Data<AppState>`로 핸들러와 추출기에 전달
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! let state = web::Data::new(AppState::from_database(&config, database));
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .app_data(state.clone())
//!         .configure(configure_all_routes)
//! })
//! ```

pub mod state;

pub use state::*;
