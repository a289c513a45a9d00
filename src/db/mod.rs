//! Database Connection Management Module
//!
//! MongoDB 데이터베이스 연결 관리를 담당하는 모듈입니다.
//! 연결 정보는 [`DatabaseConfig`]로 주입되며, 리포지토리는 `Arc<Database>`를 공유합니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::config::{DatabaseConfig, Environment};
//! use crate::db::Database;
//!
//! let config = DatabaseConfig::from_env(&Environment::current());
//! let database = Arc::new(Database::connect(&config).await?);
//! let products = MongoProductRepository::new(database.clone());
//! ```

use mongodb::{Client, options::ClientOptions};
use log::info;
use crate::config::DatabaseConfig;

const APP_NAME: &str = "storefront_backend";

/// MongoDB 데이터베이스 연결 래퍼
///
/// MongoDB 클라이언트는 내부적으로 연결 풀을 관리하므로 복제 비용이 낮습니다.
#[derive(Clone)]
pub struct Database {
    /// MongoDB 클라이언트 인스턴스
    client: Client,
    /// 사용할 데이터베이스 이름
    database_name: String,
}

impl Database {
    /// 새 MongoDB 데이터베이스 연결을 생성합니다.
    ///
    /// 클라이언트를 초기화한 뒤 `ping` 명령으로 연결 상태를 검증합니다.
    ///
    /// # Errors
    ///
    /// * URI 파싱 실패, 서버 선택 실패, `ping` 실패 시 `mongodb::error::Error`
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, mongodb::error::Error> {
        // MongoDB 클라이언트 옵션 파싱
        let mut client_options = ClientOptions::parse(&config.uri).await?;

        // 애플리케이션 이름 설정 (서버 로그에서 연결 출처 식별)
        client_options.app_name = Some(APP_NAME.to_string());

        let client = Client::with_options(client_options)?;

        // 연결 테스트
        client
            .database(&config.database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", config.database_name);

        Ok(Self {
            client,
            database_name: config.database_name.clone(),
        })
    }

    /// MongoDB 데이터베이스 인스턴스를 반환합니다.
    ///
    /// ## 사용 예제
    /// ```rust,ignore
    /// let products = database.get_database().collection::<Product>("products");
    /// ```
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 데이터베이스 이름을 반환합니다.
    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
