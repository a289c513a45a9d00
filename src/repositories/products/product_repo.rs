//! # 상품 리포지토리 구현
//!
//! `products` 컬렉션에 대한 읽기 전용 데이터 액세스 계층입니다.
//!
//! ## 인덱스
//!
//! | 이름 | 키 | 목적 |
//! |------|----|------|
//! | `product_text` | `name: text, description: text` | `$text` 검색 |
//! | `category_price` | `category: 1, price: 1` | 카테고리 + 가격 범위 필터 |
//! | `created_at_desc` | `createdAt: -1` | 최신순 정렬 |

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Bson},
    options::IndexOptions,
    Collection, IndexModel,
};
use crate::{
    db::Database,
    domain::entities::products::Product,
    errors::AppError,
    services::products::query_builder::ProductPredicate,
};

pub const PRODUCTS_COLLECTION: &str = "products";

/// 한 페이지 조회 범위
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageWindow {
    pub skip: u64,
    pub limit: u64,
}

/// 상품 저장소 인터페이스
///
/// 목록 조회 결과는 항상 `createdAt` 내림차순(최신순)으로 정렬됩니다.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// 조건에 맞는 상품 한 페이지를 조회합니다.
    async fn find(&self, predicate: &ProductPredicate, window: PageWindow) -> Result<Vec<Product>, AppError>;

    /// 조건에 맞는 전체 상품 수를 조회합니다.
    async fn count(&self, predicate: &ProductPredicate) -> Result<u64, AppError>;

    /// ID로 상품을 조회합니다. 형식이 잘못된 ID는 `Ok(None)`입니다.
    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, AppError>;

    /// 활성 상품의 카테고리 목록(중복 제거)을 조회합니다.
    async fn distinct_categories(&self) -> Result<Vec<String>, AppError>;
}

/// MongoDB 상품 리포지토리
#[derive(Clone)]
pub struct MongoProductRepository {
    db: Arc<Database>,
}

impl MongoProductRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Product> {
        self.db.get_database().collection::<Product>(PRODUCTS_COLLECTION)
    }

    /// 상품 컬렉션 인덱스를 생성합니다.
    ///
    /// 애플리케이션 시작 시 한 번 호출됩니다. 이미 존재하는 인덱스는 그대로 유지됩니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let text_index = IndexModel::builder()
            .keys(doc! { "name": "text", "description": "text" })
            .options(IndexOptions::builder()
                .name("product_text".to_string())
                .build())
            .build();

        let category_price_index = IndexModel::builder()
            .keys(doc! { "category": 1, "price": 1 })
            .options(IndexOptions::builder()
                .name("category_price".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "createdAt": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([text_index, category_price_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl ProductStore for MongoProductRepository {
    async fn find(&self, predicate: &ProductPredicate, window: PageWindow) -> Result<Vec<Product>, AppError> {
        let limit = i64::try_from(window.limit)
            .map_err(|_| AppError::InternalError(format!("limit out of range: {}", window.limit)))?;

        let cursor = self.collection()
            .find(predicate.to_document())
            .sort(doc! { "createdAt": -1 })
            .skip(window.skip)
            .limit(limit)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn count(&self, predicate: &ProductPredicate) -> Result<u64, AppError> {
        self.collection()
            .count_documents(predicate.to_document())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, AppError> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn distinct_categories(&self) -> Result<Vec<String>, AppError> {
        let values = self.collection()
            .distinct("category", doc! { "isActive": true })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(values
            .into_iter()
            .filter_map(|value| match value {
                Bson::String(category) => Some(category),
                _ => None,
            })
            .collect())
    }
}
