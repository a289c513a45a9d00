//! # 상품 조회 조건 빌더
//!
//! 검증된 [`ProductFilter`]를 저장소 독립적인 [`ProductPredicate`]로 변환합니다.
//! MongoDB 리포지토리는 [`ProductPredicate::to_document`]를, 테스트용 메모리 저장소는
//! [`ProductPredicate::matches`]를 사용하므로 두 저장소가 같은 조건을 평가합니다.
//!
//! ## 조건 구성
//!
//! | 필터 | MongoDB 조건 |
//! |------|-------------|
//! | (항상) | `isActive: true` |
//! | `category` | `category: <값>` |
//! | `size` | `sizes: <값>` (배열 포함 여부) |
//! | `min_price` / `max_price` | `price: { $gte?, $lte? }` |
//! | `search` | `$text: { $search: <검색어> }` |
//!
//! 모든 조건은 AND로 결합되며, 빌더는 입력을 거부하지 않습니다.

use mongodb::bson::{doc, Document};
use crate::domain::dto::products::ProductFilter;
use crate::domain::entities::products::{Category, Product, Size};

/// 가격 범위. 한쪽 경계만 있을 수 있습니다.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PriceRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl PriceRange {
    pub fn contains(&self, price: f64) -> bool {
        self.min.is_none_or(|min| price >= min) && self.max.is_none_or(|max| price <= max)
    }
}

/// 상품 조회 조건 (모든 조건의 AND)
///
/// 활성 상품 조건은 항상 포함되므로 별도 필드로 두지 않습니다.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductPredicate {
    pub category: Option<Category>,
    pub size: Option<Size>,
    pub price: Option<PriceRange>,
    pub search: Option<String>,
}

impl ProductPredicate {
    /// MongoDB 필터 문서로 변환합니다.
    pub fn to_document(&self) -> Document {
        let mut query = doc! { "isActive": true };

        if let Some(category) = self.category {
            query.insert("category", category.as_str());
        }

        if let Some(size) = self.size {
            query.insert("sizes", size.as_str());
        }

        if let Some(range) = self.price {
            let mut price = Document::new();
            if let Some(min) = range.min {
                price.insert("$gte", min);
            }
            if let Some(max) = range.max {
                price.insert("$lte", max);
            }
            query.insert("price", price);
        }

        if let Some(search) = &self.search {
            query.insert("$text", doc! { "$search": search });
        }

        query
    }

    /// 메모리에서 조건을 평가합니다.
    ///
    /// 검색어는 MongoDB 텍스트 검색처럼 단어 단위, 대소문자 무시로 비교하며
    /// 검색어의 단어 중 하나라도 이름이나 설명에 있으면 일치로 봅니다.
    pub fn matches(&self, product: &Product) -> bool {
        if !product.is_active {
            return false;
        }
        if self.category.is_some_and(|category| product.category != category) {
            return false;
        }
        if self.size.is_some_and(|size| !product.sizes.contains(&size)) {
            return false;
        }
        if self.price.is_some_and(|range| !range.contains(product.price)) {
            return false;
        }
        match &self.search {
            Some(search) => text_matches(search, &[&product.name, &product.description]),
            None => true,
        }
    }
}

fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
}

fn text_matches(search: &str, fields: &[&str]) -> bool {
    let terms: Vec<String> = words(search).collect();
    fields
        .iter()
        .flat_map(|field| words(field))
        .any(|word| terms.iter().any(|term| word.starts_with(term.as_str())))
}

/// 검증된 필터로 상품 조회 조건을 만듭니다.
///
/// 페이지 정보(`page`, `limit`)는 조건에 포함되지 않습니다.
pub fn build_product_query(filter: &ProductFilter) -> ProductPredicate {
    let price = match (filter.min_price, filter.max_price) {
        (None, None) => None,
        (min, max) => Some(PriceRange { min, max }),
    };

    ProductPredicate {
        category: filter.category,
        size: filter.size,
        price,
        search: filter.search.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::DateTime;

    fn product(name: &str, category: Category, price: f64) -> Product {
        Product {
            id: None,
            name: name.to_string(),
            description: format!("{} description", name),
            price,
            image_url: "https://cdn.example.com/p.png".to_string(),
            category,
            sizes: vec![Size::M],
            stock: 1,
            is_active: true,
            created_at: DateTime::now(),
            updated_at: DateTime::now(),
        }
    }

    #[test]
    fn test_empty_filter_only_requires_active() {
        let predicate = build_product_query(&ProductFilter::default());
        assert_eq!(predicate.to_document(), doc! { "isActive": true });
    }

    #[test]
    fn test_full_filter_document() {
        let filter = ProductFilter {
            category: Some(Category::Women),
            size: Some(Size::M),
            min_price: Some(20.0),
            max_price: Some(60.0),
            search: Some("dress".to_string()),
            ..ProductFilter::default()
        };

        assert_eq!(
            build_product_query(&filter).to_document(),
            doc! {
                "isActive": true,
                "category": "Women",
                "sizes": "M",
                "price": { "$gte": 20.0, "$lte": 60.0 },
                "$text": { "$search": "dress" },
            }
        );
    }

    #[test]
    fn test_single_price_bound() {
        let filter = ProductFilter { max_price: Some(30.0), ..ProductFilter::default() };
        assert_eq!(
            build_product_query(&filter).to_document(),
            doc! { "isActive": true, "price": { "$lte": 30.0 } }
        );

        let filter = ProductFilter { min_price: Some(0.0), ..ProductFilter::default() };
        assert_eq!(
            build_product_query(&filter).to_document(),
            doc! { "isActive": true, "price": { "$gte": 0.0 } }
        );
    }

    #[test]
    fn test_matches_respects_every_condition() {
        let dress = product("Women Dress", Category::Women, 49.99);
        let shirt = product("Men T-Shirt", Category::Men, 19.99);

        let search = ProductPredicate { search: Some("dress".into()), ..Default::default() };
        assert!(search.matches(&dress));
        assert!(!search.matches(&shirt));

        let range = ProductPredicate {
            price: Some(PriceRange { min: Some(20.0), max: Some(60.0) }),
            ..Default::default()
        };
        assert!(range.matches(&dress));
        assert!(!range.matches(&shirt));

        let size = ProductPredicate { size: Some(Size::XL), ..Default::default() };
        assert!(!size.matches(&dress));

        let mut inactive = dress.clone();
        inactive.is_active = false;
        assert!(!ProductPredicate::default().matches(&inactive));
    }
}
