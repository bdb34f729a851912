//! # 상품 관리 서비스 구현
//!
//! 상품의 전체 생명주기(목록/조회/생성/수정/삭제/검색)를 관리하는
//! 비즈니스 로직을 구현합니다.
//!
//! ## 카테고리 populate
//!
//! 목록/단건/검색 응답은 상품의 카테고리 참조를 실제 카테고리 문서로
//! 치환하여 반환합니다. 조인은 카테고리 ID를 모아 `$in` 일괄 조회 한 번으로
//! 수행합니다. 참조 대상이 삭제된 경우 해당 상품의 카테고리는 `null`입니다.

use std::collections::HashMap;
use std::sync::Arc;

use mongodb::bson::{doc, oid::ObjectId, Document};

use crate::core::registry::{Service, ServiceLocator, ServiceRegistration};
use crate::domain::dto::products::request::{
    CreateProductRequest, ProductSearchQuery, UpdateProductRequest,
};
use crate::domain::dto::products::response::{PopulatedProductResponse, ProductResponse};
use crate::domain::entities::category::Category;
use crate::domain::entities::product::Product;
use crate::errors::AppError;
use crate::repositories::categories::category_repo::CategoryRepository;
use crate::repositories::products::product_repo::ProductRepository;

/// 상품 관리 비즈니스 로직 서비스
pub struct ProductService {
    /// 상품 데이터 액세스 리포지토리
    product_repo: Arc<ProductRepository>,
    /// 카테고리 populate에 사용하는 리포지토리
    category_repo: Arc<CategoryRepository>,
}

inventory::submit! {
    ServiceRegistration {
        name: "product_service",
        constructor: || Box::new(ProductService::create()),
    }
}

impl ProductService {
    /// 레지스트리 생성자 — 의존성을 해결하여 새 인스턴스를 만듭니다.
    fn create() -> Arc<Self> {
        Arc::new(Self {
            product_repo: ProductRepository::instance(),
            category_repo: CategoryRepository::instance(),
        })
    }

    /// 싱글톤 인스턴스를 가져옵니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<Self>()
    }

    /// 전체 상품 목록 조회 (카테고리 populate)
    pub async fn list_products(&self) -> Result<Vec<PopulatedProductResponse>, AppError> {
        let products = self.product_repo.find_all().await?;
        self.populate(products).await
    }

    /// ID로 상품 조회 (카테고리 populate)
    ///
    /// * `Err(AppError::InvalidId)` - 잘못된 ID 형식
    /// * `Err(AppError::NotFound)` - 해당 상품 없음
    pub async fn get_product(&self, id: &str) -> Result<PopulatedProductResponse, AppError> {
        let product = self
            .product_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

        let category = self
            .category_repo
            .find_by_ids(&[product.category])
            .await?
            .pop();

        Ok(PopulatedProductResponse::new(product, category))
    }

    /// 새 상품 생성
    ///
    /// `category`는 ObjectId 형식만 검사하며, 실제 카테고리 존재 여부는
    /// 확인하지 않습니다. 응답의 카테고리는 참조 ID 그대로입니다.
    pub async fn create_product(
        &self,
        request: CreateProductRequest,
    ) -> Result<ProductResponse, AppError> {
        let category = parse_category_ref(&request.category)?;

        let product = Product::new(
            request.title,
            request.description,
            request.price,
            request.stock,
            category,
            request.image_url,
        );

        let created = self.product_repo.insert(product).await?;

        Ok(ProductResponse::from(created))
    }

    /// 상품 부분 수정
    ///
    /// 전달된 필드만 `$set`으로 반영하고 `updated_at`을 갱신합니다.
    pub async fn update_product(
        &self,
        id: &str,
        request: UpdateProductRequest,
    ) -> Result<ProductResponse, AppError> {
        let update_doc = build_update_document(&request)?;

        let updated = self
            .product_repo
            .update(id, update_doc)
            .await?
            .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

        Ok(ProductResponse::from(updated))
    }

    /// 상품 삭제
    ///
    /// 두 번째 삭제 요청은 저장소 상태를 바꾸지 않고 404로 응답됩니다.
    pub async fn delete_product(&self, id: &str) -> Result<(), AppError> {
        let deleted = self.product_repo.delete(id).await?;

        if !deleted {
            return Err(AppError::NotFound("Product not found".to_string()));
        }

        Ok(())
    }

    /// 조건 검색 (카테고리 populate)
    ///
    /// 쿼리 파라미터로부터 필터를 구성합니다. [`build_search_filter`] 참조.
    pub async fn search_products(
        &self,
        query: ProductSearchQuery,
    ) -> Result<Vec<PopulatedProductResponse>, AppError> {
        let filter = build_search_filter(&query)?;
        let products = self.product_repo.find_by_filter(filter).await?;
        self.populate(products).await
    }

    /// 카테고리 참조를 문서로 치환합니다.
    ///
    /// 상품들의 카테고리 ID를 모아 한 번의 `$in` 조회로 해결합니다.
    async fn populate(
        &self,
        products: Vec<Product>,
    ) -> Result<Vec<PopulatedProductResponse>, AppError> {
        let mut category_ids: Vec<ObjectId> = products.iter().map(|p| p.category).collect();
        category_ids.sort();
        category_ids.dedup();

        let categories = self.category_repo.find_by_ids(&category_ids).await?;

        let by_id: HashMap<ObjectId, Category> = categories
            .into_iter()
            .filter_map(|category| category.id.map(|id| (id, category)))
            .collect();

        Ok(products
            .into_iter()
            .map(|product| {
                let category = by_id.get(&product.category).cloned();
                PopulatedProductResponse::new(product, category)
            })
            .collect())
    }
}

impl Service for ProductService {
    fn name(&self) -> &str {
        "product_service"
    }
}

/// 카테고리 참조 문자열을 ObjectId로 파싱합니다.
///
/// 형식 오류는 검증 실패(400)로 처리됩니다 — 참조 대상의 존재 여부와는
/// 무관합니다.
fn parse_category_ref(category: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(category)
        .map_err(|_| AppError::ValidationError("category must be a valid category ID".to_string()))
}

/// 검색 쿼리 파라미터에서 MongoDB 필터 문서를 구성합니다.
///
/// - `name` → `title` 대소문자 무시 부분 일치 (`$regex`, `i`)
/// - `category` → ObjectId 정확 일치 (형식 오류 시 400)
/// - `minPrice` / `maxPrice` → `price`의 `$gte` / `$lte` 범위
pub fn build_search_filter(query: &ProductSearchQuery) -> Result<Document, AppError> {
    let mut filter = Document::new();

    if let Some(name) = &query.name {
        filter.insert("title", doc! { "$regex": name.as_str(), "$options": "i" });
    }

    if let Some(category) = &query.category {
        let object_id = ObjectId::parse_str(category)
            .map_err(|_| AppError::InvalidId("Invalid category ID".to_string()))?;
        filter.insert("category", object_id);
    }

    let mut price = Document::new();
    if let Some(min_price) = query.min_price {
        price.insert("$gte", min_price);
    }
    if let Some(max_price) = query.max_price {
        price.insert("$lte", max_price);
    }
    if !price.is_empty() {
        filter.insert("price", price);
    }

    Ok(filter)
}

/// 부분 수정 요청에서 `$set` 문서를 구성합니다.
///
/// 전달된 필드만 포함하며 `updated_at`은 항상 갱신됩니다.
pub fn build_update_document(request: &UpdateProductRequest) -> Result<Document, AppError> {
    let mut update = Document::new();

    if let Some(title) = &request.title {
        update.insert("title", title.as_str());
    }
    if let Some(description) = &request.description {
        update.insert("description", description.as_str());
    }
    if let Some(price) = request.price {
        update.insert("price", price);
    }
    if let Some(stock) = request.stock {
        update.insert("stock", stock);
    }
    if let Some(category) = &request.category {
        update.insert("category", parse_category_ref(category)?);
    }
    if let Some(image_url) = &request.image_url {
        update.insert("image_url", image_url.as_str());
    }

    update.insert("updated_at", chrono::Utc::now().to_rfc3339());

    Ok(update)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::Bson;

    #[test]
    fn test_empty_query_builds_empty_filter() {
        let filter = build_search_filter(&ProductSearchQuery::default()).unwrap();
        assert!(filter.is_empty());
    }

    #[test]
    fn test_name_builds_case_insensitive_regex() {
        let query = ProductSearchQuery {
            name: Some("keyboard".to_string()),
            ..Default::default()
        };

        let filter = build_search_filter(&query).unwrap();
        let title = filter.get_document("title").unwrap();

        assert_eq!(title.get_str("$regex").unwrap(), "keyboard");
        assert_eq!(title.get_str("$options").unwrap(), "i");
    }

    #[test]
    fn test_price_range_builds_gte_and_lte() {
        let query = ProductSearchQuery {
            min_price: Some(10.0),
            max_price: Some(20.0),
            ..Default::default()
        };

        let filter = build_search_filter(&query).unwrap();
        let price = filter.get_document("price").unwrap();

        assert_eq!(price.get_f64("$gte").unwrap(), 10.0);
        assert_eq!(price.get_f64("$lte").unwrap(), 20.0);
    }

    #[test]
    fn test_min_price_alone_has_no_upper_bound() {
        let query = ProductSearchQuery {
            min_price: Some(10.0),
            ..Default::default()
        };

        let filter = build_search_filter(&query).unwrap();
        let price = filter.get_document("price").unwrap();

        assert!(price.get("$gte").is_some());
        assert!(price.get("$lte").is_none());
    }

    #[test]
    fn test_category_filter_uses_object_id() {
        let query = ProductSearchQuery {
            category: Some("507f1f77bcf86cd799439011".to_string()),
            ..Default::default()
        };

        let filter = build_search_filter(&query).unwrap();

        assert!(matches!(
            filter.get("category"),
            Some(Bson::ObjectId(_))
        ));
    }

    #[test]
    fn test_malformed_category_filter_is_rejected() {
        let query = ProductSearchQuery {
            category: Some("electronics".to_string()),
            ..Default::default()
        };

        assert!(matches!(
            build_search_filter(&query),
            Err(AppError::InvalidId(_))
        ));
    }

    #[test]
    fn test_update_document_contains_only_given_fields() {
        let request = UpdateProductRequest {
            price: Some(19.99),
            ..Default::default()
        };

        let update = build_update_document(&request).unwrap();

        assert_eq!(update.get_f64("price").unwrap(), 19.99);
        assert!(update.get("title").is_none());
        assert!(update.get("stock").is_none());
        // updated_at은 항상 갱신
        assert!(update.get_str("updated_at").is_ok());
    }

    #[test]
    fn test_update_document_rejects_malformed_category() {
        let request = UpdateProductRequest {
            category: Some("not-an-id".to_string()),
            ..Default::default()
        };

        assert!(matches!(
            build_update_document(&request),
            Err(AppError::ValidationError(_))
        ));
    }
}
