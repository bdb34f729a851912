//! 상품 응답 DTO
//!
//! 목록/단건 조회는 카테고리를 문서로 치환(populate)한
//! [`PopulatedProductResponse`]를, 생성/수정은 참조 ID를 그대로 담은
//! [`ProductResponse`]를 반환합니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::dto::categories::response::CategoryResponse;
use crate::domain::entities::category::Category;
use crate::domain::entities::product::Product;

/// 상품 응답 DTO — 카테고리는 ObjectId 문자열
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub stock: i64,
    /// 카테고리 ObjectId 문자열
    pub category: String,
    #[serde(rename = "imageUrl", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        let Product {
            id,
            title,
            description,
            price,
            stock,
            category,
            image_url,
            created_at,
            updated_at,
        } = product;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            title,
            description,
            price,
            stock,
            category: category.to_hex(),
            image_url,
            created_at,
            updated_at,
        }
    }
}

/// 상품 응답 DTO — 카테고리 문서 포함 (populate)
///
/// 참조가 더 이상 존재하지 않는 카테고리를 가리키는 경우 `category`는
/// `null`로 직렬화됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PopulatedProductResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub stock: i64,
    /// 치환된 카테고리 문서 (참조 대상이 없으면 null)
    pub category: Option<CategoryResponse>,
    #[serde(rename = "imageUrl", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PopulatedProductResponse {
    /// 엔티티와 조회된 카테고리로 응답을 구성합니다.
    pub fn new(product: Product, category: Option<Category>) -> Self {
        let Product {
            id,
            title,
            description,
            price,
            stock,
            category: _,
            image_url,
            created_at,
            updated_at,
        } = product;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            title,
            description,
            price,
            stock,
            category: category.map(CategoryResponse::from),
            image_url,
            created_at,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    fn sample_product() -> Product {
        let mut product = Product::new(
            "Mechanical Keyboard".to_string(),
            "87-key tenkeyless".to_string(),
            89.99,
            42,
            ObjectId::parse_str("507f1f77bcf86cd799439011").unwrap(),
            None,
        );
        product.id = Some(ObjectId::parse_str("507f191e810c19729de860ea").unwrap());
        product
    }

    #[test]
    fn test_response_exposes_hex_ids() {
        let response = ProductResponse::from(sample_product());

        assert_eq!(response.id, "507f191e810c19729de860ea");
        assert_eq!(response.category, "507f1f77bcf86cd799439011");
    }

    #[test]
    fn test_populated_response_embeds_category() {
        let category = Category::new("Peripherals".to_string(), "Desk gear".to_string());
        let response = PopulatedProductResponse::new(sample_product(), Some(category));

        assert_eq!(response.category.as_ref().unwrap().name, "Peripherals");
    }

    #[test]
    fn test_dangling_category_serializes_to_null() {
        let response = PopulatedProductResponse::new(sample_product(), None);
        let json = serde_json::to_value(&response).unwrap();

        assert!(json.get("category").unwrap().is_null());
    }

    #[test]
    fn test_absent_image_url_is_omitted() {
        let response = ProductResponse::from(sample_product());
        let json = serde_json::to_value(&response).unwrap();

        assert!(json.get("imageUrl").is_none());
    }
}
