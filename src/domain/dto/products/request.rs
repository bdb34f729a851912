//! # 상품 요청 DTO
//!
//! 상품 생성/수정/검색을 위한 HTTP 요청 데이터 구조를 정의합니다.
//!
//! ## 검증 규칙
//!
//! - `title`, `description`: 비어 있지 않은 문자열
//! - `price`: 0보다 큰 수
//! - `stock`: 0 이상의 정수
//! - `category`: 참조할 카테고리의 ObjectId 문자열 (존재 여부는 검증하지 않음)
//! - `imageUrl`: 선택 사항, 값이 있으면 URL 형식
//!
//! 수정 요청은 모든 필드가 선택 사항이며, 전달된 필드에만
//! 생성과 동일한 규칙이 적용됩니다.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// 상품 생성 요청 DTO
///
/// # JSON 예제
///
/// ```json
/// {
///   "title": "Mechanical Keyboard",
///   "description": "87-key tenkeyless, brown switches",
///   "price": 89.99,
///   "stock": 42,
///   "category": "507f1f77bcf86cd799439011",
///   "imageUrl": "https://example.com/keyboard.jpg"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    /// 상품명
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,

    /// 상품 설명
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,

    /// 가격 — 0보다 커야 함
    #[validate(range(exclusive_min = 0.0, message = "price must be a positive number"))]
    pub price: f64,

    /// 재고 수량 — 0 이상
    #[validate(range(min = 0, message = "stock must be a non-negative integer"))]
    pub stock: i64,

    /// 카테고리 ObjectId 문자열
    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,

    /// 상품 이미지 URL (선택)
    #[serde(rename = "imageUrl", skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "imageUrl must be a valid URL"))]
    pub image_url: Option<String>,
}

/// 상품 부분 수정 요청 DTO
///
/// 모든 필드가 선택 사항입니다. 전달된 필드만 `$set`으로 반영되며,
/// 전달된 필드에는 생성 요청과 동일한 검증 규칙이 적용됩니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    /// 상품명
    #[validate(length(min = 1, message = "title cannot be empty"))]
    pub title: Option<String>,

    /// 상품 설명
    #[validate(length(min = 1, message = "description cannot be empty"))]
    pub description: Option<String>,

    /// 가격 — 0보다 커야 함
    #[validate(range(exclusive_min = 0.0, message = "price must be a positive number"))]
    pub price: Option<f64>,

    /// 재고 수량 — 0 이상
    #[validate(range(min = 0, message = "stock must be a non-negative integer"))]
    pub stock: Option<i64>,

    /// 카테고리 ObjectId 문자열
    #[validate(length(min = 1, message = "category cannot be empty"))]
    pub category: Option<String>,

    /// 상품 이미지 URL
    #[serde(rename = "imageUrl", skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "imageUrl must be a valid URL"))]
    pub image_url: Option<String>,
}

/// 상품 검색 쿼리 파라미터
///
/// 모든 파라미터는 선택 사항이며 AND 조건으로 결합됩니다.
///
/// - `name`: 상품명 부분 일치 (대소문자 무시)
/// - `category`: 카테고리 ObjectId 정확 일치
/// - `minPrice` / `maxPrice`: 가격 범위 (`>=` / `<=`)
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductSearchQuery {
    /// 상품명 부분 일치 검색어
    pub name: Option<String>,
    /// 카테고리 ObjectId 문자열
    pub category: Option<String>,
    /// 최소 가격 (이상)
    #[serde(rename = "minPrice")]
    pub min_price: Option<f64>,
    /// 최대 가격 (이하)
    #[serde(rename = "maxPrice")]
    pub max_price: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateProductRequest {
        CreateProductRequest {
            title: "Mechanical Keyboard".to_string(),
            description: "87-key tenkeyless".to_string(),
            price: 89.99,
            stock: 42,
            category: "507f1f77bcf86cd799439011".to_string(),
            image_url: None,
        }
    }

    #[test]
    fn test_valid_create_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_zero_price_is_rejected() {
        let mut request = valid_request();
        request.price = 0.0;
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let mut request = valid_request();
        request.price = -10.0;
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_negative_stock_is_rejected() {
        let mut request = valid_request();
        request.stock = -1;
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_zero_stock_is_allowed() {
        let mut request = valid_request();
        request.stock = 0;
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_empty_title_is_rejected() {
        let mut request = valid_request();
        request.title = String::new();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_invalid_image_url_is_rejected() {
        let mut request = valid_request();
        request.image_url = Some("not a url".to_string());
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_valid_image_url_is_accepted() {
        let mut request = valid_request();
        request.image_url = Some("https://example.com/keyboard.jpg".to_string());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_image_url_deserializes_from_camel_case() {
        let request: CreateProductRequest = serde_json::from_value(serde_json::json!({
            "title": "T",
            "description": "D",
            "price": 1.0,
            "stock": 1,
            "category": "507f1f77bcf86cd799439011",
            "imageUrl": "https://example.com/a.png"
        }))
        .unwrap();

        assert_eq!(
            request.image_url.as_deref(),
            Some("https://example.com/a.png")
        );
    }

    #[test]
    fn test_partial_update_with_single_field_passes() {
        let request = UpdateProductRequest {
            price: Some(10.0),
            ..Default::default()
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_partial_update_validates_present_fields() {
        let request = UpdateProductRequest {
            price: Some(-5.0),
            ..Default::default()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_empty_update_passes_validation() {
        assert!(UpdateProductRequest::default().validate().is_ok());
    }

    #[test]
    fn test_search_query_deserializes_camel_case_params() {
        let query: ProductSearchQuery =
            serde_json::from_value(serde_json::json!({ "minPrice": 10.0, "maxPrice": 20.0 }))
                .unwrap();

        assert_eq!(query.min_price, Some(10.0));
        assert_eq!(query.max_price, Some(20.0));
        assert!(query.name.is_none());
    }
}
