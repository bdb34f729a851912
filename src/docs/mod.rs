//! OpenAPI 문서 구성 모듈
//!
//! `/api-docs`에서 제공되는 Swagger UI의 OpenAPI 문서를 정의합니다.
//! 각 핸들러의 `#[utoipa::path]` 어노테이션을 모아 하나의 문서로 구성합니다.

use utoipa::OpenApi;

use crate::domain::dto::categories::request::CreateCategoryRequest;
use crate::domain::dto::categories::response::CategoryResponse;
use crate::domain::dto::products::request::{CreateProductRequest, UpdateProductRequest};
use crate::domain::dto::products::response::{PopulatedProductResponse, ProductResponse};
use crate::domain::dto::users::request::CreateUserRequest;
use crate::domain::dto::users::response::UserResponse;
use crate::domain::entities::user::Role;
use crate::handlers::{categories, products, users};

/// 카탈로그 서비스 OpenAPI 문서
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog Service API",
        version = "0.1.0",
        description = "상품/사용자/카테고리 카탈로그 REST API",
        license(name = "MIT OR Apache-2.0"),
    ),
    paths(
        // Product endpoints
        products::get_all_products,
        products::search_products,
        products::get_product_by_id,
        products::create_product,
        products::update_product,
        products::delete_product,
        // User endpoints
        users::get_all_users,
        users::get_user_by_id,
        users::create_user,
        users::delete_user,
        // Category endpoints
        categories::get_all_categories,
        categories::get_category_by_id,
        categories::create_category,
        categories::delete_category,
    ),
    components(
        schemas(
            // Product types
            CreateProductRequest,
            UpdateProductRequest,
            ProductResponse,
            PopulatedProductResponse,
            // User types
            CreateUserRequest,
            UserResponse,
            Role,
            // Category types
            CreateCategoryRequest,
            CategoryResponse,
        )
    ),
    tags(
        (name = "Products", description = "상품 카탈로그 관리"),
        (name = "Users", description = "사용자 계정 관리"),
        (name = "Categories", description = "상품 카테고리 관리"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_document_lists_all_paths() {
        let doc = ApiDoc::openapi();
        let paths = doc.paths.paths;

        assert!(paths.contains_key("/products"));
        assert!(paths.contains_key("/products/search"));
        assert!(paths.contains_key("/products/{product_id}"));
        assert!(paths.contains_key("/users"));
        assert!(paths.contains_key("/users/{user_id}"));
        assert!(paths.contains_key("/categories"));
        assert!(paths.contains_key("/categories/{category_id}"));
    }
}
