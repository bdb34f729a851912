//! # Product HTTP Handlers
//!
//! 상품 리소스의 CRUD 및 검색 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/products` | 전체 목록 (카테고리 포함) | 200 OK |
//! | `GET` | `/products/search` | 조건 검색 | 200 OK |
//! | `GET` | `/products/{id}` | 단건 조회 | 200 OK |
//! | `POST` | `/products` | 상품 생성 | 201 Created |
//! | `PUT` | `/products/{id}` | 부분 수정 | 200 OK |
//! | `DELETE` | `/products/{id}` | 상품 삭제 | 200 OK |

use actix_web::{delete, get, post, put, web, HttpResponse};
use serde_json::json;
use validator::Validate;

use crate::domain::dto::products::request::{
    CreateProductRequest, ProductSearchQuery, UpdateProductRequest,
};
use crate::domain::dto::products::response::{PopulatedProductResponse, ProductResponse};
use crate::errors::AppError;
use crate::services::products::product_service::ProductService;

/// 전체 상품 목록 조회 핸들러
///
/// 카테고리를 문서로 치환하여 반환합니다. 페이지네이션은 없습니다.
#[utoipa::path(
    context_path = "/products",
    tag = "Products",
    responses(
        (status = 200, description = "전체 상품 목록", body = [PopulatedProductResponse]),
        (status = 500, description = "서버 오류"),
    ),
)]
#[get("")]
pub async fn get_all_products() -> Result<HttpResponse, AppError> {
    let service = ProductService::instance();
    let products = service.list_products().await?;

    Ok(HttpResponse::Ok().json(products))
}

/// 상품 검색 핸들러
///
/// `name`(부분 일치) / `category`(정확 일치) / `minPrice` / `maxPrice`
/// 쿼리 파라미터를 AND 조건으로 결합합니다.
#[utoipa::path(
    context_path = "/products",
    tag = "Products",
    params(ProductSearchQuery),
    responses(
        (status = 200, description = "검색 결과 목록", body = [PopulatedProductResponse]),
        (status = 400, description = "잘못된 카테고리 ID 형식"),
        (status = 500, description = "서버 오류"),
    ),
)]
#[get("/search")]
pub async fn search_products(
    query: web::Query<ProductSearchQuery>,
) -> Result<HttpResponse, AppError> {
    let service = ProductService::instance();
    let products = service.search_products(query.into_inner()).await?;

    Ok(HttpResponse::Ok().json(products))
}

/// 상품 단건 조회 핸들러
///
/// ID 형식 검증 후 조회하며, 카테고리를 문서로 치환하여 반환합니다.
#[utoipa::path(
    context_path = "/products",
    tag = "Products",
    params(("product_id" = String, Path, description = "상품 ObjectId")),
    responses(
        (status = 200, description = "상품 정보", body = PopulatedProductResponse),
        (status = 400, description = "잘못된 ID 형식"),
        (status = 404, description = "상품 없음"),
        (status = 500, description = "서버 오류"),
    ),
)]
#[get("/{product_id}")]
pub async fn get_product_by_id(product_id: web::Path<String>) -> Result<HttpResponse, AppError> {
    let service = ProductService::instance();
    let product = service.get_product(&product_id).await?;

    Ok(HttpResponse::Ok().json(product))
}

/// 상품 생성 핸들러
///
/// # 요청 본문
///
/// ```json
/// {
///   "title": "Mechanical Keyboard",
///   "description": "87-key tenkeyless",
///   "price": 89.99,
///   "stock": 42,
///   "category": "507f1f77bcf86cd799439011"
/// }
/// ```
#[utoipa::path(
    context_path = "/products",
    tag = "Products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "생성된 상품", body = ProductResponse),
        (status = 400, description = "검증 실패"),
        (status = 500, description = "서버 오류"),
    ),
)]
#[post("")]
pub async fn create_product(
    payload: web::Json<CreateProductRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = ProductService::instance();
    let product = service.create_product(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(product))
}

/// 상품 부분 수정 핸들러
///
/// 모든 필드가 선택 사항이며, 전달된 필드에만 생성과 동일한
/// 검증 규칙이 적용됩니다.
#[utoipa::path(
    context_path = "/products",
    tag = "Products",
    params(("product_id" = String, Path, description = "상품 ObjectId")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "수정된 상품", body = ProductResponse),
        (status = 400, description = "잘못된 ID 형식 또는 검증 실패"),
        (status = 404, description = "상품 없음"),
        (status = 500, description = "서버 오류"),
    ),
)]
#[put("/{product_id}")]
pub async fn update_product(
    product_id: web::Path<String>,
    payload: web::Json<UpdateProductRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사 (부분 필드)
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = ProductService::instance();
    let product = service
        .update_product(&product_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(product))
}

/// 상품 삭제 핸들러
#[utoipa::path(
    context_path = "/products",
    tag = "Products",
    params(("product_id" = String, Path, description = "상품 ObjectId")),
    responses(
        (status = 200, description = "삭제 완료 메시지"),
        (status = 400, description = "잘못된 ID 형식"),
        (status = 404, description = "상품 없음"),
        (status = 500, description = "서버 오류"),
    ),
)]
#[delete("/{product_id}")]
pub async fn delete_product(product_id: web::Path<String>) -> Result<HttpResponse, AppError> {
    let service = ProductService::instance();
    service.delete_product(&product_id).await?;

    Ok(HttpResponse::Ok().json(json!({ "message": "Product deleted successfully" })))
}
