//! # Category HTTP Handlers
//!
//! 카테고리 리소스의 CRUD 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/categories` | 전체 목록 | 200 OK |
//! | `GET` | `/categories/{id}` | 단건 조회 | 200 OK |
//! | `POST` | `/categories` | 카테고리 생성 | 201 Created |
//! | `DELETE` | `/categories/{id}` | 카테고리 삭제 | 200 OK |

use actix_web::{delete, get, post, web, HttpResponse};
use serde_json::json;
use validator::Validate;

use crate::domain::dto::categories::request::CreateCategoryRequest;
use crate::domain::dto::categories::response::CategoryResponse;
use crate::errors::AppError;
use crate::services::categories::category_service::CategoryService;

/// 전체 카테고리 목록 조회 핸들러
#[utoipa::path(
    context_path = "/categories",
    tag = "Categories",
    responses(
        (status = 200, description = "전체 카테고리 목록", body = [CategoryResponse]),
        (status = 500, description = "서버 오류"),
    ),
)]
#[get("")]
pub async fn get_all_categories() -> Result<HttpResponse, AppError> {
    let service = CategoryService::instance();
    let categories = service.list_categories().await?;

    Ok(HttpResponse::Ok().json(categories))
}

/// 카테고리 단건 조회 핸들러
#[utoipa::path(
    context_path = "/categories",
    tag = "Categories",
    params(("category_id" = String, Path, description = "카테고리 ObjectId")),
    responses(
        (status = 200, description = "카테고리 정보", body = CategoryResponse),
        (status = 400, description = "잘못된 ID 형식"),
        (status = 404, description = "카테고리 없음"),
        (status = 500, description = "서버 오류"),
    ),
)]
#[get("/{category_id}")]
pub async fn get_category_by_id(category_id: web::Path<String>) -> Result<HttpResponse, AppError> {
    let service = CategoryService::instance();
    let category = service.get_category_by_id(&category_id).await?;

    Ok(HttpResponse::Ok().json(category))
}

/// 카테고리 생성 핸들러
#[utoipa::path(
    context_path = "/categories",
    tag = "Categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "생성된 카테고리", body = CategoryResponse),
        (status = 400, description = "검증 실패"),
        (status = 500, description = "서버 오류"),
    ),
)]
#[post("")]
pub async fn create_category(
    payload: web::Json<CreateCategoryRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = CategoryService::instance();
    let category = service.create_category(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(category))
}

/// 카테고리 삭제 핸들러
///
/// 이 카테고리를 참조 중인 상품은 정리하지 않으며, 해당 상품의
/// populate 결과는 `null`이 됩니다.
#[utoipa::path(
    context_path = "/categories",
    tag = "Categories",
    params(("category_id" = String, Path, description = "카테고리 ObjectId")),
    responses(
        (status = 200, description = "삭제 완료 메시지"),
        (status = 400, description = "잘못된 ID 형식"),
        (status = 404, description = "카테고리 없음"),
        (status = 500, description = "서버 오류"),
    ),
)]
#[delete("/{category_id}")]
pub async fn delete_category(category_id: web::Path<String>) -> Result<HttpResponse, AppError> {
    let service = CategoryService::instance();
    service.delete_category(&category_id).await?;

    Ok(HttpResponse::Ok().json(json!({ "message": "Category deleted successfully" })))
}
