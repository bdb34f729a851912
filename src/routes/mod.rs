//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 리소스별로 그룹화하여 등록합니다.
//! 상품/사용자/카테고리 라우트와 헬스체크, 루트 리다이렉트,
//! 404 기본 핸들러를 포함합니다.
//!
//! # Features
//!
//! - 상품 CRUD + 검색 API 엔드포인트
//! - 사용자 / 카테고리 CRUD API 엔드포인트
//! - 헬스체크 엔드포인트
//! - `/` → `/api-docs` 리다이렉트
//! - 매칭되지 않은 경로에 대한 404 JSON 응답
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
/// `/products/search`처럼 고정 경로는 `{id}` 매칭보다 먼저 등록됩니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check / root redirect
    cfg.service(health_check);
    cfg.service(index);
    cfg.service(api_docs_redirect);

    // Resource routes
    configure_product_routes(cfg);
    configure_user_routes(cfg);
    configure_category_routes(cfg);

    // 매칭되지 않은 모든 경로
    cfg.default_service(web::route().to(not_found));
}

/// 상품 관련 라우트를 설정합니다
///
/// `GET /search`는 `GET /{id}`보다 먼저 등록되어야 `search`가
/// 식별자로 해석되지 않습니다.
fn configure_product_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/products")
            .service(handlers::products::search_products)
            .service(handlers::products::get_all_products)
            .service(handlers::products::get_product_by_id)
            .service(handlers::products::create_product)
            .service(handlers::products::update_product)
            .service(handlers::products::delete_product),
    );
}

/// 사용자 관련 라우트를 설정합니다
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(handlers::users::get_all_users)
            .service(handlers::users::get_user_by_id)
            .service(handlers::users::create_user)
            .service(handlers::users::delete_user),
    );
}

/// 카테고리 관련 라우트를 설정합니다
fn configure_category_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/categories")
            .service(handlers::categories::get_all_categories)
            .service(handlers::categories::get_category_by_id)
            .service(handlers::categories::create_category)
            .service(handlers::categories::delete_category),
    );
}

/// 루트 경로를 API 문서로 리다이렉트합니다
#[actix_web::get("/")]
async fn index() -> impl Responder {
    web::Redirect::to("/api-docs/index.html")
}

/// `/api-docs`를 Swagger UI 페이지로 리다이렉트합니다
///
/// Swagger UI 자원은 `/api-docs/{...}` 하위에서 제공되므로,
/// 꼬리 슬래시 없는 요청을 실제 페이지로 보냅니다.
#[actix_web::get("/api-docs")]
async fn api_docs_redirect() -> impl Responder {
    web::Redirect::to("/api-docs/index.html")
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:3000/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "catalog_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "docs": "Swagger UI"
        }
    }))
}

/// 매칭되지 않은 경로에 대한 404 기본 핸들러
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "message": "Route not found" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_health_check_reports_healthy() {
        let app = test::init_service(App::new().service(health_check)).await;

        let request = test::TestRequest::get().uri("/health").to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), actix_web::http::StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_not_found_returns_404_with_message() {
        let response = not_found().await;
        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_root_redirects_to_api_docs() {
        let app = test::init_service(App::new().service(index)).await;

        let request = test::TestRequest::get().uri("/").to_request();
        let response = test::call_service(&app, request).await;

        assert!(response.status().is_redirection());
        let location = response
            .headers()
            .get(actix_web::http::header::LOCATION)
            .unwrap();
        assert_eq!(location, "/api-docs/index.html");
    }
}
