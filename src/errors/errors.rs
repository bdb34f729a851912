//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 카탈로그 백엔드 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! 모든 에러는 `{"message": "..."}` 형태의 JSON 본문과 함께
//! 적절한 HTTP 상태 코드로 변환됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn get_product(id: &str) -> Result<Product, AppError> {
//!     let product = product_repo.find_by_id(id).await?
//!         .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;
//!     Ok(product)
//! }
//! ```

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse};
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request) — 메시지는 검증기 출력 그대로 전달
    #[error("{0}")]
    ValidationError(String),

    /// 잘못된 식별자 형식 (400 Bad Request) — 조회 시도 전에 차단
    #[error("{0}")]
    InvalidId(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("{0}")]
    NotFound(String),

    /// 이메일 중복 에러 (400 Bad Request)
    #[error("{0}")]
    DuplicateEmail(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_)
            | AppError::InvalidId(_)
            | AppError::DuplicateEmail(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 상태 코드와 `{"message": ...}` JSON 본문으로 변환합니다.
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "message": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// JSON 본문 파싱 실패를 400 JSON 응답으로 변환하는 핸들러
///
/// actix 기본 동작은 plain-text 400을 반환하므로, 나머지 에러 응답과
/// 동일한 `{"message": ...}` 형태를 유지하기 위해 `JsonConfig`에 등록합니다.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = err.to_string();
    actix_web::error::InternalError::from_response(
        err,
        HttpResponse::BadRequest().json(serde_json::json!({ "message": message })),
    )
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("price must be a positive number".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_invalid_id_error_response() {
        let error = AppError::InvalidId("Invalid product ID".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("Product not found".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_duplicate_email_maps_to_bad_request() {
        let error = AppError::DuplicateEmail("Email already exists".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_database_error_response() {
        let error = AppError::DatabaseError("connection reset".to_string());
        let response = error.error_response();

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_client_facing_messages_pass_through() {
        let error = AppError::NotFound("User not found".to_string());
        assert_eq!(error.to_string(), "User not found");

        let error = AppError::DuplicateEmail("Email already exists".to_string());
        assert_eq!(error.to_string(), "Email already exists");
    }
}
