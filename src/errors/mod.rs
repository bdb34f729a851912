//! 애플리케이션 에러 처리 모듈
//!
//! [`AppError`](errors::AppError)를 통해 모든 핸들러/서비스/리포지토리 계층의
//! 에러를 단일 타입으로 통합하고, HTTP 응답으로의 변환을 담당합니다.

pub mod errors;

pub use errors::{json_error_handler, AppError, AppResult};
