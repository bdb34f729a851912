//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! ActixWeb 프레임워크를 기반으로 구현되었습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근
//! ├─────────────────────────────────────────────┤
//!   Entities/DTO - 도메인 모델
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 처리 패턴
//!
//! 모든 핸들러는 동일한 흐름을 따릅니다:
//!
//! 1. 요청 본문 검증 (`payload.validate()`) — 실패 시 400
//! 2. 싱글톤 서비스 호출 (`Service::instance()`)
//! 3. 응답 상태/본문 구성 — 에러는 [`AppError`](crate::errors::AppError)의
//!    `ResponseError` 구현이 일괄 변환
//!
//! 각 핸들러의 `#[utoipa::path]` 어노테이션이 `/api-docs`의
//! OpenAPI 문서를 구성합니다.

pub mod categories;
pub mod products;
pub mod users;
