//! 카탈로그 서비스 백엔드
//!
//! Rust 기반의 상품 카탈로그 REST API 서비스입니다.
//! 상품/사용자/카테고리 리소스의 CRUD와 상품 검색,
//! Swagger 기반 API 문서를 제공합니다.
//!
//! # Features
//!
//! - **상품 관리**: 목록/조회/생성/부분 수정/삭제, 조건 검색
//! - **카테고리 populate**: 상품 조회 시 카테고리 문서 치환
//! - **사용자 관리**: 계정 생성(이메일 중복 검사), 조회, 삭제
//! - **싱글톤 DI**: 레지스트리 기반 의존성 주입
//! - **MongoDB**: 카탈로그 데이터 영구 저장
//! - **Swagger UI**: `/api-docs` 대화형 API 문서
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use catalog_service_backend::services::products::ProductService;
//!
//! // 싱글톤 서비스 인스턴스 가져오기
//! let product_service = ProductService::instance();
//!
//! // 상품 생성 및 조회
//! let created = product_service.create_product(request).await?;
//! let products = product_service.list_products().await?;
//! ```

pub mod config;
pub mod core;
pub mod db;
pub mod docs;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
