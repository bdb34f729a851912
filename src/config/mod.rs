//! # Configuration Module
//!
//! 카탈로그 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스 및 서버 관련 설정
//!
//! ## 환경 변수
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="3000"
//!
//! # 데이터베이스 설정
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="catalog_dev"
//! ```

pub mod data_config;

pub use data_config::{DataConfig, ServerConfig};
