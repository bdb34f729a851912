//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스 연결과 HTTP 서버 바인딩 관련 설정을 관리합니다.
//! 모든 값은 환경 변수에서 읽으며, 로컬 개발에 안전한 기본값을 가집니다.

use std::env;

/// HTTP 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 호스트를 반환합니다.
    ///
    /// `HOST` 환경 변수, 기본값 `0.0.0.0`.
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// `PORT` 환경 변수, 기본값 3000. 파싱 실패 시에도 기본값을 사용합니다.
    pub fn port() -> u16 {
        env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(3000)
    }

    /// `host:port` 형태의 바인드 주소를 반환합니다.
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// 데이터베이스 연결 설정
pub struct DataConfig;

impl DataConfig {
    /// MongoDB 연결 URI를 반환합니다.
    ///
    /// `MONGODB_URI` 환경 변수, 기본값 `mongodb://localhost:27017`.
    pub fn mongodb_uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    /// 사용할 데이터베이스 이름을 반환합니다.
    ///
    /// `DATABASE_NAME` 환경 변수, 기본값 `catalog_dev`.
    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "catalog_dev".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_port_is_3000() {
        // PORT 미설정 환경 기준
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 3000);
        }
    }

    #[test]
    fn test_bind_address_joins_host_and_port() {
        let address = ServerConfig::bind_address();
        assert!(address.contains(':'));
    }
}
