//! # Data & Server Configuration Module
//!
//! 서버 바인딩, MongoDB 연결, 실행 환경 구분 등
//! 데이터 계층과 관련된 설정을 담당합니다.

use std::env;

/// 애플리케이션 실행 환경
///
/// Spring Profile과 유사하게 개발/테스트/운영 환경을 구분합니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl Environment {
    /// 현재 실행 환경을 반환합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 읽으며, 설정되지 않은 경우
    /// 안전한 기본값으로 `Production`을 사용합니다.
    pub fn current() -> Self {
        Self::parse(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" => Environment::Test,
            _ => Environment::Production,
        }
    }
}

/// HTTP 서버 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 호스트 (기본값: "0.0.0.0")
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// 서버가 바인딩할 포트 (기본값: 8080)
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }
}

/// MongoDB 연결 설정
#[derive(Clone)]
pub struct DatabaseConfig {
    /// MongoDB 연결 URI
    pub uri: String,
    /// 사용할 데이터베이스 이름
    pub database_name: String,
}

impl DatabaseConfig {
    /// 환경 변수에서 데이터베이스 설정을 로드합니다.
    ///
    /// 개발 편의를 위해 로컬 기본값을 제공하며,
    /// 운영 환경에서는 반드시 환경 변수로 지정해야 합니다.
    pub fn from_env() -> Self {
        Self {
            uri: env::var("MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database_name: env::var("DATABASE_NAME")
                .unwrap_or_else(|_| "user_service_dev".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parsing() {
        assert_eq!(Environment::parse("dev"), Environment::Development);
        assert_eq!(Environment::parse("Development"), Environment::Development);
        assert_eq!(Environment::parse("test"), Environment::Test);
        // 알 수 없는 값은 안전한 기본값인 운영 환경으로 처리합니다
        assert_eq!(Environment::parse("staging"), Environment::Production);
    }
}
