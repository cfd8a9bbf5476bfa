//! # Configuration Module
//!
//! 사용자 관리 서비스의 설정 관리를 담당하는 모듈입니다.
//! Spring Framework의 `@Configuration` 클래스와 유사한 역할을 수행하며,
//! 환경 변수 기반의 설정값들을 프로세스 시작 시점에 한 번 로드합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, 환경 관련 설정
//! - [`auth_config`] - JWT 서명 키/TTL, 이메일 암호화 키 설정
//!
//! ## 설계 원칙
//!
//! ### 1. 시작 시점 검증 (Fail Fast)
//!
//! 잘못된 TTL 문자열, 32바이트가 아닌 암호화 키 등은 모두
//! `AppError::ConfigurationError`로 시작 단계에서 프로세스를 중단시킵니다.
//! 설정값은 시작 이후 절대 변경되지 않습니다.
//!
//! ### 2. 보안 우선 (Security First)
//!
//! - 민감한 정보는 환경 변수로만 제공
//! - 기본값은 개발 환경에서만 안전
//!
//! ## 필수 환경 변수
//!
//! ```bash
//! # JWT 설정
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_EXPIRES_IN="1h"          # s/m/h 단위 접미사
//!
//! # 이메일 암호화 키 (정확히 32바이트, AES-256)
//! export ENCRYPTION_KEY="0123456789abcdef0123456789abcdef"
//!
//! # MongoDB
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="user_service_dev"
//! ```
//!
//! ## Spring과의 비교
//!
//! | Spring | Rust (이 프로젝트) |
//! |--------|-------------------|
//! | `@Value("${jwt.secret}")` | `JwtConfig::from_env()?` |
//! | `@Value("${encryption.key}")` | `EncryptionConfig::from_env()?` |
//! | `application.yml` | `.env` 파일 |

pub mod auth_config;
pub mod data_config;

pub use auth_config::*;
pub use data_config::*;
