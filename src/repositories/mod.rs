//! # Repository Layer
//!
//! 데이터 액세스 계층입니다. 각 리포지토리는 trait으로 추상화되며,
//! MongoDB 구현체와 테스트/로컬 개발용 인메모리 구현체를 제공합니다.
//! 서비스 계층은 `Arc<dyn ...Repository>`로 주입받습니다.

pub mod tokens;
pub mod users;
