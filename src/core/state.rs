//! 애플리케이션 공유 상태
//!
//! 모든 서비스를 명시적 생성자 주입으로 조립한 결과물입니다.
//! ActixWeb의 `web::Data`로 각 워커에 공유되며, 전역 레지스트리나
//! 싱글톤 매크로 없이 의존성 그래프가 한 곳에서 드러납니다.
//! Spring의 ApplicationContext가 하던 일을 이 구조체 하나로 대신합니다.

use std::sync::Arc;

use crate::services::auth::TokenService;
use crate::services::credit::CreditService;
use crate::services::users::UserService;

/// 핸들러 계층이 사용하는 서비스 묶음
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub credit_service: Arc<CreditService>,
    pub token_service: Arc<TokenService>,
}

impl AppState {
    pub fn new(
        user_service: Arc<UserService>,
        credit_service: Arc<CreditService>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            user_service,
            credit_service,
            token_service,
        }
    }
}
