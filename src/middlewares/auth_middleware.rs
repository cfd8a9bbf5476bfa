//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 베어러 토큰을 검증하고 사용자 정보를
//! 추출합니다. TokenService는 생성자에서 명시적으로 주입됩니다.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::middlewares::auth_inner::AuthMiddlewareService;
use crate::services::auth::TokenService;

/// JWT 인증 미들웨어
///
/// 보호된 스코프에 `wrap()`으로 장착하면 유효한 베어러 토큰이 없는
/// 요청을 401로 거부하고, 성공 시 `AuthenticatedUser`를 요청
/// extensions에 저장합니다.
pub struct AuthMiddleware {
    token_service: Arc<TokenService>,
}

impl AuthMiddleware {
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self { token_service }
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            token_service: self.token_service.clone(),
        }))
    }
}
