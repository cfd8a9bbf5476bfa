//! Authentication HTTP Handlers
//!
//! 사용자 계정과 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 회원가입, 이메일 인증, 로그인, 비밀번호 리셋의 전 과정을 담당하며,
//! JWT 토큰 기반의 상태 없는 인증을 구현합니다.
//!
//! # Endpoints
//!
//! - **회원가입**: `POST /auth/register`
//! - **이메일 인증**: `GET /auth/confirm-email?token={token}`
//! - **로그인**: `POST /auth/login`
//! - **리셋 요청**: `POST /auth/request-password-reset`
//! - **비밀번호 리셋**: `POST /auth/reset-password`
use actix_web::{get, post, web, HttpResponse};
use serde_json::json;
use validator::Validate;

use crate::core::AppState;
use crate::domain::dto::users::request::{
    ConfirmEmailQuery, LoginRequest, PasswordResetRequest, RegisterRequest, ResetPasswordRequest,
};
use crate::domain::dto::users::response::{LoginResponse, RegisterResponse};
use crate::errors::AppError;

/// 회원가입 핸들러
///
/// 신규 사용자를 미인증 상태로 등록하고 인증 메일을 발송합니다.
///
/// # Endpoint
/// `POST /auth/register`
#[post("/register")]
pub async fn register(
    state: web::Data<AppState>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = state
        .user_service
        .register(&payload.email, &payload.password)
        .await?;

    Ok(HttpResponse::Created().json(RegisterResponse {
        user_id: user.id,
        message: "인증 메일이 발송되었습니다".to_string(),
    }))
}

/// 이메일 인증 핸들러
///
/// 인증 메일의 링크로 전달된 토큰을 검증하고 계정을 활성화합니다.
///
/// # Endpoint
/// `GET /auth/confirm-email?token={token}`
#[get("/confirm-email")]
pub async fn confirm_email(
    state: web::Data<AppState>,
    query: web::Query<ConfirmEmailQuery>,
) -> Result<HttpResponse, AppError> {
    state.user_service.confirm_email(&query.token).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "이메일 인증이 완료되었습니다"
    })))
}

/// 로그인 핸들러
///
/// 이메일과 패스워드를 검증하고 JWT 베어러 토큰을 발급합니다.
/// 실패 사유(이메일 없음/비밀번호 불일치)는 응답에서 구분되지 않습니다.
///
/// # Endpoint
/// `POST /auth/login`
#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let outcome = state
        .user_service
        .login(&payload.email, &payload.password)
        .await?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        token: outcome.token,
        user_id: outcome.user.id,
        email: outcome.user.email,
        credit: outcome.user.credit,
        token_type: "Bearer".to_string(),
    }))
}

/// 비밀번호 리셋 요청 핸들러
///
/// 계정 열거 방지를 위해 이메일 존재 여부와 무관하게 200을 반환합니다.
///
/// # Endpoint
/// `POST /auth/request-password-reset`
#[post("/request-password-reset")]
pub async fn request_password_reset(
    state: web::Data<AppState>,
    payload: web::Json<PasswordResetRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    state
        .user_service
        .request_password_reset(&payload.email)
        .await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "등록된 이메일이라면 리셋 안내가 발송됩니다"
    })))
}

/// 비밀번호 리셋 실행 핸들러
///
/// 단일 사용 리셋 토큰을 소비하고 새 비밀번호를 설정합니다.
///
/// # Endpoint
/// `POST /auth/reset-password`
#[post("/reset-password")]
pub async fn reset_password(
    state: web::Data<AppState>,
    payload: web::Json<ResetPasswordRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    state
        .user_service
        .reset_password(&payload.token, &payload.new_password)
        .await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "비밀번호가 변경되었습니다"
    })))
}
