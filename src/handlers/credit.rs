//! Credit Ledger HTTP Handlers
//!
//! 크레딧 잔액 조회와 충전/차감 엔드포인트를 처리합니다.
//! 모든 라우트는 AuthMiddleware 뒤에 장착되어 유효한 베어러 토큰을
//! 요구합니다.
use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::core::AppState;
use crate::domain::dto::users::request::CreditOperationRequest;
use crate::domain::dto::users::response::{CreditOperationResponse, UserCreditResponse};
use crate::errors::AppError;

/// 크레딧 잔액 조회 핸들러
///
/// # Endpoint
/// `GET /users/{id}/credit`
#[get("/{id}/credit")]
pub async fn get_credit(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();
    let credit = state.credit_service.get_balance(user_id).await?;

    Ok(HttpResponse::Ok().json(UserCreditResponse { user_id, credit }))
}

/// 크레딧 충전 핸들러
///
/// # Endpoint
/// `POST /users/{id}/credit/increment`
#[post("/{id}/credit/increment")]
pub async fn increment_credit(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    payload: web::Json<CreditOperationRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user_id = path.into_inner();
    let new_credit = state
        .credit_service
        .increment(user_id, payload.amount)
        .await?;

    Ok(HttpResponse::Ok().json(CreditOperationResponse {
        user_id,
        new_credit,
    }))
}

/// 크레딧 차감 핸들러
///
/// 잔액이 부족하면 400 `InsufficientCredit`로 거부되고 잔액은
/// 변하지 않습니다.
///
/// # Endpoint
/// `POST /users/{id}/credit/decrement`
#[post("/{id}/credit/decrement")]
pub async fn decrement_credit(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    payload: web::Json<CreditOperationRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user_id = path.into_inner();
    let new_credit = state
        .credit_service
        .decrement(user_id, payload.amount)
        .await?;

    Ok(HttpResponse::Ok().json(CreditOperationResponse {
        user_id,
        new_credit,
    }))
}
