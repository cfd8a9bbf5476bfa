//! HTTP 전송 객체(DTO) 모듈

pub mod users;

pub use users::request::{
    ConfirmEmailQuery, CreditOperationRequest, LoginRequest, PasswordResetRequest,
    RegisterRequest, ResetPasswordRequest,
};
pub use users::response::{
    CreditOperationResponse, LoginResponse, RegisterResponse, UserCreditResponse,
};
