pub mod auth_request;
pub mod credit_request;

pub use auth_request::{
    ConfirmEmailQuery, LoginRequest, PasswordResetRequest, RegisterRequest,
    ResetPasswordRequest,
};
pub use credit_request::CreditOperationRequest;
