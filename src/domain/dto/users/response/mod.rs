pub mod user_response;

pub use user_response::{
    CreditOperationResponse, LoginResponse, RegisterResponse, UserCreditResponse,
};
