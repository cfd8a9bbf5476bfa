//! 사용자 도메인 엔티티

pub mod password_reset_token;
pub mod user;

pub use password_reset_token::PasswordResetToken;
pub use user::{NewUser, User};
