//! 리셋 토큰 리포지토리 모듈

pub mod reset_token_repo;

pub use reset_token_repo::{
    InMemoryResetTokenRepository, MongoResetTokenRepository, ResetTokenRepository,
};
