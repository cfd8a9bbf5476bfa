//! 사용자 리포지토리 모듈

pub mod memory_repo;
pub mod user_repo;

pub use memory_repo::InMemoryUserRepository;
pub use user_repo::{DecrementOutcome, MongoUserRepository, UserRepository};
