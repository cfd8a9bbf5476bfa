//! # 비즈니스 로직 서비스 계층
//!
//! Spring Framework의 `@Service` 계층에 해당하는 모듈입니다.
//! 각 서비스는 생성자 주입으로 조립되며, 리포지토리 트레이트에만
//! 의존하여 테스트 시 인메모리 구현으로 대체할 수 있습니다.
//!
//! ## 서비스 구성
//!
//! - [`users`]: 회원가입, 인증, 로그인, 비밀번호 리셋 오케스트레이션
//! - [`auth`]: JWT 발급/검증, 리셋 토큰 생명주기
//! - [`crypto`]: AES-256-GCM 암복호화, bcrypt/SHA-256 해싱
//! - [`credit`]: 원자적 크레딧 원장 연산
//! - [`email`]: 인증/리셋 메일 발송 추상화

pub mod auth;
pub mod credit;
pub mod crypto;
pub mod email;
pub mod users;
