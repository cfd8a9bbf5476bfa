//! 크레딧 연산 요청 DTO
//!
//! 회로 생성/결제 서비스가 호출하는 크레딧 증감 요청의 입력 구조입니다.
//! 금액이 양의 정수임은 이 경계에서 검증됩니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 크레딧 증가/감소 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreditOperationRequest {
    /// 증감할 크레딧 양 (양의 정수)
    #[validate(range(min = 1, message = "금액은 1 이상의 정수여야 합니다"))]
    pub amount: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_must_be_positive() {
        assert!(CreditOperationRequest { amount: 1 }.validate().is_ok());
        assert!(CreditOperationRequest { amount: 0 }.validate().is_err());
        assert!(CreditOperationRequest { amount: -5 }.validate().is_err());
    }
}
