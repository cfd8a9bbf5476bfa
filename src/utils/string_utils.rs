//! # 문자열 유틸리티
//!
//! 이메일은 저장 시 암호화되는 개인정보이므로 로그에도
//! 평문 전체를 남기지 않습니다.

/// 로그 출력용 이메일 마스킹
///
/// 로컬 파트의 첫 글자만 남기고 나머지를 가립니다.
/// 도메인은 그대로 유지합니다.
///
/// # 예제
/// ```rust,ignore
/// use user_service_backend::utils::string_utils::mask_email;
///
/// assert_eq!(mask_email("alice@example.com"), "a***@example.com");
/// ```
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first = local.chars().next().map(String::from).unwrap_or_default();
            format!("{}***@{}", first, domain)
        }
        None => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("alice@example.com"), "a***@example.com");
        assert_eq!(mask_email("a@b.com"), "a***@b.com");
        assert_eq!(mask_email("@b.com"), "***@b.com");
        assert_eq!(mask_email("not-an-email"), "***");
    }
}
