//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! Spring Framework의 Controller 레이어와 동일한 역할을 수행하며,
//! ActixWeb 프레임워크를 기반으로 구현되었습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! HTTP Layer Architecture
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities/Models - 도메인 모델                  ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Spring Framework와의 비교
//!
//! ### Spring MVC Controller
//! ```java
//! @RestController
//! @RequestMapping("/auth")
//! public class AuthController {
//!
//!     @Autowired
//!     private UserService userService;
//!
//!     @PostMapping("/register")
//!     public ResponseEntity<RegisterResponse> register(@RequestBody RegisterRequest request) {
//!         RegisterResponse response = userService.register(request);
//!         return ResponseEntity.status(HttpStatus.CREATED).body(response);
//!     }
//! }
//! ```
//!
//! ### 이 모듈의 Rust 구현
//! ```rust,ignore
//! use actix_web::{web, HttpResponse, post};
//! use crate::core::AppState;
//!
//! #[post("/register")]
//! pub async fn register(
//!     state: web::Data<AppState>, // 명시적 의존성 주입
//!     payload: web::Json<RegisterRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     payload.validate()?;
//!     let user = state.user_service.register(&payload.email, &payload.password).await?;
//!     Ok(HttpResponse::Created().json(user))
//! }
//! ```
//!
//! ## 주요 특징
//!
//! ### 1. 비동기 처리
//! - **Future 기반**: 모든 핸들러가 `async/await` 사용
//! - **논블로킹 I/O**: 데이터베이스 호출 시 블로킹 없음
//!
//! ### 2. 타입 안전성
//! - **자동 직렬화**: JSON ↔ Rust 구조체 자동 변환
//! - **검증 통합**: validator 크레이트로 입력 검증
//!
//! ### 3. 에러 처리
//! - **Result 패턴**: `?` 연산자로 에러 자동 전파
//! - **통합 에러 타입**: AppError가 HTTP 상태 코드로 자동 변환
//!
//! ## 모듈 구성
//!
//! - **`auth`**: 계정 생명주기 엔드포인트
//!   - 회원가입 (`POST /auth/register`)
//!   - 이메일 인증 (`GET /auth/confirm-email`)
//!   - 로그인 (`POST /auth/login`)
//!   - 비밀번호 리셋 (`POST /auth/request-password-reset`, `POST /auth/reset-password`)
//!
//! - **`credit`**: 크레딧 원장 엔드포인트 (인증 필요)
//!   - 잔액 조회 (`GET /users/{id}/credit`)
//!   - 충전 (`POST /users/{id}/credit/increment`)
//!   - 차감 (`POST /users/{id}/credit/decrement`)

pub mod auth;
pub mod credit;
