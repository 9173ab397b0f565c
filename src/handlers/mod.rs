//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, curl, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ GET + query string
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - 파라미터 → 필터 변환        ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - UserStore                      ← Storage Layer
//! ├─────────────────────────────────────────────┤
//!   MongoDB `users` 컬렉션
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 저장소를 `web::Data<dyn UserStore>`로 주입받습니다. 전역 인스턴스를
//! 사용하지 않으므로 테스트에서는 인메모리 저장소로 바꿔 끼울 수 있습니다.
//!
//! ## 모듈 구성
//!
//! - **`users`**: 사용자 CRUD 엔드포인트 (`/create`, `/retrieve`, `/update`, `/delete`)

pub mod users;
