//! # 데이터 모델 모듈
//!
//! 데이터 접근 함수들이 주고받는 구조체(struct)들을 정의합니다.
//! 각 하위 모듈은 특정 도메인의 데이터 타입을 담당합니다:
//! - `property`: 숙소, 목록 조회 결과, 검색 필터
//! - `reservation`: 게스트의 예약 목록
//! - `user`: 사용자
//!
//! `pub use X::*;`로 하위 모듈의 항목을 재공개하여
//! `crate::models::Listing`처럼 짧게 접근할 수 있게 합니다.

pub mod property;
pub mod reservation;
pub mod user;

pub use property::*;
pub use reservation::*;
pub use user::*;
