//! # 에러 처리 모듈
//!
//! 데이터 접근 계층에서 발생할 수 있는 모든 에러 타입을 정의합니다.
//! Rust에서는 예외(exception) 대신 `Result<T, E>` 타입으로 에러를 처리합니다.
//!
//! 이 모듈의 핵심:
//! - `AppError` 열거형(enum): 모든 에러 종류를 하나의 타입으로 통합
//! - "결과 없음"은 에러가 아닙니다. 조회 결과가 없으면 `Ok(None)` 또는
//!   빈 `Vec`을 반환하고, 쿼리 실행 자체가 실패했을 때만 `Err`를 반환합니다.

use thiserror::Error; // thiserror: 커스텀 에러 타입을 쉽게 만들어주는 매크로 크레이트

/// 데이터 접근 함수가 반환할 수 있는 에러 종류
///
/// 호출하는 쪽(웹 서버의 라우트 핸들러 등)은 variant별로
/// 적절한 HTTP 상태 코드를 고를 수 있습니다.
/// - `Validation` → 400
/// - `Conflict` → 409
/// - `Query` → 500
#[derive(Debug, Error)]
pub enum AppError {
    /// 입력값 검증 실패
    /// SQL을 만들기 전에 감지됩니다. (예: 숫자가 아닌 가격 필터)
    #[error("Validation error: {0}")]
    Validation(String),

    /// 고유 제약 조건(UNIQUE) 위반 (예: 이미 가입된 이메일)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// 쿼리/연결 실패 (네트워크, 문법, 제약 조건, 풀 타임아웃 등)
    /// #[from]: sqlx::Error → AppError::Query 자동 변환.
    /// sqlx 함수 결과에 `?`를 쓰면 이 variant로 변환됩니다.
    #[error("Query error: {0}")]
    Query(#[from] sqlx::Error),
}

impl AppError {
    /// sqlx 에러가 UNIQUE 제약 위반이면 `Conflict`로, 아니면 `Query`로 변환합니다.
    ///
    /// INSERT 함수에서 `.map_err(|e| AppError::from_insert(e, "..."))` 형태로 사용합니다.
    pub fn from_insert(err: sqlx::Error, conflict_message: &str) -> Self {
        // as_database_error(): DB 드라이버가 보고한 에러일 때만 Some
        let is_unique = err
            .as_database_error()
            .map(|db_err| db_err.is_unique_violation())
            .unwrap_or(false);

        if is_unique {
            AppError::Conflict(conflict_message.to_string())
        } else {
            AppError::Query(err)
        }
    }
}
