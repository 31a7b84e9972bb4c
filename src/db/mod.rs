//! # 데이터베이스 접근 계층 (Data Access Layer)
//!
//! 데이터베이스와 직접 상호작용하는 함수들을 모아둔 모듈입니다.
//! 웹 서버의 라우트 핸들러가 이 모듈의 함수를 호출하여 DB 작업을 수행합니다.
//!
//! 각 하위 모듈:
//! - `listing_query`: 숙소 검색 필터 → 파라미터 바인딩된 SQL (DB 접근 없음)
//! - `properties`: 숙소 목록 조회 및 등록
//! - `reservations`: 게스트의 예약 목록 조회
//! - `users`: 사용자 조회 및 가입
//!
//! 모든 함수는 하나의 SQL 문을 실행하고 한 번의 왕복만 기다립니다.
//! 트랜잭션이나 재시도는 없습니다.

pub mod listing_query;
pub mod properties;
pub mod reservations;
pub mod users;

pub use listing_query::DEFAULT_LIMIT;
pub use properties::*;
pub use reservations::*;

use crate::config::Config;
use crate::error::AppError;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// 설정으로 SQLite 연결 풀을 생성합니다.
///
/// 연결 풀(Connection Pool): DB 연결을 미리 만들어두고 재사용하는 패턴.
/// `SqlitePool`은 내부적으로 Arc를 사용하므로, clone해도 같은 풀을 가리킵니다.
/// 연결 획득 타임아웃 등은 풀의 기본 정책을 따르며, 실패는 `AppError::Query`로 전달됩니다.
pub async fn connect(config: &Config) -> Result<SqlitePool, AppError> {
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    tracing::info!(
        max_connections = config.max_connections,
        "Connected to database"
    );
    Ok(pool)
}
