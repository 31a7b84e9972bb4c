#![allow(dead_code)]

//! 통합 테스트 공용 도우미
//!
//! 테스트마다 새 인메모리 SQLite DB를 만들고 스키마와 시드 데이터를 넣습니다.

use lightbnb::models::FilterCriteria;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

const SCHEMA: &str = include_str!("../../sql/schema.sql");
const SEED: &str = include_str!("../fixtures/seed.sql");

/// RUST_LOG가 설정되어 있으면 테스트 출력으로 로그를 보여줍니다.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// 시드 데이터가 들어간 새 DB 풀을 생성합니다.
///
/// 인메모리 DB는 연결마다 따로 존재하므로, 연결을 하나만 두고 닫히지 않게 유지합니다.
pub async fn seeded_pool() -> SqlitePool {
    init_tracing();

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap_or_else(|e| panic!("in-memory database failed to open: {e}"));

    sqlx::raw_sql(SCHEMA)
        .execute(&pool)
        .await
        .unwrap_or_else(|e| panic!("schema failed to apply: {e}"));
    sqlx::raw_sql(SEED)
        .execute(&pool)
        .await
        .unwrap_or_else(|e| panic!("seed data failed to load: {e}"));

    pool
}

pub fn no_filters() -> FilterCriteria {
    FilterCriteria::default()
}
