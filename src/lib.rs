//! # LightBnB 데이터 접근 계층
//!
//! 단기 숙박 예약 웹 애플리케이션이 사용하는 데이터 접근 함수 모음입니다.
//! 파라미터 바인딩된 SQL을 만들어 실행하고, 결과 행을 평범한 구조체로 돌려줍니다.
//!
//! 구성:
//! - `config`: 환경변수(.env)에서 연결 설정 로딩
//! - `db`: 연결 풀 생성과 사용자/예약/숙소 쿼리 함수
//! - `error`: `AppError` 에러 타입
//! - `models`: 쿼리 결과 및 입력 구조체
//!
//! ## 사용 예시
//! ```no_run
//! use lightbnb::{config::Config, db, models::FilterCriteria};
//!
//! # async fn run() -> Result<(), lightbnb::error::AppError> {
//! let config = Config::new("sqlite:data/lightbnb.db");
//! let pool = db::connect(&config).await?;
//!
//! let criteria = FilterCriteria {
//!     city: Some("van".to_string()),
//!     min_rating: Some(4.0),
//!     ..Default::default()
//! };
//! let listings = db::list_properties(&pool, &criteria, db::DEFAULT_LIMIT).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod db;
pub mod error;
pub mod models;

pub use error::AppError;
