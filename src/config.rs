//! # 데이터베이스 연결 설정(Configuration) 모듈
//!
//! 환경변수에서 연결 설정값을 읽어오는 모듈입니다.
//! `.env` 파일이나 시스템 환경변수에서 값을 가져옵니다.
//! 접속 정보(호스트, 계정, DB 이름)는 코드에 하드코딩하지 않습니다.
//!
//! 설정 항목:
//! - `DATABASE_URL`: SQLite 데이터베이스 경로 (필수, 예: "sqlite:data/lightbnb.db")
//! - `DATABASE_MAX_CONNECTIONS`: 연결 풀의 최대 연결 수 (기본값: 5)

use std::env;

/// 환경변수가 없거나 숫자가 아닐 때 사용하는 최대 연결 수
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// 데이터 접근 계층의 연결 설정
///
/// 애플리케이션 시작 시 한 번 읽어 `db::connect()`에 넘깁니다.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite 데이터베이스 URL
    pub database_url: String,
    /// 연결 풀이 유지할 최대 연결 수
    pub max_connections: u32,
}

impl Config {
    /// 환경변수에서 설정값을 읽어 Config 인스턴스를 생성합니다.
    ///
    /// 먼저 `.env` 파일을 로딩합니다. 파일이 없어도 에러가 아닙니다.
    ///
    /// # 에러
    /// `DATABASE_URL`이 없으면 `Err(VarError)`를 반환합니다.
    pub fn from_env() -> Result<Self, env::VarError> {
        // .ok(): .env 파일이 없어도 에러 없이 넘어갑니다.
        dotenvy::dotenv().ok();

        Ok(Self {
            database_url: env::var("DATABASE_URL")?, // 필수: 없으면 에러
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_CONNECTIONS), // 파싱 실패 시 기본값
        })
    }

    /// 주어진 URL과 기본 풀 크기로 설정을 만듭니다. (테스트, 임베딩용)
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_default_pool_size() {
        let config = Config::new("sqlite::memory:");
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
    }

    // 환경변수를 건드리는 테스트는 이것 하나뿐이어야 합니다. (테스트는 병렬로 실행됨)
    #[test]
    fn from_env_reads_url_and_pool_size() {
        env::set_var("DATABASE_URL", "sqlite:data/test.db");
        env::set_var("DATABASE_MAX_CONNECTIONS", "not-a-number");

        let config = Config::from_env().unwrap();
        assert_eq!(config.database_url, "sqlite:data/test.db");
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);

        env::set_var("DATABASE_MAX_CONNECTIONS", "12");
        assert_eq!(Config::from_env().unwrap().max_connections, 12);
    }
}
