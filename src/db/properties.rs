//! # 숙소(Property) 데이터베이스 쿼리 모듈
//!
//! 숙소 목록 조회(필터 검색)와 숙소 등록 쿼리 함수들입니다.
//! 쿼리 텍스트는 `listing_query` 모듈이 만들고, 이 모듈은 바인딩과 실행을 담당합니다.

use super::listing_query::{build_listing_query, validate_limit, SqlParam};
use crate::error::AppError;
use crate::models::*;
use sqlx::{Sqlite, SqlitePool};

/// 필터 조건에 맞는 숙소 목록을 1박 요금 오름차순으로 조회합니다.
///
/// # 매개변수
/// - `pool`: SQLite 연결 풀의 참조
/// - `criteria`: 검색 필터 (모든 필드 선택)
/// - `limit`: 최대 결과 수 (기본값은 `DEFAULT_LIMIT` = 10)
///
/// # 반환값
/// - `Ok(Vec<Listing>)`: 조건에 맞는 숙소 목록. 맞는 숙소가 없으면 빈 Vec입니다.
/// - `Err(AppError::Validation)`: 필터 값이나 limit이 잘못된 경우 (쿼리 실행 전)
/// - `Err(AppError::Query)`: 쿼리 실행 실패
///
/// 리뷰가 없는 숙소는 평균 평점을 계산할 수 없어 결과에 포함되지 않습니다.
pub async fn list_properties(
    pool: &SqlitePool,
    criteria: &FilterCriteria,
    limit: i64,
) -> Result<Vec<Listing>, AppError> {
    criteria.validate()?;
    validate_limit(limit)?;

    let plan = build_listing_query(criteria, limit);
    tracing::debug!(
        sql = plan.sql(),
        params = plan.params().len(),
        unfiltered = criteria.is_empty(),
        "listing query"
    );

    // ── 동적 쿼리 실행 ──
    // plan의 파라미터를 순서대로 바인딩합니다. (?1, ?2, ... 순서와 일치)
    let mut query = sqlx::query_as::<Sqlite, Listing>(plan.sql());
    for param in plan.params() {
        query = match param {
            SqlParam::Text(value) => query.bind(value.as_str()),
            SqlParam::Integer(value) => query.bind(*value),
            SqlParam::Real(value) => query.bind(*value),
        };
    }

    let listings = query.fetch_all(pool).await.map_err(|e| {
        tracing::error!("Failed to list properties: {}", e);
        AppError::from(e)
    })?;

    Ok(listings)
}

/// 새 숙소를 DB에 등록하고, 저장된 행을 반환합니다.
///
/// `RETURNING *`으로 DB가 채운 값(id, active 기본값)까지 한 번의 왕복으로 받아옵니다.
/// 검색용 `city_lower` 컬럼도 여기서 함께 채웁니다.
///
/// 존재하지 않는 `owner_id`는 외래키 제약 위반으로 `AppError::Query`가 됩니다.
/// (sqlx의 SQLite 연결은 기본으로 `PRAGMA foreign_keys = ON` 상태입니다)
pub async fn create_property(
    pool: &SqlitePool,
    property: &NewProperty,
) -> Result<Property, AppError> {
    let created = sqlx::query_as::<_, Property>(
        r#"
        INSERT INTO properties (
            owner_id, title, description, thumbnail_photo_url, cover_photo_url,
            cost_per_night, parking_spaces, number_of_bathrooms, number_of_bedrooms,
            country, street, city, city_lower, province, post_code
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(property.owner_id)
    .bind(&property.title)
    .bind(&property.description)
    .bind(&property.thumbnail_photo_url)
    .bind(&property.cover_photo_url)
    .bind(property.cost_per_night)
    .bind(property.parking_spaces)
    .bind(property.number_of_bathrooms)
    .bind(property.number_of_bedrooms)
    .bind(&property.country)
    .bind(&property.street)
    .bind(&property.city)
    .bind(fold_city(&property.city))
    .bind(&property.province)
    .bind(&property.post_code)
    .fetch_one(pool)
    .await?;

    tracing::info!(property_id = created.id, owner_id = created.owner_id, "Created property");
    Ok(created)
}
