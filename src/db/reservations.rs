//! # 예약(Reservation) 데이터베이스 쿼리 모듈
//!
//! 게스트의 예약 목록 조회 쿼리입니다.
//!
//! 예약마다 예약한 숙소 정보와 그 숙소의 평균 평점을 함께 가져옵니다.
//! 숙소 목록 조회와 같이 리뷰 테이블과 INNER JOIN하므로,
//! 리뷰가 없는 숙소의 예약은 결과에 포함되지 않습니다.

use super::listing_query::validate_limit;
use crate::error::AppError;
use crate::models::ReservedProperty;
use sqlx::SqlitePool;

/// 게스트의 예약 목록을 체크인 날짜순으로 조회합니다.
///
/// # 매개변수
/// - `guest_id`: 예약한 사용자의 ID
/// - `limit`: 최대 결과 수 (기본값은 `DEFAULT_LIMIT` = 10)
///
/// # 반환값
/// - `Ok(Vec<ReservedProperty>)`: 예약이 없으면 빈 Vec
/// - `Err(AppError::Query)`: 쿼리 실행 실패
pub async fn list_reservations(
    pool: &SqlitePool,
    guest_id: i64,
    limit: i64,
) -> Result<Vec<ReservedProperty>, AppError> {
    validate_limit(limit)?;

    let reservations = sqlx::query_as::<_, ReservedProperty>(
        r#"
        SELECT reservations.id AS reservation_id,
               reservations.start_date,
               reservations.end_date,
               properties.*,
               avg(property_reviews.rating) AS average_rating
        FROM reservations
        JOIN properties ON reservations.property_id = properties.id
        JOIN property_reviews ON properties.id = property_reviews.property_id
        WHERE reservations.guest_id = ?1
        GROUP BY properties.id, reservations.id
        ORDER BY reservations.start_date
        LIMIT ?2
        "#,
        // ↑ GROUP BY에 reservations.id를 포함해 같은 숙소를 여러 번 예약한 경우
        //   예약마다 한 행씩 나오게 합니다.
    )
    .bind(guest_id)
    .bind(limit)
    .fetch_all(pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to list reservations for guest {}: {}", guest_id, e);
        AppError::from(e)
    })?;

    Ok(reservations)
}
