//! # 예약(Reservation) 모델 정의
//!
//! 게스트의 예약 목록 조회 결과를 표현합니다.
//! 예약 한 건에 예약한 숙소 정보와 숙소의 평균 평점을 함께 담습니다.

use super::property::Property;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 게스트의 예약 한 건 + 예약한 숙소
///
/// 숙소의 `id` 컬럼과 겹치지 않도록 예약 ID는 `reservation_id`로 조회합니다.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ReservedProperty {
    pub reservation_id: i64,
    /// 체크인 날짜 (DB에는 "2026-10-19" 형식의 TEXT로 저장)
    pub start_date: NaiveDate,
    /// 체크아웃 날짜
    pub end_date: NaiveDate,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub property: Property,
    /// 예약한 숙소의 리뷰 평균 평점
    pub average_rating: f64,
}
