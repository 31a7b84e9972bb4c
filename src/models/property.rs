//! # 숙소(Property) 모델 정의
//!
//! 숙소 목록 조회와 등록에 사용하는 데이터 구조체들을 정의합니다.
//!
//! ## 구조체 역할
//! - `Property`: DB의 `properties` 테이블 한 행
//! - `Listing`: 숙소 + 리뷰 평균 평점 (목록 조회 결과 한 행)
//! - `NewProperty`: 숙소 등록 시 호출자가 넘기는 데이터
//! - `PropertySearchParams`: 검색 폼/쿼리 문자열에서 들어온 "문자열 그대로의" 필터
//! - `FilterCriteria`: 검증을 마친 타입 있는 필터

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 숙소 엔티티 — DB의 `properties` 테이블 한 행(row)에 대응합니다.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Property {
    pub id: i64,
    /// 숙소를 등록한 사용자(호스트)의 ID
    pub owner_id: i64,
    pub title: String,
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    /// 1박 요금. 최소 통화 단위(센트)의 정수로 저장됩니다. (12500 = $125.00)
    pub cost_per_night: i64,
    pub parking_spaces: i64,
    pub number_of_bathrooms: i64,
    pub number_of_bedrooms: i64,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub active: bool,
}

/// 목록 조회 결과 한 행: 숙소 + 평균 평점
///
/// `#[sqlx(flatten)]`: 같은 행의 properties 컬럼들을 `Property`로 매핑합니다.
/// `#[serde(flatten)]`: JSON에서도 숙소 필드와 `average_rating`이 같은 레벨에 놓입니다.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Listing {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub property: Property,
    /// 이 숙소에 달린 리뷰 평점의 산술 평균
    pub average_rating: f64,
}

/// 숙소 등록 요청 데이터
///
/// `id`와 `active`는 DB가 채웁니다. (AUTOINCREMENT, DEFAULT TRUE)
#[derive(Debug, Clone, Deserialize)]
pub struct NewProperty {
    pub owner_id: i64,
    pub title: String,
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    /// 센트 단위
    pub cost_per_night: i64,
    pub parking_spaces: i64,
    pub number_of_bathrooms: i64,
    pub number_of_bedrooms: i64,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
}

/// 도시 이름을 검색용으로 접습니다. (유니코드 소문자 변환)
///
/// 저장 시(`properties.city_lower`)와 검색 시 같은 함수를 사용해야
/// "MONTRÉAL"과 "montréal"처럼 ASCII 밖의 대문자도 일치합니다.
pub fn fold_city(city: &str) -> String {
    city.to_lowercase()
}

/// 검증을 마친 숙소 검색 필터
///
/// 모든 필드는 독립적으로 선택 사항입니다.
/// 가격은 달러(주 통화 단위)로 표현합니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// 도시 이름의 일부 (대소문자 무시)
    pub city: Option<String>,
    pub owner_id: Option<i64>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_rating: Option<f64>,
}

impl FilterCriteria {
    /// 필터가 하나도 없는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.city.is_none()
            && self.owner_id.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.min_rating.is_none()
    }

    /// 숫자 필터가 유한한 값인지 검사합니다.
    ///
    /// NaN이나 무한대는 SQL 비교에서 의미가 없으므로 쿼리를 만들기 전에 거부합니다.
    pub fn validate(&self) -> Result<(), AppError> {
        let numeric = [
            ("min_price", self.min_price),
            ("max_price", self.max_price),
            ("min_rating", self.min_rating),
        ];

        for (name, value) in numeric {
            if let Some(v) = value {
                if !v.is_finite() {
                    return Err(AppError::Validation(format!(
                        "{} must be a finite number",
                        name
                    )));
                }
            }
        }

        Ok(())
    }
}

/// 검색 폼이나 URL 쿼리 문자열(`?city=van&minimum_rating=4`)로 들어온 필터
///
/// 모든 값이 문자열이며, 빈 문자열은 "입력하지 않음"으로 취급합니다.
/// (HTML 폼은 비워둔 입력란도 빈 문자열로 전송하기 때문)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertySearchParams {
    pub city: Option<String>,
    pub owner_id: Option<String>,
    pub minimum_price_per_night: Option<String>,
    pub maximum_price_per_night: Option<String>,
    pub minimum_rating: Option<String>,
}

/// `PropertySearchParams` → `FilterCriteria` 변환 (검증 포함)
///
/// 숫자가 아닌 값이 들어오면 어떤 필드가 잘못됐는지 담아
/// `AppError::Validation`을 반환합니다.
impl TryFrom<PropertySearchParams> for FilterCriteria {
    type Error = AppError;

    fn try_from(params: PropertySearchParams) -> Result<Self, Self::Error> {
        let criteria = FilterCriteria {
            city: non_empty(params.city),
            owner_id: parse_field("owner_id", params.owner_id)?,
            min_price: parse_field("minimum_price_per_night", params.minimum_price_per_night)?,
            max_price: parse_field("maximum_price_per_night", params.maximum_price_per_night)?,
            min_rating: parse_field("minimum_rating", params.minimum_rating)?,
        };
        criteria.validate()?;
        Ok(criteria)
    }
}

/// 앞뒤 공백을 제거하고, 비어 있으면 None으로 바꿉니다.
fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// 선택 입력 필드를 숫자 타입으로 파싱합니다.
///
/// 제네릭 `T: FromStr`: i64, f64 등 `str::parse()`가 가능한 모든 타입에 사용합니다.
fn parse_field<T: FromStr>(name: &str, value: Option<String>) -> Result<Option<T>, AppError> {
    match non_empty(value) {
        None => Ok(None),
        Some(raw) => raw.parse::<T>().map(Some).map_err(|_| {
            AppError::Validation(format!("{} must be a number, got {:?}", name, raw))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> PropertySearchParams {
        PropertySearchParams::default()
    }

    #[test]
    fn fold_city_lowercases_beyond_ascii() {
        assert_eq!(fold_city("MONTRÉAL"), "montréal");
        assert_eq!(fold_city("Zürich"), "zürich");
    }

    #[test]
    fn empty_strings_are_treated_as_absent() {
        let criteria = FilterCriteria::try_from(PropertySearchParams {
            city: Some("  ".to_string()),
            minimum_price_per_night: Some(String::new()),
            ..params()
        })
        .unwrap();

        assert!(criteria.is_empty());
    }

    #[test]
    fn parses_every_numeric_field() {
        let criteria = FilterCriteria::try_from(PropertySearchParams {
            city: Some("Vancouver".to_string()),
            owner_id: Some("7".to_string()),
            minimum_price_per_night: Some("50".to_string()),
            maximum_price_per_night: Some("150.5".to_string()),
            minimum_rating: Some(" 4 ".to_string()),
        })
        .unwrap();

        assert_eq!(
            criteria,
            FilterCriteria {
                city: Some("Vancouver".to_string()),
                owner_id: Some(7),
                min_price: Some(50.0),
                max_price: Some(150.5),
                min_rating: Some(4.0),
            }
        );
    }

    #[test]
    fn non_numeric_price_is_a_validation_error() {
        let err = FilterCriteria::try_from(PropertySearchParams {
            minimum_price_per_night: Some("cheap".to_string()),
            ..params()
        })
        .unwrap_err();

        match err {
            AppError::Validation(msg) => assert!(msg.contains("minimum_price_per_night")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn fractional_owner_id_is_rejected() {
        let err = FilterCriteria::try_from(PropertySearchParams {
            owner_id: Some("7.5".to_string()),
            ..params()
        })
        .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn non_finite_rating_is_rejected() {
        // "NaN"과 "inf"는 f64로 파싱되지만 필터로는 쓸 수 없습니다.
        for raw in ["NaN", "inf"] {
            let err = FilterCriteria::try_from(PropertySearchParams {
                minimum_rating: Some(raw.to_string()),
                ..params()
            })
            .unwrap_err();

            assert!(matches!(err, AppError::Validation(_)), "{} accepted", raw);
        }
    }
}
