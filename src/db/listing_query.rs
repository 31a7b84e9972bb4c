//! # 숙소 목록 동적 쿼리 빌더
//!
//! 선택적인 검색 필터(`FilterCriteria`)로부터 파라미터 바인딩된 SELECT 문을 만듭니다.
//!
//! ## 구성 방식
//! 1. 필터를 고정된 순서(도시 → 호스트 → 가격 → 평점)로 **조건 서술자(Predicate)** 목록으로 바꿉니다.
//! 2. 서술자 목록을 앞에서부터 접어(fold) SQL 텍스트에 붙입니다.
//!    첫 조건은 `WHERE`, 그 다음부터는 `AND`로 시작합니다.
//!    어떤 필터가 있는지가 아니라 "이미 조건을 하나 붙였는가" 플래그로 결정합니다.
//! 3. 모든 값은 SQL 텍스트에 넣지 않고 위치 파라미터(`?1`, `?2`, ...)로 바인딩합니다.
//! 4. 마지막에 `GROUP BY`, `ORDER BY`, `LIMIT`를 붙입니다. LIMIT 값도 마지막 파라미터입니다.
//!
//! ## 불변식
//! SQL 텍스트의 자리표시자 개수 == 파라미터 개수이며,
//! `?N`은 항상 N번째(1부터 시작) 파라미터를 가리킵니다.
//!
//! 이 모듈은 DB에 접근하지 않습니다. 실행은 `properties::list_properties`가 담당합니다.

use crate::error::AppError;
use crate::models::{fold_city, FilterCriteria};

/// 호출자가 개수를 지정하지 않을 때 사용하는 최대 결과 수
pub const DEFAULT_LIMIT: i64 = 10;

/// 숙소와 리뷰를 조인하는 고정된 기본 쿼리
///
/// INNER JOIN이므로 리뷰가 하나도 없는 숙소는 결과에서 빠집니다.
const BASE_QUERY: &str = "SELECT properties.*, avg(property_reviews.rating) AS average_rating
FROM properties
JOIN property_reviews ON properties.id = property_reviews.property_id";

/// 바인딩할 파라미터 값
///
/// SQLite가 다루는 세 가지 스칼라 타입에 대응합니다.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Text(String),
    Integer(i64),
    Real(f64),
}

/// 조건이 걸리는 대상 컬럼(또는 식)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    City,
    OwnerId,
    /// 1박 요금을 달러 단위로 환산한 값
    PricePerNight,
    /// 숙소의 리뷰 평점 평균 (개별 리뷰가 아니라 숙소 단위 집계값)
    AverageRating,
}

impl Field {
    /// SQL에 들어갈 식. 사용자 입력이 아닌 고정 문자열만 반환합니다.
    fn expression(self) -> &'static str {
        match self {
            // 저장 시 Rust에서 소문자로 접어둔 컬럼 (SQLite LOWER()는 ASCII만 바꿈)
            Field::City => "properties.city_lower",
            Field::OwnerId => "properties.owner_id",
            // cost_per_night는 센트 정수 → 100.0으로 나눠 달러 실수로 비교
            Field::PricePerNight => "properties.cost_per_night / 100.0",
            Field::AverageRating => "avg(rating)",
        }
    }

    /// 비교식을 WHERE 절에 놓을 수 있는 조건으로 감쌉니다.
    ///
    /// 평균 평점은 GROUP BY 이후에야 정해지므로, 숙소별 평균을 구하는 하위 쿼리로 거릅니다.
    /// 바깥 쿼리의 리뷰 행은 줄어들지 않으므로 `average_rating`은 전체 리뷰의 평균 그대로입니다.
    fn wrap(self, condition: String) -> String {
        match self {
            Field::AverageRating => format!(
                "properties.id IN (SELECT property_id FROM property_reviews GROUP BY property_id HAVING {})",
                condition
            ),
            _ => condition,
        }
    }
}

/// LIKE 패턴에서 특수한 의미를 갖는 `\`, `%`, `_`를 이스케이프합니다.
///
/// 조건에는 `ESCAPE '\'`가 함께 붙습니다.
fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// 비교 연산자 + 비교 값
#[derive(Debug, Clone, PartialEq)]
pub enum Comparison {
    /// 부분 문자열 일치 (대소문자 무시)
    Contains(String),
    Equals(i64),
    /// 양 끝 포함 범위
    Between(f64, f64),
    AtLeast(f64),
    AtMost(f64),
}

/// WHERE 절에 들어갈 조건 하나
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub field: Field,
    pub comparison: Comparison,
}

impl Predicate {
    fn new(field: Field, comparison: Comparison) -> Self {
        Self { field, comparison }
    }
}

/// 필터를 고정된 순서의 조건 목록으로 변환합니다.
///
/// 순서: 도시 → 호스트 ID → 가격 범위 → 최소 평점
///
/// 가격은 최소/최대가 모두 있으면 `Between` 하나, 한쪽만 있으면 해당 방향의 부등식 하나가 됩니다.
pub fn predicates(criteria: &FilterCriteria) -> Vec<Predicate> {
    let mut predicates = Vec::new();

    if let Some(city) = &criteria.city {
        predicates.push(Predicate::new(Field::City, Comparison::Contains(city.clone())));
    }

    if let Some(owner_id) = criteria.owner_id {
        predicates.push(Predicate::new(Field::OwnerId, Comparison::Equals(owner_id)));
    }

    // (Option, Option) 튜플 매칭으로 네 가지 경우를 한 번에 처리합니다.
    let price = match (criteria.min_price, criteria.max_price) {
        (Some(min), Some(max)) => Some(Comparison::Between(min, max)),
        (Some(min), None) => Some(Comparison::AtLeast(min)),
        (None, Some(max)) => Some(Comparison::AtMost(max)),
        (None, None) => None,
    };
    if let Some(comparison) = price {
        predicates.push(Predicate::new(Field::PricePerNight, comparison));
    }

    if let Some(rating) = criteria.min_rating {
        predicates.push(Predicate::new(Field::AverageRating, Comparison::AtLeast(rating)));
    }

    predicates
}

/// 실행 직전의 쿼리: SQL 텍스트 + 순서대로 바인딩할 값들
///
/// 호출마다 새로 만들고, 실행 후 버립니다.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPlan {
    sql: String,
    params: Vec<SqlParam>,
}

impl QueryPlan {
    fn new(base: &str) -> Self {
        Self {
            sql: base.to_string(),
            params: Vec::new(),
        }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[SqlParam] {
        &self.params
    }

    /// 값을 파라미터 목록 끝에 추가하고, 그 값을 가리키는 자리표시자(`?N`)를 반환합니다.
    ///
    /// 자리표시자 번호를 파라미터 목록 길이에서 만들기 때문에
    /// 텍스트와 파라미터의 개수/순서가 어긋날 수 없습니다.
    fn bind(&mut self, value: SqlParam) -> String {
        self.params.push(value);
        format!("?{}", self.params.len())
    }

    /// 조건 하나를 SQL 텍스트로 만들어 붙입니다. (WHERE/AND 키워드는 호출자가 붙임)
    fn push_predicate(&mut self, predicate: &Predicate) {
        let expr = predicate.field.expression();

        let condition = match &predicate.comparison {
            Comparison::Contains(text) => {
                // 컬럼과 같은 방식으로 접은 뒤, 와일드카드 문자는 글자 그대로 비교되게 합니다.
                let pattern = format!("%{}%", escape_like(&fold_city(text)));
                format!("{} LIKE {} ESCAPE '\\'", expr, self.bind(SqlParam::Text(pattern)))
            }
            Comparison::Equals(value) => {
                format!("{} = {}", expr, self.bind(SqlParam::Integer(*value)))
            }
            Comparison::Between(min, max) => {
                let low = self.bind(SqlParam::Real(*min));
                let high = self.bind(SqlParam::Real(*max));
                format!("{} BETWEEN {} AND {}", expr, low, high)
            }
            Comparison::AtLeast(value) => {
                format!("{} >= {}", expr, self.bind(SqlParam::Real(*value)))
            }
            Comparison::AtMost(value) => {
                format!("{} <= {}", expr, self.bind(SqlParam::Real(*value)))
            }
        };

        self.sql.push_str(&predicate.field.wrap(condition));
    }
}

/// 결과 개수 제한값을 검사합니다.
///
/// SQLite에서 음수 LIMIT은 "무제한"을 뜻하므로, 1 미만은 입력 오류로 취급합니다.
pub fn validate_limit(limit: i64) -> Result<(), AppError> {
    if limit < 1 {
        return Err(AppError::Validation(format!(
            "limit must be at least 1, got {}",
            limit
        )));
    }
    Ok(())
}

/// 필터와 결과 수 제한으로 숙소 목록 쿼리를 만듭니다.
///
/// 입력 검증은 호출자(`list_properties`)가 먼저 수행합니다.
pub fn build_listing_query(criteria: &FilterCriteria, limit: i64) -> QueryPlan {
    let mut plan = QueryPlan::new(BASE_QUERY);

    // fold 상태: 이미 조건을 하나 이상 붙였는지
    let mut has_where = false;
    for predicate in predicates(criteria) {
        plan.sql.push_str(if has_where { "\nAND " } else { "\nWHERE " });
        has_where = true;
        plan.push_predicate(&predicate);
    }

    // 동일 가격일 때 결과 순서가 흔들리지 않도록 id를 보조 정렬 키로 사용
    plan.sql
        .push_str("\nGROUP BY properties.id\nORDER BY properties.cost_per_night, properties.id");
    let limit_marker = plan.bind(SqlParam::Integer(limit));
    plan.sql.push_str(&format!("\nLIMIT {}", limit_marker));

    plan
}
