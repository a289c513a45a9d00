use crate::domain::dto::products::PaginationMeta;

/// 전체 개수와 요청 페이지로 페이지네이션 메타데이터를 계산합니다.
///
/// - `total_pages = ceil(total / limit)`
/// - `has_next = page < total_pages`
/// - `has_prev = page > 1`
///
/// 마지막 페이지를 넘어선 요청도 에러가 아닙니다. (`has_next = false`)
/// `limit`은 검증 단계에서 1 이상이 보장됩니다.
pub fn calculate_pagination(total: u64, page: u64, limit: u64) -> PaginationMeta {
    let total_pages = total.div_ceil(limit.max(1));

    PaginationMeta {
        page,
        limit,
        total,
        total_pages,
        has_next: page < total_pages,
        has_prev: page > 1,
    }
}

/// MongoDB `skip`은 i64로 전송되므로 이 값을 넘을 수 없습니다.
pub const MAX_SKIP: u64 = i64::MAX as u64;

/// 페이지 번호를 건너뛸 문서 수로 변환합니다.
///
/// 아주 큰 페이지 번호는 [`MAX_SKIP`]으로 고정되어 빈 페이지가 됩니다.
pub fn skip_for(page: u64, limit: u64) -> u64 {
    page.saturating_sub(1).saturating_mul(limit).min(MAX_SKIP)
}
