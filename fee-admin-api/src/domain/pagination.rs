use crate::error::{ApiError, ApiResult};

/// Page size used when the caller does not pass `limit`
pub const DEFAULT_LIMIT: i64 = 50;
/// Largest page a caller may request
pub const MAX_LIMIT: i64 = 200;

/// Validate raw `limit`/`offset` query values and return them as `(limit, offset)`.
///
/// `limit` must be within `1..=MAX_LIMIT` and `offset` must not be negative.
pub fn validate_page(limit: Option<i64>, offset: Option<i64>) -> ApiResult<(usize, usize)> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT);
    let offset = offset.unwrap_or(0);

    if !(1..=MAX_LIMIT).contains(&limit) {
        return Err(ApiError::validation(format!(
            "limit must be between 1 and {MAX_LIMIT}"
        )));
    }
    if offset < 0 {
        return Err(ApiError::validation("offset must be greater than or equal to 0"));
    }

    Ok((limit as usize, offset as usize))
}
