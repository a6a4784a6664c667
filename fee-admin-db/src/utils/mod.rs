use fee_admin_api::{ApiError, ApiResult};
use heapless::String as HeaplessString;

/// Byte capacity needed to hold `chars` characters of UTF-8.
pub const fn utf8_capacity(chars: usize) -> usize {
    chars * 4
}

/// Copies `value` into a fixed-capacity string, failing with a validation error
/// that names `field` when it has more than `max_chars` characters.
///
/// `N` is a byte capacity and should be at least `utf8_capacity(max_chars)`.
pub fn bounded<const N: usize>(
    field: &str,
    value: &str,
    max_chars: usize,
) -> ApiResult<HeaplessString<N>> {
    if value.chars().count() > max_chars {
        return Err(too_long(field, max_chars));
    }
    HeaplessString::try_from(value).map_err(|_| too_long(field, max_chars))
}

/// Optional variant of [`bounded`].
pub fn bounded_opt<const N: usize>(
    field: &str,
    value: Option<&str>,
    max_chars: usize,
) -> ApiResult<Option<HeaplessString<N>>> {
    value.map(|v| bounded::<N>(field, v, max_chars)).transpose()
}

fn too_long(field: &str, max_chars: usize) -> ApiError {
    ApiError::validation(format!("{field}: length must be at most {max_chars} characters"))
}
