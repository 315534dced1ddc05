use crate::config::PaginationConfig;
use crate::pagination::DEFAULT_LIMIT;
use crate::query::{QueryParams, QueryValue};

/// Page and limit as requested, after validation but before the page is
/// clamped against the page count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u32,
}

/// Configured page sizes with zeros and duplicates removed. Never empty:
/// an empty allow-list collapses to the default limit alone.
pub fn allowed_limits(config: &PaginationConfig) -> Vec<u32> {
    let mut allowed: Vec<u32> = Vec::with_capacity(config.limit_options.len());
    for &value in &config.limit_options {
        if value > 0 && !allowed.contains(&value) {
            allowed.push(value);
        }
    }
    if allowed.is_empty() {
        let limit = if config.default_limit > 0 {
            config.default_limit
        } else {
            DEFAULT_LIMIT
        };
        tracing::debug!(limit, "no usable limit options, using default limit only");
        allowed.push(limit);
    }
    allowed
}

/// Limit used when the request names none or a disallowed one.
pub fn fallback_limit(config: &PaginationConfig, allowed: &[u32]) -> u32 {
    if allowed.contains(&config.default_limit) {
        config.default_limit
    } else {
        allowed.first().copied().unwrap_or(DEFAULT_LIMIT)
    }
}

/// Extract `page` and `limit` from the query. Malformed values degrade to
/// page 1 and `fallback`; nothing here fails.
pub fn normalize(params: &QueryParams, allowed: &[u32], fallback: u32) -> PageRequest {
    let limit = match params.get("limit") {
        None | Some(QueryValue::Null) => fallback,
        Some(value) => {
            let requested = value
                .as_int()
                .and_then(|v| u32::try_from(v).ok())
                .filter(|v| allowed.contains(v));
            match requested {
                Some(limit) => limit,
                None => {
                    tracing::debug!(?value, fallback, "limit not allowed, using default");
                    fallback
                }
            }
        }
    };

    let page = match params.get("page").map(QueryValue::as_int) {
        None | Some(None) => 1,
        Some(Some(page)) => u64::try_from(page).ok().filter(|&p| p >= 1).unwrap_or_else(|| {
            tracing::debug!(page, "page below 1, using first page");
            1
        }),
    };

    PageRequest { page, limit }
}
