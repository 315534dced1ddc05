pub mod normalize;
pub mod window;

use serde::Serialize;

use crate::config::PaginationConfig;
use crate::query::{QueryParams, QueryValue, build_url};

pub use window::PageLink;

/// Page size used when a request names none or a disallowed one.
pub const DEFAULT_LIMIT: u32 = 25;
/// Page sizes offered when the caller supplies no allow-list.
pub const DEFAULT_LIMIT_OPTIONS: [u32; 4] = [10, 25, 50, 100];
/// Smallest number of consecutive page links shown around the current page.
pub const MIN_WINDOW: u64 = 3;
/// Largest window width accepted from configuration.
pub const MAX_WINDOW: u64 = 100;

/// A selectable page size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitOption {
    pub value: u32,
    /// Selects this size and drops `page`, landing on the first page.
    pub url: String,
    pub is_current: bool,
}

/// Everything a list view needs to render its navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationResult {
    pub page: u64,
    pub limit: u32,
    pub total_pages: u64,
    pub total_items: u64,
    pub links: Vec<PageLink>,
    pub next_page_url: Option<String>,
    pub previous_page_url: Option<String>,
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub limit_options: Vec<LimitOption>,
}

impl PaginationResult {
    /// Index of the first item on the current page.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(u64::from(self.limit))
    }
}

/// Number of pages needed for `total_items`; at least 1.
pub fn total_pages(total_items: u64, limit: u32) -> u64 {
    if limit == 0 {
        return 1;
    }
    total_items.div_ceil(u64::from(limit)).max(1)
}

/// Paginate with the default settings, optionally restricting page sizes
/// to `allowed` instead of `[10, 25, 50, 100]`.
pub fn paginate(
    params: &QueryParams,
    total_items: i64,
    allowed: Option<&[u32]>,
) -> PaginationResult {
    match allowed {
        Some(options) => paginate_with(
            params,
            total_items,
            &PaginationConfig::with_limit_options(options),
        ),
        None => paginate_with(params, total_items, &PaginationConfig::default()),
    }
}

/// Paginate `total_items` according to the `page`/`limit` in `params`.
///
/// Out-of-range or malformed input is corrected, never rejected. Every URL
/// in the result is built from `params`, so unrelated parameters carry over.
pub fn paginate_with(
    params: &QueryParams,
    total_items: i64,
    config: &PaginationConfig,
) -> PaginationResult {
    let allowed = normalize::allowed_limits(config);
    let fallback = normalize::fallback_limit(config, &allowed);
    let request = normalize::normalize(params, &allowed, fallback);

    let total_items = u64::try_from(total_items).unwrap_or_else(|_| {
        tracing::debug!(total_items, "negative item count, treating as empty");
        0
    });
    let total_pages = total_pages(total_items, request.limit);
    let page = request.page.min(total_pages);
    if page != request.page {
        tracing::debug!(requested = request.page, page, total_pages, "page clamped");
    }

    let style = config.array_style;
    let page_url = |p: u64| build_url(params, [("page", QueryValue::from(p))], style);

    let links = window::build_links(page, total_pages, config.effective_window(), &page_url);

    let has_previous_page = page > 1;
    let has_next_page = page < total_pages;
    let previous_page_url = has_previous_page.then(|| page_url(page - 1));
    let next_page_url = has_next_page.then(|| page_url(page + 1));

    let limit_options = allowed
        .iter()
        .map(|&value| LimitOption {
            value,
            url: build_url(
                params,
                [("limit", QueryValue::from(value)), ("page", QueryValue::Null)],
                style,
            ),
            is_current: value == request.limit,
        })
        .collect();

    PaginationResult {
        page,
        limit: request.limit,
        total_pages,
        total_items,
        links,
        next_page_url,
        previous_page_url,
        has_next_page,
        has_previous_page,
        limit_options,
    }
}
