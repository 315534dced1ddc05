use serde::Serialize;

use crate::pagination::{MAX_WINDOW, MIN_WINDOW};

/// One entry of the page navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum PageLink {
    Page {
        page: u64,
        url: String,
        is_current: bool,
    },
    /// Placeholder for a skipped run of pages.
    Ellipsis,
}

impl PageLink {
    pub fn page(&self) -> Option<u64> {
        match self {
            PageLink::Page { page, .. } => Some(*page),
            PageLink::Ellipsis => None,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            PageLink::Page { url, .. } => Some(url),
            PageLink::Ellipsis => None,
        }
    }

    pub fn is_current(&self) -> bool {
        matches!(self, PageLink::Page { is_current: true, .. })
    }

    pub fn is_ellipsis(&self) -> bool {
        matches!(self, PageLink::Ellipsis)
    }
}

/// Build the link bar for `current` out of `total_pages`.
///
/// Shows every page when they fit in `window`. Otherwise shows a run of
/// `window` pages starting `window / 2` before the current one, plus the
/// first and last page, with an ellipsis wherever a real gap remains.
/// `window` is held within `MIN_WINDOW..=MAX_WINDOW`.
pub fn build_links<F>(current: u64, total_pages: u64, window: u64, url_for: F) -> Vec<PageLink>
where
    F: Fn(u64) -> String,
{
    let window = window.clamp(MIN_WINDOW, MAX_WINDOW);
    let link = |page: u64| PageLink::Page {
        page,
        url: url_for(page),
        is_current: page == current,
    };

    if total_pages <= window {
        return (1..=total_pages).map(&link).collect();
    }

    let start = current.saturating_sub(window / 2).max(1);
    let end = total_pages.min(start.saturating_add(window - 1));
    let mut links = Vec::with_capacity(window.min(total_pages) as usize + 4);

    if start > 1 {
        links.push(link(1));
        if start > 2 {
            links.push(PageLink::Ellipsis);
        }
    }

    links.extend((start..=end).map(&link));

    if end < total_pages {
        if end < total_pages - 1 {
            links.push(PageLink::Ellipsis);
        }
        links.push(link(total_pages));
    }

    links
}
