//! Offset pagination over any store that can count and fetch a slice.
//!
//! A [`PageRequest`] is validated once at the boundary. [`paginate`] then
//! drives the two store calls and assembles a [`PageResult`] whose
//! [`Navigation`] never points outside `[1, total_pages]`, even when the
//! caller asked for a page far past the end. The requested page number is
//! still echoed unchanged in [`PageResult::current_page`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 500;

/// Query key carrying the page number; replaced when navigation links are built.
pub const PAGE_PARAM: &str = "page";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaginationError {
    #[error("invalid page request: {0}")]
    InvalidPageRequest(String),
}

/// Page size limits loaded from the `pagination` configuration section.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PaginationConfig {
    pub default_page_size: u64,
    pub max_page_size: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
        }
    }
}

/// Raw pagination parameters as they arrive in a query string.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
    #[serde(alias = "pageSize")]
    pub limit: Option<String>,
}

/// A validated page number and page size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PageRequest {
    page: u64,
    page_size: u64,
}

impl PageRequest {
    /// Validates against the default [`MAX_PAGE_SIZE`].
    pub fn new(page: u64, page_size: u64) -> Result<Self, PaginationError> {
        Self::with_max_page_size(page, page_size, MAX_PAGE_SIZE)
    }

    pub fn with_max_page_size(
        page: u64,
        page_size: u64,
        max_page_size: u64,
    ) -> Result<Self, PaginationError> {
        if page < 1 {
            return Err(PaginationError::InvalidPageRequest(
                "page must be at least 1".to_string(),
            ));
        }
        if page_size < 1 || page_size > max_page_size {
            return Err(PaginationError::InvalidPageRequest(format!(
                "page size must be between 1 and {max_page_size}"
            )));
        }
        // Stores address rows with signed 64-bit offsets.
        let fits = (page - 1)
            .checked_mul(page_size)
            .is_some_and(|offset| offset <= i64::MAX as u64);
        if !fits {
            return Err(PaginationError::InvalidPageRequest(format!(
                "page {page} is out of range"
            )));
        }

        Ok(Self { page, page_size })
    }

    /// Parses the string parameters of a [`PageQuery`], falling back to
    /// defaults for missing or blank values.
    pub fn from_query(
        query: &PageQuery,
        config: &PaginationConfig,
    ) -> Result<Self, PaginationError> {
        let page = parse_param("page", query.page.as_deref(), DEFAULT_PAGE)?;
        let page_size = parse_param("limit", query.limit.as_deref(), config.default_page_size)?;
        Self::with_max_page_size(page, page_size, config.max_page_size)
    }

    pub const fn page(&self) -> u64 {
        self.page
    }

    pub const fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Zero-based index of the first item on this page.
    pub const fn offset(&self) -> u64 {
        (self.page - 1) * self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

fn parse_param(name: &str, raw: Option<&str>, default: u64) -> Result<u64, PaginationError> {
    match raw.map(str::trim).filter(|value| !value.is_empty()) {
        None => Ok(default),
        Some(value) => value.parse::<u64>().map_err(|_| {
            PaginationError::InvalidPageRequest(format!(
                "{name} must be a positive integer, got `{value}`"
            ))
        }),
    }
}

/// Page numbers a client can jump to from the current page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub first: u64,
    pub previous: u64,
    pub current: u64,
    pub next: u64,
    pub last: u64,
}

impl Navigation {
    pub fn new(current_page: u64, total_pages: u64) -> Self {
        let last = total_pages.max(1);
        Self {
            first: 1,
            previous: current_page.saturating_sub(1).clamp(1, last),
            current: current_page.clamp(1, last),
            next: current_page.saturating_add(1).clamp(1, last),
            last,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub total_items: u64,
    pub total_pages: u64,
    pub current_page: u64,
    pub page_size: u64,
    pub offset: u64,
    pub navigation: Navigation,
}

impl<T> PageResult<T> {
    pub fn new(items: Vec<T>, request: &PageRequest, total_items: u64) -> Self {
        let total_pages = total_items.div_ceil(request.page_size()).max(1);

        Self {
            items,
            total_items,
            total_pages,
            current_page: request.page(),
            page_size: request.page_size(),
            offset: request.offset(),
            navigation: Navigation::new(request.page(), total_pages),
        }
    }

    pub fn map<U, F>(self, f: F) -> PageResult<U>
    where
        F: FnMut(T) -> U,
    {
        PageResult {
            items: self.items.into_iter().map(f).collect(),
            total_items: self.total_items,
            total_pages: self.total_pages,
            current_page: self.current_page,
            page_size: self.page_size,
            offset: self.offset,
            navigation: self.navigation,
        }
    }

    /// Wraps the page into the `data`/`meta`/`links` envelope.
    pub fn into_response(self, base: &PageLinkBase) -> PaginatedResponse<T> {
        PaginatedResponse {
            meta: PageMeta {
                items_per_page: self.page_size,
                total_items: self.total_items,
                current_page: self.current_page,
                total_pages: self.total_pages,
            },
            links: PageLinks::new(base, &self.navigation),
            data: self.items,
        }
    }
}

/// Fetches one page from a store.
///
/// `count` must apply the same filter as `fetch`, and `fetch` must return
/// items in a stable order. Errors from either call are returned unchanged.
pub fn paginate<T, E, C, F>(request: &PageRequest, count: C, fetch: F) -> Result<PageResult<T>, E>
where
    C: FnOnce() -> Result<u64, E>,
    F: FnOnce(u64, u64) -> Result<Vec<T>, E>,
{
    let total_items = count()?;
    let mut items = fetch(request.offset(), request.page_size())?;
    items.truncate(usize::try_from(request.page_size()).unwrap_or(usize::MAX));

    Ok(PageResult::new(items, request, total_items))
}

/// The parts of an incoming request URL reused by every navigation link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageLinkBase {
    scheme: String,
    host: String,
    path: String,
    query: Vec<String>,
}

impl PageLinkBase {
    /// Keeps every query pair except `page` exactly as it was encoded.
    pub fn new(
        scheme: impl Into<String>,
        host: impl Into<String>,
        path: impl Into<String>,
        query_string: &str,
    ) -> Self {
        let query = query_string
            .split('&')
            .filter(|pair| !pair.is_empty())
            .filter(|pair| pair.split('=').next() != Some(PAGE_PARAM))
            .map(str::to_string)
            .collect();

        Self {
            scheme: scheme.into(),
            host: host.into(),
            path: path.into(),
            query,
        }
    }

    pub fn url_for(&self, page: u64) -> String {
        let mut query = self.query.join("&");
        if !query.is_empty() {
            query.push('&');
        }
        format!(
            "{}://{}{}?{query}{PAGE_PARAM}={page}",
            self.scheme, self.host, self.path
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub items_per_page: u64,
    pub total_items: u64,
    pub current_page: u64,
    pub total_pages: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageLinks {
    pub first: String,
    pub previous: String,
    pub current: String,
    pub next: String,
    pub last: String,
}

impl PageLinks {
    pub fn new(base: &PageLinkBase, navigation: &Navigation) -> Self {
        Self {
            first: base.url_for(navigation.first),
            previous: base.url_for(navigation.previous),
            current: base.url_for(navigation.current),
            next: base.url_for(navigation.next),
            last: base.url_for(navigation.last),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
    pub links: PageLinks,
}
