//! Paginated list contract shared by the list endpoint and the client.
//!
//! A [`ListQuery`] is the normalized form of the `page`, `limit`, `title`,
//! `artist`, `album`, `sortBy` and `sortOrder` query parameters. The server
//! builds one from raw strings, the client builds one from user input, and
//! both agree on defaults and on how blank filters are dropped.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Page returned when `page` is missing or unusable.
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when `limit` is missing or unusable.
pub const DEFAULT_LIMIT: u32 = 10;

/// Coerce a raw query value into a positive integer.
///
/// Missing, non-numeric, zero and negative values all fall back to `default`.
pub fn coerce_positive(raw: Option<&str>, default: u32) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|&n| n > 0)
        .unwrap_or(default)
}

/// Number of pages needed to hold `total_items` at `limit` per page.
pub fn total_pages(total_items: u64, limit: u32) -> u64 {
    if limit == 0 {
        return 0;
    }
    total_items.div_ceil(u64::from(limit))
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Track attribute a list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Title,
    Artist,
    Album,
    #[default]
    CreatedAt,
    UpdatedAt,
}

impl SortField {
    pub const ALL: [SortField; 5] = [
        SortField::Title,
        SortField::Artist,
        SortField::Album,
        SortField::CreatedAt,
        SortField::UpdatedAt,
    ];

    /// Wire name used in the `sortBy` parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Title => "title",
            SortField::Artist => "artist",
            SortField::Album => "album",
            SortField::CreatedAt => "createdAt",
            SortField::UpdatedAt => "updatedAt",
        }
    }

    /// Parse a `sortBy` value. Unknown names yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == raw)
    }

    /// Parse a `sortBy` value, falling back to `createdAt`.
    pub fn parse_or_default(raw: Option<&str>) -> Self {
        raw.and_then(Self::parse).unwrap_or_default()
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of a sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    /// Only `asc` selects ascending order; anything else is descending.
    pub fn parse_or_default(raw: Option<&str>) -> Self {
        match raw {
            Some(value) if value.eq_ignore_ascii_case("asc") => SortOrder::Asc,
            _ => SortOrder::Desc,
        }
    }

    /// Orient a natural (ascending) comparison.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort field plus direction. Defaults to newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortSpec {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Case-insensitive substring constraints on title, artist and album.
///
/// Every present term must match (logical AND). Empty terms are never
/// stored, so a present term is always non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrackFilter {
    title: Option<String>,
    artist: Option<String>,
    album: Option<String>,
}

impl TrackFilter {
    /// Filter from query parameters. Empty terms are absent; any other term,
    /// whitespace included, is matched as given.
    pub fn new(title: Option<String>, artist: Option<String>, album: Option<String>) -> Self {
        Self {
            title: title.filter(|t| !t.is_empty()),
            artist: artist.filter(|t| !t.is_empty()),
            album: album.filter(|t| !t.is_empty()),
        }
    }

    /// Filter from user-entered text, where blank input means no filter.
    pub fn from_input(
        title: Option<String>,
        artist: Option<String>,
        album: Option<String>,
    ) -> Self {
        Self::new(drop_blank(title), drop_blank(artist), drop_blank(album))
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn artist(&self) -> Option<&str> {
        self.artist.as_deref()
    }

    pub fn album(&self) -> Option<&str> {
        self.album.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.artist.is_none() && self.album.is_none()
    }

    /// Present terms as `(field name, term)` pairs, in title/artist/album order.
    pub fn terms(&self) -> Vec<(&'static str, &str)> {
        [
            ("title", self.title()),
            ("artist", self.artist()),
            ("album", self.album()),
        ]
        .into_iter()
        .filter_map(|(name, term)| term.map(|t| (name, t)))
        .collect()
    }

    /// Whether a record with the given fields satisfies every present term.
    pub fn matches(&self, title: &str, artist: &str, album: &str) -> bool {
        let ok = |term: Option<&str>, value: &str| {
            term.map_or(true, |t| contains_ignore_case(value, t))
        };
        ok(self.title(), title) && ok(self.artist(), artist) && ok(self.album(), album)
    }
}

fn drop_blank(term: Option<String>) -> Option<String> {
    term.filter(|t| !t.trim().is_empty())
}

/// Case-insensitive substring test.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

/// A fully-defaulted list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub limit: u32,
    pub filter: TrackFilter,
    pub sort: SortSpec,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            filter: TrackFilter::default(),
            sort: SortSpec::default(),
        }
    }
}

impl ListQuery {
    /// Records to skip before the requested page starts.
    pub fn skip(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.limit)
    }

    /// Flat query parameters in wire form.
    ///
    /// Absent filters are omitted; `page`, `limit`, `sortBy` and `sortOrder`
    /// are always present.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];
        for (name, term) in self.filter.terms() {
            params.push((name, term.to_string()));
        }
        params.push(("sortBy", self.sort.field.as_str().to_string()));
        params.push(("sortOrder", self.sort.order.as_str().to_string()));
        params
    }
}

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

/// Pagination metadata returned alongside a page of records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// The requested page, echoed back even when it lies past the last page.
    pub current_page: u32,
    pub total_pages: u64,
    pub total_items: u64,
    pub page_size: u32,
}

impl Pagination {
    pub fn new(query: &ListQuery, total_items: u64) -> Self {
        Self {
            current_page: query.page,
            total_pages: total_pages(total_items, query.limit),
            total_items,
            page_size: query.limit,
        }
    }
}

/// `{ "data": [...], "pagination": {...} }` list envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
