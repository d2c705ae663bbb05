//! Query parameter types for API handlers.

use serde::Deserialize;
use tracklist_core::listing::{
    coerce_positive, ListQuery, SortField, SortOrder, SortSpec, TrackFilter, DEFAULT_LIMIT,
    DEFAULT_PAGE,
};

/// Raw `GET /api/tracks` parameters.
///
/// Every value is taken as a string so that malformed numbers fall back to
/// their defaults instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTracksParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

impl ListTracksParams {
    /// Apply defaults and coercion.
    pub fn into_list_query(self) -> ListQuery {
        ListQuery {
            page: coerce_positive(self.page.as_deref(), DEFAULT_PAGE),
            limit: coerce_positive(self.limit.as_deref(), DEFAULT_LIMIT),
            filter: TrackFilter::new(self.title, self.artist, self.album),
            sort: SortSpec::new(
                SortField::parse_or_default(self.sort_by.as_deref()),
                SortOrder::parse_or_default(self.sort_order.as_deref()),
            ),
        }
    }
}
