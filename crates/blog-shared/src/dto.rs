//! Data Transfer Objects - request shapes for the API.

use serde::{Deserialize, Serialize};

use blog_core::PageRequest;

/// Query string accepted by `GET /posts`.
///
/// Values are kept raw so that unparseable numbers fall back to an
/// unpaginated listing instead of rejecting the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPostsQuery {
    pub page_number: Option<String>,
    pub page_size: Option<String>,
    pub search: Option<String>,
}

impl ListPostsQuery {
    /// A page request when both page parameters parse as integers.
    pub fn page_request(&self) -> Option<PageRequest> {
        let number = parse_int(self.page_number.as_deref())?;
        let size = parse_int(self.page_size.as_deref())?;
        Some(PageRequest::from_signed(i64::from(number), i64::from(size)))
    }

    /// The search term, unless absent or blank.
    pub fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .filter(|term| !term.trim().is_empty())
    }
}

fn parse_int(raw: Option<&str>) -> Option<i32> {
    raw?.trim().parse().ok()
}
