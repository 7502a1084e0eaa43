use domain::family_member::PageParams;
use utoipa::IntoParams;

/// Raw query pairs as the client sent them, repeated keys included.
pub(crate) type QueryPairs = Vec<(String, String)>;

/// Value of `name`, with repeated occurrences joined by `,`.
fn joined(pairs: &[(String, String)], name: &str) -> Option<String> {
    let values: Vec<&str> = pairs
        .iter()
        .filter(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
        .collect();

    (!values.is_empty()).then(|| values.join(","))
}

/// Query accepted by `GET /api/family-members`.
#[derive(Debug, Default, IntoParams)]
#[into_params(rename_all = "PascalCase", parameter_in = Query)]
pub(crate) struct IndexParams {
    /// Page to fetch, defaults to 1
    pub(crate) page_number: Option<String>,
    /// Records per page, defaults to 10
    pub(crate) page_size: Option<String>,
}

impl From<QueryPairs> for IndexParams {
    fn from(pairs: QueryPairs) -> Self {
        IndexParams {
            page_number: joined(&pairs, "PageNumber"),
            page_size: joined(&pairs, "PageSize"),
        }
    }
}

impl From<IndexParams> for PageParams {
    fn from(params: IndexParams) -> Self {
        PageParams {
            page_number: params.page_number,
            page_size: params.page_size,
        }
    }
}

/// Query accepted by `GET /api/family-members/search`.
#[derive(Debug, Default, IntoParams)]
#[into_params(rename_all = "PascalCase", parameter_in = Query)]
pub(crate) struct SearchParams {
    /// Page to fetch, defaults to 1
    pub(crate) page_number: Option<String>,
    /// Records per page, defaults to 50
    pub(crate) page_size: Option<String>,
    /// Free text matched by the upstream, only forwarded when non-empty
    pub(crate) search: Option<String>,
}

impl From<QueryPairs> for SearchParams {
    fn from(pairs: QueryPairs) -> Self {
        SearchParams {
            page_number: joined(&pairs, "PageNumber"),
            page_size: joined(&pairs, "PageSize"),
            search: joined(&pairs, "Search"),
        }
    }
}

impl SearchParams {
    /// Splits into the paging part and the search term.
    pub(crate) fn into_parts(self) -> (PageParams, Option<String>) {
        (
            PageParams {
                page_number: self.page_number,
                page_size: self.page_size,
            },
            self.search,
        )
    }
}
