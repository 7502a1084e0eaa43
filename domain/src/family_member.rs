//! Read-only family member operations relayed to the upstream API.
//!
//! Each operation is a thin declaration over [`FamilyTreeClient::forward`]: it names the
//! upstream path, the query it sends, and the message reported when the upstream fails
//! without saying why.

use crate::error::Error;
use crate::gateway::family_tree::{Endpoint, FamilyTreeClient, UpstreamResponse};
use log::*;

const MEMBERS_PATH: &str = "/api/FamilyMembers";

pub const DEFAULT_PAGE_NUMBER: &str = "1";
pub const DEFAULT_LIST_PAGE_SIZE: &str = "10";
pub const DEFAULT_SEARCH_PAGE_SIZE: &str = "50";

const FETCH_MEMBERS_FAILED: &str = "Failed to fetch family members";
const FETCH_DETAILS_FAILED: &str = "Failed to fetch family member details";
const FETCH_COMMON_ANCESTOR_FAILED: &str = "Failed to fetch common ancestor";

const MEMBER_ID_REQUIRED: &str = "Member ID is required";
const BOTH_MEMBER_IDS_REQUIRED: &str = "Both member IDs are required";

/// Paging values exactly as the client sent them. Values are not parsed; an absent or
/// empty value falls back to the operation's default and anything else is forwarded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageParams {
    pub page_number: Option<String>,
    pub page_size: Option<String>,
}

impl PageParams {
    fn into_endpoint(self, endpoint: Endpoint, default_page_size: &str) -> Endpoint {
        endpoint
            .with_query(
                "PageNumber",
                or_default(self.page_number, DEFAULT_PAGE_NUMBER),
            )
            .with_query("PageSize", or_default(self.page_size, default_page_size))
    }
}

fn or_default(value: Option<String>, default: &str) -> String {
    value
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn list_endpoint(params: PageParams) -> Endpoint {
    params.into_endpoint(
        Endpoint::new(MEMBERS_PATH, FETCH_MEMBERS_FAILED),
        DEFAULT_LIST_PAGE_SIZE,
    )
}

fn search_endpoint(params: PageParams, search: Option<String>) -> Endpoint {
    let endpoint = params.into_endpoint(
        Endpoint::new(MEMBERS_PATH, FETCH_MEMBERS_FAILED),
        DEFAULT_SEARCH_PAGE_SIZE,
    );

    match search.filter(|term| !term.is_empty()) {
        Some(term) => endpoint.with_query("Search", term),
        None => endpoint,
    }
}

fn details_endpoint(id: &str) -> Result<Endpoint, Error> {
    if id.is_empty() {
        warn!("Rejecting details request without a member id");
        return Err(Error::validation(MEMBER_ID_REQUIRED));
    }

    Ok(Endpoint::new(
        format!("{MEMBERS_PATH}/{}/details", urlencoding::encode(id)),
        FETCH_DETAILS_FAILED,
    ))
}

fn search_between_endpoint(id1: &str, id2: &str) -> Result<Endpoint, Error> {
    if id1.is_empty() || id2.is_empty() {
        warn!("Rejecting search-between request without both member ids");
        return Err(Error::validation(BOTH_MEMBER_IDS_REQUIRED));
    }

    Ok(Endpoint::new(
        format!(
            "{MEMBERS_PATH}/search-between/{}/{}",
            urlencoding::encode(id1),
            urlencoding::encode(id2)
        ),
        FETCH_COMMON_ANCESTOR_FAILED,
    ))
}

/// GET one page of family members.
pub async fn find_by_page(
    client: &FamilyTreeClient,
    params: PageParams,
) -> Result<UpstreamResponse, Error> {
    client.forward(&list_endpoint(params)).await
}

/// GET one page of family members matching an optional search term.
pub async fn search(
    client: &FamilyTreeClient,
    params: PageParams,
    search: Option<String>,
) -> Result<UpstreamResponse, Error> {
    client.forward(&search_endpoint(params, search)).await
}

/// GET the full record of one family member.
pub async fn find_details(client: &FamilyTreeClient, id: &str) -> Result<UpstreamResponse, Error> {
    let endpoint = details_endpoint(id)?;
    client.forward(&endpoint).await
}

/// GET the ancestor chains of two members and the ancestor they share.
pub async fn search_between(
    client: &FamilyTreeClient,
    id1: &str,
    id2: &str,
) -> Result<UpstreamResponse, Error> {
    let endpoint = search_between_endpoint(id1, id2)?;
    client.forward(&endpoint).await
}
