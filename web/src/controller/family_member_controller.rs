use crate::params::family_member::{IndexParams, QueryPairs, SearchParams};
use crate::response::passthrough::Passthrough;
use crate::Error;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use domain::family_members::{
    Envelope, FamilyMember, FamilyMemberDetails, PagedResult, SearchBetweenResult,
};
use domain::{family_member as FamilyMemberApi, FamilyTreeClient};
use std::sync::Arc;

use log::*;

/// GET a page of family members
#[utoipa::path(
    get,
    path = "/api/family-members",
    params(IndexParams),
    responses(
        (status = 200, description = "Upstream envelope holding a page of family members", body = Envelope<PagedResult<FamilyMember>>),
        (status = 500, description = "Upstream unreachable, or the upstream's own error status")
    )
)]
pub async fn index(
    State(client): State<Arc<FamilyTreeClient>>,
    Query(pairs): Query<QueryPairs>,
) -> Result<impl IntoResponse, Error> {
    let params = IndexParams::from(pairs);
    debug!("GET Family members: {params:?}");

    let response = FamilyMemberApi::find_by_page(&client, params.into()).await?;

    Ok(Passthrough(response))
}

/// GET a page of family members matching a search term
#[utoipa::path(
    get,
    path = "/api/family-members/search",
    params(SearchParams),
    responses(
        (status = 200, description = "Upstream envelope holding a page of matching family members", body = Envelope<PagedResult<FamilyMember>>),
        (status = 500, description = "Upstream unreachable, or the upstream's own error status")
    )
)]
pub async fn search(
    State(client): State<Arc<FamilyTreeClient>>,
    Query(pairs): Query<QueryPairs>,
) -> Result<impl IntoResponse, Error> {
    let params = SearchParams::from(pairs);
    debug!("GET Search family members: {params:?}");

    let (paging, search) = params.into_parts();
    let response = FamilyMemberApi::search(&client, paging, search).await?;

    Ok(Passthrough(response))
}

/// GET the full record of a family member specified by its id.
#[utoipa::path(
    get,
    path = "/api/family-members/{id}/details",
    params(
        ("id" = String, Path, description = "Family member id to retrieve")
    ),
    responses(
        (status = 200, description = "Upstream envelope holding the member's details", body = Envelope<FamilyMemberDetails>),
        (status = 400, description = "Member ID is required"),
        (status = 404, description = "Family member not found upstream"),
        (status = 500, description = "Upstream unreachable")
    )
)]
pub async fn details(
    State(client): State<Arc<FamilyTreeClient>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET Family member details by id: {id}");

    let response = FamilyMemberApi::find_details(&client, &id).await?;

    Ok(Passthrough(response))
}

/// GET the ancestor chains of two family members and their common ancestor.
#[utoipa::path(
    get,
    path = "/api/family-members/search-between/{id1}/{id2}",
    params(
        ("id1" = String, Path, description = "Id of the first family member"),
        ("id2" = String, Path, description = "Id of the second family member")
    ),
    responses(
        (status = 200, description = "Upstream envelope holding both ancestor chains", body = Envelope<SearchBetweenResult>),
        (status = 400, description = "Both member IDs are required"),
        (status = 404, description = "No common ancestor found upstream"),
        (status = 500, description = "Upstream unreachable")
    )
)]
pub async fn search_between(
    State(client): State<Arc<FamilyTreeClient>>,
    Path((id1, id2)): Path<(String, String)>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET Common ancestor between: {id1} and {id2}");

    let response = FamilyMemberApi::search_between(&client, &id1, &id2).await?;

    Ok(Passthrough(response))
}
