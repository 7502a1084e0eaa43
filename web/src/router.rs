use crate::{
    controller::{family_member_controller, health_check_controller, theme_controller},
    params, AppState,
};
use axum::{
    routing::{get, post},
    Router,
};
use domain::family_members::{
    AncestorSummary, Envelope, FamilyMember, FamilyMemberDetails, PagedResult, Relation,
    SearchBetweenResult,
};
use domain::FamilyTreeClient;
use std::sync::Arc;
use tower_http::services::ServeDir;

use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

// This is the global definition of our OpenAPI spec. To be a part
// of the rendered spec, a path and schema must be listed here.
#[derive(OpenApi)]
#[openapi(
        info(
            title = "Family Tree API"
        ),
        paths(
            family_member_controller::index,
            family_member_controller::search,
            family_member_controller::details,
            family_member_controller::search_between,
            theme_controller::read,
            theme_controller::update,
            theme_controller::toggle,
            health_check_controller::health_check,
        ),
        components(
            schemas(
                Envelope<PagedResult<FamilyMember>>,
                Envelope<FamilyMemberDetails>,
                Envelope<SearchBetweenResult>,
                FamilyMember,
                FamilyMemberDetails,
                AncestorSummary,
                Relation,
                SearchBetweenResult,
                domain::theme::Theme,
                domain::theme::ThemeState,
                params::theme::UpdateParams,
            )
        ),
        tags(
            (name = "family_tree", description = "Family tree browsing API relayed from the family members service")
        )
    )]
struct ApiDoc;

// Anything the API doesn't handle is served from the built browser client.
pub fn define_routes(app_state: AppState) -> Router {
    let static_dir = app_state.config.static_dir().to_string();

    Router::new()
        .merge(family_member_routes(app_state.clone()))
        .merge(theme_routes(app_state))
        .merge(health_routes())
        .merge(RapiDoc::with_openapi("/api-docs/openapi.json", ApiDoc::openapi()).path("/rapidoc"))
        .fallback_service(ServeDir::new(static_dir))
}

// One upstream client shared by every family member request.
fn family_member_routes(app_state: AppState) -> Router {
    let client = Arc::new(FamilyTreeClient::new(
        &app_state.config,
        app_state.http_client_ref(),
    ));

    Router::new()
        .route(
            "/api/family-members",
            get(family_member_controller::index),
        )
        .route(
            "/api/family-members/search",
            get(family_member_controller::search),
        )
        .route(
            "/api/family-members/{id}/details",
            get(family_member_controller::details),
        )
        .route(
            "/api/family-members/search-between/{id1}/{id2}",
            get(family_member_controller::search_between),
        )
        .with_state(client)
}

fn theme_routes(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/api/theme",
            get(theme_controller::read).put(theme_controller::update),
        )
        .route("/api/theme/toggle", post(theme_controller::toggle))
        .with_state(app_state)
}

fn health_routes() -> Router {
    Router::new().route("/health", get(health_check_controller::health_check))
}
