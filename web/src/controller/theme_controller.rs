use crate::extractors::theme_preference::ThemePreference;
use crate::params::theme::UpdateParams;
use crate::AppState;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use domain::theme::{Theme, ThemeState, THEME_COOKIE};
use time::Duration;

use log::*;

/// Cookie persisting `theme` for a year. Readable by client scripts, so never HttpOnly.
fn theme_cookie(theme: Theme, secure: bool) -> Cookie<'static> {
    Cookie::build((THEME_COOKIE, theme.as_str()))
        .path("/")
        .same_site(SameSite::Lax)
        .max_age(Duration::days(365))
        .http_only(false)
        .secure(secure)
        .build()
}

fn store(app_state: &AppState, theme: Theme) -> impl IntoResponse {
    let jar = CookieJar::new().add(theme_cookie(theme, app_state.config.is_production()));

    (jar, Json(ThemeState::from(theme)))
}

/// GET the visitor's colour theme preference
#[utoipa::path(
    get,
    path = "/api/theme",
    responses(
        (status = 200, description = "Current theme, light when none was stored", body = ThemeState)
    )
)]
pub async fn read(ThemePreference(theme): ThemePreference) -> impl IntoResponse {
    Json(ThemeState::from(theme))
}

/// PUT a new colour theme preference
#[utoipa::path(
    put,
    path = "/api/theme",
    request_body = UpdateParams,
    responses(
        (status = 200, description = "Theme stored", body = ThemeState),
        (status = 422, description = "Unknown theme")
    )
)]
pub async fn update(
    State(app_state): State<AppState>,
    Json(params): Json<UpdateParams>,
) -> impl IntoResponse {
    debug!("PUT Theme: {}", params.theme);

    store(&app_state, params.theme)
}

/// POST switch between the light and dark theme
#[utoipa::path(
    post,
    path = "/api/theme/toggle",
    responses(
        (status = 200, description = "Theme switched", body = ThemeState)
    )
)]
pub async fn toggle(
    State(app_state): State<AppState>,
    ThemePreference(theme): ThemePreference,
) -> impl IntoResponse {
    let theme = theme.toggle();
    debug!("POST Toggle theme to: {theme}");

    store(&app_state, theme)
}
