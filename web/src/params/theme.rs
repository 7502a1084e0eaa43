use domain::theme::Theme;
use serde::Deserialize;
use utoipa::ToSchema;

/// Body of `PUT /api/theme`.
#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct UpdateParams {
    pub(crate) theme: Theme,
}
