use axum::{extract::State, Json};
use serde::Serialize;
use tracing::instrument;

use super::levels;
use crate::{auth::extractors::AuthUser, auth::repo_types::User, error::ApiError, state::AppState};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub profile_image: Option<String>,
    pub age: Option<f64>,
    pub xp: f64,
    pub level: i64,
    pub progress: f64,
}

#[instrument(skip(state))]
pub async fn dashboard(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
) -> Result<Json<DashboardResponse>, ApiError> {
    let user = User::find_by_id(&state.db, claims.sub)
        .await?
        .ok_or(ApiError::NotFound)?;

    let xp = levels::normalize(user.xp);
    let stats = levels::compute(xp);

    Ok(Json(DashboardResponse {
        name: user.name,
        email: user.email,
        phone: user.phone,
        profile_image: user.profile_image,
        age: user.age,
        xp,
        level: stats.level,
        progress: stats.progress,
    }))
}
