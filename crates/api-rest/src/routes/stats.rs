//! Dashboard statistics endpoint.

use axum::extract::State;
use axum::Json;
use hms_core::Statistics;

use crate::{ApiError, AppState};

#[utoipa::path(
    get,
    path = "/api/statistics",
    responses(
        (status = 200, description = "Fresh dashboard counters", body = Statistics)
    )
)]
pub async fn get_statistics(State(state): State<AppState>) -> Result<Json<Statistics>, ApiError> {
    Ok(Json(state.read()?.get_statistics()))
}
