//! Demo authentication stub.
//!
//! There is no real authentication; the process upserts one demo user at
//! startup and this endpoint hands it back.

use axum::extract::State;
use axum::Json;
use hms_core::User;

use crate::{ApiError, AppState, ErrorBody, DEMO_USER_ID};

#[utoipa::path(
    get,
    path = "/api/auth/user",
    responses(
        (status = 200, description = "The demo user", body = User),
        (status = 404, description = "Demo user missing", body = ErrorBody)
    )
)]
pub async fn current_user(State(state): State<AppState>) -> Result<Json<User>, ApiError> {
    state
        .read()?
        .get_user(DEMO_USER_ID)
        .map(Json)
        .ok_or(ApiError::not_found("user"))
}
