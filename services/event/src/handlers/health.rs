use axum::extract::State;
use axum::http::StatusCode;

use bingo_core::health::readiness;

use crate::state::AppState;

/// Handler for `GET /readyz`: ready when the database answers a ping.
pub async fn readyz(State(state): State<AppState>) -> StatusCode {
    let ready = match state.db.ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "database ping failed");
            false
        }
    };
    readiness(ready)
}
