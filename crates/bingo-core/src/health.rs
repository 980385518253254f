use axum::http::StatusCode;

/// Liveness handler for `GET /healthz`.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Maps a dependency probe result to the status a readiness handler returns.
pub fn readiness(ready: bool) -> StatusCode {
    if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}
