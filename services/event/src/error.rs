use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Event service error variants.
#[derive(Debug, thiserror::Error)]
pub enum EventServiceError {
    #[error("family size must be a positive number")]
    InvalidFamilySize,
    #[error("team name is required")]
    TeamNameRequired,
    #[error("at least one member is required")]
    MembersRequired,
    #[error("mission slug and team name are required")]
    MissingParameters,
    #[error("mission slug in body does not match path")]
    SlugMismatch,
    #[error("url is required")]
    MissingUrl,
    #[error("invalid request body")]
    InvalidBody,
    #[error("event not found")]
    EventNotFound,
    #[error("mission not found or inactive")]
    MissionNotFound,
    #[error("team not found")]
    TeamNotFound,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl EventServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidFamilySize => "INVALID_FAMILY_SIZE",
            Self::TeamNameRequired => "TEAM_NAME_REQUIRED",
            Self::MembersRequired => "MEMBERS_REQUIRED",
            Self::MissingParameters => "MISSING_PARAMETERS",
            Self::SlugMismatch => "SLUG_MISMATCH",
            Self::MissingUrl => "MISSING_URL",
            Self::InvalidBody => "INVALID_BODY",
            Self::EventNotFound => "EVENT_NOT_FOUND",
            Self::MissionNotFound => "MISSION_NOT_FOUND",
            Self::TeamNotFound => "TEAM_NOT_FOUND",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl From<JsonRejection> for EventServiceError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection, "rejected request body");
        Self::InvalidBody
    }
}

impl IntoResponse for EventServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidFamilySize
            | Self::TeamNameRequired
            | Self::MembersRequired
            | Self::MissingParameters
            | Self::SlugMismatch
            | Self::MissingUrl
            | Self::InvalidBody => StatusCode::BAD_REQUEST,
            Self::EventNotFound | Self::MissionNotFound | Self::TeamNotFound => {
                StatusCode::NOT_FOUND
            }
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let Self::Internal(ref e) = self {
            tracing::error!(error = ?e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
