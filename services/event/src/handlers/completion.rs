use axum::{
    Json,
    extract::{Path, State},
};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use bingo_domain::mission::MissionType;

use crate::error::EventServiceError;
use crate::state::AppState;
use crate::usecase::completion::{
    CompleteMissionInput, CompleteMissionOutput, CompleteMissionUseCase,
};

const ALREADY_COMPLETED_MESSAGE: &str = "this team already completed the mission here";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteMissionRequest {
    pub mission_slug: Option<String>,
    pub team_name: Option<String>,
    pub location_code: Option<String>,
    pub extra_data: Option<Value>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteMissionResponse {
    pub ok: bool,
    pub already_completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mission: Option<CompletedMission>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedMission {
    pub code: String,
    pub name: String,
    pub mission_type: MissionType,
}

impl From<CompleteMissionOutput> for CompleteMissionResponse {
    fn from(output: CompleteMissionOutput) -> Self {
        match output {
            CompleteMissionOutput::Completed { points, mission } => Self {
                ok: true,
                already_completed: false,
                points: Some(points),
                mission: Some(CompletedMission {
                    code: mission.code,
                    name: mission.name,
                    mission_type: mission.mission_type,
                }),
                message: None,
            },
            CompleteMissionOutput::AlreadyCompleted => Self {
                ok: true,
                already_completed: true,
                points: None,
                mission: None,
                message: Some(ALREADY_COMPLETED_MESSAGE),
            },
        }
    }
}

// ── POST /api/missions/{slug}/complete ───────────────────────────────────────

pub async fn complete_mission(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    WithRejection(Json(body), _): WithRejection<Json<CompleteMissionRequest>, EventServiceError>,
) -> Result<Json<CompleteMissionResponse>, EventServiceError> {
    let conflicting = body
        .mission_slug
        .as_deref()
        .map(str::trim)
        .is_some_and(|s| !s.is_empty() && s != slug.trim());
    if conflicting {
        return Err(EventServiceError::SlugMismatch);
    }
    record_completion(&state, slug, body).await
}

// ── POST /api/missions/complete ──────────────────────────────────────────────

pub async fn complete_mission_from_body(
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<CompleteMissionRequest>, EventServiceError>,
) -> Result<Json<CompleteMissionResponse>, EventServiceError> {
    let slug = body.mission_slug.clone().unwrap_or_default();
    record_completion(&state, slug, body).await
}

async fn record_completion(
    state: &AppState,
    slug: String,
    body: CompleteMissionRequest,
) -> Result<Json<CompleteMissionResponse>, EventServiceError> {
    let usecase = CompleteMissionUseCase {
        events: state.event_repo(),
        missions: state.mission_repo(),
        registrations: state.registration_repo(),
        completions: state.completion_repo(),
    };
    let output = usecase
        .execute(CompleteMissionInput {
            event_code: state.event_code.clone(),
            mission_slug: slug,
            team_name: body.team_name.unwrap_or_default(),
            location_code: body.location_code,
            extra_data: body.extra_data,
        })
        .await?;
    Ok(Json(output.into()))
}
