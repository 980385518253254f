use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use uuid::Uuid;

use bingo_domain::mission::MissionType;

use crate::domain::types::Mission;
use crate::error::EventServiceError;
use crate::handlers::EventSummary;
use crate::state::AppState;
use crate::usecase::mission::GetMissionUseCase;

// ── GET /api/missions/{slug} ─────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionDetail {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub mission_type: MissionType,
    pub points: i32,
    pub qr_slug: Option<String>,
}

impl From<Mission> for MissionDetail {
    fn from(mission: Mission) -> Self {
        Self {
            id: mission.id,
            code: mission.code,
            name: mission.name,
            description: mission.description,
            mission_type: mission.mission_type,
            points: mission.points,
            qr_slug: mission.qr_slug,
        }
    }
}

#[derive(Serialize)]
pub struct MissionPageResponse {
    pub event: EventSummary,
    pub mission: MissionDetail,
}

pub async fn get_mission(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<MissionPageResponse>, EventServiceError> {
    let usecase = GetMissionUseCase {
        events: state.event_repo(),
        missions: state.mission_repo(),
    };
    let (event, mission) = usecase.execute(&state.event_code, &slug).await?;
    Ok(Json(MissionPageResponse {
        event: event.into(),
        mission: mission.into(),
    }))
}
