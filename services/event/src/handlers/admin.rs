use axum::{Json, extract::State};
use serde::Serialize;
use uuid::Uuid;

use bingo_domain::mission::MissionType;

use crate::error::EventServiceError;
use crate::handlers::EventDetail;
use crate::state::AppState;
use crate::usecase::mission::ListMissionsUseCase;

// ── GET /api/admin/missions ──────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminMission {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub mission_type: MissionType,
    pub points: i32,
    pub qr_slug: Option<String>,
    pub is_active: bool,
    /// Public mission page, `null` when the mission has no QR slug.
    pub url: Option<String>,
}

#[derive(Serialize)]
pub struct AdminMissionsResponse {
    pub event: EventDetail,
    pub missions: Vec<AdminMission>,
}

pub async fn list_admin_missions(
    State(state): State<AppState>,
) -> Result<Json<AdminMissionsResponse>, EventServiceError> {
    let usecase = ListMissionsUseCase {
        events: state.event_repo(),
        missions: state.mission_repo(),
    };
    let (event, missions) = usecase.execute(&state.event_code).await?;
    let missions = missions
        .into_iter()
        .map(|m| AdminMission {
            url: m.url(&state.site_url),
            id: m.id,
            code: m.code,
            name: m.name,
            description: m.description,
            mission_type: m.mission_type,
            points: m.points,
            qr_slug: m.qr_slug,
            is_active: m.is_active,
        })
        .collect();
    Ok(Json(AdminMissionsResponse {
        event: event.into(),
        missions,
    }))
}
