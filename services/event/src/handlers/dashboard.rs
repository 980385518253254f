use axum::{Json, extract::State};
use serde::Serialize;

use crate::domain::dashboard::DashboardReport;
use crate::error::EventServiceError;
use crate::handlers::EventDetail;
use crate::state::AppState;
use crate::usecase::dashboard::GetDashboardUseCase;

// ── GET /api/dashboard ───────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct DashboardResponse {
    pub event: EventDetail,
    #[serde(flatten)]
    pub report: DashboardReport,
}

pub async fn get_dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, EventServiceError> {
    let usecase = GetDashboardUseCase {
        events: state.event_repo(),
        registrations: state.registration_repo(),
        members: state.member_repo(),
        missions: state.mission_repo(),
        completions: state.completion_repo(),
    };
    let (event, report) = usecase.execute(&state.event_code).await?;
    Ok(Json(DashboardResponse {
        event: event.into(),
        report,
    }))
}
