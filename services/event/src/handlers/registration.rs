use axum::{Json, extract::State};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use bingo_domain::member::MemberRole;

use crate::error::EventServiceError;
use crate::state::AppState;
use crate::usecase::registration::{RegisterFamilyInput, RegisterFamilyUseCase};

// ── POST /api/registration ───────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub family_size: Option<i32>,
    pub members: Option<Vec<MemberRequest>>,
    pub area: Option<String>,
    pub interests: Option<Vec<String>>,
    pub team_name: Option<String>,
    pub source: Option<String>,
}

/// One member as sent by the wizard. Client-side ids are ignored.
#[derive(Deserialize)]
pub struct MemberRequest {
    pub role: MemberRole,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationResponse {
    pub ok: bool,
    pub event_id: Uuid,
    pub household_id: Uuid,
    pub registration_id: Uuid,
}

pub async fn register_family(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<Value>, EventServiceError>,
) -> Result<Json<RegistrationResponse>, EventServiceError> {
    let body: RegistrationRequest =
        serde_json::from_value(payload.clone()).map_err(|_| EventServiceError::InvalidBody)?;

    let usecase = RegisterFamilyUseCase {
        events: state.event_repo(),
        registrations: state.registration_repo(),
        missions: state.mission_repo(),
        completions: state.completion_repo(),
    };
    let output = usecase
        .execute(RegisterFamilyInput {
            event_code: state.event_code.clone(),
            family_size: body.family_size,
            team_name: body.team_name,
            members: body
                .members
                .map(|members| members.into_iter().map(|m| m.role).collect()),
            area: body.area,
            interests: body.interests.unwrap_or_default(),
            source: body.source,
            raw_payload: payload,
        })
        .await?;

    Ok(Json(RegistrationResponse {
        ok: true,
        event_id: output.event_id,
        household_id: output.household_id,
        registration_id: output.registration_id,
    }))
}
