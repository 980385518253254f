use serde_json::Value;
use tracing::info;

use bingo_domain::mission::normalize_location_code;

use crate::domain::repository::{
    CompletionRepository, EventRepository, MissionRepository, RegistrationRepository,
};
use crate::domain::types::{Mission, MissionCompletion};
use crate::error::EventServiceError;
use crate::usecase::resolve_event;

// ── CompleteMission ──────────────────────────────────────────────────────────

pub struct CompleteMissionInput {
    pub event_code: String,
    pub mission_slug: String,
    pub team_name: String,
    pub location_code: Option<String>,
    pub extra_data: Option<Value>,
}

#[derive(Debug, Clone)]
pub enum CompleteMissionOutput {
    Completed { points: i32, mission: Mission },
    AlreadyCompleted,
}

pub struct CompleteMissionUseCase<
    E: EventRepository,
    M: MissionRepository,
    R: RegistrationRepository,
    C: CompletionRepository,
> {
    pub events: E,
    pub missions: M,
    pub registrations: R,
    pub completions: C,
}

impl<E, M, R, C> CompleteMissionUseCase<E, M, R, C>
where
    E: EventRepository,
    M: MissionRepository,
    R: RegistrationRepository,
    C: CompletionRepository,
{
    pub async fn execute(
        &self,
        input: CompleteMissionInput,
    ) -> Result<CompleteMissionOutput, EventServiceError> {
        let slug = input.mission_slug.trim();
        let team_name = input.team_name.trim();
        if slug.is_empty() || team_name.is_empty() {
            return Err(EventServiceError::MissingParameters);
        }

        let event = resolve_event(&self.events, &input.event_code).await?;
        let mission = self
            .missions
            .find_active_by_slug(event.id, slug)
            .await?
            .ok_or(EventServiceError::MissionNotFound)?;
        let registration = self
            .registrations
            .find_by_team_name(event.id, team_name)
            .await?
            .ok_or(EventServiceError::TeamNotFound)?;

        let completion = MissionCompletion::new(
            mission.id,
            registration.id,
            normalize_location_code(input.location_code.as_deref()),
            input.extra_data.unwrap_or_else(|| Value::Object(Default::default())),
        );
        if !self.completions.record(&completion).await? {
            return Ok(CompleteMissionOutput::AlreadyCompleted);
        }

        info!(
            mission = %mission.code,
            registration_id = %registration.id,
            location = %completion.location_code,
            "mission completed"
        );
        Ok(CompleteMissionOutput::Completed {
            points: mission.points,
            mission,
        })
    }
}
