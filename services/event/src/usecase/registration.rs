use chrono::Utc;
use serde_json::{Value, json};
use tracing::{info, warn};
use uuid::Uuid;

use bingo_domain::member::MemberRole;
use bingo_domain::mission::{REGISTRATION_LOCATION_CODE, REGISTRATION_MISSION_CODE};

use crate::domain::repository::{
    CompletionRepository, EventRepository, MissionRepository, RegistrationRepository,
};
use crate::domain::types::{FamilyMember, Household, MissionCompletion, Registration};
use crate::error::EventServiceError;
use crate::usecase::resolve_event;

const DEFAULT_SOURCE: &str = "web";

// ── RegisterFamily ───────────────────────────────────────────────────────────

pub struct RegisterFamilyInput {
    pub event_code: String,
    pub family_size: Option<i32>,
    pub team_name: Option<String>,
    pub members: Option<Vec<MemberRole>>,
    pub area: Option<String>,
    pub interests: Vec<String>,
    pub source: Option<String>,
    /// Request body as received, stored for auditing.
    pub raw_payload: Value,
}

#[derive(Debug, Clone)]
pub struct RegisterFamilyOutput {
    pub event_id: Uuid,
    pub household_id: Uuid,
    pub registration_id: Uuid,
}

pub struct RegisterFamilyUseCase<
    E: EventRepository,
    R: RegistrationRepository,
    M: MissionRepository,
    C: CompletionRepository,
> {
    pub events: E,
    pub registrations: R,
    pub missions: M,
    pub completions: C,
}

impl<E, R, M, C> RegisterFamilyUseCase<E, R, M, C>
where
    E: EventRepository,
    R: RegistrationRepository,
    M: MissionRepository,
    C: CompletionRepository,
{
    pub async fn execute(
        &self,
        input: RegisterFamilyInput,
    ) -> Result<RegisterFamilyOutput, EventServiceError> {
        let family_size = match input.family_size {
            Some(n) if n > 0 => n,
            _ => return Err(EventServiceError::InvalidFamilySize),
        };
        let team_name = input
            .team_name
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(EventServiceError::TeamNameRequired)?
            .to_owned();
        let roles = input
            .members
            .filter(|m| !m.is_empty())
            .ok_or(EventServiceError::MembersRequired)?;

        let event = resolve_event(&self.events, &input.event_code).await?;

        let now = Utc::now();
        let household = Household {
            id: Uuid::now_v7(),
            created_at: now,
        };
        let members: Vec<FamilyMember> = roles
            .into_iter()
            .map(|role| FamilyMember::from_role(household.id, role, now))
            .collect();
        let registration = Registration {
            id: Uuid::now_v7(),
            event_id: event.id,
            household_id: household.id,
            family_size,
            area: input.area,
            interests: input.interests,
            team_name,
            source: input.source.unwrap_or_else(|| DEFAULT_SOURCE.to_owned()),
            raw_payload: input.raw_payload,
            created_at: now,
        };

        self.registrations
            .create_with_members(&household, &members, &registration)
            .await?;
        info!(
            registration_id = %registration.id,
            household_id = %household.id,
            members = members.len(),
            team_name = %registration.team_name,
            "family registered"
        );

        self.complete_registration_mission(event.id, registration.id)
            .await;

        Ok(RegisterFamilyOutput {
            event_id: event.id,
            household_id: household.id,
            registration_id: registration.id,
        })
    }

    /// Best effort: failures are logged and never fail the registration.
    async fn complete_registration_mission(&self, event_id: Uuid, registration_id: Uuid) {
        let mission = match self
            .missions
            .find_by_code(event_id, REGISTRATION_MISSION_CODE)
            .await
        {
            Ok(Some(mission)) => mission,
            Ok(None) => return,
            Err(e) => {
                warn!(error = ?e, %registration_id, "registration mission lookup failed");
                return;
            }
        };
        let completion = MissionCompletion::new(
            mission.id,
            registration_id,
            REGISTRATION_LOCATION_CODE,
            json!({}),
        );
        if let Err(e) = self.completions.record(&completion).await {
            warn!(error = ?e, %registration_id, "registration mission completion failed");
        }
    }
}
