use crate::domain::repository::{EventRepository, MissionRepository};
use crate::domain::types::{Event, Mission};
use crate::error::EventServiceError;
use crate::usecase::resolve_event;

// ── GetMission ───────────────────────────────────────────────────────────────

pub struct GetMissionUseCase<E: EventRepository, M: MissionRepository> {
    pub events: E,
    pub missions: M,
}

impl<E: EventRepository, M: MissionRepository> GetMissionUseCase<E, M> {
    pub async fn execute(
        &self,
        event_code: &str,
        slug: &str,
    ) -> Result<(Event, Mission), EventServiceError> {
        let event = resolve_event(&self.events, event_code).await?;
        let mission = self
            .missions
            .find_active_by_slug(event.id, slug.trim())
            .await?
            .ok_or(EventServiceError::MissionNotFound)?;
        Ok((event, mission))
    }
}

// ── ListMissions (admin) ─────────────────────────────────────────────────────

pub struct ListMissionsUseCase<E: EventRepository, M: MissionRepository> {
    pub events: E,
    pub missions: M,
}

impl<E: EventRepository, M: MissionRepository> ListMissionsUseCase<E, M> {
    pub async fn execute(
        &self,
        event_code: &str,
    ) -> Result<(Event, Vec<Mission>), EventServiceError> {
        let event = resolve_event(&self.events, event_code).await?;
        let missions = self.missions.list_by_event(event.id).await?;
        Ok((event, missions))
    }
}
