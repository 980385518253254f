use tracing::warn;
use uuid::Uuid;

use crate::domain::dashboard::{DashboardReport, build_report};
use crate::domain::repository::{
    CompletionRepository, EventRepository, MemberRepository, MissionRepository,
    RegistrationRepository,
};
use crate::domain::types::Event;
use crate::error::EventServiceError;
use crate::usecase::resolve_event;

// ── GetDashboard ─────────────────────────────────────────────────────────────

pub struct GetDashboardUseCase<E, R, Mb, M, C>
where
    E: EventRepository,
    R: RegistrationRepository,
    Mb: MemberRepository,
    M: MissionRepository,
    C: CompletionRepository,
{
    pub events: E,
    pub registrations: R,
    pub members: Mb,
    pub missions: M,
    pub completions: C,
}

impl<E, R, Mb, M, C> GetDashboardUseCase<E, R, Mb, M, C>
where
    E: EventRepository,
    R: RegistrationRepository,
    Mb: MemberRepository,
    M: MissionRepository,
    C: CompletionRepository,
{
    pub async fn execute(
        &self,
        event_code: &str,
    ) -> Result<(Event, DashboardReport), EventServiceError> {
        let event = resolve_event(&self.events, event_code).await?;
        let registrations = self.registrations.list_by_event(event.id).await?;

        let household_ids: Vec<Uuid> = registrations.iter().map(|r| r.household_id).collect();
        let members = if household_ids.is_empty() {
            Vec::new()
        } else {
            self.members.list_by_households(&household_ids).await?
        };

        let missions: Vec<_> = self
            .missions
            .list_by_event(event.id)
            .await?
            .into_iter()
            .filter(|m| m.is_active)
            .collect();
        let mission_ids: Vec<Uuid> = missions.iter().map(|m| m.id).collect();

        // Completion stats are optional; the rest of the report still renders.
        let completions = if mission_ids.is_empty() {
            Vec::new()
        } else {
            match self.completions.list_by_missions(&mission_ids).await {
                Ok(completions) => completions,
                Err(e) => {
                    warn!(error = ?e, event = %event.code, "loading mission completions failed");
                    Vec::new()
                }
            }
        };

        let report = build_report(&registrations, &members, &missions, &completions);
        Ok((event, report))
    }
}
