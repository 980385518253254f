#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::{
    Event, FamilyMember, Household, Mission, MissionCompletion, Registration,
};
use crate::error::EventServiceError;

/// Repository for events.
pub trait EventRepository: Send + Sync {
    async fn find_by_code(&self, code: &str) -> Result<Option<Event>, EventServiceError>;
}

/// Repository for registrations and the household rows they own.
pub trait RegistrationRepository: Send + Sync {
    /// Persist a household, its members and its registration atomically.
    async fn create_with_members(
        &self,
        household: &Household,
        members: &[FamilyMember],
        registration: &Registration,
    ) -> Result<(), EventServiceError>;

    /// Case-insensitive exact match on team name. The earliest registration wins.
    async fn find_by_team_name(
        &self,
        event_id: Uuid,
        team_name: &str,
    ) -> Result<Option<Registration>, EventServiceError>;

    /// All registrations of an event, oldest first.
    async fn list_by_event(&self, event_id: Uuid) -> Result<Vec<Registration>, EventServiceError>;
}

/// Repository for family members.
pub trait MemberRepository: Send + Sync {
    async fn list_by_households(
        &self,
        household_ids: &[Uuid],
    ) -> Result<Vec<FamilyMember>, EventServiceError>;
}

/// Repository for missions.
pub trait MissionRepository: Send + Sync {
    async fn find_active_by_slug(
        &self,
        event_id: Uuid,
        qr_slug: &str,
    ) -> Result<Option<Mission>, EventServiceError>;

    async fn find_by_code(
        &self,
        event_id: Uuid,
        code: &str,
    ) -> Result<Option<Mission>, EventServiceError>;

    /// All missions of an event, active or not, ordered by code.
    async fn list_by_event(&self, event_id: Uuid) -> Result<Vec<Mission>, EventServiceError>;
}

/// Repository for mission completions.
pub trait CompletionRepository: Send + Sync {
    /// Insert unless a completion for the same (mission, registration, location)
    /// exists. Returns `true` if a row was inserted.
    async fn record(&self, completion: &MissionCompletion) -> Result<bool, EventServiceError>;

    async fn list_by_missions(
        &self,
        mission_ids: &[Uuid],
    ) -> Result<Vec<MissionCompletion>, EventServiceError>;
}
