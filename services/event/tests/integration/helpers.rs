use std::sync::{Arc, Mutex};

use chrono::{NaiveDate, Utc};
use serde_json::json;
use uuid::Uuid;

use bingo_domain::mission::MissionType;
use bingo_event::domain::repository::{
    CompletionRepository, EventRepository, MemberRepository, MissionRepository,
    RegistrationRepository,
};
use bingo_event::domain::types::{
    Event, FamilyMember, Household, Mission, MissionCompletion, Registration,
};
use bingo_event::error::EventServiceError;

pub const EVENT_CODE: &str = "bingo_quial_2025";

// ── MockEventRepo ────────────────────────────────────────────────────────────

pub struct MockEventRepo {
    pub events: Vec<Event>,
}

impl MockEventRepo {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    pub fn empty() -> Self {
        Self { events: vec![] }
    }
}

impl EventRepository for MockEventRepo {
    async fn find_by_code(&self, code: &str) -> Result<Option<Event>, EventServiceError> {
        Ok(self.events.iter().find(|e| e.code == code).cloned())
    }
}

// ── MockRegistrationRepo ─────────────────────────────────────────────────────

pub struct MockRegistrationRepo {
    pub registrations: Arc<Mutex<Vec<Registration>>>,
    pub members: Arc<Mutex<Vec<FamilyMember>>>,
    pub fail_writes: bool,
}

impl MockRegistrationRepo {
    pub fn new(registrations: Vec<Registration>) -> Self {
        Self {
            registrations: Arc::new(Mutex::new(registrations)),
            members: Arc::new(Mutex::new(vec![])),
            fail_writes: false,
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Every `create_with_members` call fails as a rolled-back transaction would.
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::empty()
        }
    }

    /// Returns a shared handle to the registration list for post-execution inspection.
    pub fn registrations_handle(&self) -> Arc<Mutex<Vec<Registration>>> {
        Arc::clone(&self.registrations)
    }

    /// Returns a shared handle to the member list for post-execution inspection.
    pub fn members_handle(&self) -> Arc<Mutex<Vec<FamilyMember>>> {
        Arc::clone(&self.members)
    }
}

impl RegistrationRepository for MockRegistrationRepo {
    async fn create_with_members(
        &self,
        _household: &Household,
        members: &[FamilyMember],
        registration: &Registration,
    ) -> Result<(), EventServiceError> {
        if self.fail_writes {
            return Err(anyhow::anyhow!("transaction aborted").into());
        }
        self.members.lock().unwrap().extend_from_slice(members);
        self.registrations
            .lock()
            .unwrap()
            .push(registration.clone());
        Ok(())
    }

    async fn find_by_team_name(
        &self,
        event_id: Uuid,
        team_name: &str,
    ) -> Result<Option<Registration>, EventServiceError> {
        let wanted = team_name.to_lowercase();
        Ok(self
            .registrations
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.event_id == event_id && r.team_name.to_lowercase() == wanted)
            .min_by_key(|r| r.created_at)
            .cloned())
    }

    async fn list_by_event(&self, event_id: Uuid) -> Result<Vec<Registration>, EventServiceError> {
        Ok(self
            .registrations
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.event_id == event_id)
            .cloned()
            .collect())
    }
}

// ── MockMemberRepo ───────────────────────────────────────────────────────────

pub struct MockMemberRepo {
    pub members: Arc<Mutex<Vec<FamilyMember>>>,
}

impl MockMemberRepo {
    pub fn new(members: Vec<FamilyMember>) -> Self {
        Self {
            members: Arc::new(Mutex::new(members)),
        }
    }

    /// Reads the members written through a [`MockRegistrationRepo`].
    pub fn sharing(registrations: &MockRegistrationRepo) -> Self {
        Self {
            members: registrations.members_handle(),
        }
    }
}

impl MemberRepository for MockMemberRepo {
    async fn list_by_households(
        &self,
        household_ids: &[Uuid],
    ) -> Result<Vec<FamilyMember>, EventServiceError> {
        Ok(self
            .members
            .lock()
            .unwrap()
            .iter()
            .filter(|m| household_ids.contains(&m.household_id))
            .cloned()
            .collect())
    }
}

// ── MockMissionRepo ──────────────────────────────────────────────────────────

pub struct MockMissionRepo {
    pub missions: Vec<Mission>,
    pub fail_lookups: bool,
}

impl MockMissionRepo {
    pub fn new(missions: Vec<Mission>) -> Self {
        Self {
            missions,
            fail_lookups: false,
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn failing() -> Self {
        Self {
            missions: vec![],
            fail_lookups: true,
        }
    }

    fn check(&self) -> Result<(), EventServiceError> {
        if self.fail_lookups {
            return Err(anyhow::anyhow!("missions table unavailable").into());
        }
        Ok(())
    }
}

impl MissionRepository for MockMissionRepo {
    async fn find_active_by_slug(
        &self,
        event_id: Uuid,
        qr_slug: &str,
    ) -> Result<Option<Mission>, EventServiceError> {
        self.check()?;
        Ok(self
            .missions
            .iter()
            .find(|m| m.event_id == event_id && m.is_active && m.qr_slug.as_deref() == Some(qr_slug))
            .cloned())
    }

    async fn find_by_code(
        &self,
        event_id: Uuid,
        code: &str,
    ) -> Result<Option<Mission>, EventServiceError> {
        self.check()?;
        Ok(self
            .missions
            .iter()
            .find(|m| m.event_id == event_id && m.code == code)
            .cloned())
    }

    async fn list_by_event(&self, event_id: Uuid) -> Result<Vec<Mission>, EventServiceError> {
        self.check()?;
        let mut missions: Vec<Mission> = self
            .missions
            .iter()
            .filter(|m| m.event_id == event_id)
            .cloned()
            .collect();
        missions.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(missions)
    }
}

// ── MockCompletionRepo ───────────────────────────────────────────────────────

/// Enforces the (mission, registration, location) uniqueness the database index provides.
pub struct MockCompletionRepo {
    pub completions: Arc<Mutex<Vec<MissionCompletion>>>,
    pub fail: bool,
}

impl MockCompletionRepo {
    pub fn new(completions: Vec<MissionCompletion>) -> Self {
        Self {
            completions: Arc::new(Mutex::new(completions)),
            fail: false,
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::empty()
        }
    }

    /// Another repo over the same completion list, as a second request would see it.
    pub fn sharing(&self) -> Self {
        Self {
            completions: Arc::clone(&self.completions),
            fail: self.fail,
        }
    }

    /// Returns a shared handle to the internal completion list for post-execution inspection.
    pub fn completions_handle(&self) -> Arc<Mutex<Vec<MissionCompletion>>> {
        Arc::clone(&self.completions)
    }
}

impl CompletionRepository for MockCompletionRepo {
    async fn record(&self, completion: &MissionCompletion) -> Result<bool, EventServiceError> {
        if self.fail {
            return Err(anyhow::anyhow!("insert failed").into());
        }
        let mut completions = self.completions.lock().unwrap();
        let exists = completions.iter().any(|c| {
            c.mission_id == completion.mission_id
                && c.registration_id == completion.registration_id
                && c.location_code == completion.location_code
        });
        if exists {
            return Ok(false);
        }
        completions.push(completion.clone());
        Ok(true)
    }

    async fn list_by_missions(
        &self,
        mission_ids: &[Uuid],
    ) -> Result<Vec<MissionCompletion>, EventServiceError> {
        if self.fail {
            return Err(anyhow::anyhow!("select failed").into());
        }
        Ok(self
            .completions
            .lock()
            .unwrap()
            .iter()
            .filter(|c| mission_ids.contains(&c.mission_id))
            .cloned()
            .collect())
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub fn test_event() -> Event {
    Event {
        id: Uuid::parse_str("00000000-0000-0000-0000-0000000000e1").unwrap(),
        code: EVENT_CODE.to_owned(),
        name: "Bingo Quial 2025".to_owned(),
        event_date: NaiveDate::from_ymd_opt(2025, 11, 29),
        location: Some("Colegio Quial".to_owned()),
    }
}

pub fn test_mission(event_id: Uuid, code: &str, qr_slug: Option<&str>, points: i32) -> Mission {
    Mission {
        id: Uuid::now_v7(),
        event_id,
        code: code.to_owned(),
        name: format!("Mission {code}"),
        description: None,
        mission_type: if code == "M1_REGISTER" {
            MissionType::Registration
        } else {
            MissionType::StandVisit
        },
        points,
        qr_slug: qr_slug.map(str::to_owned),
        is_active: true,
    }
}

pub fn test_registration(event_id: Uuid, team_name: &str, area: Option<&str>, family_size: i32) -> Registration {
    Registration {
        id: Uuid::now_v7(),
        event_id,
        household_id: Uuid::now_v7(),
        family_size,
        area: area.map(str::to_owned),
        interests: vec![],
        team_name: team_name.to_owned(),
        source: "web".to_owned(),
        raw_payload: json!({}),
        created_at: Utc::now(),
    }
}
