use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;
use uuid::Uuid;

use bingo_domain::member::{AgeGroup, Gender, MemberRole};
use bingo_domain::mission::{MissionType, mission_url};

/// The event a service instance is configured for.
#[derive(Debug, Clone)]
pub struct Event {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub event_date: Option<NaiveDate>,
    pub location: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Household {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// A household member with its role-derived profile columns.
#[derive(Debug, Clone)]
pub struct FamilyMember {
    pub id: Uuid,
    pub household_id: Uuid,
    pub role: MemberRole,
    pub gender: Option<Gender>,
    pub age_group: Option<AgeGroup>,
    pub is_student: bool,
    pub is_staff: bool,
    pub is_external: bool,
    pub created_at: DateTime<Utc>,
}

impl FamilyMember {
    pub fn from_role(household_id: Uuid, role: MemberRole, created_at: DateTime<Utc>) -> Self {
        let profile = role.profile();
        Self {
            id: Uuid::now_v7(),
            household_id,
            role,
            gender: profile.gender,
            age_group: profile.age_group,
            is_student: profile.is_student,
            is_staff: profile.is_staff,
            is_external: profile.is_external,
            created_at,
        }
    }
}

/// A household's registration to an event.
#[derive(Debug, Clone)]
pub struct Registration {
    pub id: Uuid,
    pub event_id: Uuid,
    pub household_id: Uuid,
    pub family_size: i32,
    pub area: Option<String>,
    pub interests: Vec<String>,
    pub team_name: String,
    pub source: String,
    pub raw_payload: Value,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Mission {
    pub id: Uuid,
    pub event_id: Uuid,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub mission_type: MissionType,
    pub points: i32,
    pub qr_slug: Option<String>,
    pub is_active: bool,
}

impl Mission {
    /// Public page URL for this mission, if it has a QR slug.
    pub fn url(&self, site_base: &str) -> Option<String> {
        self.qr_slug
            .as_deref()
            .map(|slug| mission_url(site_base, slug))
    }
}

/// A registration's completion of a mission at a given location.
#[derive(Debug, Clone)]
pub struct MissionCompletion {
    pub id: Uuid,
    pub mission_id: Uuid,
    pub registration_id: Uuid,
    pub location_code: String,
    pub data: Value,
    pub created_at: DateTime<Utc>,
}

impl MissionCompletion {
    pub fn new(
        mission_id: Uuid,
        registration_id: Uuid,
        location_code: impl Into<String>,
        data: Value,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            mission_id,
            registration_id,
            location_code: location_code.into(),
            data,
            created_at: Utc::now(),
        }
    }
}

/// Output image format of the QR endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QrFormat {
    Png,
    Svg,
}

impl QrFormat {
    /// `svg` selects SVG; anything else, including no value, selects PNG.
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("svg") => Self::Svg,
            _ => Self::Png,
        }
    }
}
