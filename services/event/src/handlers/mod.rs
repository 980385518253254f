pub mod admin;
pub mod completion;
pub mod dashboard;
pub mod health;
pub mod mission;
pub mod qrcode;
pub mod registration;

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::types::Event;

// ── Shared response types ────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct EventSummary {
    pub id: Uuid,
    pub code: String,
    pub name: String,
}

impl From<Event> for EventSummary {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            code: event.code,
            name: event.name,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetail {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub event_date: Option<NaiveDate>,
    pub location: Option<String>,
}

impl From<Event> for EventDetail {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            code: event.code,
            name: event.name,
            event_date: event.event_date,
            location: event.location,
        }
    }
}
