//! Mission domain types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Mission that every family completes automatically when it registers.
pub const REGISTRATION_MISSION_CODE: &str = "M1_REGISTER";

/// Location recorded for the automatic registration completion.
pub const REGISTRATION_LOCATION_CODE: &str = "registration-flow";

/// Location recorded when a completion request names none.
pub const DEFAULT_LOCATION_CODE: &str = "default";

/// Kind of activity a mission represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissionType {
    Registration,
    Photo,
    Vote,
    Tombola,
    StandVisit,
}

impl MissionType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Registration => "registration",
            Self::Photo => "photo",
            Self::Vote => "vote",
            Self::Tombola => "tombola",
            Self::StandVisit => "stand_visit",
        }
    }
}

impl fmt::Display for MissionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string cannot be parsed as a [`MissionType`].
#[derive(Debug, Error)]
#[error("unknown mission type: {0:?}")]
pub struct UnknownMissionType(pub String);

impl FromStr for MissionType {
    type Err = UnknownMissionType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "registration" => Ok(Self::Registration),
            "photo" => Ok(Self::Photo),
            "vote" => Ok(Self::Vote),
            "tombola" => Ok(Self::Tombola),
            "stand_visit" => Ok(Self::StandVisit),
            other => Err(UnknownMissionType(other.to_owned())),
        }
    }
}

/// Trims a requested location code, falling back to [`DEFAULT_LOCATION_CODE`]
/// when it is absent or blank.
pub fn normalize_location_code(code: Option<&str>) -> String {
    match code.map(str::trim) {
        Some(c) if !c.is_empty() => c.to_owned(),
        _ => DEFAULT_LOCATION_CODE.to_owned(),
    }
}

/// Public page a mission QR code points at: `<site>/misiones/<slug>`.
pub fn mission_url(site_base: &str, qr_slug: &str) -> String {
    format!("{}/misiones/{qr_slug}", site_base.trim_end_matches('/'))
}
