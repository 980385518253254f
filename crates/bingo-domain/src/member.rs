//! Family member roles and the attributes derived from them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Role a family member plays at the event, as chosen in the registration wizard.
///
/// Unrecognised roles are preserved verbatim in [`MemberRole::Other`] and are
/// treated as external guests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MemberRole {
    Girl,
    Boy,
    Teen,
    Mom,
    Dad,
    Grandparent,
    Teacher,
    Other(String),
}

impl MemberRole {
    /// Parses a role label. Never fails; unknown labels become [`MemberRole::Other`].
    pub fn parse(s: &str) -> Self {
        match s {
            "girl" => Self::Girl,
            "boy" => Self::Boy,
            "teen" => Self::Teen,
            "mom" => Self::Mom,
            "dad" => Self::Dad,
            "grandparent" => Self::Grandparent,
            "teacher" => Self::Teacher,
            other => Self::Other(other.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Girl => "girl",
            Self::Boy => "boy",
            Self::Teen => "teen",
            Self::Mom => "mom",
            Self::Dad => "dad",
            Self::Grandparent => "grandparent",
            Self::Teacher => "teacher",
            Self::Other(s) => s,
        }
    }

    /// Demographic attributes stored alongside a member with this role.
    pub fn profile(&self) -> MemberProfile {
        let (gender, age_group, is_student, is_staff, is_external) = match self {
            Self::Girl => (Some(Gender::Female), Some(AgeGroup::Age6To12), true, false, false),
            Self::Boy => (Some(Gender::Male), Some(AgeGroup::Age6To12), true, false, false),
            Self::Teen => (None, Some(AgeGroup::Age13To17), true, false, false),
            Self::Mom => (Some(Gender::Female), Some(AgeGroup::Age36To50), false, false, false),
            Self::Dad => (Some(Gender::Male), Some(AgeGroup::Age36To50), false, false, false),
            Self::Grandparent => (None, Some(AgeGroup::Age50Plus), false, false, false),
            Self::Teacher => (None, Some(AgeGroup::Age18To35), false, true, false),
            Self::Other(_) => (None, None, false, false, true),
        };
        MemberProfile {
            gender,
            age_group,
            is_student,
            is_staff,
            is_external,
        }
    }

    /// Dashboard bucket this role is counted under.
    pub fn bucket(&self) -> RoleBucket {
        match self {
            Self::Girl | Self::Boy => RoleBucket::Children,
            Self::Teen => RoleBucket::Teens,
            Self::Grandparent => RoleBucket::Grandparents,
            Self::Teacher => RoleBucket::Staff,
            Self::Mom | Self::Dad | Self::Other(_) => RoleBucket::Adults,
        }
    }
}

impl From<String> for MemberRole {
    fn from(s: String) -> Self {
        match Self::parse(&s) {
            Self::Other(_) => Self::Other(s),
            known => known,
        }
    }
}

impl From<MemberRole> for String {
    fn from(role: MemberRole) -> Self {
        match role {
            MemberRole::Other(s) => s,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for MemberRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

/// Age bracket label, serialized as the bracket string (`"6_12"`, `"50_plus"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgeGroup {
    #[serde(rename = "0_5")]
    Age0To5,
    #[serde(rename = "6_12")]
    Age6To12,
    #[serde(rename = "13_17")]
    Age13To17,
    #[serde(rename = "18_35")]
    Age18To35,
    #[serde(rename = "36_50")]
    Age36To50,
    #[serde(rename = "50_plus")]
    Age50Plus,
}

impl AgeGroup {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Age0To5 => "0_5",
            Self::Age6To12 => "6_12",
            Self::Age13To17 => "13_17",
            Self::Age18To35 => "18_35",
            Self::Age36To50 => "36_50",
            Self::Age50Plus => "50_plus",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "0_5" => Some(Self::Age0To5),
            "6_12" => Some(Self::Age6To12),
            "13_17" => Some(Self::Age13To17),
            "18_35" => Some(Self::Age18To35),
            "36_50" => Some(Self::Age36To50),
            "50_plus" => Some(Self::Age50Plus),
            _ => None,
        }
    }
}

/// Attributes derived from a [`MemberRole`] at registration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberProfile {
    pub gender: Option<Gender>,
    pub age_group: Option<AgeGroup>,
    pub is_student: bool,
    pub is_staff: bool,
    pub is_external: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleBucket {
    Children,
    Teens,
    Adults,
    Grandparents,
    Staff,
}
