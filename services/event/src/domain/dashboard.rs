//! In-memory aggregation behind `GET /api/dashboard`.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::Serialize;
use uuid::Uuid;

use bingo_domain::member::RoleBucket;
use bingo_domain::mission::MissionType;

use crate::domain::types::{FamilyMember, Mission, MissionCompletion, Registration};

const UNKNOWN_AREA: &str = "desconocida";
const UNKNOWN_AGE_GROUP: &str = "desconocido";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    pub totals: Totals,
    pub areas: Vec<AreaStats>,
    pub age_groups: BTreeMap<String, u64>,
    pub roles: RoleCounts,
    pub interests: Vec<InterestCount>,
    pub missions: Vec<MissionStats>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub families: u64,
    pub attendees: i64,
    pub avg_per_family: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaStats {
    pub area: String,
    pub families: u64,
    pub attendees: i64,
    pub attendees_per_family: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RoleCounts {
    pub children: u64,
    pub teens: u64,
    pub adults: u64,
    pub grandparents: u64,
    pub staff: u64,
}

impl RoleCounts {
    fn add(&mut self, bucket: RoleBucket) {
        let slot = match bucket {
            RoleBucket::Children => &mut self.children,
            RoleBucket::Teens => &mut self.teens,
            RoleBucket::Adults => &mut self.adults,
            RoleBucket::Grandparents => &mut self.grandparents,
            RoleBucket::Staff => &mut self.staff,
        };
        *slot += 1;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterestCount {
    pub id: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionStats {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub mission_type: MissionType,
    pub points: i32,
    /// Distinct registrations with at least one completion.
    pub completed_count: u64,
    /// Percentage of registered families, one decimal.
    pub completion_rate: f64,
}

/// Builds the dashboard report from one event's rows.
///
/// Members outside the given registrations' households and inactive missions
/// are ignored. Each input is walked once.
pub fn build_report(
    registrations: &[Registration],
    members: &[FamilyMember],
    missions: &[Mission],
    completions: &[MissionCompletion],
) -> DashboardReport {
    let families = registrations.len() as u64;
    let attendees: i64 = registrations.iter().map(|r| i64::from(r.family_size)).sum();

    // Areas keep first-appearance order.
    let mut area_index: HashMap<&str, usize> = HashMap::new();
    let mut areas: Vec<(&str, u64, i64)> = Vec::new();
    let mut interest_counts: HashMap<&str, u64> = HashMap::new();
    let mut households: HashSet<Uuid> = HashSet::with_capacity(registrations.len());

    for r in registrations {
        let key = r.area.as_deref().unwrap_or(UNKNOWN_AREA);
        let idx = *area_index.entry(key).or_insert_with(|| {
            areas.push((key, 0, 0));
            areas.len() - 1
        });
        areas[idx].1 += 1;
        areas[idx].2 += i64::from(r.family_size);

        for tag in r.interests.iter().filter(|t| !t.is_empty()) {
            *interest_counts.entry(tag.as_str()).or_default() += 1;
        }
        households.insert(r.household_id);
    }

    let mut age_groups: BTreeMap<String, u64> = BTreeMap::new();
    let mut roles = RoleCounts::default();
    for m in members.iter().filter(|m| households.contains(&m.household_id)) {
        let group = m.age_group.map_or(UNKNOWN_AGE_GROUP, |g| g.as_str());
        *age_groups.entry(group.to_owned()).or_default() += 1;
        roles.add(m.role.bucket());
    }

    let mut interests: Vec<InterestCount> = interest_counts
        .into_iter()
        .map(|(id, count)| InterestCount {
            id: id.to_owned(),
            count,
        })
        .collect();
    interests.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.id.cmp(&b.id)));

    let mut completed_by: HashMap<Uuid, HashSet<Uuid>> = HashMap::new();
    for c in completions {
        completed_by
            .entry(c.mission_id)
            .or_default()
            .insert(c.registration_id);
    }

    let missions = missions
        .iter()
        .filter(|m| m.is_active)
        .map(|m| {
            let completed_count = completed_by.get(&m.id).map_or(0, |s| s.len() as u64);
            MissionStats {
                id: m.id,
                code: m.code.clone(),
                name: m.name.clone(),
                mission_type: m.mission_type,
                points: m.points,
                completed_count,
                completion_rate: percentage(completed_count, families),
            }
        })
        .collect();

    DashboardReport {
        totals: Totals {
            families,
            attendees,
            avg_per_family: ratio(attendees, families),
        },
        areas: areas
            .into_iter()
            .map(|(area, families, attendees)| AreaStats {
                area: area.to_owned(),
                families,
                attendees,
                attendees_per_family: ratio(attendees, families),
            })
            .collect(),
        age_groups,
        roles,
        interests,
        missions,
    }
}

fn ratio(attendees: i64, families: u64) -> f64 {
    if families == 0 {
        return 0.0;
    }
    round_to(attendees as f64 / families as f64, 2)
}

fn percentage(count: u64, families: u64) -> f64 {
    if families == 0 {
        return 0.0;
    }
    round_to(count as f64 / families as f64 * 100.0, 1)
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
