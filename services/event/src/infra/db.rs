use anyhow::{Context as _, anyhow};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
    sea_query::{Expr, Func, OnConflict},
};
use serde_json::Value;
use uuid::Uuid;

use bingo_domain::member::{AgeGroup, Gender, MemberRole};
use bingo_domain::mission::MissionType;
use bingo_event_schema::{
    event_registrations, events, family_members, households, mission_completions, missions,
};

use crate::domain::repository::{
    CompletionRepository, EventRepository, MemberRepository, MissionRepository,
    RegistrationRepository,
};
use crate::domain::types::{
    Event, FamilyMember, Household, Mission, MissionCompletion, Registration,
};
use crate::error::EventServiceError;

// ── Event repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbEventRepository {
    pub db: DatabaseConnection,
}

impl EventRepository for DbEventRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<Event>, EventServiceError> {
        let model = events::Entity::find()
            .filter(events::Column::Code.eq(code))
            .one(&self.db)
            .await
            .context("find event by code")?;
        Ok(model.map(event_from_model))
    }
}

fn event_from_model(model: events::Model) -> Event {
    Event {
        id: model.id,
        code: model.code,
        name: model.name,
        event_date: model.event_date,
        location: model.location,
    }
}

// ── Registration repository ──────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRegistrationRepository {
    pub db: DatabaseConnection,
}

impl RegistrationRepository for DbRegistrationRepository {
    async fn create_with_members(
        &self,
        household: &Household,
        members: &[FamilyMember],
        registration: &Registration,
    ) -> Result<(), EventServiceError> {
        self.db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                let household = household.clone();
                let members = members.to_vec();
                let registration = registration.clone();
                Box::pin(async move {
                    households::ActiveModel {
                        id: Set(household.id),
                        created_at: Set(household.created_at),
                    }
                    .insert(txn)
                    .await?;

                    for member in &members {
                        family_members::ActiveModel {
                            id: Set(member.id),
                            household_id: Set(member.household_id),
                            role: Set(member.role.as_str().to_owned()),
                            gender: Set(member.gender.map(|g| g.as_str().to_owned())),
                            approx_age_group: Set(member.age_group.map(|g| g.as_str().to_owned())),
                            is_student: Set(member.is_student),
                            is_staff: Set(member.is_staff),
                            is_external: Set(member.is_external),
                            created_at: Set(member.created_at),
                        }
                        .insert(txn)
                        .await?;
                    }

                    event_registrations::ActiveModel {
                        id: Set(registration.id),
                        event_id: Set(registration.event_id),
                        household_id: Set(registration.household_id),
                        family_size: Set(registration.family_size),
                        area: Set(registration.area),
                        interests: Set(Value::from(registration.interests)),
                        team_name: Set(registration.team_name),
                        source: Set(registration.source),
                        raw_payload: Set(registration.raw_payload),
                        created_at: Set(registration.created_at),
                    }
                    .insert(txn)
                    .await?;
                    Ok(())
                })
            })
            .await
            .context("create registration with household and members")?;
        Ok(())
    }

    async fn find_by_team_name(
        &self,
        event_id: Uuid,
        team_name: &str,
    ) -> Result<Option<Registration>, EventServiceError> {
        let model = event_registrations::Entity::find()
            .filter(event_registrations::Column::EventId.eq(event_id))
            .filter(
                Expr::expr(Func::lower(Expr::col(event_registrations::Column::TeamName)))
                    .eq(team_name.to_lowercase()),
            )
            .order_by_asc(event_registrations::Column::CreatedAt)
            .order_by_asc(event_registrations::Column::Id)
            .one(&self.db)
            .await
            .context("find registration by team name")?;
        Ok(model.map(registration_from_model))
    }

    async fn list_by_event(&self, event_id: Uuid) -> Result<Vec<Registration>, EventServiceError> {
        let models = event_registrations::Entity::find()
            .filter(event_registrations::Column::EventId.eq(event_id))
            .order_by_asc(event_registrations::Column::CreatedAt)
            .order_by_asc(event_registrations::Column::Id)
            .all(&self.db)
            .await
            .context("list registrations by event")?;
        Ok(models.into_iter().map(registration_from_model).collect())
    }
}

fn registration_from_model(model: event_registrations::Model) -> Registration {
    Registration {
        id: model.id,
        event_id: model.event_id,
        household_id: model.household_id,
        family_size: model.family_size,
        area: model.area,
        interests: interests_from_json(&model.interests),
        team_name: model.team_name,
        source: model.source,
        raw_payload: model.raw_payload,
        created_at: model.created_at,
    }
}

/// Non-string entries are dropped.
fn interests_from_json(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|tags| {
            tags.iter()
                .filter_map(|t| t.as_str().map(str::to_owned))
                .collect()
        })
        .unwrap_or_default()
}

// ── Member repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbMemberRepository {
    pub db: DatabaseConnection,
}

impl MemberRepository for DbMemberRepository {
    async fn list_by_households(
        &self,
        household_ids: &[Uuid],
    ) -> Result<Vec<FamilyMember>, EventServiceError> {
        if household_ids.is_empty() {
            return Ok(Vec::new());
        }
        let models = family_members::Entity::find()
            .filter(family_members::Column::HouseholdId.is_in(household_ids.iter().copied()))
            .all(&self.db)
            .await
            .context("list family members by households")?;
        Ok(models.into_iter().map(member_from_model).collect())
    }
}

fn member_from_model(model: family_members::Model) -> FamilyMember {
    FamilyMember {
        id: model.id,
        household_id: model.household_id,
        role: MemberRole::from(model.role),
        gender: model.gender.as_deref().and_then(Gender::parse),
        age_group: model.approx_age_group.as_deref().and_then(AgeGroup::parse),
        is_student: model.is_student,
        is_staff: model.is_staff,
        is_external: model.is_external,
        created_at: model.created_at,
    }
}

// ── Mission repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbMissionRepository {
    pub db: DatabaseConnection,
}

impl MissionRepository for DbMissionRepository {
    async fn find_active_by_slug(
        &self,
        event_id: Uuid,
        qr_slug: &str,
    ) -> Result<Option<Mission>, EventServiceError> {
        let model = missions::Entity::find()
            .filter(missions::Column::EventId.eq(event_id))
            .filter(missions::Column::QrSlug.eq(qr_slug))
            .filter(missions::Column::IsActive.eq(true))
            .one(&self.db)
            .await
            .context("find active mission by slug")?;
        model.map(mission_from_model).transpose()
    }

    async fn find_by_code(
        &self,
        event_id: Uuid,
        code: &str,
    ) -> Result<Option<Mission>, EventServiceError> {
        let model = missions::Entity::find()
            .filter(missions::Column::EventId.eq(event_id))
            .filter(missions::Column::Code.eq(code))
            .one(&self.db)
            .await
            .context("find mission by code")?;
        model.map(mission_from_model).transpose()
    }

    async fn list_by_event(&self, event_id: Uuid) -> Result<Vec<Mission>, EventServiceError> {
        let models = missions::Entity::find()
            .filter(missions::Column::EventId.eq(event_id))
            .order_by_asc(missions::Column::Code)
            .all(&self.db)
            .await
            .context("list missions by event")?;
        models.into_iter().map(mission_from_model).collect()
    }
}

fn mission_from_model(model: missions::Model) -> Result<Mission, EventServiceError> {
    let mission_type: MissionType = model
        .mission_type
        .parse()
        .map_err(|e| anyhow!("mission {}: {e}", model.code))?;
    Ok(Mission {
        id: model.id,
        event_id: model.event_id,
        code: model.code,
        name: model.name,
        description: model.description,
        mission_type,
        points: model.points,
        qr_slug: model.qr_slug,
        is_active: model.is_active,
    })
}

// ── Completion repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCompletionRepository {
    pub db: DatabaseConnection,
}

impl CompletionRepository for DbCompletionRepository {
    async fn record(&self, completion: &MissionCompletion) -> Result<bool, EventServiceError> {
        let am = mission_completions::ActiveModel {
            id: Set(completion.id),
            mission_id: Set(completion.mission_id),
            registration_id: Set(completion.registration_id),
            location_code: Set(completion.location_code.clone()),
            data: Set(completion.data.clone()),
            created_at: Set(completion.created_at),
        };
        let inserted = mission_completions::Entity::insert(am)
            .on_conflict(
                OnConflict::columns([
                    mission_completions::Column::MissionId,
                    mission_completions::Column::RegistrationId,
                    mission_completions::Column::LocationCode,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .context("record mission completion")?;
        Ok(inserted > 0)
    }

    async fn list_by_missions(
        &self,
        mission_ids: &[Uuid],
    ) -> Result<Vec<MissionCompletion>, EventServiceError> {
        if mission_ids.is_empty() {
            return Ok(Vec::new());
        }
        let models = mission_completions::Entity::find()
            .filter(mission_completions::Column::MissionId.is_in(mission_ids.iter().copied()))
            .all(&self.db)
            .await
            .context("list mission completions")?;
        Ok(models.into_iter().map(completion_from_model).collect())
    }
}

fn completion_from_model(model: mission_completions::Model) -> MissionCompletion {
    MissionCompletion {
        id: model.id,
        mission_id: model.mission_id,
        registration_id: model.registration_id,
        location_code: model.location_code,
        data: model.data,
        created_at: model.created_at,
    }
}
