use sea_orm::entity::prelude::*;

/// A household's registration to an event. `team_name` is the lookup key used
/// by QR mission pages.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "event_registrations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub event_id: Uuid,
    pub household_id: Uuid,
    pub family_size: i32,
    pub area: Option<String>,
    /// JSON array of interest tags.
    pub interests: Json,
    pub team_name: String,
    pub source: String,
    /// Request body as received.
    pub raw_payload: Json,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::events::Entity",
        from = "Column::EventId",
        to = "super::events::Column::Id"
    )]
    Event,
    #[sea_orm(
        belongs_to = "super::households::Entity",
        from = "Column::HouseholdId",
        to = "super::households::Column::Id"
    )]
    Household,
    #[sea_orm(has_many = "super::mission_completions::Entity")]
    MissionCompletions,
}

impl Related<super::events::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl Related<super::households::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Household.def()
    }
}

impl Related<super::mission_completions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MissionCompletions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
