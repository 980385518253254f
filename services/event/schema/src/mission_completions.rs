use sea_orm::entity::prelude::*;

/// A team's completion of a mission at a location.
/// Unique on (`mission_id`, `registration_id`, `location_code`).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "mission_completions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub mission_id: Uuid,
    pub registration_id: Uuid,
    pub location_code: String,
    pub data: Json,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::missions::Entity",
        from = "Column::MissionId",
        to = "super::missions::Column::Id"
    )]
    Mission,
    #[sea_orm(
        belongs_to = "super::event_registrations::Entity",
        from = "Column::RegistrationId",
        to = "super::event_registrations::Column::Id"
    )]
    Registration,
}

impl Related<super::missions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Mission.def()
    }
}

impl Related<super::event_registrations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Registration.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
