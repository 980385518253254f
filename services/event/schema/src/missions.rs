use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "missions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub event_id: Uuid,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    /// One of `registration`, `photo`, `vote`, `tombola`, `stand_visit`.
    pub mission_type: String,
    pub points: i32,
    pub qr_slug: Option<String>,
    pub is_active: bool,
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
    #[sea_orm(has_many = "super::mission_completions::Entity")]
    MissionCompletions,
}

impl Related<super::events::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl Related<super::mission_completions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MissionCompletions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
