use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "households")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::family_members::Entity")]
    FamilyMembers,
    #[sea_orm(has_many = "super::event_registrations::Entity")]
    Registrations,
}

impl Related<super::family_members::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FamilyMembers.def()
    }
}

impl Related<super::event_registrations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Registrations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
