use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(EventRegistrations::Table)
                    .col(EventRegistrations::EventId)
                    .name("idx_event_registrations_event_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(FamilyMembers::Table)
                    .col(FamilyMembers::HouseholdId)
                    .name("idx_family_members_household_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_family_members_household_id")
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_event_registrations_event_id")
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
enum EventRegistrations {
    Table,
    EventId,
}

#[derive(Iden)]
enum FamilyMembers {
    Table,
    HouseholdId,
}
