use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MissionCompletions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MissionCompletions::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MissionCompletions::MissionId).uuid().not_null())
                    .col(
                        ColumnDef::new(MissionCompletions::RegistrationId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MissionCompletions::LocationCode)
                            .text()
                            .not_null()
                            .default("default"),
                    )
                    .col(
                        ColumnDef::new(MissionCompletions::Data)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'{}'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(MissionCompletions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(MissionCompletions::Table, MissionCompletions::MissionId)
                            .to(Missions::Table, Missions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(MissionCompletions::Table, MissionCompletions::RegistrationId)
                            .to(EventRegistrations::Table, EventRegistrations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(MissionCompletions::Table)
                    .col(MissionCompletions::MissionId)
                    .col(MissionCompletions::RegistrationId)
                    .col(MissionCompletions::LocationCode)
                    .name("uq_mission_completions_mission_registration_location")
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MissionCompletions::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum MissionCompletions {
    Table,
    Id,
    MissionId,
    RegistrationId,
    LocationCode,
    Data,
    CreatedAt,
}

#[derive(Iden)]
enum Missions {
    Table,
    Id,
}

#[derive(Iden)]
enum EventRegistrations {
    Table,
    Id,
}
