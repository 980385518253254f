use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Missions::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Missions::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Missions::EventId).uuid().not_null())
                    .col(ColumnDef::new(Missions::Code).text().not_null())
                    .col(ColumnDef::new(Missions::Name).text().not_null())
                    .col(ColumnDef::new(Missions::Description).text())
                    .col(
                        ColumnDef::new(Missions::MissionType)
                            .text()
                            .not_null()
                            .check(Expr::col(Missions::MissionType).is_in([
                                "registration",
                                "photo",
                                "vote",
                                "tombola",
                                "stand_visit",
                            ])),
                    )
                    .col(
                        ColumnDef::new(Missions::Points)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Missions::QrSlug).text())
                    .col(
                        ColumnDef::new(Missions::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Missions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Missions::Table, Missions::EventId)
                            .to(Events::Table, Events::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Missions::Table)
                    .col(Missions::EventId)
                    .col(Missions::QrSlug)
                    .name("uq_missions_event_id_qr_slug")
                    .unique()
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Missions::Table)
                    .col(Missions::EventId)
                    .col(Missions::Code)
                    .name("uq_missions_event_id_code")
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Missions::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Missions {
    Table,
    Id,
    EventId,
    Code,
    Name,
    Description,
    MissionType,
    Points,
    QrSlug,
    IsActive,
    CreatedAt,
}

#[derive(Iden)]
enum Events {
    Table,
    Id,
}
