use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventRegistrations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EventRegistrations::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(EventRegistrations::EventId).uuid().not_null())
                    .col(
                        ColumnDef::new(EventRegistrations::HouseholdId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EventRegistrations::FamilySize)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(EventRegistrations::Area).text())
                    .col(
                        ColumnDef::new(EventRegistrations::Interests)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(ColumnDef::new(EventRegistrations::TeamName).text().not_null())
                    .col(
                        ColumnDef::new(EventRegistrations::Source)
                            .text()
                            .not_null()
                            .default("web"),
                    )
                    .col(
                        ColumnDef::new(EventRegistrations::RawPayload)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EventRegistrations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(EventRegistrations::Table, EventRegistrations::EventId)
                            .to(Events::Table, Events::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(EventRegistrations::Table, EventRegistrations::HouseholdId)
                            .to(Households::Table, Households::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventRegistrations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum EventRegistrations {
    Table,
    Id,
    EventId,
    HouseholdId,
    FamilySize,
    Area,
    Interests,
    TeamName,
    Source,
    RawPayload,
    CreatedAt,
}

#[derive(Iden)]
enum Events {
    Table,
    Id,
}

#[derive(Iden)]
enum Households {
    Table,
    Id,
}
