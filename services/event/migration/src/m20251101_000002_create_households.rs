use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Households::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Households::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Households::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Households::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Households {
    Table,
    Id,
    CreatedAt,
}
