use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FamilyMembers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FamilyMembers::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FamilyMembers::HouseholdId).uuid().not_null())
                    .col(ColumnDef::new(FamilyMembers::Role).text().not_null())
                    .col(ColumnDef::new(FamilyMembers::Gender).text())
                    .col(ColumnDef::new(FamilyMembers::ApproxAgeGroup).text())
                    .col(
                        ColumnDef::new(FamilyMembers::IsStudent)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(FamilyMembers::IsStaff)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(FamilyMembers::IsExternal)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(FamilyMembers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(FamilyMembers::Table, FamilyMembers::HouseholdId)
                            .to(Households::Table, Households::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FamilyMembers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum FamilyMembers {
    Table,
    Id,
    HouseholdId,
    Role,
    Gender,
    ApproxAgeGroup,
    IsStudent,
    IsStaff,
    IsExternal,
    CreatedAt,
}

#[derive(Iden)]
enum Households {
    Table,
    Id,
}
