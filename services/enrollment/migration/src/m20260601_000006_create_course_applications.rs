use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CourseApplications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseApplications::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CourseApplications::AccountId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(CourseApplications::DegreeId).uuid())
                    .col(ColumnDef::new(CourseApplications::ProgramId).uuid())
                    .col(ColumnDef::new(CourseApplications::MajorId).uuid())
                    .col(ColumnDef::new(CourseApplications::MinorId).uuid())
                    .col(ColumnDef::new(CourseApplications::MdcId).uuid())
                    .col(ColumnDef::new(CourseApplications::VacId).uuid())
                    .col(ColumnDef::new(CourseApplications::AecId).uuid())
                    .col(ColumnDef::new(CourseApplications::AocId).uuid())
                    .col(
                        ColumnDef::new(CourseApplications::FeeAmount)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseApplications::IsFeePaid)
                            .boolean()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseApplications::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CourseApplications::Table, CourseApplications::AccountId)
                            .to(Accounts::Table, Accounts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CourseApplications::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum CourseApplications {
    Table,
    Id,
    AccountId,
    DegreeId,
    ProgramId,
    MajorId,
    MinorId,
    MdcId,
    VacId,
    AecId,
    AocId,
    FeeAmount,
    IsFeePaid,
    UpdatedAt,
}

#[derive(Iden)]
enum Accounts {
    Table,
    Id,
}
