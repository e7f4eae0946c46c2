use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StudentProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentProfiles::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StudentProfiles::AccountId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(StudentProfiles::ApplicationNo)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(StudentProfiles::DateOfBirth).date())
                    .col(ColumnDef::new(StudentProfiles::Gender).string())
                    .col(ColumnDef::new(StudentProfiles::AadhaarNumber).string())
                    .col(ColumnDef::new(StudentProfiles::CurrentAddress).text())
                    .col(ColumnDef::new(StudentProfiles::PermanentAddress).text())
                    .col(ColumnDef::new(StudentProfiles::FatherName).string())
                    .col(ColumnDef::new(StudentProfiles::FatherNumber).string())
                    .col(ColumnDef::new(StudentProfiles::FatherOccupation).string())
                    .col(ColumnDef::new(StudentProfiles::MotherName).string())
                    .col(ColumnDef::new(StudentProfiles::MotherNumber).string())
                    .col(ColumnDef::new(StudentProfiles::MotherOccupation).string())
                    .col(ColumnDef::new(StudentProfiles::Caste).string())
                    .col(ColumnDef::new(StudentProfiles::IsEws).boolean().not_null())
                    .col(
                        ColumnDef::new(StudentProfiles::IsDisabled)
                            .boolean()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentProfiles::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentProfiles::Table, StudentProfiles::AccountId)
                            .to(Accounts::Table, Accounts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EducationProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EducationProfiles::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(EducationProfiles::AccountId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(EducationProfiles::TenthSchoolName).string())
                    .col(ColumnDef::new(EducationProfiles::TenthSchoolBoard).string())
                    .col(ColumnDef::new(EducationProfiles::TenthMarks).json_binary())
                    .col(ColumnDef::new(EducationProfiles::TenthTotal).small_integer())
                    .col(
                        ColumnDef::new(EducationProfiles::IsAppearing)
                            .boolean()
                            .not_null(),
                    )
                    .col(ColumnDef::new(EducationProfiles::TwelfthSchoolName).string())
                    .col(ColumnDef::new(EducationProfiles::TwelfthSchoolBoard).string())
                    .col(ColumnDef::new(EducationProfiles::Stream).string())
                    .col(ColumnDef::new(EducationProfiles::TwelfthMarks).json_binary())
                    .col(ColumnDef::new(EducationProfiles::TwelfthTotal).small_integer())
                    .col(
                        ColumnDef::new(EducationProfiles::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(EducationProfiles::Table, EducationProfiles::AccountId)
                            .to(Accounts::Table, Accounts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EducationProfiles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudentProfiles::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum StudentProfiles {
    Table,
    Id,
    AccountId,
    ApplicationNo,
    DateOfBirth,
    Gender,
    AadhaarNumber,
    CurrentAddress,
    PermanentAddress,
    FatherName,
    FatherNumber,
    FatherOccupation,
    MotherName,
    MotherNumber,
    MotherOccupation,
    Caste,
    IsEws,
    IsDisabled,
    UpdatedAt,
}

#[derive(Iden)]
enum EducationProfiles {
    Table,
    Id,
    AccountId,
    TenthSchoolName,
    TenthSchoolBoard,
    TenthMarks,
    TenthTotal,
    IsAppearing,
    TwelfthSchoolName,
    TwelfthSchoolBoard,
    Stream,
    TwelfthMarks,
    TwelfthTotal,
    UpdatedAt,
}

#[derive(Iden)]
enum Accounts {
    Table,
    Id,
}
