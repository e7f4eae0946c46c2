use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Degrees::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Degrees::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Degrees::Name).string().not_null())
                    .col(ColumnDef::new(Degrees::Code).string().not_null().unique_key())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Programs::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Programs::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Programs::DegreeId).uuid())
                    .col(ColumnDef::new(Programs::Name).string().not_null().unique_key())
                    .col(ColumnDef::new(Programs::Code).string().not_null().unique_key())
                    .col(ColumnDef::new(Programs::EntranceFee).big_integer().not_null())
                    .col(ColumnDef::new(Programs::PrereqStream).string())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Programs::Table, Programs::DegreeId)
                            .to(Degrees::Table, Degrees::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Majors::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Majors::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Majors::ProgramId).uuid().not_null())
                    .col(ColumnDef::new(Majors::Name).string().not_null().unique_key())
                    .col(ColumnDef::new(Majors::Code).string().not_null().unique_key())
                    .col(ColumnDef::new(Majors::PrereqStream).string())
                    .col(ColumnDef::new(Majors::Fee).big_integer().not_null())
                    .col(ColumnDef::new(Majors::EntranceExamAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Majors::ActualAvailableSeats)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Majors::BufferSeats).integer().not_null())
                    .col(ColumnDef::new(Majors::TotalSeats).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Majors::Table, Majors::ProgramId)
                            .to(Programs::Table, Programs::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(leaf_table(Leaf::Minors).to_owned())
            .await?;
        manager
            .create_table(leaf_table(Leaf::Mdcs).to_owned())
            .await?;
        manager
            .create_table(leaf_table(Leaf::Vacs).to_owned())
            .await?;
        manager
            .create_table(leaf_table(Leaf::Aecs).to_owned())
            .await?;

        // AOC additionally carries its own fee.
        manager
            .create_table(
                leaf_table(Leaf::Aocs)
                    .col(ColumnDef::new(Leaf::Fee).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MajorMinors::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(MajorMinors::MajorId).uuid().not_null())
                    .col(ColumnDef::new(MajorMinors::MinorId).uuid().not_null())
                    .primary_key(
                        Index::create()
                            .col(MajorMinors::MajorId)
                            .col(MajorMinors::MinorId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(MajorMinors::Table, MajorMinors::MajorId)
                            .to(Majors::Table, Majors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(MajorMinors::Table, MajorMinors::MinorId)
                            .to(Leaf::Minors, Leaf::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MajorMdcs::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(MajorMdcs::MajorId).uuid().not_null())
                    .col(ColumnDef::new(MajorMdcs::MdcId).uuid().not_null())
                    .primary_key(
                        Index::create()
                            .col(MajorMdcs::MajorId)
                            .col(MajorMdcs::MdcId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(MajorMdcs::Table, MajorMdcs::MajorId)
                            .to(Majors::Table, Majors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(MajorMdcs::Table, MajorMdcs::MdcId)
                            .to(Leaf::Mdcs, Leaf::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MajorMdcs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MajorMinors::Table).to_owned())
            .await?;
        for leaf in [Leaf::Aocs, Leaf::Aecs, Leaf::Vacs, Leaf::Mdcs, Leaf::Minors] {
            manager.drop_table(Table::drop().table(leaf).to_owned()).await?;
        }
        manager
            .drop_table(Table::drop().table(Majors::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Programs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Degrees::Table).to_owned())
            .await
    }
}

/// Shared shape of the leaf course tables (id, name, code).
fn leaf_table(table: Leaf) -> TableCreateStatement {
    Table::create()
        .table(table)
        .if_not_exists()
        .col(ColumnDef::new(Leaf::Id).uuid().not_null().primary_key())
        .col(ColumnDef::new(Leaf::Name).string().not_null().unique_key())
        .col(ColumnDef::new(Leaf::Code).string().not_null().unique_key())
        .to_owned()
}

#[derive(Iden)]
enum Degrees {
    Table,
    Id,
    Name,
    Code,
}

#[derive(Iden)]
enum Programs {
    Table,
    Id,
    DegreeId,
    Name,
    Code,
    EntranceFee,
    PrereqStream,
}

#[derive(Iden)]
enum Majors {
    Table,
    Id,
    ProgramId,
    Name,
    Code,
    PrereqStream,
    Fee,
    EntranceExamAt,
    ActualAvailableSeats,
    BufferSeats,
    TotalSeats,
}

/// Column names shared by the five leaf course tables, plus the
/// table idents themselves.
#[derive(Iden, Clone, Copy)]
enum Leaf {
    Minors,
    Mdcs,
    Vacs,
    Aecs,
    Aocs,
    Id,
    Name,
    Code,
    Fee,
}

#[derive(Iden)]
enum MajorMinors {
    Table,
    MajorId,
    MinorId,
}

#[derive(Iden)]
enum MajorMdcs {
    Table,
    MajorId,
    MdcId,
}
