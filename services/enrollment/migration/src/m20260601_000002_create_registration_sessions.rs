use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RegistrationSessions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RegistrationSessions::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RegistrationSessions::Email).string().not_null())
                    .col(ColumnDef::new(RegistrationSessions::Phone).string().not_null())
                    .col(
                        ColumnDef::new(RegistrationSessions::FirstName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RegistrationSessions::LastName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RegistrationSessions::IsEmailVerified)
                            .boolean()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RegistrationSessions::IsPhoneVerified)
                            .boolean()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RegistrationSessions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RegistrationSessions::ExpiresAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // External cleanup jobs sweep by expiry.
        manager
            .create_index(
                Index::create()
                    .table(RegistrationSessions::Table)
                    .col(RegistrationSessions::ExpiresAt)
                    .name("idx_registration_sessions_expires_at")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RegistrationSessions::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum RegistrationSessions {
    Table,
    Id,
    Email,
    Phone,
    FirstName,
    LastName,
    IsEmailVerified,
    IsPhoneVerified,
    CreatedAt,
    ExpiresAt,
}
