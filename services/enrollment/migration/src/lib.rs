use sea_orm_migration::prelude::*;

mod m20260601_000001_create_accounts;
mod m20260601_000002_create_registration_sessions;
mod m20260601_000003_create_otp_records;
mod m20260601_000004_create_catalog;
mod m20260601_000005_create_profiles;
mod m20260601_000006_create_course_applications;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260601_000001_create_accounts::Migration),
            Box::new(m20260601_000002_create_registration_sessions::Migration),
            Box::new(m20260601_000003_create_otp_records::Migration),
            Box::new(m20260601_000004_create_catalog::Migration),
            Box::new(m20260601_000005_create_profiles::Migration),
            Box::new(m20260601_000006_create_course_applications::Migration),
        ]
    }
}
