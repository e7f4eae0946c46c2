use sea_orm::entity::prelude::*;

/// One-time code issued against an (channel, identifier) pair.
/// Multiple live codes may coexist; verification targets the most
/// recently created one. Deleted on successful verification.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "otp_records")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// "email" or "phone".
    pub channel: String,
    pub identifier: String,
    pub code: String,
    pub attempt_count: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub expires_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
