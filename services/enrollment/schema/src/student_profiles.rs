use sea_orm::entity::prelude::*;

/// Personal details attached 1:1 to an account. Created empty at
/// registration finalization; filled in by the student afterwards.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "student_profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub account_id: Uuid,
    /// "PWC{year}{seq:05}", assigned once at finalization.
    #[sea_orm(unique)]
    pub application_no: String,
    pub date_of_birth: Option<chrono::NaiveDate>,
    /// "male" or "female".
    pub gender: Option<String>,
    pub aadhaar_number: Option<String>,
    pub current_address: Option<String>,
    pub permanent_address: Option<String>,
    pub father_name: Option<String>,
    pub father_number: Option<String>,
    pub father_occupation: Option<String>,
    pub mother_name: Option<String>,
    pub mother_number: Option<String>,
    pub mother_occupation: Option<String>,
    pub caste: Option<String>,
    pub is_ews: bool,
    pub is_disabled: bool,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::accounts::Entity",
        from = "Column::AccountId",
        to = "super::accounts::Column::Id"
    )]
    Account,
}

impl Related<super::accounts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Account.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
