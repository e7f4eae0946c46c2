use sea_orm::entity::prelude::*;

/// Schooling record attached 1:1 to an account. Subject marks are
/// stored as JSON arrays of percentages; totals are computed by the
/// profile usecase on update.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "education_profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub account_id: Uuid,
    pub tenth_school_name: Option<String>,
    pub tenth_school_board: Option<String>,
    pub tenth_marks: Option<Json>,
    pub tenth_total: Option<i16>,
    /// Still appearing for the 12th exam — twelfth fields stay empty.
    pub is_appearing: bool,
    pub twelfth_school_name: Option<String>,
    pub twelfth_school_board: Option<String>,
    /// "science", "commerce" or "arts".
    pub stream: Option<String>,
    pub twelfth_marks: Option<Json>,
    pub twelfth_total: Option<i16>,
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
