use sea_orm::entity::prelude::*;

/// A student's single course application across the catalog
/// hierarchy. All eight selections are nullable; the row is only
/// written once the set is complete.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "course_applications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub account_id: Uuid,
    pub degree_id: Option<Uuid>,
    pub program_id: Option<Uuid>,
    pub major_id: Option<Uuid>,
    pub minor_id: Option<Uuid>,
    pub mdc_id: Option<Uuid>,
    pub vac_id: Option<Uuid>,
    pub aec_id: Option<Uuid>,
    pub aoc_id: Option<Uuid>,
    /// Total fee in the smallest currency unit.
    pub fee_amount: i64,
    pub is_fee_paid: bool,
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
