use sea_orm::entity::prelude::*;

/// Multi-disciplinary course. Offered per major via major_mdcs.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "mdcs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(unique)]
    pub code: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::major_mdcs::Entity")]
    MajorMdcs,
}

impl ActiveModelBehavior for ActiveModel {}
