use sea_orm::entity::prelude::*;

/// Join table: multi-disciplinary courses offered by a major.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "major_mdcs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub major_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub mdc_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::majors::Entity",
        from = "Column::MajorId",
        to = "super::majors::Column::Id"
    )]
    Major,
    #[sea_orm(
        belongs_to = "super::mdcs::Entity",
        from = "Column::MdcId",
        to = "super::mdcs::Column::Id"
    )]
    Mdc,
}

impl Related<super::majors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Major.def()
    }
}

impl Related<super::mdcs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Mdc.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
