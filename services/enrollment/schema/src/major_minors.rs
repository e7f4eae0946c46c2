use sea_orm::entity::prelude::*;

/// Join table: minors offered by a major.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "major_minors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub major_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub minor_id: Uuid,
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
        belongs_to = "super::minors::Entity",
        from = "Column::MinorId",
        to = "super::minors::Column::Id"
    )]
    Minor,
}

impl Related<super::majors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Major.def()
    }
}

impl Related<super::minors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Minor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
