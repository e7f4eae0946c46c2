use sea_orm::entity::prelude::*;

/// Program offered under a degree (B.Sc, BBA, BCA, ...).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "programs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub degree_id: Option<Uuid>,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(unique)]
    pub code: String,
    /// Entrance application fee in the smallest currency unit.
    pub entrance_fee: i64,
    /// Required 12th stream ("science", "commerce", "arts"), if any.
    pub prereq_stream: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::degrees::Entity",
        from = "Column::DegreeId",
        to = "super::degrees::Column::Id"
    )]
    Degree,
    #[sea_orm(has_many = "super::majors::Entity")]
    Majors,
}

impl Related<super::degrees::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Degree.def()
    }
}

impl Related<super::majors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Majors.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
