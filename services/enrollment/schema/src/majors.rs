use sea_orm::{ActiveValue, ConnectionTrait};
use sea_orm::entity::prelude::*;

/// Major offered under a program, with its minor/MDC offering sets
/// (join tables) and seat accounting.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "majors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub program_id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(unique)]
    pub code: String,
    pub prereq_stream: Option<String>,
    /// Course fee in the smallest currency unit.
    pub fee: i64,
    pub entrance_exam_at: Option<chrono::DateTime<chrono::Utc>>,
    pub actual_available_seats: i32,
    pub buffer_seats: i32,
    pub total_seats: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::programs::Entity",
        from = "Column::ProgramId",
        to = "super::programs::Column::Id"
    )]
    Program,
    #[sea_orm(has_many = "super::major_minors::Entity")]
    MajorMinors,
    #[sea_orm(has_many = "super::major_mdcs::Entity")]
    MajorMdcs,
}

impl Related<super::programs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Program.def()
    }
}

fn active_value_or<T: Copy + Into<sea_orm::Value>>(value: &ActiveValue<T>, fallback: T) -> T {
    match value {
        ActiveValue::Set(v) | ActiveValue::Unchanged(v) => *v,
        ActiveValue::NotSet => fallback,
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    /// total_seats = actual_available_seats + buffer_seats,
    /// recomputed on every write.
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let actual = active_value_or(&self.actual_available_seats, 0);
        let buffer = active_value_or(&self.buffer_seats, 0);
        self.total_seats = ActiveValue::Set(actual + buffer);
        Ok(self)
    }
}
