use sea_orm::entity::prelude::*;

/// Durable student account created by registration finalization.
/// Email and phone are unique at the database level — the
/// application-level duplicate check alone cannot win a race.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    #[sea_orm(unique)]
    pub phone: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub is_admitted: bool,
    pub admission_date: Option<chrono::DateTime<chrono::Utc>>,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::course_applications::Entity")]
    CourseApplication,
    #[sea_orm(has_one = "super::student_profiles::Entity")]
    StudentProfile,
    #[sea_orm(has_one = "super::education_profiles::Entity")]
    EducationProfile,
}

impl Related<super::course_applications::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseApplication.def()
    }
}

impl Related<super::student_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentProfile.def()
    }
}

impl Related<super::education_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EducationProfile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
