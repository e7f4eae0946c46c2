use anyhow::{Context as _, anyhow};
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DatabaseTransaction,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use uuid::Uuid;

use campus_enrollment_schema::{
    accounts, aecs, aocs, course_applications, degrees, education_profiles, major_mdcs,
    major_minors, majors, mdcs, minors, otp_records, programs, registration_sessions,
    student_profiles, vacs,
};

use crate::domain::repository::{
    AccountRepository, ApplicationRepository, CatalogRepository, OtpRepository, ProfileRepository,
    SessionRepository,
};
use crate::domain::types::{
    Account, Channel, CourseKind, CourseOption, CourseSelection, Degree, EducationProfile, Major,
    NewRegistration, OtpRecord, Program, RegistrationSession, StudentProfile, application_no,
};
use crate::error::EnrollmentError;

// ── Account repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAccountRepository {
    pub db: DatabaseConnection,
}

impl AccountRepository for DbAccountRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, EnrollmentError> {
        let model = accounts::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find account by id")?;
        Ok(model.map(account_from_model))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, EnrollmentError> {
        let model = accounts::Entity::find()
            .filter(accounts::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find account by email")?;
        Ok(model.map(account_from_model))
    }

    async fn email_exists(&self, email: &str) -> Result<bool, EnrollmentError> {
        let count = accounts::Entity::find()
            .filter(accounts::Column::Email.eq(email))
            .count(&self.db)
            .await
            .context("count accounts by email")?;
        Ok(count > 0)
    }

    async fn phone_exists(&self, phone: &str) -> Result<bool, EnrollmentError> {
        let count = accounts::Entity::find()
            .filter(accounts::Column::Phone.eq(phone))
            .count(&self.db)
            .await
            .context("count accounts by phone")?;
        Ok(count > 0)
    }
}

fn account_from_model(model: accounts::Model) -> Account {
    Account {
        id: model.id,
        email: model.email,
        phone: model.phone,
        first_name: model.first_name,
        last_name: model.last_name,
        password_hash: model.password_hash,
        is_admitted: model.is_admitted,
        admission_date: model.admission_date,
        is_active: model.is_active,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Session repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbSessionRepository {
    pub db: DatabaseConnection,
}

impl SessionRepository for DbSessionRepository {
    async fn create(&self, session: &RegistrationSession) -> Result<(), EnrollmentError> {
        registration_sessions::ActiveModel {
            id: Set(session.id),
            email: Set(session.email.clone()),
            phone: Set(session.phone.clone()),
            first_name: Set(session.first_name.clone()),
            last_name: Set(session.last_name.clone()),
            is_email_verified: Set(session.is_email_verified),
            is_phone_verified: Set(session.is_phone_verified),
            created_at: Set(session.created_at),
            expires_at: Set(session.expires_at),
        }
        .insert(&self.db)
        .await
        .context("create registration session")?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<RegistrationSession>, EnrollmentError> {
        let model = registration_sessions::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find registration session")?;
        Ok(model.map(session_from_model))
    }

    async fn mark_verified(&self, id: Uuid, channel: Channel) -> Result<(), EnrollmentError> {
        let mut active = registration_sessions::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        match channel {
            Channel::Email => active.is_email_verified = Set(true),
            Channel::Phone => active.is_phone_verified = Set(true),
        }
        active
            .update(&self.db)
            .await
            .context("mark session channel verified")?;
        Ok(())
    }

    async fn finalize(
        &self,
        session_id: Uuid,
        registration: &NewRegistration,
    ) -> Result<(), EnrollmentError> {
        self.db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                let registration = registration.clone();
                Box::pin(async move {
                    insert_account(txn, &registration.account).await?;
                    insert_application(txn, &registration.application).await?;
                    let number = next_application_no(txn).await?;
                    insert_student_profile(txn, &registration.student_profile, &number).await?;
                    insert_education_profile(txn, &registration.education_profile).await?;
                    registration_sessions::Entity::delete_by_id(session_id)
                        .exec(txn)
                        .await?;
                    Ok(())
                })
            })
            .await
            .context("finalize registration")?;
        Ok(())
    }
}

fn session_from_model(model: registration_sessions::Model) -> RegistrationSession {
    RegistrationSession {
        id: model.id,
        email: model.email,
        phone: model.phone,
        first_name: model.first_name,
        last_name: model.last_name,
        is_email_verified: model.is_email_verified,
        is_phone_verified: model.is_phone_verified,
        created_at: model.created_at,
        expires_at: model.expires_at,
    }
}

async fn insert_account(
    txn: &DatabaseTransaction,
    account: &Account,
) -> Result<(), sea_orm::DbErr> {
    accounts::ActiveModel {
        id: Set(account.id),
        email: Set(account.email.clone()),
        phone: Set(account.phone.clone()),
        first_name: Set(account.first_name.clone()),
        last_name: Set(account.last_name.clone()),
        password_hash: Set(account.password_hash.clone()),
        is_admitted: Set(account.is_admitted),
        admission_date: Set(account.admission_date),
        is_active: Set(account.is_active),
        created_at: Set(account.created_at),
        updated_at: Set(account.updated_at),
    }
    .insert(txn)
    .await?;
    Ok(())
}

async fn insert_application(
    txn: &DatabaseTransaction,
    selection: &CourseSelection,
) -> Result<(), sea_orm::DbErr> {
    course_applications::ActiveModel {
        id: Set(selection.id),
        account_id: Set(selection.account_id),
        degree_id: Set(selection.degree),
        program_id: Set(selection.program),
        major_id: Set(selection.major),
        minor_id: Set(selection.minor),
        mdc_id: Set(selection.mdc),
        vac_id: Set(selection.vac),
        aec_id: Set(selection.aec),
        aoc_id: Set(selection.aoc),
        fee_amount: Set(selection.fee_amount),
        is_fee_paid: Set(selection.is_fee_paid),
        updated_at: Set(Utc::now()),
    }
    .insert(txn)
    .await?;
    Ok(())
}

/// Next number in the profile sequence. Runs inside the finalize
/// transaction so two concurrent signups cannot draw the same number.
async fn next_application_no(txn: &DatabaseTransaction) -> Result<String, sea_orm::DbErr> {
    let seq = student_profiles::Entity::find().count(txn).await? + 1;
    Ok(application_no(Utc::now(), seq))
}

async fn insert_student_profile(
    txn: &DatabaseTransaction,
    profile: &StudentProfile,
    application_no: &str,
) -> Result<(), sea_orm::DbErr> {
    student_profiles::ActiveModel {
        id: Set(profile.id),
        account_id: Set(profile.account_id),
        application_no: Set(application_no.to_owned()),
        date_of_birth: Set(profile.date_of_birth),
        gender: Set(profile.gender.clone()),
        aadhaar_number: Set(profile.aadhaar_number.clone()),
        current_address: Set(profile.current_address.clone()),
        permanent_address: Set(profile.permanent_address.clone()),
        father_name: Set(profile.father_name.clone()),
        father_number: Set(profile.father_number.clone()),
        father_occupation: Set(profile.father_occupation.clone()),
        mother_name: Set(profile.mother_name.clone()),
        mother_number: Set(profile.mother_number.clone()),
        mother_occupation: Set(profile.mother_occupation.clone()),
        caste: Set(profile.caste.clone()),
        is_ews: Set(profile.is_ews),
        is_disabled: Set(profile.is_disabled),
        updated_at: Set(profile.updated_at),
    }
    .insert(txn)
    .await?;
    Ok(())
}

async fn insert_education_profile(
    txn: &DatabaseTransaction,
    profile: &EducationProfile,
) -> Result<(), sea_orm::DbErr> {
    education_profiles::ActiveModel {
        id: Set(profile.id),
        account_id: Set(profile.account_id),
        tenth_school_name: Set(profile.tenth_school_name.clone()),
        tenth_school_board: Set(profile.tenth_school_board.clone()),
        tenth_marks: Set(marks_to_json(&profile.tenth_marks)),
        tenth_total: Set(profile.tenth_total),
        is_appearing: Set(profile.is_appearing),
        twelfth_school_name: Set(profile.twelfth_school_name.clone()),
        twelfth_school_board: Set(profile.twelfth_school_board.clone()),
        stream: Set(profile.stream.clone()),
        twelfth_marks: Set(marks_to_json(&profile.twelfth_marks)),
        twelfth_total: Set(profile.twelfth_total),
        updated_at: Set(profile.updated_at),
    }
    .insert(txn)
    .await?;
    Ok(())
}

// ── OTP repository ───────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbOtpRepository {
    pub db: DatabaseConnection,
}

impl OtpRepository for DbOtpRepository {
    async fn create(&self, record: &OtpRecord) -> Result<(), EnrollmentError> {
        otp_records::ActiveModel {
            id: Set(record.id),
            channel: Set(record.channel.as_str().to_owned()),
            identifier: Set(record.identifier.clone()),
            code: Set(record.code.clone()),
            attempt_count: Set(record.attempt_count as i32),
            created_at: Set(record.created_at),
            expires_at: Set(record.expires_at),
        }
        .insert(&self.db)
        .await
        .context("create otp record")?;
        Ok(())
    }

    async fn find_latest(
        &self,
        channel: Channel,
        identifier: &str,
    ) -> Result<Option<OtpRecord>, EnrollmentError> {
        let model = otp_records::Entity::find()
            .filter(otp_records::Column::Channel.eq(channel.as_str()))
            .filter(otp_records::Column::Identifier.eq(identifier))
            .order_by_desc(otp_records::Column::CreatedAt)
            .one(&self.db)
            .await
            .context("find latest otp record")?;
        model.map(otp_from_model).transpose()
    }

    async fn record_failed_attempt(&self, id: Uuid) -> Result<(), EnrollmentError> {
        otp_records::Entity::update_many()
            .col_expr(
                otp_records::Column::AttemptCount,
                Expr::col(otp_records::Column::AttemptCount).add(1),
            )
            .filter(otp_records::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("record failed otp attempt")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), EnrollmentError> {
        otp_records::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete otp record")?;
        Ok(())
    }
}

fn otp_from_model(model: otp_records::Model) -> Result<OtpRecord, EnrollmentError> {
    let channel = Channel::from_str(&model.channel)
        .ok_or_else(|| anyhow!("unknown otp channel {:?}", model.channel))?;
    Ok(OtpRecord {
        id: model.id,
        channel,
        identifier: model.identifier,
        code: model.code,
        attempt_count: model.attempt_count as u32,
        created_at: model.created_at,
        expires_at: model.expires_at,
    })
}

// ── Application repository ───────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbApplicationRepository {
    pub db: DatabaseConnection,
}

impl ApplicationRepository for DbApplicationRepository {
    async fn find_by_account(
        &self,
        account_id: Uuid,
    ) -> Result<Option<CourseSelection>, EnrollmentError> {
        let model = course_applications::Entity::find()
            .filter(course_applications::Column::AccountId.eq(account_id))
            .one(&self.db)
            .await
            .context("find course application")?;
        Ok(model.map(selection_from_model))
    }

    async fn save(&self, selection: &CourseSelection) -> Result<(), EnrollmentError> {
        let exists = course_applications::Entity::find_by_id(selection.id)
            .one(&self.db)
            .await
            .context("find course application by id")?
            .is_some();

        let active = course_applications::ActiveModel {
            id: Set(selection.id),
            account_id: Set(selection.account_id),
            degree_id: Set(selection.degree),
            program_id: Set(selection.program),
            major_id: Set(selection.major),
            minor_id: Set(selection.minor),
            mdc_id: Set(selection.mdc),
            vac_id: Set(selection.vac),
            aec_id: Set(selection.aec),
            aoc_id: Set(selection.aoc),
            fee_amount: Set(selection.fee_amount),
            is_fee_paid: Set(selection.is_fee_paid),
            updated_at: Set(Utc::now()),
        };

        if exists {
            active
                .update(&self.db)
                .await
                .context("update course application")?;
        } else {
            active
                .insert(&self.db)
                .await
                .context("insert course application")?;
        }
        Ok(())
    }
}

fn selection_from_model(model: course_applications::Model) -> CourseSelection {
    CourseSelection {
        id: model.id,
        account_id: model.account_id,
        degree: model.degree_id,
        program: model.program_id,
        major: model.major_id,
        minor: model.minor_id,
        mdc: model.mdc_id,
        vac: model.vac_id,
        aec: model.aec_id,
        aoc: model.aoc_id,
        fee_amount: model.fee_amount,
        is_fee_paid: model.is_fee_paid,
    }
}

// ── Catalog repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCatalogRepository {
    pub db: DatabaseConnection,
}

impl CatalogRepository for DbCatalogRepository {
    async fn degree(&self, id: Uuid) -> Result<Option<Degree>, EnrollmentError> {
        let model = degrees::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find degree")?;
        Ok(model.map(degree_from_model))
    }

    async fn program(&self, id: Uuid) -> Result<Option<Program>, EnrollmentError> {
        let model = programs::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find program")?;
        Ok(model.map(program_from_model))
    }

    async fn major(&self, id: Uuid) -> Result<Option<Major>, EnrollmentError> {
        let model = majors::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find major")?;
        Ok(model.map(major_from_model))
    }

    async fn course_option(
        &self,
        kind: CourseKind,
        id: Uuid,
    ) -> Result<Option<CourseOption>, EnrollmentError> {
        let option = match kind {
            CourseKind::Minor => minors::Entity::find_by_id(id)
                .one(&self.db)
                .await
                .context("find minor")?
                .map(|m| plain_option(kind, m.id, m.name, m.code)),
            CourseKind::Mdc => mdcs::Entity::find_by_id(id)
                .one(&self.db)
                .await
                .context("find mdc")?
                .map(|m| plain_option(kind, m.id, m.name, m.code)),
            CourseKind::Vac => vacs::Entity::find_by_id(id)
                .one(&self.db)
                .await
                .context("find vac")?
                .map(|m| plain_option(kind, m.id, m.name, m.code)),
            CourseKind::Aec => aecs::Entity::find_by_id(id)
                .one(&self.db)
                .await
                .context("find aec")?
                .map(|m| plain_option(kind, m.id, m.name, m.code)),
            CourseKind::Aoc => aocs::Entity::find_by_id(id)
                .one(&self.db)
                .await
                .context("find aoc")?
                .map(aoc_option),
        };
        Ok(option)
    }

    async fn list_degrees(&self) -> Result<Vec<Degree>, EnrollmentError> {
        let models = degrees::Entity::find()
            .order_by_asc(degrees::Column::Name)
            .all(&self.db)
            .await
            .context("list degrees")?;
        Ok(models.into_iter().map(degree_from_model).collect())
    }

    async fn programs_of_degree(&self, degree_id: Uuid) -> Result<Vec<Program>, EnrollmentError> {
        let models = programs::Entity::find()
            .filter(programs::Column::DegreeId.eq(degree_id))
            .order_by_asc(programs::Column::Name)
            .all(&self.db)
            .await
            .context("list programs of degree")?;
        Ok(models.into_iter().map(program_from_model).collect())
    }

    async fn majors_of_program(&self, program_id: Uuid) -> Result<Vec<Major>, EnrollmentError> {
        let models = majors::Entity::find()
            .filter(majors::Column::ProgramId.eq(program_id))
            .order_by_asc(majors::Column::Name)
            .all(&self.db)
            .await
            .context("list majors of program")?;
        Ok(models.into_iter().map(major_from_model).collect())
    }

    async fn offered_minors(&self, major_id: Uuid) -> Result<Vec<CourseOption>, EnrollmentError> {
        let ids: Vec<Uuid> = major_minors::Entity::find()
            .filter(major_minors::Column::MajorId.eq(major_id))
            .all(&self.db)
            .await
            .context("list minor offerings")?
            .into_iter()
            .map(|row| row.minor_id)
            .collect();
        let models = minors::Entity::find()
            .filter(minors::Column::Id.is_in(ids))
            .order_by_asc(minors::Column::Name)
            .all(&self.db)
            .await
            .context("list offered minors")?;
        Ok(models
            .into_iter()
            .map(|m| plain_option(CourseKind::Minor, m.id, m.name, m.code))
            .collect())
    }

    async fn offered_mdcs(&self, major_id: Uuid) -> Result<Vec<CourseOption>, EnrollmentError> {
        let ids: Vec<Uuid> = major_mdcs::Entity::find()
            .filter(major_mdcs::Column::MajorId.eq(major_id))
            .all(&self.db)
            .await
            .context("list mdc offerings")?
            .into_iter()
            .map(|row| row.mdc_id)
            .collect();
        let models = mdcs::Entity::find()
            .filter(mdcs::Column::Id.is_in(ids))
            .order_by_asc(mdcs::Column::Name)
            .all(&self.db)
            .await
            .context("list offered mdcs")?;
        Ok(models
            .into_iter()
            .map(|m| plain_option(CourseKind::Mdc, m.id, m.name, m.code))
            .collect())
    }

    async fn list_vacs(&self) -> Result<Vec<CourseOption>, EnrollmentError> {
        let models = vacs::Entity::find()
            .order_by_asc(vacs::Column::Name)
            .all(&self.db)
            .await
            .context("list vacs")?;
        Ok(models
            .into_iter()
            .map(|m| plain_option(CourseKind::Vac, m.id, m.name, m.code))
            .collect())
    }

    async fn list_aecs(&self) -> Result<Vec<CourseOption>, EnrollmentError> {
        let models = aecs::Entity::find()
            .order_by_asc(aecs::Column::Name)
            .all(&self.db)
            .await
            .context("list aecs")?;
        Ok(models
            .into_iter()
            .map(|m| plain_option(CourseKind::Aec, m.id, m.name, m.code))
            .collect())
    }

    async fn list_aocs(&self) -> Result<Vec<CourseOption>, EnrollmentError> {
        let models = aocs::Entity::find()
            .order_by_asc(aocs::Column::Name)
            .all(&self.db)
            .await
            .context("list aocs")?;
        Ok(models.into_iter().map(aoc_option).collect())
    }
}

fn degree_from_model(model: degrees::Model) -> Degree {
    Degree {
        id: model.id,
        name: model.name,
        code: model.code,
    }
}

fn program_from_model(model: programs::Model) -> Program {
    Program {
        id: model.id,
        degree_id: model.degree_id,
        name: model.name,
        code: model.code,
        entrance_fee: model.entrance_fee,
        prereq_stream: model.prereq_stream,
    }
}

fn major_from_model(model: majors::Model) -> Major {
    Major {
        id: model.id,
        program_id: model.program_id,
        name: model.name,
        code: model.code,
        prereq_stream: model.prereq_stream,
        fee: model.fee,
        entrance_exam_at: model.entrance_exam_at,
        actual_available_seats: model.actual_available_seats,
        buffer_seats: model.buffer_seats,
        total_seats: model.total_seats,
    }
}

fn plain_option(kind: CourseKind, id: Uuid, name: String, code: String) -> CourseOption {
    CourseOption {
        id,
        kind,
        name,
        code,
        fee: None,
    }
}

fn aoc_option(model: aocs::Model) -> CourseOption {
    CourseOption {
        id: model.id,
        kind: CourseKind::Aoc,
        name: model.name,
        code: model.code,
        fee: Some(model.fee),
    }
}

// ── Profile repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbProfileRepository {
    pub db: DatabaseConnection,
}

impl ProfileRepository for DbProfileRepository {
    async fn student_profile(
        &self,
        account_id: Uuid,
    ) -> Result<Option<StudentProfile>, EnrollmentError> {
        let model = student_profiles::Entity::find()
            .filter(student_profiles::Column::AccountId.eq(account_id))
            .one(&self.db)
            .await
            .context("find student profile")?;
        Ok(model.map(student_profile_from_model))
    }

    async fn update_student_profile(
        &self,
        profile: &StudentProfile,
    ) -> Result<(), EnrollmentError> {
        student_profiles::ActiveModel {
            id: Set(profile.id),
            account_id: Set(profile.account_id),
            application_no: Set(profile.application_no.clone()),
            date_of_birth: Set(profile.date_of_birth),
            gender: Set(profile.gender.clone()),
            aadhaar_number: Set(profile.aadhaar_number.clone()),
            current_address: Set(profile.current_address.clone()),
            permanent_address: Set(profile.permanent_address.clone()),
            father_name: Set(profile.father_name.clone()),
            father_number: Set(profile.father_number.clone()),
            father_occupation: Set(profile.father_occupation.clone()),
            mother_name: Set(profile.mother_name.clone()),
            mother_number: Set(profile.mother_number.clone()),
            mother_occupation: Set(profile.mother_occupation.clone()),
            caste: Set(profile.caste.clone()),
            is_ews: Set(profile.is_ews),
            is_disabled: Set(profile.is_disabled),
            updated_at: Set(profile.updated_at),
        }
        .update(&self.db)
        .await
        .context("update student profile")?;
        Ok(())
    }

    async fn education_profile(
        &self,
        account_id: Uuid,
    ) -> Result<Option<EducationProfile>, EnrollmentError> {
        let model = education_profiles::Entity::find()
            .filter(education_profiles::Column::AccountId.eq(account_id))
            .one(&self.db)
            .await
            .context("find education profile")?;
        Ok(model.map(education_profile_from_model))
    }

    async fn update_education_profile(
        &self,
        profile: &EducationProfile,
    ) -> Result<(), EnrollmentError> {
        education_profiles::ActiveModel {
            id: Set(profile.id),
            account_id: Set(profile.account_id),
            tenth_school_name: Set(profile.tenth_school_name.clone()),
            tenth_school_board: Set(profile.tenth_school_board.clone()),
            tenth_marks: Set(marks_to_json(&profile.tenth_marks)),
            tenth_total: Set(profile.tenth_total),
            is_appearing: Set(profile.is_appearing),
            twelfth_school_name: Set(profile.twelfth_school_name.clone()),
            twelfth_school_board: Set(profile.twelfth_school_board.clone()),
            stream: Set(profile.stream.clone()),
            twelfth_marks: Set(marks_to_json(&profile.twelfth_marks)),
            twelfth_total: Set(profile.twelfth_total),
            updated_at: Set(profile.updated_at),
        }
        .update(&self.db)
        .await
        .context("update education profile")?;
        Ok(())
    }
}

fn student_profile_from_model(model: student_profiles::Model) -> StudentProfile {
    StudentProfile {
        id: model.id,
        account_id: model.account_id,
        application_no: model.application_no,
        date_of_birth: model.date_of_birth,
        gender: model.gender,
        aadhaar_number: model.aadhaar_number,
        current_address: model.current_address,
        permanent_address: model.permanent_address,
        father_name: model.father_name,
        father_number: model.father_number,
        father_occupation: model.father_occupation,
        mother_name: model.mother_name,
        mother_number: model.mother_number,
        mother_occupation: model.mother_occupation,
        caste: model.caste,
        is_ews: model.is_ews,
        is_disabled: model.is_disabled,
        updated_at: model.updated_at,
    }
}

fn education_profile_from_model(model: education_profiles::Model) -> EducationProfile {
    EducationProfile {
        id: model.id,
        account_id: model.account_id,
        tenth_school_name: model.tenth_school_name,
        tenth_school_board: model.tenth_school_board,
        tenth_marks: marks_from_json(model.tenth_marks),
        tenth_total: model.tenth_total,
        is_appearing: model.is_appearing,
        twelfth_school_name: model.twelfth_school_name,
        twelfth_school_board: model.twelfth_school_board,
        stream: model.stream,
        twelfth_marks: marks_from_json(model.twelfth_marks),
        twelfth_total: model.twelfth_total,
        updated_at: model.updated_at,
    }
}

fn marks_from_json(value: Option<serde_json::Value>) -> Option<Vec<i16>> {
    value.and_then(|v| serde_json::from_value(v).ok())
}

fn marks_to_json(marks: &Option<Vec<i16>>) -> Option<serde_json::Value> {
    marks.as_ref().map(|m| serde_json::json!(m))
}
