//! SeaORM entities for the enrollment service.

pub mod accounts;
pub mod aecs;
pub mod aocs;
pub mod course_applications;
pub mod degrees;
pub mod education_profiles;
pub mod major_mdcs;
pub mod major_minors;
pub mod majors;
pub mod mdcs;
pub mod minors;
pub mod otp_records;
pub mod programs;
pub mod registration_sessions;
pub mod student_profiles;
pub mod vacs;
