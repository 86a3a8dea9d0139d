mod create;
mod delete;
mod delete_many;
mod get_by_id;
mod update;

use super::*;
use crate::model::student::StudentStatus;
use entity::prelude::{Course, Enrollment, Student};
use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, factory};

/// Builds create params with the given code and email and default names.
fn create_params(student_code: &str, email: &str) -> CreateStudentParams {
    CreateStudentParams {
        student_code: student_code.to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: email.to_string(),
        phone: None,
        birth_date: None,
        admission_date: None,
        status: StudentStatus::Active,
    }
}
