use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_student_table::Student, m20260301_000002_create_course_table::Course,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Enrollment::Table)
                    .if_not_exists()
                    .col(pk_auto(Enrollment::Id))
                    .col(integer(Enrollment::StudentId))
                    .col(integer(Enrollment::CourseId))
                    .col(double_null(Enrollment::Grade))
                    .col(date(Enrollment::EnrolledOn))
                    .col(date_null(Enrollment::CompletedOn))
                    .col(string_len(Enrollment::Status, 16).default("ENROLLED"))
                    .col(integer(Enrollment::Attempts).default(1))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_enrollment_student_id")
                            .from(Enrollment::Table, Enrollment::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_enrollment_course_id")
                            .from(Enrollment::Table, Enrollment::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One enrollment per student and course
        manager
            .create_index(
                Index::create()
                    .name("idx_enrollment_student_course")
                    .table(Enrollment::Table)
                    .col(Enrollment::StudentId)
                    .col(Enrollment::CourseId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Enrollment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Enrollment {
    Table,
    Id,
    StudentId,
    CourseId,
    Grade,
    EnrolledOn,
    CompletedOn,
    Status,
    Attempts,
}
