use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(pk_auto(Student::Id))
                    .col(string_uniq(Student::StudentCode))
                    .col(string(Student::FirstName))
                    .col(string(Student::LastName))
                    .col(string_uniq(Student::Email))
                    .col(string_null(Student::Phone))
                    .col(date_null(Student::BirthDate))
                    .col(date(Student::AdmissionDate))
                    .col(string_len(Student::Status, 16).default("ACTIVE"))
                    .col(double(Student::Gpa).default(0.0))
                    .col(integer(Student::CreditsCompleted).default(0))
                    .col(timestamp_with_time_zone(Student::CreatedAt))
                    .col(timestamp_with_time_zone(Student::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Student {
    Table,
    Id,
    StudentCode,
    FirstName,
    LastName,
    Email,
    Phone,
    BirthDate,
    AdmissionDate,
    Status,
    Gpa,
    CreditsCompleted,
    CreatedAt,
    UpdatedAt,
}
