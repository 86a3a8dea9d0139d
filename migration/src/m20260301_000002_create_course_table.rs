use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Course::Table)
                    .if_not_exists()
                    .col(pk_auto(Course::Id))
                    .col(string_uniq(Course::CourseCode))
                    .col(string(Course::Name))
                    .col(text_null(Course::Description))
                    .col(integer(Course::Credits))
                    .col(string_len(Course::Level, 16).default("BASIC"))
                    .col(text_null(Course::Prerequisites))
                    .col(boolean(Course::Active).default(true))
                    .col(timestamp_with_time_zone(Course::CreatedAt))
                    .col(timestamp_with_time_zone(Course::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Course::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Course {
    Table,
    Id,
    CourseCode,
    Name,
    Description,
    Credits,
    Level,
    Prerequisites,
    Active,
    CreatedAt,
    UpdatedAt,
}
