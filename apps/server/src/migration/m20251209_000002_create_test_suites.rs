//! Create test_suites table.

use sea_orm_migration::prelude::*;

use super::m20251209_000001_create_projects::Project;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TestSuite::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TestSuite::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TestSuite::Name).string().not_null())
                    .col(ColumnDef::new(TestSuite::Description).text())
                    .col(
                        ColumnDef::new(TestSuite::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(TestSuite::ProjectId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_test_suites_project_id")
                            .from(TestSuite::Table, TestSuite::ProjectId)
                            .to(Project::Table, Project::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_test_suites_project_id")
                    .table(TestSuite::Table)
                    .col(TestSuite::ProjectId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TestSuite::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TestSuite {
    #[sea_orm(iden = "test_suites")]
    Table,
    Id,
    Name,
    Description,
    CreatedAt,
    ProjectId,
}
