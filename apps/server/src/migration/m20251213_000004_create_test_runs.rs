//! Create test_runs table.

use sea_orm_migration::prelude::*;

use super::m20251209_000002_create_test_suites::TestSuite;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TestRun::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TestRun::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TestRun::TestSuiteId).integer().not_null())
                    .col(ColumnDef::new(TestRun::Name).string().not_null())
                    .col(
                        ColumnDef::new(TestRun::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(TestRun::CreatedBy).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_test_runs_test_suite_id")
                            .from(TestRun::Table, TestRun::TestSuiteId)
                            .to(TestSuite::Table, TestSuite::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_test_runs_test_suite_id")
                    .table(TestRun::Table)
                    .col(TestRun::TestSuiteId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_test_runs_created_at")
                    .table(TestRun::Table)
                    .col(TestRun::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TestRun::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TestRun {
    #[sea_orm(iden = "test_runs")]
    Table,
    Id,
    TestSuiteId,
    Name,
    CreatedAt,
    CreatedBy,
}
