//! Create test_run_results table.

use sea_orm_migration::prelude::*;

use super::m20251209_000003_create_test_cases::TestCase;
use super::m20251213_000004_create_test_runs::TestRun;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TestRunResult::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TestRunResult::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TestRunResult::TestRunId).integer().not_null())
                    .col(ColumnDef::new(TestRunResult::TestCaseId).integer().not_null())
                    .col(
                        ColumnDef::new(TestRunResult::Result)
                            .string()
                            .not_null()
                            .default("NotRun"),
                    )
                    .col(ColumnDef::new(TestRunResult::Comment).text())
                    .col(ColumnDef::new(TestRunResult::ExecutedBy).string())
                    .col(ColumnDef::new(TestRunResult::ExecutedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_test_run_results_test_run_id")
                            .from(TestRunResult::Table, TestRunResult::TestRunId)
                            .to(TestRun::Table, TestRun::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_test_run_results_test_case_id")
                            .from(TestRunResult::Table, TestRunResult::TestCaseId)
                            .to(TestCase::Table, TestCase::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_test_run_results_test_run_id")
                    .table(TestRunResult::Table)
                    .col(TestRunResult::TestRunId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_test_run_results_test_case_id")
                    .table(TestRunResult::Table)
                    .col(TestRunResult::TestCaseId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TestRunResult::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TestRunResult {
    #[sea_orm(iden = "test_run_results")]
    Table,
    Id,
    TestRunId,
    TestCaseId,
    Result,
    Comment,
    ExecutedBy,
    ExecutedAt,
}
