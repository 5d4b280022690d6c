//! Create test_cases table.

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
                    .table(TestCase::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TestCase::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TestCase::Title).string().not_null())
                    .col(ColumnDef::new(TestCase::Steps).text())
                    .col(ColumnDef::new(TestCase::ExpectedResult).text())
                    .col(
                        ColumnDef::new(TestCase::Status)
                            .string()
                            .not_null()
                            .default("NotRun"),
                    )
                    .col(ColumnDef::new(TestCase::TestSuiteId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_test_cases_test_suite_id")
                            .from(TestCase::Table, TestCase::TestSuiteId)
                            .to(TestSuite::Table, TestSuite::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_test_cases_test_suite_id")
                    .table(TestCase::Table)
                    .col(TestCase::TestSuiteId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TestCase::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TestCase {
    #[sea_orm(iden = "test_cases")]
    Table,
    Id,
    Title,
    Steps,
    ExpectedResult,
    Status,
    TestSuiteId,
}
