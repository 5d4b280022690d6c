//! SeaORM database migrations.

pub use sea_orm_migration::prelude::*;

mod m20251209_000001_create_projects;
mod m20251209_000002_create_test_suites;
mod m20251209_000003_create_test_cases;
mod m20251213_000004_create_test_runs;
mod m20251213_000005_create_test_run_results;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251209_000001_create_projects::Migration),
            Box::new(m20251209_000002_create_test_suites::Migration),
            Box::new(m20251209_000003_create_test_cases::Migration),
            Box::new(m20251213_000004_create_test_runs::Migration),
            Box::new(m20251213_000005_create_test_run_results::Migration),
        ]
    }
}
