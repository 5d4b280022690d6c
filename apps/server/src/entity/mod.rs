//! SeaORM entity definitions.

pub mod project;
pub mod test_case;
pub mod test_outcome;
pub mod test_run;
pub mod test_run_result;
pub mod test_suite;

pub use test_outcome::TestOutcome;
