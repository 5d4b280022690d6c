//! Manual Test Suite server library.
//!
//! Projects own test suites, suites own test cases, and a test run snapshots
//! a suite's cases into per-case results that testers then fill in. This
//! library provides the database layer, the HTTP API and its configuration.

pub mod api;
pub mod config;
pub mod db;
pub mod entity;
pub mod error;
pub mod middleware;
pub mod migration;
pub mod models;
