//! Testing infrastructure for reportcfg tests.
//!
//! This crate provides utilities for writing readable tests:
//! - `fixtures`: Report, view and grouping builders
//! - `TestWorld`: Isolated environment for running the CLI
//! - `assertions`: Checks on patch and CLI JSON output

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use fixtures::ReportBuilder;
pub use world::{CliResult, TestWorld};
