// NOTE: reportcfg CLI layout
//
// Handlers read the report, call the engine and hand a view model to the
// renderer. The engine never touches files or stdout, so everything it
// returns can be printed as text or JSON without reshaping.
//
// Reports are read and written whole. `update` prints the `$set` patch by
// default so the tool composes with callers that own the report store;
// `--apply` is for editing files in place.

mod args;
mod commands;
pub mod config;
mod handlers;
mod logging;
pub mod presentation;
mod report_io;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
