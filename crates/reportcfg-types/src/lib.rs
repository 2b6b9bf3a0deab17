//! Report selection types shared by the engine and the CLI.
//!
//! Every dimension of a report (view, group-by, visualization) is a sum
//! type. The JSON shapes used by the reporting backend (`{entity, property}`
//! and `{type, value}`) are only spoken at the serde boundary; everything
//! past deserialization works on the typed variants. Views and groupings
//! newer than this crate load as `Unknown` and are written back unchanged.

pub mod error;
pub mod filter;
pub mod group_by;
pub mod report;
pub mod selection;
pub mod view;
pub mod visualization;

pub use error::{Error, Result};
pub use filter::{Filter, FilterLevel};
pub use group_by::{DateUnit, DecisionVariableRef, GroupBy};
pub use report::{
    CountTarget, DurationTarget, Report, ReportConfiguration, ReportData, ReportSubject,
    TargetValue,
};
pub use selection::{Dimension, Selection};
pub use view::{Measure, VariableRef, View};
pub use visualization::{DistributedBy, Visualization};
