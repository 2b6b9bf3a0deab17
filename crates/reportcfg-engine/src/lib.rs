// Engine - option catalogs, compatibility rules and selection resolution.
// Everything here is pure and synchronous; callers own the report state and
// apply the returned patches themselves.

pub mod catalog;
pub mod chart;
pub mod filter;
pub mod patch;
mod report_config;
mod resolver;
pub mod rules;

pub use catalog::{
    Catalog, CatalogEntry, CatalogOption, CatalogValue, KnownVariables, ListedOption,
    MatchField, OptionGroup, VariableSource,
};
pub use chart::{DurationTicks, duration_ticks};
pub use filter::filter_same_type_existing_filters;
pub use patch::{FieldUpdate, ReportPatch, apply_patch};
pub use report_config::{AvailableOption, ReportConfig, ReportOptions, report_config};
pub use rules::{StageCheck, check_stages, is_allowed};

use reportcfg_types::{ReportData, Selection};

// Façade API - what the CLI calls

/// Resolve `selection` against `data` and return the patched report data.
pub fn select(config: &ReportConfig, selection: Selection, data: &ReportData) -> ReportData {
    let patch = config.update(selection, data);
    apply_patch(data, &patch)
}
