//! Catalog of a decision report.

use reportcfg_types::{GroupBy, View};

use super::process::date_units;
use super::{Catalog, CatalogEntry, VariableSource};

pub fn view_catalog() -> Catalog<View> {
    Catalog::new(vec![
        CatalogEntry::single("rawData", "Raw Data", View::RawData),
        CatalogEntry::single("evaluationCount", "Evaluation Count", View::EvaluationCount),
    ])
}

pub fn group_by_catalog() -> Catalog<GroupBy> {
    Catalog::new(vec![
        CatalogEntry::single("none", "None", GroupBy::None),
        CatalogEntry::single("rules", "Rules", GroupBy::MatchedRule),
        CatalogEntry::group(
            "evaluationDate",
            "Evaluation Date",
            date_units("evaluationDate", GroupBy::EvaluationDate),
        ),
        CatalogEntry::variables("inputVariable", "Input Variable", VariableSource::DecisionInput),
        CatalogEntry::variables(
            "outputVariable",
            "Output Variable",
            VariableSource::DecisionOutput,
        ),
    ])
}
