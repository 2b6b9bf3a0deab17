//! Catalog of a process report.

use reportcfg_types::{DateUnit, GroupBy, Measure, View};

use super::{Catalog, CatalogEntry, CatalogOption, VariableSource};

pub fn view_catalog() -> Catalog<View> {
    Catalog::new(vec![
        CatalogEntry::single("rawData", "Raw Data", View::RawData),
        CatalogEntry::group("pi", "Process Instance", measures("pi", View::ProcessInstance)),
        CatalogEntry::group("fn", "Flow Node", measures("fn", View::FlowNode)),
        CatalogEntry::group("userTask", "User Task", measures("userTask", View::UserTask)),
        CatalogEntry::variables("variable", "Variable", VariableSource::ProcessVariable),
    ])
}

pub fn group_by_catalog() -> Catalog<GroupBy> {
    Catalog::new(vec![
        CatalogEntry::single("none", "None", GroupBy::None),
        CatalogEntry::single("flowNodes", "Flow Nodes", GroupBy::FlowNodes),
        CatalogEntry::single("userTasks", "User Tasks", GroupBy::UserTasks),
        CatalogEntry::group("startDate", "Start Date", date_units("startDate", GroupBy::StartDate)),
        CatalogEntry::group("endDate", "End Date", date_units("endDate", GroupBy::EndDate)),
        CatalogEntry::group(
            "runningDate",
            "Running Date",
            date_units("runningDate", GroupBy::RunningDate),
        ),
        CatalogEntry::single("assignee", "Assignee", GroupBy::Assignee),
        CatalogEntry::single("candidateGroup", "Candidate Group", GroupBy::CandidateGroup),
        CatalogEntry::variables("variable", "Variable", VariableSource::ProcessVariable),
    ])
}

fn measures(prefix: &str, view: fn(Measure) -> View) -> Vec<CatalogOption<View>> {
    vec![
        CatalogOption::new(
            format!("{}_count", prefix),
            "Count",
            view(Measure::Frequency),
        ),
        CatalogOption::new(
            format!("{}_duration", prefix),
            "Duration",
            view(Measure::Duration),
        ),
    ]
}

/// One option per date unit, keyed `<prefix>_<unit>`.
pub(crate) fn date_units(
    prefix: &str,
    group_by: fn(DateUnit) -> GroupBy,
) -> Vec<CatalogOption<GroupBy>> {
    DateUnit::ALL
        .into_iter()
        .map(|unit| {
            CatalogOption::new(
                format!("{}_{}", prefix, unit.as_str()),
                unit.label(),
                group_by(unit),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MatchField;

    #[test]
    fn test_group_entry_order() {
        let catalog = group_by_catalog();
        let keys: Vec<&str> = catalog.entries().iter().map(|e| e.key()).collect();
        assert_eq!(
            keys,
            vec![
                "none",
                "flowNodes",
                "userTasks",
                "startDate",
                "endDate",
                "runningDate",
                "assignee",
                "candidateGroup",
                "variable"
            ]
        );
    }

    #[test]
    fn test_date_unit_keys() {
        let catalog = group_by_catalog();
        let option = catalog
            .find_selected_option(MatchField::Key("runningDate_automatic"))
            .unwrap();
        assert_eq!(option.data, GroupBy::RunningDate(DateUnit::Automatic));
        assert_eq!(option.label, "Automatic");
    }
}
