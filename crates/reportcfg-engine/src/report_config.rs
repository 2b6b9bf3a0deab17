use once_cell::sync::Lazy;
use reportcfg_types::{
    Dimension, GroupBy, ReportData, ReportSubject, Selection, View, Visualization,
};
use serde::Serialize;
use serde_json::Value;

use crate::catalog::{self, Catalog, CatalogValue, KnownVariables};
use crate::rules;

static PROCESS: Lazy<ReportConfig> = Lazy::new(|| ReportConfig::new(ReportSubject::Process));
static DECISION: Lazy<ReportConfig> = Lazy::new(|| ReportConfig::new(ReportSubject::Decision));

/// Shared, unexpanded configuration service for a report subject.
pub fn report_config(subject: ReportSubject) -> &'static ReportConfig {
    match subject {
        ReportSubject::Process => &PROCESS,
        ReportSubject::Decision => &DECISION,
    }
}

/// The three catalogs of a report subject.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportOptions {
    pub view: Catalog<View>,
    pub group_by: Catalog<GroupBy>,
    pub visualization: Catalog<Visualization>,
}

/// Catalog entry annotated with whether it can be picked right now.
///
/// `allowed` is `None` when the earlier dimensions it depends on are unset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvailableOption {
    pub key: String,
    pub label: String,
    pub data: Value,
    pub allowed: Option<bool>,
}

/// Catalogs, lookups, rules and the resolver bound to one report subject.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    subject: ReportSubject,
    options: ReportOptions,
}

impl ReportConfig {
    pub fn new(subject: ReportSubject) -> Self {
        let options = match subject {
            ReportSubject::Process => ReportOptions {
                view: catalog::process::view_catalog(),
                group_by: catalog::process::group_by_catalog(),
                visualization: catalog::visualization_catalog(),
            },
            ReportSubject::Decision => ReportOptions {
                view: catalog::decision::view_catalog(),
                group_by: catalog::decision::group_by_catalog(),
                visualization: catalog::visualization_catalog(),
            },
        };
        Self { subject, options }
    }

    pub fn subject(&self) -> ReportSubject {
        self.subject
    }

    pub fn options(&self) -> &ReportOptions {
        &self.options
    }

    /// Copy with variable groups expanded for the given variables.
    pub fn with_variables(&self, known: &KnownVariables) -> Self {
        Self {
            subject: self.subject,
            options: ReportOptions {
                view: self.options.view.with_variables(known),
                group_by: self.options.group_by.with_variables(known),
                visualization: self.options.visualization.clone(),
            },
        }
    }

    /// Label of a selected value, empty when the catalog does not know it.
    pub fn label_for(&self, selection: &Selection) -> String {
        match selection {
            Selection::View(view) => self.options.view.label_for(view),
            Selection::GroupBy(group_by) => self.options.group_by.label_for(group_by),
            Selection::Visualization(viz) => self.options.visualization.label_for(viz),
        }
    }

    pub fn is_allowed(
        &self,
        report: Option<&ReportData>,
        view: &View,
        group_by: Option<&GroupBy>,
        visualization: Option<Visualization>,
    ) -> bool {
        rules::is_allowed(report, view, group_by, visualization)
    }

    /// Visualizations legal for the pair, in catalog order.
    pub fn allowed_visualizations(
        &self,
        report: Option<&ReportData>,
        view: &View,
        group_by: &GroupBy,
    ) -> Vec<Visualization> {
        self.options
            .visualization
            .values()
            .copied()
            .filter(|viz| rules::is_allowed(report, view, Some(group_by), Some(*viz)))
            .collect()
    }

    /// Every concrete option of `dimension`, flagged against the report's
    /// current selection.
    pub fn list_options(
        &self,
        dimension: Dimension,
        data: &ReportData,
    ) -> serde_json::Result<Vec<AvailableOption>> {
        let view = data.view.as_ref();
        let group_by = data.group_by.as_ref();

        match dimension {
            Dimension::View => annotate(&self.options.view, |v| {
                Some(rules::is_allowed(Some(data), v, None, None))
            }),
            Dimension::GroupBy => annotate(&self.options.group_by, |g| {
                view.map(|view| rules::is_allowed(Some(data), view, Some(g), None))
            }),
            Dimension::Visualization => annotate(&self.options.visualization, |viz| {
                let (view, group_by) = (view?, group_by?);
                Some(rules::is_allowed(Some(data), view, Some(group_by), Some(*viz)))
            }),
        }
    }

    /// Default x axis label for a grouping.
    pub(crate) fn x_label_for(&self, group_by: &GroupBy) -> String {
        match group_by.variable_name() {
            Some(name) => name.to_string(),
            None => self
                .options
                .group_by
                .group_label_for(group_by)
                .unwrap_or_default()
                .to_string(),
        }
    }

    /// Default y axis label for a view.
    pub(crate) fn y_label_for(&self, view: &View) -> String {
        self.options.view.label_for(view).replace(": ", " ")
    }
}

fn annotate<T, F>(catalog: &Catalog<T>, allowed: F) -> serde_json::Result<Vec<AvailableOption>>
where
    T: CatalogValue + Serialize,
    F: Fn(&T) -> Option<bool>,
{
    catalog
        .list()
        .into_iter()
        .map(|listed| {
            Ok(AvailableOption {
                key: listed.key.to_string(),
                data: serde_json::to_value(listed.data)?,
                label: listed.label,
                allowed: allowed(listed.data),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use reportcfg_types::{DateUnit, Measure, VariableRef};

    #[test]
    fn test_shared_configs_match_subject() {
        assert_eq!(report_config(ReportSubject::Process).subject(), ReportSubject::Process);
        assert_eq!(report_config(ReportSubject::Decision).subject(), ReportSubject::Decision);
    }

    #[test]
    fn test_axis_labels() {
        let config = report_config(ReportSubject::Process);

        assert_eq!(config.x_label_for(&GroupBy::StartDate(DateUnit::Week)), "Start Date");
        assert_eq!(
            config.x_label_for(&GroupBy::Variable(VariableRef::new("amount", "Double"))),
            "amount"
        );
        assert_eq!(
            config.y_label_for(&View::ProcessInstance(Measure::Frequency)),
            "Process Instance Count"
        );
        assert_eq!(config.y_label_for(&View::RawData), "Raw Data");
    }

    #[test]
    fn test_list_options_for_group_by_requires_view() {
        let config = report_config(ReportSubject::Process);
        let options = config
            .list_options(Dimension::GroupBy, &ReportData::default())
            .unwrap();

        assert!(!options.is_empty());
        assert!(options.iter().all(|o| o.allowed.is_none()));
    }

    #[test]
    fn test_list_options_flags_visualizations() {
        let config = report_config(ReportSubject::Process);
        let data = ReportData {
            view: Some(View::ProcessInstance(Measure::Frequency)),
            group_by: Some(GroupBy::None),
            ..Default::default()
        };

        let allowed: Vec<String> = config
            .list_options(Dimension::Visualization, &data)
            .unwrap()
            .into_iter()
            .filter(|o| o.allowed == Some(true))
            .map(|o| o.key)
            .collect();
        assert_eq!(allowed, vec!["number"]);
    }
}
