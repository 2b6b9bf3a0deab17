use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use crate::group_by::GroupBy;
use crate::view::View;
use crate::visualization::{DistributedBy, Visualization};
use crate::Error;

/// Which kind of instances a report is built over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportSubject {
    #[default]
    Process,
    Decision,
}

impl ReportSubject {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportSubject::Process => "process",
            ReportSubject::Decision => "decision",
        }
    }
}

impl fmt::Display for ReportSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportSubject {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "process" => Ok(ReportSubject::Process),
            "decision" => Ok(ReportSubject::Decision),
            other => Err(Error::unknown("report type", other)),
        }
    }
}

/// Report document as exchanged with the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(default)]
    pub report_type: ReportSubject,
    #[serde(default)]
    pub data: ReportData,
}

/// The (view, groupBy, visualization) triple plus free-form chart settings.
///
/// Unset dimensions are `None`; they are serialized as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportData {
    #[serde(default)]
    pub view: Option<View>,
    #[serde(default)]
    pub group_by: Option<GroupBy>,
    #[serde(default)]
    pub visualization: Option<Visualization>,
    #[serde(default)]
    pub configuration: ReportConfiguration,
}

impl ReportData {
    pub fn distributed_by(&self) -> &DistributedBy {
        &self.configuration.distributed_by
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportConfiguration {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub color: Vec<String>,
    #[serde(default)]
    pub x_label: String,
    #[serde(default)]
    pub y_label: String,
    #[serde(default)]
    pub distributed_by: DistributedBy,
    #[serde(default)]
    pub target_value: TargetValue,
    /// Settings this crate does not interpret; kept so documents round-trip.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Goal line settings of bar and line charts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetValue {
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub count_chart: CountTarget,
    #[serde(default)]
    pub duration_chart: DurationTarget,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountTarget {
    pub value: f64,
    pub is_below: bool,
}

impl Default for CountTarget {
    fn default() -> Self {
        Self {
            value: 100.0,
            is_below: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationTarget {
    pub value: f64,
    pub unit: String,
    pub is_below: bool,
}

impl Default for DurationTarget {
    fn default() -> Self {
        Self {
            value: 2.0,
            unit: "hours".to_string(),
            is_below: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::Measure;
    use serde_json::json;

    #[test]
    fn test_partial_report_uses_defaults() {
        let report: Report = serde_json::from_value(json!({
            "data": {"configuration": {"distributedBy": "userTask"}}
        }))
        .unwrap();

        assert_eq!(report.report_type, ReportSubject::Process);
        assert!(report.data.view.is_none());
        assert_eq!(report.data.distributed_by(), &DistributedBy::UserTask);
        assert_eq!(report.data.configuration.target_value.count_chart.value, 100.0);
    }

    #[test]
    fn test_unknown_configuration_keys_round_trip() {
        let raw = json!({
            "view": {"entity": "processInstance", "property": "duration"},
            "groupBy": null,
            "visualization": "bar",
            "configuration": {"xLabel": "", "yLabel": "", "pointMarkers": true}
        });
        let data: ReportData = serde_json::from_value(raw).unwrap();

        assert_eq!(data.view, Some(View::ProcessInstance(Measure::Duration)));
        assert_eq!(data.configuration.extra.get("pointMarkers"), Some(&json!(true)));

        let back = serde_json::to_value(&data).unwrap();
        assert_eq!(back["configuration"]["pointMarkers"], json!(true));
        assert_eq!(back["groupBy"], Value::Null);
    }

    #[test]
    fn test_newer_backend_values_load() {
        let report: Report = serde_json::from_value(json!({
            "combined": false,
            "data": {
                "view": {"entity": "incident", "property": "frequency"},
                "groupBy": {"type": "duration", "value": null},
                "visualization": "table",
                "configuration": {"distributedBy": "variable"}
            }
        }))
        .unwrap();

        assert!(matches!(report.data.view, Some(View::Unknown { .. })));
        assert!(matches!(report.data.group_by, Some(GroupBy::Unknown { .. })));
        assert_eq!(
            report.data.distributed_by(),
            &DistributedBy::Other("variable".to_string())
        );
    }

    #[test]
    fn test_subject_from_str() {
        assert_eq!("decision".parse::<ReportSubject>().unwrap(), ReportSubject::Decision);
        assert!("combined".parse::<ReportSubject>().is_err());
    }
}
