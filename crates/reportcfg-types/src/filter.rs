use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Whether a filter narrows the instances or only the displayed view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterLevel {
    Instance,
    View,
}

/// Report filter entry.
///
/// `applied_to` lists definition identifiers; an empty list applies the
/// filter to every definition of the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    #[serde(rename = "type")]
    pub filter_type: String,
    pub filter_level: FilterLevel,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub applied_to: Vec<String>,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub data: Value,
}

impl Filter {
    pub fn new(filter_type: impl Into<String>, filter_level: FilterLevel) -> Self {
        Self {
            filter_type: filter_type.into(),
            filter_level,
            applied_to: Vec::new(),
            data: Value::Null,
        }
    }

    pub fn applied_to<I, S>(mut self, definitions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.applied_to = definitions.into_iter().map(Into::into).collect();
        self
    }

    /// True when both filters cover at least one common definition.
    pub fn overlaps(&self, other: &Filter) -> bool {
        if self.applied_to.is_empty() || other.applied_to.is_empty() {
            return true;
        }
        self.applied_to
            .iter()
            .any(|definition| other.applied_to.contains(definition))
    }
}
