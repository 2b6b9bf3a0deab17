//! Typed report patches.
//!
//! The resolver describes a change as a [`ReportPatch`]; [`apply_patch`]
//! turns it into a new [`ReportData`] without touching the input. For JSON
//! callers a patch serializes to the nested `{"field": {"$set": value}}`
//! document, with label updates nested under `configuration`.

use reportcfg_types::{GroupBy, ReportData, View, Visualization};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value, json};

/// A single field assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    View(Option<View>),
    GroupBy(Option<GroupBy>),
    Visualization(Option<Visualization>),
    XLabel(String),
    YLabel(String),
}

/// Ordered set of field assignments; a later update to the same field wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportPatch {
    updates: Vec<FieldUpdate>,
}

impl ReportPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, update: FieldUpdate) {
        self.updates.push(update);
    }

    pub fn with(mut self, update: FieldUpdate) -> Self {
        self.push(update);
        self
    }

    pub fn updates(&self) -> &[FieldUpdate] {
        &self.updates
    }

    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }

    /// `Some(None)` means the view is reset.
    pub fn view(&self) -> Option<Option<&View>> {
        self.updates.iter().rev().find_map(|u| match u {
            FieldUpdate::View(view) => Some(view.as_ref()),
            _ => None,
        })
    }

    pub fn group_by(&self) -> Option<Option<&GroupBy>> {
        self.updates.iter().rev().find_map(|u| match u {
            FieldUpdate::GroupBy(group_by) => Some(group_by.as_ref()),
            _ => None,
        })
    }

    pub fn visualization(&self) -> Option<Option<Visualization>> {
        self.updates.iter().rev().find_map(|u| match u {
            FieldUpdate::Visualization(viz) => Some(*viz),
            _ => None,
        })
    }

    pub fn x_label(&self) -> Option<&str> {
        self.updates.iter().rev().find_map(|u| match u {
            FieldUpdate::XLabel(label) => Some(label.as_str()),
            _ => None,
        })
    }

    pub fn y_label(&self) -> Option<&str> {
        self.updates.iter().rev().find_map(|u| match u {
            FieldUpdate::YLabel(label) => Some(label.as_str()),
            _ => None,
        })
    }

    /// The legacy `$set` document.
    pub fn to_set_document(&self) -> Value {
        let mut root = Map::new();
        let mut configuration = Map::new();

        for update in &self.updates {
            match update {
                FieldUpdate::View(view) => {
                    root.insert("view".into(), json!({ "$set": view }));
                }
                FieldUpdate::GroupBy(group_by) => {
                    root.insert("groupBy".into(), json!({ "$set": group_by }));
                }
                FieldUpdate::Visualization(viz) => {
                    root.insert("visualization".into(), json!({ "$set": viz }));
                }
                FieldUpdate::XLabel(label) => {
                    configuration.insert("xLabel".into(), json!({ "$set": label }));
                }
                FieldUpdate::YLabel(label) => {
                    configuration.insert("yLabel".into(), json!({ "$set": label }));
                }
            }
        }

        if !configuration.is_empty() {
            root.insert("configuration".into(), Value::Object(configuration));
        }
        Value::Object(root)
    }
}

impl Serialize for ReportPatch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_set_document().serialize(serializer)
    }
}

/// Apply `patch` to a copy of `data`.
pub fn apply_patch(data: &ReportData, patch: &ReportPatch) -> ReportData {
    let mut next = data.clone();
    for update in patch.updates() {
        match update {
            FieldUpdate::View(view) => next.view = view.clone(),
            FieldUpdate::GroupBy(group_by) => next.group_by = group_by.clone(),
            FieldUpdate::Visualization(viz) => next.visualization = *viz,
            FieldUpdate::XLabel(label) => next.configuration.x_label = label.clone(),
            FieldUpdate::YLabel(label) => next.configuration.y_label = label.clone(),
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use reportcfg_types::Measure;

    #[test]
    fn test_set_document_nests_labels() {
        let patch = ReportPatch::new()
            .with(FieldUpdate::GroupBy(Some(GroupBy::FlowNodes)))
            .with(FieldUpdate::Visualization(None))
            .with(FieldUpdate::XLabel("Flow Nodes".to_string()));

        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            json!({
                "groupBy": {"$set": {"type": "flowNodes", "value": null}},
                "visualization": {"$set": null},
                "configuration": {"xLabel": {"$set": "Flow Nodes"}}
            })
        );
    }

    #[test]
    fn test_apply_patch_leaves_input_untouched() {
        let data = ReportData {
            view: Some(View::ProcessInstance(Measure::Frequency)),
            visualization: Some(Visualization::Heat),
            ..Default::default()
        };
        let patch = ReportPatch::new()
            .with(FieldUpdate::Visualization(Some(Visualization::Number)))
            .with(FieldUpdate::YLabel("Process Instance Count".to_string()));

        let next = apply_patch(&data, &patch);

        assert_eq!(data.visualization, Some(Visualization::Heat));
        assert_eq!(next.visualization, Some(Visualization::Number));
        assert_eq!(next.configuration.y_label, "Process Instance Count");
        assert_eq!(next.view, data.view);
    }

    #[test]
    fn test_accessors_distinguish_reset_from_untouched() {
        let patch = ReportPatch::new().with(FieldUpdate::GroupBy(None));

        assert_eq!(patch.group_by(), Some(None));
        assert_eq!(patch.visualization(), None);
        assert_eq!(patch.x_label(), None);
    }

    #[test]
    fn test_empty_patch() {
        let patch = ReportPatch::new();
        assert!(patch.is_empty());
        assert_eq!(patch.to_set_document(), json!({}));
    }
}
