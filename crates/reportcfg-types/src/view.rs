use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::fmt;

/// What a report measures for its entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Measure {
    Frequency,
    Duration,
}

impl Measure {
    pub fn as_str(&self) -> &'static str {
        match self {
            Measure::Frequency => "frequency",
            Measure::Duration => "duration",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "frequency" => Some(Measure::Frequency),
            "duration" => Some(Measure::Duration),
            _ => None,
        }
    }
}

/// Process variable reference as reported by the backend (`{name, type}`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariableRef {
    pub name: String,
    #[serde(rename = "type")]
    pub value_type: String,
}

impl VariableRef {
    pub fn new(name: impl Into<String>, value_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value_type: value_type.into(),
        }
    }
}

/// The measured subject of a report.
///
/// Serialized as `{"entity": ..., "property": ...}`. Raw data has a null
/// entity; variable views carry the variable reference as their property.
/// Shapes this crate does not know are kept verbatim in [`View::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ViewWire", into = "ViewWire")]
pub enum View {
    RawData,
    ProcessInstance(Measure),
    FlowNode(Measure),
    UserTask(Measure),
    Variable(VariableRef),
    /// Decision reports only
    EvaluationCount,
    Unknown {
        entity: Option<String>,
        property: Value,
    },
}

impl View {
    pub fn entity(&self) -> Option<&str> {
        match self {
            View::RawData => None,
            View::ProcessInstance(_) => Some("processInstance"),
            View::FlowNode(_) => Some("flowNode"),
            View::UserTask(_) => Some("userTask"),
            View::Variable(_) => Some("variable"),
            View::EvaluationCount => Some("evaluationCount"),
            View::Unknown { entity, .. } => entity.as_deref(),
        }
    }

    pub fn measure(&self) -> Option<Measure> {
        match self {
            View::ProcessInstance(m) | View::FlowNode(m) | View::UserTask(m) => Some(*m),
            View::EvaluationCount => Some(Measure::Frequency),
            View::RawData | View::Variable(_) | View::Unknown { .. } => None,
        }
    }

    pub fn is_raw_data(&self) -> bool {
        matches!(self, View::RawData)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::RawData => write!(f, "rawData"),
            View::Variable(var) => write!(f, "variable:{}", var.name),
            View::Unknown { entity, property } => {
                let entity = entity.as_deref().unwrap_or_default();
                match property {
                    Value::String(name) => write!(f, "{}:{}", entity, name),
                    other => write!(f, "{}:{}", entity, other),
                }
            }
            other => write!(
                f,
                "{}:{}",
                other.entity().unwrap_or_default(),
                other.measure().map(|m| m.as_str()).unwrap_or_default()
            ),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ViewWire {
    #[serde(default)]
    entity: Option<String>,
    #[serde(default)]
    property: Value,
}

impl From<ViewWire> for View {
    fn from(wire: ViewWire) -> Self {
        let known = match (wire.entity.as_deref(), &wire.property) {
            (_, Value::String(name)) if name == "rawData" => Some(View::RawData),
            (Some("variable"), Value::Object(_)) => {
                serde_json::from_value(wire.property.clone()).ok().map(View::Variable)
            }
            (Some(entity), Value::String(name)) => {
                Measure::parse(name).and_then(|measure| match entity {
                    "processInstance" => Some(View::ProcessInstance(measure)),
                    "flowNode" => Some(View::FlowNode(measure)),
                    "userTask" => Some(View::UserTask(measure)),
                    "evaluationCount" if measure == Measure::Frequency => {
                        Some(View::EvaluationCount)
                    }
                    _ => None,
                })
            }
            _ => None,
        };

        known.unwrap_or(View::Unknown {
            entity: wire.entity,
            property: wire.property,
        })
    }
}

impl From<View> for ViewWire {
    fn from(view: View) -> Self {
        let entity = view.entity().map(str::to_string);
        let property = match view {
            View::RawData => json!("rawData"),
            View::Variable(var) => json!({ "name": var.name, "type": var.value_type }),
            View::Unknown { property, .. } => property,
            other => json!(other.measure().map(|m| m.as_str()).unwrap_or_default()),
        };
        ViewWire { entity, property }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_process_instance_count() {
        let view: View =
            serde_json::from_value(json!({"entity": "processInstance", "property": "frequency"}))
                .unwrap();
        assert_eq!(view, View::ProcessInstance(Measure::Frequency));
    }

    #[test]
    fn test_parse_raw_data_with_null_entity() {
        let view: View =
            serde_json::from_value(json!({"entity": null, "property": "rawData"})).unwrap();
        assert!(view.is_raw_data());
        assert_eq!(
            serde_json::to_value(&view).unwrap(),
            json!({"entity": null, "property": "rawData"})
        );
    }

    #[test]
    fn test_variable_view_keeps_property_object() {
        let raw = json!({"entity": "variable", "property": {"name": "doubleVar", "type": "Double"}});
        let view: View = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(view, View::Variable(VariableRef::new("doubleVar", "Double")));
        assert_eq!(serde_json::to_value(&view).unwrap(), raw);
    }

    #[test]
    fn test_unknown_entity_is_kept() {
        let raw = json!({"entity": "incident", "property": "frequency"});
        let view: View = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(view.entity(), Some("incident"));
        assert_eq!(view.measure(), None);
        assert_eq!(view.to_string(), "incident:frequency");
        assert_eq!(serde_json::to_value(&view).unwrap(), raw);
    }

    #[test]
    fn test_unknown_property_shape_round_trips() {
        let raw = json!({"entity": "processInstance", "property": {"percentile": 95}});
        let view: View = serde_json::from_value(raw.clone()).unwrap();

        assert!(matches!(view, View::Unknown { .. }));
        assert_eq!(serde_json::to_value(&view).unwrap(), raw);
    }

    #[test]
    fn test_evaluation_count_requires_frequency() {
        let view: View =
            serde_json::from_value(json!({"entity": "evaluationCount", "property": "duration"}))
                .unwrap();
        assert!(matches!(view, View::Unknown { .. }));
    }
}
