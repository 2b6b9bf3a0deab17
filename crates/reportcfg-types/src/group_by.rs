use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::fmt;

use crate::Error;
use crate::view::VariableRef;

/// Bucket size for date groupings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DateUnit {
    Automatic,
    Year,
    Month,
    Week,
    Day,
    Hour,
}

impl DateUnit {
    /// Catalog order
    pub const ALL: [DateUnit; 6] = [
        DateUnit::Automatic,
        DateUnit::Year,
        DateUnit::Month,
        DateUnit::Week,
        DateUnit::Day,
        DateUnit::Hour,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DateUnit::Automatic => "automatic",
            DateUnit::Year => "year",
            DateUnit::Month => "month",
            DateUnit::Week => "week",
            DateUnit::Day => "day",
            DateUnit::Hour => "hour",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DateUnit::Automatic => "Automatic",
            DateUnit::Year => "Year",
            DateUnit::Month => "Month",
            DateUnit::Week => "Week",
            DateUnit::Day => "Day",
            DateUnit::Hour => "Hour",
        }
    }
}

/// Decision input/output column reference (`{id, name}`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecisionVariableRef {
    pub id: String,
    pub name: String,
}

impl DecisionVariableRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// How report results are bucketed.
///
/// Serialized as `{"type": ..., "value": ...}` where the value shape
/// depends on the type. Types this crate does not know are kept verbatim
/// in [`GroupBy::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GroupByWire", into = "GroupByWire")]
pub enum GroupBy {
    None,
    FlowNodes,
    UserTasks,
    StartDate(DateUnit),
    EndDate(DateUnit),
    RunningDate(DateUnit),
    Assignee,
    CandidateGroup,
    Variable(VariableRef),
    // Decision reports
    MatchedRule,
    EvaluationDate(DateUnit),
    InputVariable(DecisionVariableRef),
    OutputVariable(DecisionVariableRef),
    Unknown {
        kind: String,
        value: Value,
    },
}

impl GroupBy {
    /// The `type` tag used on the wire.
    pub fn type_name(&self) -> &str {
        match self {
            GroupBy::None => "none",
            GroupBy::FlowNodes => "flowNodes",
            GroupBy::UserTasks => "userTasks",
            GroupBy::StartDate(_) => "startDate",
            GroupBy::EndDate(_) => "endDate",
            GroupBy::RunningDate(_) => "runningDate",
            GroupBy::Assignee => "assignee",
            GroupBy::CandidateGroup => "candidateGroup",
            GroupBy::Variable(_) => "variable",
            GroupBy::MatchedRule => "matchedRule",
            GroupBy::EvaluationDate(_) => "evaluationDateTime",
            GroupBy::InputVariable(_) => "inputVariable",
            GroupBy::OutputVariable(_) => "outputVariable",
            GroupBy::Unknown { kind, .. } => kind.as_str(),
        }
    }

    pub fn date_unit(&self) -> Option<DateUnit> {
        match self {
            GroupBy::StartDate(unit)
            | GroupBy::EndDate(unit)
            | GroupBy::RunningDate(unit)
            | GroupBy::EvaluationDate(unit) => Some(*unit),
            _ => None,
        }
    }

    /// Name of the variable this grouping buckets by, if any.
    pub fn variable_name(&self) -> Option<&str> {
        match self {
            GroupBy::Variable(var) => Some(&var.name),
            GroupBy::InputVariable(var) | GroupBy::OutputVariable(var) => Some(&var.name),
            _ => None,
        }
    }
}

impl fmt::Display for GroupBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.date_unit(), self.variable_name()) {
            (Some(unit), _) => write!(f, "{}:{}", self.type_name(), unit.as_str()),
            (_, Some(name)) => write!(f, "{}:{}", self.type_name(), name),
            _ => write!(f, "{}", self.type_name()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct GroupByWire {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    value: Value,
}

#[derive(Deserialize)]
struct UnitValue {
    unit: DateUnit,
}

impl TryFrom<GroupByWire> for GroupBy {
    type Error = Error;

    fn try_from(wire: GroupByWire) -> Result<Self, Self::Error> {
        let unit = |value: Value| -> Result<DateUnit, Error> {
            Ok(serde_json::from_value::<UnitValue>(value)?.unit)
        };

        let group_by = match wire.kind.as_str() {
            "none" => GroupBy::None,
            "flowNodes" => GroupBy::FlowNodes,
            "userTasks" => GroupBy::UserTasks,
            "startDate" => GroupBy::StartDate(unit(wire.value)?),
            "endDate" => GroupBy::EndDate(unit(wire.value)?),
            "runningDate" => GroupBy::RunningDate(unit(wire.value)?),
            "assignee" => GroupBy::Assignee,
            "candidateGroup" => GroupBy::CandidateGroup,
            "variable" => GroupBy::Variable(serde_json::from_value(wire.value)?),
            "matchedRule" => GroupBy::MatchedRule,
            "evaluationDateTime" => GroupBy::EvaluationDate(unit(wire.value)?),
            "inputVariable" => GroupBy::InputVariable(serde_json::from_value(wire.value)?),
            "outputVariable" => GroupBy::OutputVariable(serde_json::from_value(wire.value)?),
            other => GroupBy::Unknown {
                kind: other.to_string(),
                value: wire.value,
            },
        };
        Ok(group_by)
    }
}

impl From<GroupBy> for GroupByWire {
    fn from(group_by: GroupBy) -> Self {
        let kind = group_by.type_name().to_string();
        let value = match group_by {
            GroupBy::StartDate(unit)
            | GroupBy::EndDate(unit)
            | GroupBy::RunningDate(unit)
            | GroupBy::EvaluationDate(unit) => json!({ "unit": unit.as_str() }),
            GroupBy::Variable(var) => json!({ "name": var.name, "type": var.value_type }),
            GroupBy::InputVariable(var) | GroupBy::OutputVariable(var) => {
                json!({ "id": var.id, "name": var.name })
            }
            GroupBy::Unknown { value, .. } => value,
            GroupBy::None
            | GroupBy::FlowNodes
            | GroupBy::UserTasks
            | GroupBy::Assignee
            | GroupBy::CandidateGroup
            | GroupBy::MatchedRule => Value::Null,
        };
        GroupByWire { kind, value }
    }
}
