use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Rendering mode of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visualization {
    Number,
    Table,
    Bar,
    Line,
    Pie,
    Heat,
}

impl Visualization {
    pub const ALL: [Visualization; 6] = [
        Visualization::Number,
        Visualization::Table,
        Visualization::Bar,
        Visualization::Line,
        Visualization::Pie,
        Visualization::Heat,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Visualization::Number => "number",
            Visualization::Table => "table",
            Visualization::Bar => "bar",
            Visualization::Line => "line",
            Visualization::Pie => "pie",
            Visualization::Heat => "heat",
        }
    }
}

impl fmt::Display for Visualization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Visualization {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Visualization::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| Error::unknown("visualization", s))
    }
}

/// Secondary grouping axis stored in the report configuration.
///
/// Values newer than this crate are kept as [`DistributedBy::Other`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DistributedBy {
    #[default]
    None,
    UserTask,
    FlowNode,
    Assignee,
    CandidateGroup,
    Other(String),
}

impl DistributedBy {
    pub fn as_str(&self) -> &str {
        match self {
            DistributedBy::None => "none",
            DistributedBy::UserTask => "userTask",
            DistributedBy::FlowNode => "flowNode",
            DistributedBy::Assignee => "assignee",
            DistributedBy::CandidateGroup => "candidateGroup",
            DistributedBy::Other(value) => value.as_str(),
        }
    }
}

impl DistributedBy {
    const KNOWN: [DistributedBy; 5] = [
        DistributedBy::None,
        DistributedBy::UserTask,
        DistributedBy::FlowNode,
        DistributedBy::Assignee,
        DistributedBy::CandidateGroup,
    ];
}

impl From<String> for DistributedBy {
    fn from(value: String) -> Self {
        DistributedBy::KNOWN
            .into_iter()
            .find(|known| known.as_str() == value)
            .unwrap_or(DistributedBy::Other(value))
    }
}

impl From<DistributedBy> for String {
    fn from(value: DistributedBy) -> Self {
        match value {
            DistributedBy::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for DistributedBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
