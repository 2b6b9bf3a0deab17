use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::group_by::GroupBy;
use crate::view::View;
use crate::visualization::Visualization;
use crate::{Error, Result};

/// One of the three report dimensions a user can change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    View,
    GroupBy,
    Visualization,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [Dimension::View, Dimension::GroupBy, Dimension::Visualization];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::View => "view",
            Dimension::GroupBy => "groupBy",
            Dimension::Visualization => "visualization",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "view" => Ok(Dimension::View),
            "groupBy" | "group-by" => Ok(Dimension::GroupBy),
            "visualization" => Ok(Dimension::Visualization),
            other => Err(Error::unknown("dimension", other)),
        }
    }
}

/// A new value for exactly one dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    View(View),
    GroupBy(GroupBy),
    Visualization(Visualization),
}

impl Selection {
    /// Decode a backend-shaped JSON value for the given dimension.
    pub fn from_json(dimension: Dimension, value: Value) -> Result<Self> {
        let selection = match dimension {
            Dimension::View => Selection::View(serde_json::from_value(value)?),
            Dimension::GroupBy => Selection::GroupBy(serde_json::from_value(value)?),
            Dimension::Visualization => Selection::Visualization(serde_json::from_value(value)?),
        };
        Ok(selection)
    }

    pub fn dimension(&self) -> Dimension {
        match self {
            Selection::View(_) => Dimension::View,
            Selection::GroupBy(_) => Dimension::GroupBy,
            Selection::Visualization(_) => Dimension::Visualization,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::View(view) => write!(f, "view={}", view),
            Selection::GroupBy(group_by) => write!(f, "groupBy={}", group_by),
            Selection::Visualization(viz) => write!(f, "visualization={}", viz),
        }
    }
}
