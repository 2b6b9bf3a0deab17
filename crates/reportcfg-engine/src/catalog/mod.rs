//! Option catalogs: the ordered, static lists of selectable values per
//! report dimension.
//!
//! A catalog entry is either a single option or a labelled group. Groups
//! hold a fixed option list (e.g. date units) or stand for the variables
//! known at runtime; the latter are expanded with [`Catalog::with_variables`].
//!
//! Lookups compare values, never references, and never fail: an unmatched
//! value yields an empty label or `None`.

pub mod decision;
pub mod process;
mod visualization;

pub use visualization::visualization_catalog;

use reportcfg_types::{DecisionVariableRef, GroupBy, VariableRef, View, Visualization};
use serde::{Deserialize, Serialize};

/// One selectable entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogOption<T> {
    pub key: String,
    pub label: String,
    pub data: T,
}

impl<T> CatalogOption<T> {
    pub fn new(key: impl Into<String>, label: impl Into<String>, data: T) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            data,
        }
    }
}

/// Runtime-provided list a variable group is generated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VariableSource {
    #[serde(rename = "variable")]
    ProcessVariable,
    #[serde(rename = "inputVariable")]
    DecisionInput,
    #[serde(rename = "outputVariable")]
    DecisionOutput,
}

/// Variables known for the report's definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownVariables {
    #[serde(default)]
    pub process: Vec<VariableRef>,
    #[serde(default)]
    pub inputs: Vec<DecisionVariableRef>,
    #[serde(default)]
    pub outputs: Vec<DecisionVariableRef>,
}

impl KnownVariables {
    pub fn is_empty(&self) -> bool {
        self.process.is_empty() && self.inputs.is_empty() && self.outputs.is_empty()
    }
}

/// Labelled group of options.
///
/// Variable groups carry the source they are generated from; their options
/// stay empty until [`Catalog::with_variables`] fills them in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionGroup<T> {
    pub key: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<VariableSource>,
    pub options: Vec<CatalogOption<T>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CatalogEntry<T> {
    Single(CatalogOption<T>),
    Group(OptionGroup<T>),
}

impl<T> CatalogEntry<T> {
    pub fn single(key: &str, label: &str, data: T) -> Self {
        CatalogEntry::Single(CatalogOption::new(key, label, data))
    }

    pub fn group(key: &str, label: &str, options: Vec<CatalogOption<T>>) -> Self {
        CatalogEntry::Group(OptionGroup {
            key: key.to_string(),
            label: label.to_string(),
            variables: None,
            options,
        })
    }

    pub fn variables(key: &str, label: &str, source: VariableSource) -> Self {
        CatalogEntry::Group(OptionGroup {
            key: key.to_string(),
            label: label.to_string(),
            variables: Some(source),
            options: Vec::new(),
        })
    }

    pub fn key(&self) -> &str {
        match self {
            CatalogEntry::Single(option) => &option.key,
            CatalogEntry::Group(group) => &group.key,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CatalogEntry::Single(option) => &option.label,
            CatalogEntry::Group(group) => &group.label,
        }
    }

    /// Concrete options of the entry.
    pub fn options(&self) -> &[CatalogOption<T>] {
        match self {
            CatalogEntry::Single(option) => std::slice::from_ref(option),
            CatalogEntry::Group(group) => &group.options,
        }
    }
}

/// Values that can live in a catalog.
///
/// Variable-shaped values belong to a variable group by their source rather
/// than by an explicit option, so labels can be built for variables the
/// catalog was never expanded with.
pub trait CatalogValue: Clone + PartialEq {
    /// Source and display name when this value is variable-shaped.
    fn variable_member(&self) -> Option<(VariableSource, &str)>;

    /// Options a variable group of `source` offers for the known variables.
    fn variable_options(
        source: VariableSource,
        known: &KnownVariables,
        group_key: &str,
    ) -> Vec<CatalogOption<Self>>;
}

impl CatalogValue for View {
    fn variable_member(&self) -> Option<(VariableSource, &str)> {
        match self {
            View::Variable(var) => Some((VariableSource::ProcessVariable, &var.name)),
            _ => None,
        }
    }

    fn variable_options(
        source: VariableSource,
        known: &KnownVariables,
        group_key: &str,
    ) -> Vec<CatalogOption<Self>> {
        match source {
            VariableSource::ProcessVariable => known
                .process
                .iter()
                .map(|var| {
                    CatalogOption::new(
                        format!("{}_{}", group_key, var.name),
                        var.name.clone(),
                        View::Variable(var.clone()),
                    )
                })
                .collect(),
            VariableSource::DecisionInput | VariableSource::DecisionOutput => Vec::new(),
        }
    }
}

impl CatalogValue for GroupBy {
    fn variable_member(&self) -> Option<(VariableSource, &str)> {
        match self {
            GroupBy::Variable(var) => Some((VariableSource::ProcessVariable, &var.name)),
            GroupBy::InputVariable(var) => Some((VariableSource::DecisionInput, &var.name)),
            GroupBy::OutputVariable(var) => Some((VariableSource::DecisionOutput, &var.name)),
            _ => None,
        }
    }

    fn variable_options(
        source: VariableSource,
        known: &KnownVariables,
        group_key: &str,
    ) -> Vec<CatalogOption<Self>> {
        let decision = |vars: &[DecisionVariableRef],
                        wrap: fn(DecisionVariableRef) -> GroupBy|
         -> Vec<CatalogOption<GroupBy>> {
            vars.iter()
                .map(|var| {
                    CatalogOption::new(
                        format!("{}_{}", group_key, var.id),
                        var.name.clone(),
                        wrap(var.clone()),
                    )
                })
                .collect()
        };

        match source {
            VariableSource::ProcessVariable => known
                .process
                .iter()
                .map(|var| {
                    CatalogOption::new(
                        format!("{}_{}", group_key, var.name),
                        var.name.clone(),
                        GroupBy::Variable(var.clone()),
                    )
                })
                .collect(),
            VariableSource::DecisionInput => decision(&known.inputs, GroupBy::InputVariable),
            VariableSource::DecisionOutput => decision(&known.outputs, GroupBy::OutputVariable),
        }
    }
}

impl CatalogValue for Visualization {
    fn variable_member(&self) -> Option<(VariableSource, &str)> {
        None
    }

    fn variable_options(
        _source: VariableSource,
        _known: &KnownVariables,
        _group_key: &str,
    ) -> Vec<CatalogOption<Self>> {
        Vec::new()
    }
}

/// Which field of an option a lookup compares against.
#[derive(Debug, Clone, Copy)]
pub enum MatchField<'a, T> {
    Key(&'a str),
    Data(&'a T),
}

impl<T: PartialEq> MatchField<'_, T> {
    fn matches(&self, option: &CatalogOption<T>) -> bool {
        match self {
            MatchField::Key(key) => option.key == *key,
            MatchField::Data(data) => option.data == **data,
        }
    }
}

/// A concrete option with its fully composed label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListedOption<'a, T> {
    pub key: &'a str,
    pub label: String,
    pub data: &'a T,
}

/// Ordered catalog for one dimension.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog<T> {
    entries: Vec<CatalogEntry<T>>,
}

impl<T: CatalogValue> Catalog<T> {
    pub fn new(entries: Vec<CatalogEntry<T>>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry<T>] {
        &self.entries
    }

    /// Human-readable label for `value`, empty when no entry matches.
    ///
    /// Grouped values are labelled `"<group>: <option>"`.
    pub fn label_for(&self, value: &T) -> String {
        for entry in &self.entries {
            match entry {
                CatalogEntry::Single(option) if option.data == *value => {
                    return option.label.clone();
                }
                CatalogEntry::Single(_) => {}
                CatalogEntry::Group(group) => {
                    if let Some(suffix) = group_suffix(group, value) {
                        return format!("{}: {}", group.label, suffix);
                    }
                }
            }
        }
        String::new()
    }

    /// Label of the top-level entry `value` belongs to.
    pub fn group_label_for(&self, value: &T) -> Option<&str> {
        self.entries.iter().find_map(|entry| match entry {
            CatalogEntry::Single(option) => (option.data == *value).then_some(option.label.as_str()),
            CatalogEntry::Group(group) => {
                group_suffix(group, value).map(|_| group.label.as_str())
            }
        })
    }

    /// First concrete option matching the given field.
    pub fn find_selected_option(&self, field: MatchField<'_, T>) -> Option<&CatalogOption<T>> {
        self.entries
            .iter()
            .flat_map(|entry| entry.options())
            .find(|option| field.matches(option))
    }

    /// All concrete values in catalog order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries
            .iter()
            .flat_map(|entry| entry.options())
            .map(|option| &option.data)
    }

    /// Concrete options flattened with composed labels.
    pub fn list(&self) -> Vec<ListedOption<'_, T>> {
        self.entries
            .iter()
            .flat_map(|entry| {
                let grouped = matches!(entry, CatalogEntry::Group(_));
                entry.options().iter().map(move |option| ListedOption {
                    key: &option.key,
                    label: if grouped {
                        format!("{}: {}", entry.label(), option.label)
                    } else {
                        option.label.clone()
                    },
                    data: &option.data,
                })
            })
            .collect()
    }

    /// Copy of the catalog with variable groups replaced by concrete options.
    pub fn with_variables(&self, known: &KnownVariables) -> Self {
        let entries = self
            .entries
            .iter()
            .map(|entry| match entry {
                CatalogEntry::Group(group) if group.variables.is_some() => {
                    let mut group = group.clone();
                    if let Some(source) = group.variables {
                        group.options = T::variable_options(source, known, &group.key);
                    }
                    CatalogEntry::Group(group)
                }
                other => other.clone(),
            })
            .collect();
        Self { entries }
    }
}

fn group_suffix<'a, T: CatalogValue>(group: &'a OptionGroup<T>, value: &'a T) -> Option<&'a str> {
    if let (Some(group_source), Some((source, name))) = (group.variables, value.variable_member())
        && group_source == source
    {
        return Some(name);
    }

    group
        .options
        .iter()
        .find(|option| option.data == *value)
        .map(|option| option.label.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reportcfg_types::{DateUnit, Measure};

    fn sample() -> Catalog<GroupBy> {
        Catalog::new(vec![
            CatalogEntry::single("none", "None", GroupBy::None),
            CatalogEntry::group(
                "startDate",
                "Start Date",
                vec![
                    CatalogOption::new("startDate_year", "Year", GroupBy::StartDate(DateUnit::Year)),
                    CatalogOption::new("startDate_day", "Day", GroupBy::StartDate(DateUnit::Day)),
                ],
            ),
            CatalogEntry::variables("variable", "Variable", VariableSource::ProcessVariable),
        ])
    }

    #[test]
    fn test_label_for_single_and_grouped() {
        let catalog = sample();
        assert_eq!(catalog.label_for(&GroupBy::None), "None");
        assert_eq!(
            catalog.label_for(&GroupBy::StartDate(DateUnit::Day)),
            "Start Date: Day"
        );
    }

    #[test]
    fn test_label_for_unknown_is_empty() {
        let catalog = sample();
        assert_eq!(catalog.label_for(&GroupBy::FlowNodes), "");
        assert_eq!(catalog.group_label_for(&GroupBy::FlowNodes), None);
    }

    #[test]
    fn test_variable_label_without_expansion() {
        let catalog = sample();
        let value = GroupBy::Variable(VariableRef::new("aName", "String"));
        assert_eq!(catalog.label_for(&value), "Variable: aName");
        assert_eq!(catalog.group_label_for(&value), Some("Variable"));
    }

    #[test]
    fn test_with_variables_expands_group() {
        let known = KnownVariables {
            process: vec![VariableRef::new("amount", "Double")],
            ..Default::default()
        };
        let catalog = sample().with_variables(&known);

        let option = catalog
            .find_selected_option(MatchField::Key("variable_amount"))
            .unwrap();
        assert_eq!(option.data, GroupBy::Variable(VariableRef::new("amount", "Double")));
        assert_eq!(catalog.label_for(&option.data), "Variable: amount");
        assert_eq!(catalog.values().count(), 4);
    }

    #[test]
    fn test_find_selected_option_by_data() {
        let catalog = sample();
        let option = catalog
            .find_selected_option(MatchField::Data(&GroupBy::StartDate(DateUnit::Year)))
            .unwrap();
        assert_eq!(option.key, "startDate_year");
        assert!(
            catalog
                .find_selected_option(MatchField::Key("endDate_year"))
                .is_none()
        );
    }

    #[test]
    fn test_list_composes_labels() {
        let labels: Vec<String> = sample().list().into_iter().map(|o| o.label).collect();
        assert_eq!(labels, vec!["None", "Start Date: Year", "Start Date: Day"]);
    }

    #[test]
    fn test_view_variables_ignore_decision_sources() {
        let known = KnownVariables {
            inputs: vec![DecisionVariableRef::new("in1", "Amount")],
            ..Default::default()
        };
        let options = View::variable_options(VariableSource::DecisionInput, &known, "variable");
        assert!(options.is_empty());
        assert_eq!(
            View::ProcessInstance(Measure::Frequency).variable_member(),
            None
        );
    }
}
