//! Compatibility rules between view, group-by and visualization.
//!
//! Evaluation is incremental: a caller may supply only a view, then a view
//! and a grouping, then all three. A combination is allowed only when every
//! supplied stage passes on its own.

use reportcfg_types::{DistributedBy, GroupBy, Measure, ReportData, View, Visualization};
use serde::Serialize;

/// Whether the (partial) selection is legal.
///
/// `report` is only consulted for its `distributedBy` setting, which can
/// narrow the legal visualizations but never widen them.
pub fn is_allowed(
    report: Option<&ReportData>,
    view: &View,
    group_by: Option<&GroupBy>,
    visualization: Option<Visualization>,
) -> bool {
    let Some(group_by) = group_by else {
        // No grouping chosen yet: only the view itself can constrain the visualization.
        return visualization.is_none_or(|viz| !view.is_raw_data() || viz == Visualization::Table);
    };

    if !group_by_allowed(view, group_by) {
        return false;
    }

    let Some(visualization) = visualization else {
        return true;
    };

    if !visualization_allowed(view, group_by, visualization) {
        return false;
    }

    let distributed_by = report
        .map(ReportData::distributed_by)
        .unwrap_or(&DistributedBy::None);
    !forbidden_by_distribution(distributed_by, group_by, visualization)
}

/// Groupings each view accepts. Unknown views and groupings are never legal.
pub fn group_by_allowed(view: &View, group_by: &GroupBy) -> bool {
    match view {
        View::RawData => matches!(group_by, GroupBy::None),
        View::ProcessInstance(Measure::Frequency) => matches!(
            group_by,
            GroupBy::None
                | GroupBy::StartDate(_)
                | GroupBy::EndDate(_)
                | GroupBy::RunningDate(_)
                | GroupBy::Variable(_)
        ),
        View::ProcessInstance(Measure::Duration) => matches!(
            group_by,
            GroupBy::None | GroupBy::StartDate(_) | GroupBy::EndDate(_) | GroupBy::Variable(_)
        ),
        View::FlowNode(_) => matches!(group_by, GroupBy::FlowNodes),
        View::UserTask(_) => matches!(
            group_by,
            GroupBy::UserTasks | GroupBy::Assignee | GroupBy::CandidateGroup
        ),
        View::Variable(_) => matches!(group_by, GroupBy::None),
        View::EvaluationCount => matches!(
            group_by,
            GroupBy::None
                | GroupBy::MatchedRule
                | GroupBy::EvaluationDate(_)
                | GroupBy::InputVariable(_)
                | GroupBy::OutputVariable(_)
        ),
        View::Unknown { .. } => false,
    }
}

/// Visualizations each (view, grouping) pair accepts, before distribution.
pub fn visualization_allowed(view: &View, group_by: &GroupBy, visualization: Visualization) -> bool {
    use Visualization::{Bar, Heat, Line, Number, Pie, Table};

    if view.is_raw_data() {
        return visualization == Table;
    }

    match group_by {
        GroupBy::None => visualization == Number,
        GroupBy::FlowNodes | GroupBy::UserTasks => {
            matches!(visualization, Table | Bar | Line | Pie | Heat)
        }
        GroupBy::StartDate(_)
        | GroupBy::EndDate(_)
        | GroupBy::RunningDate(_)
        | GroupBy::Assignee
        | GroupBy::CandidateGroup
        | GroupBy::Variable(_)
        | GroupBy::MatchedRule
        | GroupBy::EvaluationDate(_)
        | GroupBy::InputVariable(_)
        | GroupBy::OutputVariable(_) => matches!(visualization, Table | Bar | Line | Pie),
        GroupBy::Unknown { .. } => false,
    }
}

/// Distribution can only narrow. Any dimension other than user tasks or flow
/// nodes, including ones newer than this crate, rules out line, pie and heat
/// for a user task grouping.
fn forbidden_by_distribution(
    distributed_by: &DistributedBy,
    group_by: &GroupBy,
    visualization: Visualization,
) -> bool {
    use Visualization::{Heat, Line, Pie};

    match distributed_by {
        DistributedBy::None => false,
        DistributedBy::UserTask | DistributedBy::FlowNode => matches!(visualization, Line | Pie),
        DistributedBy::Assignee | DistributedBy::CandidateGroup | DistributedBy::Other(_) => {
            matches!(group_by, GroupBy::UserTasks) && matches!(visualization, Line | Pie | Heat)
        }
    }
}

/// Per-stage outcome for a full report, `None` where the stage is unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageCheck {
    pub view: Option<bool>,
    pub group_by: Option<bool>,
    pub visualization: Option<bool>,
}

impl StageCheck {
    /// All set stages pass.
    pub fn allowed(&self) -> bool {
        [self.view, self.group_by, self.visualization]
            .into_iter()
            .flatten()
            .all(|passed| passed)
    }
}

/// Evaluate each stage of the report's current triple.
pub fn check_stages(data: &ReportData) -> StageCheck {
    let Some(view) = data.view.as_ref() else {
        return StageCheck {
            view: None,
            group_by: data.group_by.as_ref().map(|_| false),
            visualization: data.visualization.map(|_| false),
        };
    };

    let group_by = data.group_by.as_ref();
    StageCheck {
        view: Some(is_allowed(Some(data), view, None, None)),
        group_by: group_by.map(|g| is_allowed(Some(data), view, Some(g), None)),
        visualization: data
            .visualization
            .map(|viz| is_allowed(Some(data), view, group_by, Some(viz))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reportcfg_types::{DateUnit, VariableRef};

    fn raw() -> View {
        View::RawData
    }

    fn distributed(by: DistributedBy) -> ReportData {
        let mut data = ReportData::default();
        data.configuration.distributed_by = by;
        data
    }

    #[test]
    fn test_view_alone_is_always_allowed() {
        let views = [
            View::RawData,
            View::ProcessInstance(Measure::Duration),
            View::FlowNode(Measure::Frequency),
            View::UserTask(Measure::Duration),
            View::Variable(VariableRef::new("x", "Long")),
            View::EvaluationCount,
        ];
        for view in &views {
            assert!(is_allowed(None, view, None, None), "{view} should be allowed");
        }
    }

    #[test]
    fn test_raw_data_groupings() {
        assert!(is_allowed(None, &raw(), Some(&GroupBy::None), None));
        assert!(!is_allowed(None, &raw(), Some(&GroupBy::FlowNodes), None));
        for viz in Visualization::ALL {
            assert!(!is_allowed(None, &raw(), Some(&GroupBy::FlowNodes), Some(viz)));
        }
    }

    #[test]
    fn test_running_date_depends_on_measure() {
        let running = GroupBy::RunningDate(DateUnit::Automatic);
        let count = View::ProcessInstance(Measure::Frequency);
        let duration = View::ProcessInstance(Measure::Duration);

        assert!(is_allowed(None, &count, Some(&running), None));
        assert!(!is_allowed(None, &duration, Some(&running), None));
        for viz in Visualization::ALL {
            assert!(!is_allowed(None, &duration, Some(&running), Some(viz)));
        }
    }

    #[test]
    fn test_variable_view_only_ungrouped() {
        let view = View::Variable(VariableRef::new("doubleVar", "Double"));
        assert!(!is_allowed(None, &view, Some(&GroupBy::FlowNodes), None));
        assert!(is_allowed(None, &view, Some(&GroupBy::None), None));
    }

    #[test]
    fn test_visualization_table() {
        let duration = View::ProcessInstance(Measure::Duration);
        let by_day = GroupBy::StartDate(DateUnit::Day);

        assert!(is_allowed(None, &raw(), Some(&GroupBy::None), Some(Visualization::Table)));
        assert!(!is_allowed(None, &raw(), Some(&GroupBy::None), Some(Visualization::Heat)));
        assert!(is_allowed(None, &duration, Some(&by_day), Some(Visualization::Pie)));
        assert!(!is_allowed(None, &duration, Some(&GroupBy::None), Some(Visualization::Pie)));
        assert!(!is_allowed(None, &duration, Some(&by_day), Some(Visualization::Heat)));
    }

    #[test]
    fn test_heat_requires_flow_node_shape() {
        let view = View::FlowNode(Measure::Duration);
        assert!(is_allowed(None, &view, Some(&GroupBy::FlowNodes), Some(Visualization::Heat)));
        assert!(!is_allowed(None, &view, Some(&GroupBy::FlowNodes), Some(Visualization::Number)));
    }

    #[test]
    fn test_user_task_distribution_forbids_line_and_pie() {
        let report = distributed(DistributedBy::UserTask);
        let view = View::UserTask(Measure::Frequency);
        let group_by = GroupBy::Assignee;

        assert!(is_allowed(Some(&report), &view, Some(&group_by), Some(Visualization::Bar)));
        assert!(!is_allowed(Some(&report), &view, Some(&group_by), Some(Visualization::Line)));
        assert!(!is_allowed(Some(&report), &view, Some(&group_by), Some(Visualization::Pie)));
    }

    #[test]
    fn test_assignee_distribution_forbids_heat_for_user_tasks() {
        let report = distributed(DistributedBy::Assignee);
        let view = View::UserTask(Measure::Frequency);
        let group_by = GroupBy::UserTasks;

        assert!(is_allowed(Some(&report), &view, Some(&group_by), Some(Visualization::Table)));
        assert!(is_allowed(Some(&report), &view, Some(&group_by), Some(Visualization::Bar)));
        for viz in [Visualization::Line, Visualization::Pie, Visualization::Heat] {
            assert!(!is_allowed(Some(&report), &view, Some(&group_by), Some(viz)));
        }
    }

    #[test]
    fn test_flow_node_distribution_forbids_line_and_pie() {
        let report = distributed(DistributedBy::FlowNode);
        let view = View::FlowNode(Measure::Frequency);
        let group_by = GroupBy::FlowNodes;

        assert!(is_allowed(Some(&report), &view, Some(&group_by), Some(Visualization::Table)));
        assert!(is_allowed(Some(&report), &view, Some(&group_by), Some(Visualization::Bar)));
        assert!(is_allowed(Some(&report), &view, Some(&group_by), Some(Visualization::Heat)));
        assert!(!is_allowed(Some(&report), &view, Some(&group_by), Some(Visualization::Line)));
        assert!(!is_allowed(Some(&report), &view, Some(&group_by), Some(Visualization::Pie)));
    }

    #[test]
    fn test_candidate_group_distribution_forbids_heat_for_user_tasks() {
        let report = distributed(DistributedBy::CandidateGroup);
        let view = View::UserTask(Measure::Duration);
        let allowed =
            |group_by: &GroupBy, viz| is_allowed(Some(&report), &view, Some(group_by), Some(viz));

        assert!(allowed(&GroupBy::UserTasks, Visualization::Table));
        assert!(allowed(&GroupBy::UserTasks, Visualization::Bar));
        for viz in [Visualization::Line, Visualization::Pie, Visualization::Heat] {
            assert!(!allowed(&GroupBy::UserTasks, viz));
        }
        // Only the user task grouping is narrowed.
        assert!(allowed(&GroupBy::Assignee, Visualization::Line));
    }

    #[test]
    fn test_newer_distribution_narrows_like_other_dimensions() {
        let report = distributed(DistributedBy::Other("variable".to_string()));
        let view = View::UserTask(Measure::Frequency);
        let allowed =
            |viz| is_allowed(Some(&report), &view, Some(&GroupBy::UserTasks), Some(viz));

        assert!(allowed(Visualization::Bar));
        for viz in [Visualization::Line, Visualization::Pie, Visualization::Heat] {
            assert!(!allowed(viz));
        }
    }

    #[test]
    fn test_unknown_values_are_not_allowed() {
        let unknown_view = View::Unknown {
            entity: Some("incident".to_string()),
            property: serde_json::json!("frequency"),
        };
        let unknown_group = GroupBy::Unknown {
            kind: "duration".to_string(),
            value: serde_json::Value::Null,
        };
        let count = View::ProcessInstance(Measure::Frequency);

        assert!(is_allowed(None, &unknown_view, None, None));
        assert!(!is_allowed(None, &unknown_view, Some(&GroupBy::None), None));
        assert!(!is_allowed(None, &count, Some(&unknown_group), None));
        for viz in Visualization::ALL {
            assert!(!visualization_allowed(&count, &unknown_group, viz));
        }
    }

    #[test]
    fn test_distribution_never_widens() {
        let report = distributed(DistributedBy::Assignee);
        let view = View::UserTask(Measure::Frequency);
        assert!(!is_allowed(
            Some(&report),
            &view,
            Some(&GroupBy::UserTasks),
            Some(Visualization::Number)
        ));
    }

    #[test]
    fn test_decision_groupings() {
        let view = View::EvaluationCount;
        assert!(is_allowed(None, &view, Some(&GroupBy::MatchedRule), Some(Visualization::Bar)));
        assert!(!is_allowed(None, &view, Some(&GroupBy::MatchedRule), Some(Visualization::Heat)));
        assert!(!is_allowed(None, &view, Some(&GroupBy::FlowNodes), None));
        assert!(!is_allowed(
            None,
            &View::ProcessInstance(Measure::Frequency),
            Some(&GroupBy::MatchedRule),
            None
        ));
    }

    #[test]
    fn test_visualization_without_grouping() {
        assert!(is_allowed(None, &raw(), None, Some(Visualization::Table)));
        assert!(!is_allowed(None, &raw(), None, Some(Visualization::Bar)));
        assert!(is_allowed(
            None,
            &View::ProcessInstance(Measure::Frequency),
            None,
            Some(Visualization::Bar)
        ));
    }

    #[test]
    fn test_check_stages() {
        let data = ReportData {
            view: Some(View::ProcessInstance(Measure::Frequency)),
            group_by: Some(GroupBy::StartDate(DateUnit::Month)),
            visualization: Some(Visualization::Number),
            ..Default::default()
        };
        let check = check_stages(&data);

        assert_eq!(check.view, Some(true));
        assert_eq!(check.group_by, Some(true));
        assert_eq!(check.visualization, Some(false));
        assert!(!check.allowed());
    }

    #[test]
    fn test_check_stages_without_view() {
        let data = ReportData {
            visualization: Some(Visualization::Table),
            ..Default::default()
        };
        let check = check_stages(&data);
        assert_eq!(check.view, None);
        assert_eq!(check.visualization, Some(false));

        assert!(check_stages(&ReportData::default()).allowed());
    }
}
