//! Fixtures for report data.
//!
//! Short constructors for the views and groupings tests use most, plus a
//! builder for whole reports.

use reportcfg_types::{
    DateUnit, DistributedBy, GroupBy, Measure, Report, ReportData, ReportSubject, VariableRef,
    View, Visualization,
};

pub fn count_process_instances() -> View {
    View::ProcessInstance(Measure::Frequency)
}

pub fn process_instance_duration() -> View {
    View::ProcessInstance(Measure::Duration)
}

pub fn user_task_count() -> View {
    View::UserTask(Measure::Frequency)
}

pub fn start_date(unit: DateUnit) -> GroupBy {
    GroupBy::StartDate(unit)
}

pub fn variable(name: &str, value_type: &str) -> VariableRef {
    VariableRef::new(name, value_type)
}

/// Fluent builder for [`Report`] values.
///
/// # Example
/// ```
/// use reportcfg_testing::{ReportBuilder, fixtures};
/// use reportcfg_types::Visualization;
///
/// let report = ReportBuilder::process()
///     .view(fixtures::count_process_instances())
///     .visualization(Visualization::Bar)
///     .build();
/// assert!(report.data.group_by.is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReportBuilder {
    report: Report,
}

impl ReportBuilder {
    pub fn process() -> Self {
        Self::default()
    }

    pub fn decision() -> Self {
        let mut builder = Self::default();
        builder.report.report_type = ReportSubject::Decision;
        builder
    }

    pub fn view(mut self, view: View) -> Self {
        self.report.data.view = Some(view);
        self
    }

    pub fn group_by(mut self, group_by: GroupBy) -> Self {
        self.report.data.group_by = Some(group_by);
        self
    }

    pub fn visualization(mut self, visualization: Visualization) -> Self {
        self.report.data.visualization = Some(visualization);
        self
    }

    pub fn distributed_by(mut self, distributed_by: DistributedBy) -> Self {
        self.report.data.configuration.distributed_by = distributed_by;
        self
    }

    pub fn labels(mut self, x_label: &str, y_label: &str) -> Self {
        self.report.data.configuration.x_label = x_label.to_string();
        self.report.data.configuration.y_label = y_label.to_string();
        self
    }

    pub fn build(self) -> Report {
        self.report
    }

    pub fn data(self) -> ReportData {
        self.report.data
    }

    /// The report as pretty JSON, ready to be written to a file.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self.report).unwrap_or_default()
    }
}
