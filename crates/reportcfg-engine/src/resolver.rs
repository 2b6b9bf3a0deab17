//! Selection resolver: keeps the (view, groupBy, visualization) triple
//! consistent when one dimension changes.
//!
//! The resolver never guesses. A dependent field that stops being legal is
//! reset to `None`, except when exactly one visualization remains legal for
//! a new grouping; that one is selected.

use reportcfg_types::{GroupBy, ReportData, Selection, View, Visualization};
use tracing::{debug, trace};

use crate::patch::{FieldUpdate, ReportPatch};
use crate::report_config::ReportConfig;
use crate::rules;

impl ReportConfig {
    /// Patch that sets `selection` and restores the compatibility invariant.
    pub fn update(&self, selection: Selection, data: &ReportData) -> ReportPatch {
        let dimension = selection.dimension();
        let mut patch = ReportPatch::new();

        match selection {
            Selection::Visualization(viz) => {
                patch.push(FieldUpdate::Visualization(Some(viz)));
            }
            Selection::View(view) => self.update_view(view, data, &mut patch),
            Selection::GroupBy(group_by) => self.update_group_by(group_by, data, &mut patch),
        }

        debug!(
            subject = %self.subject(),
            %dimension,
            updates = patch.updates().len(),
            "resolved report patch"
        );
        patch
    }

    fn update_view(&self, view: View, data: &ReportData, patch: &mut ReportPatch) {
        patch.push(FieldUpdate::View(Some(view.clone())));
        let mut group_by = data.group_by.as_ref();

        if let Some(current) = group_by
            && !rules::is_allowed(Some(data), &view, Some(current), None)
        {
            trace!(group_by = %current, "grouping no longer allowed, resetting");
            patch.push(FieldUpdate::GroupBy(None));
            if data.visualization.is_some() {
                patch.push(FieldUpdate::Visualization(None));
            }
            group_by = None;
        } else if let Some(viz) = data.visualization
            && !rules::is_allowed(Some(data), &view, group_by, Some(viz))
        {
            trace!(visualization = %viz, "visualization no longer allowed, resetting");
            patch.push(FieldUpdate::Visualization(None));
        }

        if let Some(group_by) = group_by {
            patch.push(FieldUpdate::XLabel(self.x_label_for(group_by)));
            patch.push(FieldUpdate::YLabel(self.y_label_for(&view)));
        }
    }

    fn update_group_by(&self, group_by: GroupBy, data: &ReportData, patch: &mut ReportPatch) {
        patch.push(FieldUpdate::GroupBy(Some(group_by.clone())));

        if let Some(view) = data.view.as_ref() {
            let current = data.visualization;
            let still_allowed = current
                .is_some_and(|viz| rules::is_allowed(Some(data), view, Some(&group_by), Some(viz)));

            if !still_allowed {
                match self.resolve_visualization(data, view, &group_by, current) {
                    Some(resolved) => patch.push(FieldUpdate::Visualization(resolved)),
                    None => trace!("no visualization to resolve"),
                }
            }
        }

        patch.push(FieldUpdate::XLabel(self.x_label_for(&group_by)));
    }

    /// `Some(Some(viz))` auto-selects, `Some(None)` resets, `None` leaves it.
    fn resolve_visualization(
        &self,
        data: &ReportData,
        view: &View,
        group_by: &GroupBy,
        current: Option<Visualization>,
    ) -> Option<Option<Visualization>> {
        let allowed = self.allowed_visualizations(Some(data), view, group_by);
        match allowed.as_slice() {
            [only] => {
                trace!(visualization = %only, "single visualization left, selecting it");
                Some(Some(*only))
            }
            _ if current.is_some() => Some(None),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report_config::report_config;
    use reportcfg_types::{DateUnit, Measure, ReportSubject};

    fn config() -> &'static ReportConfig {
        report_config(ReportSubject::Process)
    }

    #[test]
    fn test_visualization_change_has_no_side_effects() {
        let data = ReportData {
            view: Some(View::RawData),
            group_by: Some(GroupBy::None),
            visualization: Some(Visualization::Table),
            ..Default::default()
        };
        let patch = config().update(Selection::Visualization(Visualization::Pie), &data);

        assert_eq!(
            patch.updates(),
            &[FieldUpdate::Visualization(Some(Visualization::Pie))]
        );
    }

    #[test]
    fn test_group_by_without_view_only_sets_label() {
        let patch = config().update(
            Selection::GroupBy(GroupBy::EndDate(DateUnit::Year)),
            &ReportData::default(),
        );

        assert_eq!(patch.visualization(), None);
        assert_eq!(patch.x_label(), Some("End Date"));
    }

    #[test]
    fn test_group_by_keeps_unset_visualization_when_ambiguous() {
        let data = ReportData {
            view: Some(View::ProcessInstance(Measure::Frequency)),
            ..Default::default()
        };
        let patch = config().update(Selection::GroupBy(GroupBy::StartDate(DateUnit::Day)), &data);
        assert_eq!(patch.visualization(), None);
    }

    #[test]
    fn test_group_by_auto_selects_when_unset() {
        let data = ReportData {
            view: Some(View::ProcessInstance(Measure::Duration)),
            ..Default::default()
        };
        let patch = config().update(Selection::GroupBy(GroupBy::None), &data);
        assert_eq!(patch.visualization(), Some(Some(Visualization::Number)));
    }

    #[test]
    fn test_view_change_resets_visualization_only() {
        let data = ReportData {
            view: Some(View::ProcessInstance(Measure::Frequency)),
            group_by: Some(GroupBy::None),
            visualization: Some(Visualization::Number),
            ..Default::default()
        };
        let patch = config().update(Selection::View(View::RawData), &data);

        assert_eq!(patch.group_by(), None);
        assert_eq!(patch.visualization(), Some(None));
        assert_eq!(patch.x_label(), Some("None"));
        assert_eq!(patch.y_label(), Some("Raw Data"));
    }
}
