use anyhow::Result;
use reportcfg_engine::{
    AvailableOption, Catalog, CatalogEntry, CatalogValue, ReportConfig, ReportPatch, StageCheck,
};
use reportcfg_types::{Dimension, Report, ReportData, Selection};
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

use crate::presentation::view_models::{
    CatalogDimensionViewModel, CatalogViewModel, CheckViewModel, CommandResultViewModel,
    Guidance, LabelViewModel, OptionViewModel, OptionsViewModel, StageViewModel, StatusBadge,
    UpdateViewModel,
};

fn listed<T>(catalog: &Catalog<T>) -> Result<Vec<OptionViewModel>>
where
    T: CatalogValue + Serialize,
{
    catalog
        .list()
        .into_iter()
        .map(|option| {
            Ok(OptionViewModel {
                key: option.key.to_string(),
                data: serde_json::to_value(option.data)?,
                label: option.label,
                allowed: None,
            })
        })
        .collect()
}

fn has_empty_variable_group<T: CatalogValue>(catalog: &Catalog<T>) -> bool {
    catalog.entries().iter().any(|entry| {
        matches!(entry, CatalogEntry::Group(group) if group.variables.is_some() && group.options.is_empty())
    })
}

fn variables_tip() -> Guidance {
    Guidance::new("Variable groups are empty; list known variables in the config file")
        .with_command("reportcfg init")
}

pub fn present_catalog(
    config: &ReportConfig,
    dimensions: &[Dimension],
) -> Result<CommandResultViewModel<CatalogViewModel>> {
    let options = config.options();
    let mut empty_variables = false;

    let dimensions = dimensions
        .iter()
        .map(|&dimension| {
            let listed_options = match dimension {
                Dimension::View => {
                    empty_variables |= has_empty_variable_group(&options.view);
                    listed(&options.view)?
                }
                Dimension::GroupBy => {
                    empty_variables |= has_empty_variable_group(&options.group_by);
                    listed(&options.group_by)?
                }
                Dimension::Visualization => listed(&options.visualization)?,
            };
            Ok(CatalogDimensionViewModel {
                dimension: dimension.to_string(),
                options: listed_options,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let result = CommandResultViewModel::new(CatalogViewModel {
        subject: config.subject().to_string(),
        dimensions,
    });

    if empty_variables {
        Ok(result.with_suggestion(variables_tip()))
    } else {
        Ok(result)
    }
}

pub fn present_options(
    config: &ReportConfig,
    dimension: Dimension,
    options: Vec<AvailableOption>,
) -> CommandResultViewModel<OptionsViewModel> {
    let undecided = options.iter().all(|option| option.allowed.is_none());
    let options = options
        .into_iter()
        .map(|option| OptionViewModel {
            key: option.key,
            label: option.label,
            data: option.data,
            allowed: option.allowed,
        })
        .collect();

    let result = CommandResultViewModel::new(OptionsViewModel {
        subject: config.subject().to_string(),
        dimension: dimension.to_string(),
        options,
    });

    if undecided {
        result.with_suggestion(Guidance::new(
            "Nothing can be flagged until the earlier dimensions are selected",
        ))
    } else {
        result
    }
}

pub fn present_check(
    config: &ReportConfig,
    data: &ReportData,
    check: StageCheck,
) -> Result<CommandResultViewModel<CheckViewModel>> {
    let view = data.view.clone().map(Selection::View);
    let group_by = data.group_by.clone().map(Selection::GroupBy);
    let visualization = data.visualization.map(Selection::Visualization);

    let stages = [
        (Dimension::View, view, check.view),
        (Dimension::GroupBy, group_by, check.group_by),
        (Dimension::Visualization, visualization, check.visualization),
    ]
    .into_iter()
    .map(|(dimension, selection, passed)| {
        Ok(StageViewModel {
            dimension: dimension.to_string(),
            value: selection.as_ref().map(selection_value).transpose()?,
            label: selection.as_ref().map(|s| config.label_for(s)),
            passed,
        })
    })
    .collect::<Result<Vec<_>>>()?;

    let allowed = check.allowed();
    let badge = if allowed {
        StatusBadge::success("Combination allowed")
    } else {
        StatusBadge::error("Combination not allowed")
    };

    let result = CommandResultViewModel::new(CheckViewModel {
        subject: config.subject().to_string(),
        allowed,
        stages,
    })
    .with_badge(badge);

    if allowed {
        Ok(result)
    } else {
        Ok(result.with_suggestion(
            Guidance::new("List the options the current selection allows")
                .with_command("reportcfg options <REPORT> --dimension visualization"),
        ))
    }
}

fn selection_value(selection: &Selection) -> serde_json::Result<Value> {
    match selection {
        Selection::View(view) => serde_json::to_value(view),
        Selection::GroupBy(group_by) => serde_json::to_value(group_by),
        Selection::Visualization(viz) => serde_json::to_value(viz),
    }
}

pub fn present_update(
    config: &ReportConfig,
    dimension: Dimension,
    patch: &ReportPatch,
    applied: Option<&Report>,
    written_to: Option<&Path>,
) -> Result<CommandResultViewModel<UpdateViewModel>> {
    let report = applied.map(serde_json::to_value).transpose()?;

    Ok(CommandResultViewModel::new(UpdateViewModel {
        subject: config.subject().to_string(),
        dimension: dimension.to_string(),
        patch: serde_json::to_value(patch)?,
        report,
        written_to: written_to.map(|path| path.display().to_string()),
    }))
}

pub fn present_label(
    config: &ReportConfig,
    selection: &Selection,
) -> CommandResultViewModel<LabelViewModel> {
    let label = config.label_for(selection);
    let unknown = label.is_empty();

    let result = CommandResultViewModel::new(LabelViewModel {
        subject: config.subject().to_string(),
        dimension: selection.dimension().to_string(),
        label,
    });

    if unknown {
        result.with_badge(StatusBadge::warning(format!(
            "No {} option matches this value",
            config.subject()
        )))
    } else {
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reportcfg_engine::{check_stages, report_config};
    use reportcfg_types::ReportSubject;
    use serde_json::json;

    #[test]
    fn test_check_stage_values_keep_wire_shape() {
        let raw_view = json!({"entity": "incident", "property": "frequency"});
        let data: ReportData = serde_json::from_value(json!({
            "view": raw_view.clone(),
            "groupBy": {"type": "none", "value": null}
        }))
        .unwrap();
        let config = report_config(ReportSubject::Process);

        let result = present_check(config, &data, check_stages(&data)).unwrap();
        let stages = &result.content.stages;

        assert_eq!(stages[0].value, Some(raw_view));
        assert_eq!(stages[0].label.as_deref(), Some(""));
        assert_eq!(stages[1].passed, Some(false));
        assert_eq!(stages[2].value, None);
        assert!(result.is_error());
    }

    #[test]
    fn test_catalog_lists_option_data() {
        let config = report_config(ReportSubject::Process);
        let result = present_catalog(config, &[Dimension::Visualization]).unwrap();

        let options = &result.content.dimensions[0].options;
        assert_eq!(options[0].data, json!("number"));
        assert!(result.suggestions.is_empty());
    }
}
