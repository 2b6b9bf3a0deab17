use anyhow::{Context, Result};
use reportcfg_engine::apply_patch;
use reportcfg_types::{Dimension, Selection};
use std::path::PathBuf;
use tracing::info;

use super::HandlerContext;
use crate::presentation::presenters;
use crate::report_io::{parse_value, read_report, write_report};
use crate::types::DimensionArg;

pub struct UpdateRequest<'a> {
    pub report: &'a str,
    pub dimension: DimensionArg,
    pub value: &'a str,
    pub apply: bool,
    pub output: Option<PathBuf>,
}

pub fn handle(ctx: &HandlerContext, request: UpdateRequest<'_>) -> Result<()> {
    let mut report = read_report(request.report)?;
    let dimension = Dimension::from(request.dimension);
    let selection = Selection::from_json(dimension, parse_value(request.value))
        .with_context(|| format!("Invalid {} value", dimension))?;

    let config = ctx.report_config(report.report_type);
    let patch = config.update(selection, &report.data);

    let apply = request.apply || request.output.is_some();
    if apply {
        report.data = apply_patch(&report.data, &patch);
    }
    if let Some(path) = &request.output {
        write_report(path, &report)?;
        info!(path = %path.display(), "patched report written");
    }

    let view_model = presenters::present_update(
        &config,
        dimension,
        &patch,
        apply.then_some(&report),
        request.output.as_deref(),
    )?;
    ctx.render(&view_model)
}
