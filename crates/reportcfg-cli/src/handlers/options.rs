use anyhow::Result;
use reportcfg_types::Dimension;

use super::HandlerContext;
use crate::presentation::presenters;
use crate::report_io::read_report;
use crate::types::DimensionArg;

pub fn handle(ctx: &HandlerContext, report: &str, dimension: DimensionArg) -> Result<()> {
    let report = read_report(report)?;
    let dimension = Dimension::from(dimension);
    let config = ctx.report_config(report.report_type);

    let options = config.list_options(dimension, &report.data)?;
    let view_model = presenters::present_options(&config, dimension, options);
    ctx.render(&view_model)
}
