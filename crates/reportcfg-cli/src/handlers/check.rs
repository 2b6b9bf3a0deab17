use anyhow::Result;
use reportcfg_engine::check_stages;
use tracing::info;

use super::HandlerContext;
use crate::presentation::presenters;
use crate::report_io::read_report;

/// Render the per-stage verdict; fails when the combination is not allowed
/// so the exit status can drive scripts.
pub fn handle(ctx: &HandlerContext, report: &str) -> Result<()> {
    let report = read_report(report)?;
    let config = ctx.report_config(report.report_type);

    let check = check_stages(&report.data);
    info!(allowed = check.allowed(), "checked report");

    let view_model = presenters::present_check(&config, &report.data, check)?;
    ctx.render(&view_model)?;

    if view_model.is_error() {
        anyhow::bail!("report combination is not allowed");
    }
    Ok(())
}
