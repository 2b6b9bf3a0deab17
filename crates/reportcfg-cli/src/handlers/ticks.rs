use anyhow::Result;

use super::HandlerContext;
use crate::presentation::presenters;

pub fn handle(ctx: &HandlerContext, values: &[f64]) -> Result<()> {
    let view_model = presenters::present_ticks(values);
    ctx.render(&view_model)
}
