use anyhow::{Context, Result};
use reportcfg_types::{Dimension, Selection};

use super::HandlerContext;
use crate::presentation::presenters;
use crate::report_io::parse_value;
use crate::types::{DimensionArg, SubjectArg};

pub fn handle(
    ctx: &HandlerContext,
    subject: Option<SubjectArg>,
    dimension: DimensionArg,
    value: &str,
) -> Result<()> {
    let dimension = Dimension::from(dimension);
    let selection = Selection::from_json(dimension, parse_value(value))
        .with_context(|| format!("Invalid {} value", dimension))?;
    let config = ctx.report_config(ctx.subject(subject));

    let view_model = presenters::present_label(&config, &selection);
    ctx.render(&view_model)
}
