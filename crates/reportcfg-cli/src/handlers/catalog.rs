use anyhow::Result;
use reportcfg_types::Dimension;
use tracing::debug;

use super::HandlerContext;
use crate::presentation::presenters;
use crate::types::{DimensionArg, SubjectArg};

pub fn handle(
    ctx: &HandlerContext,
    subject: Option<SubjectArg>,
    dimension: Option<DimensionArg>,
) -> Result<()> {
    let subject = ctx.subject(subject);
    let config = ctx.report_config(subject);

    let dimensions = match dimension {
        Some(dimension) => vec![Dimension::from(dimension)],
        None => Dimension::ALL.to_vec(),
    };
    debug!(%subject, count = dimensions.len(), "listing catalog");

    let view_model = presenters::present_catalog(&config, &dimensions)?;
    ctx.render(&view_model)
}
