use anyhow::Result;
use std::path::Path;
use tracing::info;

use super::HandlerContext;
use crate::config::Config;
use crate::presentation::presenters;

pub fn handle(ctx: &HandlerContext, config_path: &Path, force: bool) -> Result<()> {
    let written = if config_path.exists() && !force {
        false
    } else {
        Config::default().save_to(config_path)?;
        info!(path = %config_path.display(), "config written");
        true
    };

    let view_model = presenters::present_init(config_path, written);
    ctx.render(&view_model)
}
