use super::args::{Cli, Commands};
use super::handlers::{self, HandlerContext};
use crate::config::{Config, resolve_config_path};
use crate::logging;
use crate::types::OutputFormat;
use anyhow::Result;
use std::path::Path;
use tracing::debug;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let config_path = resolve_config_path(cli.config.as_deref())?;
    debug!(path = %config_path.display(), "resolved config path");

    let format = cli.format;

    match cli.command {
        // Skips loading so a broken file can be replaced with --force.
        Commands::Init { force } => {
            let ctx = HandlerContext::new(format.unwrap_or_default(), Config::default());
            handlers::init::handle(&ctx, &config_path, force)
        }

        Commands::Catalog { subject, dimension } => {
            let ctx = load_context(&config_path, format)?;
            handlers::catalog::handle(&ctx, subject, dimension)
        }

        Commands::Options { report, dimension } => {
            let ctx = load_context(&config_path, format)?;
            handlers::options::handle(&ctx, &report, dimension)
        }

        Commands::Check { report } => {
            let ctx = load_context(&config_path, format)?;
            handlers::check::handle(&ctx, &report)
        }

        Commands::Update {
            report,
            dimension,
            value,
            apply,
            output,
        } => {
            let ctx = load_context(&config_path, format)?;
            handlers::update::handle(
                &ctx,
                handlers::update::UpdateRequest {
                    report: &report,
                    dimension,
                    value: &value,
                    apply,
                    output,
                },
            )
        }

        Commands::Label {
            subject,
            dimension,
            value,
        } => {
            let ctx = load_context(&config_path, format)?;
            handlers::label::handle(&ctx, subject, dimension, &value)
        }

        Commands::Ticks { values } => {
            let ctx = load_context(&config_path, format)?;
            handlers::ticks::handle(&ctx, &values)
        }
    }
}

fn load_context(config_path: &Path, format: Option<OutputFormat>) -> Result<HandlerContext> {
    let config = Config::load_from(config_path)?;
    let format = format.unwrap_or(config.format);
    Ok(HandlerContext::new(format, config))
}
