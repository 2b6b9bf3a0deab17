use anyhow::Result;
use reportcfg_engine::{ReportConfig, report_config};
use reportcfg_types::ReportSubject;
use serde::Serialize;

use crate::config::Config;
use crate::presentation::{CommandResultViewModel, ConsoleRenderer, CreateView, Renderer};
use crate::types::{OutputFormat, SubjectArg};

/// Settings shared by every handler: output format and the loaded config.
pub struct HandlerContext {
    pub format: OutputFormat,
    pub config: Config,
}

impl HandlerContext {
    pub fn new(format: OutputFormat, config: Config) -> Self {
        Self { format, config }
    }

    pub fn render<T>(&self, view_model: &CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        ConsoleRenderer::new(self.format).render(view_model)
    }

    pub fn subject(&self, explicit: Option<SubjectArg>) -> ReportSubject {
        explicit
            .map(ReportSubject::from)
            .unwrap_or(self.config.default_subject)
    }

    /// Shared configuration for `subject` with the configured variables filled in.
    pub fn report_config(&self, subject: ReportSubject) -> ReportConfig {
        let known = self.config.known_variables();
        if known.is_empty() {
            report_config(subject).clone()
        } else {
            report_config(subject).with_variables(&known)
        }
    }
}
