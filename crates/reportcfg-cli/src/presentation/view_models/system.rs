use serde::Serialize;
use std::fmt;

use super::result::{CreateView, ViewStyle};
use crate::presentation::views::system::{InitView, TicksView};

#[derive(Debug, Serialize)]
pub struct TickStepViewModel {
    pub step_size: u64,
    pub unit: String,
    pub base: u64,
    pub ticks: Vec<f64>,
    pub labels: Vec<String>,
}

/// Duration axis step for a set of millisecond values.
#[derive(Debug, Serialize)]
pub struct TicksViewModel {
    pub max: Option<f64>,
    pub step: Option<TickStepViewModel>,
}

#[derive(Debug, Serialize)]
pub struct InitViewModel {
    pub config_path: String,
    pub written: bool,
}

impl CreateView for TicksViewModel {
    fn create_view<'a>(&'a self, style: ViewStyle) -> Box<dyn fmt::Display + 'a> {
        Box::new(TicksView::new(self, style))
    }
}

impl CreateView for InitViewModel {
    fn create_view<'a>(&'a self, _style: ViewStyle) -> Box<dyn fmt::Display + 'a> {
        Box::new(InitView::new(self))
    }
}
