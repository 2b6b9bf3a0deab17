use std::fmt;

use super::heading;
use crate::presentation::view_models::{InitViewModel, TicksViewModel, ViewStyle};

pub struct TicksView<'a> {
    data: &'a TicksViewModel,
    style: ViewStyle,
}

impl<'a> TicksView<'a> {
    pub fn new(data: &'a TicksViewModel, style: ViewStyle) -> Self {
        Self { data, style }
    }
}

impl fmt::Display for TicksView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Some(step) = &self.data.step else {
            return writeln!(f, "No duration step fits these values; use default ticks.");
        };

        writeln!(
            f,
            "{} {}{} ({} ms)",
            heading("step:", self.style),
            step.step_size as f64 / step.base as f64,
            step.unit,
            step.step_size
        )?;
        writeln!(f, "{} {}", heading("ticks:", self.style), step.labels.join(", "))
    }
}

pub struct InitView<'a> {
    data: &'a InitViewModel,
}

impl<'a> InitView<'a> {
    pub fn new(data: &'a InitViewModel) -> Self {
        Self { data }
    }
}

impl fmt::Display for InitView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.written {
            writeln!(f, "Config: {}", self.data.config_path)
        } else {
            writeln!(f, "Config already exists: {}", self.data.config_path)
        }
    }
}
