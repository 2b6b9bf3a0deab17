use std::fmt;

use super::{heading, outcome};
use crate::presentation::view_models::{
    CatalogViewModel, CheckViewModel, LabelViewModel, OptionViewModel, OptionsViewModel,
    UpdateViewModel, ViewStyle,
};

const KEY_WIDTH: usize = 28;

fn allowed_text(allowed: Option<bool>) -> &'static str {
    match allowed {
        Some(true) => "yes",
        Some(false) => "no",
        None => "-",
    }
}

fn write_options(
    f: &mut fmt::Formatter,
    options: &[OptionViewModel],
    with_allowed: bool,
    style: ViewStyle,
) -> fmt::Result {
    if options.is_empty() {
        return writeln!(f, "  (no options)");
    }

    for option in options {
        if with_allowed {
            writeln!(
                f,
                "  {:<KEY_WIDTH$} {} {}",
                option.key,
                outcome(allowed_text(option.allowed), option.allowed, 8, style),
                option.label
            )?;
        } else {
            writeln!(f, "  {:<KEY_WIDTH$} {}", option.key, option.label)?;
        }
    }
    Ok(())
}

// --------------------------------------------------------
// Catalog View
// --------------------------------------------------------

pub struct CatalogView<'a> {
    data: &'a CatalogViewModel,
    style: ViewStyle,
}

impl<'a> CatalogView<'a> {
    pub fn new(data: &'a CatalogViewModel, style: ViewStyle) -> Self {
        Self { data, style }
    }
}

impl fmt::Display for CatalogView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (index, dimension) in self.data.dimensions.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            writeln!(
                f,
                "{}",
                heading(&format!("{} ({})", dimension.dimension, self.data.subject), self.style)
            )?;
            write_options(f, &dimension.options, false, self.style)?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Options View
// --------------------------------------------------------

pub struct OptionsView<'a> {
    data: &'a OptionsViewModel,
    style: ViewStyle,
}

impl<'a> OptionsView<'a> {
    pub fn new(data: &'a OptionsViewModel, style: ViewStyle) -> Self {
        Self { data, style }
    }
}

impl fmt::Display for OptionsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "  {}",
            heading(
                &format!("{:<KEY_WIDTH$} {:<8} LABEL", "KEY", "ALLOWED"),
                self.style
            )
        )?;
        write_options(f, &self.data.options, true, self.style)
    }
}

// --------------------------------------------------------
// Check View
// --------------------------------------------------------

pub struct CheckView<'a> {
    data: &'a CheckViewModel,
    style: ViewStyle,
}

impl<'a> CheckView<'a> {
    pub fn new(data: &'a CheckViewModel, style: ViewStyle) -> Self {
        Self { data, style }
    }
}

impl fmt::Display for CheckView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for stage in &self.data.stages {
            let status = match stage.passed {
                Some(true) => "ok",
                Some(false) => "not allowed",
                None => "unset",
            };
            let label = match (&stage.label, &stage.value) {
                (Some(label), _) if !label.is_empty() => label.clone(),
                (_, Some(value)) => value.to_string(),
                _ => "-".to_string(),
            };
            writeln!(
                f,
                "{:<15} {:<36} {}",
                stage.dimension,
                label,
                outcome(status, stage.passed, 0, self.style)
            )?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Update View
// --------------------------------------------------------

pub struct UpdateView<'a> {
    data: &'a UpdateViewModel,
}

impl<'a> UpdateView<'a> {
    pub fn new(data: &'a UpdateViewModel) -> Self {
        Self { data }
    }
}

impl fmt::Display for UpdateView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(path) = &self.data.written_to {
            return writeln!(f, "Wrote patched report to {}", path);
        }

        let document = self.data.report.as_ref().unwrap_or(&self.data.patch);
        let pretty = serde_json::to_string_pretty(document).map_err(|_| fmt::Error)?;
        writeln!(f, "{}", pretty)
    }
}

// --------------------------------------------------------
// Label View
// --------------------------------------------------------

pub struct LabelView<'a> {
    data: &'a LabelViewModel,
}

impl<'a> LabelView<'a> {
    pub fn new(data: &'a LabelViewModel) -> Self {
        Self { data }
    }
}

impl fmt::Display for LabelView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.data.label)
    }
}
