pub mod report;
pub mod system;

use owo_colors::OwoColorize;

use super::view_models::ViewStyle;

/// Pad `text` to `width` and colour it by outcome when colour is enabled.
pub(crate) fn outcome(text: &str, passed: Option<bool>, width: usize, style: ViewStyle) -> String {
    let padded = format!("{:<width$}", text, width = width);
    if !style.color {
        return padded;
    }
    match passed {
        Some(true) => padded.green().to_string(),
        Some(false) => padded.red().to_string(),
        None => padded.dimmed().to_string(),
    }
}

pub(crate) fn heading(text: &str, style: ViewStyle) -> String {
    if style.color {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}
